mod config;
mod error;
mod load;
mod manifest;
mod pipeline;
mod resolve;
mod sanitize;
mod video;

pub use config::{
    PipelineConfig, DEFAULT_COLUMN, DEFAULT_CSV_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_SRC_PREFIX,
    DEFAULT_VIDEOS_DIR,
};
pub use error::{Error, Result};
pub use load::load_rows;
pub use manifest::write_manifest;
pub use pipeline::{run, Summary};
pub use resolve::{exists_on_disk, resolve_entries};
pub use sanitize::sanitize_filename;
pub use video::{Row, VideoEntry};
