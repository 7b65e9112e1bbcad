use std::path::PathBuf;

pub const DEFAULT_CSV_PATH: &str = "../data.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "videos.json";
pub const DEFAULT_VIDEOS_DIR: &str = "videos";
pub const DEFAULT_COLUMN: &str = "ejercicio";
pub const DEFAULT_SRC_PREFIX: &str = "videos";

/// Locations and names used by a single manifest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub csv_path: PathBuf,
    pub videos_dir: PathBuf,
    pub output_path: PathBuf,
    /// Header of the column holding the exercise display name.
    pub column: String,
    /// Directory prefix of `src` as seen by the web page.
    pub src_prefix: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            videos_dir: PathBuf::from(DEFAULT_VIDEOS_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            column: DEFAULT_COLUMN.to_string(),
            src_prefix: DEFAULT_SRC_PREFIX.to_string(),
        }
    }
}
