use clap::Parser;
use exercise_video_manifest::{
    exists_on_disk, run, PipelineConfig, DEFAULT_COLUMN, DEFAULT_CSV_PATH, DEFAULT_OUTPUT_PATH,
    DEFAULT_SRC_PREFIX, DEFAULT_VIDEOS_DIR,
};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about = "Build the exercise video manifest", long_about = None)]
struct Cli {
    /// CSV listing the exercises
    #[arg(long = "csv", default_value = DEFAULT_CSV_PATH)]
    csv_path: PathBuf,

    /// Directory holding the `<number>-<name>.mp4` files
    #[arg(long, default_value = DEFAULT_VIDEOS_DIR)]
    videos_dir: PathBuf,

    /// Manifest to write
    #[arg(long = "output", default_value = DEFAULT_OUTPUT_PATH)]
    output_path: PathBuf,

    /// CSV column with the exercise name
    #[arg(long, default_value = DEFAULT_COLUMN)]
    column: String,

    /// Directory prefix of `src` in the manifest
    #[arg(long, default_value = DEFAULT_SRC_PREFIX)]
    src_prefix: String,
}

impl From<Cli> for PipelineConfig {
    fn from(cli: Cli) -> Self {
        PipelineConfig {
            csv_path: cli.csv_path,
            videos_dir: cli.videos_dir,
            output_path: cli.output_path,
            column: cli.column,
            src_prefix: cli.src_prefix,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = PipelineConfig::from(Cli::parse());
    match run(&config, exists_on_disk) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
