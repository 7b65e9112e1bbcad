use crate::config::PipelineConfig;
use crate::error::Result;
use crate::load::load_rows;
use crate::manifest::write_manifest;
use crate::resolve::resolve_entries;
use log::info;
use std::path::{Path, PathBuf};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub rows: usize,
    pub written: usize,
    pub skipped: usize,
    pub output: PathBuf,
}

/// Loads the CSV, keeps the rows whose video `exists`, and writes the manifest.
///
/// Nothing is written when loading fails.
pub fn run<F>(config: &PipelineConfig, exists: F) -> Result<Summary>
where
    F: Fn(&Path) -> bool,
{
    info!("building video manifest from {}", config.csv_path.display());

    let rows = load_rows(&config.csv_path, &config.column)?;
    let entries = resolve_entries(&rows, &config.videos_dir, &config.src_prefix, exists);
    write_manifest(&entries, &config.output_path)?;

    let summary = Summary {
        rows: rows.len(),
        written: entries.len(),
        skipped: rows.len() - entries.len(),
        output: config.output_path.clone(),
    };
    info!(
        "wrote {} videos to {} ({} skipped)",
        summary.written,
        summary.output.display(),
        summary.skipped
    );
    Ok(summary)
}
