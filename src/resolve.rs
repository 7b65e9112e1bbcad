use crate::sanitize::sanitize_filename;
use crate::video::{video_number, Row, VideoEntry};
use log::warn;
use std::path::Path;

/// Existence check backed by the real filesystem.
pub fn exists_on_disk(path: &Path) -> bool {
    path.exists()
}

/// Pairs each row with its expected video and keeps the rows whose video exists.
///
/// The filename is `<number>-<sanitized name>.mp4`, where `number` is the
/// 1-based row position. `exists` is asked about `videos_dir/<filename>`;
/// accepted entries point at `<src_prefix>/<filename>`. Rows without a video
/// are logged and skipped, order is otherwise preserved.
pub fn resolve_entries<F>(
    rows: &[Row],
    videos_dir: &Path,
    src_prefix: &str,
    exists: F,
) -> Vec<VideoEntry>
where
    F: Fn(&Path) -> bool,
{
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let number = video_number(index);
            let filename = format!("{}-{}.mp4", number, sanitize_filename(&row.exercise_name));

            if !exists(&videos_dir.join(&filename)) {
                warn!("video not found, skipping: {}", filename);
                return None;
            }

            Some(VideoEntry {
                id: index,
                title: row.exercise_name.clone(),
                src: web_path(src_prefix, &filename),
                number,
            })
        })
        .collect()
}

fn web_path(prefix: &str, filename: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        filename.to_string()
    } else {
        format!("{}/{}", prefix, filename)
    }
}
