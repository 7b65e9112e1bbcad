use serde::Serialize;

/// One record of the input CSV. Only the display name is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub exercise_name: String,
}

/// A playable video listed in the manifest.
///
/// Field order is the key order of the emitted JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoEntry {
    pub id: usize,
    pub title: String,
    pub number: String,
    pub src: String,
}

/// 1-based position of a row, padded to at least three digits.
pub(crate) fn video_number(index: usize) -> String {
    format!("{:03}", index + 1)
}
