use crate::error::{Error, Result};
use crate::video::Row;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads every row of the CSV at `path`, keeping only the `column` field.
///
/// Rows come back in file order. Fails with `MissingInputFile` when the file
/// does not exist and with `SchemaError` when the header lacks `column`.
pub fn load_rows<P: AsRef<Path>>(path: P, column: &str) -> Result<Vec<Row>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::MissingInputFile {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;

    read_rows(file, path, column)
}

fn read_rows<R: Read>(reader: R, source: &Path, column: &str) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let position = reader
        .headers()?
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| Error::SchemaError {
            path: source.to_path_buf(),
            column: column.to_string(),
        })?;

    reader
        .records()
        .map(|record| {
            let record = record?;
            Ok(Row {
                exercise_name: record.get(position).unwrap_or_default().to_string(),
            })
        })
        .collect()
}
