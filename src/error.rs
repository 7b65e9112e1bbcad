use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("input CSV not found: {}", path.display())]
    MissingInputFile { path: PathBuf },

    #[error("column '{column}' not found in {}", path.display())]
    SchemaError { path: PathBuf, column: String },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status reported by the binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::MissingInputFile { .. } => 2,
            Error::SchemaError { .. } => 3,
            Error::Csv(_) | Error::Io(_) | Error::Json(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_conditions_have_distinct_exit_codes() {
        let missing = Error::MissingInputFile {
            path: PathBuf::from("data.csv"),
        };
        let schema = Error::SchemaError {
            path: PathBuf::from("data.csv"),
            column: "ejercicio".to_string(),
        };
        let io = Error::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));

        assert_eq!(missing.exit_code(), 2);
        assert_eq!(schema.exit_code(), 3);
        assert_eq!(io.exit_code(), 1);
        assert_eq!(schema.to_string(), "column 'ejercicio' not found in data.csv");
    }
}
