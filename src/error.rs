use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading a city's trip export.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open trip data: {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed trip record at row {row} in {path}")]
    Record {
        path: PathBuf,
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid start time '{value}' at row {row} in {path}")]
    Timestamp {
        path: PathBuf,
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn timestamp_error_names_row_and_value() {
        let source = NaiveDateTime::parse_from_str("yesterday", "%Y-%m-%d %H:%M:%S").unwrap_err();
        let err = LoadError::Timestamp {
            path: PathBuf::from("chicago.csv"),
            row: 4,
            value: "yesterday".to_string(),
            source,
        };
        assert_eq!(
            err.to_string(),
            "Invalid start time 'yesterday' at row 4 in chicago.csv"
        );
    }
}
