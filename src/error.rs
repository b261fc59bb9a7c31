use std::path::PathBuf;

/// Input-shape and collaborator failures. Raised before any output is written
/// wherever the check can be made up front.
#[derive(Debug, thiserror::Error)]
pub enum ChunkError {
    #[error("{table}: line {line} has {found} columns, expected {expected}")]
    ColumnCount {
        table: String,
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("{table}: missing required column '{column}'")]
    MissingColumn { table: String, column: &'static str },

    #[error("{table}: line {line}: cannot parse {field} from '{value}'")]
    InvalidField {
        table: String,
        line: usize,
        field: String,
        value: String,
    },

    #[error("{0}: table has no data rows")]
    EmptyTable(String),

    #[error("no path component containing '{marker}' in {path}")]
    MissingSubject { marker: String, path: PathBuf },

    #[error("screen size must be two positive integers (width height), got {0:?}")]
    InvalidScreenSize(Vec<u32>),

    #[error("comparator failed: {0}")]
    Comparator(String),

    #[error("could not fetch {path}: {reason}")]
    Fetch { path: PathBuf, reason: String },

    #[error("{table}: has {found} rows, expected {expected} like the first table")]
    RowCount {
        table: String,
        found: usize,
        expected: usize,
    },

    #[error("expected {expected} run tables, found {found}")]
    RunCount { expected: usize, found: usize },
}
