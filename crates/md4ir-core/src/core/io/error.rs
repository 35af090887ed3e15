use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed input on line {line}: {kind}")]
    MalformedInput { line: usize, kind: MalformedKind },
    #[error("Inconsistent trajectory: {0}")]
    InconsistentTrajectory(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedKind {
    #[error("file contains no data")]
    Empty,
    #[error("invalid floating-point value '{value}'")]
    InvalidFloat { value: String },
    #[error("invalid atom count '{value}'")]
    InvalidAtomCount { value: String },
    #[error("{found} columns are not supported (expected 1 or at least 3)")]
    UnsupportedColumnCount { found: usize },
    #[error("expected {expected} columns as on the first line, found {found}")]
    ColumnCountMismatch { expected: usize, found: usize },
    #[error("atom record needs a label and 3 coordinates, found {found} fields")]
    IncompleteAtomRecord { found: usize },
}

impl FileError {
    pub(crate) fn malformed(line: usize, kind: MalformedKind) -> Self {
        Self::MalformedInput { line, kind }
    }
}

/// Parses `token` (found on the 1-based `line`) as a float.
pub(crate) fn parse_float(token: &str, line: usize) -> Result<f64, FileError> {
    token.parse::<f64>().map_err(|_| {
        FileError::malformed(
            line,
            MalformedKind::InvalidFloat {
                value: token.to_string(),
            },
        )
    })
}
