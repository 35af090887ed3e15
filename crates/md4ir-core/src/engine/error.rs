use super::spectral::SpectrumError;
use crate::core::io::error::FileError;
use crate::core::models::selection::SelectionError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of every failure the library can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    MalformedInput,
    InconsistentTrajectory,
    InvalidSelection,
    EmptyWindow,
    DegenerateSignal,
    AxisMismatch,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Io => "I/O",
            ErrorKind::MalformedInput => "malformed input",
            ErrorKind::InconsistentTrajectory => "inconsistent trajectory",
            ErrorKind::InvalidSelection => "invalid selection",
            ErrorKind::EmptyWindow => "empty window",
            ErrorKind::DegenerateSignal => "degenerate signal",
            ErrorKind::AxisMismatch => "axis mismatch",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to process file '{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: FileError,
    },

    #[error("Invalid atom selection: {0}")]
    Selection(#[from] SelectionError),

    #[error("Charge file has {charges} entries but the trajectory has {atoms} atoms")]
    ChargeCountMismatch { charges: usize, atoms: usize },

    #[error("Spectrum of '{path}' failed: {source}")]
    Spectrum {
        path: PathBuf,
        #[source]
        source: SpectrumError,
    },
}

impl EngineError {
    pub fn file(path: impl Into<PathBuf>, source: FileError) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }

    pub fn spectrum(path: impl Into<PathBuf>, source: SpectrumError) -> Self {
        Self::Spectrum {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::File { source, .. } => source.kind(),
            EngineError::Selection(_) => ErrorKind::InvalidSelection,
            EngineError::ChargeCountMismatch { .. } => ErrorKind::InconsistentTrajectory,
            EngineError::Spectrum { source, .. } => source.kind(),
        }
    }
}

impl FileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FileError::Io(_) => ErrorKind::Io,
            FileError::MalformedInput { .. } => ErrorKind::MalformedInput,
            FileError::InconsistentTrajectory(_) => ErrorKind::InconsistentTrajectory,
        }
    }
}

impl SpectrumError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SpectrumError::EmptyWindow { .. } => ErrorKind::EmptyWindow,
            SpectrumError::DegenerateSignal => ErrorKind::DegenerateSignal,
            SpectrumError::AxisMismatch { .. } => ErrorKind::AxisMismatch,
        }
    }
}
