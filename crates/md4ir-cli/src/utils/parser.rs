use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Atom list cannot be empty.")]
    EmptyAtomList,

    #[error("Invalid atom index '{token}' in '{input}'. Expected integers separated by commas.")]
    InvalidIndex { input: String, token: String },

    #[error("Invalid centroid '{0}'. Expected exactly two atom indices (e.g., '3,4').")]
    InvalidCentroid(String),

    #[error("File group '{0}' contains an empty path.")]
    EmptyPath(String),

    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidAssignment(String),
}

/// Parses `"1,2,3"` into `[1, 2, 3]`. Indices stay 1-based; range checks happen later.
pub fn parse_index_list(input: &str) -> Result<Vec<usize>, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyAtomList);
    }
    input
        .split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<usize>().map_err(|_| ParseError::InvalidIndex {
                input: input.to_string(),
                token: token.to_string(),
            })
        })
        .collect()
}

pub fn parse_centroid(input: &str) -> Result<(usize, usize), ParseError> {
    match parse_index_list(input)?.as_slice() {
        &[a, b] => Ok((a, b)),
        _ => Err(ParseError::InvalidCentroid(input.to_string())),
    }
}

/// Splits a comma-separated replicate group into paths.
pub fn parse_file_group(input: &str) -> Result<Vec<PathBuf>, ParseError> {
    input
        .split(',')
        .map(str::trim)
        .map(|part| {
            if part.is_empty() {
                Err(ParseError::EmptyPath(input.to_string()))
            } else {
                Ok(PathBuf::from(part))
            }
        })
        .collect()
}

/// Splits `KEY=VALUE` at the first `=`.
pub fn parse_assignment(input: &str) -> Result<(&str, &str), ParseError> {
    match input.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(ParseError::InvalidAssignment(input.to_string())),
    }
}
