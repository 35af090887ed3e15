use super::error::{FileError, MalformedKind, parse_float};
use super::tokens::TokenizedFile;
use super::traits::DataFile;
use crate::core::models::charges::Charges;
use std::io::BufRead;

/// One partial charge per line (first token), in trajectory atom order.
pub struct ChargeFile;

impl DataFile for ChargeFile {
    type Data = Charges;

    fn read_from(reader: &mut impl BufRead) -> Result<Charges, FileError> {
        let tokens = TokenizedFile::read_from(reader)?;
        let charges = tokens
            .raw_lines()
            .iter()
            .enumerate()
            .filter_map(|(i, line)| line.first().map(|token| (i + 1, token)))
            .map(|(line, token)| parse_float(token, line))
            .collect::<Result<Vec<_>, _>>()
            .map(Charges::new)?;
        if charges.is_empty() {
            return Err(FileError::malformed(1, MalformedKind::Empty));
        }
        Ok(charges)
    }
}
