use super::error::{FileError, MalformedKind, parse_float};
use super::tokens::TokenizedFile;
use super::traits::{DataFile, WritableFile};
use crate::core::models::spectrum::SpectrumResult;
use std::io::{BufRead, Write};

/// Spectrum output: `wavenumber intensity` per retained frequency bin.
pub struct SpectrumFile;

impl DataFile for SpectrumFile {
    type Data = SpectrumResult;

    fn read_from(reader: &mut impl BufRead) -> Result<SpectrumResult, FileError> {
        let tokens = TokenizedFile::read_from(reader)?;
        let mut wavenumbers = Vec::new();
        let mut intensities = Vec::new();
        for (i, line) in tokens.raw_lines().iter().enumerate() {
            match line.as_slice() {
                [] => continue,
                [wn, signal] => {
                    wavenumbers.push(parse_float(wn, i + 1)?);
                    intensities.push(parse_float(signal, i + 1)?);
                }
                other => {
                    return Err(FileError::malformed(
                        i + 1,
                        MalformedKind::ColumnCountMismatch {
                            expected: 2,
                            found: other.len(),
                        },
                    ));
                }
            }
        }
        Ok(SpectrumResult::new(wavenumbers, intensities))
    }
}

impl WritableFile for SpectrumFile {
    fn write_to(spectrum: &SpectrumResult, writer: &mut impl Write) -> Result<(), FileError> {
        for (wavenumber, intensity) in spectrum.iter() {
            writeln!(writer, "{:.6} {:.6}", wavenumber, intensity)?;
        }
        Ok(())
    }
}
