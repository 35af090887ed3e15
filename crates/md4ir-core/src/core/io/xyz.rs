use super::error::{FileError, MalformedKind, parse_float};
use super::tokens::TokenizedFile;
use super::traits::DataFile;
use crate::core::models::trajectory::{AtomRecord, Frame, Trajectory};
use nalgebra::Point3;
use std::io::BufRead;
use tracing::debug;

/// Multi-frame xyz trajectory.
///
/// Each frame block is `N + 2` lines: the atom count `N`, a comment line, then `N` atom
/// records `label x y z`. The file length must be a whole number of blocks.
pub struct XyzFile;

impl DataFile for XyzFile {
    type Data = Trajectory;

    fn read_from(reader: &mut impl BufRead) -> Result<Trajectory, FileError> {
        let tokens = TokenizedFile::read_from(reader)?;
        let lines = tokens.trimmed_lines();

        let header = lines
            .first()
            .ok_or(FileError::malformed(1, MalformedKind::Empty))?;
        let atom_count = parse_atom_count(header, 1)?;
        if atom_count == 0 {
            return Err(FileError::InconsistentTrajectory(
                "header declares zero atoms".to_string(),
            ));
        }

        if atom_count > lines.len() {
            return Err(FileError::InconsistentTrajectory(format!(
                "header declares {} atoms but the file has only {} lines",
                atom_count,
                lines.len()
            )));
        }

        let stride = atom_count + 2;
        if lines.len() % stride != 0 {
            return Err(FileError::InconsistentTrajectory(format!(
                "{} lines is not a multiple of the {}-line frame block ({} atoms + 2 header lines)",
                lines.len(),
                stride,
                atom_count
            )));
        }

        let mut frames = Vec::with_capacity(lines.len() / stride);
        for (frame_index, block) in lines.chunks(stride).enumerate() {
            let first_line = frame_index * stride + 1;
            let declared = parse_atom_count(&block[0], first_line)?;
            if declared != atom_count {
                return Err(FileError::InconsistentTrajectory(format!(
                    "frame {} declares {} atoms on line {}, expected {}",
                    frame_index + 1,
                    declared,
                    first_line,
                    atom_count
                )));
            }

            let atoms = block[2..]
                .iter()
                .enumerate()
                .map(|(i, record)| parse_atom_record(record, first_line + 2 + i))
                .collect::<Result<Vec<_>, _>>()?;
            frames.push(Frame::new(block[1].join(" "), atoms));
        }

        debug!(
            atoms = atom_count,
            frames = frames.len(),
            "Parsed xyz trajectory."
        );
        Trajectory::new(frames)
    }
}

fn parse_atom_count(tokens: &[String], line: usize) -> Result<usize, FileError> {
    let token = tokens.first().map(String::as_str).unwrap_or("");
    token.parse().map_err(|_| {
        FileError::malformed(
            line,
            MalformedKind::InvalidAtomCount {
                value: token.to_string(),
            },
        )
    })
}

fn parse_atom_record(tokens: &[String], line: usize) -> Result<AtomRecord, FileError> {
    if tokens.len() < 4 {
        return Err(FileError::malformed(
            line,
            MalformedKind::IncompleteAtomRecord {
                found: tokens.len(),
            },
        ));
    }
    let x = parse_float(&tokens[1], line)?;
    let y = parse_float(&tokens[2], line)?;
    let z = parse_float(&tokens[3], line)?;
    Ok(AtomRecord::new(tokens[0].as_str(), Point3::new(x, y, z)))
}
