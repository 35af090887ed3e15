use crate::core::io::error::FileError;
use nalgebra::Point3;

#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub label: String,
    pub position: Point3<f64>,
}

impl AtomRecord {
    pub fn new(label: impl Into<String>, position: Point3<f64>) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }
}

/// One snapshot of atom positions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub comment: String,
    atoms: Vec<AtomRecord>,
}

impl Frame {
    pub fn new(comment: impl Into<String>, atoms: Vec<AtomRecord>) -> Self {
        Self {
            comment: comment.into(),
            atoms,
        }
    }

    pub fn atoms(&self) -> &[AtomRecord] {
        &self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn positions(&self) -> Vec<Point3<f64>> {
        self.atoms.iter().map(|a| a.position).collect()
    }
}

/// Frames in file order, all with the same number of atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    atom_count: usize,
    frames: Vec<Frame>,
}

impl Trajectory {
    pub fn new(frames: Vec<Frame>) -> Result<Self, FileError> {
        let atom_count = frames.first().map_or(0, Frame::atom_count);
        if atom_count == 0 {
            return Err(FileError::InconsistentTrajectory(
                "trajectory must contain at least one frame with at least one atom".to_string(),
            ));
        }
        if let Some((index, frame)) = frames
            .iter()
            .enumerate()
            .find(|(_, f)| f.atom_count() != atom_count)
        {
            return Err(FileError::InconsistentTrajectory(format!(
                "frame {} has {} atoms, expected {}",
                index + 1,
                frame.atom_count(),
                atom_count
            )));
        }
        Ok(Self { atom_count, frames })
    }

    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}
