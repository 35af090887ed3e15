//! # Workflows Module
//!
//! Top-level entry points of the library. Each workflow loads its input files, runs the
//! engine, reports progress and hands back values; writing results is left to the caller.
//!
//! - **Extraction** ([`extract`]) - bond/angle/dihedral or centroid series from a trajectory
//! - **Dipole** ([`dipole`]) - dipole moment series from a trajectory and a charge file
//! - **Spectrum** ([`spectrum`]) - one spectrum per file group, with a failure policy

pub mod dipole;
pub mod extract;
pub mod spectrum;

use crate::core::io::traits::DataFile;
use crate::core::io::xyz::XyzFile;
use crate::core::models::trajectory::Trajectory;
use crate::engine::error::EngineError;
use std::path::Path;
use tracing::info;

fn load_trajectory(path: &Path) -> Result<Trajectory, EngineError> {
    let trajectory = XyzFile::read_from_path(path).map_err(|e| EngineError::file(path, e))?;
    info!(
        "Loaded trajectory '{}': {} frames of {} atoms.",
        path.display(),
        trajectory.frame_count(),
        trajectory.atom_count()
    );
    Ok(trajectory)
}
