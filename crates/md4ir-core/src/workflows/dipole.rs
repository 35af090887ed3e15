use super::load_trajectory;
use crate::core::io::charges::ChargeFile;
use crate::core::io::traits::DataFile;
use crate::core::models::series::TimeSeries;
use crate::engine::error::EngineError;
use crate::engine::extraction::dipole_moments;
use crate::engine::progress::{Progress, ProgressReporter};
use std::path::Path;
use tracing::{info, instrument};

/// Dipole moment `Σ qᵢ·rᵢ` of every frame of the trajectory.
#[instrument(skip_all, name = "dipole_workflow")]
pub fn run(
    trajectory_path: &Path,
    charges_path: &Path,
    reporter: &ProgressReporter,
) -> Result<TimeSeries, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Loading inputs",
    });
    let trajectory = load_trajectory(trajectory_path)?;
    let charges =
        ChargeFile::read_from_path(charges_path).map_err(|e| EngineError::file(charges_path, e))?;
    info!(
        "Loaded {} charges from '{}'.",
        charges.len(),
        charges_path.display()
    );
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Computing dipoles",
    });
    let dipoles = dipole_moments(&trajectory, &charges)?;
    reporter.report(Progress::PhaseFinish);

    Ok(dipoles)
}
