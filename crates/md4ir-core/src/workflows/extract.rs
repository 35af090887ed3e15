use super::load_trajectory;
use crate::core::models::selection::{AtomSelection, SelectionError, Site};
use crate::core::models::series::TimeSeries;
use crate::engine::error::EngineError;
use crate::engine::extraction::{centroid_track, measure};
use crate::engine::progress::{Progress, ProgressReporter};
use std::path::Path;
use tracing::{info, instrument};

/// What to extract from a trajectory.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionTarget {
    /// A bond, angle or dihedral, possibly through a centroid site.
    Geometry(AtomSelection),
    /// Coordinates of the midpoint of two atoms (0-based).
    Centroid(usize, usize),
}

impl ExtractionTarget {
    /// Builds a target from 1-based atom indices and an optional 1-based centroid pair.
    ///
    /// The centroid joins the selection as its last site; with no atoms it is exported on
    /// its own.
    pub fn from_one_based(
        atoms: &[usize],
        centroid: Option<(usize, usize)>,
    ) -> Result<Self, SelectionError> {
        let centroid = centroid
            .map(|(a, b)| Site::centroid_from_one_based(a, b))
            .transpose()?;

        match (atoms.is_empty(), centroid) {
            (true, Some(Site::Centroid(a, b))) => Ok(Self::Centroid(a, b)),
            _ => {
                let mut sites = atoms
                    .iter()
                    .map(|&i| Site::atom_from_one_based(i))
                    .collect::<Result<Vec<_>, _>>()?;
                sites.extend(centroid);
                AtomSelection::new(sites).map(Self::Geometry)
            }
        }
    }

    /// Short label used in output file names, e.g. `1-2-3`, `1-2-c3-4` or `c3-4`.
    pub fn label(&self) -> String {
        let site_label = |site: &Site| match *site {
            Site::Atom(i) => (i + 1).to_string(),
            Site::Centroid(a, b) => format!("c{}-{}", a + 1, b + 1),
        };
        match self {
            Self::Geometry(selection) => selection
                .sites()
                .iter()
                .map(site_label)
                .collect::<Vec<_>>()
                .join("-"),
            Self::Centroid(a, b) => site_label(&Site::Centroid(*a, *b)),
        }
    }
}

/// Loads the trajectory at `trajectory_path` and extracts `target` from every frame.
#[instrument(skip_all, name = "extract_workflow")]
pub fn run(
    trajectory_path: &Path,
    target: &ExtractionTarget,
    reporter: &ProgressReporter,
) -> Result<TimeSeries, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Loading trajectory",
    });
    let trajectory = load_trajectory(trajectory_path)?;
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Extracting geometry",
    });
    let series = match target {
        ExtractionTarget::Geometry(selection) => {
            info!("Measuring {} {}.", selection.geometry_name(), selection);
            measure(&trajectory, selection)?
        }
        ExtractionTarget::Centroid(a, b) => {
            info!("Tracking centroid of atoms {} and {}.", a + 1, b + 1);
            centroid_track(&trajectory, *a, *b)?
        }
    };
    reporter.report(Progress::PhaseFinish);

    Ok(series)
}
