use super::error::EngineError;
use crate::core::geometry::{bond_angle, bond_length, dihedral_angle, dipole_moment, midpoint};
use crate::core::models::charges::Charges;
use crate::core::models::selection::{AtomSelection, SelectionError, Site};
use crate::core::models::series::TimeSeries;
use crate::core::models::trajectory::{Frame, Trajectory};
use nalgebra::Point3;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Bond length, angle (degrees) or dihedral (degrees) of `selection` in every frame.
///
/// # Errors
///
/// Fails when a site references an atom outside the trajectory, or when an angle or
/// dihedral is undefined in some frame because atoms coincide.
#[instrument(skip_all, name = "measure", fields(selection = %selection))]
pub fn measure(
    trajectory: &Trajectory,
    selection: &AtomSelection,
) -> Result<TimeSeries, SelectionError> {
    selection.validate_against(trajectory.atom_count())?;

    #[cfg(not(feature = "parallel"))]
    let iterator = trajectory.frames().iter().enumerate();

    #[cfg(feature = "parallel")]
    let iterator = trajectory.frames().par_iter().enumerate();

    let values = iterator
        .map(|(index, frame)| {
            measure_frame(frame, selection).ok_or_else(|| degenerate(selection, index + 1))
        })
        .collect::<Result<Vec<f64>, SelectionError>>()?;

    debug!(
        geometry = selection.geometry_name(),
        frames = values.len(),
        "Measured selection."
    );
    Ok(TimeSeries::Scalar(values))
}

/// Midpoint of atoms `a` and `b` (0-based) in every frame, as a vector series.
pub fn centroid_track(
    trajectory: &Trajectory,
    a: usize,
    b: usize,
) -> Result<TimeSeries, SelectionError> {
    let site = Site::Centroid(a, b);
    check_site(site, trajectory.atom_count())?;
    let track = trajectory
        .frames()
        .iter()
        .map(|frame| site_position(frame, site).coords)
        .collect();
    Ok(TimeSeries::Vector(track))
}

/// Charge-weighted position sum of every frame.
///
/// # Errors
///
/// Returns [`EngineError::ChargeCountMismatch`] unless there is exactly one charge per atom.
#[instrument(skip_all, name = "dipole_moments")]
pub fn dipole_moments(
    trajectory: &Trajectory,
    charges: &Charges,
) -> Result<TimeSeries, EngineError> {
    if charges.len() != trajectory.atom_count() {
        return Err(EngineError::ChargeCountMismatch {
            charges: charges.len(),
            atoms: trajectory.atom_count(),
        });
    }
    debug!(net_charge = charges.net_charge(), "Charges match the trajectory.");

    let dipoles = trajectory
        .frames()
        .iter()
        .map(|frame| dipole_moment(charges.as_slice(), &frame.positions()))
        .collect();
    Ok(TimeSeries::Vector(dipoles))
}

fn measure_frame(frame: &Frame, selection: &AtomSelection) -> Option<f64> {
    let p = |site: &Site| site_position(frame, *site);
    match selection {
        AtomSelection::Bond([a, b]) => Some(bond_length(&p(a), &p(b))),
        AtomSelection::Angle([a, b, c]) => bond_angle(&p(a), &p(b), &p(c)),
        AtomSelection::Dihedral([a, b, c, d]) => dihedral_angle(&p(a), &p(b), &p(c), &p(d)),
    }
}

/// Sites must have been checked against the frame's atom count.
fn site_position(frame: &Frame, site: Site) -> Point3<f64> {
    let atoms = frame.atoms();
    match site {
        Site::Atom(i) => atoms[i].position,
        Site::Centroid(a, b) => midpoint(&atoms[a].position, &atoms[b].position),
    }
}

fn check_site(site: Site, atom_count: usize) -> Result<(), SelectionError> {
    match site.atom_indices().into_iter().find(|&i| i >= atom_count) {
        Some(index) => Err(SelectionError::AtomOutOfRange {
            index: index + 1,
            atom_count,
        }),
        None => Ok(()),
    }
}

fn degenerate(selection: &AtomSelection, frame: usize) -> SelectionError {
    let reason = match selection {
        AtomSelection::Dihedral(_) => "the central bond has zero length",
        _ => "an arm has zero length",
    };
    SelectionError::DegenerateGeometry {
        geometry: selection.geometry_name(),
        selection: selection.to_string(),
        frame,
        reason,
    }
}
