//! Value types of the analysis pipeline.
//!
//! - [`trajectory`] - Frames of atom records read from an xyz trajectory
//! - [`selection`] - Atom/centroid sites and the bond, angle or dihedral they define
//! - [`series`] - Scalar or 3-vector time series fed to the spectral engine
//! - [`charges`] - Per-atom partial charges used for dipole moments
//! - [`spectrum`] - Wavenumber axis and intensities produced by the spectral engine

pub mod charges;
pub mod selection;
pub mod series;
pub mod spectrum;
pub mod trajectory;
