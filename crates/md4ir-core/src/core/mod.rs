//! # Core Module
//!
//! Fundamental building blocks shared by the engine and the workflows.
//!
//! - **Unit Constants** ([`constants`]) - Hz to cm⁻¹ and time-unit conversion factors
//! - **Geometry** ([`geometry`]) - Distances, angles, dihedrals, midpoints and dipoles of points
//! - **Data Model** ([`models`]) - Trajectories, time series, selections, charges and spectra
//! - **File I/O** ([`io`]) - Tokenized text formats (xyz, column data, charges, spectra)
//!
//! Every type in this module is a value: it is either loaded from a file or computed,
//! and never mutated after construction.

pub mod constants;
pub mod geometry;
pub mod io;
pub mod models;
