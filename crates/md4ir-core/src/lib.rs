//! # md4ir Core Library
//!
//! Vibrational spectra and geometric observables from molecular-dynamics trajectories.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Value types (`Trajectory`, `TimeSeries`, `AtomSelection`,
//!   `SpectrumResult`), the fixed unit constants, pure geometry functions, and the file
//!   formats that produce and consume those values.
//!
//! - **[`engine`]: The Numerical Core.** Geometry extraction over whole trajectories, the
//!   windowed-autocorrelation spectral pipeline, and replicate aggregation of spectra.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures (extract a coordinate, compute
//!   dipoles, compute spectra for many file groups) that load inputs, run the engine and
//!   report progress.

pub mod core;
pub mod engine;
pub mod workflows;
