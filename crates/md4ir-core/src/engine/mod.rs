//! # Engine Module
//!
//! Computation on loaded data: geometric observables from trajectories, spectra from time
//! series, and the combination of replicate spectra.
//!
//! - **Configuration** ([`config`]) - `SpectrumConfig` and its validating builder
//! - **Extraction** ([`extraction`]) - bonds, angles, dihedrals, centroids and dipoles per frame
//! - **Spectral engine** ([`spectral`]) - windowed-autocorrelation spectrum of one series
//! - **Aggregation** ([`aggregate`]) - single and replicate-averaged spectrum groups
//! - **Progress Monitoring** ([`progress`]) - callback-based progress events
//! - **Error Handling** ([`error`]) - `EngineError` and the `ErrorKind` classification

pub mod aggregate;
pub mod config;
pub mod error;
pub mod extraction;
pub mod progress;
pub mod spectral;
pub(crate) mod window;
