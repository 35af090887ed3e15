//! Fixed conversion factors of the spectral pipeline.

/// Hz to wavenumbers (cm⁻¹), i.e. the inverse speed of light in cm/s.
pub const HZ_TO_INVCM: f64 = 3.335641e-11;

/// Femtoseconds to seconds.
pub const FS_TO_S: f64 = 1e-15;

/// Picoseconds to femtoseconds.
pub const PS_TO_FS: f64 = 1e3;
