pub mod dipole;
pub mod extract;
pub mod spectrum;
