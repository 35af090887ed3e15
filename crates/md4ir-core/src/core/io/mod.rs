//! Reading and writing the plain-text formats of the analysis pipeline.
//!
//! All formats are whitespace-tokenized text. [`tokens`] provides the two access patterns
//! (raw lines and fixed-width column rows); each format implements the [`traits::DataFile`]
//! interface on top of it, and output formats also [`traits::WritableFile`]. Files written
//! through [`traits::WritableFile::write_to_path`] appear
//! atomically: a failed write never leaves a partial output behind.

pub mod charges;
pub mod columns;
pub mod error;
pub mod spectrum;
pub mod tokens;
pub mod traits;
pub mod xyz;
