use crate::error::Result;
use md4ir::core::io::traits::WritableFile;
use md4ir::engine::error::EngineError;
use std::path::{Path, PathBuf};
use tracing::info;

/// `<name>_<suffix>.txt`
pub fn output_path(name: &str, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{}_{}.txt", name, suffix))
}

/// Writes `data` atomically in the format `F`.
pub fn write_output<F: WritableFile>(data: &F::Data, path: &Path) -> Result<()> {
    F::write_to_path(data, path).map_err(|e| EngineError::file(path, e))?;
    info!("Wrote '{}'.", path.display());
    Ok(())
}
