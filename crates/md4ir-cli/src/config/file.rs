use crate::error::{CliError, Result};
use md4ir::engine::config::SpectralMethod;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileSpectrumConfig {
    pub scale: Option<f64>,
    pub timestep: Option<f64>,
    pub time_start: Option<f64>,
    pub time_end: Option<f64>,
    pub wn_start: Option<f64>,
    pub wn_end: Option<f64>,
    pub method: Option<SpectralMethod>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub spectrum: Option<FileSpectrumConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_kebab_case_spectrum_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("md4ir.toml");
        fs::write(
            &path,
            r#"
            [spectrum]
            scale = 0.97
            time-end = 10.0
            wn-start = 500.0
            method = "numpy"
            "#,
        )
        .unwrap();

        let spectrum = FileConfig::from_file(&path).unwrap().spectrum.unwrap();
        assert_eq!(spectrum.scale, Some(0.97));
        assert_eq!(spectrum.time_end, Some(10.0));
        assert_eq!(spectrum.wn_start, Some(500.0));
        assert_eq!(spectrum.method, Some(SpectralMethod::Autocorrelation));
        assert_eq!(spectrum.timestep, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("md4ir.toml");
        fs::write(&path, "[spectrum]\ntime_end = 10.0\n").unwrap();
        assert!(matches!(
            FileConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            FileConfig::from_file(&dir.path().join("absent.toml")),
            Err(CliError::Io(_))
        ));
    }
}
