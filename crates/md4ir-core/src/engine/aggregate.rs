use super::error::EngineError;
use super::spectral::{SpectralEngine, averaged, check_same_axis};
use crate::core::io::columns::ColumnFile;
use crate::core::io::traits::DataFile;
use crate::core::models::series::TimeSeries;
use crate::core::models::spectrum::SpectrumResult;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// How the files of one group are turned into a spectrum.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregationStrategy {
    /// One file, spectrum normalized on its own.
    Single(PathBuf),
    /// Replicate runs: unnormalized spectra are summed, then the sum is normalized.
    Averaged(Vec<PathBuf>),
}

impl AggregationStrategy {
    /// `None` for an empty list; one path is `Single`, more are `Averaged`.
    pub fn from_paths(mut paths: Vec<PathBuf>) -> Option<Self> {
        match paths.len() {
            0 => None,
            1 => paths.pop().map(Self::Single),
            _ => Some(Self::Averaged(paths)),
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        match self {
            Self::Single(path) => std::slice::from_ref(path),
            Self::Averaged(paths) => paths,
        }
    }
}

/// Files combined into one output spectrum, and the name that output carries.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumGroup {
    pub name: String,
    pub strategy: AggregationStrategy,
}

impl SpectrumGroup {
    pub fn new(name: impl Into<String>, strategy: AggregationStrategy) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }

    /// Names the group after its first file.
    pub fn with_derived_name(strategy: AggregationStrategy) -> Self {
        let name = strategy
            .paths()
            .first()
            .map(|p| derived_name(p))
            .unwrap_or_default();
        Self { name, strategy }
    }
}

/// `path` without its extension: `runs/dipole.txt` becomes `runs/dipole`.
pub fn derived_name(path: &Path) -> String {
    path.with_extension("").to_string_lossy().into_owned()
}

/// Loads the group's files and computes its normalized spectrum.
///
/// # Errors
///
/// Any replicate failing (unreadable, malformed, empty window, axis mismatch) fails the
/// whole group.
#[instrument(skip_all, name = "aggregate", fields(group = %group.name))]
pub fn aggregate(
    group: &SpectrumGroup,
    engine: &SpectralEngine,
) -> Result<SpectrumResult, EngineError> {
    match &group.strategy {
        AggregationStrategy::Single(path) => {
            let series = load_series(path)?;
            engine
                .compute(&series, true)
                .map_err(|e| EngineError::spectrum(path, e))
        }
        AggregationStrategy::Averaged(paths) => {
            info!(replicates = paths.len(), "Averaging replicate spectra.");
            let mut spectra: Vec<SpectrumResult> = Vec::with_capacity(paths.len());
            for path in paths {
                let series = load_series(path)?;
                let spectrum = engine
                    .compute(&series, false)
                    .map_err(|e| EngineError::spectrum(path, e))?;
                if let Some(first) = spectra.first() {
                    check_same_axis(first, &spectrum)
                        .map_err(|e| EngineError::spectrum(path, e))?;
                }
                spectra.push(spectrum);
            }
            let group_path = paths.first().cloned().unwrap_or_default();
            averaged(spectra).map_err(|e| EngineError::spectrum(group_path, e))
        }
    }
}

fn load_series(path: &Path) -> Result<TimeSeries, EngineError> {
    let series = ColumnFile::read_from_path(path).map_err(|e| EngineError::file(path, e))?;
    debug!(
        path = %path.display(),
        samples = series.len(),
        arity = series.arity(),
        "Loaded time series."
    );
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{FS_TO_S, HZ_TO_INVCM};
    use crate::core::io::traits::WritableFile;
    use crate::engine::config::{SpectrumConfig, SpectrumConfigBuilder};
    use crate::engine::error::ErrorKind;
    use std::f64::consts::PI;
    use tempfile::{TempDir, tempdir};

    fn config() -> SpectrumConfig {
        SpectrumConfigBuilder::new()
            .timestep_fs(0.5)
            .time_window_ps(0.0, 20.0)
            .wavenumber_range(0.0, 4000.0)
            .build()
            .unwrap()
    }

    fn write_sinusoid(dir: &TempDir, name: &str, wavenumber: f64, samples: usize) -> PathBuf {
        let frequency_hz = wavenumber / HZ_TO_INVCM;
        let values = (0..samples)
            .map(|i| (2.0 * PI * frequency_hz * i as f64 * 0.5 * FS_TO_S).sin())
            .collect();
        let path = dir.path().join(name);
        ColumnFile::write_to_path(&TimeSeries::Scalar(values), &path).unwrap();
        path
    }

    #[test]
    fn from_paths_picks_strategy_by_count() {
        assert_eq!(AggregationStrategy::from_paths(Vec::new()), None);
        assert_eq!(
            AggregationStrategy::from_paths(vec!["a.txt".into()]),
            Some(AggregationStrategy::Single("a.txt".into()))
        );
        assert!(matches!(
            AggregationStrategy::from_paths(vec!["a.txt".into(), "b.txt".into()]),
            Some(AggregationStrategy::Averaged(p)) if p.len() == 2
        ));
    }

    #[test]
    fn derived_name_strips_only_the_extension() {
        assert_eq!(derived_name(Path::new("runs/dipole.txt")), "runs/dipole");
        assert_eq!(derived_name(Path::new("bond")), "bond");
        let group = SpectrumGroup::with_derived_name(AggregationStrategy::Averaged(vec![
            "r1.dat".into(),
            "r2.dat".into(),
        ]));
        assert_eq!(group.name, "r1");
    }

    #[test]
    fn averaging_identical_replicates_equals_single_spectrum() {
        let dir = tempdir().unwrap();
        let a = write_sinusoid(&dir, "a.txt", 1200.0, 1500);
        let b = write_sinusoid(&dir, "b.txt", 1200.0, 1500);
        let config = config();
        let engine = SpectralEngine::new(&config);

        let single = aggregate(
            &SpectrumGroup::new("a", AggregationStrategy::Single(a.clone())),
            &engine,
        )
        .unwrap();
        let average = aggregate(
            &SpectrumGroup::new("ab", AggregationStrategy::Averaged(vec![a, b])),
            &engine,
        )
        .unwrap();

        assert_eq!(single.wavenumbers, average.wavenumbers);
        for (s, a) in single.intensities.iter().zip(&average.intensities) {
            assert!((s - a).abs() < 1e-12);
        }
    }

    #[test]
    fn replicates_of_different_length_are_an_axis_mismatch() {
        let dir = tempdir().unwrap();
        let a = write_sinusoid(&dir, "a.txt", 1200.0, 1500);
        let b = write_sinusoid(&dir, "b.txt", 1200.0, 1400);
        let config = config();
        let group = SpectrumGroup::new("ab", AggregationStrategy::Averaged(vec![a, b.clone()]));

        let err = aggregate(&group, &SpectralEngine::new(&config)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AxisMismatch);
        assert!(matches!(err, EngineError::Spectrum { ref path, .. } if *path == b));
    }

    #[test]
    fn missing_replicate_fails_the_whole_group() {
        let dir = tempdir().unwrap();
        let a = write_sinusoid(&dir, "a.txt", 1200.0, 1500);
        let missing = dir.path().join("missing.txt");
        let config = config();
        let group = SpectrumGroup::new("ab", AggregationStrategy::Averaged(vec![a, missing]));

        let err = aggregate(&group, &SpectralEngine::new(&config)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
