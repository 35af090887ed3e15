use crate::core::models::spectrum::SpectrumResult;
use crate::engine::aggregate::{SpectrumGroup, aggregate};
use crate::engine::config::SpectrumConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::spectral::SpectralEngine;
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// What happens to the remaining groups when one fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Every group is computed; failures are returned alongside successes.
    #[default]
    ContinueOnError,
    /// The first failure aborts the run and is returned as the error.
    FailFast,
}

#[derive(Debug)]
pub struct GroupOutcome {
    pub name: String,
    pub result: Result<SpectrumResult, EngineError>,
}

impl GroupOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Computes one normalized spectrum per group, in group order.
///
/// Groups are independent; with the `parallel` feature they run on the rayon pool.
///
/// # Errors
///
/// Only under [`FailurePolicy::FailFast`], with the first failing group's error.
#[instrument(skip_all, name = "spectrum_workflow", fields(groups = groups.len()))]
pub fn run(
    groups: &[SpectrumGroup],
    config: &SpectrumConfig,
    policy: FailurePolicy,
    reporter: &ProgressReporter,
) -> Result<Vec<GroupOutcome>, EngineError> {
    info!(
        "Computing {} spectra ({} method, {} fs timestep, {}-{} ps, {}-{} cm-1, scale {}).",
        groups.len(),
        config.method,
        config.timestep_fs,
        config.time_window.start_ps,
        config.time_window.end_ps,
        config.wavenumber_range.start,
        config.wavenumber_range.end,
        config.scale
    );
    let engine = SpectralEngine::new(config);

    let process = |group: &SpectrumGroup| -> GroupOutcome {
        let result = aggregate(group, &engine);
        if let Err(e) = &result {
            warn!(group = %group.name, kind = %e.kind(), "Spectrum failed: {}", e);
        }
        reporter.report(Progress::GroupFinished {
            name: group.name.clone(),
            succeeded: result.is_ok(),
        });
        GroupOutcome {
            name: group.name.clone(),
            result,
        }
    };

    reporter.report(Progress::GroupsStart {
        total: groups.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = groups.iter();

    #[cfg(feature = "parallel")]
    let iterator = groups.par_iter();

    let outcomes = match policy {
        FailurePolicy::ContinueOnError => {
            Ok(iterator.map(|group| process(group)).collect::<Vec<_>>())
        }
        FailurePolicy::FailFast => iterator
            .map(|group| {
                let outcome = process(group);
                outcome.result.map(|spectrum| GroupOutcome {
                    name: outcome.name,
                    result: Ok(spectrum),
                })
            })
            .collect::<Result<Vec<_>, EngineError>>(),
    };
    reporter.report(Progress::GroupsFinish);

    let outcomes: Vec<GroupOutcome> = outcomes?;
    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    info!("Finished {} spectra, {} failed.", outcomes.len(), failed);
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::columns::ColumnFile;
    use crate::core::io::traits::WritableFile;
    use crate::core::models::series::TimeSeries;
    use crate::engine::aggregate::AggregationStrategy;
    use crate::engine::config::SpectrumConfigBuilder;
    use crate::engine::error::ErrorKind;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::{TempDir, tempdir};

    fn config() -> SpectrumConfig {
        SpectrumConfigBuilder::new()
            .timestep_fs(0.5)
            .time_window_ps(0.0, 20.0)
            .wavenumber_range(0.0, 4000.0)
            .build()
            .unwrap()
    }

    fn write_series(dir: &TempDir, name: &str) -> PathBuf {
        let values = (0..400).map(|i| (i as f64 * 0.3).sin()).collect();
        let path = dir.path().join(name);
        ColumnFile::write_to_path(&TimeSeries::Scalar(values), &path).unwrap();
        path
    }

    fn groups(dir: &TempDir) -> Vec<SpectrumGroup> {
        vec![
            SpectrumGroup::new(
                "good",
                AggregationStrategy::Single(write_series(dir, "good.txt")),
            ),
            SpectrumGroup::new(
                "bad",
                AggregationStrategy::Single(dir.path().join("missing.txt")),
            ),
            SpectrumGroup::new(
                "also-good",
                AggregationStrategy::Single(write_series(dir, "other.txt")),
            ),
        ]
    }

    #[test]
    fn continue_on_error_keeps_order_and_reports_each_failure() {
        let dir = tempdir().unwrap();
        let groups = groups(&dir);
        let finished = AtomicUsize::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            if let Progress::GroupFinished { .. } = event {
                finished.fetch_add(1, Ordering::SeqCst);
            }
        }));

        let outcomes = run(
            &groups,
            &config(),
            FailurePolicy::ContinueOnError,
            &reporter,
        )
        .unwrap();

        let names: Vec<&str> = outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["good", "bad", "also-good"]);
        assert!(outcomes[0].is_ok());
        assert_eq!(
            outcomes[1].result.as_ref().unwrap_err().kind(),
            ErrorKind::Io
        );
        assert!(outcomes[2].is_ok());
        assert_eq!(finished.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn fail_fast_returns_the_failure() {
        let dir = tempdir().unwrap();
        let groups = groups(&dir);
        let err = run(
            &groups,
            &config(),
            FailurePolicy::FailFast,
            &ProgressReporter::new(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn fail_fast_with_all_groups_valid_returns_every_spectrum() {
        let dir = tempdir().unwrap();
        let groups = vec![SpectrumGroup::new(
            "only",
            AggregationStrategy::Single(write_series(&dir, "only.txt")),
        )];
        let outcomes = run(
            &groups,
            &config(),
            FailurePolicy::FailFast,
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(outcomes.len(), 1);
        let spectrum = outcomes[0].result.as_ref().unwrap();
        assert!((spectrum.max_intensity().unwrap() - 1.0).abs() < 1e-9);
    }
}
