use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileSpectrumConfig};
use super::models::AppConfig;
use crate::cli::SpectrumArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use md4ir::engine::aggregate::{AggregationStrategy, SpectrumGroup};
use md4ir::engine::config::{SpectralMethod, SpectrumConfigBuilder};
use md4ir::workflows::spectrum::FailurePolicy;
use tracing::debug;

/// Merges CLI flags, `--set` values, the config file and defaults, in that order of priority.
pub fn build_config(args: &SpectrumArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;
    let spectrum_file = file_config.spectrum.take().unwrap_or_default();

    let core_config = SpectrumConfigBuilder::new()
        .scale(args.scale.or(spectrum_file.scale).unwrap_or(defaults.scale))
        .timestep_fs(
            args.timestep
                .or(spectrum_file.timestep)
                .unwrap_or(defaults.timestep_fs),
        )
        .time_window_ps(
            args.time_start
                .or(spectrum_file.time_start)
                .unwrap_or(defaults.time_start_ps),
            args.time_end
                .or(spectrum_file.time_end)
                .unwrap_or(defaults.time_end_ps),
        )
        .wavenumber_range(
            args.wn_start
                .or(spectrum_file.wn_start)
                .unwrap_or(defaults.wn_start),
            args.wn_end.or(spectrum_file.wn_end).unwrap_or(defaults.wn_end),
        )
        .method(args.method.or(spectrum_file.method).unwrap_or(defaults.method))
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;
    debug!("Final spectrum configuration: {:?}", core_config);

    let strategies = args
        .files
        .iter()
        .map(|group| {
            let paths =
                parser::parse_file_group(group).map_err(|e| CliError::Argument(e.to_string()))?;
            AggregationStrategy::from_paths(paths)
                .ok_or_else(|| CliError::Argument(format!("File group '{}' is empty.", group)))
        })
        .collect::<Result<Vec<_>>>()?;

    let policy = if args.fail_fast {
        FailurePolicy::FailFast
    } else {
        FailurePolicy::ContinueOnError
    };

    Ok(AppConfig {
        groups: name_groups(strategies, args.name.as_deref()),
        core_config,
        policy,
    })
}

/// One explicit name for several groups is numbered `<name>_1`, `<name>_2`, ...
fn name_groups(strategies: Vec<AggregationStrategy>, name: Option<&str>) -> Vec<SpectrumGroup> {
    match name {
        None => strategies
            .into_iter()
            .map(SpectrumGroup::with_derived_name)
            .collect(),
        Some(name) if strategies.len() == 1 => strategies
            .into_iter()
            .map(|s| SpectrumGroup::new(name, s))
            .collect(),
        Some(name) => strategies
            .into_iter()
            .enumerate()
            .map(|(i, s)| SpectrumGroup::new(format!("{}_{}", name, i + 1), s))
            .collect(),
    }
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    let spectrum = config
        .spectrum
        .get_or_insert_with(FileSpectrumConfig::default);

    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_assignment(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        let float = || -> Result<f64> {
            value_str.parse().map_err(|_| {
                CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
            })
        };

        match key {
            "spectrum.scale" => spectrum.scale = Some(float()?),
            "spectrum.timestep" => spectrum.timestep = Some(float()?),
            "spectrum.time-start" => spectrum.time_start = Some(float()?),
            "spectrum.time-end" => spectrum.time_end = Some(float()?),
            "spectrum.wn-start" => spectrum.wn_start = Some(float()?),
            "spectrum.wn-end" => spectrum.wn_end = Some(float()?),
            "spectrum.method" => {
                spectrum.method = Some(
                    value_str
                        .parse::<SpectralMethod>()
                        .map_err(CliError::Config)?,
                );
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn base_spectrum_args() -> SpectrumArgs {
        SpectrumArgs {
            files: vec!["dipoles.txt".to_string()],
            name: None,
            config: None,
            scale: None,
            timestep: None,
            time_start: None,
            time_end: None,
            wn_start: None,
            wn_end: None,
            method: None,
            set_values: vec![],
            fail_fast: false,
        }
    }

    #[test]
    fn defaults_fill_every_parameter() {
        let app = build_config(&base_spectrum_args()).expect("build ok");
        let cfg = app.core_config;
        let defaults = DefaultsConfig::default();

        assert_eq!(cfg.scale, defaults.scale);
        assert_eq!(cfg.timestep_fs, defaults.timestep_fs);
        assert_eq!(cfg.time_window.start_ps, defaults.time_start_ps);
        assert_eq!(cfg.time_window.end_ps, defaults.time_end_ps);
        assert_eq!(cfg.wavenumber_range.start, defaults.wn_start);
        assert_eq!(cfg.wavenumber_range.end, defaults.wn_end);
        assert_eq!(cfg.method, SpectralMethod::Autocorrelation);
        assert_eq!(app.policy, FailurePolicy::ContinueOnError);
        assert_eq!(app.groups.len(), 1);
        assert_eq!(app.groups[0].name, "dipoles");
    }

    #[test]
    fn file_values_are_overridden_by_set_and_cli() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("md4ir.toml");
        fs::write(
            &cfg_path,
            r#"
            [spectrum]
            scale = 0.9
            timestep = 1.0
            time-end = 5.0
            wn-end = 3500.0
            "#,
        )
        .unwrap();

        let mut args = base_spectrum_args();
        args.config = Some(cfg_path);
        args.set_values = vec![
            "spectrum.timestep=0.25".to_string(),
            "spectrum.wn-end=3000".to_string(),
        ];
        args.wn_end = Some(2500.0);

        let cfg = build_config(&args).expect("build ok").core_config;
        assert_eq!(cfg.scale, 0.9);
        assert_eq!(cfg.timestep_fs, 0.25);
        assert_eq!(cfg.time_window.end_ps, 5.0);
        assert_eq!(cfg.wavenumber_range.end, 2500.0);
    }

    #[test]
    fn unknown_set_key_is_rejected() {
        let mut args = base_spectrum_args();
        args.set_values = vec!["spectrum.window=hann".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn invalid_set_value_is_rejected() {
        let mut args = base_spectrum_args();
        args.set_values = vec!["spectrum.scale=abc".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));

        args.set_values = vec!["spectrum.method=maxent".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn invalid_merged_values_fail_core_validation() {
        let mut args = base_spectrum_args();
        args.time_start = Some(30.0);
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn comma_separated_files_form_an_averaged_group() {
        let mut args = base_spectrum_args();
        args.files = vec!["r1/dip.txt,r2/dip.txt".to_string(), "bond.dat".to_string()];
        args.fail_fast = true;

        let app = build_config(&args).unwrap();
        assert_eq!(app.policy, FailurePolicy::FailFast);
        assert_eq!(
            app.groups[0].strategy,
            AggregationStrategy::Averaged(vec![
                PathBuf::from("r1/dip.txt"),
                PathBuf::from("r2/dip.txt")
            ])
        );
        assert_eq!(app.groups[0].name, "r1/dip");
        assert_eq!(
            app.groups[1].strategy,
            AggregationStrategy::Single(PathBuf::from("bond.dat"))
        );
        assert_eq!(app.groups[1].name, "bond");
    }

    #[test]
    fn one_explicit_name_is_numbered_across_groups() {
        let mut args = base_spectrum_args();
        args.files = vec!["a.txt".to_string(), "b.txt".to_string()];
        args.name = Some("water".to_string());
        let names: Vec<String> = build_config(&args)
            .unwrap()
            .groups
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(names, vec!["water_1", "water_2"]);

        args.files = vec!["a.txt".to_string()];
        assert_eq!(build_config(&args).unwrap().groups[0].name, "water");
    }

    #[test]
    fn empty_file_group_is_an_argument_error() {
        let mut args = base_spectrum_args();
        args.files = vec!["a.txt,,b.txt".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Argument(_))));
    }
}
