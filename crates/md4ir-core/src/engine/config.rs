use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Spectral estimation method. Only the windowed-autocorrelation method is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpectralMethod {
    /// Blackman–Harris windowed autocorrelation of the time derivative, then a DFT.
    #[default]
    #[serde(alias = "numpy")]
    Autocorrelation,
}

impl fmt::Display for SpectralMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpectralMethod::Autocorrelation => write!(f, "autocorrelation"),
        }
    }
}

impl FromStr for SpectralMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "autocorrelation" | "numpy" => Ok(SpectralMethod::Autocorrelation),
            other => Err(format!(
                "unknown spectral method '{}', expected 'autocorrelation'",
                other
            )),
        }
    }
}

/// Simulation time interval to analyse, in picoseconds (both ends inclusive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start_ps: f64,
    pub end_ps: f64,
}

/// Open wavenumber interval kept in the output, in cm⁻¹.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavenumberRange {
    pub start: f64,
    pub end: f64,
}

impl WavenumberRange {
    /// Strict on both ends.
    #[inline]
    pub fn contains(&self, wavenumber: f64) -> bool {
        wavenumber > self.start && wavenumber < self.end
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumConfig {
    pub scale: f64,
    pub timestep_fs: f64,
    pub time_window: TimeWindow,
    pub wavenumber_range: WavenumberRange,
    pub method: SpectralMethod,
}

#[derive(Default)]
pub struct SpectrumConfigBuilder {
    scale: Option<f64>,
    timestep_fs: Option<f64>,
    time_start_ps: Option<f64>,
    time_end_ps: Option<f64>,
    wn_start: Option<f64>,
    wn_end: Option<f64>,
    method: Option<SpectralMethod>,
}

impl SpectrumConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }
    pub fn timestep_fs(mut self, timestep: f64) -> Self {
        self.timestep_fs = Some(timestep);
        self
    }
    pub fn time_window_ps(mut self, start: f64, end: f64) -> Self {
        self.time_start_ps = Some(start);
        self.time_end_ps = Some(end);
        self
    }
    pub fn wavenumber_range(mut self, start: f64, end: f64) -> Self {
        self.wn_start = Some(start);
        self.wn_end = Some(end);
        self
    }
    pub fn method(mut self, method: SpectralMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn build(self) -> Result<SpectrumConfig, ConfigError> {
        let scale = self.scale.unwrap_or(1.0);
        let timestep_fs = self
            .timestep_fs
            .ok_or(ConfigError::MissingParameter("timestep_fs"))?;
        let time_window = TimeWindow {
            start_ps: self
                .time_start_ps
                .ok_or(ConfigError::MissingParameter("time_start_ps"))?,
            end_ps: self
                .time_end_ps
                .ok_or(ConfigError::MissingParameter("time_end_ps"))?,
        };
        let wavenumber_range = WavenumberRange {
            start: self.wn_start.ok_or(ConfigError::MissingParameter("wn_start"))?,
            end: self.wn_end.ok_or(ConfigError::MissingParameter("wn_end"))?,
        };

        if !(scale.is_finite() && scale > 0.0) {
            return Err(invalid("scale", format!("must be a positive number, got {}", scale)));
        }
        if !(timestep_fs.is_finite() && timestep_fs > 0.0) {
            return Err(invalid(
                "timestep_fs",
                format!("must be a positive number, got {}", timestep_fs),
            ));
        }
        for (name, value) in [
            ("time_start_ps", time_window.start_ps),
            ("time_end_ps", time_window.end_ps),
            ("wn_start", wavenumber_range.start),
            ("wn_end", wavenumber_range.end),
        ] {
            if !value.is_finite() {
                return Err(invalid(name, format!("must be a finite number, got {}", value)));
            }
        }
        if time_window.end_ps < time_window.start_ps {
            return Err(invalid(
                "time window",
                format!(
                    "end ({} ps) is before start ({} ps)",
                    time_window.end_ps, time_window.start_ps
                ),
            ));
        }
        if wavenumber_range.end <= wavenumber_range.start {
            return Err(invalid(
                "wavenumber range",
                format!(
                    "end ({}) must be greater than start ({})",
                    wavenumber_range.end, wavenumber_range.start
                ),
            ));
        }

        Ok(SpectrumConfig {
            scale,
            timestep_fs,
            time_window,
            wavenumber_range,
            method: self.method.unwrap_or_default(),
        })
    }
}

fn invalid(name: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidParameter { name, reason }
}
