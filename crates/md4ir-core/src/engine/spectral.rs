//! Windowed-autocorrelation spectra of time series.
//!
//! The pipeline for one series is: select the time window, take the forward finite
//! difference of every component, autocorrelate it (non-negative lags only), apodize with a
//! Blackman–Harris window, Fourier transform, and sum the transforms of all components.
//! The frequency axis is converted to wavenumbers, clipped to the open requested range,
//! and the magnitude is optionally normalized to a maximum of 1.

use super::config::{SpectralMethod, SpectrumConfig};
use super::window::blackman_harris;
use crate::core::constants::{FS_TO_S, HZ_TO_INVCM, PS_TO_FS};
use crate::core::models::series::TimeSeries;
use crate::core::models::spectrum::SpectrumResult;
use rustfft::FftPlanner;
use rustfft::num_complex::Complex;
use thiserror::Error;
use tracing::{debug, instrument};

/// Relative tolerance when comparing wavenumber axes of replicate spectra.
const AXIS_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpectrumError {
    #[error(
        "time window {start_ps}-{end_ps} ps keeps {samples} of {available} samples, at least 2 are needed"
    )]
    EmptyWindow {
        start_ps: f64,
        end_ps: f64,
        samples: usize,
        available: usize,
    },

    #[error("cannot normalize: the maximum intensity in the wavenumber range is zero")]
    DegenerateSignal,

    #[error("replicate spectra have different wavenumber axes ({expected} vs {found} bins)")]
    AxisMismatch { expected: usize, found: usize },
}

pub struct SpectralEngine<'a> {
    config: &'a SpectrumConfig,
}

impl<'a> SpectralEngine<'a> {
    pub fn new(config: &'a SpectrumConfig) -> Self {
        Self { config }
    }

    /// Computes the spectrum of `series`, normalized to a maximum of 1 when `normalize` is set.
    #[instrument(skip_all, name = "spectral_engine", fields(samples = series.len(), arity = series.arity()))]
    pub fn compute(
        &self,
        series: &TimeSeries,
        normalize: bool,
    ) -> Result<SpectrumResult, SpectrumError> {
        let windowed = self.select_window(series)?;
        let timestep_s = self.config.timestep_fs * FS_TO_S;

        let transform = match self.config.method {
            SpectralMethod::Autocorrelation => autocorrelation_transform(&windowed, timestep_s),
        };

        let wavenumbers: Vec<f64> = fft_frequencies(transform.len(), timestep_s)
            .into_iter()
            .map(|hz| hz * HZ_TO_INVCM * self.config.scale)
            .collect();

        let range = self.config.wavenumber_range;
        let (wavenumbers, intensities): (Vec<f64>, Vec<f64>) = wavenumbers
            .into_iter()
            .zip(transform)
            .filter(|(wn, _)| range.contains(*wn))
            .map(|(wn, c)| (wn, c.norm()))
            .unzip();
        debug!(bins = wavenumbers.len(), "Clipped spectrum to wavenumber range.");

        let spectrum = SpectrumResult::new(wavenumbers, intensities);
        if normalize {
            normalized(spectrum)
        } else {
            Ok(spectrum)
        }
    }

    /// Keeps samples `i` with `start_ps * 1000 / timestep_fs <= i <= end_ps * 1000 / timestep_fs`.
    pub fn select_window(&self, series: &TimeSeries) -> Result<TimeSeries, SpectrumError> {
        let window = self.config.time_window;
        let first = (window.start_ps * PS_TO_FS / self.config.timestep_fs)
            .max(0.0)
            .ceil();
        let last = (window.end_ps * PS_TO_FS / self.config.timestep_fs).floor();

        let range = if last < first {
            0..0
        } else {
            first as usize..(last as usize).saturating_add(1)
        };
        let selected = series.window(range);

        if selected.len() < 2 {
            return Err(SpectrumError::EmptyWindow {
                start_ps: window.start_ps,
                end_ps: window.end_ps,
                samples: selected.len(),
                available: series.len(),
            });
        }
        Ok(selected)
    }
}

/// Sum over components of the DFT of the windowed half autocorrelation of the derivative.
fn autocorrelation_transform(series: &TimeSeries, timestep_s: f64) -> Vec<Complex<f64>> {
    let mut planner = FftPlanner::<f64>::new();
    let mut total: Vec<Complex<f64>> = Vec::new();

    for component in series.components() {
        let derivative = finite_difference(&component, timestep_s);
        let mut acf = autocorrelation(&derivative, &mut planner);
        let window = blackman_harris(acf.len());
        for (value, weight) in acf.iter_mut().zip(window) {
            *value *= weight;
        }

        let mut spectrum: Vec<Complex<f64>> =
            acf.iter().map(|&v| Complex::new(v, 0.0)).collect();
        planner
            .plan_fft_forward(spectrum.len())
            .process(&mut spectrum);

        if total.is_empty() {
            total = spectrum;
        } else {
            for (acc, value) in total.iter_mut().zip(spectrum) {
                *acc += value;
            }
        }
    }
    total
}

/// Forward difference `(x[i+1] - x[i]) / dt`; one sample shorter than the input.
pub fn finite_difference(values: &[f64], dt: f64) -> Vec<f64> {
    values.windows(2).map(|w| (w[1] - w[0]) / dt).collect()
}

/// Autocorrelation `r[k] = Σ x[i]·x[i+k]` for lags `k = 0..n`.
///
/// This is the non-negative half (zero lag included once) of the full two-sided
/// correlation, evaluated through a zero-padded FFT so no circular wrap-around occurs.
pub fn autocorrelation(values: &[f64], planner: &mut FftPlanner<f64>) -> Vec<f64> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }
    let padded = (2 * n - 1).next_power_of_two();

    let mut buffer: Vec<Complex<f64>> = values
        .iter()
        .map(|&v| Complex::new(v, 0.0))
        .chain(std::iter::repeat(Complex::new(0.0, 0.0)))
        .take(padded)
        .collect();

    planner.plan_fft_forward(padded).process(&mut buffer);
    for c in buffer.iter_mut() {
        *c = Complex::new(c.norm_sqr(), 0.0);
    }
    planner.plan_fft_inverse(padded).process(&mut buffer);

    let scale = padded as f64;
    buffer[..n].iter().map(|c| c.re / scale).collect()
}

/// Bin frequencies (Hz) of an `n`-point DFT with sample spacing `dt` seconds, in DFT order:
/// `0, 1, …, ⌈n/2⌉-1, -⌊n/2⌋, …, -1` times `1 / (n·dt)`.
pub fn fft_frequencies(n: usize, dt: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let spacing = 1.0 / (n as f64 * dt);
    let positive = n.div_ceil(2);
    (0..n)
        .map(|k| {
            let bin = if k < positive {
                k as f64
            } else {
                k as f64 - n as f64
            };
            bin * spacing
        })
        .collect()
}

/// Divides intensities by their maximum.
pub fn normalized(spectrum: SpectrumResult) -> Result<SpectrumResult, SpectrumError> {
    let max = spectrum
        .max_intensity()
        .filter(|m| *m > 0.0)
        .ok_or(SpectrumError::DegenerateSignal)?;
    let intensities = spectrum.intensities.iter().map(|v| v / max).collect();
    Ok(SpectrumResult::new(spectrum.wavenumbers, intensities))
}

/// Element-wise sum of replicate spectra sharing one wavenumber axis, normalized.
pub fn averaged<I>(spectra: I) -> Result<SpectrumResult, SpectrumError>
where
    I: IntoIterator<Item = SpectrumResult>,
{
    let mut iter = spectra.into_iter();
    let mut total = iter.next().ok_or(SpectrumError::DegenerateSignal)?;
    for spectrum in iter {
        check_same_axis(&total, &spectrum)?;
        for (acc, v) in total.intensities.iter_mut().zip(&spectrum.intensities) {
            *acc += v;
        }
    }
    normalized(total)
}

/// Fails with [`SpectrumError::AxisMismatch`] unless both spectra share one wavenumber axis.
pub fn check_same_axis(a: &SpectrumResult, b: &SpectrumResult) -> Result<(), SpectrumError> {
    let mismatch = SpectrumError::AxisMismatch {
        expected: a.len(),
        found: b.len(),
    };
    if a.len() != b.len() {
        return Err(mismatch);
    }
    let same = a.wavenumbers.iter().zip(&b.wavenumbers).all(|(x, y)| {
        (x - y).abs() <= AXIS_TOLERANCE * x.abs().max(y.abs()).max(1.0)
    });
    if same { Ok(()) } else { Err(mismatch) }
}
