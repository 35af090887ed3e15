/// Wavenumbers (cm⁻¹) and the matching intensities of a computed spectrum.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpectrumResult {
    pub wavenumbers: Vec<f64>,
    pub intensities: Vec<f64>,
}

impl SpectrumResult {
    /// Pairs the two sequences; panics if their lengths differ.
    pub fn new(wavenumbers: Vec<f64>, intensities: Vec<f64>) -> Self {
        assert_eq!(
            wavenumbers.len(),
            intensities.len(),
            "wavenumber axis and intensities must have equal length"
        );
        Self {
            wavenumbers,
            intensities,
        }
    }

    pub fn len(&self) -> usize {
        self.wavenumbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavenumbers.is_empty()
    }

    pub fn max_intensity(&self) -> Option<f64> {
        self.intensities.iter().copied().reduce(f64::max)
    }

    /// The most intense bin as `(wavenumber, intensity)`.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.iter()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.wavenumbers
            .iter()
            .copied()
            .zip(self.intensities.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_returns_most_intense_bin() {
        let spectrum = SpectrumResult::new(vec![100.0, 200.0, 300.0], vec![0.2, 0.9, 0.4]);
        assert_eq!(spectrum.peak(), Some((200.0, 0.9)));
        assert_eq!(spectrum.max_intensity(), Some(0.9));
    }

    #[test]
    fn empty_spectrum_has_no_peak() {
        let spectrum = SpectrumResult::default();
        assert!(spectrum.is_empty());
        assert_eq!(spectrum.peak(), None);
    }

    #[test]
    #[should_panic]
    fn mismatched_lengths_panic() {
        SpectrumResult::new(vec![1.0], vec![]);
    }
}
