use nalgebra::Vector3;
use std::ops::Range;

/// Samples indexed by timestep. The arity (1 or 3 components) is fixed by the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeSeries {
    Scalar(Vec<f64>),
    Vector(Vec<Vector3<f64>>),
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(v) => v.len(),
            Self::Vector(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn arity(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Vector(_) => 3,
        }
    }

    /// Samples in `range`, clamped to the series length.
    pub fn window(&self, range: Range<usize>) -> TimeSeries {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        match self {
            Self::Scalar(v) => Self::Scalar(v[start..end].to_vec()),
            Self::Vector(v) => Self::Vector(v[start..end].to_vec()),
        }
    }

    /// One sequence per component, e.g. `[xs, ys, zs]` for a vector series.
    pub fn components(&self) -> Vec<Vec<f64>> {
        match self {
            Self::Scalar(v) => vec![v.clone()],
            Self::Vector(v) => (0..3)
                .map(|axis| v.iter().map(|s| s[axis]).collect())
                .collect(),
        }
    }
}
