/// Partial charges, one per atom, in trajectory atom order.
#[derive(Debug, Clone, PartialEq)]
pub struct Charges(Vec<f64>);

impl Charges {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn net_charge(&self) -> f64 {
        self.0.iter().sum()
    }
}
