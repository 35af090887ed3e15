use std::f64::consts::PI;

const BLACKMAN_HARRIS: [f64; 4] = [0.35875, 0.48829, 0.14128, 0.01168];

/// Symmetric 4-term Blackman–Harris window of `len` points.
pub fn blackman_harris(len: usize) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![1.0],
        _ => {
            let [a0, a1, a2, a3] = BLACKMAN_HARRIS;
            let denom = (len - 1) as f64;
            (0..len)
                .map(|n| {
                    let x = 2.0 * PI * n as f64 / denom;
                    a0 - a1 * x.cos() + a2 * (2.0 * x).cos() - a3 * (3.0 * x).cos()
                })
                .collect()
        }
    }
}
