/// Half mean-squared error, so the gradient of a single output is exactly
/// `predicted - expected`.
pub struct MseLoss;

impl MseLoss {
    /// Scalar loss: 0.5 · mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len().max(1) as f64;
        0.5 * predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }

    /// Per-output gradient: (predicted - expected) / n
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        let n = predicted.len().max(1) as f64;
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b) / n)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_output_gradient_is_residual() {
        assert!((MseLoss::loss(&[3.0], &[1.0]) - 2.0).abs() < 1e-12);
        assert_eq!(MseLoss::derivative(&[3.0], &[1.0]), vec![2.0]);
    }
}
