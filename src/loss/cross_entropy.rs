/// Categorical cross-entropy loss for use with a Softmax output layer.
pub struct CrossEntropyLoss;

/// Keeps log() finite when a probability underflows to zero.
const EPS: f64 = 1e-12;

impl CrossEntropyLoss {
    /// L = -sum(expected[i] * log(predicted[i] + eps))
    ///
    /// With a one-hot target this is `-log(p_target)`.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(p, e)| -e * (p + EPS).ln())
            .sum()
    }

    /// Gradient of the combined Softmax + cross-entropy w.r.t. the logits:
    ///   ∂L/∂z_i = predicted[i] - expected[i]
    ///
    /// The Softmax activation's own derivative is the identity, so the trainer
    /// feeds this straight into the backward pass.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(p, e)| p - e)
            .collect()
    }

    /// One-hot encoding of `class` over `n_classes` outputs.
    pub fn one_hot(class: usize, n_classes: usize) -> Vec<f64> {
        (0..n_classes).map(|i| if i == class { 1.0 } else { 0.0 }).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_prediction_costs_ln2() {
        let target = CrossEntropyLoss::one_hot(1, 2);
        let loss = CrossEntropyLoss::loss(&[0.5, 0.5], &target);
        assert!((loss - std::f64::consts::LN_2).abs() < 1e-9);
        assert_eq!(CrossEntropyLoss::derivative(&[0.5, 0.5], &target), vec![0.5, -0.5]);
    }
}
