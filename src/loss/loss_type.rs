use serde::{Serialize, Deserialize};

/// Selects which loss function the trainer uses.
///
/// - `Mse`          : Mean-squared error; pair with an Identity output (regression).
/// - `CrossEntropy` : Categorical cross-entropy; pair with a Softmax output.
///   The gradient is the combined Softmax+CE gradient (predicted - expected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    Mse,
    CrossEntropy,
}

impl LossType {
    pub fn loss(self, predicted: &[f64], expected: &[f64]) -> f64 {
        match self {
            LossType::Mse          => super::MseLoss::loss(predicted, expected),
            LossType::CrossEntropy => super::CrossEntropyLoss::loss(predicted, expected),
        }
    }

    pub fn derivative(self, predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        match self {
            LossType::Mse          => super::MseLoss::derivative(predicted, expected),
            LossType::CrossEntropy => super::CrossEntropyLoss::derivative(predicted, expected),
        }
    }
}
