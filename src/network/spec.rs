use std::fmt;

use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::loss::loss_type::LossType;

/// Describes one layer in a network specification.
///
/// Fields:
/// - `size`       : number of neurons in this layer
/// - `input_size` : output size of the previous layer, or the raw input
///                  dimension for the first layer
/// - `activation` : activation function applied after the linear transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub size: usize,
    pub input_size: usize,
    pub activation: ActivationFunction,
}

impl LayerSpec {
    fn new(size: usize, input_size: usize, activation: ActivationFunction) -> Self {
        LayerSpec { size, input_size, activation }
    }
}

/// An ordered layer list (input → output) plus the loss it trains with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub layers: Vec<LayerSpec>,
    pub loss: LossType,
}

impl NetworkSpec {
    /// One identity unit: `y = m·x + b`.
    pub fn line() -> Self {
        NetworkSpec {
            layers: vec![LayerSpec::new(1, 1, ActivationFunction::Identity)],
            loss: LossType::Mse,
        }
    }

    /// A single softmax layer over two classes, i.e. logistic regression.
    pub fn logistic() -> Self {
        NetworkSpec {
            layers: vec![LayerSpec::new(2, 2, ActivationFunction::Softmax)],
            loss: LossType::CrossEntropy,
        }
    }
}

/// Hidden-layer stacks offered by the neural network demo. Every variant maps
/// two inputs to a two-class softmax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Architecture {
    /// 6 tanh.
    #[default]
    OneLayer,
    /// 6 tanh → 2 tanh.
    TwoLayer,
    /// 6 tanh → 6 tanh → 2 tanh.
    ThreeLayer,
}

impl Architecture {
    pub const ALL: [Architecture; 3] = [Architecture::OneLayer, Architecture::TwoLayer, Architecture::ThreeLayer];

    pub fn hidden_layers(self) -> usize {
        match self {
            Architecture::OneLayer   => 1,
            Architecture::TwoLayer   => 2,
            Architecture::ThreeLayer => 3,
        }
    }

    pub fn from_hidden_layers(count: usize) -> Option<Self> {
        Architecture::ALL.into_iter().find(|a| a.hidden_layers() == count)
    }

    pub fn spec(self) -> NetworkSpec {
        let hidden: &[usize] = match self {
            Architecture::OneLayer   => &[6],
            Architecture::TwoLayer   => &[6, 2],
            Architecture::ThreeLayer => &[6, 6, 2],
        };

        let mut layers = Vec::with_capacity(hidden.len() + 1);
        let mut input_size = 2;
        for &size in hidden {
            layers.push(LayerSpec::new(size, input_size, ActivationFunction::Tanh));
            input_size = size;
        }
        layers.push(LayerSpec::new(2, input_size, ActivationFunction::Softmax));

        NetworkSpec { layers, loss: LossType::CrossEntropy }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hidden_layers() {
            1 => write!(f, "1 hidden layer"),
            n => write!(f, "{n} hidden layers"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn architectures_chain_layer_sizes() {
        for arch in Architecture::ALL {
            let spec = arch.spec();
            assert_eq!(spec.layers.len(), arch.hidden_layers() + 1);
            assert_eq!(spec.layers[0].input_size, 2);
            for pair in spec.layers.windows(2) {
                assert_eq!(pair[0].size, pair[1].input_size);
            }
            let last = spec.layers.last().unwrap();
            assert_eq!(last.size, 2);
            assert_eq!(last.activation, ActivationFunction::Softmax);
        }
    }

    #[test]
    fn hidden_layer_lookup() {
        assert_eq!(Architecture::from_hidden_layers(3), Some(Architecture::ThreeLayer));
        assert_eq!(Architecture::from_hidden_layers(4), None);
    }
}
