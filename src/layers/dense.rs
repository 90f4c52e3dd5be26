use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer{
    pub size: usize,
    pub neurons: Matrix,
    #[serde(skip)]
    pre_neurons: Matrix,  // pre-activation values (z = Wx + b) needed for correct derivative
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction
}

impl Layer {
    /// Xavier-initialised weights, zero biases.
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Layer {
        Layer {
            size,
            neurons: Matrix::zeros(1, size),
            pre_neurons: Matrix::zeros(1, size),
            weights: Matrix::xavier(input_size, size, rng),
            biases: Matrix::zeros(1, size),
            activator: activation
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    pub fn feed_from(&mut self, input: Vec<f64>) -> Vec<f64> {
        let z = Matrix::from_data(vec![input]) * self.weights.clone() + self.biases.clone();
        let a = self.activator.apply_vector(z.row(0));
        self.pre_neurons = z;
        self.neurons = Matrix::from_data(vec![a.clone()]);
        a
    }

    /// Computes gradient adjustments. Returns (weights_grad, biases_grad).
    /// `next_layer_delta` is ∂L/∂a for this layer (error in activation space).
    pub fn compute_gradients(
        &self,
        next_layer_delta: Matrix,
        inputs: &Matrix,
    ) -> (Matrix, Matrix) {
        // Use pre-activation z so that derivative(z) = σ'(z) is computed correctly
        let act_derivative = self.pre_neurons.map(|x| self.activator.derivative(x));
        // δ = error ⊙ σ'(z)
        let layer_delta = next_layer_delta.zip_with(&act_derivative, |e, d| e * d);

        let weights_adjustment = inputs.transpose() * layer_delta.clone();
        let biases_adjustment = layer_delta;

        (weights_adjustment, biases_adjustment)
    }

    /// Adds already-scaled parameter deltas (as produced by the optimizer).
    pub fn apply_deltas(&mut self, weights_delta: &Matrix, biases_delta: &Matrix) {
        self.weights = self.weights.clone() + weights_delta.clone();
        self.biases = self.biases.clone() + biases_delta.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn softmax_layer_outputs_distribution() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut layer = Layer::new(2, 2, ActivationFunction::Softmax, &mut rng);
        let out = layer.feed_from(vec![0.3, 0.9]);
        assert_eq!(out.len(), 2);
        assert!((out.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn biases_start_at_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        let layer = Layer::new(6, 2, ActivationFunction::Tanh, &mut rng);
        assert!(layer.biases.row(0).iter().all(|&b| b == 0.0));
        assert_eq!(layer.input_size(), 2);
    }
}
