use serde::{Serialize, Deserialize};

use crate::{error::PlaygroundError, layers::dense::Layer, math::matrix::Matrix};

/// Hyperparameters for [`Sgd`] and the mini-batch accumulation in `Trainer`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgdConfig {
    pub learning_rate: f64,
    pub momentum: f64,
    /// Examples accumulated before one parameter update.
    pub batch_size: usize,
    /// L2 penalty applied to weights (not biases).
    pub l2_decay: f64,
}

impl Default for SgdConfig {
    fn default() -> Self {
        SgdConfig { learning_rate: 0.1, momentum: 0.1, batch_size: 10, l2_decay: 0.01 }
    }
}

impl SgdConfig {
    pub fn validate(&self) -> Result<(), PlaygroundError> {
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(PlaygroundError::InvalidTrainer("learning rate must be a positive number".into()));
        }
        if !(0.0..1.0).contains(&self.momentum) {
            return Err(PlaygroundError::InvalidTrainer("momentum must lie in [0, 1)".into()));
        }
        if self.batch_size == 0 {
            return Err(PlaygroundError::InvalidTrainer("batch size must be at least 1".into()));
        }
        if !(self.l2_decay >= 0.0 && self.l2_decay.is_finite()) {
            return Err(PlaygroundError::InvalidTrainer("l2 decay must be non-negative".into()));
        }
        Ok(())
    }
}

/// Stochastic gradient descent with classical momentum and L2 weight decay.
///
/// Velocity buffers are created lazily per layer on the first step, so one
/// `Sgd` must stay paired with one network.
pub struct Sgd {
    pub learning_rate: f64,
    pub momentum: f64,
    pub l2_decay: f64,
    velocities: Vec<(Matrix, Matrix)>,
}

impl Sgd {
    pub fn from_config(config: &SgdConfig) -> Sgd {
        Sgd {
            learning_rate: config.learning_rate,
            momentum: config.momentum,
            l2_decay: config.l2_decay,
            velocities: Vec::new(),
        }
    }

    /// Applies one update to `layers[index]` given its (batch-averaged) gradients.
    pub fn step(&mut self, index: usize, layer: &mut Layer, weights_grad: Matrix, biases_grad: Matrix) {
        while self.velocities.len() <= index {
            self.velocities.push((Matrix::default(), Matrix::default()));
        }
        let (w_vel, b_vel) = &mut self.velocities[index];
        if w_vel.rows != layer.weights.rows || w_vel.cols != layer.weights.cols {
            *w_vel = Matrix::zeros(layer.weights.rows, layer.weights.cols);
            *b_vel = Matrix::zeros(layer.biases.rows, layer.biases.cols);
        }

        let l2 = self.l2_decay;
        let w_grad = weights_grad.zip_with(&layer.weights, |g, w| g + l2 * w);

        let (lr, mu) = (self.learning_rate, self.momentum);
        *w_vel = w_vel.zip_with(&w_grad, |v, g| mu * v - lr * g);
        *b_vel = b_vel.zip_with(&biases_grad, |v, g| mu * v - lr * g);

        layer.apply_deltas(w_vel, b_vel);
    }
}
