use crate::{
    loss::{CrossEntropyLoss, LossType},
    math::matrix::Matrix,
    network::network::Network,
    optim::sgd::{Sgd, SgdConfig},
};

/// What a single training example should produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// Class index, expanded to a one-hot vector over the output layer.
    Class(usize),
    /// Raw regression target, one value per output.
    Value(Vec<f64>),
}

/// The trainable-predictor seam: pure inference plus one online update.
///
/// Models in `classify` only ever talk to this trait, never to the network's
/// parameters.
pub trait Trainable {
    /// Inference. Takes `&mut self` because the engine caches activations.
    fn forward(&mut self, input: &[f64]) -> Vec<f64>;

    /// Feeds one example and returns its loss. The parameter update may be
    /// deferred until a full mini-batch has been seen.
    fn train_example(&mut self, input: &[f64], target: &Target) -> f64;
}

/// Network + optimizer + loss, updated one example at a time with gradients
/// accumulated over `batch_size` examples before each optimizer step.
pub struct Trainer {
    network: Network,
    optimizer: Sgd,
    loss: LossType,
    batch_size: usize,
    pending: Vec<(Matrix, Matrix)>,
    pending_count: usize,
}

impl Trainer {
    pub fn new(network: Network, loss: LossType, config: &SgdConfig) -> Trainer {
        let pending = zero_grads(&network);
        Trainer {
            network,
            optimizer: Sgd::from_config(config),
            loss,
            batch_size: config.batch_size.max(1),
            pending,
            pending_count: 0,
        }
    }

    fn encode_target(&self, target: &Target) -> Vec<f64> {
        match target {
            Target::Class(class) => CrossEntropyLoss::one_hot(*class, self.network.output_size()),
            Target::Value(values) => values.clone(),
        }
    }

    /// Backward pass for the activations currently cached in the network.
    /// Returns per-layer (weights_grad, biases_grad).
    fn backprop(&self, input: &[f64], error: Vec<f64>) -> Vec<(Matrix, Matrix)> {
        let layers = &self.network.layers;
        let mut grads = vec![(Matrix::default(), Matrix::default()); layers.len()];
        let mut delta = Matrix::from_data(vec![error]);

        for i in (0..layers.len()).rev() {
            let input_for_layer = if i == 0 {
                Matrix::from_data(vec![input.to_vec()])
            } else {
                layers[i - 1].neurons.clone()
            };

            let (w_grad, b_grad) = layers[i].compute_gradients(delta.clone(), &input_for_layer);

            if i > 0 {
                // Propagate δ_i through weights to get ∂L/∂a_{i-1}
                delta = b_grad.clone() * layers[i].weights.transpose();
            }

            grads[i] = (w_grad, b_grad);
        }

        grads
    }

    fn flush(&mut self) {
        let inv_batch = 1.0 / self.pending_count as f64;
        let pending = std::mem::replace(&mut self.pending, zero_grads(&self.network));
        for (i, (w_acc, b_acc)) in pending.into_iter().enumerate() {
            let w_avg = w_acc.map(|x| x * inv_batch);
            let b_avg = b_acc.map(|x| x * inv_batch);
            self.optimizer.step(i, &mut self.network.layers[i], w_avg, b_avg);
        }
        self.pending_count = 0;
    }
}

impl Trainable for Trainer {
    fn forward(&mut self, input: &[f64]) -> Vec<f64> {
        self.network.forward(input.to_vec())
    }

    fn train_example(&mut self, input: &[f64], target: &Target) -> f64 {
        let expected = self.encode_target(target);
        let output = self.network.forward(input.to_vec());

        let loss = self.loss.loss(&output, &expected);
        let error = self.loss.derivative(&output, &expected);

        let grads = self.backprop(input, error);
        for (acc, (w_grad, b_grad)) in self.pending.iter_mut().zip(grads) {
            acc.0 = acc.0.clone() + w_grad;
            acc.1 = acc.1.clone() + b_grad;
        }
        self.pending_count += 1;

        if self.pending_count >= self.batch_size {
            self.flush();
        }

        loss
    }
}

fn zero_grads(network: &Network) -> Vec<(Matrix, Matrix)> {
    network.layers.iter()
        .map(|layer| (
            Matrix::zeros(layer.weights.rows, layer.weights.cols),
            Matrix::zeros(layer.biases.rows, layer.biases.cols),
        ))
        .collect()
}
