use crate::activation::activation::Activation;
use crate::error::{NetworkError, Result};
use crate::loss::residual::residual;

/// Fixed initial value for every weight. Together with zero biases this
/// makes fresh networks fully deterministic: same-layer units start
/// symmetric and only training differentiates them.
pub const INITIAL_WEIGHT: f64 = 0.01;

/// Learning rate used when the caller does not supply one.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Which update rule the backward pass applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientMode {
    /// The historical rule: errors are back-projected as raw weighted sums
    /// (no activation-derivative scaling), and each weight step is gated on
    /// the sign of the weight itself, ReLU-derivative style. Not a textbook
    /// gradient, but it is the behavior this engine reproduces.
    #[default]
    WeightGated,
    /// Textbook backpropagation: per-unit deltas scaled by the activation
    /// derivative at the cached pre-activation, weight steps scaled by the
    /// upstream activation.
    Derivative,
}

/// A feed-forward network over a fixed topology `[n0, .., nL]`.
///
/// The engine owns its weight matrices and bias vectors exclusively; the
/// only operation that mutates them is `backward` (and `train`, which calls
/// it). `forward` additionally caches per-layer activations and
/// pre-activations for the derivative-mode backward pass of the same sample.
pub struct Network {
    topology: Vec<usize>,
    /// `weights[i][j][k]` connects unit `k` of layer `i` to unit `j` of
    /// layer `i + 1`; shape `(topology[i + 1], topology[i])`.
    weights: Vec<Vec<Vec<f64>>>,
    /// `biases[i][j]` offsets unit `j` of layer `i + 1`.
    biases: Vec<Vec<f64>>,
    learning_rate: f64,
    activation: Activation,
    mode: GradientMode,
    /// Activation cache refreshed by each forward pass; `activations[0]` is
    /// the raw input, `activations[i + 1]` the output of layer `i + 1`.
    activations: Vec<Vec<f64>>,
    pre_activations: Vec<Vec<f64>>,
}

impl Network {
    /// Builds a network with deterministic initial parameters: every weight
    /// `INITIAL_WEIGHT`, every bias zero.
    ///
    /// The topology must name at least an input and an output layer, and
    /// every layer size must be nonzero.
    pub fn new(topology: Vec<usize>, learning_rate: f64) -> Result<Network> {
        if topology.len() < 2 {
            return Err(NetworkError::InvalidTopology(format!(
                "need at least an input and an output layer, got {} entries",
                topology.len()
            )));
        }
        if let Some(pos) = topology.iter().position(|&n| n == 0) {
            return Err(NetworkError::InvalidTopology(format!(
                "layer {pos} has size 0"
            )));
        }

        let weights = topology.windows(2)
            .map(|pair| vec![vec![INITIAL_WEIGHT; pair[0]]; pair[1]])
            .collect();
        let biases: Vec<Vec<f64>> = topology.iter().skip(1)
            .map(|&n| vec![0.0; n])
            .collect();
        let activations = topology.iter().map(|&n| vec![0.0; n]).collect();
        let pre_activations = topology.iter().skip(1).map(|&n| vec![0.0; n]).collect();

        Ok(Network {
            topology,
            weights,
            biases,
            learning_rate,
            activation: Activation::default(),
            mode: GradientMode::default(),
            activations,
            pre_activations,
        })
    }

    /// Same as `new` with the default learning rate.
    pub fn with_defaults(topology: Vec<usize>) -> Result<Network> {
        Network::new(topology, DEFAULT_LEARNING_RATE)
    }

    /// Selects the update rule applied by `backward`.
    pub fn with_gradient_mode(mut self, mode: GradientMode) -> Network {
        self.mode = mode;
        self
    }

    /// Selects the activation applied after each layer's linear transform.
    pub fn with_activation(mut self, activation: Activation) -> Network {
        self.activation = activation;
        self
    }

    pub fn topology(&self) -> &[usize] {
        &self.topology
    }

    pub fn weights(&self) -> &[Vec<Vec<f64>>] {
        &self.weights
    }

    pub fn biases(&self) -> &[Vec<f64>] {
        &self.biases
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Forward pass: propagates `input` through every layer and returns the
    /// output layer's activations. Refreshes the activation cache but never
    /// touches weights or biases.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.topology[0] {
            return Err(NetworkError::DimensionMismatch {
                expected: self.topology[0],
                actual: input.len(),
            });
        }

        let mut activations = Vec::with_capacity(self.topology.len());
        let mut pre_activations = Vec::with_capacity(self.weights.len());
        let mut current = input.to_vec();
        activations.push(current.clone());

        for (layer_weights, layer_biases) in self.weights.iter().zip(self.biases.iter()) {
            let pre: Vec<f64> = layer_weights.iter().zip(layer_biases.iter())
                .map(|(row, bias)| {
                    row.iter().zip(current.iter()).map(|(w, a)| w * a).sum::<f64>() + bias
                })
                .collect();
            current = pre.iter().map(|&z| self.activation.apply(z)).collect();
            pre_activations.push(pre);
            activations.push(current.clone());
        }

        self.activations = activations;
        self.pre_activations = pre_activations;
        Ok(current)
    }

    /// Backward pass: consumes the output-layer error from `residual` and
    /// updates every weight and bias exactly once, output to input. Returns
    /// the error projected all the way back to the input layer, which
    /// callers may use for diagnostics.
    ///
    /// Each layer's propagated error is computed in full against the
    /// pre-update weights before any parameter in that layer moves, so the
    /// projection never observes a half-updated weight row.
    pub fn backward(&mut self, error: &[f64]) -> Result<Vec<f64>> {
        let output_size = self.topology[self.topology.len() - 1];
        if error.len() != output_size {
            return Err(NetworkError::DimensionMismatch {
                expected: output_size,
                actual: error.len(),
            });
        }

        let lr = self.learning_rate;
        let mut current = error.to_vec();

        for i in (0..self.weights.len()).rev() {
            match self.mode {
                GradientMode::WeightGated => {
                    let propagated = back_project(&self.weights[i], &current, self.topology[i]);
                    for (j, row) in self.weights[i].iter_mut().enumerate() {
                        self.biases[i][j] -= lr * current[j];
                        for w in row.iter_mut() {
                            if *w > 0.0 {
                                *w -= lr * current[j];
                            }
                        }
                    }
                    current = propagated;
                }
                GradientMode::Derivative => {
                    let delta: Vec<f64> = current.iter()
                        .zip(self.pre_activations[i].iter())
                        .map(|(e, &z)| e * self.activation.derivative(z))
                        .collect();
                    let propagated = back_project(&self.weights[i], &delta, self.topology[i]);
                    let inputs = &self.activations[i];
                    for (j, row) in self.weights[i].iter_mut().enumerate() {
                        self.biases[i][j] -= lr * delta[j];
                        for (k, w) in row.iter_mut().enumerate() {
                            *w -= lr * delta[j] * inputs[k];
                        }
                    }
                    current = propagated;
                }
            }
        }

        Ok(current)
    }

    /// One training step on a single sample: forward, residual, backward.
    pub fn train(&mut self, input: &[f64], target: &[f64]) -> Result<()> {
        let output = self.forward(input)?;
        let error = residual(&output, target)?;
        self.backward(&error)?;
        Ok(())
    }
}

/// Weighted sum of a layer's errors through its incoming weights:
/// `projected[k] = Σ_j errors[j] · weights[j][k]`.
fn back_project(layer_weights: &[Vec<f64>], errors: &[f64], fan_in: usize) -> Vec<f64> {
    let mut projected = vec![0.0; fan_in];
    for (err, row) in errors.iter().zip(layer_weights.iter()) {
        for (p, w) in projected.iter_mut().zip(row.iter()) {
            *p += err * w;
        }
    }
    projected
}
