use serde::{Serialize, Deserialize};
use std::f64::consts::E;

use crate::error::{NetworkError, Result};

/// The closed set of supported unit activations. `Sigmoid` is the default
/// and the one the forward pass applies unless configured otherwise;
/// `SigmoidDerivative` and `ReLU` are selectable by tag or by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Activation {
    #[default]
    Sigmoid,
    SigmoidDerivative,
    ReLU,
}

impl Activation {
    /// Element-wise activation.
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            Activation::SigmoidDerivative => {
                let s = Activation::Sigmoid.apply(x);
                s * (1.0 - s)
            }
            Activation::ReLU => if x > 0.0 { x } else { 0.0 },
        }
    }

    /// Element-wise derivative of the activation. Only consumed by the
    /// derivative-mode backward pass; the weight-gated mode never scales
    /// by an activation derivative.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => {
                let s = self.apply(x);
                s * (1.0 - s)
            }
            Activation::SigmoidDerivative => {
                // d/dx σ'(x) = σ'(x)·(1 - 2σ(x))
                let s = Activation::Sigmoid.apply(x);
                s * (1.0 - s) * (1.0 - 2.0 * s)
            }
            Activation::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
        }
    }

    /// Resolves an activation by its external name. The accepted names are
    /// `"sigmoid"`, `"dSigmoid"` and `"relu"`; anything else is an
    /// `UnsupportedActivation` fault.
    pub fn from_name(name: &str) -> Result<Activation> {
        match name {
            "sigmoid" => Ok(Activation::Sigmoid),
            "dSigmoid" => Ok(Activation::SigmoidDerivative),
            "relu" => Ok(Activation::ReLU),
            other => Err(NetworkError::UnsupportedActivation(other.to_string())),
        }
    }
}
