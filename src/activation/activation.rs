use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NetworkError;

/// Activation applied after a layer's linear transform.
///
/// Only the tag is modeled; no activation is ever evaluated.  In JSON the
/// activation is written as its string tag, e.g. `"relu"` or `"leaky_relu:0.2"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ActivationFunction {
    Identity,
    ReLU,
    Sigmoid,
    Tanh,
    /// Vector-valued; normally only meaningful on the output layer.
    Softmax,
    LeakyReLU { alpha: f64 },
    Elu { alpha: f64 },
    Gelu,
    Swish,
}

const DEFAULT_LEAKY_ALPHA: f64 = 0.01;
const DEFAULT_ELU_ALPHA: f64 = 1.0;

impl ActivationFunction {
    /// Short lowercase tag without parameters.
    pub fn tag(&self) -> &'static str {
        match self {
            ActivationFunction::Identity => "identity",
            ActivationFunction::ReLU => "relu",
            ActivationFunction::Sigmoid => "sigmoid",
            ActivationFunction::Tanh => "tanh",
            ActivationFunction::Softmax => "softmax",
            ActivationFunction::LeakyReLU { .. } => "leaky_relu",
            ActivationFunction::Elu { .. } => "elu",
            ActivationFunction::Gelu => "gelu",
            ActivationFunction::Swish => "swish",
        }
    }

    /// Checks that parameterized variants carry a finite parameter.
    pub fn validate(&self) -> Result<(), NetworkError> {
        match self {
            ActivationFunction::LeakyReLU { alpha } | ActivationFunction::Elu { alpha }
                if !alpha.is_finite() =>
            {
                Err(NetworkError::InvalidLayerSpec(format!(
                    "activation `{}` needs a finite alpha, got {alpha}",
                    self.tag()
                )))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationFunction::LeakyReLU { alpha } | ActivationFunction::Elu { alpha } => {
                write!(f, "{}:{alpha}", self.tag())
            }
            _ => f.write_str(self.tag()),
        }
    }
}

impl FromStr for ActivationFunction {
    type Err = NetworkError;

    /// Parses a tag such as `relu`, `Tanh` or `elu:0.5`.  `linear` is accepted
    /// as an alias of `identity`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, param) = match s.trim().split_once(':') {
            Some((name, param)) => (name.trim(), Some(param.trim())),
            None => (s.trim(), None),
        };
        let name = name.to_ascii_lowercase();

        let alpha = |default: f64| -> Result<f64, NetworkError> {
            match param {
                None => Ok(default),
                Some(p) => p.parse::<f64>().map_err(|_| {
                    NetworkError::InvalidLayerSpec(format!("bad activation parameter `{p}`"))
                }),
            }
        };

        let activation = match name.as_str() {
            "identity" | "linear" => ActivationFunction::Identity,
            "relu" => ActivationFunction::ReLU,
            "sigmoid" => ActivationFunction::Sigmoid,
            "tanh" => ActivationFunction::Tanh,
            "softmax" => ActivationFunction::Softmax,
            "gelu" => ActivationFunction::Gelu,
            "swish" => ActivationFunction::Swish,
            "leaky_relu" | "leakyrelu" => ActivationFunction::LeakyReLU {
                alpha: alpha(DEFAULT_LEAKY_ALPHA)?,
            },
            "elu" => ActivationFunction::Elu {
                alpha: alpha(DEFAULT_ELU_ALPHA)?,
            },
            _ => {
                return Err(NetworkError::InvalidLayerSpec(format!(
                    "unknown activation `{s}`"
                )))
            }
        };

        let takes_param = matches!(
            activation,
            ActivationFunction::LeakyReLU { .. } | ActivationFunction::Elu { .. }
        );
        if param.is_some() && !takes_param {
            return Err(NetworkError::InvalidLayerSpec(format!(
                "activation `{name}` takes no parameter"
            )));
        }

        activation.validate()?;
        Ok(activation)
    }
}

impl TryFrom<String> for ActivationFunction {
    type Error = NetworkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ActivationFunction> for String {
    fn from(value: ActivationFunction) -> Self {
        value.to_string()
    }
}
