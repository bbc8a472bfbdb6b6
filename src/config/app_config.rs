//! Run configuration read by the binary.
//!
//! Every section is optional; an empty JSON object yields the defaults.
//!
//! ```json
//! {
//!   "log":    { "level": "debug" },
//!   "render": { "orientation": "horizontal", "show_activations": true },
//!   "rule":   "fully_connected",
//!   "network": { "name": "xor", "layers": [ ... ] }
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::activation::ActivationFunction;
use crate::layers::descriptor::LayerRole;
use crate::network::builder::AdjacencyRule;
use crate::network::spec::{LayerSpec, NetworkSpec};
use crate::visual::options::RenderOptions;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `env_logger` filter used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig { level: "info".to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log: LogConfig,
    pub render: RenderOptions,
    pub rule: AdjacencyRule,
    /// Network to model; [`AppConfig::network_spec`] falls back to the
    /// built-in demo network when absent.
    pub network: Option<NetworkSpec>,
}

impl AppConfig {
    pub fn load_json(path: &str) -> Result<AppConfig, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(json: &str) -> Result<AppConfig, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn network_spec(&self) -> NetworkSpec {
        self.network.clone().unwrap_or_else(demo_network)
    }
}

/// 2 → 3 → 2 → 1 network with tanh hidden layers and a sigmoid output.
pub fn demo_network() -> NetworkSpec {
    let layer = |role, width, activation, name: &str| LayerSpec {
        role,
        width,
        activation,
        name: Some(name.to_owned()),
    };
    NetworkSpec {
        name: "demo".to_owned(),
        layers: vec![
            layer(LayerRole::Input, 2, ActivationFunction::Identity, "input_layer"),
            layer(LayerRole::Deep, 3, ActivationFunction::Tanh, "deep_layer_first"),
            layer(LayerRole::Deep, 2, ActivationFunction::Tanh, "deep_layer_second"),
            layer(LayerRole::Output, 1, ActivationFunction::Sigmoid, "output_layer"),
        ],
    }
}
