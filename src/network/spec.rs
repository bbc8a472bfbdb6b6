use serde::{Deserialize, Serialize};

use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::events::EventSink;
use crate::layers::descriptor::{LayerDescriptor, LayerRole};
use crate::network::builder::{AdjacencyRule, LayerBuilder};
use crate::network::network::NetworkDescriptor;

/// Describes one layer in a network specification.
///
/// Fields:
/// - `role`       — `input`, `deep` or `output`
/// - `width`      — number of units in this layer
/// - `activation` — activation tag, e.g. `"relu"` or `"elu:0.5"`
/// - `name`       — optional label shown by the text renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub role: LayerRole,
    pub width: usize,
    pub activation: ActivationFunction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<&LayerDescriptor> for LayerSpec {
    fn from(layer: &LayerDescriptor) -> Self {
        LayerSpec {
            role: layer.role(),
            width: layer.width(),
            activation: layer.activation(),
            name: layer.name().map(str::to_owned),
        }
    }
}

/// A serializable declaration of a network architecture.
///
/// Nothing here is validated until [`NetworkSpec::build`] replays the layers
/// through a [`LayerBuilder`], so a spec read from disk gets exactly the same
/// staged checks as a network assembled in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name shown in rendered headers.
    pub name: String,
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
}

impl NetworkSpec {
    /// Replays every layer through a fresh builder and finalizes it.
    pub fn build(&self, rule: AdjacencyRule, sink: &dyn EventSink) -> Result<NetworkDescriptor> {
        let mut builder = LayerBuilder::with_sink(rule, sink);
        for layer in &self.layers {
            match &layer.name {
                Some(name) => builder.add_named(layer.role, layer.width, layer.activation, name.as_str())?,
                None => builder.add(layer.role, layer.width, layer.activation)?,
            }
        }
        builder.finalize()
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
