use crate::error::{NetworkError, Result};
use crate::layers::descriptor::{LayerDescriptor, LayerRole};
use crate::network::spec::{LayerSpec, NetworkSpec};

/// A finalized, immutable layer stack.
///
/// Only [`LayerBuilder::finalize`](crate::LayerBuilder::finalize) creates one,
/// so the first layer is always the input, the last is always the output and
/// there are at least two layers.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkDescriptor {
    layers: Box<[LayerDescriptor]>,
}

impl NetworkDescriptor {
    pub(crate) fn from_validated(layers: Vec<LayerDescriptor>) -> NetworkDescriptor {
        debug_assert!(layers.len() >= 2);
        debug_assert_eq!(layers.first().map(|l| l.role()), Some(LayerRole::Input));
        debug_assert_eq!(layers.last().map(|l| l.role()), Some(LayerRole::Output));
        NetworkDescriptor { layers: layers.into_boxed_slice() }
    }

    /// Number of layers, input and output included.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    pub fn layer_at(&self, index: usize) -> Result<&LayerDescriptor> {
        self.layers.get(index).ok_or(NetworkError::IndexOutOfRange {
            index,
            depth: self.depth(),
        })
    }

    /// Widths in network order.
    pub fn shape_sequence(&self) -> Vec<usize> {
        self.layers.iter().map(LayerDescriptor::width).collect()
    }

    pub fn layers(&self) -> &[LayerDescriptor] {
        &self.layers
    }

    pub fn input(&self) -> &LayerDescriptor {
        &self.layers[0]
    }

    pub fn output(&self) -> &LayerDescriptor {
        &self.layers[self.layers.len() - 1]
    }

    /// The deep layers between input and output; may be empty.
    pub fn hidden_layers(&self) -> &[LayerDescriptor] {
        &self.layers[1..self.layers.len() - 1]
    }

    /// Weight and bias count of the equivalent dense network.  The input
    /// layer carries no parameters of its own.  `None` when the count does
    /// not fit in a `usize`.
    pub fn parameter_count(&self) -> Option<usize> {
        dense_parameter_count(&self.layers)
    }

    /// Serializable declaration of this network under `name`.
    pub fn to_spec(&self, name: impl Into<String>) -> NetworkSpec {
        NetworkSpec {
            name: name.into(),
            layers: self.layers.iter().map(LayerSpec::from).collect(),
        }
    }
}

pub(crate) fn dense_parameter_count(layers: &[LayerDescriptor]) -> Option<usize> {
    layers.windows(2).try_fold(0usize, |total, pair| {
        let (fan_in, units) = (pair[0].width(), pair[1].width());
        fan_in
            .checked_mul(units)?
            .checked_add(units)?
            .checked_add(total)
    })
}

impl<'a> IntoIterator for &'a NetworkDescriptor {
    type Item = &'a LayerDescriptor;
    type IntoIter = std::slice::Iter<'a, LayerDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}
