use serde::{Deserialize, Serialize};
use std::fmt;

use crate::activation::activation::ActivationFunction;
use crate::error::{NetworkError, Result};

/// Position a layer occupies in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerRole {
    Input,
    /// Hidden layer between input and output.
    Deep,
    Output,
}

impl fmt::Display for LayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LayerRole::Input => "input",
            LayerRole::Deep => "deep",
            LayerRole::Output => "output",
        })
    }
}

/// Immutable description of one layer.
///
/// Fields:
/// - `role`       — input, deep (hidden) or output
/// - `width`      — number of units, always ≥ 1
/// - `activation` — activation tag applied after the linear transform
///
/// A layer may also carry a display name.  The name is a label only and
/// takes no part in equality.
#[derive(Debug, Clone)]
pub struct LayerDescriptor {
    role: LayerRole,
    width: usize,
    activation: ActivationFunction,
    name: Option<String>,
}

impl LayerDescriptor {
    /// Validates and builds a descriptor.  Fails with `InvalidLayerSpec` on a
    /// zero width or a non-finite activation parameter.
    pub fn new(role: LayerRole, width: usize, activation: ActivationFunction) -> Result<Self> {
        if width == 0 {
            return Err(NetworkError::InvalidLayerSpec(format!(
                "{role} layer width must be at least 1"
            )));
        }
        activation.validate()?;
        Ok(LayerDescriptor {
            role,
            width,
            activation,
            name: None,
        })
    }

    /// Same as [`LayerDescriptor::new`] but takes the activation as a string tag.
    pub fn from_tag(role: LayerRole, width: usize, activation: &str) -> Result<Self> {
        LayerDescriptor::new(role, width, activation.parse()?)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn role(&self) -> LayerRole {
        self.role
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }
}

impl PartialEq for LayerDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.role == other.role && self.width == other.width && self.activation == other.activation
    }
}

impl fmt::Display for LayerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.role, self.width, self.activation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn zero_width_is_rejected() {
        let err = LayerDescriptor::new(LayerRole::Deep, 0, ActivationFunction::ReLU).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLayerSpec);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = LayerDescriptor::from_tag(LayerRole::Input, 3, "softplus").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLayerSpec);
    }

    #[test]
    fn non_finite_parameter_is_rejected() {
        let act = ActivationFunction::Elu { alpha: f64::NAN };
        assert!(LayerDescriptor::new(LayerRole::Deep, 3, act).is_err());
    }

    #[test]
    fn equality_covers_all_fields() {
        let a = LayerDescriptor::new(LayerRole::Deep, 8, ActivationFunction::ReLU).unwrap();
        let b = LayerDescriptor::from_tag(LayerRole::Deep, 8, "relu").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, LayerDescriptor::new(LayerRole::Output, 8, ActivationFunction::ReLU).unwrap());
        assert_ne!(a, LayerDescriptor::new(LayerRole::Deep, 9, ActivationFunction::ReLU).unwrap());
        assert_ne!(a, LayerDescriptor::new(LayerRole::Deep, 8, ActivationFunction::Tanh).unwrap());
    }

    #[test]
    fn name_is_not_part_of_equality() {
        let plain = LayerDescriptor::new(LayerRole::Input, 2, ActivationFunction::Identity).unwrap();
        let named = plain.clone().with_name("input_layer");
        assert_eq!(named.name(), Some("input_layer"));
        assert_eq!(plain.name(), None);
        assert_eq!(plain, named);
    }

    #[test]
    fn display_is_compact() {
        let l = LayerDescriptor::new(LayerRole::Output, 2, ActivationFunction::Softmax).unwrap();
        assert_eq!(l.to_string(), "output(2, softmax)");
    }
}
