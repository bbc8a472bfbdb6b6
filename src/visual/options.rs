use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

/// Which renderer the binary hands the network to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderFormat {
    #[default]
    Text,
    /// JSON drawing instructions.
    Drawing,
}

/// Options recognized by every renderer.
///
/// Missing fields deserialize to their defaults, so `{}` is a valid value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub orientation: Orientation,
    pub show_activations: bool,
    pub show_widths: bool,
    pub format: RenderFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            orientation: Orientation::default(),
            show_activations: true,
            show_widths: true,
            format: RenderFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let opts: RenderOptions =
            serde_json::from_str(r#"{ "orientation": "horizontal", "show_widths": false }"#).unwrap();
        assert_eq!(opts.orientation, Orientation::Horizontal);
        assert!(!opts.show_widths);
        assert!(opts.show_activations);
        assert_eq!(opts.format, RenderFormat::Text);
    }
}
