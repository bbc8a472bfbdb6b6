use serde::Serialize;

use crate::layers::descriptor::{LayerDescriptor, LayerRole};
use crate::visual::options::{Orientation, RenderOptions};
use crate::visual::renderer::Renderer;

/// One box in the drawing, placed on an integer grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawingNode {
    pub index: usize,
    pub x: usize,
    pub y: usize,
    pub role: LayerRole,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation: Option<String>,
}

/// Dense connection between two neighbouring nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawingEdge {
    pub from: usize,
    pub to: usize,
    /// Number of unit-to-unit connections the edge stands for; `null` when
    /// the count does not fit in a `usize`.
    pub connections: Option<usize>,
}

/// Backend-neutral drawing instructions for a layer stack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drawing {
    pub orientation: Orientation,
    pub nodes: Vec<DrawingNode>,
    pub edges: Vec<DrawingEdge>,
}

impl Drawing {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Produces [`Drawing`]s for an external drawing backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct DrawingRenderer;

impl Renderer for DrawingRenderer {
    type Output = Drawing;

    fn name(&self) -> &'static str {
        "drawing"
    }

    fn draw(&self, layers: &[LayerDescriptor], options: &RenderOptions) -> Drawing {
        let nodes = layers
            .iter()
            .enumerate()
            .map(|(index, layer)| {
                let (x, y) = match options.orientation {
                    Orientation::Horizontal => (index, 0),
                    Orientation::Vertical => (0, index),
                };
                let width = options.show_widths.then(|| layer.width());
                let activation = options.show_activations.then(|| layer.activation().to_string());

                let mut label = layer.role().to_string();
                if let Some(w) = width {
                    label.push_str(&format!(" {w}"));
                }
                if let Some(a) = &activation {
                    label.push_str(&format!(" {a}"));
                }

                DrawingNode {
                    index,
                    x,
                    y,
                    role: layer.role(),
                    label,
                    width,
                    activation,
                }
            })
            .collect();

        let edges = layers
            .windows(2)
            .enumerate()
            .map(|(from, pair)| DrawingEdge {
                from,
                to: from + 1,
                connections: pair[0].width().checked_mul(pair[1].width()),
            })
            .collect();

        Drawing {
            orientation: options.orientation,
            nodes,
            edges,
        }
    }
}
