use crate::layers::descriptor::LayerDescriptor;
use crate::network::network::dense_parameter_count;
use crate::visual::options::{Orientation, RenderOptions};
use crate::visual::renderer::Renderer;

/// Plain-text rendering of a layer stack.
///
/// Vertical output puts one layer per line with a `|` row between layers;
/// horizontal output puts every layer in a `[...]` box on one line, joined by
/// `->`.  Both start with a header naming depth and parameter estimate.
/// Named layers get their name appended in parentheses.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

// Longest role name ("output").
const ROLE_COLUMN: usize = 6;

impl Renderer for TextRenderer {
    type Output = String;

    fn name(&self) -> &'static str {
        "text"
    }

    fn draw(&self, layers: &[LayerDescriptor], options: &RenderOptions) -> String {
        let header = match dense_parameter_count(layers) {
            Some(count) => format!("network: {} layers, {count} parameters", layers.len()),
            None => format!(
                "network: {} layers, more than {} parameters",
                layers.len(),
                usize::MAX
            ),
        };

        let body = match options.orientation {
            Orientation::Vertical => vertical(layers, options),
            Orientation::Horizontal => horizontal(layers, options),
        };

        format!("{header}\n{body}\n")
    }
}

fn vertical(layers: &[LayerDescriptor], options: &RenderOptions) -> String {
    let width_column = layers
        .iter()
        .map(|l| l.width().to_string().len())
        .max()
        .unwrap_or(1);

    let rows: Vec<String> = layers
        .iter()
        .enumerate()
        .map(|(index, layer)| {
            let role = layer.role().to_string();
            let mut parts = vec![
                format!("[{index}]"),
                format!("{:<width$}", role, width = ROLE_COLUMN),
            ];
            if options.show_widths {
                parts.push(format!("{:>width_column$}", layer.width()));
            }
            if options.show_activations {
                parts.push(layer.activation().to_string());
            }
            if let Some(name) = layer.name() {
                parts.push(format!("({name})"));
            }
            parts.join(" ").trim_end().to_owned()
        })
        .collect();

    rows.join("\n |\n")
}

fn horizontal(layers: &[LayerDescriptor], options: &RenderOptions) -> String {
    layers
        .iter()
        .map(|layer| {
            let mut parts = vec![layer.role().to_string()];
            if options.show_widths {
                parts.push(layer.width().to_string());
            }
            if options.show_activations {
                parts.push(layer.activation().to_string());
            }
            if let Some(name) = layer.name() {
                parts.push(format!("({name})"));
            }
            format!("[{}]", parts.join(" "))
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}
