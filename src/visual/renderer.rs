use crate::error::{NetworkError, Result};
use crate::events::{Event, EventSink, LogSink, Severity};
use crate::layers::descriptor::{LayerDescriptor, LayerRole};
use crate::network::network::NetworkDescriptor;
use crate::visual::options::RenderOptions;

/// A rendering backend.
///
/// Backends only ever see a layer slice that [`Visualizer`] has already
/// checked, so `draw` cannot fail.
pub trait Renderer {
    type Output;

    fn name(&self) -> &'static str;

    fn draw(&self, layers: &[LayerDescriptor], options: &RenderOptions) -> Self::Output;
}

/// Adapter between a finalized network and a [`Renderer`].
///
/// Holds no reference to any builder and never mutates what it renders, so
/// one network can be handed to any number of visualizers.
pub struct Visualizer<'s, R> {
    renderer: R,
    options: RenderOptions,
    sink: &'s dyn EventSink,
}

impl<R: Renderer> Visualizer<'static, R> {
    pub fn new(renderer: R, options: RenderOptions) -> Self {
        Visualizer::with_sink(renderer, options, &LogSink)
    }
}

impl<'s, R: Renderer> Visualizer<'s, R> {
    pub fn with_sink(renderer: R, options: RenderOptions, sink: &'s dyn EventSink) -> Self {
        Visualizer { renderer, options, sink }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render(&self, network: &NetworkDescriptor) -> Result<R::Output> {
        self.render_layers(network.layers())
    }

    /// Renders a layer stack that did not necessarily come out of a builder.
    ///
    /// Fails with `RenderError` if there are fewer than two layers or the stack
    /// does not run from an input layer to an output layer.
    pub fn render_layers(&self, layers: &[LayerDescriptor]) -> Result<R::Output> {
        if let Err(e) = check_stack(layers) {
            self.sink.emit(&Event::new(Severity::Error, e.to_string()));
            return Err(e);
        }

        let output = self.renderer.draw(layers, &self.options);
        self.sink.emit(&Event::new(
            Severity::Info,
            format!("{} render complete: {} layers", self.renderer.name(), layers.len()),
        ));
        Ok(output)
    }
}

fn check_stack(layers: &[LayerDescriptor]) -> Result<()> {
    if layers.len() < 2 {
        return Err(NetworkError::RenderError(format!(
            "cannot render a network of depth {}",
            layers.len()
        )));
    }

    let last = layers.len() - 1;
    for (index, layer) in layers.iter().enumerate() {
        let expected = match index {
            0 => LayerRole::Input,
            i if i == last => LayerRole::Output,
            _ => LayerRole::Deep,
        };
        if layer.role() != expected {
            return Err(NetworkError::RenderError(format!(
                "layer {index} is {}, expected {expected}",
                layer.role()
            )));
        }
    }
    Ok(())
}
