pub mod activation;
pub mod config;
pub mod error;
pub mod events;
pub mod layers;
pub mod network;
pub mod visual;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use error::{ErrorKind, NetworkError, Result};
pub use events::{Event, EventSink, LogSink, NullSink, RecordingSink, Severity};
pub use layers::descriptor::{LayerDescriptor, LayerRole};
pub use network::builder::{AdjacencyRule, LayerBuilder};
pub use network::network::NetworkDescriptor;
pub use network::spec::{LayerSpec, NetworkSpec};
pub use visual::{DrawingRenderer, Orientation, RenderFormat, RenderOptions, Renderer, TextRenderer, Visualizer};
