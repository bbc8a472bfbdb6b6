pub mod drawing;
pub mod options;
pub mod renderer;
pub mod text;

pub use drawing::{Drawing, DrawingEdge, DrawingNode, DrawingRenderer};
pub use options::{Orientation, RenderFormat, RenderOptions};
pub use renderer::{Renderer, Visualizer};
pub use text::TextRenderer;
