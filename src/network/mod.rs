pub mod builder;
pub mod network;
pub mod spec;

pub use builder::{AdjacencyRule, LayerBuilder};
pub use network::NetworkDescriptor;
pub use spec::{LayerSpec, NetworkSpec};
