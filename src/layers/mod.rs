pub mod descriptor;

pub use descriptor::{LayerDescriptor, LayerRole};
