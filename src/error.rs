//! Error types for network construction, inspection and rendering.

use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Fieldless discriminant of a [`NetworkError`], handy for assertions and
/// exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidLayerSpec,
    MissingInputLayer,
    DuplicateInputLayer,
    DuplicateOutputLayer,
    IncompleteNetwork,
    AlreadyFinalized,
    IndexOutOfRange,
    IncompatibleWidth,
    RenderError,
}

/// Every failure the builder, descriptor and visualizer can report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Width of zero, unknown activation tag or non-finite activation parameter.
    #[error("invalid layer spec: {0}")]
    InvalidLayerSpec(String),

    #[error("no input layer has been added (layer {index})")]
    MissingInputLayer { index: usize },

    #[error("input layer must be added exactly once and first (layer {index})")]
    DuplicateInputLayer { index: usize },

    #[error("output layer already added (layer {index})")]
    DuplicateOutputLayer { index: usize },

    #[error("network is incomplete: missing {missing} layer")]
    IncompleteNetwork { missing: &'static str },

    #[error("builder has already been finalized")]
    AlreadyFinalized,

    #[error("layer index {index} out of range for depth {depth}")]
    IndexOutOfRange { index: usize, depth: usize },

    #[error("layer {index} has width {found}, expected {expected}")]
    IncompatibleWidth {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("render failed: {0}")]
    RenderError(String),
}

impl NetworkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NetworkError::InvalidLayerSpec(_) => ErrorKind::InvalidLayerSpec,
            NetworkError::MissingInputLayer { .. } => ErrorKind::MissingInputLayer,
            NetworkError::DuplicateInputLayer { .. } => ErrorKind::DuplicateInputLayer,
            NetworkError::DuplicateOutputLayer { .. } => ErrorKind::DuplicateOutputLayer,
            NetworkError::IncompleteNetwork { .. } => ErrorKind::IncompleteNetwork,
            NetworkError::AlreadyFinalized => ErrorKind::AlreadyFinalized,
            NetworkError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            NetworkError::IncompatibleWidth { .. } => ErrorKind::IncompatibleWidth,
            NetworkError::RenderError(_) => ErrorKind::RenderError,
        }
    }

    /// Index of the offending layer, when the failure concerns one.
    pub fn layer_index(&self) -> Option<usize> {
        match self {
            NetworkError::MissingInputLayer { index }
            | NetworkError::DuplicateInputLayer { index }
            | NetworkError::DuplicateOutputLayer { index }
            | NetworkError::IndexOutOfRange { index, .. }
            | NetworkError::IncompatibleWidth { index, .. } => Some(*index),
            _ => None,
        }
    }
}
