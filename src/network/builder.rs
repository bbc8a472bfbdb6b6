use serde::{Deserialize, Serialize};
use std::fmt;

use crate::activation::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::events::{Event, EventSink, LogSink, Severity};
use crate::layers::descriptor::{LayerDescriptor, LayerRole};
use crate::network::network::NetworkDescriptor;

/// How the width of a layer must relate to the width of the layer before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyRule {
    /// Dense connections: any width may follow any width.
    #[default]
    FullyConnected,
    /// Every layer must keep the width of the layer it follows.
    EqualWidth,
}

impl fmt::Display for AdjacencyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AdjacencyRule::FullyConnected => "fully_connected",
            AdjacencyRule::EqualWidth => "equal_width",
        })
    }
}

/// Staged accumulator for a [`NetworkDescriptor`].
///
/// Layers must arrive as input → deep* → output.  Each `add_*` call checks
/// its own stage and the adjacency rule, so a structural mistake is reported
/// by the call that made it.  A failing call leaves the builder untouched and
/// emits one error event through the injected sink.
///
/// ```
/// use layer_stack::{ActivationFunction, LayerBuilder};
///
/// let mut b = LayerBuilder::new();
/// b.add_input(4, ActivationFunction::Identity).unwrap();
/// b.add_deep(8, ActivationFunction::ReLU).unwrap();
/// b.add_output(2, ActivationFunction::Softmax).unwrap();
/// let network = b.finalize().unwrap();
/// assert_eq!(network.shape_sequence(), vec![4, 8, 2]);
/// ```
pub struct LayerBuilder<'s> {
    pending: Vec<LayerDescriptor>,
    finalized: bool,
    rule: AdjacencyRule,
    sink: &'s dyn EventSink,
}

impl LayerBuilder<'static> {
    /// Fully-connected builder reporting through the `log` facade.
    pub fn new() -> Self {
        LayerBuilder::with_sink(AdjacencyRule::default(), &LogSink)
    }
}

impl Default for LayerBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'s> LayerBuilder<'s> {
    pub fn with_sink(rule: AdjacencyRule, sink: &'s dyn EventSink) -> Self {
        sink.emit(&Event::new(
            Severity::Info,
            format!("layer builder created with adjacency rule `{rule}`"),
        ));
        LayerBuilder {
            pending: Vec::new(),
            finalized: false,
            rule,
            sink,
        }
    }

    pub fn rule(&self) -> AdjacencyRule {
        self.rule
    }

    /// Number of layers appended so far.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    fn has_input(&self) -> bool {
        self.pending.first().is_some_and(|l| l.role() == LayerRole::Input)
    }

    fn has_output(&self) -> bool {
        self.pending.last().is_some_and(|l| l.role() == LayerRole::Output)
    }

    pub fn add_input(&mut self, width: usize, activation: ActivationFunction) -> Result<()> {
        self.append(LayerRole::Input, width, activation, None)
    }

    pub fn add_deep(&mut self, width: usize, activation: ActivationFunction) -> Result<()> {
        self.append(LayerRole::Deep, width, activation, None)
    }

    pub fn add_output(&mut self, width: usize, activation: ActivationFunction) -> Result<()> {
        self.append(LayerRole::Output, width, activation, None)
    }

    /// Appends a layer of any role; `add_input`, `add_deep` and `add_output`
    /// all land here.
    pub fn add(&mut self, role: LayerRole, width: usize, activation: ActivationFunction) -> Result<()> {
        self.append(role, width, activation, None)
    }

    /// Like [`LayerBuilder::add`], labelling the layer with `name`.
    pub fn add_named(
        &mut self,
        role: LayerRole,
        width: usize,
        activation: ActivationFunction,
        name: impl Into<String>,
    ) -> Result<()> {
        self.append(role, width, activation, Some(name.into()))
    }

    pub fn with_input(mut self, width: usize, activation: ActivationFunction) -> Result<Self> {
        self.add_input(width, activation)?;
        Ok(self)
    }

    pub fn with_deep(mut self, width: usize, activation: ActivationFunction) -> Result<Self> {
        self.add_deep(width, activation)?;
        Ok(self)
    }

    pub fn with_output(mut self, width: usize, activation: ActivationFunction) -> Result<Self> {
        self.add_output(width, activation)?;
        Ok(self)
    }

    fn append(
        &mut self,
        role: LayerRole,
        width: usize,
        activation: ActivationFunction,
        name: Option<String>,
    ) -> Result<()> {
        match self.check_append(role, width, activation) {
            Ok(mut layer) => {
                if let Some(name) = name {
                    layer = layer.with_name(name);
                }
                self.sink.emit(
                    &Event::new(Severity::Debug, format!("appended {layer}")).at_layer(self.pending.len()),
                );
                self.pending.push(layer);
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    fn check_append(
        &self,
        role: LayerRole,
        width: usize,
        activation: ActivationFunction,
    ) -> Result<LayerDescriptor> {
        if self.finalized {
            return Err(NetworkError::AlreadyFinalized);
        }

        let index = self.pending.len();
        match role {
            LayerRole::Input if !self.pending.is_empty() => {
                return Err(NetworkError::DuplicateInputLayer { index });
            }
            LayerRole::Deep | LayerRole::Output if !self.has_input() => {
                return Err(NetworkError::MissingInputLayer { index });
            }
            LayerRole::Deep | LayerRole::Output if self.has_output() => {
                return Err(NetworkError::DuplicateOutputLayer { index });
            }
            _ => {}
        }

        let layer = LayerDescriptor::new(role, width, activation)?;

        if let (AdjacencyRule::EqualWidth, Some(prev)) = (self.rule, self.pending.last()) {
            if prev.width() != width {
                return Err(NetworkError::IncompatibleWidth {
                    index,
                    expected: prev.width(),
                    found: width,
                });
            }
        }

        Ok(layer)
    }

    /// Reports a validation failure to the sink and hands the error back.
    fn fail(&self, error: NetworkError) -> NetworkError {
        let mut event = Event::new(Severity::Error, error.to_string());
        event.layer_index = error.layer_index();
        self.sink.emit(&event);
        error
    }

    /// Moves the pending layers into an immutable [`NetworkDescriptor`].
    ///
    /// After a successful call the builder is inert: every further `add_*`
    /// or `finalize` fails with `AlreadyFinalized`.
    pub fn finalize(&mut self) -> Result<NetworkDescriptor> {
        if self.finalized {
            return Err(self.fail(NetworkError::AlreadyFinalized));
        }
        if !self.has_input() {
            return Err(self.fail(NetworkError::IncompleteNetwork { missing: "input" }));
        }
        if !self.has_output() {
            return Err(self.fail(NetworkError::IncompleteNetwork { missing: "output" }));
        }

        self.finalized = true;
        let network = NetworkDescriptor::from_validated(std::mem::take(&mut self.pending));
        self.sink.emit(&Event::new(
            Severity::Info,
            format!("network finalized with {} layers", network.depth()),
        ));
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::events::{NullSink, RecordingSink};
    use ActivationFunction::*;

    fn builder() -> LayerBuilder<'static> {
        LayerBuilder::with_sink(AdjacencyRule::FullyConnected, &NullSink)
    }

    #[test]
    fn input_then_output_gives_depth_two() {
        for (w_in, w_out) in [(1, 1), (3, 7), (784, 10)] {
            let mut b = builder();
            b.add_input(w_in, Identity).unwrap();
            b.add_output(w_out, Sigmoid).unwrap();
            let n = b.finalize().unwrap();
            assert_eq!(n.depth(), 2);
            assert_eq!(n.layer_at(0).unwrap().role(), LayerRole::Input);
            assert_eq!(n.layer_at(1).unwrap().role(), LayerRole::Output);
        }
    }

    #[test]
    fn second_input_is_duplicate() {
        let mut b = builder();
        b.add_input(2, Identity).unwrap();
        let err = b.add_input(2, Identity).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateInputLayer);
    }

    #[test]
    fn input_after_output_is_duplicate() {
        let mut b = builder();
        b.add_input(2, Identity).unwrap();
        b.add_output(1, Sigmoid).unwrap();
        assert_eq!(b.add_input(2, Identity).unwrap_err().kind(), ErrorKind::DuplicateInputLayer);
    }

    #[test]
    fn deep_and_output_need_input() {
        let mut b = builder();
        assert_eq!(b.add_deep(8, ReLU).unwrap_err().kind(), ErrorKind::MissingInputLayer);
        assert_eq!(b.add_output(2, Softmax).unwrap_err().kind(), ErrorKind::MissingInputLayer);
        assert!(b.is_empty());
    }

    #[test]
    fn second_output_is_duplicate() {
        let mut b = builder();
        b.add_input(2, Identity).unwrap();
        b.add_output(1, Sigmoid).unwrap();
        assert_eq!(b.add_output(1, Sigmoid).unwrap_err().kind(), ErrorKind::DuplicateOutputLayer);
    }

    #[test]
    fn deep_after_output_is_rejected() {
        let mut b = builder();
        b.add_input(2, Identity).unwrap();
        b.add_output(1, Sigmoid).unwrap();
        let err = b.add_deep(4, ReLU).unwrap_err();
        assert_eq!(err, NetworkError::DuplicateOutputLayer { index: 2 });
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn invalid_width_leaves_builder_unchanged() {
        let mut b = builder();
        b.add_input(2, Identity).unwrap();
        assert_eq!(b.add_deep(0, ReLU).unwrap_err().kind(), ErrorKind::InvalidLayerSpec);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn finalize_requires_output() {
        let mut b = builder();
        b.add_input(4, Identity).unwrap();
        b.add_deep(4, ReLU).unwrap();
        assert_eq!(
            b.finalize().unwrap_err(),
            NetworkError::IncompleteNetwork { missing: "output" }
        );
        assert!(!b.is_finalized());
    }

    #[test]
    fn finalize_on_empty_builder_is_incomplete() {
        let mut b = builder();
        assert_eq!(
            b.finalize().unwrap_err(),
            NetworkError::IncompleteNetwork { missing: "input" }
        );
    }

    #[test]
    fn everything_fails_after_finalize() {
        let mut b = builder();
        b.add_input(4, Identity).unwrap();
        b.add_output(2, Softmax).unwrap();
        b.finalize().unwrap();

        assert!(b.is_finalized());
        assert!(b.is_empty());
        assert_eq!(b.add_input(4, Identity).unwrap_err(), NetworkError::AlreadyFinalized);
        assert_eq!(b.add_deep(4, ReLU).unwrap_err(), NetworkError::AlreadyFinalized);
        assert_eq!(b.add_output(4, ReLU).unwrap_err(), NetworkError::AlreadyFinalized);
        assert_eq!(b.finalize().unwrap_err(), NetworkError::AlreadyFinalized);
    }

    #[test]
    fn equal_width_rule_rejects_width_change() {
        let mut b = LayerBuilder::with_sink(AdjacencyRule::EqualWidth, &NullSink);
        b.add_input(8, Identity).unwrap();
        b.add_deep(8, ReLU).unwrap();
        let err = b.add_output(2, Softmax).unwrap_err();
        assert_eq!(
            err,
            NetworkError::IncompatibleWidth { index: 2, expected: 8, found: 2 }
        );
        b.add_output(8, Softmax).unwrap();
        assert_eq!(b.finalize().unwrap().shape_sequence(), vec![8, 8, 8]);
    }

    #[test]
    fn fully_connected_rule_allows_any_width() {
        let mut b = builder();
        b.add_input(3, Identity).unwrap();
        b.add_deep(100, ReLU).unwrap();
        b.add_deep(1, ReLU).unwrap();
        b.add_output(50, Identity).unwrap();
        assert_eq!(b.finalize().unwrap().depth(), 4);
    }

    #[test]
    fn failures_emit_one_error_event_with_index() {
        let sink = RecordingSink::new();
        let mut b = LayerBuilder::with_sink(AdjacencyRule::FullyConnected, &sink);
        b.add_input(2, Identity).unwrap();
        b.add_input(2, Identity).unwrap_err();

        assert_eq!(sink.count(Severity::Error), 1);
        let error = sink
            .events()
            .into_iter()
            .find(|e| e.severity == Severity::Error)
            .unwrap();
        assert_eq!(error.layer_index, Some(1));
    }

    #[test]
    fn creation_logs_the_rule() {
        let sink = RecordingSink::new();
        let _b = LayerBuilder::with_sink(AdjacencyRule::EqualWidth, &sink);
        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity, Severity::Info);
        assert!(events[0].message.contains("equal_width"));
    }

    #[test]
    fn named_layers_keep_their_names() {
        let mut b = builder();
        b.add_named(LayerRole::Input, 2, Identity, "input_layer").unwrap();
        b.add(LayerRole::Output, 1, Sigmoid).unwrap();
        let n = b.finalize().unwrap();
        assert_eq!(n.input().name(), Some("input_layer"));
        assert_eq!(n.output().name(), None);
    }

    #[test]
    fn chained_construction() -> Result<()> {
        let network = builder()
            .with_input(2, Identity)?
            .with_deep(3, Tanh)?
            .with_output(1, Sigmoid)?
            .finalize()?;
        assert_eq!(network.shape_sequence(), vec![2, 3, 1]);
        Ok(())
    }
}
