//! Diagnostic events emitted by the builder and the visualizer.
//!
//! The core never touches logger setup.  It only hands [`Event`]s to whatever
//! [`EventSink`] the caller injected; the binary wires [`LogSink`] to the `log`
//! facade after initializing `env_logger`.

use std::cell::RefCell;

use log::{log, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<Severity> for Level {
    fn from(value: Severity) -> Self {
        match value {
            Severity::Debug => Level::Debug,
            Severity::Info => Level::Info,
            Severity::Warn => Level::Warn,
            Severity::Error => Level::Error,
        }
    }
}

/// A single structured diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub severity: Severity,
    pub message: String,
    /// Layer the event concerns, if any.
    pub layer_index: Option<usize>,
}

impl Event {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Event {
            severity,
            message: message.into(),
            layer_index: None,
        }
    }

    pub fn at_layer(mut self, index: usize) -> Self {
        self.layer_index = Some(index);
        self
    }
}

/// Receiver of diagnostic events.
pub trait EventSink {
    fn emit(&self, event: &Event);
}

/// Forwards events to the `log` facade, with the layer index as a key-value.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: &Event) {
        let level = Level::from(event.severity);
        match event.layer_index {
            Some(index) => log!(level, layer_index = index; "{}", event.message),
            None => log!(level, "{}", event.message),
        }
    }
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &Event) {}
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<Event>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.severity == severity)
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &Event) {
        self.events.borrow_mut().push(event.clone());
    }
}
