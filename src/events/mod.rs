pub mod sink;

pub use sink::{Event, EventSink, LogSink, NullSink, RecordingSink, Severity};
