//! I/O layer: the append-only log sinks the pipeline writes to.
pub mod sinks;
pub use sinks::LogSink;
