//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Spans are written to `~/.local/share/zellij/zunsplash/zunsplash-otlp.json`
//! in OTLP JSON, one batch per line, rotating at 10 MB with three backups.
//!
//! The span filter comes from `RUST_LOG`, then the `trace_level` option,
//! then defaults to `info`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: Rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
