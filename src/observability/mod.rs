//! Tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer → FileSpanExporter → JSON lines
//! ```
//!
//! Traces land in `~/.local/share/zellij/tagpick/tagpick-otlp.json`, rotated
//! at 10 MB with three backups. The level comes from the `trace_level`
//! configuration key (an `EnvFilter` directive, default `info`).
//!
//! - [`init`]: subscriber and tracer provider setup
//! - [`exporter`]: OTLP JSON span exporter
//! - [`rotating`]: size-rotated line writer

mod exporter;
mod init;
mod rotating;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL, TRACE_FILE_NAME};
