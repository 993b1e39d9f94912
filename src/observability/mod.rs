//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → /data/pixzel-otlp.json
//! ```
//!
//! Each exported batch is one line of OTLP JSON. The file rotates at 10 MB,
//! keeping 3 numbered backups.
//!
//! The level filter comes from the `trace_level` plugin option (default
//! `"info"`) and accepts any `EnvFilter` directive, e.g. `pixzel=debug`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider and the file span exporter
//! - [`span_formatter`]: OTLP JSON serialization
//! - [`file_writer`]: Size-rotated line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
