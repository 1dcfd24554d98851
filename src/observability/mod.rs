//! OpenTelemetry tracing exported to a local file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer provider → FileSpanExporter → rotating JSON file
//! ```
//!
//! Spans land in `~/.local/share/zellij/thriftflip/thriftflip-otlp.json` as
//! one OTLP JSON document per line. The file rotates at 10 MB and keeps
//! three numbered backups.
//!
//! The level comes from the `trace_level` plugin option and defaults to
//! `info`; any [`tracing_subscriber::EnvFilter`] directive is accepted.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::FileWriter;
pub use init::{init_tracing, DEFAULT_TRACE_LEVEL, SERVICE_NAME};
