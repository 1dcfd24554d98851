//! OpenTelemetry tracer provider backed by a file span exporter.
//!
//! Spans are exported synchronously through the simple span processor, so
//! each finished span is on disk before the next Zellij event is handled.

use super::file_writer::FileWriter;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::sync::atomic::{AtomicBool, Ordering};

/// Span exporter writing one OTLP JSON line per batch.
struct FileSpanExporter {
    writer: FileWriter,
    formatter: SpanFormatter,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(writer: FileWriter, formatter: SpanFormatter) -> Self {
        Self {
            writer,
            formatter,
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("exporter is shut down"));
        }
        let line = self.formatter.format_batch(batch).to_string();
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    // The resource is fixed at construction.
    fn set_resource(&mut self, _resource: &Resource) {}
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("formatter", &self.formatter)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a tracer provider that exports every span through `writer`.
///
/// `scope` names the instrumentation scope in the exported documents.
pub fn create_tracer_provider(
    writer: FileWriter,
    resource: Resource,
    scope: &'static str,
) -> TracerProvider {
    let exporter = FileSpanExporter::new(writer, SpanFormatter::new(resource.clone(), scope));

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;

    fn exporter(dir: &tempfile::TempDir) -> FileSpanExporter {
        FileSpanExporter::new(
            FileWriter::new(dir.path().join("trace.json")),
            SpanFormatter::new(
                Resource::new(vec![KeyValue::new("service.name", "ThriftFlip")]),
                "ThriftFlip",
            ),
        )
    }

    #[test]
    fn writes_one_line_per_batch() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = exporter(&dir);
        exporter.write_batch(&[]).unwrap();
        exporter.write_batch(&[]).unwrap();

        let contents = std::fs::read_to_string(dir.path().join("trace.json")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let doc: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(doc["resourceSpans"][0]["scopeSpans"][0]["scope"]["name"], "ThriftFlip");
    }

    #[test]
    fn rejects_exports_after_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter = exporter(&dir);
        exporter.shutdown();
        assert!(exporter.write_batch(&[]).is_err());
        assert!(!dir.path().join("trace.json").exists());
    }
}
