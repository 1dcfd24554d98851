//! Subscriber setup for the tracing pipeline.

use super::file_writer::{FileWriter, DEFAULT_MAX_BACKUPS, DEFAULT_MAX_BYTES};
use super::tracer;
use crate::infrastructure::trace_file_path;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name on exported spans.
pub const SERVICE_NAME: &str = "ThriftFlip";

/// Level used when the configuration sets none.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber: an [`EnvFilter`] at the configured level
/// feeding an OpenTelemetry layer that exports to the rotating trace file.
///
/// Tracing is optional. If the data directory cannot be created the
/// subscriber is not installed, and later calls after a successful one are
/// no-ops.
///
/// ```rust
/// use thriftflip::observability::init_tracing;
/// use thriftflip::Config;
///
/// init_tracing(&Config {
///     trace_level: Some("debug".to_string()),
///     ..Config::default()
/// });
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .as_deref()
        .unwrap_or(DEFAULT_TRACE_LEVEL);

    let trace_file = trace_file_path();
    if let Some(dir) = trace_file.parent() {
        if std::fs::create_dir_all(dir).is_err() {
            return;
        }
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let writer = FileWriter::with_limits(trace_file, DEFAULT_MAX_BYTES, DEFAULT_MAX_BACKUPS);
    let provider = tracer::create_tracer_provider(writer, resource, SERVICE_NAME);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)));

    let _ = subscriber.try_init();
}
