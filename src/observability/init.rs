//! Tracing initialization and subscriber setup.
//!
//! Wires `tracing` macros through `tracing-opentelemetry` into the file-based
//! span exporter.

use super::exporter::FileSpanExporter;
use super::file_writer::FileWriter;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::export::trace::SpanExporter as _;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and scope name attached to every exported span.
const SERVICE_NAME: &str = "Zoutline";

/// Filter used when `trace_level` is not configured.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters spans based on configured trace level
/// 2. Exports spans to OpenTelemetry
/// 3. Serializes spans to OTLP JSON format
/// 4. Writes to rotating file with backups
///
/// Traces go to `~/.local/share/zellij/zoutline/zoutline-otlp.json` (seen as
/// `/host/...` from inside the sandbox).
///
/// # Initialization Behavior
///
/// - Creates data directory if it doesn't exist
/// - Returns without tracing if directory creation fails (observability is optional)
/// - Idempotent: Safe to call multiple times (only first call takes effect)
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let data_dir = paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);

    let mut exporter = FileSpanExporter::new(FileWriter::new(paths::trace_file_path()), SERVICE_NAME);
    exporter.set_resource(&resource);

    // simple exporter: each span is written as soon as it ends
    let provider = TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build();

    let tracer = provider.tracer(SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
