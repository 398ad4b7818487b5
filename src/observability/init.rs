//! Subscriber setup.

use super::exporter::{FileSpanExporter, SCOPE_NAME};
use super::rotating::RotatingFile;
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `trace_level` is not configured.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "tagpick-otlp.json";

/// Installs the global subscriber exporting spans to
/// `~/.local/share/zellij/tagpick/tagpick-otlp.json`.
///
/// Observability is best effort: if the data directory cannot be created
/// the plugin runs without tracing. Only the first call takes effect.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .as_deref()
        .unwrap_or(DEFAULT_TRACE_LEVEL);

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let provider = create_tracer_provider(data_dir.join(TRACE_FILE_NAME));
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}

/// Tracer provider exporting each finished span immediately to `trace_file`.
pub fn create_tracer_provider(trace_file: PathBuf) -> TracerProvider {
    let resource = Resource::new(vec![
        KeyValue::new("service.name", "Tagpick"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let exporter = FileSpanExporter::new(RotatingFile::new(trace_file), resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
