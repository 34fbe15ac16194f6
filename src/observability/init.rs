//! Tracing initialization and subscriber setup.

use super::export::file_tracer_provider;
use super::rotating::{RotatingFile, DEFAULT_BACKUPS, DEFAULT_MAX_BYTES};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name attached to every exported span.
const SERVICE_NAME: &str = "NamesPanel";

/// Name of the trace file inside the data directory.
const TRACE_FILE_NAME: &str = "names-panel-otlp.json";

/// Fallback filter when `trace_level` is not configured.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber with file-based OTLP export.
///
/// `config.trace_level` is used as an `EnvFilter` directive (`"debug"`,
/// `"names_panel=trace"`, ...). Only the first call takes effect. If the data
/// directory cannot be created, nothing is installed.
///
/// # Example
///
/// ```rust,no_run
/// use names_panel::observability::init_tracing;
/// use names_panel::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let file = RotatingFile::new(
        data_dir.join(TRACE_FILE_NAME),
        DEFAULT_MAX_BYTES,
        DEFAULT_BACKUPS,
    );
    let provider = file_tracer_provider(file, resource);
    let tracer = provider.tracer(SERVICE_NAME);

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
}
