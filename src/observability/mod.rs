//! OpenTelemetry-based observability with file-based trace export.
//!
//! The plugin has no network exporter available inside the sandbox, so spans
//! are encoded as OTLP JSON and appended to a size-rotated file:
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → names-panel-otlp.json
//! ```
//!
//! - Location: `~/.local/share/zellij/names-panel/names-panel-otlp.json`
//! - Rotation: at 10 MB, keeping 3 numbered backups
//! - Level: `trace_level` plugin option, default `"info"`
//!
//! Setting up observability never fails the plugin: if the data directory
//! cannot be created, tracing stays uninstalled.

mod export;
mod init;
mod otlp;
mod rotating;

pub use init::init_tracing;
