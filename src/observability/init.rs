//! Tracing subscriber setup.

use super::span_formatter::SCOPE_NAME;
use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const TRACE_FILE_NAME: &str = "zunsplash-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Picks the span filter: `RUST_LOG` if set and valid, then the `trace_level`
/// option, then `info`.
fn resolve_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    })
}

/// Installs the global subscriber exporting spans to
/// `~/.local/share/zellij/zunsplash/zunsplash-otlp.json`.
///
/// Tracing is best effort: if the data directory cannot be created the
/// plugin runs without it. Only the first call takes effect.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::get_data_dir();
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        eprintln!("zunsplash: tracing disabled, cannot create {}: {e}", data_dir.display());
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SCOPE_NAME)]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(resolve_filter(config))
        .with(otel_layer)
        .try_init();
}
