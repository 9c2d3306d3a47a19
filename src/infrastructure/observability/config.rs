//! Tracing export and metrics settings

use serde::Deserialize;

/// Standard OpenTelemetry variable consulted when no endpoint is configured
pub const OTLP_ENDPOINT_ENV: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

const DEFAULT_OTLP_ENDPOINT: &str = "http://localhost:4317";
const DEFAULT_METRICS_PATH: &str = "/metrics";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub tracing: TracingConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TracingConfig {
    /// Export spans over OTLP
    pub enabled: bool,
    /// Collector endpoint; `OTEL_EXPORTER_OTLP_ENDPOINT` is used when unset
    pub otlp_endpoint: Option<String>,
    pub service_name: String,
    /// Fraction of root spans kept, clamped to `0.0..=1.0`
    pub sampling_ratio: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    /// Route serving the Prometheus scrape page
    pub path: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            otlp_endpoint: None,
            service_name: env!("CARGO_PKG_NAME").to_string(),
            sampling_ratio: 1.0,
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: DEFAULT_METRICS_PATH.to_string(),
        }
    }
}

impl TracingConfig {
    /// Resolve the collector endpoint from config, then the environment
    pub fn resolve_endpoint(&self) -> String {
        self.otlp_endpoint
            .clone()
            .or_else(|| std::env::var(OTLP_ENDPOINT_ENV).ok())
            .unwrap_or_else(|| DEFAULT_OTLP_ENDPOINT.to_string())
    }
}

impl MetricsConfig {
    /// Scrape route with a leading `/`, as axum requires
    pub fn route_path(&self) -> String {
        let path = self.path.trim();

        if path.is_empty() {
            DEFAULT_METRICS_PATH.to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        }
    }
}
