//! Infrastructure Layer
//!
//! Adapters and cross-cutting concerns:
//!
//! - `tradier/`: Tradier REST adapter (executor, endpoint catalog, cache)
//! - `config/`: Process settings loaded from the environment
//! - `telemetry/`: Tracing subscriber and OpenTelemetry export
//! - `metrics/`: Prometheus request metrics

pub mod config;
pub mod metrics;
pub mod telemetry;
pub mod tradier;
