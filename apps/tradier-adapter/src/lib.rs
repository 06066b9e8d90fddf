#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Tradier Adapter - Brokerage REST Client
//!
//! Authenticated client for the Tradier brokerage REST API. Every endpoint
//! goes through one request executor that injects the bearer token,
//! enforces a fixed timeout, classifies failures and decodes the body as
//! JSON. The last successful response of each endpoint is kept in an
//! in-memory cache for diagnostics.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Cache keys and request argument enums
//!
//! - **Application**: Port definitions and multi-call use cases
//!   - `ports`: Account, market data and trading interfaces
//!   - `use_cases`: Account snapshot, option survey
//!
//! - **Infrastructure**: Adapters and cross-cutting concerns
//!   - `tradier`: Executor, sessions, endpoint catalog, cache, errors
//!   - `config`: Environment-driven settings
//!   - `telemetry`: Tracing and OpenTelemetry
//!   - `metrics`: Prometheus request metrics
//!
//! # Error Kinds
//!
//! | Condition | Kind |
//! |-----------|------|
//! | HTTP 400 | `Request` |
//! | HTTP 401 | `Authorization` (a `Login` error) |
//! | Other non-2xx, connect failure, timeout, bad JSON | `Transport` |
//! | Empty access token | `Login` |

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Value types with no I/O.
pub mod domain;

/// Application layer - Ports and use cases.
pub mod application;

/// Infrastructure layer - Tradier adapter and ambient services.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::ports::{AccountPort, MarketDataPort, TradingPort};
pub use application::use_cases::{
    AccountSnapshot, AccountSnapshotUseCase, OptionSurvey, OptionSurveyUseCase,
};
pub use domain::error::ErrorKind;
pub use domain::raw_data::RawDataKey;
pub use domain::requests::{
    EquityOrder, ExpirationsQuery, GainLossQuery, HistoricalQuery, HistoryQuery, OptionOrder,
    TimeSalesQuery,
};
pub use infrastructure::config::{AdapterSettings, ConfigError};
pub use infrastructure::metrics::{get_metrics_handle, init_metrics, render_metrics};
pub use infrastructure::tradier::{
    RawResponseCache, Session, SessionStats, TradierAdapter, TradierConfig, TradierEnvironment,
    TradierError, TransportFailure,
};
