//! Tradier Adapter Binary
//!
//! Walks through the main read endpoints and prints the raw response cache.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin tradier-adapter
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `TRADIER_ACCESS_TOKEN`: Bearer token
//!
//! ## Optional
//! - `TRADIER_ENV`: sandbox | production (default: sandbox)
//! - `TRADIER_ACCOUNT_ID`: Account to query (default: first in profile)
//! - `TRADIER_SYMBOL`: Underlying for the market data calls (default: SPY)
//! - `TRADIER_TIMEOUT_SECS`: Per-request timeout (default: 45)
//! - `TRADIER_MAX_CONNECTIONS`: Connection pool size (default: 4)
//! - `TRADIER_BASE_URL`: Base URL override
//! - `OTEL_ENABLED`: Enable OpenTelemetry (default: true)
//! - `RUST_LOG`: Log filter (default: tradier_adapter=info)

use std::sync::Arc;

use anyhow::Context;
use tradier_adapter::infrastructure::telemetry;
use tradier_adapter::{
    AccountSnapshotUseCase, AdapterSettings, OptionSurveyUseCase, TradierAdapter, TradierError,
    init_metrics, render_metrics,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    // Initialize telemetry (OpenTelemetry + tracing)
    let _telemetry_guard = telemetry::init()?;

    tracing::info!("Starting Tradier adapter");

    init_metrics()?;

    let settings = AdapterSettings::from_env()?;
    log_settings(&settings);

    let adapter = Arc::new(TradierAdapter::pooled(&settings.tradier).inspect_err(log_failure)?);

    let accounts = AccountSnapshotUseCase::new(Arc::clone(&adapter));
    let account_id = accounts
        .resolve_account(settings.account_id.as_deref())
        .await
        .inspect_err(log_failure)
        .context("failed to resolve account")?;

    let snapshot = accounts
        .execute(&account_id)
        .await
        .inspect_err(log_failure)
        .context("failed to fetch account snapshot")?;
    tracing::info!(account_id = %snapshot.account_id, "Account snapshot complete");

    let survey = OptionSurveyUseCase::new(Arc::clone(&adapter))
        .execute(&settings.symbol)
        .await
        .inspect_err(log_failure)
        .context("failed to survey options")?;
    tracing::info!(
        symbol = %survey.symbol,
        expiration = ?survey.expiration,
        "Option survey complete"
    );

    let dump = serde_json::to_string_pretty(&adapter.raw_data().to_json())?;
    println!("{dump}");

    // Request counters and latencies go to stderr so stdout stays JSON.
    if let Some(exposition) = render_metrics() {
        eprintln!("{exposition}");
    }

    Ok(())
}

/// Log a failed call with its kind and status.
fn log_failure(err: &TradierError) {
    tracing::error!(
        kind = err.kind().as_str(),
        status = ?err.status(),
        error = %err,
        "Tradier call failed"
    );
}

/// Log the parsed settings.
fn log_settings(settings: &AdapterSettings) {
    tracing::info!(
        environment = %settings.tradier.environment,
        api_root = %settings.tradier.api_root(),
        timeout_secs = settings.tradier.timeout.as_secs(),
        max_connections = settings.tradier.max_connections,
        symbol = %settings.symbol,
        "Configuration loaded"
    );
}

/// Load .env from the current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
