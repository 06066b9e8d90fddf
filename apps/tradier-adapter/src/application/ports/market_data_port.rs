//! Market Data Port (Driven Port)
//!
//! Quotes, option chains, bars, calendars and reference data.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use crate::domain::TradierError;
use crate::domain::market::SecurityType;
use crate::domain::requests::{ExpirationsQuery, HistoricalQuery, TimeSalesQuery};

/// Market data endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataPort: Send + Sync {
    /// Quotes for a batch of symbols.
    async fn quotes(&self, symbols: &[String], greeks: bool) -> Result<Value, TradierError>;

    /// Option expirations for an underlying.
    async fn option_expirations(
        &self,
        symbol: &str,
        query: &ExpirationsQuery,
    ) -> Result<Value, TradierError>;

    /// Strikes for one expiration.
    async fn option_strikes(
        &self,
        symbol: &str,
        expiration: NaiveDate,
    ) -> Result<Value, TradierError>;

    /// Option chain for one expiration.
    async fn option_chains(
        &self,
        symbol: &str,
        expiration: NaiveDate,
        greeks: bool,
    ) -> Result<Value, TradierError>;

    /// Historical bars.
    async fn historical_quotes(
        &self,
        symbol: &str,
        query: &HistoricalQuery,
    ) -> Result<Value, TradierError>;

    /// Intraday time and sales.
    async fn time_sales(&self, symbol: &str, query: &TimeSalesQuery)
    -> Result<Value, TradierError>;

    /// Market clock.
    async fn clock(&self, delayed: bool) -> Result<Value, TradierError>;

    /// Market calendar.
    async fn market_calendar(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<Value, TradierError>;

    /// Company name search.
    async fn search_symbols(&self, query: &str, indexes: bool) -> Result<Value, TradierError>;

    /// Symbol lookup.
    async fn lookup_symbols(
        &self,
        query: &str,
        exchanges: &[String],
        types: &[SecurityType],
    ) -> Result<Value, TradierError>;

    /// Dividends.
    async fn dividends(&self, symbols: &[String]) -> Result<Value, TradierError>;

    /// Corporate calendars.
    async fn corporate_calendars(&self, symbols: &[String]) -> Result<Value, TradierError>;

    /// Company fundamentals.
    async fn company(&self, symbols: &[String]) -> Result<Value, TradierError>;
}
