//! Tradier endpoint catalog.
//!
//! One method per REST endpoint. Each builds its path and parameter list,
//! runs the request through [`TradierHttpClient`], and on success stores
//! the whole decoded document in the [`RawResponseCache`] under the
//! operation's fixed key.

use std::time::Instant;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde_json::Value;

use crate::application::ports::{AccountPort, MarketDataPort, TradingPort};
use crate::domain::market::SecurityType;
use crate::domain::raw_data::RawDataKey;
use crate::domain::requests::{
    EquityOrder, ExpirationsQuery, GainLossQuery, HistoricalQuery, HistoryQuery, OptionOrder,
    TimeSalesQuery,
};
use crate::infrastructure::metrics::{RequestOutcome, record_request};

use super::api_types::TradierOrderRequest;
use super::cache::RawResponseCache;
use super::config::{TradierConfig, TradierEnvironment};
use super::error::TradierError;
use super::http_client::TradierHttpClient;
use super::params::Param;
use super::session::{Session, SessionStats};

/// Tradier brokerage adapter.
///
/// Cloning shares the session and the raw response cache.
#[derive(Debug, Clone)]
pub struct TradierAdapter {
    client: TradierHttpClient,
    cache: RawResponseCache,
    environment: TradierEnvironment,
}

impl TradierAdapter {
    /// Create an adapter. Borrows `client` when given, admitting at most
    /// `config.max_connections` requests at once; otherwise opens a fresh
    /// client for every request.
    pub fn new(config: &TradierConfig, client: Option<Client>) -> Result<Self, TradierError> {
        Self::with_session(config, Session::from_option(client, config.max_connections))
    }

    /// Create an adapter over an explicit session.
    pub fn with_session(config: &TradierConfig, session: Session) -> Result<Self, TradierError> {
        let client = TradierHttpClient::new(config, session)?;

        tracing::debug!(
            environment = %config.environment,
            api_root = %client.api_root(),
            borrowed = client.is_session_borrowed(),
            "Created Tradier adapter"
        );

        Ok(Self {
            client,
            cache: RawResponseCache::new(),
            environment: config.environment,
        })
    }

    /// Create an adapter over a pooled client built from `config`.
    pub fn pooled(config: &TradierConfig) -> Result<Self, TradierError> {
        let client = config.build_session()?;
        Self::new(config, Some(client))
    }

    /// Handle onto the raw response cache.
    #[must_use]
    pub fn raw_data(&self) -> RawResponseCache {
        self.cache.clone()
    }

    /// Ephemeral session counters.
    #[must_use]
    pub fn session_stats(&self) -> SessionStats {
        self.client.session_stats()
    }

    /// Target environment.
    #[must_use]
    pub const fn environment(&self) -> TradierEnvironment {
        self.environment
    }

    /// Check if we're talking to the production brokerage.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.environment.is_production()
    }

    // ========================================================================
    // Account
    // ========================================================================

    /// Authenticated user's profile and accounts.
    pub async fn get_user_profile(&self) -> Result<Value, TradierError> {
        self.get(RawDataKey::UserProfile, "user/profile", &[]).await
    }

    /// Account balances.
    pub async fn get_balances(&self, account_id: &str) -> Result<Value, TradierError> {
        let path = format!("accounts/{account_id}/balances");
        self.get(RawDataKey::Balances, &path, &[]).await
    }

    /// Open positions.
    pub async fn get_positions(&self, account_id: &str) -> Result<Value, TradierError> {
        let path = format!("accounts/{account_id}/positions");
        self.get(RawDataKey::Positions, &path, &[]).await
    }

    /// Account activity history.
    pub async fn get_account_history(
        &self,
        account_id: &str,
        query: &HistoryQuery,
    ) -> Result<Value, TradierError> {
        let path = format!("accounts/{account_id}/history");
        self.get(RawDataKey::AccountHistory, &path, &query.params())
            .await
    }

    /// Realized gain/loss on closed positions.
    pub async fn get_gain_loss(
        &self,
        account_id: &str,
        query: &GainLossQuery,
    ) -> Result<Value, TradierError> {
        let path = format!("accounts/{account_id}/gainloss");
        self.get(RawDataKey::GainLoss, &path, &query.params()).await
    }

    /// All orders for the account.
    pub async fn get_orders(
        &self,
        account_id: &str,
        include_tags: bool,
    ) -> Result<Value, TradierError> {
        let path = format!("accounts/{account_id}/orders");
        let params = [Param::switch("includeTags", include_tags)];
        self.get(RawDataKey::Orders, &path, &params).await
    }

    /// One order by id.
    pub async fn get_order(
        &self,
        account_id: &str,
        order_id: &str,
        include_tags: bool,
    ) -> Result<Value, TradierError> {
        let path = format!("accounts/{account_id}/orders/{order_id}");
        let params = [Param::switch("includeTags", include_tags)];
        self.get(RawDataKey::OrderDetail, &path, &params).await
    }

    // ========================================================================
    // Trading
    // ========================================================================

    /// Place an equity order.
    pub async fn place_equity_order(
        &self,
        account_id: &str,
        order: &EquityOrder,
    ) -> Result<Value, TradierError> {
        if self.is_live() {
            tracing::warn!(
                account_id,
                symbol = %order.symbol,
                "Placing LIVE equity order - this will execute real trades"
            );
        }

        let request = TradierOrderRequest::from(order);
        tracing::info!(
            account_id,
            symbol = %request.symbol,
            side = %request.side,
            order_type = %request.order_type,
            quantity = %request.quantity,
            price = ?request.price,
            "Placing equity order"
        );

        let path = format!("accounts/{account_id}/orders");
        self.post(RawDataKey::PlaceEquityOrder, &path, &request)
            .await
    }

    /// Place a single-leg option order.
    pub async fn place_option_order(
        &self,
        account_id: &str,
        order: &OptionOrder,
    ) -> Result<Value, TradierError> {
        if self.is_live() {
            tracing::warn!(
                account_id,
                option_symbol = %order.option_symbol,
                "Placing LIVE option order - this will execute real trades"
            );
        }

        let request = TradierOrderRequest::from(order);
        tracing::info!(
            account_id,
            symbol = %request.symbol,
            option_symbol = ?request.option_symbol,
            side = %request.side,
            order_type = %request.order_type,
            quantity = %request.quantity,
            "Placing option order"
        );

        let path = format!("accounts/{account_id}/orders");
        self.post(RawDataKey::PlaceOptionOrder, &path, &request)
            .await
    }

    // ========================================================================
    // Market Data
    // ========================================================================

    /// Quotes for a batch of symbols.
    pub async fn get_quotes<S: AsRef<str> + Sync>(
        &self,
        symbols: &[S],
        greeks: bool,
    ) -> Result<Value, TradierError> {
        let params = [
            Param::list("symbols", symbols),
            Param::flag("greeks", greeks),
        ];
        self.get(RawDataKey::Quotes, "markets/quotes", &params).await
    }

    /// Option expiration dates for an underlying.
    pub async fn get_option_expirations(
        &self,
        symbol: &str,
        query: &ExpirationsQuery,
    ) -> Result<Value, TradierError> {
        self.get(
            RawDataKey::Expirations,
            "markets/options/expirations",
            &query.params(symbol),
        )
        .await
    }

    /// Strike prices for one expiration.
    pub async fn get_option_strikes(
        &self,
        symbol: &str,
        expiration: NaiveDate,
    ) -> Result<Value, TradierError> {
        let params = [
            Param::required("symbol", symbol),
            Param::date("expiration", expiration),
        ];
        self.get(RawDataKey::Strikes, "markets/options/strikes", &params)
            .await
    }

    /// Full option chain for one expiration.
    pub async fn get_option_chains(
        &self,
        symbol: &str,
        expiration: NaiveDate,
        greeks: bool,
    ) -> Result<Value, TradierError> {
        let params = [
            Param::required("symbol", symbol),
            Param::date("expiration", expiration),
            Param::flag("greeks", greeks),
        ];
        self.get(RawDataKey::Chains, "markets/options/chains", &params)
            .await
    }

    /// Daily, weekly or monthly bars.
    pub async fn get_historical_quotes(
        &self,
        symbol: &str,
        query: &HistoricalQuery,
    ) -> Result<Value, TradierError> {
        self.get(
            RawDataKey::HistoricalQuotes,
            "markets/history",
            &query.params(symbol),
        )
        .await
    }

    /// Intraday time and sales.
    pub async fn get_time_sales(
        &self,
        symbol: &str,
        query: &TimeSalesQuery,
    ) -> Result<Value, TradierError> {
        self.get(
            RawDataKey::TimeSales,
            "markets/timesales",
            &query.params(symbol),
        )
        .await
    }

    /// Market clock and session state.
    pub async fn get_clock(&self, delayed: bool) -> Result<Value, TradierError> {
        let params = [Param::flag("delayed", delayed)];
        self.get(RawDataKey::Clock, "markets/clock", &params).await
    }

    /// Market calendar. Defaults to the current month on the server side.
    pub async fn get_market_calendar(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<Value, TradierError> {
        let params = [
            Param::optional("month", month),
            Param::optional("year", year),
        ];
        self.get(RawDataKey::MarketCalendar, "markets/calendar", &params)
            .await
    }

    /// Search companies by name.
    pub async fn search_symbols(
        &self,
        query: &str,
        indexes: bool,
    ) -> Result<Value, TradierError> {
        let params = [
            Param::required("q", query),
            Param::flag("indexes", indexes),
        ];
        self.get(RawDataKey::Search, "markets/search", &params).await
    }

    /// Look up symbols by prefix, optionally narrowed by exchange and type.
    pub async fn lookup_symbols<S: AsRef<str> + Sync>(
        &self,
        query: &str,
        exchanges: &[S],
        types: &[SecurityType],
    ) -> Result<Value, TradierError> {
        let params = [
            Param::required("q", query),
            Param::list("exchanges", exchanges),
            Param::display_list("types", types),
        ];
        self.get(RawDataKey::Lookup, "markets/lookup", &params).await
    }

    // ========================================================================
    // Fundamentals (beta)
    // ========================================================================

    /// Dividend history.
    pub async fn get_dividends<S: AsRef<str> + Sync>(
        &self,
        symbols: &[S],
    ) -> Result<Value, TradierError> {
        let params = [Param::list("symbols", symbols)];
        self.get(
            RawDataKey::Dividends,
            "beta/markets/fundamentals/dividends",
            &params,
        )
        .await
    }

    /// Corporate calendar events.
    pub async fn get_corporate_calendars<S: AsRef<str> + Sync>(
        &self,
        symbols: &[S],
    ) -> Result<Value, TradierError> {
        let params = [Param::list("symbols", symbols)];
        self.get(
            RawDataKey::CorporateCalendars,
            "beta/markets/fundamentals/calendars",
            &params,
        )
        .await
    }

    /// Company profile.
    pub async fn get_company<S: AsRef<str> + Sync>(
        &self,
        symbols: &[S],
    ) -> Result<Value, TradierError> {
        let params = [Param::list("symbols", symbols)];
        self.get(
            RawDataKey::Company,
            "beta/markets/fundamentals/company",
            &params,
        )
        .await
    }

    // ========================================================================
    // Plumbing
    // ========================================================================

    async fn get(
        &self,
        key: RawDataKey,
        path: &str,
        params: &[Param],
    ) -> Result<Value, TradierError> {
        let started = Instant::now();
        let result = self.client.get(path, params).await;
        self.settle(key, started, result)
    }

    async fn post(
        &self,
        key: RawDataKey,
        path: &str,
        body: &TradierOrderRequest,
    ) -> Result<Value, TradierError> {
        let started = Instant::now();
        let result = self.client.post(path, body).await;
        self.settle(key, started, result)
    }

    /// Record the outcome and cache successful documents.
    fn settle(
        &self,
        key: RawDataKey,
        started: Instant,
        result: Result<Value, TradierError>,
    ) -> Result<Value, TradierError> {
        let elapsed = started.elapsed();
        match result {
            Ok(document) => {
                record_request(key.as_str(), RequestOutcome::Success, elapsed);
                self.cache.store(key, document.clone());
                Ok(document)
            }
            Err(err) => {
                record_request(key.as_str(), RequestOutcome::Failed(err.kind()), elapsed);
                tracing::debug!(operation = %key, kind = err.kind().as_str(), "Operation failed");
                Err(err)
            }
        }
    }
}

#[async_trait]
impl AccountPort for TradierAdapter {
    async fn user_profile(&self) -> Result<Value, TradierError> {
        self.get_user_profile().await
    }

    async fn balances(&self, account_id: &str) -> Result<Value, TradierError> {
        self.get_balances(account_id).await
    }

    async fn positions(&self, account_id: &str) -> Result<Value, TradierError> {
        self.get_positions(account_id).await
    }

    async fn account_history(
        &self,
        account_id: &str,
        query: &HistoryQuery,
    ) -> Result<Value, TradierError> {
        self.get_account_history(account_id, query).await
    }

    async fn gain_loss(
        &self,
        account_id: &str,
        query: &GainLossQuery,
    ) -> Result<Value, TradierError> {
        self.get_gain_loss(account_id, query).await
    }

    async fn orders(&self, account_id: &str, include_tags: bool) -> Result<Value, TradierError> {
        self.get_orders(account_id, include_tags).await
    }

    async fn order(
        &self,
        account_id: &str,
        order_id: &str,
        include_tags: bool,
    ) -> Result<Value, TradierError> {
        self.get_order(account_id, order_id, include_tags).await
    }
}

#[async_trait]
impl TradingPort for TradierAdapter {
    async fn place_equity_order(
        &self,
        account_id: &str,
        order: &EquityOrder,
    ) -> Result<Value, TradierError> {
        Self::place_equity_order(self, account_id, order).await
    }

    async fn place_option_order(
        &self,
        account_id: &str,
        order: &OptionOrder,
    ) -> Result<Value, TradierError> {
        Self::place_option_order(self, account_id, order).await
    }
}

#[async_trait]
impl MarketDataPort for TradierAdapter {
    async fn quotes(&self, symbols: &[String], greeks: bool) -> Result<Value, TradierError> {
        self.get_quotes(symbols, greeks).await
    }

    async fn option_expirations(
        &self,
        symbol: &str,
        query: &ExpirationsQuery,
    ) -> Result<Value, TradierError> {
        self.get_option_expirations(symbol, query).await
    }

    async fn option_strikes(
        &self,
        symbol: &str,
        expiration: NaiveDate,
    ) -> Result<Value, TradierError> {
        self.get_option_strikes(symbol, expiration).await
    }

    async fn option_chains(
        &self,
        symbol: &str,
        expiration: NaiveDate,
        greeks: bool,
    ) -> Result<Value, TradierError> {
        self.get_option_chains(symbol, expiration, greeks).await
    }

    async fn historical_quotes(
        &self,
        symbol: &str,
        query: &HistoricalQuery,
    ) -> Result<Value, TradierError> {
        self.get_historical_quotes(symbol, query).await
    }

    async fn time_sales(
        &self,
        symbol: &str,
        query: &TimeSalesQuery,
    ) -> Result<Value, TradierError> {
        self.get_time_sales(symbol, query).await
    }

    async fn clock(&self, delayed: bool) -> Result<Value, TradierError> {
        self.get_clock(delayed).await
    }

    async fn market_calendar(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<Value, TradierError> {
        self.get_market_calendar(month, year).await
    }

    async fn search_symbols(&self, query: &str, indexes: bool) -> Result<Value, TradierError> {
        Self::search_symbols(self, query, indexes).await
    }

    async fn lookup_symbols(
        &self,
        query: &str,
        exchanges: &[String],
        types: &[SecurityType],
    ) -> Result<Value, TradierError> {
        Self::lookup_symbols(self, query, exchanges, types).await
    }

    async fn dividends(&self, symbols: &[String]) -> Result<Value, TradierError> {
        self.get_dividends(symbols).await
    }

    async fn corporate_calendars(&self, symbols: &[String]) -> Result<Value, TradierError> {
        self.get_corporate_calendars(symbols).await
    }

    async fn company(&self, symbols: &[String]) -> Result<Value, TradierError> {
        self.get_company(symbols).await
    }
}
