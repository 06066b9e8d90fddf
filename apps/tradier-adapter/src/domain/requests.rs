//! Typed endpoint arguments.
//!
//! Query filters for the endpoints that take more than a couple of
//! parameters, and the single-leg order descriptions accepted by the
//! trading port.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::market::{HistoryInterval, SessionFilter, TimeSalesInterval};
use super::trading::{
    GainLossSortBy, HistoryActivity, OptionOrderSide, OrderDuration, OrderSide, OrderType,
    SortOrder,
};

// ============================================================================
// Account Queries
// ============================================================================

/// Filters for `accounts/{id}/history`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    /// Page number, starting at 1.
    pub page: Option<u32>,
    /// Rows per page.
    pub limit: Option<u32>,
    /// Activity type.
    pub activity: Option<HistoryActivity>,
    /// First day included.
    pub start: Option<NaiveDate>,
    /// Last day included.
    pub end: Option<NaiveDate>,
    /// Symbol filter.
    pub symbol: Option<String>,
    /// Match `symbol` exactly instead of by prefix.
    pub exact_match: bool,
}

/// Filters for `accounts/{id}/gainloss`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GainLossQuery {
    /// Page number, starting at 1.
    pub page: Option<u32>,
    /// Rows per page.
    pub limit: Option<u32>,
    /// Sort field.
    pub sort_by: Option<GainLossSortBy>,
    /// Sort direction.
    pub sort: Option<SortOrder>,
    /// First day included.
    pub start: Option<NaiveDate>,
    /// Last day included.
    pub end: Option<NaiveDate>,
    /// Symbol filter.
    pub symbol: Option<String>,
}

// ============================================================================
// Market Data Queries
// ============================================================================

/// Options for `markets/options/expirations`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpirationsQuery {
    /// Include expirations for every root symbol.
    pub include_all_roots: bool,
    /// Include strike prices per expiration.
    pub strikes: bool,
    /// Include contract size per expiration.
    pub contract_size: bool,
    /// Include expiration type (standard, weekly, ...).
    pub expiration_type: bool,
}

/// Options for `markets/history`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoricalQuery {
    /// Bar interval.
    pub interval: Option<HistoryInterval>,
    /// First day included.
    pub start: Option<NaiveDate>,
    /// Last day included.
    pub end: Option<NaiveDate>,
    /// Session filter.
    pub session_filter: Option<SessionFilter>,
}

/// Options for `markets/timesales`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeSalesQuery {
    /// Bar interval.
    pub interval: Option<TimeSalesInterval>,
    /// First minute included.
    pub start: Option<NaiveDateTime>,
    /// Last minute included.
    pub end: Option<NaiveDateTime>,
    /// Session filter.
    pub session_filter: Option<SessionFilter>,
}

// ============================================================================
// Order Requests
// ============================================================================

/// Single equity order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquityOrder {
    /// Stock symbol.
    pub symbol: String,
    /// Order side.
    pub side: OrderSide,
    /// Shares.
    pub quantity: Decimal,
    /// Order type.
    pub order_type: OrderType,
    /// Duration.
    pub duration: OrderDuration,
    /// Limit price.
    pub price: Option<Decimal>,
    /// Stop price.
    pub stop: Option<Decimal>,
    /// Client tag.
    pub tag: Option<String>,
}

impl EquityOrder {
    /// Day market order.
    #[must_use]
    pub fn market(symbol: impl Into<String>, side: OrderSide, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            quantity,
            order_type: OrderType::Market,
            duration: OrderDuration::Day,
            price: None,
            stop: None,
            tag: None,
        }
    }

    /// Day limit order.
    #[must_use]
    pub fn limit(
        symbol: impl Into<String>,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            order_type: OrderType::Limit,
            price: Some(price),
            ..Self::market(symbol, side, quantity)
        }
    }

    /// Set the duration.
    #[must_use]
    pub const fn with_duration(mut self, duration: OrderDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the stop price.
    #[must_use]
    pub const fn with_stop(mut self, stop: Decimal) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Set the client tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Single-leg option order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionOrder {
    /// Underlying symbol.
    pub underlying: String,
    /// OCC option symbol, e.g. `AAPL240621C00190000`.
    pub option_symbol: String,
    /// Order side.
    pub side: OptionOrderSide,
    /// Contracts.
    pub quantity: Decimal,
    /// Order type.
    pub order_type: OrderType,
    /// Duration.
    pub duration: OrderDuration,
    /// Limit price.
    pub price: Option<Decimal>,
    /// Stop price.
    pub stop: Option<Decimal>,
    /// Client tag.
    pub tag: Option<String>,
}

impl OptionOrder {
    /// Day market order.
    #[must_use]
    pub fn market(
        underlying: impl Into<String>,
        option_symbol: impl Into<String>,
        side: OptionOrderSide,
        quantity: Decimal,
    ) -> Self {
        Self {
            underlying: underlying.into(),
            option_symbol: option_symbol.into(),
            side,
            quantity,
            order_type: OrderType::Market,
            duration: OrderDuration::Day,
            price: None,
            stop: None,
            tag: None,
        }
    }

    /// Day limit order.
    #[must_use]
    pub fn limit(
        underlying: impl Into<String>,
        option_symbol: impl Into<String>,
        side: OptionOrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            order_type: OrderType::Limit,
            price: Some(price),
            ..Self::market(underlying, option_symbol, side, quantity)
        }
    }

    /// Set the duration.
    #[must_use]
    pub const fn with_duration(mut self, duration: OrderDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the client tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}
