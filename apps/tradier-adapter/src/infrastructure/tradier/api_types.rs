//! Tradier API request encoding.
//!
//! Maps the typed endpoint arguments onto query parameters and builds the
//! order payload sent to the orders endpoint.

use serde::Serialize;

use crate::domain::requests::{
    EquityOrder, ExpirationsQuery, GainLossQuery, HistoricalQuery, HistoryQuery, OptionOrder,
    TimeSalesQuery,
};

use super::params::Param;

// ============================================================================
// Query Parameters
// ============================================================================

impl HistoryQuery {
    pub(crate) fn params(&self) -> Vec<Param> {
        vec![
            Param::optional("page", self.page),
            Param::optional("limit", self.limit),
            Param::optional("type", self.activity),
            Param::optional_date("start", self.start),
            Param::optional_date("end", self.end),
            Param::optional("symbol", self.symbol.as_deref()),
            Param::switch("exactMatch", self.exact_match),
        ]
    }
}

impl GainLossQuery {
    pub(crate) fn params(&self) -> Vec<Param> {
        vec![
            Param::optional("page", self.page),
            Param::optional("limit", self.limit),
            Param::optional("sortBy", self.sort_by),
            Param::optional("sort", self.sort),
            Param::optional_date("start", self.start),
            Param::optional_date("end", self.end),
            Param::optional("symbol", self.symbol.as_deref()),
        ]
    }
}

impl ExpirationsQuery {
    pub(crate) fn params(self, symbol: &str) -> Vec<Param> {
        vec![
            Param::required("symbol", symbol),
            Param::flag("includeAllRoots", self.include_all_roots),
            Param::flag("strikes", self.strikes),
            Param::flag("contractSize", self.contract_size),
            Param::flag("expirationType", self.expiration_type),
        ]
    }
}

impl HistoricalQuery {
    pub(crate) fn params(self, symbol: &str) -> Vec<Param> {
        vec![
            Param::required("symbol", symbol),
            Param::optional("interval", self.interval),
            Param::optional_date("start", self.start),
            Param::optional_date("end", self.end),
            Param::optional("session_filter", self.session_filter),
        ]
    }
}

impl TimeSalesQuery {
    pub(crate) fn params(self, symbol: &str) -> Vec<Param> {
        vec![
            Param::required("symbol", symbol),
            Param::optional("interval", self.interval),
            Param::optional_minute("start", self.start),
            Param::optional_minute("end", self.end),
            Param::optional("session_filter", self.session_filter),
        ]
    }
}

// ============================================================================
// Order Payload
// ============================================================================

/// Order payload for `accounts/{id}/orders`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TradierOrderRequest {
    /// `equity` or `option`.
    pub class: &'static str,
    /// Stock or underlying symbol.
    pub symbol: String,
    /// OCC symbol for option orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_symbol: Option<String>,
    /// Order side.
    pub side: String,
    /// Quantity.
    pub quantity: String,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: String,
    /// Duration.
    pub duration: String,
    /// Limit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Stop price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<String>,
    /// Client tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl From<&EquityOrder> for TradierOrderRequest {
    fn from(order: &EquityOrder) -> Self {
        Self {
            class: "equity",
            symbol: order.symbol.clone(),
            option_symbol: None,
            side: order.side.to_string(),
            quantity: order.quantity.to_string(),
            order_type: order.order_type.to_string(),
            duration: order.duration.to_string(),
            price: order.price.map(|p| p.to_string()),
            stop: order.stop.map(|p| p.to_string()),
            tag: order.tag.clone(),
        }
    }
}

impl From<&OptionOrder> for TradierOrderRequest {
    fn from(order: &OptionOrder) -> Self {
        Self {
            class: "option",
            symbol: order.underlying.clone(),
            option_symbol: Some(order.option_symbol.clone()),
            side: order.side.to_string(),
            quantity: order.quantity.to_string(),
            order_type: order.order_type.to_string(),
            duration: order.duration.to_string(),
            price: order.price.map(|p| p.to_string()),
            stop: order.stop.map(|p| p.to_string()),
            tag: order.tag.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::market::{HistoryInterval, SessionFilter, TimeSalesInterval};
    use crate::domain::trading::{
        GainLossSortBy, HistoryActivity, OptionOrderSide, OrderDuration, OrderSide, SortOrder,
    };
    use crate::infrastructure::tradier::params::encode;

    #[test]
    fn history_query_empty_sends_nothing() {
        assert!(encode(&HistoryQuery::default().params()).is_empty());
    }

    #[test]
    fn history_query_full() {
        let query = HistoryQuery {
            page: Some(2),
            limit: Some(50),
            activity: Some(HistoryActivity::Trade),
            start: NaiveDate::from_ymd_opt(2024, 1, 1),
            end: NaiveDate::from_ymd_opt(2024, 1, 31),
            symbol: Some("SPY".to_string()),
            exact_match: true,
        };
        assert_eq!(
            encode(&query.params()),
            vec![
                ("page", "2".to_string()),
                ("limit", "50".to_string()),
                ("type", "trade".to_string()),
                ("start", "2024-01-01".to_string()),
                ("end", "2024-01-31".to_string()),
                ("symbol", "SPY".to_string()),
                ("exactMatch", "true".to_string()),
            ]
        );
    }

    #[test]
    fn gain_loss_query_sort() {
        let query = GainLossQuery {
            sort_by: Some(GainLossSortBy::OpenDate),
            sort: Some(SortOrder::Asc),
            ..GainLossQuery::default()
        };
        assert_eq!(
            encode(&query.params()),
            vec![
                ("sortBy", "openDate".to_string()),
                ("sort", "asc".to_string())
            ]
        );
    }

    #[test]
    fn expirations_flags_always_sent() {
        let query = ExpirationsQuery {
            strikes: true,
            ..ExpirationsQuery::default()
        };
        assert_eq!(
            encode(&query.params("SPY")),
            vec![
                ("symbol", "SPY".to_string()),
                ("includeAllRoots", "false".to_string()),
                ("strikes", "true".to_string()),
                ("contractSize", "false".to_string()),
                ("expirationType", "false".to_string()),
            ]
        );
    }

    #[test]
    fn historical_query_optional_fields() {
        let query = HistoricalQuery {
            interval: Some(HistoryInterval::Weekly),
            session_filter: Some(SessionFilter::Open),
            ..HistoricalQuery::default()
        };
        assert_eq!(
            encode(&query.params("AAPL")),
            vec![
                ("symbol", "AAPL".to_string()),
                ("interval", "weekly".to_string()),
                ("session_filter", "open".to_string()),
            ]
        );
    }

    #[test]
    fn time_sales_minutes() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let query = TimeSalesQuery {
            interval: Some(TimeSalesInterval::FiveMinutes),
            start: day.and_hms_opt(9, 30, 0),
            end: day.and_hms_opt(16, 0, 0),
            session_filter: None,
        };
        assert_eq!(
            encode(&query.params("AAPL")),
            vec![
                ("symbol", "AAPL".to_string()),
                ("interval", "5min".to_string()),
                ("start", "2024-05-01 09:30".to_string()),
                ("end", "2024-05-01 16:00".to_string()),
            ]
        );
    }

    #[test]
    fn equity_limit_payload() {
        let order = EquityOrder::limit("AAPL", OrderSide::Buy, dec!(10), dec!(150.25))
            .with_duration(OrderDuration::Gtc)
            .with_tag("my-tag");
        let body = serde_json::to_value(TradierOrderRequest::from(&order)).unwrap();
        assert_eq!(
            body,
            json!({
                "class": "equity",
                "symbol": "AAPL",
                "side": "buy",
                "quantity": "10",
                "type": "limit",
                "duration": "gtc",
                "price": "150.25",
                "tag": "my-tag"
            })
        );
    }

    #[test]
    fn equity_stop_payload() {
        let order =
            EquityOrder::market("MSFT", OrderSide::Sell, dec!(5)).with_stop(dec!(300));
        let request = TradierOrderRequest::from(&order);
        assert_eq!(request.stop.as_deref(), Some("300"));
        assert!(request.price.is_none());
        assert!(request.option_symbol.is_none());
    }

    #[test]
    fn option_market_payload() {
        let order = OptionOrder::market(
            "AAPL",
            "AAPL240621C00190000",
            OptionOrderSide::BuyToOpen,
            dec!(1),
        );
        let body = serde_json::to_value(TradierOrderRequest::from(&order)).unwrap();
        assert_eq!(
            body,
            json!({
                "class": "option",
                "symbol": "AAPL",
                "option_symbol": "AAPL240621C00190000",
                "side": "buy_to_open",
                "quantity": "1",
                "type": "market",
                "duration": "day"
            })
        );
    }
}
