//! Raw response cache keys.

use std::fmt;

/// Cache key for the last decoded response of one operation.
///
/// One key per operation; calls with different arguments share the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RawDataKey {
    /// `user/profile`
    UserProfile,
    /// `accounts/{id}/balances`
    Balances,
    /// `accounts/{id}/positions`
    Positions,
    /// `accounts/{id}/history`
    AccountHistory,
    /// `accounts/{id}/gainloss`
    GainLoss,
    /// `accounts/{id}/orders`
    Orders,
    /// `accounts/{id}/orders/{order_id}`
    OrderDetail,
    /// Equity order placement.
    PlaceEquityOrder,
    /// Option order placement.
    PlaceOptionOrder,
    /// `markets/quotes`
    Quotes,
    /// `markets/options/expirations`
    Expirations,
    /// `markets/options/strikes`
    Strikes,
    /// `markets/options/chains`
    Chains,
    /// `markets/history`
    HistoricalQuotes,
    /// `markets/timesales`
    TimeSales,
    /// `markets/clock`
    Clock,
    /// `markets/calendar`
    MarketCalendar,
    /// `markets/search`
    Search,
    /// `markets/lookup`
    Lookup,
    /// `beta/markets/fundamentals/dividends`
    Dividends,
    /// `beta/markets/fundamentals/calendars`
    CorporateCalendars,
    /// `beta/markets/fundamentals/company`
    Company,
}

impl RawDataKey {
    /// Every key, in declaration order.
    pub const ALL: [Self; 22] = [
        Self::UserProfile,
        Self::Balances,
        Self::Positions,
        Self::AccountHistory,
        Self::GainLoss,
        Self::Orders,
        Self::OrderDetail,
        Self::PlaceEquityOrder,
        Self::PlaceOptionOrder,
        Self::Quotes,
        Self::Expirations,
        Self::Strikes,
        Self::Chains,
        Self::HistoricalQuotes,
        Self::TimeSales,
        Self::Clock,
        Self::MarketCalendar,
        Self::Search,
        Self::Lookup,
        Self::Dividends,
        Self::CorporateCalendars,
        Self::Company,
    ];

    /// Key name used when the cache is dumped.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserProfile => "user_profile",
            Self::Balances => "balances",
            Self::Positions => "positions",
            Self::AccountHistory => "account_history",
            Self::GainLoss => "gainloss",
            Self::Orders => "orders",
            Self::OrderDetail => "order_detail",
            Self::PlaceEquityOrder => "place_equity_order",
            Self::PlaceOptionOrder => "place_option_order",
            Self::Quotes => "quotes",
            Self::Expirations => "expirations",
            Self::Strikes => "strikes",
            Self::Chains => "chains",
            Self::HistoricalQuotes => "historical_quotes",
            Self::TimeSales => "timesales",
            Self::Clock => "clock",
            Self::MarketCalendar => "market_calendar",
            Self::Search => "search",
            Self::Lookup => "lookup",
            Self::Dividends => "dividends",
            Self::CorporateCalendars => "corporate_calendars",
            Self::Company => "company",
        }
    }
}

impl fmt::Display for RawDataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn key_names_are_unique() {
        let names: HashSet<_> = RawDataKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), RawDataKey::ALL.len());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(RawDataKey::Quotes.to_string(), "quotes");
        assert_eq!(RawDataKey::CorporateCalendars.to_string(), "corporate_calendars");
        assert_eq!(RawDataKey::UserProfile.to_string(), "user_profile");
    }
}
