//! Market data argument types.

use std::fmt;

/// Bar interval for historical pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HistoryInterval {
    /// One bar per trading day.
    #[default]
    Daily,
    /// One bar per week.
    Weekly,
    /// One bar per month.
    Monthly,
}

impl fmt::Display for HistoryInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

/// Bar interval for intraday time and sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeSalesInterval {
    /// Individual trades.
    Tick,
    /// One-minute bars.
    #[default]
    OneMinute,
    /// Five-minute bars.
    FiveMinutes,
    /// Fifteen-minute bars.
    FifteenMinutes,
}

impl fmt::Display for TimeSalesInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tick => write!(f, "tick"),
            Self::OneMinute => write!(f, "1min"),
            Self::FiveMinutes => write!(f, "5min"),
            Self::FifteenMinutes => write!(f, "15min"),
        }
    }
}

/// Which trading session's data to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionFilter {
    /// Pre-market, regular and post-market.
    #[default]
    All,
    /// Regular session only.
    Open,
}

impl fmt::Display for SessionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Open => write!(f, "open"),
        }
    }
}

/// Security type filter for symbol lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityType {
    /// Common stock.
    Stock,
    /// Listed option.
    Option,
    /// Exchange-traded fund.
    Etf,
    /// Index.
    Index,
}

impl fmt::Display for SecurityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stock => write!(f, "stock"),
            Self::Option => write!(f, "option"),
            Self::Etf => write!(f, "etf"),
            Self::Index => write!(f, "index"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_display() {
        assert_eq!(HistoryInterval::Weekly.to_string(), "weekly");
        assert_eq!(TimeSalesInterval::Tick.to_string(), "tick");
        assert_eq!(TimeSalesInterval::FifteenMinutes.to_string(), "15min");
    }

    #[test]
    fn session_filter_display() {
        assert_eq!(SessionFilter::All.to_string(), "all");
        assert_eq!(SessionFilter::Open.to_string(), "open");
    }

    #[test]
    fn security_type_display() {
        assert_eq!(SecurityType::Etf.to_string(), "etf");
        assert_eq!(SecurityType::Index.to_string(), "index");
    }
}
