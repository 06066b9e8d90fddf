//! Trading and account argument types.
//!
//! `Display` forms are the lowercase / snake_case strings accepted by the
//! Tradier orders and history endpoints.

use std::fmt;

/// Side of an equity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderSide {
    /// Buy shares.
    Buy,
    /// Buy to cover a short position.
    BuyToCover,
    /// Sell shares.
    Sell,
    /// Open a short position.
    SellShort,
}

impl OrderSide {
    /// Wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::BuyToCover => "buy_to_cover",
            Self::Sell => "sell",
            Self::SellShort => "sell_short",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side of a single-leg option order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionOrderSide {
    /// Open a long position.
    BuyToOpen,
    /// Close a short position.
    BuyToClose,
    /// Open a short position.
    SellToOpen,
    /// Close a long position.
    SellToClose,
}

impl OptionOrderSide {
    /// Wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BuyToOpen => "buy_to_open",
            Self::BuyToClose => "buy_to_close",
            Self::SellToOpen => "sell_to_open",
            Self::SellToClose => "sell_to_close",
        }
    }
}

impl fmt::Display for OptionOrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderType {
    /// Execute at the best available price.
    #[default]
    Market,
    /// Execute at the limit price or better.
    Limit,
    /// Becomes a market order once the stop price trades.
    Stop,
    /// Becomes a limit order once the stop price trades.
    StopLimit,
}

impl OrderType {
    /// Returns true if the order carries a limit price.
    #[must_use]
    pub const fn requires_price(&self) -> bool {
        matches!(self, Self::Limit | Self::StopLimit)
    }

    /// Returns true if the order carries a stop price.
    #[must_use]
    pub const fn requires_stop(&self) -> bool {
        matches!(self, Self::Stop | Self::StopLimit)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market => write!(f, "market"),
            Self::Limit => write!(f, "limit"),
            Self::Stop => write!(f, "stop"),
            Self::StopLimit => write!(f, "stop_limit"),
        }
    }
}

/// How long an order stays working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderDuration {
    /// Current trading day only.
    #[default]
    Day,
    /// Good-til-canceled.
    Gtc,
    /// Pre-market session.
    Pre,
    /// Post-market session.
    Post,
}

impl fmt::Display for OrderDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Gtc => write!(f, "gtc"),
            Self::Pre => write!(f, "pre"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// Activity type filter for account history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryActivity {
    /// Equity trades.
    Trade,
    /// Option trades and events.
    Option,
    /// ACH transfers.
    Ach,
    /// Wire transfers.
    Wire,
    /// Dividend payments.
    Dividend,
    /// Fees.
    Fee,
    /// Taxes.
    Tax,
    /// Journal entries.
    Journal,
    /// Checks.
    Check,
    /// Account transfers.
    Transfer,
    /// Adjustments.
    Adjustment,
    /// Interest.
    Interest,
}

impl fmt::Display for HistoryActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Trade => "trade",
            Self::Option => "option",
            Self::Ach => "ach",
            Self::Wire => "wire",
            Self::Dividend => "dividend",
            Self::Fee => "fee",
            Self::Tax => "tax",
            Self::Journal => "journal",
            Self::Check => "check",
            Self::Transfer => "transfer",
            Self::Adjustment => "adjustment",
            Self::Interest => "interest",
        };
        f.write_str(s)
    }
}

/// Sort field for closed positions in gain/loss reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GainLossSortBy {
    /// Position open date.
    OpenDate,
    /// Position close date.
    CloseDate,
}

impl fmt::Display for GainLossSortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenDate => write!(f, "openDate"),
            Self::CloseDate => write!(f, "closeDate"),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_side_wire_values() {
        assert_eq!(OrderSide::Buy.to_string(), "buy");
        assert_eq!(OrderSide::BuyToCover.to_string(), "buy_to_cover");
        assert_eq!(OrderSide::SellShort.to_string(), "sell_short");
    }

    #[test]
    fn option_side_wire_values() {
        assert_eq!(OptionOrderSide::BuyToOpen.to_string(), "buy_to_open");
        assert_eq!(OptionOrderSide::BuyToClose.to_string(), "buy_to_close");
        assert_eq!(OptionOrderSide::SellToOpen.to_string(), "sell_to_open");
        assert_eq!(OptionOrderSide::SellToClose.to_string(), "sell_to_close");
    }

    #[test]
    fn order_type_price_requirements() {
        assert!(!OrderType::Market.requires_price());
        assert!(OrderType::Limit.requires_price());
        assert!(OrderType::Stop.requires_stop());
        assert!(OrderType::StopLimit.requires_price());
        assert!(OrderType::StopLimit.requires_stop());
    }

    #[test]
    fn order_type_and_duration_wire_values() {
        assert_eq!(OrderType::StopLimit.to_string(), "stop_limit");
        assert_eq!(OrderDuration::Gtc.to_string(), "gtc");
    }

    #[test]
    fn defaults() {
        assert_eq!(OrderType::default(), OrderType::Market);
        assert_eq!(OrderDuration::default(), OrderDuration::Day);
    }

    #[test]
    fn gain_loss_sort_display() {
        assert_eq!(GainLossSortBy::CloseDate.to_string(), "closeDate");
        assert_eq!(SortOrder::Desc.to_string(), "desc");
    }
}
