//! Declarative query parameter encoding.
//!
//! Each endpoint lists its parameters with an inclusion rule; [`encode`]
//! turns the list into the ordered key/value pairs sent on the wire.

use std::fmt::Display;

use chrono::{NaiveDate, NaiveDateTime};

/// When a parameter is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    /// Sent whenever it has a value.
    Always,
    /// Sent only when the caller supplied a value.
    IfPresent,
    /// Boolean sent only when `true`.
    IfTrue,
}

/// One named query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    name: &'static str,
    value: Option<String>,
    rule: Inclusion,
}

impl Param {
    /// Parameter that is always sent.
    pub fn required(name: &'static str, value: impl Display) -> Self {
        Self {
            name,
            value: Some(value.to_string()),
            rule: Inclusion::Always,
        }
    }

    /// Parameter sent only when `value` is `Some`.
    pub fn optional<T: Display>(name: &'static str, value: Option<T>) -> Self {
        Self {
            name,
            value: value.map(|v| v.to_string()),
            rule: Inclusion::IfPresent,
        }
    }

    /// Boolean always sent as `true` / `false`.
    #[must_use]
    pub fn flag(name: &'static str, value: bool) -> Self {
        Self::required(name, value)
    }

    /// Boolean sent only when set.
    #[must_use]
    pub fn switch(name: &'static str, value: bool) -> Self {
        Self {
            name,
            value: Some(value.to_string()),
            rule: Inclusion::IfTrue,
        }
    }

    /// Date always sent as `YYYY-MM-DD`.
    #[must_use]
    pub fn date(name: &'static str, value: NaiveDate) -> Self {
        Self::required(name, value.format("%Y-%m-%d"))
    }

    /// Date sent as `YYYY-MM-DD` when present.
    #[must_use]
    pub fn optional_date(name: &'static str, value: Option<NaiveDate>) -> Self {
        Self::optional(name, value.map(|d| d.format("%Y-%m-%d")))
    }

    /// Timestamp sent as `YYYY-MM-DD HH:MM` when present.
    #[must_use]
    pub fn optional_minute(name: &'static str, value: Option<NaiveDateTime>) -> Self {
        Self::optional(name, value.map(|t| t.format("%Y-%m-%d %H:%M")))
    }

    /// Comma-joined list, omitted when empty.
    pub fn list<S: AsRef<str>>(name: &'static str, values: &[S]) -> Self {
        let joined = values
            .iter()
            .map(|v| v.as_ref())
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        Self {
            name,
            value: Some(joined),
            rule: Inclusion::IfPresent,
        }
    }

    /// Comma-joined list of displayable values, omitted when empty.
    pub fn display_list<T: Display>(name: &'static str, values: &[T]) -> Self {
        let strings: Vec<String> = values.iter().map(ToString::to_string).collect();
        Self::list(name, strings.as_slice())
    }

    /// Parameter name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Inclusion rule.
    #[must_use]
    pub const fn rule(&self) -> Inclusion {
        self.rule
    }

    fn encoded(&self) -> Option<(&'static str, String)> {
        let value = self.value.as_deref().filter(|v| !v.is_empty())?;
        let include = match self.rule {
            Inclusion::Always | Inclusion::IfPresent => true,
            Inclusion::IfTrue => value == "true",
        };
        include.then(|| (self.name, value.to_string()))
    }
}

/// Apply every parameter's rule, keeping declaration order.
pub fn encode(params: &[Param]) -> Vec<(&'static str, String)> {
    params.iter().filter_map(Param::encoded).collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn required_and_date() {
        let expiration = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let pairs = encode(&[
            Param::required("symbol", "AAPL"),
            Param::date("expiration", expiration),
        ]);
        assert_eq!(
            pairs,
            vec![
                ("symbol", "AAPL".to_string()),
                ("expiration", "2024-06-21".to_string())
            ]
        );
    }

    #[test]
    fn optional_omitted_when_absent() {
        let pairs = encode(&[
            Param::optional("page", None::<u32>),
            Param::optional("limit", Some(25)),
        ]);
        assert_eq!(pairs, vec![("limit", "25".to_string())]);
    }

    #[test]
    fn page_is_interpolated() {
        let pairs = encode(&[Param::optional("page", Some(3))]);
        assert_eq!(pairs, vec![("page", "3".to_string())]);
    }

    #[test]
    fn flag_always_sent() {
        let pairs = encode(&[Param::flag("greeks", false), Param::flag("delayed", true)]);
        assert_eq!(
            pairs,
            vec![
                ("greeks", "false".to_string()),
                ("delayed", "true".to_string())
            ]
        );
    }

    #[test]
    fn switch_sent_only_when_true() {
        assert!(encode(&[Param::switch("exactMatch", false)]).is_empty());
        assert_eq!(
            encode(&[Param::switch("exactMatch", true)]),
            vec![("exactMatch", "true".to_string())]
        );
    }

    #[test]
    fn list_joined_with_commas() {
        let pairs = encode(&[Param::list("symbols", &["AAPL", "MSFT", "SPY"])]);
        assert_eq!(pairs, vec![("symbols", "AAPL,MSFT,SPY".to_string())]);
    }

    #[test]
    fn empty_list_omitted() {
        let empty: [&str; 0] = [];
        assert!(encode(&[Param::list("symbols", &empty)]).is_empty());
        assert!(encode(&[Param::list("symbols", &[""])]).is_empty());
    }

    #[test]
    fn empty_string_omitted() {
        assert!(encode(&[Param::optional("symbol", Some(""))]).is_empty());
        assert!(encode(&[Param::required("symbol", "")]).is_empty());
    }

    #[test]
    fn minute_format() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 15)
            .unwrap();
        let pairs = encode(&[Param::optional_minute("start", Some(start))]);
        assert_eq!(pairs, vec![("start", "2024-03-01 09:30".to_string())]);
    }

    #[test]
    fn accessors() {
        let param = Param::switch("includeTags", true);
        assert_eq!(param.name(), "includeTags");
        assert_eq!(param.rule(), Inclusion::IfTrue);
    }

    proptest! {
        #[test]
        fn list_round_trips_non_empty_symbols(symbols in prop::collection::vec("[A-Z]{1,5}", 1..8)) {
            let pairs = encode(&[Param::list("symbols", symbols.as_slice())]);
            prop_assert_eq!(pairs.len(), 1);
            let parts: Vec<&str> = pairs[0].1.split(',').collect();
            prop_assert_eq!(parts, symbols.iter().map(String::as_str).collect::<Vec<_>>());
        }

        #[test]
        fn encoding_preserves_declaration_order(values in prop::collection::vec(prop::option::of(0u32..1000), 0..10)) {
            const NAMES: [&str; 10] = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
            let params: Vec<Param> = values
                .iter()
                .enumerate()
                .map(|(i, v)| Param::optional(NAMES[i], *v))
                .collect();
            let names: Vec<&str> = encode(&params).into_iter().map(|(n, _)| n).collect();
            let expected: Vec<&str> = values
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_some())
                .map(|(i, _)| NAMES[i])
                .collect();
            prop_assert_eq!(names, expected);
        }
    }
}
