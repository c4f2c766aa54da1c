// Number and currency formatting for alert previews
use crate::error::AlertError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Digit grouping convention for thousands separators
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// 1,234,567
    #[default]
    Western,
    /// 12,34,567
    Indian,
}

impl FromStr for Grouping {
    type Err = AlertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "western" | "en-us" => Ok(Grouping::Western),
            "indian" | "en-in" => Ok(Grouping::Indian),
            other => Err(AlertError::InvalidGrouping(other.to_string())),
        }
    }
}

pub fn group_digits(value: u64, grouping: Grouping) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let step = match grouping {
        Grouping::Western => 3,
        Grouping::Indian => 2,
    };

    // Walk the leading digits right to left in `step`-sized chunks
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);

    groups.join(",")
}

/// Format an amount with a currency symbol and two decimals
pub fn format_currency(amount: f64, symbol: &str, grouping: Grouping) -> String {
    if !amount.is_finite() {
        return format!("{}0.00", symbol);
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        group_digits(cents / 100, grouping),
        cents % 100
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits_western() {
        assert_eq!(group_digits(0, Grouping::Western), "0");
        assert_eq!(group_digits(999, Grouping::Western), "999");
        assert_eq!(group_digits(1000, Grouping::Western), "1,000");
        assert_eq!(group_digits(1234567, Grouping::Western), "1,234,567");
    }

    #[test]
    fn test_group_digits_indian() {
        assert_eq!(group_digits(1000, Grouping::Indian), "1,000");
        assert_eq!(group_digits(212312, Grouping::Indian), "2,12,312");
        assert_eq!(group_digits(12345678, Grouping::Indian), "1,23,45,678");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(
            format_currency(212312.39, "$", Grouping::Indian),
            "$2,12,312.39"
        );
        assert_eq!(
            format_currency(212312.39, "$", Grouping::Western),
            "$212,312.39"
        );
        assert_eq!(format_currency(1200.0, "$", Grouping::Western), "$1,200.00");
        assert_eq!(format_currency(-5.5, "€", Grouping::Western), "-€5.50");
        assert_eq!(format_currency(-0.001, "$", Grouping::Western), "$0.00");
        assert_eq!(format_currency(f64::NAN, "$", Grouping::Western), "$0.00");
    }

    #[test]
    fn test_grouping_from_str() {
        assert_eq!("Indian".parse::<Grouping>().unwrap(), Grouping::Indian);
        assert_eq!("en-US".parse::<Grouping>().unwrap(), Grouping::Western);
        assert!("metric".parse::<Grouping>().is_err());
    }
}
