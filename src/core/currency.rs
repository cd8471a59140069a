use rust_decimal::Decimal;
use std::fmt;

/// Digit-grouping style for display formatting.
///
/// Indian grouping separates the last three digits, then pairs:
/// 12,34,567.89. Western grouping uses uniform triples: 1,234,567.89.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    Indian,
    Western,
}

/// Locale-aware monetary formatting for the read path only.
///
/// Formatted strings are never fed back into calculation; all stored and
/// computed values stay full-precision `Decimal`.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    symbol: String,
    grouping: Grouping,
    scale: u32,
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>, grouping: Grouping, scale: u32) -> Self {
        Self {
            symbol: symbol.into(),
            grouping,
            scale,
        }
    }

    /// Indian Rupee with lakh/crore grouping and paise precision.
    pub fn inr() -> Self {
        Self::new("₹", Grouping::Indian, 2)
    }

    /// Format an amount for display, rounded to the configured scale.
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp(self.scale).abs();
        let text = format!("{:.width$}", rounded, width = self.scale as usize);
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (text.as_str(), None),
        };

        let mut out = String::new();
        if amount.is_sign_negative() && !rounded.is_zero() {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&group_digits(int_part, self.grouping));
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::inr()
    }
}

impl fmt::Display for CurrencyFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

fn group_digits(digits: &str, grouping: Grouping) -> String {
    let bytes = digits.as_bytes();
    let n = bytes.len();
    if n <= 3 {
        return digits.to_string();
    }

    let mut parts: Vec<&str> = Vec::new();
    match grouping {
        Grouping::Western => {
            let mut end = n;
            while end > 3 {
                parts.push(&digits[end - 3..end]);
                end -= 3;
            }
            parts.push(&digits[..end]);
        }
        Grouping::Indian => {
            parts.push(&digits[n - 3..]);
            let mut end = n - 3;
            while end > 2 {
                parts.push(&digits[end - 2..end]);
                end -= 2;
            }
            parts.push(&digits[..end]);
        }
    }
    parts.reverse();
    parts.join(",")
}
