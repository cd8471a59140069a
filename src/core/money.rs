// Single decimal-parsing boundary for loosely-typed server money fields.
//
// Stored payloads carry amounts as numbers, numeric strings, or strings with
// embedded currency symbols and grouping commas ("₹1,200.50", "Rs. 500").
// Everything funnels through `parse_amount` exactly once, at deserialization;
// calculation code only ever sees `Decimal`.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Parse a free-form amount string into a `Decimal`.
///
/// Leading non-numeric noise (currency symbols, "Rs.") is skipped, grouping
/// commas and trailing unit text are dropped. Unparsable input coerces to
/// zero rather than failing: forms never block on malformed numbers.
pub fn parse_amount(raw: &str) -> Decimal {
    let Some(start) = raw.find(|c: char| c.is_ascii_digit() || c == '-') else {
        return Decimal::ZERO;
    };
    let cleaned: String = raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-' || *c == ',' || *c == ' ')
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

/// Serde adapter: accept number or string, coerce through `parse_amount`.
///
/// Use as `#[serde(default, deserialize_with = "money::lenient")]` on wire
/// fields; a missing field defaults to zero.
pub fn lenient<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(Decimal),
        Float(f64),
        Text(String),
        Missing(Option<()>),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(d) => d,
        Raw::Float(f) => Decimal::from_f64(f).unwrap_or(Decimal::ZERO),
        Raw::Text(s) => parse_amount(&s),
        Raw::Missing(_) => Decimal::ZERO,
    })
}
