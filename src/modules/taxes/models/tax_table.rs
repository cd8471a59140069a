// GST bracket identifiers and the injected rate table.
//
// Stored documents carry tax selections as loose labels ("GST18", "GST 5%",
// "Non-Taxable"); they parse into a closed `TaxCode` so every consumer
// matches exhaustively instead of substring-checking strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::money;
use crate::modules::store::TaxRateRef;

/// Closed set of tax selections a line item can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxCode {
    Gst0,
    Gst5,
    Gst12,
    Gst18,
    Gst28,
    /// Explicitly outside GST (exempt goods, composition billing)
    NonTaxable,
    /// Sentinel for rates the table does not know; resolves to 0%
    Custom,
}

impl TaxCode {
    /// Parse a stored tax label. Total: anything unrecognized maps to
    /// `Custom`, never an error.
    pub fn parse_label(label: &str) -> Self {
        let upper = label.trim().to_uppercase();
        if upper.is_empty() || upper.contains("NON") || upper == "NONE" || upper == "EXEMPT" {
            return TaxCode::NonTaxable;
        }
        if upper.contains("CUSTOM") {
            return TaxCode::Custom;
        }
        if upper.contains("GST") {
            // only exact bracket percentages map to brackets; fractional
            // rates like "GST 1.8%" are custom, not a nearby bracket
            let pct = money::parse_amount(&upper);
            for (value, code) in [
                (0i64, TaxCode::Gst0),
                (5, TaxCode::Gst5),
                (12, TaxCode::Gst12),
                (18, TaxCode::Gst18),
                (28, TaxCode::Gst28),
            ] {
                if pct == Decimal::from(value) {
                    return code;
                }
            }
            TaxCode::Custom
        } else {
            TaxCode::Custom
        }
    }

    /// Canonical label for the code, used when no stored label is available.
    pub fn canonical_label(&self) -> &'static str {
        match self {
            TaxCode::Gst0 => "GST0",
            TaxCode::Gst5 => "GST5",
            TaxCode::Gst12 => "GST12",
            TaxCode::Gst18 => "GST18",
            TaxCode::Gst28 => "GST28",
            TaxCode::NonTaxable => "Non-Taxable",
            TaxCode::Custom => "Custom",
        }
    }
}

impl fmt::Display for TaxCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_label())
    }
}

/// One row of the rate table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxEntry {
    pub code: TaxCode,
    pub label: String,
    /// Percentage in 0..=100, not a fraction
    pub percentage: Decimal,
}

/// Rate lookup for line-item tax calculation.
///
/// Injected into the calculator rather than read from a global, so tests
/// and callers can supply alternate schedules. Read-only once built.
#[derive(Debug, Clone)]
pub struct TaxTable {
    entries: Vec<TaxEntry>,
}

impl TaxTable {
    pub fn new(entries: Vec<TaxEntry>) -> Self {
        Self { entries }
    }

    /// The standard GST schedule: 0/5/12/18/28% plus non-taxable.
    pub fn gst() -> Self {
        let bracket = |code, label: &str, pct: i64| TaxEntry {
            code,
            label: label.to_string(),
            percentage: Decimal::from(pct),
        };
        Self::new(vec![
            bracket(TaxCode::Gst0, "GST0", 0),
            bracket(TaxCode::Gst5, "GST5", 5),
            bracket(TaxCode::Gst12, "GST12", 12),
            bracket(TaxCode::Gst18, "GST18", 18),
            bracket(TaxCode::Gst28, "GST28", 28),
            bracket(TaxCode::NonTaxable, "Non-Taxable", 0),
        ])
    }

    /// Build a table from the server's tax-rate reference list.
    pub fn from_refs(refs: &[TaxRateRef]) -> Self {
        let entries = refs
            .iter()
            .map(|r| TaxEntry {
                code: TaxCode::parse_label(&r.tax_code),
                label: r.tax_code.clone(),
                percentage: r.rate,
            })
            .collect();
        Self::new(entries)
    }

    /// Percentage for a code. Unknown, custom and non-taxable codes resolve
    /// to zero; no error is raised for unmapped codes.
    pub fn rate_for(&self, code: TaxCode) -> Decimal {
        if matches!(code, TaxCode::Custom) {
            return Decimal::ZERO;
        }
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.percentage)
            .unwrap_or(Decimal::ZERO)
    }

    /// Stored label for a code, if the table knows it.
    pub fn label_for(&self, code: TaxCode) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.label.as_str())
    }

    pub fn entries(&self) -> &[TaxEntry] {
        &self.entries
    }
}

impl Default for TaxTable {
    fn default() -> Self {
        Self::gst()
    }
}
