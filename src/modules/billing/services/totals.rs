// Document-level aggregation over line amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculator::LineCalculator;
use crate::modules::billing::models::LineItem;

/// Document-level adjustments applied after line aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Adjustments {
    /// Invoice-only; zero for document types without shipping
    pub shipping_charges: Decimal,
    /// Free-form plus/minus rounding correction
    pub adjustment: Decimal,
}

/// Intra-state GST split persisted with every document: the tax halves
/// into central and state components, integrated GST is always zero.
/// Inter-state transactions are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSplit {
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
}

impl TaxSplit {
    pub fn intra_state(total_tax: Decimal) -> Self {
        let half = total_tax / Decimal::TWO;
        Self {
            cgst: half,
            sgst: half,
            igst: Decimal::ZERO,
        }
    }
}

/// Aggregated totals for the totals panel and the save payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentTotals {
    /// Σ taxable amounts: post line-discount, pre-tax
    pub subtotal: Decimal,
    pub total_tax: Decimal,
    pub grand_total: Decimal,
    pub tax_split: TaxSplit,
}

impl LineCalculator {
    /// Aggregate a document's lines. Each line goes through `compute` with
    /// the trust policy in effect, so untouched lines contribute their
    /// server-computed tax. An empty line sequence is a valid all-zero
    /// state, not an error.
    pub fn aggregate(&self, items: &[LineItem], adjustments: &Adjustments) -> DocumentTotals {
        let mut subtotal = Decimal::ZERO;
        let mut total_tax = Decimal::ZERO;
        for item in items {
            let amounts = self.compute(item, false);
            subtotal += amounts.taxable_amount;
            total_tax += amounts.tax_amount;
        }

        let grand_total =
            subtotal + total_tax + adjustments.shipping_charges + adjustments.adjustment;

        DocumentTotals {
            subtotal,
            total_tax,
            grand_total,
            tax_split: TaxSplit::intra_state(total_tax),
        }
    }
}
