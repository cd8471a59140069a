// Per-line financial calculation.
//
// `compute` is the single source of truth for line amounts: the live-edit
// preview and the save-time payload both call it, so the two can never
// disagree. It is a pure function of the line and the injected tax table;
// no rounding happens here, display rounding lives in CurrencyFormatter.

use rust_decimal::Decimal;

use crate::modules::billing::models::LineItem;
use crate::modules::billing::models::line_item::DiscountKind;
use crate::modules::taxes::TaxTable;

/// Computed amounts for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineAmounts {
    /// quantity × rate, before any discount
    pub base_amount: Decimal,
    /// Absolute discount actually applied, clamped to the base amount
    pub discount_amount: Decimal,
    /// base − discount; the tax base, never negative
    pub taxable_amount: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
}

/// Line calculator over an injected tax table.
#[derive(Debug, Clone)]
pub struct LineCalculator {
    taxes: TaxTable,
}

impl LineCalculator {
    pub fn new(taxes: TaxTable) -> Self {
        Self { taxes }
    }

    pub fn taxes(&self) -> &TaxTable {
        &self.taxes
    }

    /// Compute the amounts for one line.
    ///
    /// Base, discount and taxable amounts are always derived fresh. Tax and
    /// total follow the trust policy: a line that is not modified keeps its
    /// server-computed `persisted_tax_amount`/`persisted_total` verbatim
    /// unless `force_recalculate` overrides that. This protects untouched
    /// lines from drift when the active rate table differs from the one the
    /// server used.
    ///
    /// Numeric inputs are clamped, never rejected: negative quantity, rate
    /// or discount behave as zero, percentage discounts cap at 100.
    pub fn compute(&self, item: &LineItem, force_recalculate: bool) -> LineAmounts {
        let quantity = item.quantity().max(Decimal::ZERO);
        let rate = item.rate().max(Decimal::ZERO);
        let base_amount = quantity * rate;

        let requested_discount = match item.discount_kind() {
            DiscountKind::Percentage => {
                let pct = item
                    .discount()
                    .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
                base_amount * pct / Decimal::ONE_HUNDRED
            }
            DiscountKind::Flat => item.discount().max(Decimal::ZERO),
        };
        // taxable amount is never negative
        let discount_amount = requested_discount.min(base_amount);
        let taxable_amount = base_amount - discount_amount;

        let (tax_amount, total) = if !item.is_modified() && !force_recalculate {
            // server-authoritative path for genuinely untouched lines
            (
                item.persisted_tax_amount().unwrap_or(Decimal::ZERO),
                item.persisted_total().unwrap_or(Decimal::ZERO),
            )
        } else {
            let rate_pct = self.taxes.rate_for(item.tax_code());
            let tax_amount = taxable_amount * rate_pct / Decimal::ONE_HUNDRED;
            (tax_amount, taxable_amount + tax_amount)
        };

        LineAmounts {
            base_amount,
            discount_amount,
            taxable_amount,
            tax_amount,
            total,
        }
    }
}

impl Default for LineCalculator {
    fn default() -> Self {
        Self::new(TaxTable::gst())
    }
}
