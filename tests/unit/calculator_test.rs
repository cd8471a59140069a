// Property-based tests for the line-item calculation engine.
//
// Covers the calculation laws the three document editors rely on:
// - base amount is exact (no rounding before discount)
// - discounts never push the taxable amount negative
// - compute is pure and idempotent
// - the trust policy for unmodified loaded lines, and force-recalculate

use proptest::prelude::*;
use rust_decimal::Decimal;

use gstbill::billing::models::line_item::DiscountKind;
use gstbill::billing::models::wire::LineRecord;
use gstbill::billing::{LineCalculator, LineItem};
use gstbill::taxes::{TaxCode, TaxTable};

fn money(cents: u64) -> Decimal {
    Decimal::from(cents) / Decimal::from(100)
}

fn dirty_line(
    quantity: Decimal,
    rate: Decimal,
    discount: Decimal,
    kind: DiscountKind,
    code: TaxCode,
) -> LineItem {
    let mut item = LineItem::blank();
    item.set_quantity(quantity);
    item.set_rate(rate);
    item.set_discount(discount);
    item.set_discount_kind(kind);
    item.set_tax_code(code);
    item
}

fn clean_line(quantity: Decimal, rate: Decimal, tax_amount: Decimal, total: Decimal) -> LineItem {
    LineItem::from_record(&LineRecord {
        id: Some("line".into()),
        item_id: None,
        name: "Stored line".into(),
        description: String::new(),
        unit: String::new(),
        quantity,
        rate,
        discount: Decimal::ZERO,
        discount_kind: DiscountKind::Flat,
        tax_label: "GST18".into(),
        tax_amount,
        total,
    })
}

fn tax_codes() -> impl Strategy<Value = TaxCode> {
    prop_oneof![
        Just(TaxCode::Gst0),
        Just(TaxCode::Gst5),
        Just(TaxCode::Gst12),
        Just(TaxCode::Gst18),
        Just(TaxCode::Gst28),
        Just(TaxCode::NonTaxable),
        Just(TaxCode::Custom),
    ]
}

proptest! {
    #[test]
    fn test_base_amount_is_exact_product(
        quantity_cents in 0u64..1_000_000u64,
        rate_cents in 0u64..100_000_000u64,
    ) {
        let calc = LineCalculator::default();
        let quantity = money(quantity_cents);
        let rate = money(rate_cents);
        let item = dirty_line(quantity, rate, Decimal::ZERO, DiscountKind::Flat, TaxCode::Gst18);

        let amounts = calc.compute(&item, false);
        prop_assert_eq!(amounts.base_amount, quantity * rate);
    }

    #[test]
    fn test_percentage_discount_bound(
        quantity_cents in 0u64..1_000_000u64,
        rate_cents in 0u64..100_000_000u64,
        discount_pct in 0u64..30_000u64, // up to 300%, beyond the clamp
    ) {
        let calc = LineCalculator::default();
        let item = dirty_line(
            money(quantity_cents),
            money(rate_cents),
            money(discount_pct),
            DiscountKind::Percentage,
            TaxCode::Gst12,
        );

        let amounts = calc.compute(&item, false);
        let capped = money(discount_pct).min(Decimal::ONE_HUNDRED);
        prop_assert_eq!(
            amounts.discount_amount,
            amounts.base_amount * capped / Decimal::ONE_HUNDRED
        );
        prop_assert!(amounts.discount_amount <= amounts.base_amount);
        prop_assert!(amounts.taxable_amount >= Decimal::ZERO);
    }

    #[test]
    fn test_flat_overdiscount_clamps_taxable_to_zero(
        quantity_cents in 1u64..100_000u64,
        rate_cents in 1u64..1_000_000u64,
        excess_cents in 0u64..1_000_000u64,
    ) {
        let calc = LineCalculator::default();
        let quantity = money(quantity_cents);
        let rate = money(rate_cents);
        let base = quantity * rate;
        let item = dirty_line(
            quantity,
            rate,
            base + money(excess_cents),
            DiscountKind::Flat,
            TaxCode::Gst28,
        );

        let amounts = calc.compute(&item, false);
        prop_assert_eq!(amounts.discount_amount, base);
        prop_assert_eq!(amounts.taxable_amount, Decimal::ZERO);
        prop_assert_eq!(amounts.total, Decimal::ZERO);
    }

    #[test]
    fn test_compute_is_idempotent(
        quantity_cents in 0u64..100_000u64,
        rate_cents in 0u64..1_000_000u64,
        discount_cents in 0u64..10_000u64,
        code in tax_codes(),
    ) {
        let calc = LineCalculator::default();
        let item = dirty_line(
            money(quantity_cents),
            money(rate_cents),
            money(discount_cents),
            DiscountKind::Flat,
            code,
        );

        let first = calc.compute(&item, false);
        let second = calc.compute(&item, false);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_trust_policy_returns_persisted_total_verbatim(
        quantity_cents in 0u64..100_000u64,
        rate_cents in 0u64..1_000_000u64,
        stored_tax_cents in 0u64..1_000_000u64,
        stored_total_cents in 0u64..10_000_000u64,
    ) {
        let calc = LineCalculator::default();
        let item = clean_line(
            money(quantity_cents),
            money(rate_cents),
            money(stored_tax_cents),
            money(stored_total_cents),
        );

        let amounts = calc.compute(&item, false);
        // the stored values pass through untouched, even when they disagree
        // with what a fresh calculation would produce
        prop_assert_eq!(amounts.tax_amount, money(stored_tax_cents));
        prop_assert_eq!(amounts.total, money(stored_total_cents));
        // display amounts are still derived fresh
        prop_assert_eq!(amounts.base_amount, money(quantity_cents) * money(rate_cents));
    }

    #[test]
    fn test_force_recalculate_derives_total_from_taxable(
        quantity_cents in 0u64..100_000u64,
        rate_cents in 0u64..1_000_000u64,
        stored_total_cents in 0u64..10_000_000u64,
    ) {
        let calc = LineCalculator::default();
        let item = clean_line(
            money(quantity_cents),
            money(rate_cents),
            Decimal::ZERO,
            money(stored_total_cents),
        );

        let amounts = calc.compute(&item, true);
        prop_assert_eq!(amounts.total, amounts.taxable_amount + amounts.tax_amount);
        // stored rate is GST18; the recomputed tax follows the table
        prop_assert_eq!(
            amounts.tax_amount,
            amounts.taxable_amount * Decimal::from(18) / Decimal::ONE_HUNDRED
        );
    }

    #[test]
    fn test_recomputed_total_is_consistent_for_dirty_lines(
        quantity_cents in 0u64..100_000u64,
        rate_cents in 0u64..1_000_000u64,
        discount_pct in 0u64..10_000u64,
        code in tax_codes(),
    ) {
        let calc = LineCalculator::default();
        let item = dirty_line(
            money(quantity_cents),
            money(rate_cents),
            money(discount_pct),
            DiscountKind::Percentage,
            code,
        );

        let amounts = calc.compute(&item, false);
        prop_assert_eq!(amounts.taxable_amount, amounts.base_amount - amounts.discount_amount);
        prop_assert_eq!(amounts.total, amounts.taxable_amount + amounts.tax_amount);
    }
}

#[test]
fn test_alternate_rate_schedule_is_injectable() {
    // the calculator takes its table by injection; a doubled schedule
    // changes the result without touching any global state
    let doubled = TaxTable::from_refs(&[gstbill::store::TaxRateRef {
        id: "t1".into(),
        tax_code: "GST18".into(),
        rate: Decimal::from(36),
    }]);
    let calc = LineCalculator::new(doubled);

    let item = dirty_line(
        Decimal::from(2),
        Decimal::from(100),
        Decimal::ZERO,
        DiscountKind::Flat,
        TaxCode::Gst18,
    );
    let amounts = calc.compute(&item, false);
    assert_eq!(amounts.tax_amount, Decimal::from(72));
    assert_eq!(amounts.total, Decimal::from(272));
}
