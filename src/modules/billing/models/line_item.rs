// Line item model with modified-state tracking.
//
// A line loaded from storage starts Clean: its stored tax amount and total
// are server-authoritative and re-emitted verbatim until the user touches a
// pricing field. Any edit moves the line to Dirty permanently; there is no
// transition back. Newly added lines start Dirty because no persisted
// baseline exists to trust.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::wire::LineRecord;
use crate::modules::store::ItemRef;
use crate::modules::taxes::TaxCode;

/// How a line-level discount is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// Discount is a percentage of the base amount, clamped to 0..=100
    Percentage,
    /// Discount is an absolute amount, clamped to the base amount
    Flat,
}

impl Default for DiscountKind {
    fn default() -> Self {
        DiscountKind::Percentage
    }
}

/// Per-line modified state. One-way: Clean → Dirty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    Clean,
    Dirty,
}

/// One row of a billing document.
#[derive(Debug, Clone)]
pub struct LineItem {
    /// Server identifier, absent for newly added lines
    pub id: Option<String>,
    /// Inventory item this line was picked from, if any
    pub item_id: Option<String>,
    /// Client-side row key, stable across the edit session
    pub row_key: Uuid,
    pub name: String,
    pub description: String,
    pub unit: String,
    quantity: Decimal,
    rate: Decimal,
    discount: Decimal,
    discount_kind: DiscountKind,
    tax_code: TaxCode,
    /// Tax label exactly as loaded from storage
    loaded_tax_label: Option<String>,
    /// Server-computed values from the loaded payload; trusted while Clean
    persisted_tax_amount: Option<Decimal>,
    persisted_total: Option<Decimal>,
    state: LineState,
    tax_touched: bool,
}

impl LineItem {
    /// A blank row for a new document or an added line. Starts Dirty.
    pub fn blank() -> Self {
        Self {
            id: None,
            item_id: None,
            row_key: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            unit: String::new(),
            quantity: Decimal::ZERO,
            rate: Decimal::ZERO,
            discount: Decimal::ZERO,
            discount_kind: DiscountKind::default(),
            tax_code: TaxCode::NonTaxable,
            loaded_tax_label: None,
            persisted_tax_amount: None,
            persisted_total: None,
            state: LineState::Dirty,
            tax_touched: false,
        }
    }

    /// Hydrate a line from a stored record. Starts Clean: the record's tax
    /// amount and total are trusted until the line is edited.
    pub fn from_record(record: &LineRecord) -> Self {
        Self {
            id: record.id.clone(),
            item_id: record.item_id.clone(),
            row_key: Uuid::new_v4(),
            name: record.name.clone(),
            description: record.description.clone(),
            unit: record.unit.clone(),
            quantity: record.quantity,
            rate: record.rate,
            discount: record.discount,
            discount_kind: record.discount_kind,
            tax_code: TaxCode::parse_label(&record.tax_label),
            loaded_tax_label: Some(record.tax_label.clone()),
            persisted_tax_amount: Some(record.tax_amount),
            persisted_total: Some(record.total),
            state: LineState::Clean,
            tax_touched: false,
        }
    }

    // Field accessors

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    pub fn discount_kind(&self) -> DiscountKind {
        self.discount_kind
    }

    pub fn tax_code(&self) -> TaxCode {
        self.tax_code
    }

    pub fn loaded_tax_label(&self) -> Option<&str> {
        self.loaded_tax_label.as_deref()
    }

    pub fn persisted_tax_amount(&self) -> Option<Decimal> {
        self.persisted_tax_amount
    }

    pub fn persisted_total(&self) -> Option<Decimal> {
        self.persisted_total
    }

    pub fn is_modified(&self) -> bool {
        self.state == LineState::Dirty
    }

    pub fn tax_touched(&self) -> bool {
        self.tax_touched
    }

    // Edits. Every pricing-field setter marks the line Dirty.

    pub fn set_quantity(&mut self, quantity: Decimal) {
        self.quantity = quantity;
        self.mark_dirty();
    }

    pub fn set_rate(&mut self, rate: Decimal) {
        self.rate = rate;
        self.mark_dirty();
    }

    pub fn set_discount(&mut self, discount: Decimal) {
        self.discount = discount;
        self.mark_dirty();
    }

    pub fn set_discount_kind(&mut self, kind: DiscountKind) {
        self.discount_kind = kind;
        self.mark_dirty();
    }

    /// Changing the tax code also flips `tax_touched`, which governs which
    /// label the serializer emits at save time.
    pub fn set_tax_code(&mut self, code: TaxCode) {
        self.tax_code = code;
        self.tax_touched = true;
        self.mark_dirty();
    }

    /// Populate the line from a picked inventory item: name, unit, rate
    /// and the item's tax bracket.
    pub fn apply_item(&mut self, item: &ItemRef) {
        self.item_id = Some(item.id.clone());
        self.name = item.name.clone();
        self.unit = item.unit.clone();
        self.set_rate(item.rate);
        self.set_tax_code(TaxCode::parse_label(&item.tax_label));
    }

    fn mark_dirty(&mut self) {
        self.state = LineState::Dirty;
    }

    /// A billable line has a positive quantity; blank filler rows are
    /// skipped by validation and aggregation callers that filter on this.
    pub fn is_billable(&self) -> bool {
        self.quantity > Decimal::ZERO
    }

    /// A line carries content once the user has put anything on it beyond
    /// the blank filler defaults. A content-bearing line without a positive
    /// quantity fails validation instead of being dropped from the save.
    pub fn has_content(&self) -> bool {
        !self.name.trim().is_empty() || self.item_id.is_some() || self.rate > Decimal::ZERO
    }
}
