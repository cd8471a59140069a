// Invoice document: the only document type carrying shipping charges.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, AppError, Result};
use crate::modules::billing::services::{Adjustments, DocumentTotals, LineCalculator};
use crate::modules::billing::{LineItem, LinePayload, LineRecord};

/// In-memory invoice for one edit session.
#[derive(Debug, Clone)]
pub struct Invoice {
    pub id: Option<String>,
    pub number: Option<String>,
    pub customer_id: String,
    pub invoice_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub notes: String,
    pub items: Vec<LineItem>,
    pub shipping_charges: Decimal,
    pub adjustment: Decimal,
}

impl Invoice {
    /// A new invoice starts with one blank line row, dated today.
    pub fn new(invoice_date: NaiveDate) -> Self {
        Self {
            id: None,
            number: None,
            customer_id: String::new(),
            invoice_date,
            due_date: None,
            notes: String::new(),
            items: vec![LineItem::blank()],
            shipping_charges: Decimal::ZERO,
            adjustment: Decimal::ZERO,
        }
    }

    /// Hydrate from a stored record; every line starts Clean.
    pub fn from_record(record: InvoiceRecord) -> Self {
        Self {
            id: record.id,
            number: record.number,
            customer_id: record.customer_id,
            invoice_date: record.invoice_date,
            due_date: record.due_date,
            notes: record.notes,
            items: record.items.iter().map(LineItem::from_record).collect(),
            shipping_charges: record.shipping_charges,
            adjustment: record.adjustment,
        }
    }

    pub fn adjustments(&self) -> Adjustments {
        Adjustments {
            shipping_charges: self.shipping_charges,
            adjustment: self.adjustment,
        }
    }

    pub fn totals(&self, calc: &LineCalculator) -> DocumentTotals {
        calc.aggregate(&self.items, &self.adjustments())
    }

    /// Pre-submission validation; any failure blocks the save.
    pub fn validate(&self) -> Result<()> {
        if self.customer_id.trim().is_empty() {
            return Err(AppError::validation("Customer is required"));
        }
        if !self.items.iter().any(|item| item.is_billable()) {
            return Err(AppError::validation(
                "Invoice must have at least one line item with a positive quantity",
            ));
        }
        // blank filler rows pass; a line the user has filled in must also
        // carry a quantity, otherwise it would vanish from the save
        if self
            .items
            .iter()
            .any(|item| item.has_content() && !item.is_billable())
        {
            return Err(AppError::validation(
                "Line item quantity must be positive",
            ));
        }
        if self
            .items
            .iter()
            .any(|item| item.is_billable() && item.rate() < Decimal::ZERO)
        {
            return Err(AppError::validation("Line item rate cannot be negative"));
        }
        Ok(())
    }

    /// Build the save payload: billable lines only, serialized through the
    /// same calculator that drives the preview, plus the aggregated totals
    /// and the intra-state tax split. Totals aggregate over exactly the
    /// lines the item array carries.
    pub fn payload(&self, calc: &LineCalculator) -> InvoicePayload {
        let billable: Vec<LineItem> = self
            .items
            .iter()
            .filter(|item| item.is_billable())
            .cloned()
            .collect();
        let items: Vec<LinePayload> = billable
            .iter()
            .map(|item| calc.line_payload(item))
            .collect();
        let totals = calc.aggregate(&billable, &self.adjustments());

        InvoicePayload {
            customer_id: self.customer_id.clone(),
            invoice_date: self.invoice_date,
            due_date: self.due_date,
            notes: self.notes.clone(),
            items,
            shipping_charges: self.shipping_charges,
            adjustment: self.adjustment,
            subtotal: totals.subtotal,
            cgst: totals.tax_split.cgst,
            sgst: totals.tax_split.sgst,
            igst: totals.tax_split.igst,
            total: totals.grand_total,
        }
    }
}

/// Stored invoice shape returned by the document store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub customer_id: String,
    pub invoice_date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub items: Vec<LineRecord>,
    #[serde(default, deserialize_with = "money::lenient")]
    pub shipping_charges: Decimal,
    #[serde(default, deserialize_with = "money::lenient")]
    pub adjustment: Decimal,
}

/// Save payload; the whole item array is re-sent on every save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayload {
    pub customer_id: String,
    pub invoice_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub notes: String,
    pub items: Vec<LinePayload>,
    pub shipping_charges: Decimal,
    pub adjustment: Decimal,
    pub subtotal: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
    pub total: Decimal,
}
