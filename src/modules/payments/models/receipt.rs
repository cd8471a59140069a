// Payment receipt: records money received against billed line items.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, AppError, Result};
use crate::modules::billing::services::{Adjustments, DocumentTotals, LineCalculator};
use crate::modules::billing::{LineItem, LinePayload, LineRecord};

#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    pub id: Option<String>,
    pub number: Option<String>,
    pub customer_id: String,
    pub payment_date: NaiveDate,
    /// "Cash", "Cheque", "UPI", "Bank Transfer"
    pub payment_mode: String,
    pub reference: String,
    pub notes: String,
    pub items: Vec<LineItem>,
    pub adjustment: Decimal,
}

impl PaymentReceipt {
    pub fn new(payment_date: NaiveDate) -> Self {
        Self {
            id: None,
            number: None,
            customer_id: String::new(),
            payment_date,
            payment_mode: String::new(),
            reference: String::new(),
            notes: String::new(),
            items: vec![LineItem::blank()],
            adjustment: Decimal::ZERO,
        }
    }

    pub fn from_record(record: ReceiptRecord) -> Self {
        Self {
            id: record.id,
            number: record.number,
            customer_id: record.customer_id,
            payment_date: record.payment_date,
            payment_mode: record.payment_mode,
            reference: record.reference,
            notes: record.notes,
            items: record.items.iter().map(LineItem::from_record).collect(),
            adjustment: record.adjustment,
        }
    }

    pub fn adjustments(&self) -> Adjustments {
        Adjustments {
            shipping_charges: Decimal::ZERO,
            adjustment: self.adjustment,
        }
    }

    pub fn totals(&self, calc: &LineCalculator) -> DocumentTotals {
        calc.aggregate(&self.items, &self.adjustments())
    }

    pub fn validate(&self) -> Result<()> {
        if self.customer_id.trim().is_empty() {
            return Err(AppError::validation("Customer is required"));
        }
        if self.payment_mode.trim().is_empty() {
            return Err(AppError::validation("Payment mode is required"));
        }
        if !self.items.iter().any(|item| item.is_billable()) {
            return Err(AppError::validation(
                "Receipt must have at least one line item with a positive quantity",
            ));
        }
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

    pub fn payload(&self, calc: &LineCalculator) -> ReceiptPayload {
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

        ReceiptPayload {
            customer_id: self.customer_id.clone(),
            payment_date: self.payment_date,
            payment_mode: self.payment_mode.clone(),
            reference: self.reference.clone(),
            notes: self.notes.clone(),
            items,
            adjustment: self.adjustment,
            subtotal: totals.subtotal,
            cgst: totals.tax_split.cgst,
            sgst: totals.tax_split.sgst,
            igst: totals.tax_split.igst,
            total: totals.grand_total,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub customer_id: String,
    pub payment_date: NaiveDate,
    #[serde(default)]
    pub payment_mode: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub items: Vec<LineRecord>,
    #[serde(default, deserialize_with = "money::lenient")]
    pub adjustment: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPayload {
    pub customer_id: String,
    pub payment_date: NaiveDate,
    pub payment_mode: String,
    pub reference: String,
    pub notes: String,
    pub items: Vec<LinePayload>,
    pub adjustment: Decimal,
    pub subtotal: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
    pub total: Decimal,
}
