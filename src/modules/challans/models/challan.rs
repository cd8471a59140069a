// Delivery challan: goods-movement document. No shipping charges; the only
// document-level adjustment is the rounding correction.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, AppError, Result};
use crate::modules::billing::services::{Adjustments, DocumentTotals, LineCalculator};
use crate::modules::billing::{LineItem, LinePayload, LineRecord};

#[derive(Debug, Clone)]
pub struct DeliveryChallan {
    pub id: Option<String>,
    pub number: Option<String>,
    pub customer_id: String,
    pub challan_date: NaiveDate,
    /// Reason for movement ("Job Work", "Supply on Approval", ...)
    pub challan_type: String,
    pub notes: String,
    pub items: Vec<LineItem>,
    pub adjustment: Decimal,
}

impl DeliveryChallan {
    pub fn new(challan_date: NaiveDate) -> Self {
        Self {
            id: None,
            number: None,
            customer_id: String::new(),
            challan_date,
            challan_type: String::new(),
            notes: String::new(),
            items: vec![LineItem::blank()],
            adjustment: Decimal::ZERO,
        }
    }

    pub fn from_record(record: ChallanRecord) -> Self {
        Self {
            id: record.id,
            number: record.number,
            customer_id: record.customer_id,
            challan_date: record.challan_date,
            challan_type: record.challan_type,
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
        if self.challan_type.trim().is_empty() {
            return Err(AppError::validation("Challan type is required"));
        }
        if !self.items.iter().any(|item| item.is_billable()) {
            return Err(AppError::validation(
                "Challan must have at least one line item with a positive quantity",
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

    pub fn payload(&self, calc: &LineCalculator) -> ChallanPayload {
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

        ChallanPayload {
            customer_id: self.customer_id.clone(),
            challan_date: self.challan_date,
            challan_type: self.challan_type.clone(),
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
pub struct ChallanRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub customer_id: String,
    pub challan_date: NaiveDate,
    #[serde(default)]
    pub challan_type: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub items: Vec<LineRecord>,
    #[serde(default, deserialize_with = "money::lenient")]
    pub adjustment: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallanPayload {
    pub customer_id: String,
    pub challan_date: NaiveDate,
    pub challan_type: String,
    pub notes: String,
    pub items: Vec<LinePayload>,
    pub adjustment: Decimal,
    pub subtotal: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
    pub total: Decimal,
}
