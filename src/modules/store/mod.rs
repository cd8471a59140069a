// External persistence contract.
//
// The calculation core never speaks HTTP itself; the host application hands
// it a `DocumentStore`. Saves re-send the whole document: there is no
// field-level patching of line items, last write wins.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money;
use crate::core::Result;
use crate::modules::challans::models::{ChallanPayload, ChallanRecord};
use crate::modules::invoices::models::{InvoicePayload, InvoiceRecord};
use crate::modules::payments::models::{ReceiptPayload, ReceiptRecord};

/// Outcome of a successful save: the (possibly newly assigned) identifier
/// and document number. Failures carry no structured detail beyond
/// `AppError::Store`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveReceipt {
    pub id: String,
    pub number: String,
}

/// Customer reference-list projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRef {
    pub id: String,
    pub name: String,
}

/// Inventory item projection: just enough to populate a picked line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default, deserialize_with = "money::lenient")]
    pub rate: Decimal,
    #[serde(default)]
    pub tax_label: String,
}

/// Tax-rate metadata projection used to build the injected `TaxTable`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxRateRef {
    pub id: String,
    pub tax_code: String,
    #[serde(default, deserialize_with = "money::lenient")]
    pub rate: Decimal,
}

/// Fetch/save seam to the billing backend.
///
/// All operations are fire-and-await; the editors never run two saves for
/// the same document concurrently.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn load_invoice(&self, id: &str) -> Result<InvoiceRecord>;
    async fn save_invoice(&self, id: Option<&str>, payload: &InvoicePayload)
        -> Result<SaveReceipt>;

    async fn load_challan(&self, id: &str) -> Result<ChallanRecord>;
    async fn save_challan(&self, id: Option<&str>, payload: &ChallanPayload)
        -> Result<SaveReceipt>;

    async fn load_receipt(&self, id: &str) -> Result<ReceiptRecord>;
    async fn save_receipt(&self, id: Option<&str>, payload: &ReceiptPayload)
        -> Result<SaveReceipt>;

    async fn customers(&self) -> Result<Vec<CustomerRef>>;
    async fn items(&self) -> Result<Vec<ItemRef>>;
    async fn tax_rates(&self) -> Result<Vec<TaxRateRef>>;
}
