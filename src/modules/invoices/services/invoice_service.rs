use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::core::Result;
use crate::modules::billing::services::{DocumentTotals, LineAmounts, LineCalculator};
use crate::modules::billing::LineItem;
use crate::modules::invoices::models::Invoice;
use crate::modules::store::{DocumentStore, SaveReceipt};
use crate::modules::taxes::TaxTable;

/// Invoice edit-session service: load, live preview, validated save.
pub struct InvoiceService {
    store: Arc<dyn DocumentStore>,
    calc: LineCalculator,
}

impl InvoiceService {
    pub fn new(store: Arc<dyn DocumentStore>, taxes: TaxTable) -> Self {
        Self {
            store,
            calc: LineCalculator::new(taxes),
        }
    }

    pub fn calculator(&self) -> &LineCalculator {
        &self.calc
    }

    /// Load an invoice for editing; every hydrated line starts Clean.
    pub async fn load(&self, id: &str) -> Result<Invoice> {
        debug!(invoice_id = %id, "loading invoice");
        let record = self.store.load_invoice(id).await?;
        Ok(Invoice::from_record(record))
    }

    /// Per-row amounts for the live preview.
    pub fn preview(&self, item: &LineItem, force_recalculate: bool) -> LineAmounts {
        self.calc.compute(item, force_recalculate)
    }

    /// Totals panel values.
    pub fn totals(&self, invoice: &Invoice) -> DocumentTotals {
        invoice.totals(&self.calc)
    }

    /// Validate and persist. Validation failures block the save; store
    /// failures leave the in-memory invoice untouched so the user can
    /// retry.
    pub async fn save(&self, invoice: &Invoice) -> Result<SaveReceipt> {
        if let Err(err) = invoice.validate() {
            warn!(error = %err, "invoice rejected before save");
            return Err(err);
        }
        let payload = invoice.payload(&self.calc);
        let receipt = self
            .store
            .save_invoice(invoice.id.as_deref(), &payload)
            .await?;
        info!(invoice_id = %receipt.id, number = %receipt.number, "invoice saved");
        Ok(receipt)
    }
}
