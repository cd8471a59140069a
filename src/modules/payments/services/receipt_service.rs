use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::core::Result;
use crate::modules::billing::services::{DocumentTotals, LineAmounts, LineCalculator};
use crate::modules::billing::LineItem;
use crate::modules::payments::models::PaymentReceipt;
use crate::modules::store::{DocumentStore, SaveReceipt};
use crate::modules::taxes::TaxTable;

/// Payment-receipt edit-session service.
pub struct ReceiptService {
    store: Arc<dyn DocumentStore>,
    calc: LineCalculator,
}

impl ReceiptService {
    pub fn new(store: Arc<dyn DocumentStore>, taxes: TaxTable) -> Self {
        Self {
            store,
            calc: LineCalculator::new(taxes),
        }
    }

    pub fn calculator(&self) -> &LineCalculator {
        &self.calc
    }

    pub async fn load(&self, id: &str) -> Result<PaymentReceipt> {
        debug!(receipt_id = %id, "loading payment receipt");
        let record = self.store.load_receipt(id).await?;
        Ok(PaymentReceipt::from_record(record))
    }

    pub fn preview(&self, item: &LineItem, force_recalculate: bool) -> LineAmounts {
        self.calc.compute(item, force_recalculate)
    }

    pub fn totals(&self, receipt: &PaymentReceipt) -> DocumentTotals {
        receipt.totals(&self.calc)
    }

    pub async fn save(&self, receipt: &PaymentReceipt) -> Result<SaveReceipt> {
        if let Err(err) = receipt.validate() {
            warn!(error = %err, "payment receipt rejected before save");
            return Err(err);
        }
        let payload = receipt.payload(&self.calc);
        let outcome = self
            .store
            .save_receipt(receipt.id.as_deref(), &payload)
            .await?;
        info!(receipt_id = %outcome.id, number = %outcome.number, "payment receipt saved");
        Ok(outcome)
    }
}
