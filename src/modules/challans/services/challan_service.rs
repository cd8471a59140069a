use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::core::Result;
use crate::modules::billing::services::{DocumentTotals, LineAmounts, LineCalculator};
use crate::modules::billing::LineItem;
use crate::modules::challans::models::DeliveryChallan;
use crate::modules::store::{DocumentStore, SaveReceipt};
use crate::modules::taxes::TaxTable;

/// Delivery-challan edit-session service.
pub struct ChallanService {
    store: Arc<dyn DocumentStore>,
    calc: LineCalculator,
}

impl ChallanService {
    pub fn new(store: Arc<dyn DocumentStore>, taxes: TaxTable) -> Self {
        Self {
            store,
            calc: LineCalculator::new(taxes),
        }
    }

    pub fn calculator(&self) -> &LineCalculator {
        &self.calc
    }

    pub async fn load(&self, id: &str) -> Result<DeliveryChallan> {
        debug!(challan_id = %id, "loading challan");
        let record = self.store.load_challan(id).await?;
        Ok(DeliveryChallan::from_record(record))
    }

    pub fn preview(&self, item: &LineItem, force_recalculate: bool) -> LineAmounts {
        self.calc.compute(item, force_recalculate)
    }

    pub fn totals(&self, challan: &DeliveryChallan) -> DocumentTotals {
        challan.totals(&self.calc)
    }

    pub async fn save(&self, challan: &DeliveryChallan) -> Result<SaveReceipt> {
        if let Err(err) = challan.validate() {
            warn!(error = %err, "challan rejected before save");
            return Err(err);
        }
        let payload = challan.payload(&self.calc);
        let receipt = self
            .store
            .save_challan(challan.id.as_deref(), &payload)
            .await?;
        info!(challan_id = %receipt.id, number = %receipt.number, "challan saved");
        Ok(receipt)
    }
}
