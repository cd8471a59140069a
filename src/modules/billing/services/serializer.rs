// Line-item serialization for the save payload.
//
// Amounts come from the same `compute` call the preview uses. The tax label
// re-emits historical naming for untouched lines: an unedited line keeps the
// label it was loaded with even if the active rate table has since renamed
// that bracket.

use crate::modules::billing::models::wire::LinePayload;
use crate::modules::billing::models::LineItem;
use crate::modules::taxes::TaxCode;

use super::calculator::LineCalculator;

impl LineCalculator {
    /// Build the persistence payload for one line.
    pub fn line_payload(&self, item: &LineItem) -> LinePayload {
        let amounts = self.compute(item, false);

        let tax_label = if item.tax_touched() {
            match item.tax_code() {
                // the custom sentinel is not a real label; fall back to what
                // the record originally carried
                TaxCode::Custom => item
                    .loaded_tax_label()
                    .unwrap_or(TaxCode::Custom.canonical_label())
                    .to_string(),
                code => self
                    .taxes()
                    .label_for(code)
                    .unwrap_or(code.canonical_label())
                    .to_string(),
            }
        } else {
            match item.loaded_tax_label() {
                Some(label) => label.to_string(),
                None => self
                    .taxes()
                    .label_for(item.tax_code())
                    .unwrap_or(item.tax_code().canonical_label())
                    .to_string(),
            }
        };

        LinePayload {
            id: item.id.clone(),
            item_id: item.item_id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            quantity: item.quantity(),
            unit: item.unit.clone(),
            rate: item.rate(),
            // absolute amount actually applied, never the raw percentage
            discount: amounts.discount_amount,
            discount_kind: item.discount_kind(),
            tax_amount: amounts.tax_amount,
            tax_label,
            total: amounts.total,
        }
    }
}
