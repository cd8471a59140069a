// End-to-end edit session against an in-memory document store:
// load → edit → save, exercising the trust policy and the wholesale
// item-array re-send.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use gstbill::challans::models::{ChallanPayload, ChallanRecord};
use gstbill::core::{AppError, Result};
use gstbill::invoices::models::{InvoicePayload, InvoiceRecord};
use gstbill::invoices::InvoiceService;
use gstbill::payments::models::{ReceiptPayload, ReceiptRecord};
use gstbill::store::{CustomerRef, DocumentStore, ItemRef, SaveReceipt, TaxRateRef};
use gstbill::taxes::{TaxCode, TaxTable};

struct MockStore {
    invoice: serde_json::Value,
    saved_invoice: Mutex<Option<InvoicePayload>>,
    fail_save: bool,
}

impl MockStore {
    fn new(invoice: serde_json::Value) -> Self {
        Self {
            invoice,
            saved_invoice: Mutex::new(None),
            fail_save: false,
        }
    }
}

#[async_trait]
impl DocumentStore for MockStore {
    async fn load_invoice(&self, _id: &str) -> Result<InvoiceRecord> {
        Ok(serde_json::from_value(self.invoice.clone())?)
    }

    async fn save_invoice(
        &self,
        _id: Option<&str>,
        payload: &InvoicePayload,
    ) -> Result<SaveReceipt> {
        if self.fail_save {
            return Err(AppError::store("save failed"));
        }
        *self.saved_invoice.lock().unwrap() = Some(payload.clone());
        Ok(SaveReceipt {
            id: "inv1".into(),
            number: "INV-0042".into(),
        })
    }

    async fn load_challan(&self, id: &str) -> Result<ChallanRecord> {
        Err(AppError::not_found(format!("challan {id}")))
    }

    async fn save_challan(
        &self,
        _id: Option<&str>,
        _payload: &ChallanPayload,
    ) -> Result<SaveReceipt> {
        Err(AppError::store("unsupported"))
    }

    async fn load_receipt(&self, id: &str) -> Result<ReceiptRecord> {
        Err(AppError::not_found(format!("receipt {id}")))
    }

    async fn save_receipt(
        &self,
        _id: Option<&str>,
        _payload: &ReceiptPayload,
    ) -> Result<SaveReceipt> {
        Err(AppError::store("unsupported"))
    }

    async fn customers(&self) -> Result<Vec<CustomerRef>> {
        Ok(vec![])
    }

    async fn items(&self) -> Result<Vec<ItemRef>> {
        Ok(vec![])
    }

    async fn tax_rates(&self) -> Result<Vec<TaxRateRef>> {
        Ok(vec![
            TaxRateRef {
                id: "t1".into(),
                tax_code: "GST18".into(),
                rate: dec!(18),
            },
            TaxRateRef {
                id: "t2".into(),
                tax_code: "GST5".into(),
                rate: dec!(5),
            },
        ])
    }
}

fn stored_invoice() -> serde_json::Value {
    serde_json::json!({
        "id": "inv1",
        "number": "INV-0042",
        "customerId": "c9",
        "invoiceDate": "2024-03-28",
        "shippingCharges": "₹50",
        "adjustment": 0,
        "items": [
            {
                "id": "l1",
                "name": "Gravel",
                "unit": "cft",
                "quantity": 3,
                "rate": "200",
                "discount": 0,
                "discountKind": "flat",
                "taxLabel": "GST @ 18%",
                "taxAmount": 108,
                "total": 708
            },
            {
                "id": "l2",
                "name": "Sand",
                "unit": "cft",
                "quantity": 2,
                "rate": "150",
                "discount": 0,
                "discountKind": "flat",
                "taxLabel": "GST5",
                "taxAmount": 15,
                "total": 315
            }
        ]
    })
}

async fn service_with(store: MockStore) -> (Arc<MockStore>, InvoiceService) {
    let store = Arc::new(store);
    let taxes = TaxTable::from_refs(&store.tax_rates().await.unwrap());
    let service = InvoiceService::new(store.clone(), taxes);
    (store, service)
}

#[tokio::test]
async fn test_load_edit_save_session() {
    let (store, service) = service_with(MockStore::new(stored_invoice())).await;

    let mut invoice = service.load("inv1").await.unwrap();
    assert_eq!(invoice.items.len(), 2);

    // untouched document: totals trust the stored tax amounts
    let totals = service.totals(&invoice);
    assert_eq!(totals.subtotal, dec!(900));
    assert_eq!(totals.total_tax, dec!(123));
    assert_eq!(totals.grand_total, dec!(1073)); // + ₹50 shipping

    // edit the second line: quantity 2 → 4, so it recomputes at 5%
    invoice.items[1].set_quantity(dec!(4));
    let preview = service.preview(&invoice.items[1], false);
    assert_eq!(preview.taxable_amount, dec!(600));
    assert_eq!(preview.tax_amount, dec!(30));
    assert_eq!(preview.total, dec!(630));

    let receipt = service.save(&invoice).await.unwrap();
    assert_eq!(receipt.number, "INV-0042");

    let payload = store.saved_invoice.lock().unwrap().clone().unwrap();
    assert_eq!(payload.items.len(), 2);

    // the untouched line re-emits its historical label and stored amounts
    assert_eq!(payload.items[0].tax_label, "GST @ 18%");
    assert_eq!(payload.items[0].tax_amount, dec!(108));
    assert_eq!(payload.items[0].total, dec!(708));

    // the edited line was recomputed and keeps its loaded label because the
    // tax code itself was never touched
    assert_eq!(payload.items[1].tax_label, "GST5");
    assert_eq!(payload.items[1].tax_amount, dec!(30));
    assert_eq!(payload.items[1].total, dec!(630));

    // payload totals match the preview aggregation exactly
    assert_eq!(payload.subtotal, dec!(1200));
    assert_eq!(payload.cgst + payload.sgst, dec!(138));
    assert_eq!(payload.total, dec!(1388)); // 1200 + 138 + 50 shipping
}

#[tokio::test]
async fn test_tax_code_change_defeats_stale_totals() {
    let (store, service) = service_with(MockStore::new(stored_invoice())).await;

    let mut invoice = service.load("inv1").await.unwrap();
    // only the tax code changes; the stale stored 708 must not survive
    invoice.items[0].set_tax_code(TaxCode::Gst0);
    let preview = service.preview(&invoice.items[0], false);
    assert_eq!(preview.tax_amount, Decimal::ZERO);
    assert_eq!(preview.total, dec!(600));

    service.save(&invoice).await.unwrap();
    let payload = store.saved_invoice.lock().unwrap().clone().unwrap();
    // touched: the selected code's label is emitted; the injected table has
    // no GST0 entry so the canonical label is used
    assert_eq!(payload.items[0].tax_label, "GST0");
    assert_eq!(payload.items[0].total, dec!(600));
}

#[tokio::test]
async fn test_validation_failure_blocks_save() {
    let (store, service) = service_with(MockStore::new(stored_invoice())).await;

    let mut invoice = service.load("inv1").await.unwrap();
    invoice.customer_id = String::new();

    let err = service.save(&invoice).await.unwrap_err();
    assert!(err.is_validation());
    // nothing reached the store
    assert!(store.saved_invoice.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_store_failure_preserves_edit_state() {
    let mut mock = MockStore::new(stored_invoice());
    mock.fail_save = true;
    let (_store, service) = service_with(mock).await;

    let mut invoice = service.load("inv1").await.unwrap();
    invoice.items[0].set_quantity(dec!(10));

    let err = service.save(&invoice).await.unwrap_err();
    assert!(matches!(err, AppError::Store(_)));

    // the in-memory document is untouched; a retry produces the same payload
    assert_eq!(invoice.items[0].quantity(), dec!(10));
    let retry_payload = invoice.payload(service.calculator());
    assert_eq!(retry_payload.items[0].quantity, dec!(10));
}
