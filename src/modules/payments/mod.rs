pub mod models;
pub mod services;

pub use models::{PaymentReceipt, ReceiptPayload, ReceiptRecord};
pub use services::ReceiptService;
