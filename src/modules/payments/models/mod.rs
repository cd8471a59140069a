pub mod receipt;

pub use receipt::{PaymentReceipt, ReceiptPayload, ReceiptRecord};
