pub mod models;
pub mod services;

pub use models::{Invoice, InvoicePayload, InvoiceRecord};
pub use services::InvoiceService;
