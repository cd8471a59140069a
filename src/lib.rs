//! GST Billing Calculation Engine
//!
//! The line-item financial core shared by the invoice, delivery-challan and
//! payment-receipt editors: discount → taxable amount → tax → total, with
//! per-line modified-state tracking, document aggregation and the
//! persistence payload mapping.

pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::billing;
pub use modules::challans;
pub use modules::invoices;
pub use modules::payments;
pub use modules::store;
pub use modules::taxes;
