pub mod billing;
pub mod challans;
pub mod invoices;
pub mod payments;
pub mod store;
pub mod taxes;
