pub mod models;

pub use models::{TaxCode, TaxEntry, TaxTable};
