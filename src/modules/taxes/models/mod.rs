pub mod tax_table;

pub use tax_table::{TaxCode, TaxEntry, TaxTable};
