pub mod models;
pub mod services;

pub use models::{DiscountKind, LineItem, LinePayload, LineRecord, LineState};
pub use services::{Adjustments, DocumentTotals, LineAmounts, LineCalculator, TaxSplit};
