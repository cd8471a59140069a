pub mod calculator;
pub mod serializer;
pub mod totals;

pub use calculator::{LineAmounts, LineCalculator};
pub use totals::{Adjustments, DocumentTotals, TaxSplit};
