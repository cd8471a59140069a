pub mod currency;
pub mod error;
pub mod money;

pub use currency::{CurrencyFormatter, Grouping};
pub use error::{AppError, Result};
