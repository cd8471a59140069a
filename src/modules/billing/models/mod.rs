pub mod line_item;
pub mod wire;

pub use line_item::{DiscountKind, LineItem, LineState};
pub use wire::{LinePayload, LineRecord};
