pub mod challan;

pub use challan::{ChallanPayload, ChallanRecord, DeliveryChallan};
