pub mod models;
pub mod services;

pub use models::{ChallanPayload, ChallanRecord, DeliveryChallan};
pub use services::ChallanService;
