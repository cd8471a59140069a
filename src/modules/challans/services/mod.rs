pub mod challan_service;

pub use challan_service::ChallanService;
