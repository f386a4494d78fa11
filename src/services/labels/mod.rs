pub mod label_service;

pub use label_service::LabelService;
