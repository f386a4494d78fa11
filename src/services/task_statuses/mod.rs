pub mod task_status_service;

pub use task_status_service::TaskStatusService;
