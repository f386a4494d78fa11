pub mod task_status_repo;

pub use task_status_repo::TaskStatusRepository;
