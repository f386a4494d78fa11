pub mod label_repo;

pub use label_repo::LabelRepository;
