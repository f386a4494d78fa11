pub mod label;

pub use label::*;
