//! 캐시 계층

pub mod redis;
