pub mod merge_service;
pub mod types;
