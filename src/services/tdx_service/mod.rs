pub mod route_filter;
pub mod tdx_service;
pub mod types;
