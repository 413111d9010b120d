pub mod stop_eta_merge;
pub mod tdx_service;
