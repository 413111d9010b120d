pub mod tdx_estimated_time_of_arrival_response;
pub mod tdx_list_response;
pub mod tdx_name_type;
pub mod tdx_service_error;
pub mod tdx_stop_of_route_response;
pub mod tdx_token_response;
