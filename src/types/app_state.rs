use crate::services::tdx_service::tdx_service::TdxService;

use super::city::City;

#[derive(Clone)]
pub struct AppState {
    pub tdx_service: TdxService,
    pub default_city: City,
    pub ui_api_base_url: String,
}
