use std::{env, fmt, time::Duration};

use crate::types::city::City;

const DEFAULT_API_BASE: &str = "https://tdx.transportdata.tw/api";
const DEFAULT_TOKEN_URL: &str =
    "https://tdx.transportdata.tw/auth/realms/TDXConnect/protocol/openid-connect/token";
const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: f64 = 15.0;

/// Process configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub tdx_app_id: String,
    pub tdx_app_key: String,
    pub tdx_api_base: String,
    pub tdx_token_url: String,
    pub default_city: City,
    pub request_timeout: Duration,
    /// Allowed CORS origin, `*` allows any.
    pub frontend_origin: String,
    /// Base URL the UI page calls; empty means same origin.
    pub api_base_url: String,
    pub bind_addr: String,
}

#[derive(Debug, PartialEq)]
pub enum AppConfigError {
    InvalidValue { var: String, reason: String },
}

impl fmt::Display for AppConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppConfigError::InvalidValue { var, reason } => {
                write!(f, "Invalid value for {}: {}", var, reason)
            }
        }
    }
}

impl std::error::Error for AppConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let default_city = var("TDX_DEFAULT_CITY", City::Taipei.as_str())
            .parse::<City>()
            .map_err(|e| AppConfigError::InvalidValue {
                var: "TDX_DEFAULT_CITY".to_string(),
                reason: e.to_string(),
            })?;

        let timeout_raw = var(
            "TDX_REQUEST_TIMEOUT",
            &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
        );
        let request_timeout = timeout_raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .map(Duration::from_secs_f64)
            .ok_or_else(|| AppConfigError::InvalidValue {
                var: "TDX_REQUEST_TIMEOUT".to_string(),
                reason: format!("expected a positive number of seconds, got {}", timeout_raw),
            })?;

        Ok(AppConfig {
            tdx_app_id: lookup("TDX_APP_ID").unwrap_or_default(),
            tdx_app_key: lookup("TDX_APP_KEY").unwrap_or_default(),
            tdx_api_base: var("TDX_API_BASE", DEFAULT_API_BASE)
                .trim_end_matches('/')
                .to_string(),
            tdx_token_url: var("TDX_TOKEN_URL", DEFAULT_TOKEN_URL),
            default_city,
            request_timeout,
            frontend_origin: var("FRONTEND_ORIGIN", DEFAULT_FRONTEND_ORIGIN),
            api_base_url: lookup("API_BASE_URL")
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_string(),
            bind_addr: var("BIND_ADDR", DEFAULT_BIND_ADDR),
        })
    }
}
