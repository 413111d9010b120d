use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, info};
use urlencoding::encode;

use crate::types::city::City;

use super::{
    route_filter::filter_by_route,
    types::{
        tdx_estimated_time_of_arrival_response::EstimatedTimeOfArrival,
        tdx_list_response::TdxListResponse, tdx_service_error::TdxServiceError,
        tdx_stop_of_route_response::StopOfRoute, tdx_token_response::TokenResponse,
    },
};

/// Seconds shaved off `expires_in` so a token is never used right at expiry.
const TOKEN_SAFETY_WINDOW_SECS: i64 = 30;

#[derive(Clone, Debug)]
pub struct TdxServiceConfig {
    pub app_id: String,
    pub app_key: String,
    pub api_base: String,
    pub token_url: String,
    pub timeout: Duration,
}

struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct TdxService {
    config: TdxServiceConfig,
    client: reqwest::Client,
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl TdxService {
    pub fn new(config: TdxServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            token: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn get_estimated_arrivals(
        &self,
        city: City,
        route: &str,
    ) -> Result<Vec<EstimatedTimeOfArrival>, TdxServiceError> {
        let rows = self
            .get_list::<EstimatedTimeOfArrival>("EstimatedTimeOfArrival", city, route)
            .await?;

        Ok(filter_by_route(rows, route))
    }

    pub async fn get_stops_of_route(
        &self,
        city: City,
        route: &str,
    ) -> Result<Vec<StopOfRoute>, TdxServiceError> {
        let rows = self
            .get_list::<StopOfRoute>("StopOfRoute", city, route)
            .await?;

        Ok(filter_by_route(rows, route))
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        resource: &str,
        city: City,
        route: &str,
    ) -> Result<Vec<T>, TdxServiceError> {
        let url = format!(
            "{}/v2/Bus/{}/City/{}/{}",
            self.config.api_base,
            resource,
            city,
            encode(route)
        );
        let token = self.access_token().await?;

        debug!("GET {}", url);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&[("$format", "JSON")])
            .timeout(self.config.timeout)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(TdxServiceError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<TdxListResponse<T>>(&body)
            .map(TdxListResponse::into_rows)
            .map_err(|e| TdxServiceError::Decode(e.to_string()))
    }

    /// Returns the cached token, fetching a new one when it is missing or
    /// expired. The lock is held across the refresh so concurrent callers
    /// share a single token request.
    async fn access_token(&self) -> Result<String, TdxServiceError> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref() {
            if Utc::now() < token.expires_at {
                return Ok(token.access_token.clone());
            }
        }

        if self.config.app_id.is_empty() || self.config.app_key.is_empty() {
            return Err(TdxServiceError::MissingCredentials);
        }

        let resp = self
            .client
            .post(&self.config.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.app_id.as_str()),
                ("client_secret", self.config.app_key.as_str()),
            ])
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| TdxServiceError::Token(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(TdxServiceError::Token(format!("{}: {}", status, text)));
        }

        let body = resp
            .json::<TokenResponse>()
            .await
            .map_err(|e| TdxServiceError::Token(e.to_string()))?;

        let access_token = match body.access_token {
            Some(t) if !t.is_empty() => t,
            _ => {
                return Err(TdxServiceError::Token(
                    "token missing in response".to_string(),
                ))
            }
        };

        let lifetime = (body.expires_in - TOKEN_SAFETY_WINDOW_SECS).max(0);
        info!("Fetched TDX access token, valid for {}s", lifetime);

        *cached = Some(CachedToken {
            access_token: access_token.clone(),
            expires_at: Utc::now() + chrono::Duration::seconds(lifetime),
        });

        Ok(access_token)
    }
}
