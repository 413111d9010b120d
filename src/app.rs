use crate::{
    config::{AppConfig, AppConfigError},
    routes::apply_routes,
    services::tdx_service::tdx_service::{TdxService, TdxServiceConfig},
    types::app_state::AppState,
};
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

fn cors_layer(origin: &str) -> Result<CorsLayer, AppConfigError> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if origin == "*" {
        info!("CORS: allowing any origin");
        return Ok(cors.allow_origin(Any));
    }

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| AppConfigError::InvalidValue {
            var: "FRONTEND_ORIGIN".to_string(),
            reason: e.to_string(),
        })?;
    info!("CORS: restricting to {:?}", origin);

    Ok(cors.allow_origin(AllowOrigin::list([origin])))
}

pub fn gen_app(config: AppConfig) -> Result<Router, AppConfigError> {
    let cors_middleware = cors_layer(&config.frontend_origin)?;
    let state = AppState {
        tdx_service: TdxService::new(TdxServiceConfig {
            app_id: config.tdx_app_id,
            app_key: config.tdx_app_key,
            api_base: config.tdx_api_base,
            token_url: config.tdx_token_url,
            timeout: config.request_timeout,
        }),
        default_city: config.default_city,
        ui_api_base_url: config.api_base_url,
    };

    Ok(apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "TDX bus ETA service" }))
}

#[cfg(test)]
pub mod tests {
    use std::time::Duration;

    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use crate::types::city::City;

    use super::*;

    pub fn test_config(upstream: &str) -> AppConfig {
        AppConfig {
            tdx_app_id: "id".to_string(),
            tdx_app_key: "secret".to_string(),
            tdx_api_base: format!("{}/api", upstream),
            tdx_token_url: format!("{}/token", upstream),
            default_city: City::Taipei,
            request_timeout: Duration::from_secs(5),
            frontend_origin: "http://localhost:5173".to_string(),
            api_base_url: String::new(),
            bind_addr: "127.0.0.1:0".to_string(),
        }
    }

    #[tokio::test]
    async fn root_responds() {
        let app = gen_app(test_config("http://host")).unwrap();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn allows_configured_origin() {
        let app = gen_app(test_config("http://host")).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header("origin", "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn omits_cors_header_for_other_origins() {
        let app = gen_app(test_config("http://host")).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header("origin", "http://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .get("access-control-allow-origin")
            .is_none());
    }

    #[test]
    fn rejects_invalid_origin() {
        let mut config = test_config("http://host");
        config.frontend_origin = "bad\norigin".to_string();

        assert!(gen_app(config).is_err());
    }
}
