use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::services::tdx_service::types::tdx_service_error::TdxServiceError;

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }

    /// Maps a failed upstream call, keeping the upstream status when it has one.
    pub fn from_upstream(err: TdxServiceError, context: &str) -> Self {
        error!("{}: {}", context, err);

        match err {
            TdxServiceError::Upstream { status, body } => AppError::new(
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                format!("TDX API error: {}", body).as_str(),
            ),
            TdxServiceError::MissingCredentials => AppError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "TDX credentials are missing",
            ),
            TdxServiceError::Token(_) => AppError::new(StatusCode::BAD_GATEWAY, "TDX token error"),
            TdxServiceError::Network(_) => {
                AppError::new(StatusCode::BAD_GATEWAY, "TDX network error")
            }
            TdxServiceError::Decode(_) => {
                AppError::new(StatusCode::BAD_GATEWAY, "Malformed TDX response")
            }
        }
    }
}

#[derive(Serialize)]
struct ResponseJson {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ResponseJson {
                message: self.message,
            }),
        )
            .into_response()
    }
}
