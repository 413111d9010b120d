mod app;
mod config;
mod routes;
mod services;
mod types;
mod utils;

use std::process;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();
    info!("Starting app...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };
    if config.tdx_app_id.is_empty() || config.tdx_app_key.is_empty() {
        warn!("TDX_APP_ID or TDX_APP_KEY not set, upstream calls will fail");
    }
    info!(
        "Using TDX at {} (default city {})",
        config.tdx_api_base, config.default_city
    );

    let bind_addr = config.bind_addr.clone();
    let app = match app::gen_app(config) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to build app: {}", e);
            process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", bind_addr, e);
            process::exit(1);
        }
    };
    info!("Listening on {}", bind_addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        process::exit(1);
    }
}
