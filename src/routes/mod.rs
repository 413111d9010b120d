use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_health;
mod get_route_eta;
mod get_route_stop_etas;
mod get_route_stops;
mod get_ui;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/api/health", get(get_health::get_health))
        .route(
            "/api/routes/:route/eta",
            get(get_route_eta::get_route_eta),
        )
        .route(
            "/api/routes/:route/stops",
            get(get_route_stops::get_route_stops),
        )
        .route(
            "/api/routes/:route/stop-etas",
            get(get_route_stop_etas::get_route_stop_etas),
        )
        .route("/ui", get(get_ui::get_ui))
}
