use crate::{
    services::{
        stop_eta_merge::{
            merge_service::merge,
            types::records::{
                eta_records_from_rows, stop_records_from_routes, Direction, LocalizedName,
                MergedEntry,
            },
        },
        tdx_service::types::tdx_stop_of_route_response::StopOfRoute,
    },
    types::{
        app_state::AppState,
        city::City,
        route_request::{CityQuery, RoutePath},
    },
    utils::{
        app_error::AppError, validated_path::ValidatedPath, validated_query::ValidatedQuery,
    },
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
#[cfg(test)]
use axum_macros::debug_handler;
use futures::future::try_join;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Serialize, Deserialize)]
pub struct GetRouteStopEtasResponseDirection {
    pub route_name: LocalizedName,
    pub headsign: Option<String>,
    pub stops: Vec<MergedEntry>,
}

#[derive(Serialize, Deserialize)]
pub struct GetRouteStopEtasResponseData {
    pub route: String,
    pub city: City,
    pub updated_at: String,
    pub outbound: GetRouteStopEtasResponseDirection,
    pub inbound: GetRouteStopEtasResponseDirection,
}

#[derive(Serialize, Deserialize)]
pub struct GetRouteStopEtasResponse {
    pub data: GetRouteStopEtasResponseData,
}

/// Route name and headsign come from the first row running in `direction`.
fn direction_view(
    rows: &[StopOfRoute],
    direction: Direction,
    stops: Vec<MergedEntry>,
) -> GetRouteStopEtasResponseDirection {
    let row = rows
        .iter()
        .find(|r| r.Direction.and_then(Direction::from_tdx) == Some(direction));

    GetRouteStopEtasResponseDirection {
        route_name: LocalizedName::from(row.and_then(|r| r.RouteName.as_ref())),
        headsign: row.and_then(|r| r.Headsign.clone()),
        stops,
    }
}

#[cfg_attr(test, debug_handler)]
pub async fn get_route_stop_etas(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<RoutePath>,
    ValidatedQuery(query): ValidatedQuery<CityQuery>,
) -> Result<Response, AppError> {
    let city = query.resolve(state.default_city);
    let route = path.name();

    // Either failure aborts the whole request; the other call is dropped.
    let (stop_rows, eta_rows) = try_join(
        state.tdx_service.get_stops_of_route(city, route),
        state.tdx_service.get_estimated_arrivals(city, route),
    )
    .await
    .map_err(|e| AppError::from_upstream(e, "Failed to fetch stops and ETAs"))?;

    let merged = merge(
        &stop_records_from_routes(&stop_rows),
        &eta_records_from_rows(&eta_rows),
    );

    // Loop-only routes have rows but nothing in either direction.
    if merged.outbound.is_empty() && merged.inbound.is_empty() {
        info!("Route {} has no stops in {}", route, city);
        return Err(AppError::new(
            StatusCode::NOT_FOUND,
            format!("Route {} has no stops in {}", route, city).as_str(),
        ));
    }

    info!(
        "Merged route {} in {}: {} outbound, {} inbound stops",
        route,
        city,
        merged.outbound.len(),
        merged.inbound.len()
    );

    Ok((
        StatusCode::OK,
        Json(GetRouteStopEtasResponse {
            data: GetRouteStopEtasResponseData {
                route: route.to_string(),
                city,
                updated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                outbound: direction_view(&stop_rows, Direction::Outbound, merged.outbound),
                inbound: direction_view(&stop_rows, Direction::Inbound, merged.inbound),
            },
        }),
    )
        .into_response())
}
