use crate::{
    services::stop_eta_merge::types::records::{Direction, Estimate, LocalizedName},
    types::{
        app_state::AppState,
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
#[cfg(test)]
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Serialize, Deserialize)]
pub struct GetRouteEtaResponseDataEta {
    pub stop_uid: Option<String>,
    pub stop_id: Option<String>,
    pub stop_name: LocalizedName,
    pub route_name: LocalizedName,
    /// `None` for directions other than outbound/inbound.
    pub direction: Option<Direction>,
    pub estimate_seconds: Estimate,
    pub stop_status: Option<u8>,
    pub plate_numb: Option<String>,
    pub next_bus_time: Option<String>,
    pub update_time: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct GetRouteEtaResponseData {
    pub etas: Vec<GetRouteEtaResponseDataEta>,
}

#[derive(Serialize, Deserialize)]
pub struct GetRouteEtaResponse {
    pub data: GetRouteEtaResponseData,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_route_eta(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<RoutePath>,
    ValidatedQuery(query): ValidatedQuery<CityQuery>,
) -> Result<Response, AppError> {
    let city = query.resolve(state.default_city);

    let etas = state
        .tdx_service
        .get_estimated_arrivals(city, path.name())
        .await
        .map_err(|e| AppError::from_upstream(e, "Failed to fetch estimated arrivals"))?
        .into_iter()
        .map(|row| GetRouteEtaResponseDataEta {
            stop_uid: row.StopUID,
            stop_id: row.StopID,
            stop_name: LocalizedName::from(row.StopName.as_ref()),
            route_name: LocalizedName::from(row.RouteName.as_ref()),
            direction: row.Direction.and_then(Direction::from_tdx),
            estimate_seconds: Estimate::from_tdx(row.EstimateTime),
            stop_status: row.StopStatus,
            plate_numb: row.PlateNumb,
            next_bus_time: row.NextBusTime,
            update_time: row.UpdateTime,
        })
        .collect::<Vec<GetRouteEtaResponseDataEta>>();

    info!("Fetched {} ETAs for route {} in {}", etas.len(), path.name(), city);

    Ok((
        StatusCode::OK,
        Json(GetRouteEtaResponse {
            data: GetRouteEtaResponseData { etas },
        }),
    )
        .into_response())
}
