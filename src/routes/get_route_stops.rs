use crate::{
    services::stop_eta_merge::types::records::{Direction, LocalizedName},
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
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Serialize, Deserialize)]
pub struct GetRouteStopsResponseGroupStop {
    pub stop_uid: Option<String>,
    pub stop_id: Option<String>,
    pub stop_sequence: Option<u32>,
    pub name: LocalizedName,
}

#[derive(Serialize, Deserialize)]
pub struct GetRouteStopsResponseGroup {
    pub route_uid: Option<String>,
    pub route_name: LocalizedName,
    pub sub_route_uid: Option<String>,
    pub sub_route_name: LocalizedName,
    pub direction: Option<Direction>,
    pub headsign: Option<String>,
    pub stops: Vec<GetRouteStopsResponseGroupStop>,
}

#[derive(Serialize, Deserialize)]
pub struct GetRouteStopsResponseData {
    pub groups: Vec<GetRouteStopsResponseGroup>,
}

#[derive(Serialize, Deserialize)]
pub struct GetRouteStopsResponse {
    pub data: GetRouteStopsResponseData,
}

pub async fn get_route_stops(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<RoutePath>,
    ValidatedQuery(query): ValidatedQuery<CityQuery>,
) -> Result<Response, AppError> {
    let city = query.resolve(state.default_city);

    let rows = state
        .tdx_service
        .get_stops_of_route(city, path.name())
        .await
        .map_err(|e| AppError::from_upstream(e, "Failed to fetch stops of route"))?;

    if rows.is_empty() {
        info!("Route {} has no stops in {}", path.name(), city);
        return Err(AppError::new(
            StatusCode::NOT_FOUND,
            format!("Route {} has no stops in {}", path.name(), city).as_str(),
        ));
    }

    let groups = rows
        .into_iter()
        .map(|row| GetRouteStopsResponseGroup {
            route_uid: row.RouteUID,
            route_name: LocalizedName::from(row.RouteName.as_ref()),
            sub_route_uid: row.SubRouteUID,
            sub_route_name: LocalizedName::from(row.SubRouteName.as_ref()),
            direction: row.Direction.and_then(Direction::from_tdx),
            headsign: row.Headsign,
            stops: row
                .Stops
                .unwrap_or_default()
                .into_iter()
                .map(|stop| GetRouteStopsResponseGroupStop {
                    stop_uid: stop.StopUID,
                    stop_id: stop.StopID,
                    stop_sequence: stop.StopSequence,
                    name: LocalizedName::from(stop.StopName.as_ref()),
                })
                .collect(),
        })
        .collect::<Vec<GetRouteStopsResponseGroup>>();

    Ok((
        StatusCode::OK,
        Json(GetRouteStopsResponse {
            data: GetRouteStopsResponseData { groups },
        }),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use mockito::Matcher;
    use tower::ServiceExt;
    use tracing_test::traced_test;

    use crate::{
        app::{gen_app, tests::test_config},
        routes::test_fixtures::{mock_token, stop_of_route_row},
    };

    use super::*;

    #[tokio::test]
    async fn get_response() {
        let mut mock_server = mockito::Server::new_async().await;
        let _token = mock_token(&mut mock_server).await;

        let app = gen_app(test_config(&mock_server.url())).unwrap();

        let rows = vec![
            stop_of_route_row("307", 0, "板橋", &[("TPE1", 1), ("TPE2", 2)]),
            stop_of_route_row("307", 1, "撫遠街", &[("TPE2", 1)]),
        ];

        let mock_server = mock_server
            .mock("GET", "/api/v2/Bus/StopOfRoute/City/Taipei/307")
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&rows).unwrap())
            .match_query(Matcher::Regex(".*".to_string()))
            .create_async()
            .await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/routes/307/stops?city=Taipei")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        mock_server.assert_async().await;

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: GetRouteStopsResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.data.groups.len(), 2);
        assert_eq!(body.data.groups[0].direction, Some(Direction::Outbound));
        assert_eq!(body.data.groups[0].headsign.as_deref(), Some("板橋"));
        assert_eq!(body.data.groups[0].stops.len(), 2);
        assert_eq!(body.data.groups[0].stops[1].stop_uid.as_deref(), Some("TPE2"));
        assert_eq!(body.data.groups[0].stops[1].stop_sequence, Some(2));
        assert_eq!(body.data.groups[1].direction, Some(Direction::Inbound));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_not_found() {
        let mut mock_server = mockito::Server::new_async().await;
        let _token = mock_token(&mut mock_server).await;

        let app = gen_app(test_config(&mock_server.url())).unwrap();

        let mock_server = mock_server
            .mock("GET", "/api/v2/Bus/StopOfRoute/City/Tainan/999")
            .with_header("content-type", "application/json")
            .with_body("[]")
            .match_query(Matcher::Regex(".*".to_string()))
            .create_async()
            .await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/routes/999/stops?city=Tainan")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        mock_server.assert_async().await;
        assert!(logs_contain("Route 999 has no stops in Tainan"));
    }

    #[tokio::test]
    async fn test_blank_route() {
        let mut mock_server = mockito::Server::new_async().await;

        let app = gen_app(test_config(&mock_server.url())).unwrap();

        let mock_server = mock_server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/routes/%20%20/stops")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        mock_server.assert_async().await;
    }
}
