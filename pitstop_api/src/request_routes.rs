use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pitstop_core::decision::ComparisonOutcome;
use pitstop_core::planner::compare_routes;
use pitstop_providers::route_query::RouteQuery;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RequestRoutesBody {
    origin: Value,
    destination: Value,
}

/// Field names match what the map frontend reads; both raw route payloads
/// travel along for rendering.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRoutesResponse {
    comparison: ComparisonOutcome,
    distance_with_stopover: Option<f64>,
    distance_without_stopover: Option<f64>,
    route_with_stopover: Value,
    route_without_stopover: Value,
    stopover_location: Value,
}

impl IntoResponse for RequestRoutesResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn request_routes_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RequestRoutesBody>,
) -> Result<RequestRoutesResponse, ApiError> {
    let query = RouteQuery {
        origin: body.origin,
        destination: body.destination,
        stopover: Some(state.stopover),
    };

    let comparison = compare_routes(
        &state.route_client,
        &query,
        &state.provider,
        state.price_board.snapshot(),
        &state.params,
    )
    .await?;

    let stopover_location = json!({
        "latLng": {
            "latitude": state.stopover.y(),
            "longitude": state.stopover.x(),
        }
    });

    Ok(RequestRoutesResponse {
        comparison: comparison.outcome,
        distance_with_stopover: comparison.route_with_stopover.distance_meters,
        distance_without_stopover: comparison.route_without_stopover.distance_meters,
        route_with_stopover: comparison.route_with_stopover.raw,
        route_without_stopover: comparison.route_without_stopover.raw,
        stopover_location,
    })
}
