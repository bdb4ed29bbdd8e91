use jiff::SignedDuration;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::route_query::{RouteQuery, RouteResult};

pub const GOOGLE_ROUTES_COMPUTE_API_URL: &str =
    "https://routes.googleapis.com/directions/v2:computeRoutes";

/// Full payloads: the map layer renders polylines straight from the raw
/// response.
const FIELD_MASK: &str = "*";

#[derive(Debug, Error)]
pub enum RoutesApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComputeRoutesBody<'a> {
    /// Opaque place references, serialized exactly as received
    origin: &'a Value,
    destination: &'a Value,

    /// At most one waypoint, present only for the via-stopover variant
    #[serde(skip_serializing_if = "Option::is_none")]
    intermediates: Option<Vec<Waypoint>>,

    travel_mode: &'static str,

    /// Static distances keep the two variants comparable across requests
    routing_preference: &'static str,

    route_modifiers: RouteModifiers,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RouteModifiers {
    avoid_tolls: bool,
    avoid_ferries: bool,
}

#[derive(Serialize)]
struct Waypoint {
    location: WaypointLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WaypointLocation {
    lat_lng: LatLng,
}

#[derive(Serialize)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct ComputeRoutesResponse {
    #[serde(default)]
    routes: Vec<RoutePayload>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoutePayload {
    distance_meters: Option<f64>,

    /// Seconds with a trailing "s", e.g. "165s"
    duration: Option<String>,
}

pub struct GoogleRoutesClientParams {
    pub api_key: String,
}

pub struct GoogleRoutesClient {
    params: GoogleRoutesClientParams,
    client: reqwest::Client,
}

impl GoogleRoutesClient {
    pub fn new(params: GoogleRoutesClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch_route(
        &self,
        query: &RouteQuery,
        include_stopover: bool,
    ) -> Result<RouteResult, RoutesApiError> {
        let body = build_body(query, include_stopover);

        let response = self
            .client
            .post(GOOGLE_ROUTES_COMPUTE_API_URL)
            .header("X-Goog-Api-Key", &self.params.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<RouteResult, RoutesApiError> {
        if response.status().is_success() {
            let raw: Value = response.json().await?;
            parse_response(raw)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(RoutesApiError::Api { status, message })
        }
    }
}

fn build_body(query: &RouteQuery, include_stopover: bool) -> ComputeRoutesBody<'_> {
    let intermediates = if include_stopover {
        query.stopover.map(|stopover| {
            vec![Waypoint {
                location: WaypointLocation {
                    lat_lng: LatLng {
                        latitude: stopover.y(),
                        longitude: stopover.x(),
                    },
                },
            }]
        })
    } else {
        None
    };

    ComputeRoutesBody {
        origin: &query.origin,
        destination: &query.destination,
        intermediates,
        travel_mode: "DRIVE",
        routing_preference: "TRAFFIC_UNAWARE",
        route_modifiers: RouteModifiers {
            avoid_tolls: true,
            avoid_ferries: true,
        },
    }
}

fn parse_response(raw: Value) -> Result<RouteResult, RoutesApiError> {
    if raw.get("error").is_some() {
        debug!("GoogleRoutesApi: provider returned an error object");
        return Ok(RouteResult::no_route(raw));
    }

    let parsed: ComputeRoutesResponse = serde_json::from_value(raw.clone())?;

    let Some(route) = parsed.routes.first() else {
        debug!("GoogleRoutesApi: no routes in response");
        return Ok(RouteResult::no_route(raw));
    };

    Ok(RouteResult {
        distance_meters: route.distance_meters,
        duration: route.duration.as_deref().and_then(parse_duration),
        raw,
    })
}

fn parse_duration(duration: &str) -> Option<SignedDuration> {
    let seconds = duration.strip_suffix('s')?.parse::<f64>().ok()?;
    SignedDuration::try_from_secs_f64(seconds).ok()
}
