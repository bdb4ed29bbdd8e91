use geo_types::Point;
use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One comparison request. Origin and destination are opaque place
/// references (a place id object or a latLng object) forwarded to the
/// routing provider exactly as received; the stopover is the configured
/// detour waypoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteQuery {
    pub origin: Value,
    pub destination: Value,
    pub stopover: Option<Point>,
}

/// Normalized outcome of a single route fetch.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RouteResult {
    /// `None` when the provider found no route. A missing distance is a
    /// routine outcome, not an error, and is never defaulted to zero.
    pub distance_meters: Option<f64>,

    pub duration: Option<SignedDuration>,

    /// Raw provider payload, kept untouched for downstream rendering.
    pub raw: Value,
}

impl RouteResult {
    pub fn no_route(raw: Value) -> Self {
        RouteResult {
            distance_meters: None,
            duration: None,
            raw,
        }
    }

    pub fn found(&self) -> bool {
        self.distance_meters.is_some()
    }
}
