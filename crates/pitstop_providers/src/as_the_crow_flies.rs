use serde_json::{Value, json};

use crate::route_query::{RouteQuery, RouteResult};

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

fn haversine_distance<P>(from: P, to: P) -> f64
where
    P: Into<geo_types::Point>,
{
    let from: geo_types::Point = from.into();
    let to: geo_types::Point = to.into();

    let lat1_rad = from.y().to_radians();
    let lon1_rad = from.x().to_radians();
    let lat2_rad = to.y().to_radians();
    let lon2_rad = to.x().to_radians();

    let delta_lat = lat2_rad - lat1_rad;
    let delta_lon = lon2_rad - lon1_rad;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Pulls a coordinate out of an opaque place reference. Accepts both the
/// request shape (`{ location: { latLng: ... } }`) and a bare
/// `{ latLng: ... }` object; place ids have no coordinate and yield `None`.
fn parse_lat_lng(reference: &Value) -> Option<geo_types::Point> {
    let lat_lng = reference
        .get("location")
        .and_then(|location| location.get("latLng"))
        .or_else(|| reference.get("latLng"))?;

    let latitude = lat_lng.get("latitude")?.as_f64()?;
    let longitude = lat_lng.get("longitude")?.as_f64()?;

    Some(geo_types::Point::new(longitude, latitude))
}

/// Offline fallback: straight-line leg distances scaled by `road_factor`
/// to approximate road distance.
pub fn as_the_crow_flies_route(
    query: &RouteQuery,
    include_stopover: bool,
    road_factor: f64,
) -> RouteResult {
    let (Some(origin), Some(destination)) = (
        parse_lat_lng(&query.origin),
        parse_lat_lng(&query.destination),
    ) else {
        return RouteResult::no_route(Value::Null);
    };

    let crow_distance = match (include_stopover, query.stopover) {
        (true, Some(stopover)) => {
            haversine_distance(origin, stopover) + haversine_distance(stopover, destination)
        }
        _ => haversine_distance(origin, destination),
    };

    let distance = crow_distance * road_factor;

    RouteResult {
        distance_meters: Some(distance),
        duration: None,
        raw: json!({ "routes": [{ "distanceMeters": distance }] }),
    }
}

#[cfg(test)]
mod tests {

    use serde_json::json;

    use super::*;

    fn lat_lng_reference(longitude: f64, latitude: f64) -> Value {
        json!({ "location": { "latLng": { "latitude": latitude, "longitude": longitude } } })
    }

    #[test]
    fn stopover_leg_never_shortens_the_route() {
        let query = RouteQuery {
            origin: lat_lng_reference(4.34878, 50.85045),
            destination: lat_lng_reference(4.40346, 51.21989),
            stopover: Some(geo_types::Point::new(3.71947, 51.05)),
        };

        let direct = as_the_crow_flies_route(&query, false, 1.3);
        let detour = as_the_crow_flies_route(&query, true, 1.3);

        assert!(detour.distance_meters.unwrap() >= direct.distance_meters.unwrap());
    }

    #[test]
    fn place_id_endpoints_yield_no_route() {
        let query = RouteQuery {
            origin: json!({ "placeId": "somewhere" }),
            destination: lat_lng_reference(4.40346, 51.21989),
            stopover: None,
        };

        assert!(!as_the_crow_flies_route(&query, false, 1.3).found());
    }

    #[test]
    fn known_distance_within_tolerance() {
        // Brussels to Antwerp is roughly 42 km as the crow flies
        let query = RouteQuery {
            origin: lat_lng_reference(4.34878, 50.85045),
            destination: lat_lng_reference(4.40346, 51.21989),
            stopover: None,
        };

        let result = as_the_crow_flies_route(&query, false, 1.0);
        let distance = result.distance_meters.unwrap();

        assert!(distance > 40_000.0 && distance < 44_000.0, "{distance}");
    }
}
