use geo_types::Point;
use serde_json::{Value, json};

pub fn parse_point(value: &str) -> Result<Point, String> {
    let (lng, lat) = value
        .split_once(',')
        .ok_or_else(|| String::from("expected \"lng,lat\""))?;

    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude: {lng}"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude: {lat}"))?;

    Ok(Point::new(lng, lat))
}

pub fn parse_price(value: &str) -> Result<f64, String> {
    let price: f64 = value.parse().map_err(|_| format!("invalid price: {value}"))?;

    if !price.is_finite() || price <= 0.0 {
        return Err(format!("price must be positive: {value}"));
    }

    Ok(price)
}

/// A "lng,lat" pair becomes a latLng waypoint; anything else is forwarded
/// as a place id.
pub fn place_reference(value: &str) -> Value {
    match parse_point(value) {
        Ok(point) => json!({
            "location": { "latLng": { "latitude": point.y(), "longitude": point.x() } }
        }),
        Err(_) => json!({ "placeId": value }),
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parses_lng_lat_pair() {
        let point = parse_point("-123.2445, 49.2663").unwrap();

        assert_eq!(point.x(), -123.2445);
        assert_eq!(point.y(), 49.2663);
    }

    #[test]
    fn rejects_malformed_point() {
        assert!(parse_point("not-a-point").is_err());
        assert!(parse_point("1.0;2.0").is_err());
    }

    #[test]
    fn rejects_non_positive_prices() {
        assert!(parse_price("0").is_err());
        assert!(parse_price("-1.5").is_err());
        assert!(parse_price("NaN").is_err());
        assert_eq!(parse_price("155.9").unwrap(), 155.9);
    }

    #[test]
    fn place_reference_falls_back_to_place_id() {
        let reference = place_reference("ChIJs0-pQ_FzhlQRi_OBm-qWkbs");

        assert_eq!(reference["placeId"], "ChIJs0-pQ_FzhlQRi_OBm-qWkbs");
    }
}
