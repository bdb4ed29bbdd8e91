use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub enum RouteProvider {
    /// https://developers.google.com/maps/documentation/routes
    GoogleRoutesApi,

    /// Haversine leg sums scaled by a road winding factor. Only works for
    /// latLng endpoints; opaque place ids yield no route.
    AsTheCrowFlies { road_factor: f64 },

    /// Fixed responses, for tests and offline runs.
    Custom {
        with_stopover: CustomLeg,
        without_stopover: CustomLeg,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CustomLeg {
    pub distance_meters: Option<f64>,

    /// Simulated provider latency.
    #[serde(default)]
    pub latency_ms: u64,
}

impl std::hash::Hash for RouteProvider {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            RouteProvider::GoogleRoutesApi => {
                state.write_u8(0);
            }
            RouteProvider::AsTheCrowFlies { road_factor } => {
                state.write_u8(1);
                state.write_u64(road_factor.to_bits());
            }
            RouteProvider::Custom {
                with_stopover,
                without_stopover,
            } => {
                state.write_u8(2);
                with_stopover.hash(state);
                without_stopover.hash(state);
            }
        }
    }
}

impl std::hash::Hash for CustomLeg {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self.distance_meters {
            Some(distance) => state.write_u64(distance.to_bits()),
            None => state.write_u8(0),
        }
        state.write_u64(self.latency_ms);
    }
}
