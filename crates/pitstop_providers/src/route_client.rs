use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::{
    as_the_crow_flies::as_the_crow_flies_route,
    cache,
    google_routes_api::{GoogleRoutesClient, GoogleRoutesClientParams},
    route_provider::{CustomLeg, RouteProvider},
    route_query::{RouteQuery, RouteResult},
};

pub struct RoutePlanClient {
    google_client: GoogleRoutesClient,
}

impl Default for RoutePlanClient {
    fn default() -> Self {
        Self::new(GoogleRoutesClientParams {
            api_key: std::env::var("GOOGLE_ROUTES_API_KEY").unwrap_or_default(),
        })
    }
}

impl RoutePlanClient {
    pub fn new(params: GoogleRoutesClientParams) -> Self {
        Self {
            google_client: GoogleRoutesClient::new(params),
        }
    }

    /// One outbound attempt per route alternative; no retries. "No route
    /// found" flows back as an `Ok` result with an absent distance.
    pub async fn fetch_route(
        &self,
        query: &RouteQuery,
        include_stopover: bool,
        provider: &RouteProvider,
    ) -> anyhow::Result<RouteResult> {
        if let Ok(Some(cached)) = cache::get_cached_route(query, include_stopover, provider) {
            debug!("RoutePlanClient: cache hit");
            return Ok(cached);
        }

        let result = match provider {
            RouteProvider::GoogleRoutesApi => {
                self.google_client
                    .fetch_route(query, include_stopover)
                    .await?
            }
            RouteProvider::AsTheCrowFlies { road_factor } => {
                as_the_crow_flies_route(query, include_stopover, *road_factor)
            }
            RouteProvider::Custom {
                with_stopover,
                without_stopover,
            } => {
                let leg = if include_stopover {
                    with_stopover
                } else {
                    without_stopover
                };
                custom_route(leg).await
            }
        };

        let _ = cache::cache_route(query, include_stopover, provider, &result);

        Ok(result)
    }
}

async fn custom_route(leg: &CustomLeg) -> RouteResult {
    if leg.latency_ms > 0 {
        tokio::time::sleep(Duration::from_millis(leg.latency_ms)).await;
    }

    match leg.distance_meters {
        Some(distance) => RouteResult {
            distance_meters: Some(distance),
            duration: None,
            raw: Value::Null,
        },
        None => RouteResult::no_route(Value::Null),
    }
}
