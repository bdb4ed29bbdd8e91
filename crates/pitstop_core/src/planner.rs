use futures::future::try_join;
use pitstop_providers::{
    route_client::RoutePlanClient,
    route_provider::RouteProvider,
    route_query::{RouteQuery, RouteResult},
};
use tracing::debug;

use crate::{
    decision::{ComparisonOutcome, ComparisonParams, decide},
    meters::Meters,
    prices::FuelPrices,
};

/// A decided (or undecidable) comparison together with both raw provider
/// payloads, so callers can render the routes the numbers came from.
pub struct TripComparison {
    pub outcome: ComparisonOutcome,
    pub route_with_stopover: RouteResult,
    pub route_without_stopover: RouteResult,
}

/// Fetches the via-stopover and direct routes concurrently, then runs the
/// cost comparison on the pair.
///
/// The two fetches are independent and joined, not raced: a decision is
/// only computed once both have completed. A transport failure on either
/// side fails the whole comparison and drops the other in-flight fetch;
/// cancelling the returned future abandons both. No partial decision is
/// ever produced.
pub async fn compare_routes(
    client: &RoutePlanClient,
    query: &RouteQuery,
    provider: &RouteProvider,
    prices: FuelPrices,
    params: &ComparisonParams,
) -> anyhow::Result<TripComparison> {
    let (route_with_stopover, route_without_stopover) = try_join(
        client.fetch_route(query, true, provider),
        client.fetch_route(query, false, provider),
    )
    .await?;

    debug!(
        "Route distances: with stopover {:?}, without stopover {:?}",
        route_with_stopover.distance_meters, route_without_stopover.distance_meters
    );

    let outcome = decide(
        route_with_stopover.distance_meters.map(Meters::new),
        route_without_stopover.distance_meters.map(Meters::new),
        &prices,
        params,
    );

    Ok(TripComparison {
        outcome,
        route_with_stopover,
        route_without_stopover,
    })
}

#[cfg(test)]
mod tests {

    use pitstop_providers::route_provider::CustomLeg;
    use serde_json::json;

    use crate::station::StationKey;

    use super::*;

    fn query() -> RouteQuery {
        RouteQuery {
            origin: json!({ "placeId": "origin-id" }),
            destination: json!({ "placeId": "destination-id" }),
            stopover: None,
        }
    }

    fn fixed_provider(
        with_stopover: Option<f64>,
        without_stopover: Option<f64>,
        with_latency_ms: u64,
        without_latency_ms: u64,
    ) -> RouteProvider {
        RouteProvider::Custom {
            with_stopover: CustomLeg {
                distance_meters: with_stopover,
                latency_ms: with_latency_ms,
            },
            without_stopover: CustomLeg {
                distance_meters: without_stopover,
                latency_ms: without_latency_ms,
            },
        }
    }

    #[tokio::test]
    async fn decides_from_both_fetched_distances() {
        let client = RoutePlanClient::default();
        let provider = fixed_provider(Some(10200.0), Some(10000.0), 0, 0);

        let comparison = compare_routes(
            &client,
            &query(),
            &provider,
            FuelPrices::new(160.0, 155.9),
            &ComparisonParams::default(),
        )
        .await
        .unwrap();

        let decision = comparison.outcome.decision().unwrap();
        assert_eq!(decision.cheaper_option, StationKey::Detour);
        assert_eq!(comparison.route_with_stopover.distance_meters, Some(10200.0));
        assert_eq!(
            comparison.route_without_stopover.distance_meters,
            Some(10000.0)
        );
    }

    #[tokio::test]
    async fn outcome_independent_of_fetch_completion_order() {
        let client = RoutePlanClient::default();
        let prices = FuelPrices::new(160.0, 155.9);
        let params = ComparisonParams::default();

        let stopover_slow = fixed_provider(Some(10200.0), Some(10000.0), 30, 5);
        let direct_slow = fixed_provider(Some(10200.0), Some(10000.0), 5, 30);

        let first = compare_routes(&client, &query(), &stopover_slow, prices, &params)
            .await
            .unwrap();
        let second = compare_routes(&client, &query(), &direct_slow, prices, &params)
            .await
            .unwrap();

        assert_eq!(first.outcome, second.outcome);
    }

    #[tokio::test]
    async fn one_missing_route_is_unavailable() {
        let client = RoutePlanClient::default();
        let provider = fixed_provider(None, Some(10000.0), 0, 0);

        let comparison = compare_routes(
            &client,
            &query(),
            &provider,
            FuelPrices::new(160.0, 155.9),
            &ComparisonParams::default(),
        )
        .await
        .unwrap();

        assert_eq!(comparison.outcome, ComparisonOutcome::Unavailable);
        assert!(comparison.route_with_stopover.distance_meters.is_none());
    }
}
