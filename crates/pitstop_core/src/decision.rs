use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{meters::Meters, prices::FuelPrices, station::StationKey};

pub const METERS_PER_KILOMETER: f64 = 1000.0;

pub const DEFAULT_TYPICAL_FILL_LITERS: f64 = 50.0;
pub const DEFAULT_TYPICAL_MILEAGE_KM_PER_LITER: f64 = 10.0;

/// Fixed assumptions that normalize the cost comparison: how much fuel a
/// stop buys, and how far a liter takes the vehicle.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, JsonSchema)]
pub struct ComparisonParams {
    pub typical_fill_liters: f64,
    pub typical_mileage_km_per_liter: f64,
}

impl Default for ComparisonParams {
    fn default() -> Self {
        ComparisonParams {
            typical_fill_liters: DEFAULT_TYPICAL_FILL_LITERS,
            typical_mileage_km_per_liter: DEFAULT_TYPICAL_MILEAGE_KM_PER_LITER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub cheaper_option: StationKey,

    /// Signed; negative when the stopover route measured shorter.
    pub detour_extra_distance: Meters,

    pub detour_fuel_cost: f64,
    pub direct_fuel_cost: f64,
}

/// Outcome of a comparison. `Unavailable` is a routine result (one or
/// both distances unknown), not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ComparisonOutcome {
    Decided(Decision),
    Unavailable,
}

impl ComparisonOutcome {
    pub fn decision(&self) -> Option<&Decision> {
        match self {
            ComparisonOutcome::Decided(decision) => Some(decision),
            ComparisonOutcome::Unavailable => None,
        }
    }
}

/// Decides whether filling up at the detour station beats continuing to
/// the on-path station. Pure: identical inputs always produce the
/// identical outcome.
///
/// The detour cost models a typical fill driven over the fill's whole
/// range plus the extra detour distance, bought at the detour price; the
/// direct cost is the same fill at the path price with no distance
/// penalty.
pub fn decide(
    distance_with_stopover: Option<Meters>,
    distance_without_stopover: Option<Meters>,
    prices: &FuelPrices,
    params: &ComparisonParams,
) -> ComparisonOutcome {
    let (Some(with_stopover), Some(without_stopover)) =
        (distance_with_stopover, distance_without_stopover)
    else {
        // An unknown distance means the cost of that option is unknown;
        // zero is never substituted.
        return ComparisonOutcome::Unavailable;
    };

    let extra_distance = with_stopover - without_stopover;

    let detour_fuel_cost = (extra_distance.value()
        / (params.typical_mileage_km_per_liter * METERS_PER_KILOMETER)
        + params.typical_fill_liters)
        * prices.detour;
    let direct_fuel_cost = params.typical_fill_liters * prices.path;

    // A strictly cheaper unit price on the path wins outright, before the
    // cost comparison runs. Ties fall through to the path arm.
    let cheaper_option = if prices.path < prices.detour {
        StationKey::Path
    } else if detour_fuel_cost < direct_fuel_cost {
        StationKey::Detour
    } else {
        StationKey::Path
    };

    ComparisonOutcome::Decided(Decision {
        cheaper_option,
        detour_extra_distance: extra_distance,
        detour_fuel_cost,
        direct_fuel_cost,
    })
}

#[cfg(test)]
mod tests {

    use super::*;

    fn meters(value: f64) -> Option<Meters> {
        Some(Meters::new(value))
    }

    fn params() -> ComparisonParams {
        ComparisonParams::default()
    }

    #[test]
    fn cheaper_path_price_wins_outright() {
        // Even with a large detour penalty on the table, a lower unit
        // price on the path decides immediately.
        let outcome = decide(
            meters(15000.0),
            meters(10000.0),
            &FuelPrices::new(155.9, 160.0),
            &params(),
        );

        let decision = outcome.decision().unwrap();
        assert_eq!(decision.cheaper_option, StationKey::Path);
        assert_eq!(decision.detour_extra_distance, Meters::new(5000.0));
    }

    #[test]
    fn small_detour_to_cheaper_station_recommended() {
        let outcome = decide(
            meters(10200.0),
            meters(10000.0),
            &FuelPrices::new(160.0, 155.9),
            &params(),
        );

        let decision = outcome.decision().unwrap();
        assert_eq!(decision.cheaper_option, StationKey::Detour);
        assert_eq!(decision.detour_extra_distance, Meters::new(200.0));
        assert!((decision.detour_fuel_cost - 7798.118).abs() < 1e-9);
        assert!((decision.direct_fuel_cost - 8000.0).abs() < 1e-9);
    }

    #[test]
    fn long_detour_to_cheaper_station_rejected() {
        // 150 km of extra driving burns more than the price gap saves
        let outcome = decide(
            meters(160_000.0),
            meters(10_000.0),
            &FuelPrices::new(160.0, 155.9),
            &params(),
        );

        assert_eq!(
            outcome.decision().unwrap().cheaper_option,
            StationKey::Path
        );
    }

    #[test]
    fn absent_stopover_distance_is_unavailable() {
        let outcome = decide(
            None,
            meters(10000.0),
            &FuelPrices::new(155.9, 160.0),
            &params(),
        );

        assert_eq!(outcome, ComparisonOutcome::Unavailable);
    }

    #[test]
    fn absent_direct_distance_is_unavailable() {
        let outcome = decide(
            meters(15000.0),
            None,
            &FuelPrices::new(155.9, 160.0),
            &params(),
        );

        assert_eq!(outcome, ComparisonOutcome::Unavailable);
    }

    #[test]
    fn negative_extra_distance_passes_through() {
        // A stopover route measured shorter than the direct one: the
        // negative difference discounts the detour cost instead of being
        // clamped away.
        let outcome = decide(
            meters(9000.0),
            meters(10000.0),
            &FuelPrices::new(160.0, 160.0),
            &params(),
        );

        let decision = outcome.decision().unwrap();
        assert_eq!(decision.detour_extra_distance, Meters::new(-1000.0));
        assert_eq!(decision.cheaper_option, StationKey::Detour);
        assert!(decision.detour_fuel_cost < decision.direct_fuel_cost);
    }

    #[test]
    fn equal_prices_and_distances_tie_to_path() {
        let outcome = decide(
            meters(10000.0),
            meters(10000.0),
            &FuelPrices::new(160.0, 160.0),
            &params(),
        );

        assert_eq!(outcome.decision().unwrap().cheaper_option, StationKey::Path);
    }

    #[test]
    fn identical_inputs_give_identical_outcomes() {
        let prices = FuelPrices::new(160.0, 155.9);

        let first = decide(meters(10200.0), meters(10000.0), &prices, &params());
        let second = decide(meters(10200.0), meters(10000.0), &prices, &params());

        assert_eq!(first, second);
    }

    #[test]
    fn costs_attached_even_on_short_circuit() {
        let outcome = decide(
            meters(10200.0),
            meters(10000.0),
            &FuelPrices::new(155.9, 160.0),
            &params(),
        );

        let decision = outcome.decision().unwrap();
        assert_eq!(decision.cheaper_option, StationKey::Path);
        assert!((decision.direct_fuel_cost - 50.0 * 155.9).abs() < 1e-9);
        assert!(decision.detour_fuel_cost > 0.0);
    }
}
