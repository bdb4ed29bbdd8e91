use clap::Args;
use comfy_table::Table;
use geo_types::Point;
use pitstop_core::decision::{ComparisonOutcome, ComparisonParams};
use pitstop_core::planner::compare_routes;
use pitstop_core::prices::FuelPrices;
use pitstop_providers::route_client::RoutePlanClient;
use pitstop_providers::route_provider::RouteProvider;
use pitstop_providers::route_query::RouteQuery;

use crate::parsers;

const CROW_FLIES_ROAD_FACTOR: f64 = 1.3;

#[derive(Args)]
pub struct CompareArgs {
    /// Origin as "lng,lat" or a place id
    origin: String,

    /// Destination as "lng,lat" or a place id
    destination: String,

    /// Detour stopover waypoint as "lng,lat"
    #[arg(short, long, value_parser = parsers::parse_point)]
    stopover: Point,

    /// Price per liter at the on-path station
    #[arg(long, value_parser = parsers::parse_price)]
    path_price: f64,

    /// Price per liter at the detour station
    #[arg(long, value_parser = parsers::parse_price)]
    detour_price: f64,

    /// Estimate distances offline from haversine legs instead of calling
    /// the routing provider
    #[arg(long)]
    crow_flies: bool,
}

pub async fn run(args: CompareArgs) -> anyhow::Result<()> {
    let query = RouteQuery {
        origin: parsers::place_reference(&args.origin),
        destination: parsers::place_reference(&args.destination),
        stopover: Some(args.stopover),
    };

    let provider = if args.crow_flies {
        RouteProvider::AsTheCrowFlies {
            road_factor: CROW_FLIES_ROAD_FACTOR,
        }
    } else {
        RouteProvider::GoogleRoutesApi
    };

    let prices = FuelPrices::new(args.path_price, args.detour_price);
    let client = RoutePlanClient::default();

    let comparison = compare_routes(
        &client,
        &query,
        &provider,
        prices,
        &ComparisonParams::default(),
    )
    .await?;

    let mut table = Table::new();
    table.set_header(vec!["", "Direct", "Via stopover"]);
    table.add_row(vec![
        String::from("Distance (m)"),
        format_distance(comparison.route_without_stopover.distance_meters),
        format_distance(comparison.route_with_stopover.distance_meters),
    ]);

    match comparison.outcome {
        ComparisonOutcome::Decided(decision) => {
            table.add_row(vec![
                String::from("Fill-up cost"),
                format!("{:.2}", decision.direct_fuel_cost),
                format!("{:.2}", decision.detour_fuel_cost),
            ]);

            println!("{table}");
            println!(
                "Extra detour distance: {:.0} m",
                decision.detour_extra_distance.value()
            );
            println!("Cheaper option: {}", decision.cheaper_option);
        }
        ComparisonOutcome::Unavailable => {
            println!("{table}");
            println!("Comparison unavailable: at least one route could not be resolved");
        }
    }

    Ok(())
}

fn format_distance(distance: Option<f64>) -> String {
    match distance {
        Some(distance) => format!("{distance:.0}"),
        None => String::from("no route"),
    }
}
