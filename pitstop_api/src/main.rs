mod error;
mod prices;
mod request_routes;
mod state;

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use axum::serve;
use geo_types::Point;
use pitstop_core::decision::ComparisonParams;
use pitstop_core::prices::{FuelPrices, PriceBoard};
use pitstop_providers::route_client::RoutePlanClient;
use pitstop_providers::route_provider::RouteProvider;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};

use crate::state::AppState;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let stopover_var =
        std::env::var("PITSTOP_STOPOVER").expect("PITSTOP_STOPOVER must be set (\"lng,lat\")");
    let stopover =
        parse_stopover(&stopover_var).expect("PITSTOP_STOPOVER must be formatted as \"lng,lat\"");

    let initial_prices = FuelPrices::new(
        env_price("PITSTOP_PRICE_PATH", 155.9),
        env_price("PITSTOP_PRICE_DETOUR", 160.0),
    );

    let state = Arc::new(AppState {
        route_client: RoutePlanClient::default(),
        price_board: PriceBoard::new(initial_prices),
        stopover,
        provider: RouteProvider::GoogleRoutesApi,
        params: ComparisonParams::default(),
    });

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route(
            "/request-routes",
            post(request_routes::request_routes_handler),
        )
        .route(
            "/prices",
            get(prices::get_prices_handler).post(prices::set_price_handler),
        )
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080")
        .await
        .unwrap();

    info!("Listening on 127.0.0.1:8080");

    serve(listener, app).await.unwrap();
}

fn parse_stopover(value: &str) -> Option<Point> {
    let (lng, lat) = value.split_once(',')?;

    let lng: f64 = lng.trim().parse().ok()?;
    let lat: f64 = lat.trim().parse().ok()?;

    Some(Point::new(lng, lat))
}

fn env_price(var: &str, default: f64) -> f64 {
    std::env::var(var)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
