use geo_types::Point;
use pitstop_core::decision::ComparisonParams;
use pitstop_core::prices::PriceBoard;
use pitstop_providers::route_client::RoutePlanClient;
use pitstop_providers::route_provider::RouteProvider;

pub struct AppState {
    pub route_client: RoutePlanClient,
    pub price_board: PriceBoard,
    /// Configured detour waypoint; never taken from the request.
    pub stopover: Point,
    pub provider: RouteProvider,
    pub params: ComparisonParams,
}
