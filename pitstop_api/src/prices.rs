use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use pitstop_core::prices::FuelPrices;
use pitstop_core::station::StationKey;
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_prices_handler(State(state): State<Arc<AppState>>) -> Json<FuelPrices> {
    Json(state.price_board.snapshot())
}

#[derive(Deserialize)]
pub struct SetPriceBody {
    station: StationKey,
    price: f64,
}

/// Out-of-band price update trigger (e.g. fired after a price scan). This
/// is the validation boundary for price values: the board itself accepts
/// anything.
pub async fn set_price_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SetPriceBody>,
) -> Result<Json<FuelPrices>, ApiError> {
    if !body.price.is_finite() || body.price <= 0.0 {
        return Err(ApiError::BadRequest(format!(
            "Invalid price for station {}: {}",
            body.station, body.price
        )));
    }

    state.price_board.set(body.station, body.price);
    info!("Price updated: {} = {}", body.station, body.price);

    Ok(Json(state.price_board.snapshot()))
}
