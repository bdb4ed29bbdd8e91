use parking_lot::RwLock;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::station::StationKey;

/// Per-liter prices at the two candidate stations. A plain value: the
/// engine always works on a snapshot taken at decision time.
///
/// Values are not validated here. Adapters feeding the board (the price
/// update endpoint, CLI arguments) are the validation boundary for
/// zero/negative prices, keeping this type total over f64.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct FuelPrices {
    pub path: f64,
    pub detour: f64,
}

impl FuelPrices {
    pub fn new(path: f64, detour: f64) -> Self {
        FuelPrices { path, detour }
    }

    pub fn get(&self, station: StationKey) -> f64 {
        match station {
            StationKey::Path => self.path,
            StationKey::Detour => self.detour,
        }
    }
}

/// Process-wide price state, written out-of-band by the price-update
/// trigger and read per comparison. The lock guarantees a snapshot never
/// observes a half-written pair.
pub struct PriceBoard {
    prices: RwLock<FuelPrices>,
}

impl PriceBoard {
    pub fn new(initial: FuelPrices) -> Self {
        PriceBoard {
            prices: RwLock::new(initial),
        }
    }

    pub fn snapshot(&self) -> FuelPrices {
        *self.prices.read()
    }

    pub fn set(&self, station: StationKey, price: f64) {
        let mut prices = self.prices.write();
        match station {
            StationKey::Path => prices.path = price,
            StationKey::Detour => prices.detour = price,
        }
    }
}
