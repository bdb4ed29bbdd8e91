use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The two candidate fuel stops: the station on the direct path, or the
/// station at the detour stopover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StationKey {
    Path,
    Detour,
}

impl Display for StationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StationKey::Path => "path",
                StationKey::Detour => "detour",
            }
        )
    }
}
