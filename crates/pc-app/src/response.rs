//! Response payloads.

use pc_table::{Lookup, Reading};
use serde::{Deserialize, Serialize};

/// Payload reported when a pressure cannot be bracketed.
pub const OUT_OF_RANGE_MESSAGE: &str = "Pressure value out of range";

/// Structured response for one phase-change query.
///
/// Serialises without a tag: either the two specific volumes or `{ "error": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhaseChangeResponse {
    Reading {
        specific_volume_liquid: f64,
        specific_volume_vapor: f64,
    },
    Error {
        error: String,
    },
}

impl PhaseChangeResponse {
    pub fn out_of_range() -> Self {
        Self::Error {
            error: OUT_OF_RANGE_MESSAGE.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl From<Reading> for PhaseChangeResponse {
    fn from(r: Reading) -> Self {
        Self::Reading {
            specific_volume_liquid: r.liquid_volume,
            specific_volume_vapor: r.vapor_volume,
        }
    }
}

impl From<Lookup> for PhaseChangeResponse {
    fn from(lookup: Lookup) -> Self {
        match lookup {
            Lookup::Exact(r) | Lookup::Interpolated(r) => r.into(),
            Lookup::OutOfRange => Self::out_of_range(),
        }
    }
}
