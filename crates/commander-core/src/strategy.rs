//! Strategy model and wire-payload ingestion.
//!
//! The strategy feed delivers JSON objects shaped like
//! `{"formation": "spread", "target": "enemies", "aggression": 0.8}`.
//! A payload missing any field is discarded wholesale; there is no
//! partial application. Unrecognized formation/target strings map to the
//! neutral variants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{AGGRESSION_MAX, AGGRESSION_MIN};
use crate::enums::{Formation, TargetDirective};

/// The authoritative directive for the controlled team. Replaced
/// wholesale on each accepted update, read-only for every bot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub formation: Formation,
    pub target: TargetDirective,
    /// 0.0 (cautious) ..= 1.0 (maximum aggression).
    pub aggression: f64,
}

/// Raw wire shape of a strategy update. All three fields are required;
/// serde rejects payloads missing any of them.
#[derive(Debug, Clone, Deserialize)]
pub struct StrategyPayload {
    pub formation: String,
    pub target: String,
    pub aggression: f64,
}

/// Rejection reasons for an inbound strategy payload.
#[derive(Debug, Error)]
pub enum StrategyError {
    /// Not valid JSON, or missing a required field.
    #[error("malformed strategy payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parse a raw feed line into a `Strategy`.
///
/// Returns `Err` for anything that is not a complete payload; the caller
/// discards it and keeps the current strategy untouched.
pub fn parse_payload(raw: &str) -> Result<Strategy, StrategyError> {
    let payload: StrategyPayload = serde_json::from_str(raw)?;
    Ok(Strategy::from(payload))
}

impl From<StrategyPayload> for Strategy {
    fn from(payload: StrategyPayload) -> Self {
        // FromStr for these enums is infallible: unknown strings fall
        // back to Default / None.
        let formation = payload.formation.parse().unwrap_or_default();
        let target = payload.target.parse().unwrap_or_default();
        Strategy {
            formation,
            target,
            aggression: payload.aggression.clamp(AGGRESSION_MIN, AGGRESSION_MAX),
        }
    }
}
