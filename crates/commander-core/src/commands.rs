//! Commands sent from the channel glue to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, so an
//! update arriving mid-frame is observed with at most one tick of
//! staleness.

use serde::{Deserialize, Serialize};

/// All inbound actions the engine accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArenaCommand {
    /// Raw strategy feed text. Parsed at the tick boundary; malformed or
    /// partial payloads are discarded without touching the current
    /// strategy.
    UpdateStrategy { payload: String },
    /// Drop the current strategy; the controlled team reverts to patrol.
    ClearStrategy,
    /// Free-text command for the external interpreter. The core never
    /// parses it, only relays it as a `CommandRelayed` event.
    IssueCommand { text: String },
}
