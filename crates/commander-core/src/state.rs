//! Arena snapshot — the complete visible state emitted after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{BotAction, Team};
use crate::events::SimEvent;
use crate::strategy::Strategy;
use crate::types::{BotId, Position, ProjectileId, SimTime};

/// Complete arena state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub time: SimTime,
    /// The live strategy the controlled team is following, if any.
    pub strategy: Option<Strategy>,
    pub bots: Vec<BotView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events produced during this tick, in emission order.
    pub events: Vec<SimEvent>,
}

/// One bot as rendered: body, health bar, action light.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotView {
    pub id: BotId,
    pub team: Team,
    pub position: Position,
    pub health: i32,
    pub action: BotAction,
    /// Facing in degrees; 0 = +Z, positive toward +X.
    pub heading_degrees: f64,
}

/// One in-flight projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub team: Team,
    pub position: Position,
    pub lifespan_secs: f64,
}
