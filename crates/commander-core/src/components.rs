//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic beyond small
//! invariant-preserving mutators. Behavior lives in systems.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_HEALTH;
use crate::enums::{BotAction, Team};
use crate::types::{BotId, ProjectileId};

/// Marks an entity as a combat bot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bot;

/// Marks an entity as a projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Bot hit points. Invariant: 0 <= current <= MAX_HEALTH, and a bot at 0
/// never recovers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
}

impl Default for Health {
    fn default() -> Self {
        Self {
            current: MAX_HEALTH,
        }
    }
}

impl Health {
    /// Apply damage, clamping at the zero floor.
    pub fn apply_damage(&mut self, amount: i32) {
        self.current = (self.current - amount).max(0);
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

/// Per-bot decision state: identity, heading, and firing timers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotBrain {
    pub id: BotId,
    pub team: Team,
    pub action: BotAction,
    /// Facing direction in degrees; 0 = +Z, positive toward +X.
    pub heading_degrees: f64,
    /// Remaining attack cooldown (seconds, floored at 0).
    pub attack_cooldown_secs: f64,
    /// Elapsed-time stamp of this bot's last shot (seconds). Starts at
    /// 0, so the shot-interval gate holds fire until the clock has run
    /// for one full interval.
    pub last_shot_secs: f64,
}

impl BotBrain {
    pub fn new(id: BotId, team: Team) -> Self {
        Self {
            id,
            team,
            action: BotAction::Idle,
            heading_degrees: 0.0,
            attack_cooldown_secs: 0.0,
            last_shot_secs: 0.0,
        }
    }
}

/// Projectile lifecycle state. Velocity is initialized from `direction`
/// exactly once, on the projectile's first tick after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileState {
    pub id: ProjectileId,
    pub team: Team,
    /// Unit launch direction.
    pub direction: [f64; 3],
    /// Remaining lifespan (seconds).
    pub lifespan_secs: f64,
    /// Whether the one-shot velocity initialization has run.
    pub initialized: bool,
}
