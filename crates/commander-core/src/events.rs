//! Events emitted by the simulation for external observers.
//!
//! These are notifications only — the engine has already applied the
//! corresponding state change by the time an event is visible.

use serde::{Deserialize, Serialize};

use crate::enums::Team;
use crate::types::{BotId, Position, ProjectileId};

/// Everything the simulation reports outward, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A bot fired. The engine has already spawned the projectile.
    ShotFired {
        bot: BotId,
        team: Team,
        origin: Position,
        /// Unit direction vector.
        direction: [f64; 3],
        projectile: ProjectileId,
    },
    /// A bot took damage (the damage-observer callback).
    BotDamaged { bot: BotId, amount: i32 },
    /// A bot's health reached the zero floor; it is out of the fight.
    BotDestroyed { bot: BotId },
    /// A projectile resolved by hitting a bot.
    ProjectileHit { projectile: ProjectileId, target: BotId },
    /// A projectile resolved by running out its lifespan.
    ProjectileExpired { projectile: ProjectileId },
    /// A free-text command relayed to the external interpreter, unparsed.
    CommandRelayed { text: String },
}
