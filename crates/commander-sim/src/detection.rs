//! Enemy detection — the radius scan bots run every tick.

use hecs::World;

use commander_core::enums::Team;
use commander_core::types::{BotId, Position};

use crate::registry::BotRegistry;

/// A detected enemy within shooting range. Carries the target's id and
/// location only; damage is routed later through the registry entry.
#[derive(Debug, Clone, Copy)]
pub struct Detection {
    pub id: BotId,
    pub position: Position,
    pub distance: f64,
}

/// Scan the registry for an enemy of `self_team` within `radius` of
/// `self_pos`.
///
/// Returns the first qualifying entry in registration order, not the
/// nearest. Same-team entries are skipped, and an entry whose entity no longer
/// has a position (despawned earlier this tick) is skipped rather than
/// treated as an error.
pub fn detect(
    world: &World,
    registry: &BotRegistry,
    self_pos: &Position,
    self_team: Team,
    radius: f64,
) -> Option<Detection> {
    for (id, entry) in registry.iter() {
        if entry.team == self_team {
            continue;
        }

        let position = match world.get::<&Position>(entry.entity) {
            Ok(pos) => *pos,
            Err(_) => continue,
        };

        let distance = self_pos.distance_to(&position);
        if distance < radius {
            return Some(Detection {
                id,
                position,
                distance,
            });
        }
    }

    None
}
