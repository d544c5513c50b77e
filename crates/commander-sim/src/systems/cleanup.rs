//! Cleanup system: removes bots whose health reached the zero floor.
//!
//! Removal happens on the tick that determines the terminal condition;
//! a dead bot leaves the registry and the world together, so later scans
//! simply see no position for it. Resolved projectiles are despawned by
//! the projectile system itself.

use hecs::{Entity, World};

use commander_core::components::{Bot, BotBrain, Health};
use commander_core::types::BotId;

use crate::registry::BotRegistry;

/// Remove dead bots from the world and the registry.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, registry: &mut BotRegistry, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    let mut dead_ids: Vec<BotId> = Vec::new();

    for (entity, (_bot, health, brain)) in world.query_mut::<(&Bot, &Health, &BotBrain)>() {
        if health.is_dead() {
            despawn_buffer.push(entity);
            dead_ids.push(brain.id);
        }
    }

    for id in dead_ids {
        registry.unregister(id);
        log::debug!("{} destroyed, removed from registry", id);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
