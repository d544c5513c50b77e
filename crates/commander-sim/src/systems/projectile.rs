//! Projectile system — one-shot velocity init, lifespan, hit resolution.
//!
//! Lifecycle: Created -> Active -> {Hit | Expired} -> Removed. A hit and
//! an expiry on the same tick resolve as a hit. Resolution is terminal:
//! one projectile damages at most one bot, chosen by registry
//! registration order.

use glam::DVec3;
use hecs::{Entity, World};

use commander_core::components::{Health, ProjectileState};
use commander_core::constants::*;
use commander_core::events::SimEvent;
use commander_core::types::{BotId, Position, ProjectileId, Velocity};

use crate::registry::BotRegistry;

struct HitRecord {
    projectile_entity: Entity,
    projectile: ProjectileId,
    target_entity: Entity,
    target: BotId,
}

/// Run the projectile system for one tick.
pub fn run(
    world: &mut World,
    registry: &BotRegistry,
    dt: f64,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut hits: Vec<HitRecord> = Vec::new();

    {
        let mut query = world.query::<(&mut ProjectileState, &mut Velocity, &Position)>();
        for (entity, (state, vel, pos)) in query.iter() {
            // Velocity is initialized exactly once, on the first tick
            // after creation, and never re-initialized.
            if !state.initialized {
                let v = DVec3::from(state.direction).normalize_or_zero() * PROJECTILE_SPEED;
                *vel = Velocity::new(v.x, v.y, v.z);
                state.initialized = true;
                log::debug!("{} velocity set: {:?}", state.id, state.direction);
            }

            state.lifespan_secs -= dt;

            // First opposite-team bot inside the hit radius takes the
            // damage; missing positions mean the bot despawned earlier
            // this tick and are skipped.
            let mut resolved = false;
            for (id, entry) in registry.iter() {
                if entry.team == state.team {
                    continue;
                }
                let target_pos = match world.get::<&Position>(entry.entity) {
                    Ok(p) => *p,
                    Err(_) => continue,
                };
                if pos.distance_to(&target_pos) < PROJECTILE_HIT_RADIUS {
                    hits.push(HitRecord {
                        projectile_entity: entity,
                        projectile: state.id,
                        target_entity: entry.entity,
                        target: id,
                    });
                    resolved = true;
                    break;
                }
            }
            if resolved {
                continue;
            }

            if state.lifespan_secs <= 0.0 {
                events.push(SimEvent::ProjectileExpired {
                    projectile: state.id,
                });
                despawn_buffer.push(entity);
                log::debug!("{} expired", state.id);
            }
        }
    }

    for hit in hits {
        let destroyed = match world.get::<&mut Health>(hit.target_entity) {
            Ok(mut health) => {
                let was_alive = !health.is_dead();
                health.apply_damage(PROJECTILE_DAMAGE);
                was_alive && health.is_dead()
            }
            // Target lost its health component; the hit still resolves
            // the projectile.
            Err(_) => false,
        };

        events.push(SimEvent::BotDamaged {
            bot: hit.target,
            amount: PROJECTILE_DAMAGE,
        });
        if destroyed {
            events.push(SimEvent::BotDestroyed { bot: hit.target });
        }
        events.push(SimEvent::ProjectileHit {
            projectile: hit.projectile,
            target: hit.target,
        });
        despawn_buffer.push(hit.projectile_entity);
        log::debug!("{} hit {}", hit.projectile, hit.target);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
