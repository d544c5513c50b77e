//! Snapshot system: queries the ECS world and builds a complete
//! ArenaSnapshot. Read-only — never modifies the world.

use hecs::World;

use commander_core::components::{Bot, BotBrain, Health, Projectile, ProjectileState};
use commander_core::events::SimEvent;
use commander_core::state::{ArenaSnapshot, BotView, ProjectileView};
use commander_core::strategy::Strategy;
use commander_core::types::{Position, SimTime};

/// Build a complete ArenaSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    strategy: Option<Strategy>,
    events: Vec<SimEvent>,
) -> ArenaSnapshot {
    ArenaSnapshot {
        time: *time,
        strategy,
        bots: build_bots(world),
        projectiles: build_projectiles(world),
        events,
    }
}

fn build_bots(world: &World) -> Vec<BotView> {
    let mut bots: Vec<BotView> = world
        .query::<(&Bot, &Position, &Health, &BotBrain)>()
        .iter()
        .map(|(_, (_, pos, health, brain))| BotView {
            id: brain.id,
            team: brain.team,
            position: *pos,
            health: health.current,
            action: brain.action,
            heading_degrees: brain.heading_degrees,
        })
        .collect();

    bots.sort_by_key(|b| b.id);
    bots
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &ProjectileState)>()
        .iter()
        .map(|(_, (_, pos, state))| ProjectileView {
            id: state.id,
            team: state.team,
            position: *pos,
            lifespan_secs: state.lifespan_secs,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
