//! Entity spawn factories for setting up the arena.
//!
//! Creates the two team rosters with fixed spawn positions and registers
//! each bot in the registry. Registration order (Red roster, then Blue)
//! is the documented iteration order for first-match scans.

use hecs::World;

use commander_core::components::{Bot, BotBrain, Health};
use commander_core::enums::Team;
use commander_core::types::{BotId, Position, Velocity};

use crate::registry::{BotRegistry, RegistryEntry};

/// Red team spawn positions (their own half: negative X/Z).
const RED_SPAWNS: [(f64, f64, f64); 4] = [
    (-15.0, 1.0, -15.0),
    (-15.0, 1.0, -10.0),
    (-15.0, 1.0, -5.0),
    (-10.0, 1.0, -15.0),
];

/// Blue team spawn positions, mirroring Red.
const BLUE_SPAWNS: [(f64, f64, f64); 4] = [
    (15.0, 1.0, 15.0),
    (15.0, 1.0, 10.0),
    (15.0, 1.0, 5.0),
    (10.0, 1.0, 15.0),
];

/// Set up the initial arena: four bots per team at their fixed spawns.
pub fn setup_arena(world: &mut World, registry: &mut BotRegistry, next_bot_id: &mut u32) {
    for (x, y, z) in RED_SPAWNS {
        spawn_bot(world, registry, next_bot_id, Team::Red, Position::new(x, y, z));
    }
    for (x, y, z) in BLUE_SPAWNS {
        spawn_bot(world, registry, next_bot_id, Team::Blue, Position::new(x, y, z));
    }
}

/// Spawn a single bot at `position` and register its handle.
pub fn spawn_bot(
    world: &mut World,
    registry: &mut BotRegistry,
    next_bot_id: &mut u32,
    team: Team,
    position: Position,
) -> hecs::Entity {
    let id = BotId(*next_bot_id);
    *next_bot_id += 1;

    let entity = world.spawn((
        Bot,
        position,
        Velocity::default(),
        Health::default(),
        BotBrain::new(id, team),
    ));

    registry.register(id, RegistryEntry { team, entity });
    entity
}
