//! Arena engine — the core of the simulation.
//!
//! `ArenaEngine` owns the hecs ECS world and the bot registry, processes
//! queued channel commands at tick boundaries, runs all systems in a
//! fixed order, and produces `ArenaSnapshot`s. All agent logic executes
//! serially within the tick; nothing suspends mid-tick.

use std::collections::VecDeque;

use hecs::World;

use commander_core::commands::ArenaCommand;
use commander_core::components::{Projectile, ProjectileState};
use commander_core::constants::PROJECTILE_LIFESPAN_SECS;
use commander_core::enums::Team;
use commander_core::events::SimEvent;
use commander_core::state::ArenaSnapshot;
use commander_core::strategy::{self, Strategy};
use commander_core::types::{ProjectileId, SimTime, Velocity};

use crate::registry::BotRegistry;
use crate::systems;
use crate::systems::bot_ai::ShootRequest;
use crate::world_setup;

/// Configuration for starting a new arena.
pub struct SimConfig {
    /// The team that consumes the live strategy feed. The opposing team
    /// always runs autonomous patrol.
    pub controlled_team: Team,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            controlled_team: Team::Red,
        }
    }
}

/// The simulation engine. Owns the ECS world, the registry, and all
/// cross-tick state.
pub struct ArenaEngine {
    world: World,
    registry: BotRegistry,
    time: SimTime,
    controlled_team: Team,
    strategy: Option<Strategy>,
    command_queue: VecDeque<ArenaCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
    pending_shots: Vec<ShootRequest>,
    next_projectile_id: u32,
    next_bot_id: u32,
}

impl ArenaEngine {
    /// Create a new engine with the standard 4v4 roster already spawned
    /// and registered.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let mut registry = BotRegistry::new();
        let mut next_bot_id = 0;
        world_setup::setup_arena(&mut world, &mut registry, &mut next_bot_id);

        Self {
            world,
            registry,
            time: SimTime::default(),
            controlled_team: config.controlled_team,
            strategy: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            pending_shots: Vec::new(),
            next_projectile_id: 0,
            next_bot_id,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: ArenaCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick of `dt` seconds and return the
    /// resulting snapshot.
    pub fn tick(&mut self, dt: f64) -> ArenaSnapshot {
        self.process_commands();
        self.run_systems(dt);
        self.time.advance(dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.strategy, events)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the strategy currently in force for the controlled team.
    pub fn strategy(&self) -> Option<Strategy> {
        self.strategy
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the bot registry.
    pub fn registry(&self) -> &BotRegistry {
        &self.registry
    }

    /// Create an engine with no roster (for tests that stage their own).
    #[cfg(test)]
    pub fn new_empty(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            registry: BotRegistry::new(),
            time: SimTime::default(),
            controlled_team: config.controlled_team,
            strategy: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            pending_shots: Vec::new(),
            next_projectile_id: 0,
            next_bot_id: 0,
        }
    }

    /// Spawn an additional bot at an arbitrary position (for tests).
    #[cfg(test)]
    pub fn spawn_test_bot(
        &mut self,
        team: Team,
        position: commander_core::types::Position,
    ) -> commander_core::types::BotId {
        let id = commander_core::types::BotId(self.next_bot_id);
        world_setup::spawn_bot(
            &mut self.world,
            &mut self.registry,
            &mut self.next_bot_id,
            team,
            position,
        );
        id
    }

    /// Get a mutable reference to the ECS world (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single channel command.
    fn handle_command(&mut self, command: ArenaCommand) {
        match command {
            ArenaCommand::UpdateStrategy { payload } => match strategy::parse_payload(&payload) {
                Ok(strategy) => {
                    log::info!("strategy updated: {strategy:?}");
                    self.strategy = Some(strategy);
                }
                Err(err) => {
                    // Discarded wholesale; the current strategy stays in
                    // force with no partial application.
                    log::warn!("discarding strategy payload: {err}");
                }
            },
            ArenaCommand::ClearStrategy => {
                self.strategy = None;
            }
            ArenaCommand::IssueCommand { text } => {
                log::info!("relaying command: {text}");
                self.events.push(SimEvent::CommandRelayed { text });
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Bot AI: movement, targeting, fire decisions.
        systems::bot_ai::run(
            &mut self.world,
            &self.registry,
            self.strategy.as_ref(),
            self.controlled_team,
            self.time.elapsed_secs,
            dt,
            &mut self.pending_shots,
        );
        // 2. Projectiles: velocity init, lifespan, hit resolution.
        systems::projectile::run(
            &mut self.world,
            &self.registry,
            dt,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 3. Kinematic integration.
        systems::movement::run(&mut self.world, dt);
        // 4. Cleanup: dead bots leave the world and the registry.
        systems::cleanup::run(&mut self.world, &mut self.registry, &mut self.despawn_buffer);
        // 5. Spawn this tick's shots. New projectiles take their first
        //    tick (and their one-shot velocity init) next frame.
        self.spawn_pending_shots();
    }

    /// Turn this tick's shoot requests into projectile entities.
    fn spawn_pending_shots(&mut self) {
        for request in self.pending_shots.drain(..) {
            let id = ProjectileId(self.next_projectile_id);
            self.next_projectile_id += 1;

            self.world.spawn((
                Projectile,
                request.origin,
                Velocity::default(),
                ProjectileState {
                    id,
                    team: request.team,
                    direction: request.direction,
                    lifespan_secs: PROJECTILE_LIFESPAN_SECS,
                    initialized: false,
                },
            ));

            log::debug!("{} spawned by {}", id, request.bot);
            self.events.push(SimEvent::ShotFired {
                bot: request.bot,
                team: request.team,
                origin: request.origin,
                direction: request.direction,
                projectile: id,
            });
        }
    }
}
