//! Bot AI system — movement, targeting, and fire decisions each tick.
//!
//! Calls the movement planner from commander-bot-ai, runs the detection
//! scan, and produces shoot requests for the engine to spawn at the tick
//! boundary. Decisions are collected in a buffer and applied afterwards
//! to avoid borrow conflicts with hecs.

use hecs::World;

use commander_core::components::{Bot, BotBrain, Health};
use commander_core::constants::*;
use commander_core::enums::{BotAction, Team};
use commander_core::strategy::Strategy;
use commander_core::types::{BotId, Position, Velocity};

use commander_bot_ai::planner::{plan, MoveContext};

use crate::detection::detect;
use crate::registry::BotRegistry;

/// A bot's request to fire, fulfilled by the engine after all systems
/// have run. The projectile is owned by the simulation, not the bot.
#[derive(Debug, Clone)]
pub struct ShootRequest {
    pub bot: BotId,
    pub team: Team,
    pub origin: Position,
    /// Unit direction from the bot's heading at fire time.
    pub direction: [f64; 3],
}

struct BotUpdate {
    entity: hecs::Entity,
    velocity: Velocity,
    heading_degrees: f64,
    action: BotAction,
    attack_cooldown_secs: f64,
    last_shot_secs: f64,
}

/// Run one AI tick for every living bot.
///
/// `strategy` is the live directive for `controlled_team`; the opposing
/// team never sees it and always runs the patrol branch.
pub fn run(
    world: &mut World,
    registry: &BotRegistry,
    strategy: Option<&Strategy>,
    controlled_team: Team,
    elapsed_secs: f64,
    dt: f64,
    shoot_requests: &mut Vec<ShootRequest>,
) {
    let mut updates: Vec<BotUpdate> = Vec::new();

    {
        let mut query = world.query::<(&Bot, &Position, &Velocity, &Health, &BotBrain)>();
        for (entity, (_bot, pos, vel, health, brain)) in query.iter() {
            // Dead bots receive no movement or shoot ticks.
            if health.is_dead() {
                continue;
            }

            let applies = if brain.team == controlled_team {
                strategy.copied()
            } else {
                None
            };

            let movement = plan(&MoveContext {
                team: brain.team,
                strategy: applies,
                elapsed_secs,
            });

            let mut heading_degrees = brain.heading_degrees;
            let mut action = movement.action;
            if movement.is_moving() {
                heading_degrees = movement.move_x.atan2(movement.move_z).to_degrees();
            }

            // Horizontal velocity from the plan; the vertical component
            // is left to the kinematic integrator.
            let velocity = Velocity::new(movement.move_x, vel.y, movement.move_z);

            let mut attack_cooldown_secs = (brain.attack_cooldown_secs - dt).max(0.0);
            let mut last_shot_secs = brain.last_shot_secs;

            if let Some(target) = detect(world, registry, pos, brain.team, DETECTION_RADIUS) {
                // Turn to face the target whether or not we can fire.
                heading_degrees = pos.bearing_degrees_to(&target.position);

                let since_last_shot = elapsed_secs - last_shot_secs;
                if attack_cooldown_secs <= 0.0 && since_last_shot >= SHOT_INTERVAL_SECS {
                    let heading = heading_degrees.to_radians();
                    shoot_requests.push(ShootRequest {
                        bot: brain.id,
                        team: brain.team,
                        origin: Position::new(pos.x, pos.y + MUZZLE_HEIGHT, pos.z),
                        direction: [heading.sin(), 0.0, heading.cos()],
                    });
                    attack_cooldown_secs = ATTACK_COOLDOWN_SECS;
                    last_shot_secs = elapsed_secs;
                    action = BotAction::Attacking;
                    log::debug!(
                        "{} firing at {} (distance {:.2})",
                        brain.id,
                        target.id,
                        target.distance
                    );
                }
            }

            updates.push(BotUpdate {
                entity,
                velocity,
                heading_degrees,
                action,
                attack_cooldown_secs,
                last_shot_secs,
            });
        }
    }

    for update in updates {
        if let Ok(mut vel) = world.get::<&mut Velocity>(update.entity) {
            *vel = update.velocity;
        }
        if let Ok(mut brain) = world.get::<&mut BotBrain>(update.entity) {
            brain.heading_degrees = update.heading_degrees;
            brain.action = update.action;
            brain.attack_cooldown_secs = update.attack_cooldown_secs;
            brain.last_shot_secs = update.last_shot_secs;
        }
    }
}
