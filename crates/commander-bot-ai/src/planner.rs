//! Per-tick movement planning.
//!
//! `plan` is the bot's decision function for the movement half of its
//! tick: given the team, the live strategy (if any applies), and the
//! accumulated elapsed time, it produces a horizontal movement vector
//! and the action label the bot reports. Detection and shooting are
//! handled separately by the simulation systems.

use commander_core::constants::*;
use commander_core::enums::{BotAction, Formation, TargetDirective, Team};
use commander_core::strategy::Strategy;

use crate::profiles::directive_profile;

/// Input to the movement planner for a single bot.
pub struct MoveContext {
    pub team: Team,
    /// The strategy this bot's team follows; `None` for the uncontrolled
    /// team and before the first accepted update.
    pub strategy: Option<Strategy>,
    pub elapsed_secs: f64,
}

/// Output of the movement planner: horizontal velocity intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovePlan {
    pub move_x: f64,
    pub move_z: f64,
    pub action: BotAction,
}

impl MovePlan {
    pub fn is_moving(&self) -> bool {
        self.move_x != 0.0 || self.move_z != 0.0
    }
}

/// Compute this tick's movement for one bot.
pub fn plan(ctx: &MoveContext) -> MovePlan {
    let base_speed = match &ctx.strategy {
        Some(strategy) => AGGRESSION_SPEED_BASE + strategy.aggression * AGGRESSION_SPEED_SCALE,
        None => DEFAULT_BASE_SPEED,
    };

    let target = ctx
        .strategy
        .as_ref()
        .map(|s| s.target)
        .unwrap_or(TargetDirective::None);

    let mut plan = match target {
        TargetDirective::Enemies => plan_attack(ctx, base_speed),
        TargetDirective::Base => plan_defend(ctx, base_speed),
        TargetDirective::None => plan_patrol(ctx, base_speed),
    };

    if let Some(strategy) = &ctx.strategy {
        apply_formation(&mut plan, strategy.formation);
    }

    plan
}

/// Enemies directive: push into the opposing half, with a flanking phase.
fn plan_attack(ctx: &MoveContext, base_speed: f64) -> MovePlan {
    let sign = ctx.team.advance_sign();
    let profile = directive_profile(TargetDirective::Enemies);

    match profile.phase_at(ctx.elapsed_secs) {
        0 => MovePlan {
            move_x: 0.0,
            move_z: sign * base_speed,
            action: BotAction::AttackForward,
        },
        1 => MovePlan {
            move_x: sign * base_speed,
            move_z: 0.0,
            action: BotAction::AttackFlank,
        },
        _ => MovePlan {
            move_x: 0.0,
            move_z: sign * base_speed * ADVANCE_SPEED_FACTOR,
            action: BotAction::AttackAdvance,
        },
    }
}

/// Base directive: small sinusoidal patrol near spawn, with a hold phase.
fn plan_defend(ctx: &MoveContext, base_speed: f64) -> MovePlan {
    let profile = directive_profile(TargetDirective::Base);
    let amplitude = base_speed * DEFEND_SPEED_FACTOR;

    match profile.phase_at(ctx.elapsed_secs) {
        0 => MovePlan {
            move_x: ctx.elapsed_secs.sin() * amplitude,
            move_z: 0.0,
            action: BotAction::DefendPatrol,
        },
        1 => MovePlan {
            move_x: 0.0,
            move_z: ctx.elapsed_secs.cos() * amplitude,
            action: BotAction::DefendWatch,
        },
        _ => MovePlan {
            move_x: 0.0,
            move_z: 0.0,
            action: BotAction::DefendHold,
        },
    }
}

/// No directive: cycle the four cardinal patrol directions. Not
/// team-relative.
fn plan_patrol(ctx: &MoveContext, base_speed: f64) -> MovePlan {
    let speed = base_speed * PATROL_SPEED_FACTOR;
    let profile = directive_profile(TargetDirective::None);

    match profile.phase_at(ctx.elapsed_secs) {
        0 => MovePlan {
            move_x: 0.0,
            move_z: -speed,
            action: BotAction::PatrolForward,
        },
        1 => MovePlan {
            move_x: speed,
            move_z: 0.0,
            action: BotAction::PatrolRight,
        },
        2 => MovePlan {
            move_x: 0.0,
            move_z: speed,
            action: BotAction::PatrolBack,
        },
        _ => MovePlan {
            move_x: -speed,
            move_z: 0.0,
            action: BotAction::PatrolLeft,
        },
    }
}

/// Formation modifier, applied after the phase tables.
fn apply_formation(plan: &mut MovePlan, formation: Formation) {
    match formation {
        Formation::Spread => {
            plan.move_x *= SPREAD_SCALE;
            plan.move_z *= SPREAD_SCALE;
        }
        Formation::Line => {
            plan.move_z *= LINE_FORWARD_SCALE;
        }
        Formation::Default => {}
    }
}
