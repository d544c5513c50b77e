//! Per-tick simulation systems, run in a fixed order by the engine.

pub mod bot_ai;
pub mod cleanup;
pub mod movement;
pub mod projectile;
pub mod snapshot;
