//! Bot movement AI for COMMANDER.
//!
//! Implements the per-bot decision tables: strategy-driven movement
//! phases, formation modifiers, and team-relative advance directions.
//! Pure functions over plain data — no ECS dependency.

pub mod planner;
pub mod profiles;

pub use commander_core as core;
