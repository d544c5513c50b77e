//! Simulation engine for COMMANDER.
//!
//! Owns the hecs ECS world and the bot registry, runs systems once per
//! externally-driven tick, and produces `ArenaSnapshot`s for the
//! frontend. Completely headless, enabling deterministic testing.

pub mod detection;
pub mod engine;
pub mod registry;
pub mod systems;
pub mod world_setup;

pub use commander_core as core;
pub use engine::ArenaEngine;
