//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! The tick delta is frame-driven and variable.

use hecs::World;

use commander_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
        pos.z += vel.z * dt;
    }
}
