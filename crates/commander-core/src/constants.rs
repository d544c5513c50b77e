//! Simulation constants and tuning parameters.

/// Nominal tick rate for the wall-clock runner (Hz). The engine itself
/// accepts a variable per-tick delta.
pub const TICK_RATE: u32 = 30;

// --- Bots ---

/// Health a bot spawns with, and the ceiling it can never exceed.
pub const MAX_HEALTH: i32 = 100;

/// Base speed when no strategy applies to the bot's team (units/s).
pub const DEFAULT_BASE_SPEED: f64 = 3.0;

/// Base-speed formula under a live strategy: BASE + aggression * SCALE.
pub const AGGRESSION_SPEED_BASE: f64 = 2.0;
pub const AGGRESSION_SPEED_SCALE: f64 = 3.0;

/// Shooting range — detection radius for the enemy scan (units).
pub const DETECTION_RADIUS: f64 = 15.0;

/// Cooldown applied after a successful shot (seconds).
pub const ATTACK_COOLDOWN_SECS: f64 = 1.5;

/// Minimum spacing between one bot's shots (seconds).
pub const SHOT_INTERVAL_SECS: f64 = 1.5;

/// Vertical muzzle offset above the bot's position (units).
pub const MUZZLE_HEIGHT: f64 = 0.5;

// --- Movement tables ---

/// Enemies directive: phase switch rate (Hz) and phase count.
pub const ATTACK_PHASE_RATE: f64 = 0.5;
pub const ATTACK_PHASE_COUNT: u64 = 4;

/// Base directive: phase switch rate (Hz) and phase count.
pub const DEFEND_PHASE_RATE: f64 = 0.3;
pub const DEFEND_PHASE_COUNT: u64 = 3;

/// No directive: phase switch rate (Hz) and phase count.
pub const PATROL_PHASE_RATE: f64 = 0.5;
pub const PATROL_PHASE_COUNT: u64 = 4;

/// Speed factor for the attack-advance phase.
pub const ADVANCE_SPEED_FACTOR: f64 = 0.5;

/// Amplitude factor for the defensive sinusoidal patrol.
pub const DEFEND_SPEED_FACTOR: f64 = 0.5;

/// Speed factor for the cardinal patrol cycle.
pub const PATROL_SPEED_FACTOR: f64 = 0.7;

/// Spread formation: both axes scaled by this factor.
pub const SPREAD_SCALE: f64 = 1.5;

/// Line formation: forward axis scaled by this factor.
pub const LINE_FORWARD_SCALE: f64 = 0.5;

// --- Projectiles ---

/// Projectile speed (units/s).
pub const PROJECTILE_SPEED: f64 = 25.0;

/// Projectile lifespan from spawn to expiry (seconds).
pub const PROJECTILE_LIFESPAN_SECS: f64 = 5.0;

/// Distance below which a projectile registers a hit (units).
pub const PROJECTILE_HIT_RADIUS: f64 = 1.0;

/// Damage dealt by one projectile hit.
pub const PROJECTILE_DAMAGE: i32 = 15;

// --- Strategy ---

/// Aggression is clamped into this range on ingest.
pub const AGGRESSION_MIN: f64 = 0.0;
pub const AGGRESSION_MAX: f64 = 1.0;
