//! Directive-specific movement profiles.
//!
//! Each target directive quantizes elapsed time into a repeating cycle of
//! movement phases: `phase = floor(elapsed * rate) % count`. Tying the
//! phase to elapsed time (rather than wall-clock polling) keeps bot
//! behavior deterministic and testable.

use commander_core::constants::*;
use commander_core::enums::TargetDirective;

/// Phase parameters for one target directive.
pub struct MovementProfile {
    /// Phase switch rate (Hz).
    pub phase_rate: f64,
    /// Number of phases in the cycle.
    pub phase_count: u64,
}

/// Get the movement profile for a directive. Bots without a live
/// strategy use the `None` profile.
pub fn directive_profile(target: TargetDirective) -> MovementProfile {
    match target {
        TargetDirective::Enemies => MovementProfile {
            phase_rate: ATTACK_PHASE_RATE,
            phase_count: ATTACK_PHASE_COUNT,
        },
        TargetDirective::Base => MovementProfile {
            phase_rate: DEFEND_PHASE_RATE,
            phase_count: DEFEND_PHASE_COUNT,
        },
        TargetDirective::None => MovementProfile {
            phase_rate: PATROL_PHASE_RATE,
            phase_count: PATROL_PHASE_COUNT,
        },
    }
}

impl MovementProfile {
    /// Current phase index at the given elapsed time.
    pub fn phase_at(&self, elapsed_secs: f64) -> u64 {
        let raw = (elapsed_secs * self.phase_rate).floor();
        if raw <= 0.0 {
            return 0;
        }
        raw as u64 % self.phase_count
    }
}
