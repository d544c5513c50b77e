//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Team affiliation. Red is the externally-commanded team; Blue runs
/// autonomous patrol behavior only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    /// The opposing team.
    pub fn opposing(&self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    /// Sign of this team's advance direction along the forward (Z) and
    /// lateral (X) axes. Red spawns at negative coordinates and pushes
    /// positive; Blue mirrors it.
    pub fn advance_sign(&self) -> f64 {
        match self {
            Team::Red => 1.0,
            Team::Blue => -1.0,
        }
    }
}

/// What a bot is currently doing, as reported in snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotAction {
    #[default]
    Idle,
    AttackForward,
    AttackFlank,
    AttackAdvance,
    DefendPatrol,
    DefendWatch,
    DefendHold,
    PatrolForward,
    PatrolRight,
    PatrolBack,
    PatrolLeft,
    /// Set on the tick a bot successfully fires.
    Attacking,
}

/// Formation directive from the strategy feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formation {
    #[default]
    Default,
    /// Both movement axes scaled 1.5x.
    Spread,
    /// Forward axis scaled 0.5x.
    Line,
}

/// Target directive from the strategy feed. Selects the movement table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetDirective {
    /// Push into the opposing half.
    Enemies,
    /// Hold near spawn with a small sinusoidal patrol.
    Base,
    /// No directive — cardinal patrol cycle.
    #[default]
    None,
}

impl std::str::FromStr for Formation {
    type Err = std::convert::Infallible;

    /// Unrecognized formation strings fall back to `Default`, matching the
    /// permissive handling of the strategy feed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "spread" => Formation::Spread,
            "line" => Formation::Line,
            _ => Formation::Default,
        })
    }
}

impl std::str::FromStr for TargetDirective {
    type Err = std::convert::Infallible;

    /// Unrecognized target strings fall back to `None`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "enemies" => TargetDirective::Enemies,
            "base" => TargetDirective::Base,
            _ => TargetDirective::None,
        })
    }
}
