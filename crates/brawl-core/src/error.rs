//! Error types for the simulation.

use thiserror::Error;

use crate::types::TeamId;

/// Result type alias using [`SimError`].
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised by simulation operations.
///
/// Operations on an id that is not (or no longer) active are not errors;
/// they are no-ops reported through `Option`/`bool` returns.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    /// Every slot in the component store is occupied.
    #[error("entity capacity exhausted: all {capacity} slots are in use")]
    CapacityExhausted { capacity: usize },

    /// Team outside `1..=team_count`.
    #[error("{team} is not one of the {team_count} configured teams")]
    InvalidTeam { team: TeamId, team_count: u8 },

    /// The simulation was torn down.
    #[error("simulation has been disposed")]
    Disposed,

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration validation failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("entity capacity must be between 1 and u32::MAX, got {0}")]
    Capacity(usize),

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must lie in [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },

    #[error("min height {min} exceeds max height {max}")]
    HeightRange { min: f32, max: f32 },

    #[error("initial health must be 1 (binary life state), got {0}")]
    InitialHealth(u8),

    #[error("fall target must be below ground, got {0}")]
    FallTarget(f32),

    #[error("at least one team is required")]
    NoTeams,

    #[error("stats update frequency must be at least one frame")]
    StatsFrequency,

    #[error("max frame delta must be positive, got {0}")]
    MaxDelta(f64),
}

/// Failure reported by a visual loader. Recoverable: the loader's fallback
/// visual is attached instead and the entity keeps simulating.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("failed to load visual for {team}: {reason}")]
pub struct VisualError {
    pub team: TeamId,
    pub reason: String,
}
