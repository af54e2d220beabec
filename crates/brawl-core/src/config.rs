//! Simulation configuration.
//!
//! Every tunable the simulation consumes lives here so a host can supply it
//! from JSON. Missing fields fall back to [`crate::constants`].

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Complete configuration for one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. Same seed and same inputs give the same simulation.
    pub seed: u64,
    pub world: WorldConfig,
    pub movement: MovementConfig,
    pub combat: CombatConfig,
    pub teams: TeamConfig,
    pub stats: StatsConfig,
    pub time: TimeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub max_entities: usize,
    /// Full width of the spawn area on x and z.
    pub bounds: f32,
    pub min_height: f32,
    pub max_height: f32,
    /// Size of the opening population spawned by `populate_initial`.
    pub initial_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub ease: f32,
    pub retarget_probability: f32,
    pub retarget_distance_threshold: f32,
    pub wander_extent: f32,
    pub wander_height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub collision_distance: f32,
    pub initial_health: u8,
    pub fall_target_y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamConfig {
    pub count: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Frames between tallies.
    pub update_frequency: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// Frame deltas above this are clamped. `None` disables clamping.
    pub max_delta_ms: Option<f64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            world: WorldConfig::default(),
            movement: MovementConfig::default(),
            combat: CombatConfig::default(),
            teams: TeamConfig::default(),
            stats: StatsConfig::default(),
            time: TimeConfig::default(),
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            max_entities: MAX_ENTITIES,
            bounds: WORLD_BOUNDS,
            min_height: MIN_HEIGHT,
            max_height: MAX_HEIGHT,
            initial_count: INITIAL_ENTITY_COUNT,
        }
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            ease: MOVEMENT_EASE,
            retarget_probability: RETARGET_PROBABILITY,
            retarget_distance_threshold: RETARGET_DISTANCE_THRESHOLD,
            wander_extent: WANDER_EXTENT,
            wander_height: WANDER_HEIGHT,
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            collision_distance: COLLISION_DISTANCE,
            initial_health: INITIAL_HEALTH,
            fall_target_y: FALL_TARGET_Y,
        }
    }
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self { count: TEAM_COUNT }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            update_frequency: STATS_UPDATE_FREQUENCY,
        }
    }
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            max_delta_ms: Some(MAX_FRAME_DELTA_MS),
        }
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config for values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let world = &self.world;
        if world.max_entities == 0 || world.max_entities > u32::MAX as usize {
            return Err(ConfigError::Capacity(world.max_entities));
        }
        if !(world.bounds > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "world.bounds",
                value: world.bounds,
            });
        }
        if !(world.min_height <= world.max_height) {
            return Err(ConfigError::HeightRange {
                min: world.min_height,
                max: world.max_height,
            });
        }

        let movement = &self.movement;
        if !(movement.ease > 0.0 && movement.ease <= 1.0) {
            return Err(ConfigError::OutOfUnitRange {
                field: "movement.ease",
                value: movement.ease,
            });
        }
        if !(0.0..=1.0).contains(&movement.retarget_probability) {
            return Err(ConfigError::OutOfUnitRange {
                field: "movement.retarget_probability",
                value: movement.retarget_probability,
            });
        }
        if !(movement.retarget_distance_threshold > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "movement.retarget_distance_threshold",
                value: movement.retarget_distance_threshold,
            });
        }
        if !(movement.wander_extent > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "movement.wander_extent",
                value: movement.wander_extent,
            });
        }
        if !(movement.wander_height > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "movement.wander_height",
                value: movement.wander_height,
            });
        }

        let combat = &self.combat;
        if !(combat.collision_distance > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "combat.collision_distance",
                value: combat.collision_distance,
            });
        }
        if combat.initial_health != INITIAL_HEALTH {
            return Err(ConfigError::InitialHealth(combat.initial_health));
        }
        if !(combat.fall_target_y < 0.0) {
            return Err(ConfigError::FallTarget(combat.fall_target_y));
        }

        if self.teams.count == 0 {
            return Err(ConfigError::NoTeams);
        }
        if self.stats.update_frequency == 0 {
            return Err(ConfigError::StatsFrequency);
        }
        if let Some(max) = self.time.max_delta_ms {
            if !(max > 0.0) {
                return Err(ConfigError::MaxDelta(max));
            }
        }
        Ok(())
    }
}
