//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind [`crate::config::SimConfig`]; hosts that
//! want different tuning override the config rather than these values.

// --- World ---

/// Fixed capacity of the component store.
pub const MAX_ENTITIES: usize = 1000;

/// Full width of the spawn area on x and z (centered on the origin).
pub const WORLD_BOUNDS: f32 = 20.0;

/// Lowest spawn altitude.
pub const MIN_HEIGHT: f32 = 5.0;

/// Highest spawn altitude.
pub const MAX_HEIGHT: f32 = 15.0;

/// Balloons launched when a match starts.
pub const INITIAL_ENTITY_COUNT: usize = 32;

// --- Movement ---

/// Fraction of the remaining distance to target covered each frame.
pub const MOVEMENT_EASE: f32 = 0.015;

/// Chance that a retarget chases another balloon instead of wandering.
pub const RETARGET_PROBABILITY: f32 = 0.75;

/// Per-frame displacement below which a balloon counts as arrived.
pub const RETARGET_DISTANCE_THRESHOLD: f32 = 0.01;

/// Full width of the wander cube on x and z.
/// Smaller than the spawn area, so wandering pulls balloons inward.
pub const WANDER_EXTENT: f32 = 10.0;

/// Wander targets are drawn from `[0, WANDER_HEIGHT)`.
pub const WANDER_HEIGHT: f32 = 10.0;

// --- Combat ---

/// Two living balloons closer than this collide.
pub const COLLISION_DISTANCE: f32 = 1.0;

/// Health assigned at spawn.
pub const INITIAL_HEALTH: u8 = 1;

/// Health of a dead balloon.
pub const DEAD_HEALTH: u8 = 0;

/// Target altitude forced on dead balloons.
pub const FALL_TARGET_Y: f32 = -20.0;

// --- Teams ---

pub const TEAM_COUNT: u8 = 4;

// --- Stats ---

/// Frames between team tallies (~0.5s at 60 fps).
pub const STATS_UPDATE_FREQUENCY: u32 = 30;

// --- Time ---

/// Longest frame delta accepted before clamping (e.g. after a hidden tab).
pub const MAX_FRAME_DELTA_MS: f64 = 250.0;

// --- Kill feed ---

pub const KILL_FEED_MAX_ENTRIES: usize = 5;

pub const KILL_FEED_ENTRY_DURATION_MS: f64 = 5000.0;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;
