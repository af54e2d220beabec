//! Events emitted by the simulation for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::state::TeamStats;
use crate::types::{EntityId, TeamId, Vec3};

/// A collision killed a balloon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KillEvent {
    pub tick: u64,
    pub killer: EntityId,
    pub victim: EntityId,
    pub killer_team: TeamId,
    pub victim_team: TeamId,
    /// Where the victim was when it was hit.
    pub position: Vec3,
}

/// Periodic tally of living balloons per team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsEvent {
    pub tick: u64,
    pub stats: TeamStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    Kill(KillEvent),
    Stats(StatsEvent),
}
