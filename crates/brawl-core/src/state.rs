//! Read-only views of the simulation handed to the presentation layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, TeamId, Vec3};

/// Living balloons per team. Every configured team is present, including
/// teams with no survivors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamStats(BTreeMap<TeamId, u32>);

impl TeamStats {
    /// Zero counts for teams `1..=team_count`.
    pub fn new(team_count: u8) -> Self {
        Self(TeamId::all(team_count).map(|team| (team, 0)).collect())
    }

    /// Count one living balloon. Teams outside the configured set are ignored.
    pub fn record(&mut self, team: TeamId) {
        if let Some(count) = self.0.get_mut(&team) {
            *count += 1;
        }
    }

    pub fn count(&self, team: TeamId) -> Option<u32> {
        self.0.get(&team).copied()
    }

    /// Living balloons across all teams.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// Teams with at least one living balloon, ascending.
    pub fn alive_teams(&self) -> Vec<TeamId> {
        self.0
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(&team, _)| team)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TeamId, u32)> + '_ {
        self.0.iter().map(|(&team, &count)| (team, count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One balloon as the renderer needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub team: TeamId,
    pub position: Vec3,
    pub velocity: Vec3,
    pub alive: bool,
}

/// Every active balloon after a frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub elapsed_ms: f64,
    pub entities: Vec<EntityView>,
}
