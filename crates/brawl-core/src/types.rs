//! Fundamental geometric and simulation types.

use std::fmt;
use std::num::NonZeroU8;

use serde::{Deserialize, Serialize};

pub use glam::Vec3;

/// Handle to one simulated balloon.
///
/// `index` addresses the component arrays; `generation` distinguishes a
/// recycled slot from the entity that previously occupied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId {
    pub index: u32,
    pub generation: u32,
}

impl EntityId {
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot in the component arrays.
    pub fn slot(&self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}g{}", self.index, self.generation)
    }
}

/// Team a balloon fights for. Teams are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(NonZeroU8);

impl TeamId {
    /// Returns `None` for 0, which never names a team.
    pub fn new(value: u8) -> Option<Self> {
        NonZeroU8::new(value).map(Self)
    }

    pub fn get(&self) -> u8 {
        self.0.get()
    }

    /// All teams `1..=count` in ascending order.
    pub fn all(count: u8) -> impl Iterator<Item = TeamId> {
        (1..=count).filter_map(TeamId::new)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// Frame timing block, in host milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameTime {
    /// Number of frames advanced so far.
    pub tick: u64,
    /// Milliseconds covered by the most recent frame.
    pub delta_ms: f64,
    /// Total milliseconds accumulated over all frames.
    pub elapsed_ms: f64,
    /// Host clock reading at the last advance (or at world creation).
    pub then_ms: f64,
}

impl FrameTime {
    /// Time block for a world created at `now_ms`.
    pub fn starting_at(now_ms: f64) -> Self {
        Self {
            then_ms: now_ms,
            ..Default::default()
        }
    }

    /// Milliseconds elapsed on the host clock since the last advance.
    pub fn since_then(&self, now_ms: f64) -> f64 {
        now_ms - self.then_ms
    }

    /// Record one frame covering `delta_ms`, ending at `now_ms`.
    pub fn advance(&mut self, now_ms: f64, delta_ms: f64) {
        self.tick += 1;
        self.delta_ms = delta_ms;
        self.elapsed_ms += delta_ms;
        self.then_ms = now_ms;
    }
}
