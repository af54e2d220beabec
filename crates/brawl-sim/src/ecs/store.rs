//! Structure-of-arrays component storage.
//!
//! Each attribute is its own contiguous array sized to the world capacity and
//! indexed by entity slot, so a system touching positions walks three flat
//! `f32` arrays instead of hopping between per-entity records.
//! Slots are zeroed at creation and on release.

use brawl_core::constants::DEAD_HEALTH;
use brawl_core::types::{TeamId, Vec3};

/// Three parallel `f32` arrays holding one 3-vector per slot.
#[derive(Debug, Clone)]
pub struct Vec3Column {
    x: Vec<f32>,
    y: Vec<f32>,
    z: Vec<f32>,
}

impl Vec3Column {
    pub fn zeroed(capacity: usize) -> Self {
        Self {
            x: vec![0.0; capacity],
            y: vec![0.0; capacity],
            z: vec![0.0; capacity],
        }
    }

    pub fn get(&self, slot: usize) -> Vec3 {
        Vec3::new(self.x[slot], self.y[slot], self.z[slot])
    }

    pub fn set(&mut self, slot: usize, value: Vec3) {
        self.x[slot] = value.x;
        self.y[slot] = value.y;
        self.z[slot] = value.z;
    }

    pub fn add(&mut self, slot: usize, delta: Vec3) {
        self.x[slot] += delta.x;
        self.y[slot] += delta.y;
        self.z[slot] += delta.z;
    }

    pub fn set_y(&mut self, slot: usize, y: f32) {
        self.y[slot] = y;
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Position, Velocity, Target, Team, and Health for every slot.
///
/// Team and Health have no general setters: team is written once by
/// [`ComponentStore::init`] and health only ever moves from alive to dead
/// through [`ComponentStore::damage`].
#[derive(Debug, Clone)]
pub struct ComponentStore {
    pub position: Vec3Column,
    /// Displacement applied on the last frame (derived, never integrated).
    pub velocity: Vec3Column,
    pub target: Vec3Column,
    team: Vec<u8>,
    health: Vec<u8>,
}

impl ComponentStore {
    pub fn zeroed(capacity: usize) -> Self {
        Self {
            position: Vec3Column::zeroed(capacity),
            velocity: Vec3Column::zeroed(capacity),
            target: Vec3Column::zeroed(capacity),
            team: vec![0; capacity],
            health: vec![0; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.team.len()
    }

    /// Write all five attributes of a fresh slot together.
    pub(crate) fn init(&mut self, slot: usize, position: Vec3, target: Vec3, team: TeamId, health: u8) {
        self.position.set(slot, position);
        self.velocity.set(slot, Vec3::ZERO);
        self.target.set(slot, target);
        self.team[slot] = team.get();
        self.health[slot] = health;
    }

    pub(crate) fn clear(&mut self, slot: usize) {
        self.position.set(slot, Vec3::ZERO);
        self.velocity.set(slot, Vec3::ZERO);
        self.target.set(slot, Vec3::ZERO);
        self.team[slot] = 0;
        self.health[slot] = DEAD_HEALTH;
    }

    /// Team of an initialized slot; `None` for a cleared one.
    pub fn team(&self, slot: usize) -> Option<TeamId> {
        TeamId::new(self.team[slot])
    }

    pub fn health(&self, slot: usize) -> u8 {
        self.health[slot]
    }

    pub fn is_alive(&self, slot: usize) -> bool {
        self.health[slot] != DEAD_HEALTH
    }

    /// Remove one point of health. Returns true if this hit killed the slot;
    /// a slot that is already dead is left untouched.
    pub fn damage(&mut self, slot: usize) -> bool {
        if self.health[slot] == DEAD_HEALTH {
            return false;
        }
        self.health[slot] -= 1;
        self.health[slot] == DEAD_HEALTH
    }
}
