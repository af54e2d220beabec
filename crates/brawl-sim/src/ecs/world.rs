//! The fixed-capacity world: slot allocation, component columns, and the
//! frame time block.
//!
//! Entities only enter through the lifecycle, which checks the team against
//! the configured count and writes the initial health. Everything else reads
//! and writes components through per-id accessors that ignore stale ids.

use tracing::warn;

use brawl_core::error::{Result, SimError};
use brawl_core::types::{EntityId, FrameTime, TeamId, Vec3};

use super::entity::EntityAllocator;
use super::store::ComponentStore;

/// Component values for a freshly spawned entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EntityInit {
    pub position: Vec3,
    pub target: Vec3,
    pub team: TeamId,
    pub health: u8,
}

/// Fixed-capacity SoA world.
/// Owns the component arrays, the slot allocator, and the frame time block.
pub struct World {
    allocator: EntityAllocator,
    active: Vec<bool>,
    components: ComponentStore,
    time: FrameTime,
}

impl World {
    /// Zeroed world with room for `max_entities`, created at host time `now_ms`.
    pub fn new(max_entities: usize, now_ms: f64) -> Self {
        Self {
            allocator: EntityAllocator::with_capacity(max_entities as u32),
            active: vec![false; max_entities],
            components: ComponentStore::zeroed(max_entities),
            time: FrameTime::starting_at(now_ms),
        }
    }

    pub fn capacity(&self) -> usize {
        self.active.len()
    }

    /// Allocate a slot and write every component in one step, so systems
    /// never see a partially initialized entity.
    pub(crate) fn spawn(&mut self, init: EntityInit) -> Result<EntityId> {
        self.ensure_capacity()?;
        let Some(id) = self.allocator.allocate() else {
            return Err(self.capacity_exhausted());
        };
        let idx = id.slot();
        self.components
            .init(idx, init.position, init.target, init.team, init.health);
        self.active[idx] = true;
        Ok(id)
    }

    /// `Err(CapacityExhausted)` when every slot is occupied.
    pub fn ensure_capacity(&self) -> Result<()> {
        if self.entity_count() < self.capacity() {
            Ok(())
        } else {
            Err(self.capacity_exhausted())
        }
    }

    fn capacity_exhausted(&self) -> SimError {
        warn!(capacity = self.capacity(), "entity capacity exhausted");
        SimError::CapacityExhausted {
            capacity: self.capacity(),
        }
    }

    /// Remove `id` from iteration and free its slot. No-op for stale ids.
    pub fn despawn(&mut self, id: EntityId) -> bool {
        if !self.is_active(id) {
            return false;
        }
        let idx = id.slot();
        self.active[idx] = false;
        self.components.clear(idx);
        self.allocator.deallocate(id)
    }

    pub fn is_active(&self, id: EntityId) -> bool {
        self.allocator.is_current(id) && self.active.get(id.slot()).copied().unwrap_or(false)
    }

    pub fn entity_count(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    /// All active entities (living and dead) in slot order.
    pub fn query(&self) -> Vec<EntityId> {
        self.active
            .iter()
            .enumerate()
            .filter(|(_, &active)| active)
            .filter_map(|(idx, _)| {
                let generation = self.allocator.generation_of(idx as u32)?;
                Some(EntityId::new(idx as u32, generation))
            })
            .collect()
    }

    /// Active entities that are still alive.
    pub fn living(&self) -> Vec<EntityId> {
        self.query()
            .into_iter()
            .filter(|id| self.components.is_alive(id.slot()))
            .collect()
    }

    pub fn time(&self) -> &FrameTime {
        &self.time
    }

    pub(crate) fn time_mut(&mut self) -> &mut FrameTime {
        &mut self.time
    }

    /// Raw component arrays, indexed by [`EntityId::slot`].
    pub fn components(&self) -> &ComponentStore {
        &self.components
    }

    pub(crate) fn components_mut(&mut self) -> &mut ComponentStore {
        &mut self.components
    }

    // --- Typed accessors. All return None/false for inactive ids. ---

    pub fn position(&self, id: EntityId) -> Option<Vec3> {
        self.is_active(id)
            .then(|| self.components.position.get(id.slot()))
    }

    pub fn set_position(&mut self, id: EntityId, position: Vec3) -> bool {
        if !self.is_active(id) {
            return false;
        }
        self.components.position.set(id.slot(), position);
        true
    }

    pub fn velocity(&self, id: EntityId) -> Option<Vec3> {
        self.is_active(id)
            .then(|| self.components.velocity.get(id.slot()))
    }

    pub fn target(&self, id: EntityId) -> Option<Vec3> {
        self.is_active(id)
            .then(|| self.components.target.get(id.slot()))
    }

    /// Redirect a living entity. Dead entities keep falling and refuse.
    pub fn set_target(&mut self, id: EntityId, target: Vec3) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.components.target.set(id.slot(), target);
        true
    }

    pub fn team(&self, id: EntityId) -> Option<TeamId> {
        if !self.is_active(id) {
            return None;
        }
        self.components.team(id.slot())
    }

    pub fn health(&self, id: EntityId) -> Option<u8> {
        self.is_active(id)
            .then(|| self.components.health(id.slot()))
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.is_active(id) && self.components.is_alive(id.slot())
    }

    /// Apply one hit to `id`. Returns true if it died from this hit.
    pub fn damage(&mut self, id: EntityId) -> bool {
        self.is_active(id) && self.components.damage(id.slot())
    }
}
