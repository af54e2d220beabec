use brawl_core::types::EntityId;

/// Hands out entity slots below a fixed capacity.
///
/// Freed slots are recycled with a bumped generation, so an id held after
/// its entity was destroyed never matches the slot's new occupant.
pub struct EntityAllocator {
    generations: Vec<u32>,
    free_indices: Vec<u32>,
    next_index: u32,
    capacity: u32,
}

impl EntityAllocator {
    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            generations: Vec::with_capacity(capacity as usize),
            free_indices: Vec::new(),
            next_index: 0,
            capacity,
        }
    }

    /// Returns `None` when every slot is taken.
    pub fn allocate(&mut self) -> Option<EntityId> {
        if let Some(index) = self.free_indices.pop() {
            let generation = self.generations[index as usize];
            return Some(EntityId::new(index, generation));
        }
        if self.next_index >= self.capacity {
            return None;
        }
        let index = self.next_index;
        self.next_index += 1;
        self.generations.push(0);
        Some(EntityId::new(index, 0))
    }

    /// Free `id`'s slot. Returns false if `id` is stale or was never issued.
    pub fn deallocate(&mut self, id: EntityId) -> bool {
        if !self.is_current(id) {
            return false;
        }
        self.generations[id.slot()] = self.generations[id.slot()].wrapping_add(1);
        self.free_indices.push(id.index);
        true
    }

    /// True if `id` carries the slot's current generation.
    pub fn is_current(&self, id: EntityId) -> bool {
        self.generations.get(id.slot()) == Some(&id.generation)
    }

    /// Current generation for a slot, used to rebuild ids from indices.
    pub fn generation_of(&self, index: u32) -> Option<u32> {
        self.generations.get(index as usize).copied()
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Slots currently handed out.
    pub fn in_use(&self) -> u32 {
        self.next_index - self.free_indices.len() as u32
    }
}
