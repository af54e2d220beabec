//! Builds the per-frame view handed to the renderer.

use brawl_core::state::{EntityView, WorldSnapshot};

use crate::ecs::World;

/// Serializable view of every active entity, in slot order.
pub fn build(world: &World) -> WorldSnapshot {
    let store = world.components();
    let entities = world
        .query()
        .into_iter()
        .filter_map(|id| {
            let idx = id.slot();
            Some(EntityView {
                id,
                team: store.team(idx)?,
                position: store.position.get(idx),
                velocity: store.velocity.get(idx),
                alive: store.is_alive(idx),
            })
        })
        .collect();

    WorldSnapshot {
        tick: world.time().tick,
        elapsed_ms: world.time().elapsed_ms,
        entities,
    }
}
