//! Movement and retargeting system.
//!
//! Every active entity eases toward its target: each frame it covers a fixed
//! fraction of the remaining distance, so travel slows geometrically and the
//! target is approached but never reached exactly. Dead entities have their
//! target pinned below ground and fall; living ones pick a new target once
//! their per-frame displacement drops below the arrival threshold.

use brawl_core::config::MovementConfig;
use brawl_core::types::{EntityId, Vec3};

use crate::ecs::{ComponentStore, World};
use crate::random::RandomSource;

/// Move every active entity one frame and retarget the ones that arrived.
pub fn run(
    world: &mut World,
    rng: &mut dyn RandomSource,
    movement: &MovementConfig,
    fall_target_y: f32,
) {
    let entities = world.query();
    let store = world.components_mut();

    for &id in &entities {
        let idx = id.slot();
        let delta = (store.target.get(idx) - store.position.get(idx)) * movement.ease;
        store.velocity.set(idx, delta);
        store.position.add(idx, delta);

        if !store.is_alive(idx) {
            store.target.set_y(idx, fall_target_y);
            continue;
        }

        // Arrival is judged by this frame's displacement, not distance to target.
        if delta.length() < movement.retarget_distance_threshold {
            let target = pick_target(idx, &entities, store, rng, movement);
            store.target.set(idx, target);
        }
    }
}

/// Chase another entity's current position, or wander to a random point.
fn pick_target(
    slot: usize,
    entities: &[EntityId],
    store: &ComponentStore,
    rng: &mut dyn RandomSource,
    movement: &MovementConfig,
) -> Vec3 {
    if rng.chance(movement.retarget_probability) {
        // Uniform over living entities plus self: the distribution of
        // rerolling until a living entity or self comes up, in one draw.
        let candidates: Vec<usize> = entities
            .iter()
            .map(|id| id.slot())
            .filter(|&c| c == slot || store.is_alive(c))
            .collect();
        let chosen = candidates[rng.pick(candidates.len())];
        store.position.get(chosen)
    } else {
        Vec3::new(
            rng.centered(movement.wander_extent),
            rng.next_unit() * movement.wander_height,
            rng.centered(movement.wander_extent),
        )
    }
}
