//! Collision and damage system.
//!
//! Checks every unordered pair of living entities. A pair closer than the
//! collision distance loses one member, chosen by coin flip. Pairwise O(n²)
//! over the active set, no spatial index.

use tracing::debug;

use brawl_core::config::CombatConfig;
use brawl_core::events::KillEvent;

use crate::ecs::World;
use crate::random::RandomSource;

/// Resolve this frame's collisions and return one event per kill.
pub fn run(world: &mut World, rng: &mut dyn RandomSource, combat: &CombatConfig) -> Vec<KillEvent> {
    let tick = world.time().tick;
    let entities = world.query();
    let store = world.components_mut();
    let mut kills = Vec::new();

    for (i, &first) in entities.iter().enumerate() {
        let a = first.slot();
        if !store.is_alive(a) {
            continue;
        }

        for &second in &entities[i + 1..] {
            let b = second.slot();
            if !store.is_alive(b) {
                continue;
            }

            let distance = store.position.get(a).distance(store.position.get(b));
            if distance >= combat.collision_distance {
                continue;
            }

            let (killer, victim) = if rng.coin() {
                (second, first)
            } else {
                (first, second)
            };
            if !store.damage(victim.slot()) {
                continue;
            }

            let (Some(killer_team), Some(victim_team)) =
                (store.team(killer.slot()), store.team(victim.slot()))
            else {
                continue;
            };
            debug!(
                tick,
                %killer,
                %victim,
                killer_team = killer_team.get(),
                victim_team = victim_team.get(),
                "balloon popped"
            );
            kills.push(KillEvent {
                tick,
                killer,
                victim,
                killer_team,
                victim_team,
                position: store.position.get(victim.slot()),
            });

            // A dead entity takes no further part this frame.
            if victim == first {
                break;
            }
        }
    }

    kills
}
