//! Team stats aggregation system.

use tracing::trace;

use brawl_core::config::StatsConfig;
use brawl_core::state::TeamStats;

use crate::ecs::World;

/// Count living entities per team, with every team `1..=team_count` present.
pub fn tally(world: &World, team_count: u8) -> TeamStats {
    let mut stats = TeamStats::new(team_count);
    let store = world.components();
    for id in world.query() {
        let idx = id.slot();
        if !store.is_alive(idx) {
            continue;
        }
        if let Some(team) = store.team(idx) {
            stats.record(team);
        }
    }
    stats
}

/// Tally on every `update_frequency`-th call, tracked by `frame_counter`.
/// Returns `None` on the frames in between.
pub fn run(
    world: &World,
    frame_counter: &mut u32,
    config: &StatsConfig,
    team_count: u8,
) -> Option<TeamStats> {
    *frame_counter += 1;
    if *frame_counter < config.update_frequency {
        return None;
    }
    *frame_counter = 0;

    let stats = tally(world, team_count);
    trace!(total = stats.total(), "team stats updated");
    Some(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::EntityInit;
    use brawl_core::types::{TeamId, Vec3};

    fn team(n: u8) -> TeamId {
        TeamId::new(n).unwrap()
    }

    fn spawn(world: &mut World, t: u8) -> brawl_core::types::EntityId {
        world
            .spawn(EntityInit {
                position: Vec3::ZERO,
                target: Vec3::ZERO,
                team: team(t),
                health: 1,
            })
            .unwrap()
    }

    #[test]
    fn tally_counts_only_the_living() {
        let mut world = World::new(8, 0.0);
        spawn(&mut world, 1);
        spawn(&mut world, 1);
        let dead = spawn(&mut world, 2);
        spawn(&mut world, 3);
        world.damage(dead);

        let stats = tally(&world, 4);
        assert_eq!(stats.count(team(1)), Some(2));
        assert_eq!(stats.count(team(2)), Some(0));
        assert_eq!(stats.count(team(3)), Some(1));
        assert_eq!(stats.count(team(4)), Some(0));
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn emits_on_cadence_only() {
        let mut world = World::new(8, 0.0);
        spawn(&mut world, 1);
        let config = StatsConfig { update_frequency: 3 };
        let mut counter = 0;

        let emitted: Vec<bool> = (0..7)
            .map(|_| run(&world, &mut counter, &config, 2).is_some())
            .collect();

        assert_eq!(emitted, vec![false, false, true, false, false, true, false]);
    }

    #[test]
    fn every_frame_when_frequency_is_one() {
        let world = World::new(2, 0.0);
        let config = StatsConfig { update_frequency: 1 };
        let mut counter = 0;
        for _ in 0..3 {
            let stats = run(&world, &mut counter, &config, 2).unwrap();
            assert_eq!(stats.len(), 2);
            assert_eq!(stats.total(), 0);
        }
    }
}
