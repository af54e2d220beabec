#[cfg(test)]
mod tests {
    use brawl_core::config::SimConfig;
    use brawl_core::error::{ConfigError, SimError};
    use brawl_core::events::{GameEvent, KillEvent, StatsEvent};
    use brawl_core::types::{EntityId, TeamId, Vec3};

    use crate::ecs::World;
    use crate::engine::{Clock, FrameHooks, Simulation};
    use crate::lifecycle::{AttachOutcome, VisualRegistry};
    use crate::random::ScriptedRandom;

    type Sim = Simulation<&'static str>;

    fn team(n: u8) -> TeamId {
        TeamId::new(n).unwrap()
    }

    /// Draws of 0.9 fail the chase roll and pick the loser as the first of a pair.
    fn scripted_sim(config: SimConfig) -> Sim {
        Simulation::with_random(config, 0.0, ScriptedRandom::constant(0.9)).unwrap()
    }

    fn place(sim: &mut Sim, team_no: u8, position: Vec3) -> EntityId {
        sim.spawn_at(team(team_no), position, position).unwrap().id
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        kills: Vec<KillEvent>,
        stats: Vec<StatsEvent>,
    }

    impl FrameHooks<&'static str> for Recorder {
        fn on_kill(&mut self, kill: &KillEvent) {
            self.calls.push("kill".into());
            self.kills.push(kill.clone());
        }

        fn on_stats_update(&mut self, stats: &StatsEvent) {
            self.calls.push("stats".into());
            self.stats.push(stats.clone());
        }

        fn camera(&mut self, _world: &World, delta_ms: f64) {
            self.calls.push(format!("camera:{delta_ms}"));
        }

        fn render(&mut self, _world: &World, visuals: &VisualRegistry<&'static str>) {
            self.calls.push(format!("render:{}", visuals.len()));
        }
    }

    struct FixedClock(f64);

    impl Clock for FixedClock {
        fn now_ms(&self) -> f64 {
            self.0
        }
    }

    // ---- Construction ----

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = SimConfig::default();
        config.teams.count = 0;
        let err = Simulation::<()>::new(config, 0.0).err();
        assert_eq!(err, Some(SimError::Config(ConfigError::NoTeams)));
    }

    #[test]
    fn test_new_world_is_empty() {
        let sim = Simulation::<()>::new(SimConfig::default(), 100.0).unwrap();
        assert_eq!(sim.world().entity_count(), 0);
        assert_eq!(sim.world().capacity(), 1000);
        assert_eq!(sim.world().time().then_ms, 100.0);
        assert!(!sim.is_disposed());
    }

    // ---- Spawning ----

    #[test]
    fn test_spawn_is_ready_before_any_visual() {
        let mut sim = scripted_sim(SimConfig::default());
        let ticket = sim.spawn(team(3)).unwrap();

        assert!(sim.world().is_active(ticket.id));
        assert!(sim.world().is_alive(ticket.id));
        assert_eq!(sim.world().team(ticket.id), Some(team(3)));
        assert!(sim.visuals().get(ticket.id).is_none());
        assert_eq!(sim.team_stats().count(team(3)), Some(1));
    }

    #[test]
    fn test_populate_uses_configured_teams() {
        let mut sim = Simulation::<()>::new(SimConfig::default(), 0.0).unwrap();
        let ids = sim.populate(32).unwrap();

        assert_eq!(ids.len(), 32);
        assert_eq!(sim.world().entity_count(), 32);
        for id in ids {
            let t = sim.world().team(id).unwrap().get();
            assert!((1..=4).contains(&t));
        }
        assert_eq!(sim.team_stats().total(), 32);
    }

    #[test]
    fn test_populate_past_capacity_fails() {
        let mut config = SimConfig::default();
        config.world.max_entities = 3;
        let mut sim = scripted_sim(config);

        let err = sim.populate(4).unwrap_err();
        assert_eq!(err, SimError::CapacityExhausted { capacity: 3 });
        assert_eq!(sim.world().entity_count(), 3);
    }

    #[test]
    fn test_populate_initial_reads_config() {
        let mut config = SimConfig::default();
        config.world.initial_count = 6;
        let mut sim = scripted_sim(config);

        let ids = sim.populate_initial().unwrap();
        assert_eq!(ids.len(), 6);
        assert_eq!(sim.team_stats().total(), 6);
    }

    #[test]
    fn test_spawn_at_rejects_unknown_team() {
        let mut sim = scripted_sim(SimConfig::default());
        let a = place(&mut sim, 1, Vec3::ZERO);

        let err = sim.spawn_at(team(9), Vec3::ONE, Vec3::ONE).unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidTeam {
                team: team(9),
                team_count: 4
            }
        );
        assert_eq!(sim.world().health(a), Some(1));
        assert_eq!(sim.team_stats().total() as usize, sim.world().living().len());
    }

    #[test]
    fn test_destroyed_slot_is_reused() {
        let mut config = SimConfig::default();
        config.world.max_entities = 1;
        let mut sim = scripted_sim(config);

        let first = sim.spawn(team(1)).unwrap().id;
        assert!(sim.spawn(team(1)).is_err());
        sim.destroy(first);
        let second = sim.spawn(team(2)).unwrap().id;

        assert_eq!(first.index, second.index);
        assert_ne!(first, second);
        assert!(!sim.world().is_active(first));
    }

    // ---- Frame pipeline ----

    #[test]
    fn test_frame_runs_hooks_in_order() {
        let mut sim = scripted_sim(SimConfig::default());
        let a = place(&mut sim, 1, Vec3::new(0.0, 10.0, 0.0));
        let b = place(&mut sim, 2, Vec3::new(0.0, 10.0, 0.0));
        sim.attach_visual(b, "b");

        let mut hooks = Recorder::default();
        sim.frame(16.0, &mut hooks);

        assert_eq!(hooks.calls, vec!["kill", "camera:16", "render:1"]);
        let kill = &hooks.kills[0];
        assert_eq!(kill.victim, a);
        assert_eq!(kill.killer, b);
        assert_eq!(kill.victim_team, team(1));
        assert_eq!(kill.killer_team, team(2));
        assert_eq!(kill.position, Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(kill.tick, 1);
        assert_eq!(sim.world().health(a), Some(0));
        assert_eq!(sim.world().health(b), Some(1));
    }

    #[test]
    fn test_dead_entity_falls_on_the_next_frame() {
        let mut sim = scripted_sim(SimConfig::default());
        let a = place(&mut sim, 1, Vec3::new(0.0, 10.0, 0.0));
        place(&mut sim, 2, Vec3::new(0.0, 10.0, 0.0));

        sim.tick(16.0);
        sim.tick(32.0);

        assert_eq!(sim.world().target(a).map(|t| t.y), Some(-20.0));
        assert!(sim.world().position(a).unwrap().y < 10.0);
    }

    #[test]
    fn test_stats_emitted_on_cadence() {
        let mut sim = scripted_sim(SimConfig::default());
        place(&mut sim, 1, Vec3::new(-5.0, 10.0, 0.0));
        place(&mut sim, 2, Vec3::new(5.0, 10.0, 0.0));

        let mut hooks = Recorder::default();
        for frame in 1..=29 {
            sim.frame(frame as f64 * 16.0, &mut hooks);
        }
        assert!(hooks.stats.is_empty());

        sim.frame(30.0 * 16.0, &mut hooks);
        assert_eq!(hooks.stats.len(), 1);
        let event = &hooks.stats[0];
        assert_eq!(event.tick, 30);
        assert_eq!(event.stats.count(team(1)), Some(1));
        assert_eq!(event.stats.count(team(2)), Some(1));
        assert_eq!(event.stats.count(team(3)), Some(0));
        assert_eq!(event.stats.count(team(4)), Some(0));
    }

    #[test]
    fn test_drain_events_takes_everything_once() {
        let mut config = SimConfig::default();
        config.stats.update_frequency = 1;
        let mut sim = scripted_sim(config);
        place(&mut sim, 1, Vec3::ZERO);
        place(&mut sim, 2, Vec3::ZERO);

        sim.tick(16.0);
        let events = sim.drain_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], GameEvent::Kill(_)));
        assert!(matches!(events[1], GameEvent::Stats(_)));
        assert!(sim.drain_events().is_empty());
    }

    #[test]
    fn test_long_pause_is_clamped() {
        let mut sim = scripted_sim(SimConfig::default());
        sim.tick(10_000.0);
        assert_eq!(sim.world().time().delta_ms, 250.0);
        assert_eq!(sim.world().time().elapsed_ms, 250.0);
        assert_eq!(sim.world().time().then_ms, 10_000.0);
    }

    #[test]
    fn test_unclamped_when_disabled() {
        let mut config = SimConfig::default();
        config.time.max_delta_ms = None;
        let mut sim = scripted_sim(config);
        sim.tick(10_000.0);
        assert_eq!(sim.world().time().delta_ms, 10_000.0);
    }

    #[test]
    fn test_advance_reads_the_clock() {
        let mut sim = scripted_sim(SimConfig::default());
        sim.advance(&FixedClock(40.0), &mut ());
        assert_eq!(sim.world().time().tick, 1);
        assert_eq!(sim.world().time().delta_ms, 40.0);
    }

    #[test]
    fn test_snapshot_reflects_frame() {
        let mut sim = scripted_sim(SimConfig::default());
        let a = place(&mut sim, 1, Vec3::new(0.0, 10.0, 0.0));
        let b = place(&mut sim, 2, Vec3::new(0.0, 10.0, 0.0));
        sim.tick(16.0);

        let snapshot = sim.snapshot();
        assert_eq!(snapshot.tick, 1);
        assert_eq!(snapshot.elapsed_ms, 16.0);
        let alive: Vec<(EntityId, bool)> = snapshot.entities.iter().map(|e| (e.id, e.alive)).collect();
        assert_eq!(alive, vec![(a, false), (b, true)]);
    }

    // ---- Teardown ----

    #[test]
    fn test_dispose_stops_everything() {
        let mut sim = scripted_sim(SimConfig::default());
        let a = sim.spawn(team(1)).unwrap().id;
        let b = sim.spawn(team(2)).unwrap().id;
        sim.attach_visual(a, "a");

        assert_eq!(sim.dispose(), vec!["a"]);
        assert!(sim.is_disposed());

        sim.tick(16.0);
        assert_eq!(sim.world().time().tick, 0);
        assert_eq!(sim.spawn(team(1)).unwrap_err(), SimError::Disposed);
        assert_eq!(
            sim.spawn_at(team(1), Vec3::ZERO, Vec3::ZERO).unwrap_err(),
            SimError::Disposed
        );
        assert_eq!(sim.attach_visual(b, "b"), AttachOutcome::Rejected("b"));
    }

    #[test]
    fn test_destroy_unknown_id_is_noop() {
        let mut sim = scripted_sim(SimConfig::default());
        let a = sim.spawn(team(1)).unwrap().id;
        sim.attach_visual(a, "a");

        assert_eq!(sim.destroy(a), Some("a"));
        assert_eq!(sim.destroy(a), None);
        assert_eq!(sim.destroy(EntityId::new(999, 7)), None);
        assert_eq!(sim.world().entity_count(), 0);
    }
}
