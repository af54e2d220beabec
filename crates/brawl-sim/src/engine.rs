//! The simulation orchestrator and its host-facing seams.
//!
//! [`Simulation`] owns the world, the random source, and the visual registry,
//! and runs time, movement, collision, and stats in that order once per host
//! frame. Hosts observe a frame through [`FrameHooks`] or by draining the
//! buffered events afterwards.

use std::time::Instant;

use tracing::info;

use brawl_core::config::SimConfig;
use brawl_core::error::{ConfigError, Result, SimError};
use brawl_core::events::{GameEvent, KillEvent, StatsEvent};
use brawl_core::state::{TeamStats, WorldSnapshot};
use brawl_core::types::{EntityId, TeamId, Vec3};

use crate::ecs::World;
use crate::lifecycle::{self, AttachOutcome, SpawnTicket, VisualRegistry};
use crate::random::{RandomSource, SeededRandom};
use crate::systems;

/// Presentation callbacks invoked from inside [`Simulation::frame`].
///
/// Every method defaults to a no-op, so a host implements only what it
/// renders. `()` is the empty hook set.
pub trait FrameHooks<V = ()> {
    fn on_kill(&mut self, _kill: &KillEvent) {}

    fn on_stats_update(&mut self, _stats: &StatsEvent) {}

    /// Runs after the simulation systems, before `render`.
    fn camera(&mut self, _world: &World, _delta_ms: f64) {}

    fn render(&mut self, _world: &World, _visuals: &VisualRegistry<V>) {}
}

impl<V> FrameHooks<V> for () {}

/// Host time source, in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall-clock time since construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Top-level simulation orchestrator.
/// Owns the world and the visuals attached to it, and runs the systems in
/// order once per host frame.
pub struct Simulation<V = ()> {
    world: World,
    config: SimConfig,
    rng: Box<dyn RandomSource>,
    stats_frame: u32,
    visuals: VisualRegistry<V>,
    pending_events: Vec<GameEvent>,
}

impl<V> Simulation<V> {
    /// Validate `config` and build an empty world created at host time
    /// `now_ms`, seeded from `config.seed`.
    pub fn new(config: SimConfig, now_ms: f64) -> Result<Self> {
        let rng = SeededRandom::new(config.seed);
        Self::with_random(config, now_ms, rng)
    }

    /// Same as [`Simulation::new`] with an explicit random source.
    pub fn with_random(
        config: SimConfig,
        now_ms: f64,
        rng: impl RandomSource + 'static,
    ) -> Result<Self> {
        config.validate()?;
        let capacity = config.world.max_entities;
        info!(
            capacity,
            teams = config.teams.count,
            seed = config.seed,
            "simulation created"
        );
        Ok(Self {
            world: World::new(capacity, now_ms),
            config,
            rng: Box::new(rng),
            stats_frame: 0,
            visuals: VisualRegistry::new(capacity),
            pending_events: Vec::new(),
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct world access for hosts and tests that place entities by hand.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn visuals(&self) -> &VisualRegistry<V> {
        &self.visuals
    }

    pub fn is_disposed(&self) -> bool {
        self.visuals.is_disposed()
    }

    /// Phase one of a spawn. The entity takes part in the next frame.
    pub fn spawn(&mut self, team: TeamId) -> Result<SpawnTicket> {
        if self.is_disposed() {
            return Err(SimError::Disposed);
        }
        lifecycle::spawn(&mut self.world, self.rng.as_mut(), &self.config, team)
    }

    /// Phase one at a caller-chosen position and target.
    pub fn spawn_at(&mut self, team: TeamId, position: Vec3, target: Vec3) -> Result<SpawnTicket> {
        if self.is_disposed() {
            return Err(SimError::Disposed);
        }
        lifecycle::spawn_at(&mut self.world, &self.config, team, position, target)
    }

    pub fn spawn_random_team(&mut self) -> Result<SpawnTicket> {
        let count = self.config.teams.count;
        let team = lifecycle::random_team(self.rng.as_mut(), count)
            .ok_or(SimError::Config(ConfigError::NoTeams))?;
        self.spawn(team)
    }

    /// Spawn `count` random-team entities. Stops at the first failure.
    pub fn populate(&mut self, count: usize) -> Result<Vec<EntityId>> {
        let ids = (0..count)
            .map(|_| self.spawn_random_team().map(|ticket| ticket.id))
            .collect::<Result<Vec<_>>>()?;
        info!(count = ids.len(), "populated world");
        Ok(ids)
    }

    /// Spawn the configured opening population (`world.initial_count`).
    pub fn populate_initial(&mut self) -> Result<Vec<EntityId>> {
        self.populate(self.config.world.initial_count)
    }

    /// Phase two of a spawn.
    pub fn attach_visual(&mut self, id: EntityId, visual: V) -> AttachOutcome<V> {
        self.visuals.attach(&self.world, id, visual)
    }

    /// Remove `id` and return its visual. A no-op for ids already gone.
    pub fn destroy(&mut self, id: EntityId) -> Option<V> {
        lifecycle::destroy(&mut self.world, &mut self.visuals, id)
    }

    /// Tear down: hand back every visual, stop simulating, refuse new spawns
    /// and late visuals.
    pub fn dispose(&mut self) -> Vec<V> {
        let visuals = self.visuals.dispose();
        info!(
            entities = self.world.entity_count(),
            visuals = visuals.len(),
            "simulation disposed"
        );
        visuals
    }

    /// Run one frame ending at host time `now_ms`:
    /// time, movement, collision, stats, then the camera and render hooks.
    pub fn frame<H>(&mut self, now_ms: f64, hooks: &mut H)
    where
        H: FrameHooks<V> + ?Sized,
    {
        if self.is_disposed() {
            return;
        }

        systems::time::run(self.world.time_mut(), now_ms, self.config.time.max_delta_ms);

        systems::movement::run(
            &mut self.world,
            self.rng.as_mut(),
            &self.config.movement,
            self.config.combat.fall_target_y,
        );

        let kills = systems::collision::run(&mut self.world, self.rng.as_mut(), &self.config.combat);
        for kill in kills {
            hooks.on_kill(&kill);
            self.pending_events.push(GameEvent::Kill(kill));
        }

        if let Some(stats) = systems::stats::run(
            &self.world,
            &mut self.stats_frame,
            &self.config.stats,
            self.config.teams.count,
        ) {
            let event = StatsEvent {
                tick: self.world.time().tick,
                stats,
            };
            hooks.on_stats_update(&event);
            self.pending_events.push(GameEvent::Stats(event));
        }

        hooks.camera(&self.world, self.world.time().delta_ms);
        hooks.render(&self.world, &self.visuals);
    }

    /// [`Simulation::frame`] without hooks.
    pub fn tick(&mut self, now_ms: f64) {
        self.frame(now_ms, &mut ());
    }

    /// [`Simulation::frame`] at the clock's current reading.
    pub fn advance<C, H>(&mut self, clock: &C, hooks: &mut H)
    where
        C: Clock + ?Sized,
        H: FrameHooks<V> + ?Sized,
    {
        self.frame(clock.now_ms(), hooks);
    }

    /// Living entities per team right now, independent of the stats cadence.
    pub fn team_stats(&self) -> TeamStats {
        systems::stats::tally(&self.world, self.config.teams.count)
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        systems::snapshot::build(&self.world)
    }

    /// Take the events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
