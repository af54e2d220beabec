//! Entity lifecycle: spawning, visual attachment, and destruction.
//!
//! Spawning is two-phase. Phase one writes every component synchronously and
//! the entity simulates from the next frame on. Phase two attaches whatever
//! visual the presentation layer loads for it, possibly much later; it can
//! fail or be rejected without touching the committed entity.

use std::cell::RefCell;
use std::future::Future;

use tracing::{debug, warn};

use brawl_core::config::{SimConfig, WorldConfig};
use brawl_core::error::{Result, SimError, VisualError};
use brawl_core::types::{EntityId, TeamId, Vec3};

use crate::ecs::{EntityInit, World};
use crate::engine::Simulation;
use crate::random::RandomSource;

/// Result of phase one: the committed entity and where it starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnTicket {
    pub id: EntityId,
    pub team: TeamId,
    pub position: Vec3,
}

/// Phase one: allocate an id and write Position, Target, Team, and Health.
///
/// Position and target are independent random points inside the spawn area.
/// They are drawn only once the spawn is known to succeed, so a rejected
/// spawn leaves the random stream untouched.
pub fn spawn(
    world: &mut World,
    rng: &mut dyn RandomSource,
    config: &SimConfig,
    team: TeamId,
) -> Result<SpawnTicket> {
    check_team(config, team)?;
    world.ensure_capacity()?;

    let position = spawn_point(rng, &config.world);
    let target = spawn_point(rng, &config.world);
    spawn_at(world, config, team, position, target)
}

/// Phase one with caller-chosen position and target.
pub fn spawn_at(
    world: &mut World,
    config: &SimConfig,
    team: TeamId,
    position: Vec3,
    target: Vec3,
) -> Result<SpawnTicket> {
    check_team(config, team)?;
    let id = world.spawn(EntityInit {
        position,
        target,
        team,
        health: config.combat.initial_health,
    })?;

    debug!(entity = %id, team = team.get(), "spawned balloon");
    Ok(SpawnTicket { id, team, position })
}

fn check_team(config: &SimConfig, team: TeamId) -> Result<()> {
    if team.get() > config.teams.count {
        return Err(SimError::InvalidTeam {
            team,
            team_count: config.teams.count,
        });
    }
    Ok(())
}

/// Uniform team in `1..=team_count`.
pub fn random_team(rng: &mut dyn RandomSource, team_count: u8) -> Option<TeamId> {
    if team_count == 0 {
        return None;
    }
    TeamId::new(rng.pick(team_count as usize) as u8 + 1)
}

fn spawn_point(rng: &mut dyn RandomSource, world: &WorldConfig) -> Vec3 {
    Vec3::new(
        rng.centered(world.bounds),
        rng.range(world.min_height, world.max_height),
        rng.centered(world.bounds),
    )
}

/// Free `id` and hand back its visual, if one was attached.
/// Safe to call with ids that were already destroyed.
pub fn destroy<V>(world: &mut World, visuals: &mut VisualRegistry<V>, id: EntityId) -> Option<V> {
    let visual = visuals.release(id);
    if world.despawn(id) {
        debug!(entity = %id, "destroyed balloon");
    }
    visual
}

/// What happened to a visual offered to [`VisualRegistry::attach`].
#[derive(Debug, PartialEq)]
pub enum AttachOutcome<V> {
    Attached,
    /// Attached, displacing an earlier visual that the caller now owns.
    Replaced(V),
    /// The entity is gone or the registry was disposed; the caller keeps
    /// the visual and should release it.
    Rejected(V),
}

/// Presentation handles owned on behalf of live entities.
///
/// The registry owns each visual exclusively; the simulation systems never
/// look at it. Each entry remembers the full id it was attached to so a
/// recycled slot never inherits a previous occupant's visual.
pub struct VisualRegistry<V> {
    slots: Vec<Option<(EntityId, V)>>,
    disposed: bool,
}

impl<V> VisualRegistry<V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            disposed: false,
        }
    }

    /// Attach `visual` to `id` if the entity is still active and the registry
    /// has not been disposed.
    pub fn attach(&mut self, world: &World, id: EntityId, visual: V) -> AttachOutcome<V> {
        if self.disposed {
            warn!(entity = %id, "visual arrived after teardown");
            return AttachOutcome::Rejected(visual);
        }
        if !world.is_active(id) {
            debug!(entity = %id, "visual arrived for a destroyed entity");
            return AttachOutcome::Rejected(visual);
        }
        let Some(slot) = self.slots.get_mut(id.slot()) else {
            return AttachOutcome::Rejected(visual);
        };
        match slot.replace((id, visual)) {
            Some((_, previous)) => AttachOutcome::Replaced(previous),
            None => AttachOutcome::Attached,
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&V> {
        match self.slots.get(id.slot())? {
            Some((owner, visual)) if *owner == id => Some(visual),
            _ => None,
        }
    }

    pub fn release(&mut self, id: EntityId) -> Option<V> {
        let slot = self.slots.get_mut(id.slot())?;
        if slot.as_ref().is_some_and(|(owner, _)| *owner == id) {
            slot.take().map(|(_, visual)| visual)
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &V)> + '_ {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|(id, visual)| (*id, visual)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hand back every visual and refuse all later attachments.
    pub fn dispose(&mut self) -> Vec<V> {
        self.disposed = true;
        self.slots
            .iter_mut()
            .filter_map(|slot| slot.take().map(|(_, visual)| visual))
            .collect()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// Presentation-side asset source for balloon visuals.
pub trait VisualLoader {
    type Visual;

    fn load(&self, team: TeamId) -> impl Future<Output = std::result::Result<Self::Visual, VisualError>>;

    /// Stand-in used when `load` fails.
    fn fallback(&self, team: TeamId) -> Self::Visual;

    /// Release a visual the simulation did not keep.
    fn discard(&self, visual: Self::Visual) {
        drop(visual);
    }
}

/// Spawn an entity and attach its visual once the loader delivers it.
///
/// The entity is simulating before the first await. A failed load falls back
/// to [`VisualLoader::fallback`]; a visual that arrives after the entity was
/// destroyed or the simulation disposed goes back to the loader.
pub async fn spawn_with_visual<L: VisualLoader>(
    sim: &RefCell<Simulation<L::Visual>>,
    loader: &L,
    team: TeamId,
) -> Result<EntityId> {
    let ticket = sim.borrow_mut().spawn(team)?;

    let visual = match loader.load(team).await {
        Ok(visual) => visual,
        Err(err) => {
            warn!(entity = %ticket.id, %err, "visual load failed, using fallback");
            loader.fallback(team)
        }
    };

    let outcome = sim.borrow_mut().attach_visual(ticket.id, visual);
    match outcome {
        AttachOutcome::Attached => {}
        AttachOutcome::Replaced(previous) => loader.discard(previous),
        AttachOutcome::Rejected(visual) => loader.discard(visual),
    }
    Ok(ticket.id)
}
