//! Consumers of the event stream: match outcome detection and the kill feed.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::info;

use brawl_core::constants::{KILL_FEED_ENTRY_DURATION_MS, KILL_FEED_MAX_ENTRIES};
use brawl_core::events::KillEvent;
use brawl_core::state::TeamStats;
use brawl_core::types::TeamId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    InProgress,
    /// Exactly one team has living balloons.
    Winner(TeamId),
    /// No team has living balloons.
    Draw,
}

impl MatchOutcome {
    pub fn from_stats(stats: &TeamStats) -> Self {
        match stats.alive_teams().as_slice() {
            [] => MatchOutcome::Draw,
            [team] => MatchOutcome::Winner(*team),
            _ => MatchOutcome::InProgress,
        }
    }

    pub fn is_decided(&self) -> bool {
        !matches!(self, MatchOutcome::InProgress)
    }
}

/// Watches stats updates and latches the first decided outcome.
///
/// The watcher arms on the first update with a living balloon, so updates
/// from frames that run before the opening population arrives are ignored.
#[derive(Debug, Clone, Default)]
pub struct MatchWatcher {
    armed: bool,
    decided: Option<MatchOutcome>,
}

impl MatchWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one stats update. Returns the outcome only on the update that
    /// decides the match; later updates are ignored.
    pub fn observe(&mut self, stats: &TeamStats) -> Option<MatchOutcome> {
        if self.decided.is_some() {
            return None;
        }
        if !self.armed {
            if stats.total() == 0 {
                return None;
            }
            self.armed = true;
        }
        let outcome = MatchOutcome::from_stats(stats);
        if !outcome.is_decided() {
            return None;
        }
        info!(?outcome, "match decided");
        self.decided = Some(outcome);
        Some(outcome)
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn outcome(&self) -> MatchOutcome {
        self.decided.unwrap_or(MatchOutcome::InProgress)
    }

    /// Forget the current match, e.g. before repopulating for a rematch.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KillFeedEntry {
    pub kill: KillEvent,
    /// World elapsed time when the kill was recorded.
    pub at_ms: f64,
}

/// Most recent kills, newest first, each shown for a limited time.
#[derive(Debug, Clone)]
pub struct KillFeed {
    entries: VecDeque<KillFeedEntry>,
    max_entries: usize,
    entry_duration_ms: f64,
}

impl Default for KillFeed {
    fn default() -> Self {
        Self::new(KILL_FEED_MAX_ENTRIES, KILL_FEED_ENTRY_DURATION_MS)
    }
}

impl KillFeed {
    pub fn new(max_entries: usize, entry_duration_ms: f64) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
            entry_duration_ms,
        }
    }

    pub fn push(&mut self, kill: KillEvent, now_ms: f64) {
        self.entries.push_front(KillFeedEntry { kill, at_ms: now_ms });
        self.entries.truncate(self.max_entries);
    }

    /// Drop entries older than the display duration.
    pub fn expire(&mut self, now_ms: f64) {
        let duration = self.entry_duration_ms;
        self.entries.retain(|entry| now_ms - entry.at_ms < duration);
    }

    pub fn iter(&self) -> impl Iterator<Item = &KillFeedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
