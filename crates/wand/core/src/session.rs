//! Per-actor interaction state owned by the caller.
//!
//! A session is created on an actor's first interaction, reset when the actor
//! switches held tool and dropped when the actor disconnects. Time is always
//! supplied by the caller in milliseconds.
use std::collections::BTreeMap;

use crate::types::ActorId;

/// State kept for one actor between interactions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorSession {
    /// Time of the last accepted interaction.
    pub last_interaction_ms: Option<u64>,
    /// Number of accepted interactions since the session was created or reset.
    pub interactions: u32,
}

impl ActorSession {
    /// Returns true if an interaction at `now_ms` falls inside the cooldown window.
    pub fn is_cooling_down(&self, now_ms: u64, cooldown_ms: u64) -> bool {
        self.last_interaction_ms
            .is_some_and(|last| now_ms.saturating_sub(last) < cooldown_ms)
    }
}

/// Cooldown bookkeeping for every connected actor.
#[derive(Clone, Debug, Default)]
pub struct Sessions {
    cooldown_ms: u64,
    by_actor: BTreeMap<ActorId, ActorSession>,
}

impl Sessions {
    pub fn new(cooldown_ms: u64) -> Self {
        Self {
            cooldown_ms,
            by_actor: BTreeMap::new(),
        }
    }

    pub fn cooldown_ms(&self) -> u64 {
        self.cooldown_ms
    }

    /// Records an interaction at `now_ms`, creating the session if needed.
    ///
    /// Returns false without touching the timestamp when the actor is still
    /// cooling down.
    pub fn try_begin(&mut self, actor: ActorId, now_ms: u64) -> bool {
        let session = self.by_actor.entry(actor).or_default();
        if session.is_cooling_down(now_ms, self.cooldown_ms) {
            return false;
        }
        session.last_interaction_ms = Some(now_ms);
        session.interactions = session.interactions.saturating_add(1);
        true
    }

    /// Resets an actor's session, e.g. after switching held tool.
    pub fn clear(&mut self, actor: ActorId) {
        if let Some(session) = self.by_actor.get_mut(&actor) {
            *session = ActorSession::default();
        }
    }

    /// Drops an actor's session on disconnect.
    pub fn remove(&mut self, actor: ActorId) -> Option<ActorSession> {
        self.by_actor.remove(&actor)
    }

    pub fn get(&self, actor: ActorId) -> Option<&ActorSession> {
        self.by_actor.get(&actor)
    }

    pub fn len(&self) -> usize {
        self.by_actor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_actor.is_empty()
    }
}
