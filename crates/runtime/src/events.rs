//! Wand events recorded for the host to surface (sounds, chat messages).
use wand_core::{ActorId, CompletionSignal, FeedbackSink};

/// High-level occurrences produced by interactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WandEvent {
    /// At least one cell was placed.
    Placed { actor: ActorId, count: u32 },

    /// The held wand wore out and was removed.
    ToolBroken { actor: ActorId },

    /// The interaction was accepted but nothing could be placed.
    NothingToPlace { actor: ActorId },
}

impl WandEvent {
    pub fn actor(&self) -> ActorId {
        match self {
            WandEvent::Placed { actor, .. }
            | WandEvent::ToolBroken { actor }
            | WandEvent::NothingToPlace { actor } => *actor,
        }
    }
}

/// Append-only event log; drained by the host after each tick.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<WandEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: WandEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[WandEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<WandEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FeedbackSink for EventLog {
    fn completed(&mut self, signal: CompletionSignal) {
        self.record(WandEvent::Placed {
            actor: signal.actor,
            count: signal.placed,
        });
        if signal.tool_broken {
            self.record(WandEvent::ToolBroken {
                actor: signal.actor,
            });
        }
    }
}
