use crate::types::ActorId;

/// Emitted after a commit that placed at least one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletionSignal {
    pub actor: ActorId,
    pub placed: u32,
    pub tool_broken: bool,
}

/// Receives completion signals so the caller can surface feedback (sounds, messages).
pub trait FeedbackSink {
    fn completed(&mut self, signal: CompletionSignal);
}

/// Sink that drops every signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFeedback;

impl FeedbackSink for NoFeedback {
    fn completed(&mut self, _signal: CompletionSignal) {}
}

impl FeedbackSink for Vec<CompletionSignal> {
    fn completed(&mut self, signal: CompletionSignal) {
        self.push(signal);
    }
}
