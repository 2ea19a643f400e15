use crate::types::{ActorId, ItemStack, ToolState};

/// Per-actor inventory owned by the surrounding application.
///
/// Slots are addressed by a stable index so scans always visit stock in the
/// same order. Unknown actors behave like empty inventories.
pub trait Inventory {
    fn slot_count(&self, actor: ActorId) -> usize;

    fn slot(&self, actor: ActorId, index: usize) -> Option<&ItemStack>;

    fn slot_mut(&mut self, actor: ActorId, index: usize) -> Option<&mut ItemStack>;

    /// Empties a slot entirely.
    fn clear_slot(&mut self, actor: ActorId, index: usize);

    /// Returns the tool the actor is holding, if any.
    fn held_tool(&self, actor: ActorId) -> Option<&ToolState>;

    fn held_tool_mut(&mut self, actor: ActorId) -> Option<&mut ToolState>;

    /// Removes the held tool from the actor's possession.
    fn take_held_tool(&mut self, actor: ActorId) -> Option<ToolState>;
}
