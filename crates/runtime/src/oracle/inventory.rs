//! Per-actor inventories served through [`wand_core::Inventory`].
use std::collections::HashMap;

use wand_core::{ActorId, Inventory, ItemStack, MaterialKind, ToolState};

/// Slots and held tool of one actor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActorInventory {
    slots: Vec<Option<ItemStack>>,
    held: Option<ToolState>,
}

impl ActorInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `stack` into the first free slot, growing the inventory if none is free.
    pub fn give(&mut self, stack: ItemStack) -> usize {
        match self.slots.iter().position(Option::is_none) {
            Some(index) => {
                self.slots[index] = Some(stack);
                index
            }
            None => {
                self.slots.push(Some(stack));
                self.slots.len() - 1
            }
        }
    }

    pub fn hold(&mut self, tool: Option<ToolState>) {
        self.held = tool;
    }

    pub fn held(&self) -> Option<&ToolState> {
        self.held.as_ref()
    }

    pub fn slots(&self) -> &[Option<ItemStack>] {
        &self.slots
    }

    /// Units of `material` across every slot, tagged or not.
    pub fn total(&self, material: MaterialKind) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|stack| stack.material == material)
            .fold(0u32, |total, stack| total.saturating_add(stack.count))
    }
}

/// Inventories of every connected actor. Unknown actors look empty.
#[derive(Clone, Debug, Default)]
pub struct InventoryStore {
    actors: HashMap<ActorId, ActorInventory>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the actor's inventory, creating an empty one if needed.
    pub fn entry(&mut self, actor: ActorId) -> &mut ActorInventory {
        self.actors.entry(actor).or_default()
    }

    pub fn get(&self, actor: ActorId) -> Option<&ActorInventory> {
        self.actors.get(&actor)
    }

    pub fn remove(&mut self, actor: ActorId) -> Option<ActorInventory> {
        self.actors.remove(&actor)
    }

    pub fn total(&self, actor: ActorId, material: MaterialKind) -> u32 {
        self.get(actor).map_or(0, |inventory| inventory.total(material))
    }
}

impl Inventory for InventoryStore {
    fn slot_count(&self, actor: ActorId) -> usize {
        self.get(actor).map_or(0, |inventory| inventory.slots.len())
    }

    fn slot(&self, actor: ActorId, index: usize) -> Option<&ItemStack> {
        self.actors.get(&actor)?.slots.get(index)?.as_ref()
    }

    fn slot_mut(&mut self, actor: ActorId, index: usize) -> Option<&mut ItemStack> {
        self.actors.get_mut(&actor)?.slots.get_mut(index)?.as_mut()
    }

    fn clear_slot(&mut self, actor: ActorId, index: usize) {
        if let Some(slot) = self
            .actors
            .get_mut(&actor)
            .and_then(|inventory| inventory.slots.get_mut(index))
        {
            *slot = None;
        }
    }

    fn held_tool(&self, actor: ActorId) -> Option<&ToolState> {
        self.actors.get(&actor)?.held.as_ref()
    }

    fn held_tool_mut(&mut self, actor: ActorId) -> Option<&mut ToolState> {
        self.actors.get_mut(&actor)?.held.as_mut()
    }

    fn take_held_tool(&mut self, actor: ActorId) -> Option<ToolState> {
        self.actors.get_mut(&actor)?.held.take()
    }
}
