//! In-crate fixtures shared by unit tests.
use std::collections::{HashMap, HashSet};

use crate::env::{Inventory, OracleError, PlacementAuthority, WorldMut, WorldView};
use crate::types::{
    ActorId, Cell, CellState, ItemStack, MaterialKind, OccupantKind, ToolState,
};

pub const STONE: MaterialKind = MaterialKind(1);
pub const DIRT: MaterialKind = MaterialKind(2);
pub const WATER: MaterialKind = MaterialKind(9);
pub const ACTOR: ActorId = ActorId(1);

#[derive(Default)]
pub struct TestWorld {
    pub cells: HashMap<Cell, CellState>,
    pub occupants: HashMap<Cell, Vec<OccupantKind>>,
    pub failing: HashSet<Cell>,
}

impl TestWorld {
    /// Solid square of `material` spanning `min..=max` on x and z at height `y`.
    pub fn platform(y: i32, min: i32, max: i32, material: MaterialKind) -> Self {
        let mut world = Self::default();
        for x in min..=max {
            for z in min..=max {
                world.cells.insert(Cell::new(x, y, z), CellState::Solid(material));
            }
        }
        world
    }

    pub fn put(&mut self, cell: Cell, state: CellState) {
        self.cells.insert(cell, state);
    }

    pub fn occupy(&mut self, cell: Cell, kind: OccupantKind) {
        self.occupants.entry(cell).or_default().push(kind);
    }
}

impl WorldView for TestWorld {
    fn cell(&self, cell: Cell) -> Result<CellState, OracleError> {
        if self.failing.contains(&cell) {
            return Err(OracleError::ProbeFailed(cell));
        }
        Ok(self.cells.get(&cell).copied().unwrap_or_default())
    }

    fn occupants(&self, cell: Cell) -> Result<Vec<OccupantKind>, OracleError> {
        Ok(self.occupants.get(&cell).cloned().unwrap_or_default())
    }
}

impl WorldMut for TestWorld {
    fn set_material(&mut self, cell: Cell, material: MaterialKind) -> Result<(), OracleError> {
        if self.failing.contains(&cell) {
            return Err(OracleError::WriteFailed(cell));
        }
        self.cells.insert(cell, CellState::Solid(material));
        Ok(())
    }
}

#[derive(Default)]
pub struct DenyCells(pub HashSet<Cell>);

impl PlacementAuthority for DenyCells {
    fn may_place(&self, _actor: ActorId, cell: Cell, _material: MaterialKind) -> bool {
        !self.0.contains(&cell)
    }
}

#[derive(Default)]
pub struct TestInventory {
    pub slots: Vec<Option<ItemStack>>,
    pub tool: Option<ToolState>,
}

impl TestInventory {
    pub fn with_stock(material: MaterialKind, count: u32, tool: ToolState) -> Self {
        Self {
            slots: vec![Some(ItemStack::new(material, count))],
            tool: Some(tool),
        }
    }

    pub fn total(&self, material: MaterialKind) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|stack| stack.material == material)
            .map(|stack| stack.count)
            .sum()
    }
}

impl Inventory for TestInventory {
    fn slot_count(&self, _actor: ActorId) -> usize {
        self.slots.len()
    }

    fn slot(&self, _actor: ActorId, index: usize) -> Option<&ItemStack> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, _actor: ActorId, index: usize) -> Option<&mut ItemStack> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    fn clear_slot(&mut self, _actor: ActorId, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }
    }

    fn held_tool(&self, _actor: ActorId) -> Option<&ToolState> {
        self.tool.as_ref()
    }

    fn held_tool_mut(&mut self, _actor: ActorId) -> Option<&mut ToolState> {
        self.tool.as_mut()
    }

    fn take_held_tool(&mut self, _actor: ActorId) -> Option<ToolState> {
        self.tool.take()
    }
}
