use crate::types::{Cell, Direction, MaterialKind};

/// Ordered, capacity-bounded set of cells chosen for one interaction.
///
/// Cells are kept in BFS discovery order; that order decides which cells win
/// when material runs out during commit, and is what previews render.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementPlan {
    origin: Cell,
    face: Direction,
    material: MaterialKind,
    capacity: u32,
    cells: Vec<Cell>,
}

impl PlacementPlan {
    pub(crate) fn empty(origin: Cell, face: Direction, material: MaterialKind, capacity: u32) -> Self {
        Self {
            origin,
            face,
            material,
            capacity,
            cells: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    pub fn origin(&self) -> Cell {
        self.origin
    }

    pub fn face(&self) -> Direction {
        self.face
    }

    pub fn material(&self) -> MaterialKind {
        self.material
    }

    /// Capacity bound the search ran with.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.cells.len() >= self.capacity as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}
