//! In-memory voxel grid served through [`wand_core::WorldView`] and [`wand_core::WorldMut`].
use std::collections::HashMap;

use wand_core::{Cell, CellState, MaterialKind, OccupantKind, OracleError, WorldMut, WorldView};

/// Axis-aligned box of cells, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub min: Cell,
    pub max: Cell,
}

impl Region {
    pub fn new(a: Cell, b: Cell) -> Self {
        Self {
            min: Cell::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Cell::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (self.min.x..=self.max.x).contains(&cell.x)
            && (self.min.y..=self.max.y).contains(&cell.y)
            && (self.min.z..=self.max.z).contains(&cell.z)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (self.min.x..=self.max.x).flat_map(move |x| {
            (self.min.y..=self.max.y)
                .flat_map(move |y| (self.min.z..=self.max.z).map(move |z| Cell::new(x, y, z)))
        })
    }
}

/// Sparse grid: any cell not stored is empty.
///
/// When a region is set, the grid behaves like one shard of a larger world:
/// probes and writes outside it fail with [`OracleError::OutsideRegion`].
#[derive(Clone, Debug, Default)]
pub struct GridWorld {
    cells: HashMap<Cell, CellState>,
    occupants: HashMap<Cell, Vec<OccupantKind>>,
    region: Option<Region>,
}

impl GridWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the grid to `region`.
    #[must_use]
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }

    pub fn set(&mut self, cell: Cell, state: CellState) {
        if state == CellState::Empty {
            self.cells.remove(&cell);
        } else {
            self.cells.insert(cell, state);
        }
    }

    /// Sets every cell of `region` to `state`.
    pub fn fill(&mut self, region: Region, state: CellState) {
        for cell in region.cells() {
            self.set(cell, state);
        }
    }

    /// Stored state of `cell`, ignoring region bounds.
    pub fn get(&self, cell: Cell) -> CellState {
        self.cells.get(&cell).copied().unwrap_or_default()
    }

    pub fn add_occupant(&mut self, cell: Cell, kind: OccupantKind) {
        self.occupants.entry(cell).or_default().push(kind);
    }

    pub fn clear_occupants(&mut self, cell: Cell) {
        self.occupants.remove(&cell);
    }

    /// Number of cells holding `material` as a solid.
    pub fn count_solid(&self, material: MaterialKind) -> usize {
        self.cells
            .values()
            .filter(|state| state.is_solid(material))
            .count()
    }

    fn ensure_inside(&self, cell: Cell) -> Result<(), OracleError> {
        match self.region {
            Some(region) if !region.contains(cell) => Err(OracleError::OutsideRegion(cell)),
            _ => Ok(()),
        }
    }
}

impl WorldView for GridWorld {
    fn cell(&self, cell: Cell) -> Result<CellState, OracleError> {
        self.ensure_inside(cell)?;
        Ok(self.get(cell))
    }

    fn occupants(&self, cell: Cell) -> Result<Vec<OccupantKind>, OracleError> {
        self.ensure_inside(cell)?;
        Ok(self.occupants.get(&cell).cloned().unwrap_or_default())
    }
}

impl WorldMut for GridWorld {
    fn set_material(&mut self, cell: Cell, material: MaterialKind) -> Result<(), OracleError> {
        self.ensure_inside(cell)?;
        self.cells.insert(cell, CellState::Solid(material));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STONE: MaterialKind = MaterialKind(1);

    #[test]
    fn region_bounds_probes() {
        let region = Region::new(Cell::new(2, 2, 2), Cell::new(-2, -2, -2));
        let mut world = GridWorld::new().with_region(region);
        world.fill(Region::new(Cell::new(-1, 0, -1), Cell::new(1, 0, 1)), CellState::Solid(STONE));

        assert_eq!(world.count_solid(STONE), 9);
        assert_eq!(world.cell(Cell::ORIGIN), Ok(CellState::Solid(STONE)));
        assert_eq!(
            world.cell(Cell::new(3, 0, 0)),
            Err(OracleError::OutsideRegion(Cell::new(3, 0, 0)))
        );
        assert!(world.set_material(Cell::new(0, 3, 0), STONE).is_err());
    }

    #[test]
    fn emptying_a_cell_forgets_it() {
        let mut world = GridWorld::new();
        world.set(Cell::ORIGIN, CellState::Solid(STONE));
        world.set(Cell::ORIGIN, CellState::Empty);
        assert_eq!(world.count_solid(STONE), 0);
        assert_eq!(world.get(Cell::ORIGIN), CellState::Empty);
    }

    #[test]
    fn occupants_block_until_cleared() {
        let mut world = GridWorld::new();
        world.add_occupant(Cell::ORIGIN, OccupantKind::DecorativeFrame);
        assert_eq!(world.has_blocking_occupant(Cell::ORIGIN), Ok(false));
        world.add_occupant(Cell::ORIGIN, OccupantKind::Living);
        assert_eq!(world.has_blocking_occupant(Cell::ORIGIN), Ok(true));
        world.clear_occupants(Cell::ORIGIN);
        assert_eq!(world.has_blocking_occupant(Cell::ORIGIN), Ok(false));
    }
}
