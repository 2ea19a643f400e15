use crate::types::{Cell, CellState, MaterialKind, OccupantKind};

use super::OracleError;

/// Read access to the world grid.
///
/// Implementations resolve cells by value on every call; the core never keeps
/// a handle into the world across calls.
pub trait WorldView {
    fn cell(&self, cell: Cell) -> Result<CellState, OracleError>;

    /// Returns the kinds of every occupant whose body overlaps `cell`.
    fn occupants(&self, cell: Cell) -> Result<Vec<OccupantKind>, OracleError>;

    fn has_blocking_occupant(&self, cell: Cell) -> Result<bool, OracleError> {
        Ok(self
            .occupants(cell)?
            .into_iter()
            .any(OccupantKind::is_blocking))
    }
}

/// Mutable access to the world grid, used only by the commit phase.
pub trait WorldMut: WorldView {
    fn set_material(&mut self, cell: Cell, material: MaterialKind) -> Result<(), OracleError>;
}
