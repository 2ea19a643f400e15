//! Per-cell placement checks shared by the planner and the executor.
//!
//! Each phase runs a different subset: a cheap structural filter when a
//! neighbour is discovered, the full set when it is dequeued, and everything
//! except support at commit time.
use bitflags::bitflags;

use crate::env::{OracleError, PlacementAuthority, WorldView};
use crate::error::{ErrorSeverity, WandError};
use crate::types::{ActorId, Cell, Direction, MaterialKind};

bitflags! {
    /// Selects which conditions [`check_cell`] verifies.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Checks: u8 {
        /// Cell is empty or fluid.
        const REPLACEABLE = 1 << 0;
        /// The authority allows placing the material here.
        const AUTHORIZED  = 1 << 1;
        /// No blocking occupant stands in the cell.
        const UNOCCUPIED  = 1 << 2;
        /// The cell behind, along the support axis, holds the material.
        const SUPPORTED   = 1 << 3;
    }
}

impl Checks {
    /// Structural filter applied when a neighbour is first discovered.
    pub const ENQUEUE: Self = Self::REPLACEABLE.union(Self::SUPPORTED);
    /// Authoritative filter applied when a queued cell is accepted.
    pub const DEQUEUE: Self = Self::all();
}

/// Why a single cell was not accepted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("cell is not replaceable")]
    NotReplaceable,

    #[error("placement not authorized")]
    Unauthorized,

    #[error("blocking occupant in cell")]
    Occupied,

    #[error("no matching support behind cell")]
    Unsupported,

    #[error(transparent)]
    Probe(#[from] OracleError),
}

impl WandError for Rejection {
    fn severity(&self) -> ErrorSeverity {
        use Rejection::*;
        match self {
            NotReplaceable | Occupied => ErrorSeverity::Recoverable,
            Unauthorized | Unsupported => ErrorSeverity::Validation,
            Probe(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use Rejection::*;
        match self {
            NotReplaceable => "REJECT_NOT_REPLACEABLE",
            Unauthorized => "REJECT_UNAUTHORIZED",
            Occupied => "REJECT_OCCUPIED",
            Unsupported => "REJECT_UNSUPPORTED",
            Probe(error) => error.error_code(),
        }
    }
}

/// Everything a check needs to know about the placement being attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub actor: ActorId,
    pub material: MaterialKind,
    pub face: Direction,
}

/// Runs the selected checks on `cell`, cheapest first.
pub fn check_cell<W, A>(
    world: &W,
    authority: &A,
    placement: &Placement,
    cell: Cell,
    checks: Checks,
) -> Result<(), Rejection>
where
    W: WorldView + ?Sized,
    A: PlacementAuthority + ?Sized,
{
    if checks.contains(Checks::REPLACEABLE) && !world.cell(cell)?.is_replaceable() {
        return Err(Rejection::NotReplaceable);
    }
    if checks.contains(Checks::AUTHORIZED)
        && !authority.may_place(placement.actor, cell, placement.material)
    {
        return Err(Rejection::Unauthorized);
    }
    if checks.contains(Checks::UNOCCUPIED) && world.has_blocking_occupant(cell)? {
        return Err(Rejection::Occupied);
    }
    if checks.contains(Checks::SUPPORTED) {
        let support = cell.relative(placement.face.opposite());
        if !world.cell(support)?.is_solid(placement.material) {
            return Err(Rejection::Unsupported);
        }
    }
    Ok(())
}
