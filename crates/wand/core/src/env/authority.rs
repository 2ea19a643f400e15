use crate::types::{ActorId, Cell, MaterialKind, WandTier};

/// Yes/no oracle for protection and permission checks.
pub trait PlacementAuthority {
    /// Returns true if `actor` may place `material` at `cell`.
    fn may_place(&self, actor: ActorId, cell: Cell, material: MaterialKind) -> bool;

    /// Returns true if `actor` may use a tool of `tier` at all.
    fn may_use_tool(&self, _actor: ActorId, _tier: WandTier) -> bool {
        true
    }
}

/// Authority that allows everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl PlacementAuthority for AllowAll {
    fn may_place(&self, _actor: ActorId, _cell: Cell, _material: MaterialKind) -> bool {
        true
    }
}
