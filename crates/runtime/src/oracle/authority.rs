//! Protection table served through [`wand_core::PlacementAuthority`].
use std::collections::{HashMap, HashSet};

use wand_core::{ActorId, Cell, MaterialKind, PlacementAuthority, WandTier};

use super::Region;

/// Protected areas plus per-actor tool restrictions.
///
/// Everything is allowed unless a rule forbids it.
#[derive(Clone, Debug, Default)]
pub struct ProtectionTable {
    protected: Vec<Region>,
    denied_cells: HashSet<Cell>,
    forbidden_tiers: HashMap<ActorId, HashSet<WandTier>>,
}

impl ProtectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Protects every cell of `region` against placement by anyone.
    pub fn protect(&mut self, region: Region) {
        self.protected.push(region);
    }

    pub fn deny_cell(&mut self, cell: Cell) {
        self.denied_cells.insert(cell);
    }

    pub fn allow_cell(&mut self, cell: Cell) {
        self.denied_cells.remove(&cell);
    }

    /// Withholds the permission to use `tier` from `actor`.
    pub fn forbid_tier(&mut self, actor: ActorId, tier: WandTier) {
        self.forbidden_tiers.entry(actor).or_default().insert(tier);
    }

    pub fn is_protected(&self, cell: Cell) -> bool {
        self.denied_cells.contains(&cell) || self.protected.iter().any(|region| region.contains(cell))
    }
}

impl PlacementAuthority for ProtectionTable {
    fn may_place(&self, _actor: ActorId, cell: Cell, _material: MaterialKind) -> bool {
        !self.is_protected(cell)
    }

    fn may_use_tool(&self, actor: ActorId, tier: WandTier) -> bool {
        self.forbidden_tiers
            .get(&actor)
            .is_none_or(|tiers| !tiers.contains(&tier))
    }
}
