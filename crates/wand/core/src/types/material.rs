use std::fmt;

/// Opaque identifier for a placeable substance. Only equality matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialKind(pub u32);

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "material:{}", self.0)
    }
}

/// What currently occupies a cell, as reported by the world grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    /// Fluid-like substance (water, lava). Placement may overwrite it.
    Fluid(MaterialKind),
    /// A solid material.
    Solid(MaterialKind),
}

impl CellState {
    /// Returns true if placement may overwrite this cell.
    pub const fn is_replaceable(self) -> bool {
        matches!(self, CellState::Empty | CellState::Fluid(_))
    }

    /// Returns the solid material in this cell, if any.
    pub const fn solid(self) -> Option<MaterialKind> {
        match self {
            CellState::Solid(material) => Some(material),
            _ => None,
        }
    }

    /// Returns true if this cell holds exactly `material` as a solid.
    pub fn is_solid(self, material: MaterialKind) -> bool {
        self.solid() == Some(material)
    }
}

/// Kind of non-cell occupant standing in a cell.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum OccupantKind {
    /// Players and mobs.
    Living,
    /// Vehicles, armour stands and anything else with a body.
    Object,
    Projectile,
    DroppedItem,
    ExperienceOrb,
    Marker,
    DecorativeFrame,
    Display,
    LeashKnot,
    AreaEffect,
}

impl OccupantKind {
    /// Returns true unless this kind is on the fixed non-blocking denylist.
    pub const fn is_blocking(self) -> bool {
        !matches!(
            self,
            OccupantKind::Projectile
                | OccupantKind::DroppedItem
                | OccupantKind::ExperienceOrb
                | OccupantKind::Marker
                | OccupantKind::DecorativeFrame
                | OccupantKind::Display
                | OccupantKind::LeashKnot
                | OccupantKind::AreaEffect
        )
    }
}
