use super::MaterialKind;

/// Opaque handle an external bonus-pool provider attaches to the stacks it owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackTag(pub u64);

/// One inventory slot's worth of material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub material: MaterialKind,
    pub count: u32,
    pub tag: Option<StackTag>,
}

impl ItemStack {
    pub const fn new(material: MaterialKind, count: u32) -> Self {
        Self {
            material,
            count,
            tag: None,
        }
    }

    #[must_use]
    pub const fn tagged(mut self, tag: StackTag) -> Self {
        self.tag = Some(tag);
        self
    }
}

/// A unit count that may be unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Supply {
    Finite(u32),
    Unlimited,
}

impl Supply {
    pub const NONE: Self = Supply::Finite(0);

    pub const fn is_empty(self) -> bool {
        matches!(self, Supply::Finite(0))
    }

    pub const fn is_unlimited(self) -> bool {
        matches!(self, Supply::Unlimited)
    }

    /// Clamps `limit` to this supply.
    pub fn cap(self, limit: u32) -> u32 {
        match self {
            Supply::Finite(available) => available.min(limit),
            Supply::Unlimited => limit,
        }
    }

    pub fn saturating_add(self, other: Supply) -> Supply {
        match (self, other) {
            (Supply::Finite(a), Supply::Finite(b)) => Supply::Finite(a.saturating_add(b)),
            _ => Supply::Unlimited,
        }
    }
}

impl Default for Supply {
    fn default() -> Self {
        Self::NONE
    }
}
