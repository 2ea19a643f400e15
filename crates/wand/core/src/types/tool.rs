//! Tool tiers, their static profiles and the per-item wear state.

/// Built-in tool tiers.
///
/// The string form (`stone`, `iron`, ...) is the key used in configuration.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WandTier {
    Stone,
    Iron,
    Diamond,
    Netherite,
    Infinity,
}

impl WandTier {
    /// Returns the built-in profile for this tier before configuration overrides.
    pub const fn default_profile(self) -> ToolProfile {
        let (capacity, durability) = match self {
            WandTier::Stone => (9, Durability::Limited(131)),
            WandTier::Iron => (27, Durability::Limited(250)),
            WandTier::Diamond => (128, Durability::Limited(1561)),
            WandTier::Netherite => (256, Durability::Limited(2031)),
            WandTier::Infinity => (1024, Durability::Unlimited),
        };
        ToolProfile {
            tier: self,
            capacity,
            durability,
            enabled: true,
        }
    }
}

/// Maximum wear a tool can take before it breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Durability {
    Limited(u32),
    Unlimited,
}

impl Durability {
    pub const fn is_unlimited(self) -> bool {
        matches!(self, Durability::Unlimited)
    }
}

/// Immutable per-tier tool description, resolved from defaults and configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolProfile {
    pub tier: WandTier,
    /// Base number of cells a single interaction may fill. Always > 0.
    pub capacity: u32,
    pub durability: Durability,
    pub enabled: bool,
}

/// Result of applying wear to a tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WearOutcome {
    Intact,
    Broken,
}

/// Mutable state of one held tool item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolState {
    pub tier: WandTier,
    /// Accumulated damage.
    pub wear: u32,
    /// Level of the capacity-extending enchantment, 0 when absent.
    pub enchant_level: u32,
}

impl ToolState {
    pub const fn new(tier: WandTier) -> Self {
        Self {
            tier,
            wear: 0,
            enchant_level: 0,
        }
    }

    #[must_use]
    pub const fn with_wear(mut self, wear: u32) -> Self {
        self.wear = wear;
        self
    }

    #[must_use]
    pub const fn with_enchant_level(mut self, level: u32) -> Self {
        self.enchant_level = level;
        self
    }

    /// Remaining uses before the tool breaks, `None` for unlimited tools.
    pub fn remaining(&self, profile: &ToolProfile) -> Option<u32> {
        match profile.durability {
            Durability::Limited(max) => Some(max.saturating_sub(self.wear)),
            Durability::Unlimited => None,
        }
    }

    /// Adds `amount` wear. The tool breaks once accumulated wear meets or
    /// exceeds the profile's durability; wear is not recorded in that case
    /// because the item is about to be removed.
    pub fn apply_wear(&mut self, amount: u32, profile: &ToolProfile) -> WearOutcome {
        let Durability::Limited(max) = profile.durability else {
            return WearOutcome::Intact;
        };
        let wear = self.wear.saturating_add(amount);
        if wear >= max {
            return WearOutcome::Broken;
        }
        self.wear = wear;
        WearOutcome::Intact
    }

    /// Removes up to `amount` wear. Unlimited tools carry no wear to repair.
    pub fn repair(&mut self, amount: u32, profile: &ToolProfile) {
        if profile.durability.is_unlimited() {
            return;
        }
        self.wear = self.wear.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tiers() {
        let stone = WandTier::Stone.default_profile();
        assert_eq!(stone.capacity, 9);
        assert_eq!(stone.durability, Durability::Limited(131));
        assert!(WandTier::Infinity.default_profile().durability.is_unlimited());
        assert_eq!("netherite".parse::<WandTier>().unwrap(), WandTier::Netherite);
    }

    #[test]
    fn wear_breaks_at_durability() {
        let profile = WandTier::Stone.default_profile();
        let mut tool = ToolState::new(WandTier::Stone).with_wear(120);
        assert_eq!(tool.remaining(&profile), Some(11));
        assert_eq!(tool.apply_wear(10, &profile), WearOutcome::Intact);
        assert_eq!(tool.wear, 130);
        assert_eq!(tool.apply_wear(1, &profile), WearOutcome::Broken);
    }

    #[test]
    fn unlimited_tools_never_wear() {
        let profile = WandTier::Infinity.default_profile();
        let mut tool = ToolState::new(WandTier::Infinity);
        assert_eq!(tool.apply_wear(u32::MAX, &profile), WearOutcome::Intact);
        assert_eq!(tool.wear, 0);
        assert_eq!(tool.remaining(&profile), None);
    }

    #[test]
    fn repair_saturates_at_zero() {
        let profile = WandTier::Iron.default_profile();
        let mut tool = ToolState::new(WandTier::Iron).with_wear(30);
        tool.repair(10, &profile);
        assert_eq!(tool.wear, 20);
        tool.repair(100, &profile);
        assert_eq!(tool.wear, 0);
    }
}
