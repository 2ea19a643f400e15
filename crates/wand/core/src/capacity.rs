//! Capacity resolution: tool profile + enchantment bonus + available material.
//!
//! Bonus fractions are converted to integer basis points when the policy is
//! built so the multiplier and the ceiling are exact:
//!
//! ```text
//! capacity = ceil(base × (10_000 + bonus_bp) / 10_000)
//! ```
use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use crate::config::{ConfigError, EnchantSettings, WandConfig};
use crate::types::{Durability, Supply, ToolProfile, ToolState, WandTier};

const BASIS_POINTS: u64 = 10_000;

/// Step table of enchantment bonuses with linear extrapolation past the last step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BonusTable {
    enabled: bool,
    /// (level, bonus in basis points), sorted by level, bonus non-decreasing.
    steps: Vec<(u32, u32)>,
    increment_bp: u32,
}

impl BonusTable {
    pub fn from_settings(settings: &EnchantSettings) -> Result<Self, ConfigError> {
        let increment_bp =
            to_basis_points(settings.default_increment).ok_or(ConfigError::InvalidIncrement)?;

        let levels = if settings.levels.is_empty() {
            EnchantSettings::default_levels()
        } else {
            settings.levels.clone()
        };

        let mut by_level = BTreeMap::new();
        for entry in &levels {
            if entry.level == 0 {
                return Err(ConfigError::ZeroLevel);
            }
            let bp = to_basis_points(entry.bonus).ok_or(ConfigError::InvalidBonus(entry.level))?;
            if by_level.insert(entry.level, bp).is_some() {
                return Err(ConfigError::DuplicateLevel(entry.level));
            }
        }

        let steps: Vec<(u32, u32)> = by_level.into_iter().collect();
        if let Some(pair) = steps.windows(2).find(|pair| pair[1].1 < pair[0].1) {
            return Err(ConfigError::NonMonotonicBonus(pair[1].0));
        }

        Ok(Self {
            enabled: settings.enabled,
            steps,
            increment_bp,
        })
    }

    /// Bonus for `level` in basis points.
    ///
    /// Levels between configured steps take the nearest lower step; levels
    /// below the first step grant nothing; levels beyond the last step grow by
    /// the default increment per level.
    pub fn factor_bp(&self, level: u32) -> u32 {
        if level == 0 || !self.enabled {
            return 0;
        }
        let Some(&(last_level, last_bp)) = self.steps.last() else {
            return 0;
        };
        if level > last_level {
            let extra = u64::from(self.increment_bp) * u64::from(level - last_level);
            return u32::try_from(u64::from(last_bp) + extra).unwrap_or(u32::MAX);
        }
        self.steps
            .iter()
            .rev()
            .find(|(step, _)| *step <= level)
            .map_or(0, |(_, bp)| *bp)
    }
}

fn to_basis_points(fraction: f64) -> Option<u32> {
    if !fraction.is_finite() || fraction < 0.0 {
        return None;
    }
    let bp = (fraction * BASIS_POINTS as f64).round();
    (bp <= f64::from(u32::MAX)).then_some(bp as u32)
}

/// Resolves tool profiles and the capacity granted to a single interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapacityPolicy {
    profiles: BTreeMap<WandTier, ToolProfile>,
    bonus: BonusTable,
}

impl CapacityPolicy {
    /// Builds the policy from tier defaults plus configuration overrides.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for unknown tool ids, zero capacities and
    /// malformed enchantment tables.
    pub fn from_config(config: &WandConfig) -> Result<Self, ConfigError> {
        let mut profiles: BTreeMap<WandTier, ToolProfile> = WandTier::iter()
            .map(|tier| (tier, tier.default_profile()))
            .collect();

        for (id, tool) in &config.tools {
            let tier: WandTier = id
                .parse()
                .map_err(|_| ConfigError::UnknownTool(id.clone()))?;
            let profile = profiles.entry(tier).or_insert_with(|| tier.default_profile());
            if let Some(capacity) = tool.capacity {
                profile.capacity = capacity;
            }
            if let Some(durability) = tool.durability {
                profile.durability = Durability::Limited(durability);
            }
            if tool.unbreakable == Some(true) {
                profile.durability = Durability::Unlimited;
            }
            if let Some(enabled) = tool.enabled {
                profile.enabled = enabled;
            }
            if profile.capacity == 0 {
                return Err(ConfigError::ZeroCapacity(tier));
            }
        }

        Ok(Self {
            profiles,
            bonus: BonusTable::from_settings(&config.enchant)?,
        })
    }

    pub fn profile(&self, tier: WandTier) -> ToolProfile {
        self.profiles
            .get(&tier)
            .copied()
            .unwrap_or_else(|| tier.default_profile())
    }

    pub fn bonus_table(&self) -> &BonusTable {
        &self.bonus
    }

    /// Base capacity multiplied by `1 + bonus(level)`, rounded up.
    ///
    /// Never returns less than the unmodified base.
    pub fn resolve_capacity(&self, profile: &ToolProfile, level: u32) -> u32 {
        let base = profile.capacity;
        let bp = self.bonus.factor_bp(level);
        if bp == 0 {
            return base;
        }
        // Widened so the largest base at the largest bonus cannot wrap.
        let scaled = u128::from(base) * (u128::from(BASIS_POINTS) + u128::from(bp));
        let rounded = scaled.div_ceil(u128::from(BASIS_POINTS));
        u32::try_from(rounded).unwrap_or(u32::MAX).max(base)
    }

    /// Capacity handed to the planner: the resolved capacity of the held tool,
    /// clamped to what the actor can pay for.
    pub fn plan_capacity(&self, tool: &ToolState, available: Supply) -> u32 {
        let profile = self.profile(tool.tier);
        available.cap(self.resolve_capacity(&profile, tool.enchant_level))
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        // The built-in configuration is always valid.
        Self {
            profiles: WandTier::iter()
                .map(|tier| (tier, tier.default_profile()))
                .collect(),
            bonus: BonusTable {
                enabled: true,
                steps: vec![(1, 1_000), (2, 2_500), (3, 4_000)],
                increment_bp: 1_500,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LevelBonus, ToolOverride};

    #[test]
    fn default_policy_matches_default_config() {
        let built = CapacityPolicy::from_config(&WandConfig::default()).unwrap();
        assert_eq!(built, CapacityPolicy::default());
    }

    #[test]
    fn enchant_rounds_up() {
        let policy = CapacityPolicy::default();
        let stone = policy.profile(WandTier::Stone);
        // 9 × 1.10 = 9.9 → 10
        assert_eq!(policy.resolve_capacity(&stone, 1), 10);
        // 9 × 1.25 = 11.25 → 12
        assert_eq!(policy.resolve_capacity(&stone, 2), 12);
        // 9 × 1.40 = 12.6 → 13
        assert_eq!(policy.resolve_capacity(&stone, 3), 13);
        assert_eq!(policy.resolve_capacity(&stone, 0), 9);
    }

    #[test]
    fn exact_products_are_not_inflated() {
        let policy = CapacityPolicy::default();
        let profile = ToolProfile {
            capacity: 100,
            ..WandTier::Stone.default_profile()
        };
        // 100 × 1.10 is exactly 110.
        assert_eq!(policy.resolve_capacity(&profile, 1), 110);
    }

    #[test]
    fn huge_capacity_saturates() {
        let policy = CapacityPolicy::default();
        let profile = ToolProfile {
            capacity: u32::MAX,
            ..WandTier::Infinity.default_profile()
        };
        assert_eq!(policy.bonus_table().factor_bp(u32::MAX), u32::MAX);
        assert_eq!(policy.resolve_capacity(&profile, u32::MAX), u32::MAX);
        assert_eq!(policy.resolve_capacity(&profile, 1), u32::MAX);
    }

    #[test]
    fn extrapolates_beyond_last_level() {
        let policy = CapacityPolicy::default();
        // 0.40 + 0.15 × 2 = 0.70
        assert_eq!(policy.bonus_table().factor_bp(5), 7_000);
        let diamond = policy.profile(WandTier::Diamond);
        // 128 × 1.70 = 217.6 → 218
        assert_eq!(policy.resolve_capacity(&diamond, 5), 218);
    }

    #[test]
    fn capacity_is_monotonic_in_level() {
        let policy = CapacityPolicy::default();
        for tier in WandTier::iter() {
            let profile = policy.profile(tier);
            let mut previous = policy.resolve_capacity(&profile, 0);
            assert_eq!(previous, profile.capacity);
            for level in 1..=20 {
                let current = policy.resolve_capacity(&profile, level);
                assert!(current >= previous, "{tier} level {level}");
                previous = current;
            }
        }
    }

    #[test]
    fn sparse_levels_use_lower_step() {
        let mut config = WandConfig::default();
        config.enchant.levels = vec![LevelBonus::new(2, 0.20), LevelBonus::new(5, 0.50)];
        let policy = CapacityPolicy::from_config(&config).unwrap();
        let table = policy.bonus_table();
        assert_eq!(table.factor_bp(1), 0);
        assert_eq!(table.factor_bp(2), 2_000);
        assert_eq!(table.factor_bp(4), 2_000);
        assert_eq!(table.factor_bp(5), 5_000);
        assert_eq!(table.factor_bp(6), 6_500);
    }

    #[test]
    fn disabled_enchant_grants_nothing() {
        let mut config = WandConfig::default();
        config.enchant.enabled = false;
        let policy = CapacityPolicy::from_config(&config).unwrap();
        let iron = policy.profile(WandTier::Iron);
        assert_eq!(policy.resolve_capacity(&iron, 3), 27);
    }

    #[test]
    fn overrides_apply() {
        let config = WandConfig::default()
            .with_tool(
                WandTier::Stone,
                ToolOverride {
                    capacity: Some(16),
                    unbreakable: Some(true),
                    ..Default::default()
                },
            )
            .with_tool(
                WandTier::Iron,
                ToolOverride {
                    enabled: Some(false),
                    durability: Some(10),
                    ..Default::default()
                },
            );
        let policy = CapacityPolicy::from_config(&config).unwrap();
        let stone = policy.profile(WandTier::Stone);
        assert_eq!(stone.capacity, 16);
        assert!(stone.durability.is_unlimited());
        let iron = policy.profile(WandTier::Iron);
        assert!(!iron.enabled);
        assert_eq!(iron.durability, Durability::Limited(10));
    }

    #[test]
    fn rejects_invalid_configuration() {
        let mut config = WandConfig::default();
        config.tools.insert("gold".into(), ToolOverride::default());
        assert_eq!(
            CapacityPolicy::from_config(&config),
            Err(ConfigError::UnknownTool("gold".into()))
        );

        let config = WandConfig::default().with_tool(
            WandTier::Diamond,
            ToolOverride {
                capacity: Some(0),
                ..Default::default()
            },
        );
        assert_eq!(
            CapacityPolicy::from_config(&config),
            Err(ConfigError::ZeroCapacity(WandTier::Diamond))
        );

        let mut config = WandConfig::default();
        config.enchant.levels = vec![LevelBonus::new(1, 0.30), LevelBonus::new(2, 0.20)];
        assert_eq!(
            CapacityPolicy::from_config(&config),
            Err(ConfigError::NonMonotonicBonus(2))
        );

        let mut config = WandConfig::default();
        config.enchant.default_increment = -0.1;
        assert_eq!(
            CapacityPolicy::from_config(&config),
            Err(ConfigError::InvalidIncrement)
        );
    }

    #[test]
    fn plan_capacity_is_clamped_by_supply() {
        let policy = CapacityPolicy::default();
        let tool = ToolState::new(WandTier::Stone);
        assert_eq!(policy.plan_capacity(&tool, Supply::Finite(3)), 3);
        assert_eq!(policy.plan_capacity(&tool, Supply::Finite(64)), 9);
        assert_eq!(policy.plan_capacity(&tool, Supply::Unlimited), 9);
        assert_eq!(policy.plan_capacity(&tool, Supply::NONE), 0);
    }
}
