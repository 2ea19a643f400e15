//! Tunable parameters for tools, the capacity enchantment and the resource pool.
//!
//! [`WandConfig`] is plain data: loaders fill it from a file, and
//! [`crate::CapacityPolicy::from_config`] validates it once.
use std::collections::BTreeMap;

use crate::error::{ErrorSeverity, WandError};
use crate::types::WandTier;

/// Complete wand configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WandConfig {
    /// Per-tool overrides keyed by tool id (`stone`, `iron`, ...).
    pub tools: BTreeMap<String, ToolOverride>,
    pub enchant: EnchantSettings,
    pub pool: PoolPolicy,
    /// Minimum time between two interactions of the same actor.
    pub cooldown_ms: u64,
}

impl WandConfig {
    // ===== runtime-tunable defaults =====
    /// 10 server ticks of 50 ms.
    pub const DEFAULT_COOLDOWN_MS: u64 = 500;

    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
            enchant: EnchantSettings::default(),
            pool: PoolPolicy::default(),
            cooldown_ms: Self::DEFAULT_COOLDOWN_MS,
        }
    }

    /// Adds or replaces the override for one tier (builder pattern).
    #[must_use]
    pub fn with_tool(mut self, tier: WandTier, tool: ToolOverride) -> Self {
        self.tools.insert(tier.as_ref().to_owned(), tool);
        self
    }

    #[must_use]
    pub fn with_pool(mut self, pool: PoolPolicy) -> Self {
        self.pool = pool;
        self
    }
}

impl Default for WandConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Optional overrides of a tier's built-in profile. Unset fields keep the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ToolOverride {
    pub capacity: Option<u32>,
    pub durability: Option<u32>,
    /// Takes precedence over `durability` when true.
    pub unbreakable: Option<bool>,
    pub enabled: Option<bool>,
}

/// Capacity enchantment table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnchantSettings {
    pub enabled: bool,
    /// Bonus added per level beyond the highest configured level.
    pub default_increment: f64,
    /// Bonus fraction per level (`0.10` = +10%). An empty list uses the defaults.
    pub levels: Vec<LevelBonus>,
}

impl EnchantSettings {
    pub const DEFAULT_INCREMENT: f64 = 0.15;

    pub fn default_levels() -> Vec<LevelBonus> {
        vec![
            LevelBonus::new(1, 0.10),
            LevelBonus::new(2, 0.25),
            LevelBonus::new(3, 0.40),
        ]
    }
}

impl Default for EnchantSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            default_increment: Self::DEFAULT_INCREMENT,
            levels: Self::default_levels(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelBonus {
    pub level: u32,
    pub bonus: f64,
}

impl LevelBonus {
    pub const fn new(level: u32, bonus: f64) -> Self {
        Self { level, bonus }
    }
}

/// How the two resource sources are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PoolPolicy {
    /// Draw from the bonus pool before ordinary stock.
    pub prefer_bonus_first: bool,
    /// Only actors holding the provider's use permission may draw bonus units.
    pub require_bonus_permission: bool,
}

impl Default for PoolPolicy {
    fn default() -> Self {
        Self {
            prefer_bonus_first: true,
            require_bonus_permission: true,
        }
    }
}

/// Invalid configuration, reported when building a [`crate::CapacityPolicy`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown tool id '{0}'")]
    UnknownTool(String),

    #[error("tool '{0}' has zero capacity")]
    ZeroCapacity(WandTier),

    #[error("enchant level must be at least 1")]
    ZeroLevel,

    #[error("enchant level {0} is configured twice")]
    DuplicateLevel(u32),

    #[error("enchant level {0} has a negative or non-finite bonus")]
    InvalidBonus(u32),

    #[error("enchant level {0} grants less than a lower level")]
    NonMonotonicBonus(u32),

    #[error("default increment must be a finite, non-negative fraction")]
    InvalidIncrement,
}

impl WandError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use ConfigError::*;
        match self {
            UnknownTool(_) => "CONFIG_UNKNOWN_TOOL",
            ZeroCapacity(_) => "CONFIG_ZERO_CAPACITY",
            ZeroLevel => "CONFIG_ZERO_LEVEL",
            DuplicateLevel(_) => "CONFIG_DUPLICATE_LEVEL",
            InvalidBonus(_) => "CONFIG_INVALID_BONUS",
            NonMonotonicBonus(_) => "CONFIG_NON_MONOTONIC_BONUS",
            InvalidIncrement => "CONFIG_INVALID_INCREMENT",
        }
    }
}
