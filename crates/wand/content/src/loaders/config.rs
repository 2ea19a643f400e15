//! Wand configuration loader.

use std::path::Path;

use wand_core::{CapacityPolicy, WandConfig};

use crate::loaders::{LoadResult, read_file};

/// Loader for wand configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing sections and fields keep their built-in defaults.
    pub fn load(path: &Path) -> LoadResult<WandConfig> {
        let content = read_file(path)?;
        Self::load_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    pub fn load_str(content: &str) -> LoadResult<WandConfig> {
        let config: WandConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }

    /// Parse the bundled default configuration.
    pub fn load_default() -> LoadResult<WandConfig> {
        Self::load_str(crate::DEFAULT_CONFIG)
    }

    /// Load a config file and validate it into a [`CapacityPolicy`].
    pub fn load_policy(path: &Path) -> LoadResult<(WandConfig, CapacityPolicy)> {
        let config = Self::load(path)?;
        let policy = CapacityPolicy::from_config(&config)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
        Ok((config, policy))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use wand_core::{Durability, LevelBonus, WandTier};

    use super::*;

    #[test]
    fn bundled_file_matches_builtin_defaults() {
        let config = ConfigLoader::load_default().unwrap();
        assert_eq!(config.cooldown_ms, WandConfig::DEFAULT_COOLDOWN_MS);
        assert_eq!(config.enchant, WandConfig::default().enchant);
        assert_eq!(config.pool, WandConfig::default().pool);

        let policy = CapacityPolicy::from_config(&config).unwrap();
        assert_eq!(policy, CapacityPolicy::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::load_str(
            r#"
            [tools.iron]
            capacity = 40

            [pool]
            prefer_bonus_first = false
            "#,
        )
        .unwrap();

        assert_eq!(config.cooldown_ms, 500);
        assert!(!config.pool.prefer_bonus_first);
        assert!(config.pool.require_bonus_permission);
        assert_eq!(config.enchant.levels.len(), 3);

        let policy = CapacityPolicy::from_config(&config).unwrap();
        let iron = policy.profile(WandTier::Iron);
        assert_eq!(iron.capacity, 40);
        assert_eq!(iron.durability, Durability::Limited(250));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            cooldown_ms = 250

            [tools.diamond]
            unbreakable = true

            [enchant]
            default_increment = 0.2
            levels = [{{ level = 1, bonus = 0.5 }}]
            "#
        )
        .unwrap();

        let (config, policy) = ConfigLoader::load_policy(file.path()).unwrap();
        assert_eq!(config.cooldown_ms, 250);
        assert_eq!(config.enchant.levels, vec![LevelBonus::new(1, 0.5)]);
        assert!(policy.profile(WandTier::Diamond).durability.is_unlimited());
        // 0.5 + 0.2 × 2
        assert_eq!(policy.bonus_table().factor_bp(3), 9_000);
    }

    #[test]
    fn reports_bad_files() {
        assert!(ConfigLoader::load(Path::new("/nonexistent/wand.toml")).is_err());
        assert!(ConfigLoader::load_str("cooldown_ms = \"soon\"").is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tools.gold]\ncapacity = 5").unwrap();
        let error = ConfigLoader::load_policy(file.path()).unwrap_err();
        assert!(error.to_string().contains("unknown tool id 'gold'"));
    }
}
