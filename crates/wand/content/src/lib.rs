//! Data-driven wand configuration.
//!
//! Tool overrides, the enchantment bonus table and the resource-pool policy
//! live in TOML files and are loaded into [`wand_core::WandConfig`]. The
//! bundled defaults ship in `data/wand.toml`.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::ConfigLoader;

/// Bundled default configuration file.
pub const DEFAULT_CONFIG: &str = include_str!("../data/wand.toml");
