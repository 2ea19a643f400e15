//! Placement rules for the construction wand.
//!
//! `wand-core` decides which cells may receive material when an actor clicks
//! a surface with a wand, and accounts for the material and tool wear a
//! placement costs. The world grid, inventories, protection checks and the
//! optional bonus pool are collaborators reached through the traits in
//! [`env`]; nothing here performs I/O or keeps a handle into the world.
//!
//! The flow for one click is [`Interaction::plan`] (held tool, origin
//! material, capacity) → [`FloodFillPlanner::plan`] → [`PlacementExecutor::commit`].
pub mod capacity;
pub mod config;
pub mod env;
pub mod error;
pub mod executor;
pub mod interaction;
pub mod planner;
pub mod resources;
pub mod session;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use capacity::{BonusTable, CapacityPolicy};
pub use config::{ConfigError, EnchantSettings, LevelBonus, PoolPolicy, ToolOverride, WandConfig};
pub use env::{
    AllowAll, BonusPoolProvider, CompletionSignal, Env, FeedbackSink, Inventory, NoFeedback,
    NullBonusPool, OracleError, PlacementAuthority, WorldMut, WorldView,
};
pub use error::{ErrorSeverity, WandError};
pub use executor::{CommitContext, CommitResult, PlacementExecutor};
pub use interaction::{Interaction, Refusal};
pub use planner::{Checks, FloodFillPlanner, Placement, PlacementPlan, Rejection, check_cell};
pub use resources::ResourcePool;
pub use session::{ActorSession, Sessions};
pub use types::{
    ActorId, Cell, CellState, Direction, Durability, ItemStack, MaterialKind, OccupantKind,
    StackTag, Supply, ToolProfile, ToolState, WandTier, WearOutcome,
};
