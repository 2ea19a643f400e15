pub mod common;
pub mod direction;
pub mod material;
pub mod stack;
pub mod tool;

// Re-export common types
pub use common::{ActorId, Cell};

// Re-export lattice direction
pub use direction::Direction;

// Re-export world content types
pub use material::{CellState, MaterialKind, OccupantKind};

// Re-export inventory types
pub use stack::{ItemStack, StackTag, Supply};

// Re-export tool types
pub use tool::{Durability, ToolProfile, ToolState, WandTier, WearOutcome};
