//! In-memory collaborators for the wand core.
//!
//! These implement the `wand-core` collaborator traits over plain maps so the
//! service can run without a host server. A host embeds its own world,
//! inventories and protection plugin behind the same traits.
mod authority;
mod bonus;
mod inventory;
mod world;

pub use authority::ProtectionTable;
pub use bonus::ChargeLedger;
pub use inventory::{ActorInventory, InventoryStore};
pub use world::{GridWorld, Region};
