//! Runtime wiring for the construction wand.
//!
//! This crate supplies in-memory collaborators for `wand-core`, an event log
//! the host drains for feedback, and [`WandService`], which runs one click
//! end to end: cooldown, planning, commit, events.
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts the orchestrator and builder
//! - [`oracle`] provides the world, inventory, protection and bonus-pool adapters
//! - [`events`] records what interactions produced
//! - [`logging`] installs the tracing subscriber
pub mod error;
pub mod events;
pub mod logging;
pub mod oracle;
pub mod service;

pub use error::{Result, RuntimeError};
pub use events::{EventLog, WandEvent};
pub use oracle::{ActorInventory, ChargeLedger, GridWorld, InventoryStore, ProtectionTable, Region};
pub use service::{InteractionOutcome, WandService, WandServiceBuilder};
