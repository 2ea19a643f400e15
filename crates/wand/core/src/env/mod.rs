//! Traits describing the collaborators the placement core talks to.
//!
//! The world grid, the protection oracle, the inventory and the optional
//! bonus-pool provider all belong to the surrounding application. The
//! [`Env`] aggregate bundles the read-only ones so the planner can reach
//! everything it needs without hard coupling to concrete implementations.
mod authority;
mod bonus;
mod error;
mod feedback;
mod inventory;
mod world;

pub use authority::{AllowAll, PlacementAuthority};
pub use bonus::{BonusPoolProvider, NullBonusPool};
pub use error::OracleError;
pub use feedback::{CompletionSignal, FeedbackSink, NoFeedback};
pub use inventory::Inventory;
pub use world::{WorldMut, WorldView};

/// Aggregates the read-only collaborators required by the planner.
pub struct Env<'a, W, A>
where
    W: WorldView + ?Sized,
    A: PlacementAuthority + ?Sized,
{
    world: &'a W,
    authority: &'a A,
}

impl<W, A> Clone for Env<'_, W, A>
where
    W: WorldView + ?Sized,
    A: PlacementAuthority + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<W, A> Copy for Env<'_, W, A>
where
    W: WorldView + ?Sized,
    A: PlacementAuthority + ?Sized,
{
}

impl<'a, W, A> Env<'a, W, A>
where
    W: WorldView + ?Sized,
    A: PlacementAuthority + ?Sized,
{
    pub fn new(world: &'a W, authority: &'a A) -> Self {
        Self { world, authority }
    }

    pub fn world(&self) -> &'a W {
        self.world
    }

    pub fn authority(&self) -> &'a A {
        self.authority
    }
}
