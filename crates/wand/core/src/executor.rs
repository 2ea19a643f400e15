//! Commit phase: turns a [`PlacementPlan`] into world mutations.
//!
//! Every assumption the planner made is re-read at the last moment before
//! each mutation: the cell is still replaceable and authorized, the actor
//! still has material, and nothing blocking has moved in. Support is not
//! checked again here.
use tracing::{debug, trace, warn};

use crate::capacity::CapacityPolicy;
use crate::env::{
    BonusPoolProvider, CompletionSignal, FeedbackSink, Inventory, PlacementAuthority, WorldMut,
};
use crate::planner::PlacementPlan;
use crate::resources::ResourcePool;
use crate::types::{ActorId, Cell, WearOutcome};

/// Outcome of one commit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommitResult {
    pub placed: u32,
    pub tool_broken: bool,
}

/// Mutable collaborators borrowed for the duration of one commit.
pub struct CommitContext<'a> {
    pub world: &'a mut dyn WorldMut,
    pub authority: &'a dyn PlacementAuthority,
    pub inventory: &'a mut dyn Inventory,
    pub feedback: &'a mut dyn FeedbackSink,
}

/// Applies plans against the world, the resource pool and the held tool.
///
/// A commit is not retriable: running the same plan twice places nothing the
/// second time, but material and wear spent by the first run stay spent.
pub struct PlacementExecutor<'a, P: BonusPoolProvider> {
    policy: &'a CapacityPolicy,
    pool: &'a mut ResourcePool<P>,
}

impl<'a, P: BonusPoolProvider> PlacementExecutor<'a, P> {
    pub fn new(policy: &'a CapacityPolicy, pool: &'a mut ResourcePool<P>) -> Self {
        Self { policy, pool }
    }

    /// Places the plan's material into its cells, in plan order.
    ///
    /// Running out of material ends the commit; every other per-cell failure
    /// skips that cell only. Tool wear equals the number of cells placed.
    pub fn commit(
        &mut self,
        ctx: CommitContext<'_>,
        plan: &PlacementPlan,
        actor: ActorId,
    ) -> CommitResult {
        let CommitContext {
            world,
            authority,
            inventory,
            feedback,
        } = ctx;

        let Some(tool) = inventory.held_tool(actor).copied() else {
            debug!(%actor, "commit without a held tool");
            return CommitResult::default();
        };
        let profile = self.policy.profile(tool.tier);
        if !profile.enabled || plan.is_empty() {
            return CommitResult::default();
        }

        let material = plan.material();
        let mut placed = 0u32;
        for cell in plan.iter() {
            if !still_replaceable(world, cell) {
                continue;
            }
            if !authority.may_place(actor, cell, material) {
                trace!(%cell, "authorization revoked since planning");
                continue;
            }
            if self.pool.count(inventory, actor, material).is_empty() {
                debug!(%actor, %cell, placed, "material exhausted mid-commit");
                break;
            }
            match world.has_blocking_occupant(cell) {
                Ok(false) => {}
                Ok(true) => {
                    trace!(%cell, "occupant moved in since planning");
                    continue;
                }
                Err(error) => {
                    trace!(%cell, %error, "occupancy probe failed");
                    continue;
                }
            }
            // Pay first: a unit the pool cannot hand over is never placed.
            if self.pool.consume(inventory, actor, material, 1) == 0 {
                debug!(%actor, %cell, placed, "pool could not pay for the next cell");
                break;
            }
            if let Err(error) = world.set_material(cell, material) {
                warn!(%actor, %cell, %error, "write failed after the unit was spent");
                continue;
            }
            placed += 1;
        }

        if placed == 0 {
            return CommitResult::default();
        }

        let mut tool_broken = false;
        if !profile.durability.is_unlimited() {
            let outcome = inventory
                .held_tool_mut(actor)
                .map(|held| held.apply_wear(placed, &profile));
            if outcome == Some(WearOutcome::Broken) {
                inventory.take_held_tool(actor);
                tool_broken = true;
            }
        }

        debug!(%actor, placed, planned = plan.len(), tool_broken, "commit finished");
        feedback.completed(CompletionSignal {
            actor,
            placed,
            tool_broken,
        });
        CommitResult {
            placed,
            tool_broken,
        }
    }
}

fn still_replaceable(world: &dyn WorldMut, cell: Cell) -> bool {
    match world.cell(cell) {
        Ok(state) => state.is_replaceable(),
        Err(error) => {
            trace!(%cell, %error, "probe failed at commit");
            false
        }
    }
}
