//! Resolves a click into a plan: held tool, origin material and capacity.
use tracing::debug;

use crate::capacity::CapacityPolicy;
use crate::env::{BonusPoolProvider, Env, Inventory, OracleError, PlacementAuthority, WorldView};
use crate::error::{ErrorSeverity, WandError};
use crate::planner::{FloodFillPlanner, PlacementPlan};
use crate::resources::ResourcePool;
use crate::types::{ActorId, Cell, CellState, Direction, ToolState, WandTier};

/// Reasons an interaction produces no plan at all.
///
/// These are result codes for the caller, not failures of the core.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Refusal {
    #[error("actor {0} is not holding a wand")]
    NoTool(ActorId),

    #[error("{0} wand is disabled")]
    ToolDisabled(WandTier),

    #[error("actor {actor} may not use a {tier} wand")]
    ToolForbidden { actor: ActorId, tier: WandTier },

    #[error("clicked cell {0} holds no placeable material")]
    OriginNotPlaceable(Cell),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl WandError for Refusal {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Refusal::NoTool(_) | Refusal::OriginNotPlaceable(_) => ErrorSeverity::Recoverable,
            Refusal::ToolDisabled(_) | Refusal::ToolForbidden { .. } => ErrorSeverity::Validation,
            Refusal::Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Refusal::NoTool(_) => "REFUSAL_NO_TOOL",
            Refusal::ToolDisabled(_) => "REFUSAL_TOOL_DISABLED",
            Refusal::ToolForbidden { .. } => "REFUSAL_TOOL_FORBIDDEN",
            Refusal::OriginNotPlaceable(_) => "REFUSAL_ORIGIN_NOT_PLACEABLE",
            Refusal::Oracle(error) => error.error_code(),
        }
    }
}

/// One actor clicking one face of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interaction {
    pub actor: ActorId,
    pub origin: Cell,
    pub face: Direction,
}

impl Interaction {
    pub fn new(actor: ActorId, origin: Cell, face: Direction) -> Self {
        Self {
            actor,
            origin,
            face,
        }
    }

    /// The held tool, if the actor holds one they are allowed to use.
    ///
    /// Hosts run this before the cooldown so a click that never had a usable
    /// wand does not start a session.
    pub fn usable_tool<A>(&self, inventory: &dyn Inventory, authority: &A) -> Result<ToolState, Refusal>
    where
        A: PlacementAuthority + ?Sized,
    {
        let actor = self.actor;
        let tool = inventory
            .held_tool(actor)
            .copied()
            .ok_or(Refusal::NoTool(actor))?;
        if !authority.may_use_tool(actor, tool.tier) {
            return Err(Refusal::ToolForbidden {
                actor,
                tier: tool.tier,
            });
        }
        Ok(tool)
    }

    /// Builds the plan for this interaction.
    ///
    /// The material is whatever solid the clicked cell holds; capacity is the
    /// held tool's resolved capacity clamped to what the actor can pay for.
    pub fn plan<W, A, P>(
        &self,
        env: Env<'_, W, A>,
        inventory: &dyn Inventory,
        pool: &ResourcePool<P>,
        policy: &CapacityPolicy,
    ) -> Result<PlacementPlan, Refusal>
    where
        W: WorldView + ?Sized,
        A: PlacementAuthority + ?Sized,
        P: BonusPoolProvider,
    {
        let actor = self.actor;
        let tool = self.usable_tool(inventory, env.authority())?;
        if !policy.profile(tool.tier).enabled {
            return Err(Refusal::ToolDisabled(tool.tier));
        }

        let CellState::Solid(material) = env.world().cell(self.origin)? else {
            return Err(Refusal::OriginNotPlaceable(self.origin));
        };

        let available = pool.count(inventory, actor, material);
        let capacity = policy.plan_capacity(&tool, available);
        debug!(
            %actor,
            tier = %tool.tier,
            enchant = tool.enchant_level,
            ?available,
            capacity,
            "resolved capacity"
        );

        Ok(FloodFillPlanner::new(env, actor).plan(self.origin, self.face, material, capacity))
    }
}
