//! Wand service: cooldowns, planning, commit and event recording per click.
//!
//! The service owns the in-memory collaborators together with the validated
//! [`CapacityPolicy`], the [`ResourcePool`] and the per-actor [`Sessions`].
//! Every call runs synchronously to completion; hosts that shard their world
//! call into the service from the shard that owns the actor.
use std::path::Path;

use tracing::{debug, info};
use wand_content::ConfigLoader;
use wand_core::{
    ActorId, BonusPoolProvider, CapacityPolicy, Cell, CommitContext, CommitResult, Direction, Env,
    Interaction, Inventory, NullBonusPool, PlacementExecutor, PlacementPlan, Refusal, ResourcePool,
    Sessions, Supply, ToolState, WandConfig, WandError,
};

use crate::error::Result;
use crate::events::{EventLog, WandEvent};
use crate::oracle::{GridWorld, InventoryStore, ProtectionTable};

/// What a single click resulted in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// Ignored: the actor clicked again inside the cooldown window.
    CoolingDown,
    /// No plan could be built (no wand, disabled wand, bad origin...).
    Refused(Refusal),
    /// The plan or the commit came out empty.
    NothingToPlace,
    /// At least one cell was placed.
    Committed(CommitResult),
}

impl InteractionOutcome {
    /// Number of cells placed by this interaction.
    pub fn placed(&self) -> u32 {
        match self {
            InteractionOutcome::Committed(result) => result.placed,
            _ => 0,
        }
    }
}

/// Drives wand interactions against in-memory collaborators.
pub struct WandService<P: BonusPoolProvider = NullBonusPool> {
    config: WandConfig,
    policy: CapacityPolicy,
    pool: ResourcePool<P>,
    sessions: Sessions,
    world: GridWorld,
    authority: ProtectionTable,
    inventories: InventoryStore,
    events: EventLog,
}

impl WandService<NullBonusPool> {
    /// Create a new service builder
    pub fn builder() -> WandServiceBuilder {
        WandServiceBuilder::new()
    }
}

impl<P: BonusPoolProvider> WandService<P> {
    /// Handles one click of `face` on `origin`.
    ///
    /// `now_ms` is the host clock; it only feeds the cooldown.
    pub fn interact(
        &mut self,
        actor: ActorId,
        origin: Cell,
        face: Direction,
        now_ms: u64,
    ) -> InteractionOutcome {
        // Clicks without a usable wand never reach the cooldown.
        let usable = Interaction::new(actor, origin, face)
            .usable_tool(&self.inventories, &self.authority);
        if let Err(refusal) = usable {
            return refused(actor, refusal);
        }
        if !self.sessions.try_begin(actor, now_ms) {
            debug!(%actor, now_ms, "interaction ignored during cooldown");
            return InteractionOutcome::CoolingDown;
        }

        let plan = match self.plan(actor, origin, face) {
            Ok(plan) => plan,
            Err(refusal) => return refused(actor, refusal),
        };

        if plan.is_empty() {
            self.events.record(WandEvent::NothingToPlace { actor });
            return InteractionOutcome::NothingToPlace;
        }

        let result = PlacementExecutor::new(&self.policy, &mut self.pool).commit(
            CommitContext {
                world: &mut self.world,
                authority: &self.authority,
                inventory: &mut self.inventories,
                feedback: &mut self.events,
            },
            &plan,
            actor,
        );

        if result.placed == 0 {
            self.events.record(WandEvent::NothingToPlace { actor });
            return InteractionOutcome::NothingToPlace;
        }

        info!(
            %actor,
            %origin,
            %face,
            planned = plan.len(),
            placed = result.placed,
            tool_broken = result.tool_broken,
            "wand interaction committed"
        );
        InteractionOutcome::Committed(result)
    }

    /// Computes the plan a click would commit, without touching anything.
    ///
    /// Previews ignore the cooldown.
    pub fn preview(
        &self,
        actor: ActorId,
        origin: Cell,
        face: Direction,
    ) -> std::result::Result<PlacementPlan, Refusal> {
        self.plan(actor, origin, face)
    }

    /// Uses left on the actor's held tool, `None` when they hold nothing.
    pub fn remaining_uses(&self, actor: ActorId) -> Option<Supply> {
        let tool = self.inventories.get(actor)?.held()?;
        let profile = self.policy.profile(tool.tier);
        Some(tool.remaining(&profile).map_or(Supply::Unlimited, Supply::Finite))
    }

    /// Removes up to `amount` wear from the actor's held tool.
    ///
    /// Returns the repaired tool, or `None` when the actor holds nothing.
    pub fn repair_tool(&mut self, actor: ActorId, amount: u32) -> Option<ToolState> {
        let tool = self.inventories.held_tool_mut(actor)?;
        let profile = self.policy.profile(tool.tier);
        tool.repair(amount, &profile);
        debug!(%actor, tier = %tool.tier, wear = tool.wear, "tool repaired");
        Some(*tool)
    }

    /// Replaces the actor's held tool and resets their session.
    pub fn switch_tool(&mut self, actor: ActorId, tool: Option<ToolState>) {
        self.inventories.entry(actor).hold(tool);
        self.sessions.clear(actor);
    }

    /// Forgets everything kept for a disconnected actor.
    pub fn disconnect(&mut self, actor: ActorId) {
        self.sessions.remove(actor);
        self.inventories.remove(actor);
        debug!(%actor, "actor disconnected");
    }

    fn plan(
        &self,
        actor: ActorId,
        origin: Cell,
        face: Direction,
    ) -> std::result::Result<PlacementPlan, Refusal> {
        Interaction::new(actor, origin, face).plan(
            Env::new(&self.world, &self.authority),
            &self.inventories,
            &self.pool,
            &self.policy,
        )
    }

    pub fn config(&self) -> &WandConfig {
        &self.config
    }

    pub fn policy(&self) -> &CapacityPolicy {
        &self.policy
    }

    pub fn sessions(&self) -> &Sessions {
        &self.sessions
    }

    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut GridWorld {
        &mut self.world
    }

    pub fn authority_mut(&mut self) -> &mut ProtectionTable {
        &mut self.authority
    }

    pub fn inventories(&self) -> &InventoryStore {
        &self.inventories
    }

    pub fn inventories_mut(&mut self) -> &mut InventoryStore {
        &mut self.inventories
    }

    pub fn bonus_provider(&self) -> &P {
        self.pool.provider()
    }

    pub fn bonus_provider_mut(&mut self) -> &mut P {
        self.pool.provider_mut()
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventLog {
        &mut self.events
    }
}

fn refused(actor: ActorId, refusal: Refusal) -> InteractionOutcome {
    debug!(
        %actor,
        code = refusal.error_code(),
        severity = refusal.severity().as_str(),
        "interaction refused"
    );
    InteractionOutcome::Refused(refusal)
}

/// Builder for [`WandService`].
pub struct WandServiceBuilder<P: BonusPoolProvider = NullBonusPool> {
    config: WandConfig,
    provider: P,
    world: GridWorld,
    authority: ProtectionTable,
    inventories: InventoryStore,
}

impl WandServiceBuilder<NullBonusPool> {
    fn new() -> Self {
        Self {
            config: WandConfig::default(),
            provider: NullBonusPool,
            world: GridWorld::default(),
            authority: ProtectionTable::default(),
            inventories: InventoryStore::default(),
        }
    }
}

impl<P: BonusPoolProvider> WandServiceBuilder<P> {
    /// Override wand configuration
    pub fn config(mut self, config: WandConfig) -> Self {
        self.config = config;
        self
    }

    /// Load wand configuration from a TOML file
    pub fn config_file(mut self, path: &Path) -> Result<Self> {
        self.config = ConfigLoader::load(path)?;
        Ok(self)
    }

    pub fn world(mut self, world: GridWorld) -> Self {
        self.world = world;
        self
    }

    pub fn authority(mut self, authority: ProtectionTable) -> Self {
        self.authority = authority;
        self
    }

    pub fn inventories(mut self, inventories: InventoryStore) -> Self {
        self.inventories = inventories;
        self
    }

    /// Install a bonus-pool provider
    pub fn bonus_provider<Q: BonusPoolProvider>(self, provider: Q) -> WandServiceBuilder<Q> {
        WandServiceBuilder {
            config: self.config,
            provider,
            world: self.world,
            authority: self.authority,
            inventories: self.inventories,
        }
    }

    /// Validates the configuration and builds the service.
    pub fn build(self) -> Result<WandService<P>> {
        let policy = CapacityPolicy::from_config(&self.config)?;
        let pool = ResourcePool::new(self.provider, self.config.pool);
        let sessions = Sessions::new(self.config.cooldown_ms);
        Ok(WandService {
            config: self.config,
            policy,
            pool,
            sessions,
            world: self.world,
            authority: self.authority,
            inventories: self.inventories,
            events: EventLog::new(),
        })
    }
}
