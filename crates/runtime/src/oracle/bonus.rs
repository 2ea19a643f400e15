//! Charge-counted bonus stacks served through [`wand_core::BonusPoolProvider`].
use std::collections::{HashMap, HashSet};

use wand_core::{ActorId, BonusPoolProvider, ItemStack, OracleError, StackTag, Supply};

/// Tracks remaining uses per tagged stack.
///
/// A stack is a bonus stack when its tag is registered here. Setting the
/// ledger offline makes every call fail, the way a crashed third-party
/// provider would.
#[derive(Clone, Debug, Default)]
pub struct ChargeLedger {
    charges: HashMap<StackTag, Supply>,
    permitted: HashSet<ActorId>,
    offline: bool,
}

impl ChargeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a bonus stack with `uses` charges.
    pub fn register(&mut self, tag: StackTag, uses: Supply) {
        self.charges.insert(tag, uses);
    }

    pub fn charges(&self, tag: StackTag) -> Option<Supply> {
        self.charges.get(&tag).copied()
    }

    pub fn grant(&mut self, actor: ActorId) {
        self.permitted.insert(actor);
    }

    pub fn revoke(&mut self, actor: ActorId) {
        self.permitted.remove(&actor);
    }

    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    fn online(&self) -> Result<(), OracleError> {
        if self.offline {
            return Err(OracleError::ProviderFailed("charge ledger offline"));
        }
        Ok(())
    }
}

impl BonusPoolProvider for ChargeLedger {
    fn is_bonus(&self, stack: &ItemStack) -> Result<bool, OracleError> {
        self.online()?;
        Ok(stack.tag.is_some_and(|tag| self.charges.contains_key(&tag)))
    }

    fn use_count(&self, stack: &ItemStack) -> Result<Supply, OracleError> {
        self.online()?;
        Ok(stack
            .tag
            .and_then(|tag| self.charges(tag))
            .unwrap_or(Supply::NONE))
    }

    fn decrement(&mut self, stack: &ItemStack) -> Result<Supply, OracleError> {
        self.online()?;
        let uses = stack
            .tag
            .and_then(|tag| self.charges.get_mut(&tag))
            .ok_or(OracleError::ProviderFailed("stack is not a bonus stack"))?;
        if let Supply::Finite(remaining) = uses {
            *remaining = remaining.saturating_sub(1);
        }
        Ok(*uses)
    }

    fn has_use_permission(&self, actor: ActorId) -> bool {
        self.permitted.contains(&actor)
    }
}
