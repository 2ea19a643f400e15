//! Two-source material ledger: ordinary inventory stock plus an optional bonus pool.
//!
//! The pool never snapshots the inventory. Every `count` and `consume` reads
//! the live slots, so a concurrent drain between two calls simply shows up as
//! a smaller count or a partial consume.
use crate::config::PoolPolicy;
use crate::env::{BonusPoolProvider, Inventory, NullBonusPool, OracleError};
use crate::types::{ActorId, ItemStack, MaterialKind, Supply};

/// Counts and consumes material across ordinary stock and a bonus pool.
#[derive(Clone, Debug, Default)]
pub struct ResourcePool<P = NullBonusPool> {
    provider: P,
    policy: PoolPolicy,
}

impl ResourcePool<NullBonusPool> {
    /// Pool with no bonus provider installed.
    pub fn ordinary_only(policy: PoolPolicy) -> Self {
        Self::new(NullBonusPool, policy)
    }
}

impl<P: BonusPoolProvider> ResourcePool<P> {
    pub fn new(provider: P, policy: PoolPolicy) -> Self {
        Self { provider, policy }
    }

    pub fn policy(&self) -> PoolPolicy {
        self.policy
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Returns true if `actor` may draw from the bonus pool right now.
    pub fn bonus_usable(&self, actor: ActorId) -> bool {
        self.provider.is_available()
            && (!self.policy.require_bonus_permission || self.provider.has_use_permission(actor))
    }

    /// Total units of `material` the actor can pay with.
    ///
    /// Short-circuits to [`Supply::Unlimited`] as soon as an unlimited bonus
    /// stack is found.
    pub fn count(&self, inventory: &dyn Inventory, actor: ActorId, material: MaterialKind) -> Supply {
        let bonus = if self.bonus_usable(actor) {
            match self.count_bonus(inventory, actor, material) {
                Ok(Supply::Unlimited) => return Supply::Unlimited,
                Ok(bonus) => bonus,
                Err(error) => {
                    tracing::warn!(%actor, %error, "bonus pool unavailable while counting");
                    Supply::NONE
                }
            }
        } else {
            Supply::NONE
        };

        bonus.saturating_add(Supply::Finite(self.count_ordinary(inventory, actor, material)))
    }

    /// Consumes up to `amount` units and returns how many were actually removed.
    ///
    /// Never fails and never removes more than `amount`; a short return means
    /// the sources ran dry.
    pub fn consume(
        &mut self,
        inventory: &mut dyn Inventory,
        actor: ActorId,
        material: MaterialKind,
        amount: u32,
    ) -> u32 {
        if amount == 0 {
            return 0;
        }
        let use_bonus = self.bonus_usable(actor);
        let mut consumed = 0;

        if use_bonus && self.policy.prefer_bonus_first {
            consumed += self.consume_bonus(inventory, actor, material, amount);
        }
        if consumed < amount {
            consumed += consume_ordinary(
                &self.provider,
                inventory,
                actor,
                material,
                amount - consumed,
            );
        }
        if consumed < amount && use_bonus && !self.policy.prefer_bonus_first {
            consumed += self.consume_bonus(inventory, actor, material, amount - consumed);
        }

        consumed
    }

    fn count_bonus(
        &self,
        inventory: &dyn Inventory,
        actor: ActorId,
        material: MaterialKind,
    ) -> Result<Supply, OracleError> {
        let mut total = Supply::NONE;
        for index in 0..inventory.slot_count(actor) {
            let Some(stack) = inventory.slot(actor, index) else {
                continue;
            };
            if stack.material != material || !self.provider.is_bonus(stack)? {
                continue;
            }
            match self.provider.use_count(stack)? {
                Supply::Unlimited => return Ok(Supply::Unlimited),
                uses => total = total.saturating_add(uses),
            }
        }
        Ok(total)
    }

    fn count_ordinary(&self, inventory: &dyn Inventory, actor: ActorId, material: MaterialKind) -> u32 {
        (0..inventory.slot_count(actor))
            .filter_map(|index| inventory.slot(actor, index))
            .filter(|stack| is_ordinary(&self.provider, stack, material))
            .fold(0u32, |total, stack| total.saturating_add(stack.count))
    }

    fn consume_bonus(
        &mut self,
        inventory: &mut dyn Inventory,
        actor: ActorId,
        material: MaterialKind,
        amount: u32,
    ) -> u32 {
        let mut consumed = 0;
        for index in 0..inventory.slot_count(actor) {
            if consumed >= amount {
                break;
            }
            let Some(stack) = inventory.slot(actor, index).copied() else {
                continue;
            };
            if stack.material != material {
                continue;
            }
            match self.drain_bonus_stack(&stack, amount - consumed) {
                Ok((taken, exhausted)) => {
                    consumed += taken;
                    if exhausted {
                        inventory.clear_slot(actor, index);
                    }
                }
                Err(error) => {
                    tracing::warn!(%actor, %error, "bonus pool unavailable while consuming");
                    break;
                }
            }
        }
        consumed
    }

    /// Takes up to `wanted` uses from one stack. Returns the uses taken and
    /// whether the stack is now exhausted.
    fn drain_bonus_stack(&mut self, stack: &ItemStack, wanted: u32) -> Result<(u32, bool), OracleError> {
        if !self.provider.is_bonus(stack)? {
            return Ok((0, false));
        }
        let mut remaining = match self.provider.use_count(stack)? {
            Supply::Unlimited => return Ok((wanted, false)),
            Supply::Finite(uses) => uses,
        };
        let mut taken = 0;
        while remaining > 0 && taken < wanted {
            remaining = match self.provider.decrement(stack)? {
                Supply::Finite(uses) => uses,
                Supply::Unlimited => remaining - 1,
            };
            taken += 1;
        }
        Ok((taken, remaining == 0))
    }
}

/// Ordinary stock is every matching stack the provider does not claim,
/// whether or not the actor may use bonus stacks.
fn is_ordinary<P: BonusPoolProvider>(provider: &P, stack: &ItemStack, material: MaterialKind) -> bool {
    stack.material == material && !provider.is_bonus(stack).unwrap_or(false)
}

fn consume_ordinary<P: BonusPoolProvider>(
    provider: &P,
    inventory: &mut dyn Inventory,
    actor: ActorId,
    material: MaterialKind,
    amount: u32,
) -> u32 {
    let mut remaining = amount;
    for index in 0..inventory.slot_count(actor) {
        if remaining == 0 {
            break;
        }
        let Some(stack) = inventory.slot_mut(actor, index) else {
            continue;
        };
        if !is_ordinary(provider, stack, material) {
            continue;
        }
        if stack.count <= remaining {
            remaining -= stack.count;
            inventory.clear_slot(actor, index);
        } else {
            stack.count -= remaining;
            remaining = 0;
        }
    }
    amount - remaining
}
