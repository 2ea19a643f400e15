use crate::types::{ActorId, ItemStack, Supply};

use super::OracleError;

/// Optional external provider of "bonus" stacks that carry their own use counts.
///
/// The provider owns the use counters; the inventory only holds the stacks.
/// Every method may fail, in which case the pool treats the provider as absent.
pub trait BonusPoolProvider {
    /// Returns false when no provider is installed.
    fn is_available(&self) -> bool {
        true
    }

    /// Returns true if `stack` belongs to this provider.
    fn is_bonus(&self, stack: &ItemStack) -> Result<bool, OracleError>;

    /// Remaining uses of a bonus stack.
    fn use_count(&self, stack: &ItemStack) -> Result<Supply, OracleError>;

    /// Consumes one use of a bonus stack and returns what is left.
    fn decrement(&mut self, stack: &ItemStack) -> Result<Supply, OracleError>;

    fn has_use_permission(&self, actor: ActorId) -> bool;
}

/// Null provider: recognises nothing and counts nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullBonusPool;

impl BonusPoolProvider for NullBonusPool {
    fn is_available(&self) -> bool {
        false
    }

    fn is_bonus(&self, _stack: &ItemStack) -> Result<bool, OracleError> {
        Ok(false)
    }

    fn use_count(&self, _stack: &ItemStack) -> Result<Supply, OracleError> {
        Ok(Supply::NONE)
    }

    fn decrement(&mut self, _stack: &ItemStack) -> Result<Supply, OracleError> {
        Ok(Supply::NONE)
    }

    fn has_use_permission(&self, _actor: ActorId) -> bool {
        false
    }
}
