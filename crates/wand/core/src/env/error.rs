//! Collaborator access errors.

use crate::error::{ErrorSeverity, WandError};
use crate::types::{ActorId, Cell};

/// Errors reported by external collaborators (world grid, inventory, bonus pool).
///
/// The core never propagates these to its caller: a failure while probing a
/// cell rejects that cell, a failure in the bonus pool degrades the pool to
/// "absent".
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// Cell lies outside the region this call is scheduled in.
    #[error("cell {0} is outside the current region")]
    OutsideRegion(Cell),

    /// The world could not report the state of a cell.
    #[error("probe of cell {0} failed")]
    ProbeFailed(Cell),

    /// The world refused to change a cell.
    #[error("write to cell {0} failed")]
    WriteFailed(Cell),

    /// Bonus-pool provider failed.
    #[error("bonus-pool provider failed: {0}")]
    ProviderFailed(&'static str),

    /// Actor has no inventory registered.
    #[error("actor {0} is unknown")]
    ActorUnknown(ActorId),
}

impl WandError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Region edges are an expected part of a sharded world
            OutsideRegion(_) => ErrorSeverity::Recoverable,
            ActorUnknown(_) => ErrorSeverity::Validation,
            ProbeFailed(_) | WriteFailed(_) | ProviderFailed(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            OutsideRegion(_) => "ORACLE_OUTSIDE_REGION",
            ProbeFailed(_) => "ORACLE_PROBE_FAILED",
            WriteFailed(_) => "ORACLE_WRITE_FAILED",
            ProviderFailed(_) => "ORACLE_PROVIDER_FAILED",
            ActorUnknown(_) => "ORACLE_ACTOR_UNKNOWN",
        }
    }
}
