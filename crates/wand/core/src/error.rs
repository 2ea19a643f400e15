//! Common error infrastructure for wand-core.
//!
//! Nothing in the placement core surfaces an error to its caller under normal
//! operation: rejections and collaborator failures are absorbed at the
//! smallest possible scope and show up as shorter plans or lower placed counts.
//! The error types still exist so those decisions can be logged, classified
//! and tested.
//!
//! Domain-specific errors (e.g. `OracleError`, `Rejection`, `ConfigError`) are
//! defined next to the code that produces them.

/// Severity level of an error, used for categorization and logging.
///
/// - **Recoverable**: transient conditions that may clear on the next interaction
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected collaborator behaviour that deserves investigation
/// - **Fatal**: the component cannot be constructed or used at all
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the same interaction may succeed later.
    ///
    /// Examples: cell occupied by a mob, material ran out mid-commit
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: cell protected, unknown tool id in configuration
    Validation,

    /// Internal error - a collaborator misbehaved.
    ///
    /// Examples: world probe failed, bonus-pool provider threw
    Internal,

    /// Fatal error - configuration unusable.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a collaborator or configuration bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all wand-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait WandError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
