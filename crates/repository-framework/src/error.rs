//! # Framework Errors
//!
//! Errors raised by the framework itself. Queries never fail at the repository level,
//! so the only framework error is a broken load-time invariant.

/// Errors that can occur within the repository framework itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    /// Two records in the same seed collection share an identifier.
    #[error("Duplicate {entity_type} id: {id}")]
    DuplicateId {
        entity_type: &'static str,
        id: String,
    },
}
