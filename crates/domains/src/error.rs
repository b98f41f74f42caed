//! # AppError
//!
//! Centralized error handling for the thesisdesk core.
//! Maps domain-specific failures to actionable error types.
//!
//! Authorization checks never produce errors; they are total boolean
//! predicates. Errors here come from slot authoring and availability
//! lookups only.

use thiserror::Error;

/// The primary error type for all domain operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (e.g., a slot id that no longer exists)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Validation failure (e.g., overlapping slot, non-positive duration)
    #[error("validation error: {0}")]
    ValidationError(String),

    /// A per-participant availability lookup failed or timed out. Partial
    /// results would misrepresent common availability, so the whole match
    /// operation is reported as failed.
    #[error("availability lookup failed: {0}")]
    LookupFailed(String),

    /// Infrastructure failure (e.g., backing store unavailable)
    #[error("internal service error: {0}")]
    Internal(String),
}

/// A specialized Result type for thesisdesk logic.
pub type Result<T> = std::result::Result<T, AppError>;
