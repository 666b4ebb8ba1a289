//! Domain error types.
//!
//! These errors represent caller-side validation failures. They are raised
//! when building a request, before anything reaches the network, and are
//! distinct from API/IO errors.

/// Validation errors for request parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Search destination is empty or whitespace
    #[error("destination must not be empty")]
    EmptyDestination,

    /// Day count is zero or negative
    #[error("trip length must be positive, got {0}")]
    NonPositiveDays(i64),
}
