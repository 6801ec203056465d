//! Error types for the scheduling engine.

use thiserror::Error;

/// Errors raised while validating or amortizing a liability.
///
/// `Validation` indicates malformed terms the caller should have rejected
/// before submission; `Arithmetic` indicates a degenerate numeric case the
/// engine refuses to turn into NaN or garbage. Neither is ever swallowed:
/// a failing liability aborts the whole scheduling call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LiabilityError {
    #[error("invalid liability terms: {reason}")]
    Validation { reason: String },

    #[error("degenerate amortization term: {reason}")]
    Arithmetic { reason: String },
}

impl LiabilityError {
    pub(crate) fn validation(reason: impl Into<String>) -> Self {
        LiabilityError::Validation {
            reason: reason.into(),
        }
    }

    pub(crate) fn arithmetic(reason: impl Into<String>) -> Self {
        LiabilityError::Arithmetic {
            reason: reason.into(),
        }
    }
}
