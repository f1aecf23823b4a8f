//! Error type for rejected vector operations
//!
//! Rejections are non-fatal: the chainable operations log them as warnings and
//! leave the receiver untouched, while the `try_*` variants hand them back to
//! the caller.

use thiserror::Error;

/// Reason a component-wise operation refused to mutate its receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    /// A required divisor component was exactly zero.
    #[error("Vector::{op}: divide by 0")]
    DivideByZero {
        /// Name of the rejecting operation (e.g. `"div"`)
        op: &'static str,
    },

    /// An operand, or a component the operation would produce, was NaN or
    /// infinite.
    #[error("Vector::{op}: arguments or results contain components that are not finite numbers")]
    NonFinite {
        /// Name of the rejecting operation (e.g. `"mult"`)
        op: &'static str,
    },
}

impl VectorError {
    /// Name of the operation that was rejected.
    pub fn op(&self) -> &'static str {
        match self {
            Self::DivideByZero { op } | Self::NonFinite { op } => op,
        }
    }
}
