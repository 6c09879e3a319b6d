//! Error types for menucast-core.
//!
//! Almost everything the core encounters is a value, not an error: unknown
//! menus, unresolvable links, and unusable paths all surface through the
//! output shape. The only fatal condition is a collaborator breaking its
//! contract, because silently admitting or denying a link on a malformed
//! access decision would be a security defect.

use std::fmt::{self, Display};

/// Result type used throughout menucast-core.
pub type MenuResult<T> = Result<T, MenuError>;

/// Top-level error type for menucast-core.
#[derive(Debug)]
pub enum MenuError {
    /// A collaborator returned an access decision that is neither absent
    /// nor a recognized allow/deny value.
    AccessContract {
        /// Human-readable description of the violation.
        message: String,
    },

    /// Internal invariant violation.
    Invariant {
        /// Human-readable description of the violation.
        message: String,
    },
}

impl MenuError {
    /// Construct an access-contract violation error.
    pub fn access_contract<M: Into<String>>(message: M) -> Self {
        Self::AccessContract {
            message: message.into(),
        }
    }

    /// Construct an invariant violation error.
    pub fn invariant<M: Into<String>>(message: M) -> Self {
        Self::Invariant {
            message: message.into(),
        }
    }
}

impl Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccessContract { message } => {
                write!(f, "access contract violation: {message}")
            }
            Self::Invariant { message } => {
                write!(f, "invariant violation: {message}")
            }
        }
    }
}

impl std::error::Error for MenuError {}
