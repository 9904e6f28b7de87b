use thiserror::Error;

use crate::model::WindowId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons the store declined an operation. A rejected operation leaves state untouched.
pub enum Rejection {
    /// The requested id is blank or contains a forbidden fragment.
    #[error("invalid window id `{0}`")]
    InvalidId(String),
    /// The requested component tag is not a known [`crate::ComponentKind`].
    #[error("component not allowed: `{0}`")]
    ComponentNotAllowed(String),
    /// A live window already uses this id.
    #[error("window `{0}` already exists")]
    DuplicateId(WindowId),
    /// The live window count is at the configured ceiling.
    #[error("maximum number of windows ({limit}) reached")]
    CapacityReached {
        /// Configured window ceiling.
        limit: usize,
    },
    /// The target id is not in the live set.
    #[error("window `{0}` not found")]
    WindowNotFound(WindowId),
}

/// Result of a store operation.
///
/// Operations never fail loudly; this value only tells callers whether the state changed and,
/// if not, why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Applied => None,
            Self::Rejected(reason) => Some(reason),
        }
    }

    /// Converts into a `Result` for callers that want to propagate rejections with `?`.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] carried by [`Outcome::Rejected`].
    pub fn into_result(self) -> Result<(), Rejection> {
        match self {
            Self::Applied => Ok(()),
            Self::Rejected(reason) => Err(reason),
        }
    }
}

impl From<Result<(), Rejection>> for Outcome {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => Self::Applied,
            Err(reason) => Self::Rejected(reason),
        }
    }
}
