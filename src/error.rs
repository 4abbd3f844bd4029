//! Error type shared by every pipeline operation.

use thiserror::Error;

/// Convenience result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Coarse classification of a [`PipelineError`], handy for `match` in callers and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    EmptyInput,
    Custom,
    Config,
}

/// Error returned by [`Pipeline::execute`](crate::Pipeline::execute) and by individual
/// [`Operation`](crate::Operation)s.
///
/// Built-in operations only ever raise [`PipelineError::NotFound`] (searches) and
/// [`PipelineError::EmptyInput`] (reduce). Everything else is total over all inputs.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A search found no element satisfying its predicate. Empty input always ends here.
    #[error("{operation}: target not found in data")]
    NotFound { operation: &'static str },

    /// The operation needs at least one element and received none.
    #[error("{operation}: requires at least one element")]
    EmptyInput { operation: &'static str },

    /// Failure raised by a caller-defined operation.
    #[error("{operation}: {message}")]
    Custom { operation: String, message: String },

    /// A [`PipelineConfig`](crate::PipelineConfig) could not be parsed.
    #[error("invalid pipeline config: {0}")]
    Config(#[from] serde_json::Error),
}

impl PipelineError {
    /// Build a [`PipelineError::Custom`] for a user operation.
    pub fn custom(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Custom {
            operation: operation.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::EmptyInput { .. } => ErrorKind::EmptyInput,
            Self::Custom { .. } => ErrorKind::Custom,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
