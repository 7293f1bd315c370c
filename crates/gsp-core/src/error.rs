//! Error taxonomy for the scaffolding engine

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Fatal failures of a scaffolding run.
///
/// User cancellation is not represented here; see [`Outcome`].
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Malformed project name or unrecognized axis key
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Identifier absent from the template registry with no fallback left
    #[error("invalid template: {requested} (available: {})", available.join(", "))]
    UnknownTemplate {
        requested: String,
        available: Vec<String>,
    },

    /// Copying the template tree could not complete; partial output is not rolled back
    #[error("template materialization failed at {}", path.display())]
    MaterializationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The copied package manifest is missing or malformed
    #[error("package manifest {} is corrupt: {reason}", path.display())]
    ManifestCorrupt { path: PathBuf, reason: String },

    /// Any other filesystem failure
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result of a step that the user may decline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    pub fn completed(self) -> Option<T> {
        match self {
            Outcome::Completed(value) => Some(value),
            Outcome::Cancelled => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Completed(value) => Outcome::Completed(f(value)),
            Outcome::Cancelled => Outcome::Cancelled,
        }
    }
}
