//! Error taxonomy for the action pipeline.
//!
//! The pipeline itself emits exactly three kinds of rejection, carried as
//! [`FrameworkError`]. Anything a handler returns is passed through
//! untouched as the `Handler` side of [`ActionError`]; handler errors are
//! not a framework concern.

use serde::{Deserialize, Serialize};

/// One field-level diagnostic reported by a validation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Location of the offending value, as a JSON pointer. Empty for
    /// whole-input issues.
    pub path: String,
    /// Human-readable description of what failed.
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A structured validation failure: a primary message plus the backend's
/// full, ordered diagnostic list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationFailure {
    /// The user-facing message. When issues exist this is the first
    /// issue's message, in the backend's reported order.
    pub message: String,
    /// Per-field diagnostics, preserved for programmatic inspection.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<Issue>,
}

impl ValidationFailure {
    /// A failure with a message and no field-level detail.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            issues: Vec::new(),
        }
    }

    /// A failure built from an ordered issue list; the earliest issue
    /// supplies the primary message.
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        let message = issues
            .first()
            .map(|issue| issue.message.clone())
            .unwrap_or_else(|| "Validation failed".to_string());
        Self { message, issues }
    }
}

/// An error originated by the pipeline itself, as opposed to one returned
/// by the handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum FrameworkError {
    /// The raw input failed the configured validator.
    #[serde(rename = "VALIDATION_ERROR")]
    #[error("{message}")]
    Validation {
        message: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        issues: Vec<Issue>,
    },

    /// The actor lacks permission for the validated params.
    #[serde(rename = "PERMISSION_DENIED")]
    #[error("{message}")]
    PermissionDenied { message: String },

    /// The actor resolver itself failed.
    #[serde(rename = "ACTOR_RESOLUTION_ERROR")]
    #[error("{message}")]
    ActorResolution { message: String },
}

impl FrameworkError {
    /// Create a validation error from a structured failure.
    pub fn validation(failure: ValidationFailure) -> Self {
        FrameworkError::Validation {
            message: failure.message,
            issues: failure.issues,
        }
    }

    /// Create a permission denied error. The message is fixed.
    pub fn permission_denied() -> Self {
        FrameworkError::PermissionDenied {
            message: "Permission denied".to_string(),
        }
    }

    /// Create an actor resolution error.
    pub fn actor_resolution(message: impl Into<String>) -> Self {
        FrameworkError::ActorResolution {
            message: message.into(),
        }
    }

    /// The human-readable message for this error.
    pub fn message(&self) -> &str {
        match self {
            FrameworkError::Validation { message, .. }
            | FrameworkError::PermissionDenied { message }
            | FrameworkError::ActorResolution { message } => message,
        }
    }
}

/// The error side of an action result: either a [`FrameworkError`] or
/// whatever error shape the handler chose.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionError<E = String> {
    #[error(transparent)]
    Framework(#[from] FrameworkError),
    #[error("{0}")]
    Handler(E),
}

impl<E> ActionError<E> {
    pub fn is_framework(&self) -> bool {
        matches!(self, ActionError::Framework(_))
    }

    pub fn is_handler(&self) -> bool {
        matches!(self, ActionError::Handler(_))
    }

    pub fn as_framework(&self) -> Option<&FrameworkError> {
        match self {
            ActionError::Framework(error) => Some(error),
            ActionError::Handler(_) => None,
        }
    }

    pub fn as_handler(&self) -> Option<&E> {
        match self {
            ActionError::Framework(_) => None,
            ActionError::Handler(error) => Some(error),
        }
    }
}
