//! Shared result and error types for the doorman action pipeline.
//!
//! Everything an action touches speaks the same two-variant contract:
//! validators, permission adapters, handlers, and the pipeline itself all
//! return an [`Outcome`]. Errors originated by the pipeline (validation
//! rejection, permission denial, actor-resolution failure) are carried as
//! [`FrameworkError`] and kept structurally separate from handler-defined
//! errors via [`ActionError`], so callers can always tell a framework-level
//! rejection from a business-level one.

mod error;
mod outcome;

pub use error::{ActionError, FrameworkError, Issue, ValidationFailure};
pub use outcome::{Outcome, PermissionOutcome};

/// The outcome of a validation adapter's `parse`.
pub type ValidationOutcome<T> = Outcome<T, ValidationFailure>;

/// The uniform return type of an action invocation.
pub type ActionResult<T, E = String> = Outcome<T, ActionError<E>>;
