//! The validation capability trait.

use async_trait::async_trait;
use doorman_core::ValidationOutcome;
use serde_json::Value;
use std::future::Future;

/// Turns untyped input into a typed output or a structured failure.
///
/// An adapter owns no state beyond its closed-over schema and is immutable
/// after construction. `parse` must be idempotent for a given input
/// (barring adapters with inherent non-determinism, such as current-time
/// defaults) and must not panic: internal backend errors are reported as
/// failures, never raised.
///
/// The operation is async so adapters can run validation rules that reach
/// out externally (existence checks and the like); purely structural
/// backends simply return immediately.
#[async_trait]
pub trait ValidationAdapter: Send + Sync {
    /// The validated, possibly coerced/defaulted output type.
    type Output: Send;

    async fn parse(&self, raw: Value) -> ValidationOutcome<Self::Output>;
}

/// A validation adapter backed by an async closure, the escape hatch for
/// rules no schema can express.
pub struct ValidationFn<F> {
    f: F,
}

/// Wrap an async closure as a [`ValidationAdapter`].
pub fn validation_fn<F>(f: F) -> ValidationFn<F> {
    ValidationFn { f }
}

#[async_trait]
impl<F, Fut, T> ValidationAdapter for ValidationFn<F>
where
    F: Fn(Value) -> Fut + Send + Sync,
    Fut: Future<Output = ValidationOutcome<T>> + Send,
    T: Send,
{
    type Output = T;

    async fn parse(&self, raw: Value) -> ValidationOutcome<T> {
        (self.f)(raw).await
    }
}
