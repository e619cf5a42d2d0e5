//! Refinement combinator: an async check layered over any adapter.

use crate::adapter::ValidationAdapter;
use async_trait::async_trait;
use doorman_core::{Outcome, ValidationFailure, ValidationOutcome};
use serde_json::Value;
use std::future::Future;

/// Wraps a validation adapter with an async refinement applied after the
/// inner adapter succeeds.
///
/// The refinement consumes the parsed output and either passes it through
/// (possibly transformed) or rejects it with a [`ValidationFailure`].
/// This is the place for rules a schema cannot express, such as external
/// existence checks or cross-field logic over the typed value.
pub struct Refined<V, F> {
    inner: V,
    check: F,
}

/// Layer an async refinement over `inner`.
pub fn refined<V, F>(inner: V, check: F) -> Refined<V, F> {
    Refined { inner, check }
}

#[async_trait]
impl<V, F, Fut> ValidationAdapter for Refined<V, F>
where
    V: ValidationAdapter,
    F: Fn(V::Output) -> Fut + Send + Sync,
    Fut: Future<Output = Result<V::Output, ValidationFailure>> + Send,
{
    type Output = V::Output;

    async fn parse(&self, raw: Value) -> ValidationOutcome<V::Output> {
        match self.inner.parse(raw).await {
            Outcome::Success { data } => match (self.check)(data).await {
                Ok(data) => Outcome::success(data),
                Err(failure) => Outcome::failure(failure),
            },
            failure => failure,
        }
    }
}
