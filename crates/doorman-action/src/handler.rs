//! The handler seam of the pipeline.

use async_trait::async_trait;
use doorman_core::Outcome;
use std::future::Future;

/// The business-logic step of an action.
///
/// Receives the validator's output (not the raw input) and the resolved
/// actor, if any. Whatever [`Outcome`] it returns is the action's result,
/// verbatim; the pipeline never wraps, retries, or reclassifies
/// handler-produced successes or failures.
#[async_trait]
pub trait ActionHandler<Params, Actor>: Send + Sync {
    type Data: Send;
    type Error: Send;

    async fn handle(&self, params: Params, actor: Option<Actor>)
    -> Outcome<Self::Data, Self::Error>;
}

/// A handler backed by an async closure.
pub struct HandlerFn<F> {
    f: F,
}

/// Wrap an async closure as an [`ActionHandler`].
pub fn handler_fn<F>(f: F) -> HandlerFn<F> {
    HandlerFn { f }
}

#[async_trait]
impl<Params, Actor, F, Fut, D, E> ActionHandler<Params, Actor> for HandlerFn<F>
where
    Params: Send + 'static,
    Actor: Send + 'static,
    F: Fn(Params, Option<Actor>) -> Fut + Send + Sync,
    Fut: Future<Output = Outcome<D, E>> + Send,
    D: Send,
    E: Send,
{
    type Data = D;
    type Error = E;

    async fn handle(&self, params: Params, actor: Option<Actor>) -> Outcome<D, E> {
        (self.f)(params, actor).await
    }
}
