//! The actor-resolution capability.

use async_trait::async_trait;
use std::future::Future;

/// Resolves the actor associated with an invocation from its validated
/// params.
///
/// `Ok(None)` is the explicit absence marker: an anonymous invocation is
/// not a failure. `Err` means the resolution mechanism itself broke (e.g.
/// a session store was unreachable); the pipeline reports that as an
/// actor-resolution error rather than letting it unwind.
#[async_trait]
pub trait ActorResolver<Params>: Send + Sync {
    type Actor: Send + Sync;

    async fn resolve(&self, params: &Params) -> anyhow::Result<Option<Self::Actor>>;
}

/// An actor resolver backed by an async closure.
///
/// The closure receives the params by value (cloned in), which keeps
/// arbitrary async lookups free of borrow gymnastics.
pub struct ResolverFn<F> {
    f: F,
}

/// Wrap an async closure as an [`ActorResolver`].
pub fn resolver_fn<F>(f: F) -> ResolverFn<F> {
    ResolverFn { f }
}

#[async_trait]
impl<Params, Actor, F, Fut> ActorResolver<Params> for ResolverFn<F>
where
    Params: Clone + Send + Sync,
    Actor: Send + Sync,
    F: Fn(Params) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Option<Actor>>> + Send,
{
    type Actor = Actor;

    async fn resolve(&self, params: &Params) -> anyhow::Result<Option<Actor>> {
        (self.f)(params.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct User {
        id: String,
    }

    #[tokio::test]
    async fn closure_resolver_produces_an_actor() {
        let resolver = resolver_fn(|params: String| async move {
            Ok(Some(User {
                id: format!("user-{params}"),
            }))
        });

        let actor = resolver.resolve(&"42".to_string()).await.unwrap();
        assert_eq!(
            actor,
            Some(User {
                id: "user-42".to_string()
            })
        );
    }

    #[tokio::test]
    async fn absence_is_not_an_error() {
        let resolver =
            resolver_fn(|_params: String| async move { Ok(None::<User>) });

        let actor = resolver.resolve(&"anonymous".to_string()).await.unwrap();
        assert!(actor.is_none());
    }

    #[tokio::test]
    async fn resolver_failures_surface_as_errors() {
        let resolver = resolver_fn(|_params: String| async move {
            Err::<Option<User>, _>(anyhow::anyhow!("session store unreachable"))
        });

        let err = resolver.resolve(&"42".to_string()).await.unwrap_err();
        assert_eq!(err.to_string(), "session store unreachable");
    }
}
