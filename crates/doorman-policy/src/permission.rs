//! The permission capability and its stock implementations.

use async_trait::async_trait;
use doorman_core::PermissionOutcome;

/// Decides whether an invocation may proceed.
///
/// A permission adapter is a pure function of its inputs: it holds no
/// mutable state and must not mutate the actor or the params (both arrive
/// by shared reference). `actor` is `None` when no actor resolver is
/// configured or the resolver reported absence.
#[async_trait]
pub trait PermissionAdapter<Actor, Params>: Send + Sync {
    async fn check(&self, actor: Option<&Actor>, params: &Params) -> PermissionOutcome;
}

/// Permits everything. The behavior an action without a configured
/// permission adapter gets, available as an explicit client.
pub struct AllowAll;

#[async_trait]
impl<Actor, Params> PermissionAdapter<Actor, Params> for AllowAll
where
    Actor: Sync,
    Params: Sync,
{
    async fn check(&self, _actor: Option<&Actor>, _params: &Params) -> PermissionOutcome {
        PermissionOutcome::Permitted
    }
}

/// Denies everything. Useful for lockdown configurations and tests.
pub struct DenyAll;

#[async_trait]
impl<Actor, Params> PermissionAdapter<Actor, Params> for DenyAll
where
    Actor: Sync,
    Params: Sync,
{
    async fn check(&self, _actor: Option<&Actor>, _params: &Params) -> PermissionOutcome {
        tracing::debug!("deny-all permission adapter rejected the invocation");
        PermissionOutcome::Denied
    }
}

/// A permission adapter backed by a plain predicate closure.
///
/// Permission decisions are pure functions of `(actor, params)`, so a
/// synchronous closure covers the common case; implement
/// [`PermissionAdapter`] directly for decisions that consult an external
/// policy engine.
pub struct PermissionFn<F> {
    f: F,
}

/// Wrap a predicate closure as a [`PermissionAdapter`].
pub fn permission_fn<F>(f: F) -> PermissionFn<F> {
    PermissionFn { f }
}

#[async_trait]
impl<Actor, Params, F> PermissionAdapter<Actor, Params> for PermissionFn<F>
where
    Actor: Sync,
    Params: Sync,
    F: Fn(Option<&Actor>, &Params) -> PermissionOutcome + Send + Sync,
{
    async fn check(&self, actor: Option<&Actor>, params: &Params) -> PermissionOutcome {
        (self.f)(actor, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct User {
        admin: bool,
    }

    #[tokio::test]
    async fn allow_all_permits() {
        let outcome = PermissionAdapter::<User, i64>::check(&AllowAll, None, &1).await;
        assert!(outcome.is_permitted());
    }

    #[tokio::test]
    async fn deny_all_denies() {
        let outcome = PermissionAdapter::<User, i64>::check(&DenyAll, None, &1).await;
        assert!(!outcome.is_permitted());
    }

    #[tokio::test]
    async fn predicate_sees_actor_and_params() {
        let adapter = permission_fn(|actor: Option<&User>, params: &i64| {
            PermissionOutcome::from(actor.is_some_and(|user| user.admin) && *params > 0)
        });

        let admin = User { admin: true };
        let visitor = User { admin: false };

        assert!(adapter.check(Some(&admin), &5).await.is_permitted());
        assert!(!adapter.check(Some(&visitor), &5).await.is_permitted());
        assert!(!adapter.check(Some(&admin), &-5).await.is_permitted());
        assert!(!adapter.check(None, &5).await.is_permitted());
    }
}
