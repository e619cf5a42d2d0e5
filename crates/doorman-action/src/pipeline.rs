//! The action pipeline: validate, resolve the actor, check permission,
//! run the handler.

use crate::handler::ActionHandler;
use doorman_core::{ActionError, ActionResult, FrameworkError, Outcome};
use doorman_policy::{ActorResolver, PermissionAdapter};
use doorman_schema::ValidationAdapter;
use serde_json::Value;
use std::sync::Arc;

/// A configured, invocable action.
///
/// Construction starts from the minimal shape (a validation adapter and a
/// handler) and optionally layers on an actor resolver and a permission
/// adapter. Without a resolver the handler sees no actor; without a
/// permission adapter every validated invocation is permitted. All parts
/// are immutable after construction, so one `Action` can serve any number
/// of concurrent invocations.
pub struct Action<V, A, H>
where
    V: ValidationAdapter,
{
    validation: V,
    resolver: Option<Arc<dyn ActorResolver<V::Output, Actor = A>>>,
    permission: Option<Arc<dyn PermissionAdapter<A, V::Output>>>,
    handler: H,
}

impl<V, A, H> Action<V, A, H>
where
    V: ValidationAdapter,
    V::Output: Sync,
    A: Send + Sync,
    H: ActionHandler<V::Output, A>,
{
    /// The minimal configuration: validation plus handler.
    pub fn new(validation: V, handler: H) -> Self {
        Self {
            validation,
            resolver: None,
            permission: None,
            handler,
        }
    }

    /// Resolve an actor from the validated params before the permission
    /// check and handler run.
    pub fn with_actor_resolver<R>(mut self, resolver: R) -> Self
    where
        R: ActorResolver<V::Output, Actor = A> + 'static,
    {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    /// Gate the handler behind a permission decision.
    pub fn with_permission<P>(mut self, permission: P) -> Self
    where
        P: PermissionAdapter<A, V::Output> + 'static,
    {
        self.permission = Some(Arc::new(permission));
        self
    }

    /// Run the pipeline over one raw input.
    ///
    /// Stages run strictly in order and each awaits the previous stage's
    /// outcome; the two framework rejections (validation, permission)
    /// short-circuit before the handler. The handler's result is returned
    /// verbatim, wrapped only in provenance.
    pub async fn invoke(&self, input: Value) -> ActionResult<H::Data, H::Error> {
        let params = match self.validation.parse(input).await {
            Outcome::Success { data } => data,
            Outcome::Failure { error } => {
                tracing::debug!(message = %error.message, "input failed validation");
                return Outcome::failure(ActionError::Framework(FrameworkError::validation(
                    error,
                )));
            }
        };

        let actor = match &self.resolver {
            Some(resolver) => match resolver.resolve(&params).await {
                Ok(actor) => actor,
                Err(error) => {
                    tracing::debug!(error = %error, "actor resolution failed");
                    return Outcome::failure(ActionError::Framework(
                        FrameworkError::actor_resolution(error.to_string()),
                    ));
                }
            },
            None => None,
        };

        if let Some(permission) = &self.permission {
            let decision = permission.check(actor.as_ref(), &params).await;
            if !decision.is_permitted() {
                tracing::debug!("permission denied");
                return Outcome::failure(ActionError::Framework(
                    FrameworkError::permission_denied(),
                ));
            }
        }

        self.handler
            .handle(params, actor)
            .await
            .map_err(ActionError::Handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::handler_fn;
    use doorman_core::{Outcome, ValidationFailure};
    use doorman_schema::validation_fn;
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn validation_failure_short_circuits_the_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler_calls = calls.clone();

        let action = Action::new(
            validation_fn(|_raw: Value| async move {
                Outcome::<i64, _>::failure(ValidationFailure::new("bad input"))
            }),
            handler_fn(move |params: i64, _actor: Option<()>| {
                let calls = handler_calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Outcome::<_, String>::success(params)
                }
            }),
        );

        let result = action.invoke(json!({})).await;
        match result {
            Outcome::Failure {
                error: ActionError::Framework(FrameworkError::Validation { message, .. }),
            } => assert_eq!(message, "bad input"),
            other => panic!("expected a validation failure, got {other:?}"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn handler_receives_the_validator_output() {
        let action = Action::new(
            validation_fn(|raw: Value| async move {
                // The adapter transforms the raw input, it does not just
                // pass it through.
                Outcome::success(raw.get("n").and_then(Value::as_i64).unwrap_or(0) + 1)
            }),
            handler_fn(|params: i64, _actor: Option<()>| async move {
                Outcome::<_, String>::success(params)
            }),
        );

        let result = action.invoke(json!({"n": 41})).await;
        assert_eq!(result.into_data(), Some(42));
    }
}
