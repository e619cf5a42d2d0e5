//! Composable validate/authorize/handle action pipeline.
//!
//! An [`Action`] bundles a validation adapter, an optional actor resolver,
//! an optional permission adapter, and a handler into one invocable unit.
//! Each invocation is a single linear pass (validate, resolve the actor,
//! check permission, run the handler) with two conditional early exits,
//! and every path lands in the same tagged [`ActionResult`]
//! (doorman-core): framework rejections as typed failures, handler
//! results verbatim.
//!
//! ```no_run
//! use doorman_action::{Action, handler_fn};
//! use doorman_core::Outcome;
//! use doorman_schema::SchemaValidation;
//! use serde::Deserialize;
//! use serde_json::json;
//!
//! #[derive(Debug, Clone, Deserialize)]
//! struct Greeting { name: String, age: i64 }
//!
//! # async fn run() -> Result<(), doorman_schema::SchemaError> {
//! let action = Action::new(
//!     SchemaValidation::<Greeting>::new(json!({
//!         "type": "object",
//!         "properties": {
//!             "name": {"type": "string"},
//!             "age": {"type": "integer"}
//!         },
//!         "required": ["name", "age"]
//!     }))?,
//!     handler_fn(|params: Greeting, _actor: Option<()>| async move {
//!         Outcome::<_, String>::success(format!(
//!             "Hello {}, you are {} years old", params.name, params.age
//!         ))
//!     }),
//! );
//!
//! let result = action.invoke(json!({"name": "Alice", "age": 30})).await;
//! assert!(result.is_success());
//! # Ok(())
//! # }
//! ```

mod handler;
mod pipeline;

pub use handler::{ActionHandler, HandlerFn, handler_fn};
pub use pipeline::Action;

pub use doorman_core::{ActionError, ActionResult, FrameworkError, Outcome};
