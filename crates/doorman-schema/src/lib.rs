//! Validation capability and concrete adapters.
//!
//! The pipeline is decoupled from any specific validation library through
//! the [`ValidationAdapter`] trait: one async `parse` operation that turns
//! untyped input into a typed output or a structured failure, and never
//! panics. This crate ships the adapters most actions need:
//!
//! - [`SchemaValidation`]: a JSON Schema (draft 2020-12) backend with
//!   schema defaults and opt-in type coercion
//! - [`TypedValidation`]: plain serde deserialization into a Rust type
//! - [`validation_fn`]: an arbitrary async closure
//! - [`Refined`]: an async cross-field check layered over any adapter

mod adapter;
mod refine;
mod schema;
mod typed;

pub use adapter::{ValidationAdapter, ValidationFn, validation_fn};
pub use refine::{Refined, refined};
pub use schema::{SchemaError, SchemaValidation};
pub use typed::TypedValidation;
