//! Serde-typed validation adapter.

use crate::adapter::ValidationAdapter;
use async_trait::async_trait;
use doorman_core::{Outcome, ValidationFailure, ValidationOutcome};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;

/// A validation adapter whose "schema" is a Rust type: the input is
/// deserialized into `T` and serde's error message becomes the failure
/// message, with no field-level issues.
pub struct TypedValidation<T> {
    _output: PhantomData<fn() -> T>,
}

impl<T> TypedValidation<T> {
    pub fn new() -> Self {
        Self {
            _output: PhantomData,
        }
    }
}

impl<T> Default for TypedValidation<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> ValidationAdapter for TypedValidation<T>
where
    T: DeserializeOwned + Send,
{
    type Output = T;

    async fn parse(&self, raw: Value) -> ValidationOutcome<T> {
        match serde_json::from_value(raw) {
            Ok(output) => Outcome::success(output),
            Err(error) => Outcome::failure(ValidationFailure::new(error.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Point {
        x: i64,
        y: i64,
    }

    #[tokio::test]
    async fn deserializes_into_the_target_type() {
        let adapter: TypedValidation<Point> = TypedValidation::new();

        let parsed = adapter.parse(json!({"x": 1, "y": 2})).await;
        assert_eq!(parsed.into_data(), Some(Point { x: 1, y: 2 }));
    }

    #[tokio::test]
    async fn serde_errors_become_failures() {
        let adapter: TypedValidation<Point> = TypedValidation::new();

        let failure = adapter
            .parse(json!({"x": "one"}))
            .await
            .into_error()
            .expect("must fail");
        assert!(!failure.message.is_empty());
        assert!(failure.issues.is_empty());
    }
}
