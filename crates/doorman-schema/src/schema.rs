//! JSON-Schema-backed validation adapter.

use crate::adapter::ValidationAdapter;
use async_trait::async_trait;
use doorman_core::{Issue, Outcome, ValidationFailure, ValidationOutcome};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;

/// Error building a [`SchemaValidation`] adapter.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema document is not a valid JSON Schema.
    #[error("invalid JSON schema: {0}")]
    InvalidSchema(String),
}

/// A validation adapter over a compiled JSON Schema (draft 2020-12,
/// format assertions enforced).
///
/// Parsing runs in three phases:
///
/// 1. **Shaping**: missing object properties whose subschema declares a
///    `default` are filled in; with [`with_coercion`](Self::with_coercion)
///    enabled, string scalars are coerced toward the schema's declared
///    `type` (string→number/integer/boolean, scalar→single-element array).
/// 2. **Validation**: the shaped value is checked against the compiled
///    schema; every reported violation becomes an [`Issue`] in the
///    backend's order, and the earliest issue supplies the failure
///    message.
/// 3. **Typing**: the shaped value is deserialized into `T`.
///
/// Cross-field rules are expressed in the schema itself (`required`,
/// `dependentRequired`, `allOf`/`if`/`then`); for imperative or async
/// rules, layer [`refined`](crate::refined) on top.
pub struct SchemaValidation<T> {
    schema: Value,
    compiled: jsonschema::Validator,
    coerce: bool,
    _output: PhantomData<fn() -> T>,
}

impl<T> SchemaValidation<T> {
    /// Compile a schema document into an adapter.
    pub fn new(schema: Value) -> Result<Self, SchemaError> {
        let compiled = jsonschema::draft202012::options()
            .should_validate_formats(true)
            .build(&schema)
            .map_err(|e| SchemaError::InvalidSchema(e.to_string()))?;

        Ok(Self {
            schema,
            compiled,
            coerce: false,
            _output: PhantomData,
        })
    }

    /// Enable type coercion guided by the schema's declared `type`.
    ///
    /// Off by default so a schema's rejections stay strict unless the
    /// action opts in.
    pub fn with_coercion(mut self) -> Self {
        self.coerce = true;
        self
    }
}

#[async_trait]
impl<T> ValidationAdapter for SchemaValidation<T>
where
    T: DeserializeOwned + Send,
{
    type Output = T;

    async fn parse(&self, raw: Value) -> ValidationOutcome<T> {
        let mut value = raw;
        apply_defaults(&self.schema, &mut value);
        if self.coerce {
            coerce_value(&self.schema, &mut value);
        }

        let issues: Vec<Issue> = self
            .compiled
            .iter_errors(&value)
            .map(|error| Issue::new(error.instance_path().to_string(), error.to_string()))
            .collect();

        if !issues.is_empty() {
            return Outcome::failure(ValidationFailure::from_issues(issues));
        }

        match serde_json::from_value(value) {
            Ok(output) => Outcome::success(output),
            Err(error) => {
                // A schema-valid document that the output type cannot
                // represent is still a failure, not a panic.
                tracing::warn!(%error, "schema-valid input did not deserialize into the output type");
                Outcome::failure(ValidationFailure::new(format!(
                    "validated input did not match the expected shape: {error}"
                )))
            }
        }
    }
}

/// Fill in missing object properties that declare a `default`, recursing
/// through nested objects and array items.
fn apply_defaults(schema: &Value, value: &mut Value) {
    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        if let Value::Object(map) = &mut *value {
            for (name, subschema) in properties {
                if let Some(child) = map.get_mut(name) {
                    apply_defaults(subschema, child);
                } else if let Some(default) = subschema.get("default") {
                    map.insert(name.clone(), default.clone());
                }
            }
        }
    }

    if let Some(items) = schema.get("items") {
        if let Value::Array(elements) = value {
            for element in elements {
                apply_defaults(items, element);
            }
        }
    }
}

/// Nudge string scalars toward the schema's declared `type`. Values that
/// cannot be coerced are left untouched for the validator to reject.
fn coerce_value(schema: &Value, value: &mut Value) {
    match schema.get("type").and_then(Value::as_str) {
        Some("number") => {
            if let Value::String(s) = &*value {
                if let Some(number) = s.trim().parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
                    *value = Value::Number(number);
                }
            }
        }
        Some("integer") => {
            if let Value::String(s) = &*value {
                if let Ok(n) = s.trim().parse::<i64>() {
                    *value = Value::Number(n.into());
                }
            }
        }
        Some("boolean") => {
            if let Value::String(s) = &*value {
                match s.trim() {
                    "true" => *value = Value::Bool(true),
                    "false" => *value = Value::Bool(false),
                    _ => {}
                }
            }
        }
        Some("array") => {
            if !value.is_array() && !value.is_null() {
                *value = Value::Array(vec![value.take()]);
            }
            if let Some(items) = schema.get("items") {
                if let Value::Array(elements) = value {
                    for element in elements {
                        coerce_value(items, element);
                    }
                }
            }
        }
        _ => {
            // Objects and untyped schemas: recurse into declared properties.
            if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
                if let Value::Object(map) = value {
                    for (name, subschema) in properties {
                        if let Some(child) = map.get_mut(name) {
                            coerce_value(subschema, child);
                        }
                    }
                }
            }
        }
    }
}
