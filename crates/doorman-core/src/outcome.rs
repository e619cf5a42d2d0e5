//! The tagged success/failure result used uniformly across the pipeline.

use serde::{Deserialize, Serialize};

/// A two-variant tagged result.
///
/// Exactly one of `data`/`error` exists, determined by the `status` tag;
/// consumers narrow on the variant before touching either field. The error
/// type defaults to a plain message string; handlers may supply a richer
/// shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<T, E = String> {
    /// The operation succeeded and produced `data`.
    Success { data: T },
    /// The operation failed with `error`.
    Failure { error: E },
}

impl<T, E> Outcome<T, E> {
    /// Build a success carrying `data`.
    pub fn success(data: T) -> Self {
        Outcome::Success { data }
    }

    /// Build a failure carrying `error`.
    pub fn failure(error: E) -> Self {
        Outcome::Failure { error }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure { .. })
    }

    /// The success payload, if this is a success.
    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success { data } => Some(data),
            Outcome::Failure { .. } => None,
        }
    }

    /// The failure payload, if this is a failure.
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { error } => Some(error),
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Outcome::Success { data } => Some(data),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn into_error(self) -> Option<E> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { error } => Some(error),
        }
    }

    /// Map the success payload, leaving failures untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Outcome::Success { data } => Outcome::Success { data: f(data) },
            Outcome::Failure { error } => Outcome::Failure { error },
        }
    }

    /// Map the failure payload, leaving successes untouched.
    pub fn map_err<F2, F: FnOnce(E) -> F2>(self, f: F) -> Outcome<T, F2> {
        match self {
            Outcome::Success { data } => Outcome::Success { data },
            Outcome::Failure { error } => Outcome::Failure { error: f(error) },
        }
    }

    /// Convert into a `std::result::Result`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success { data } => Ok(data),
            Outcome::Failure { error } => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Outcome::Success { data },
            Err(error) => Outcome::Failure { error },
        }
    }
}

/// The verdict of a permission check.
///
/// Carries no payload; it exists as a tag (rather than a bare bool) for
/// symmetry with [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionOutcome {
    Permitted,
    Denied,
}

impl PermissionOutcome {
    pub fn is_permitted(self) -> bool {
        matches!(self, PermissionOutcome::Permitted)
    }
}

impl From<bool> for PermissionOutcome {
    fn from(permitted: bool) -> Self {
        if permitted {
            PermissionOutcome::Permitted
        } else {
            PermissionOutcome::Denied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_exposes_only_data() {
        let outcome: Outcome<i64> = Outcome::success(7);
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.data(), Some(&7));
        assert_eq!(outcome.error(), None);
    }

    #[test]
    fn failure_exposes_only_error() {
        let outcome: Outcome<i64> = Outcome::failure("boom".to_string());
        assert!(outcome.is_failure());
        assert_eq!(outcome.data(), None);
        assert_eq!(outcome.error().map(String::as_str), Some("boom"));
    }

    #[test]
    fn map_touches_only_the_success_side() {
        let doubled = Outcome::<i64>::success(21).map(|n| n * 2);
        assert_eq!(doubled.into_data(), Some(42));

        let failed = Outcome::<i64>::failure("no".to_string()).map(|n| n * 2);
        assert_eq!(failed.into_error().as_deref(), Some("no"));
    }

    #[test]
    fn round_trips_through_std_result() {
        let ok: Outcome<i64, String> = Ok(3).into();
        assert_eq!(ok.into_result(), Ok(3));

        let err: Outcome<i64, String> = Err("bad".to_string()).into();
        assert_eq!(err.into_result(), Err("bad".to_string()));
    }

    #[test]
    fn serializes_with_a_status_tag() {
        let success: Outcome<_, String> = Outcome::success(json!({"id": 1}));
        assert_eq!(
            serde_json::to_value(&success).unwrap(),
            json!({"status": "success", "data": {"id": 1}})
        );

        let failure: Outcome<i64> = Outcome::failure("nope".to_string());
        assert_eq!(
            serde_json::to_value(&failure).unwrap(),
            json!({"status": "failure", "error": "nope"})
        );
    }

    #[test]
    fn deserializes_from_the_tagged_shape() {
        let outcome: Outcome<i64> =
            serde_json::from_value(json!({"status": "success", "data": 5})).unwrap();
        assert_eq!(outcome, Outcome::success(5));
    }

    #[test]
    fn permission_outcome_from_bool() {
        assert!(PermissionOutcome::from(true).is_permitted());
        assert!(!PermissionOutcome::from(false).is_permitted());
    }
}
