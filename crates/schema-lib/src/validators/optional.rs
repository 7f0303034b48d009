//! Explicit optional-field wrapper.

use crate::explanation::{Explanation, Failure};
use crate::validator::Validator;
use crate::validators::Literal;
use serde_json::Value;

const UNDEFINED: &Literal = &Literal::Undefined;

/// Accepts a missing value, or anything the inner validator accepts.
///
/// Behaves exactly like `one_of([undefined(), inner])`, including its
/// explanation, without the boxing.
#[derive(Debug)]
pub struct OptionalValidator<V> {
    inner: V,
}

impl<V: Validator> OptionalValidator<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Validator> Validator for OptionalValidator<V> {
    fn test(&self, value: Option<&Value>) -> bool {
        value.is_none() || self.inner.test(value)
    }

    fn explain<'a>(&'a self, value: Option<&'a Value>) -> Explanation<'a> {
        if value.is_none() {
            return Explanation::Valid;
        }
        match self.inner.explain(value) {
            Explanation::Valid => Explanation::Valid,
            Explanation::Invalid(failure) => Explanation::Invalid(Failure::NoMatchingBranch {
                value,
                branches: vec![
                    Failure::LiteralMismatch {
                        value,
                        expected: UNDEFINED,
                    },
                    failure,
                ],
            }),
        }
    }
}

/// Make a declared object key optional.
///
/// ```
/// use schema_lib::{Validator, ValidatorExt, number, object, optional};
/// use serde_json::json;
///
/// let validator = object([("page", optional(number()).boxed())]);
/// assert!(validator.test(Some(&json!({}))));
/// assert!(!validator.test(Some(&json!({"page": "1"}))));
/// ```
pub fn optional<V: Validator>(inner: V) -> OptionalValidator<V> {
    OptionalValidator::new(inner)
}
