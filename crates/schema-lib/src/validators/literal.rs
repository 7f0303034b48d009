//! Validators bound to exactly one accepted value.

use crate::explanation::{Explanation, Failure};
use crate::json;
use crate::validator::Validator;
use serde_json::Value;

/// A value a [`LiteralValidator`] can accept.
///
/// Only scalars are offered: strict equality against a freshly parsed array
/// or object can never succeed.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A missing value
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Literal {
    /// Strict equality: same type and same value, no coercion.
    ///
    /// Numbers compare as `f64`, so `1` equals `1.0` and `NaN` equals nothing.
    pub fn matches(&self, value: Option<&Value>) -> bool {
        match (self, value) {
            (Literal::Undefined, None) => true,
            (Literal::Null, Some(Value::Null)) => true,
            (Literal::Bool(expected), Some(Value::Bool(actual))) => expected == actual,
            (Literal::Number(expected), Some(Value::Number(actual))) => {
                actual.as_f64() == Some(*expected)
            }
            (Literal::String(expected), Some(Value::String(actual))) => expected == actual,
            _ => false,
        }
    }

    /// Render this literal as JSON, with `undefined` for [`Literal::Undefined`].
    pub fn to_json_string(&self, indent: &str) -> String {
        match self {
            Literal::Undefined => json::stringify(None, indent),
            Literal::Null => "null".to_string(),
            Literal::Bool(b) => b.to_string(),
            Literal::Number(n) => json::number_to_string(*n),
            Literal::String(s) => json::quote(s),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Number(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Number(f64::from(value))
    }
}

impl From<()> for Literal {
    fn from(_: ()) -> Self {
        Literal::Null
    }
}

/// Accepts exactly one value.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralValidator {
    accepted: Literal,
}

impl LiteralValidator {
    pub fn new(accepted: Literal) -> Self {
        Self { accepted }
    }

    pub fn accepted(&self) -> &Literal {
        &self.accepted
    }
}

impl Validator for LiteralValidator {
    fn test(&self, value: Option<&Value>) -> bool {
        self.explain(value).is_valid()
    }

    fn explain<'a>(&'a self, value: Option<&'a Value>) -> Explanation<'a> {
        if self.accepted.matches(value) {
            Explanation::Valid
        } else {
            Explanation::Invalid(Failure::LiteralMismatch {
                value,
                expected: &self.accepted,
            })
        }
    }
}

/// Validate that a value is strictly equal to `accepted`.
///
/// ```
/// use schema_lib::{literal, Validator};
/// use serde_json::json;
///
/// assert!(literal("asc").test(Some(&json!("asc"))));
/// assert!(!literal(1).test(Some(&json!("1"))));
/// ```
pub fn literal(accepted: impl Into<Literal>) -> LiteralValidator {
    LiteralValidator::new(accepted.into())
}

/// Validate that a value is missing.
pub fn undefined() -> LiteralValidator {
    LiteralValidator::new(Literal::Undefined)
}

/// Validate that a value is `null`.
pub fn null() -> LiteralValidator {
    LiteralValidator::new(Literal::Null)
}
