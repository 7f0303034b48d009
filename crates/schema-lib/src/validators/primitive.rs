//! Validators that only check a value's `typeof` tag.

use crate::explanation::{Explanation, Failure};
use crate::validator::Validator;
use serde_json::Value;

/// The primitive types a [`PrimitiveValidator`] can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Number,
    Boolean,
}

impl PrimitiveKind {
    /// The `typeof` tag values of this kind report.
    pub fn type_name(self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Boolean => "boolean",
        }
    }

    fn matches(self, value: Option<&Value>) -> bool {
        matches!(
            (self, value),
            (PrimitiveKind::String, Some(Value::String(_)))
                | (PrimitiveKind::Number, Some(Value::Number(_)))
                | (PrimitiveKind::Boolean, Some(Value::Bool(_)))
        )
    }
}

/// Accepts any value of one primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveValidator {
    kind: PrimitiveKind,
}

impl PrimitiveValidator {
    pub fn new(kind: PrimitiveKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }
}

impl Validator for PrimitiveValidator {
    fn test(&self, value: Option<&Value>) -> bool {
        self.explain(value).is_valid()
    }

    fn explain<'a>(&'a self, value: Option<&'a Value>) -> Explanation<'a> {
        if self.kind.matches(value) {
            Explanation::Valid
        } else {
            Explanation::Invalid(Failure::TypeMismatch {
                expected: self.kind,
                value,
            })
        }
    }
}

/// Validate that a value is a string.
pub fn string() -> PrimitiveValidator {
    PrimitiveValidator::new(PrimitiveKind::String)
}

/// Validate that a value is a number.
///
/// There is no range or finiteness check: every JSON number is accepted.
pub fn number() -> PrimitiveValidator {
    PrimitiveValidator::new(PrimitiveKind::Number)
}

/// Validate that a value is `true` or `false`.
pub fn boolean() -> PrimitiveValidator {
    PrimitiveValidator::new(PrimitiveKind::Boolean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_accepts_strings() {
        assert!(string().test(Some(&json!(""))));
        assert!(string().test(Some(&json!("hello"))));
    }

    #[test]
    fn test_string_rejects_other_types() {
        for value in [json!(1), json!(null), json!(true), json!([]), json!({})] {
            assert!(!string().test(Some(&value)), "accepted {value}");
        }
        assert!(!string().test(None));
    }

    #[test]
    fn test_number_accepts_every_number() {
        for value in [json!(0), json!(-3), json!(1.5), json!(f64::MAX), json!(u64::MAX)] {
            assert!(number().test(Some(&value)), "rejected {value}");
        }
        assert!(!number().test(Some(&json!("1"))));
    }

    #[test]
    fn test_boolean() {
        assert!(boolean().test(Some(&json!(false))));
        assert!(!boolean().test(Some(&json!(0))));
    }

    #[test]
    fn test_explain_string_failure() {
        let value = json!(5);
        let validator = string();
        let explanation = validator.explain(Some(&value));
        insta::assert_snapshot!(
            explanation.message().unwrap(),
            @"Expected a string, but got a number: 5."
        );
    }

    #[test]
    fn test_explain_number_failure_on_null_and_undefined() {
        let validator = number();
        assert_eq!(
            validator.explain(Some(&json!(null))).message().unwrap(),
            "Expected a number, but got a object: null."
        );
        assert_eq!(
            validator.explain(None).message().unwrap(),
            "Expected a number, but got a undefined: undefined."
        );
    }

    #[test]
    fn test_explain_valid_has_no_failure() {
        let value = json!("ok");
        let validator = string();
        assert_eq!(validator.explain(Some(&value)), Explanation::Valid);
    }

    #[test]
    fn test_explain_echoes_large_numbers_in_exponent_form() {
        let value: Value = serde_json::from_str("1e300").unwrap();
        assert_eq!(
            string().explain(Some(&value)).message().unwrap(),
            "Expected a string, but got a number: 1e+300."
        );
    }
}
