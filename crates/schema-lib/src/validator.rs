// The validator abstraction

use crate::error::{SchemaError, SchemaResult};
use crate::explanation::Explanation;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A runtime check for the shape of an untrusted value.
///
/// `None` stands for a missing value (JavaScript's `undefined`), which is what
/// an object validator passes to its children for absent keys.
///
/// Implementations must keep the two operations in agreement:
/// `test(v) == explain(v).is_valid()` for every `v`. `test` may take a faster
/// short-circuiting path, but it must never disagree with `explain`.
///
/// Validators are immutable once built and may be shared freely across
/// threads.
pub trait Validator: Send + Sync + fmt::Debug {
    /// Whether `value` conforms.
    fn test(&self, value: Option<&Value>) -> bool;

    /// Whether `value` conforms, and if not, a failure that can be rendered
    /// into a message later.
    fn explain<'a>(&'a self, value: Option<&'a Value>) -> Explanation<'a>;
}

impl<V: Validator + ?Sized> Validator for &V {
    fn test(&self, value: Option<&Value>) -> bool {
        (**self).test(value)
    }

    fn explain<'a>(&'a self, value: Option<&'a Value>) -> Explanation<'a> {
        (**self).explain(value)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn test(&self, value: Option<&Value>) -> bool {
        (**self).test(value)
    }

    fn explain<'a>(&'a self, value: Option<&'a Value>) -> Explanation<'a> {
        (**self).explain(value)
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn test(&self, value: Option<&Value>) -> bool {
        (**self).test(value)
    }

    fn explain<'a>(&'a self, value: Option<&'a Value>) -> Explanation<'a> {
        (**self).explain(value)
    }
}

/// Conveniences available on every validator.
pub trait ValidatorExt: Validator {
    /// Type-erase this validator so it can sit next to others in a composite.
    fn boxed(self) -> Box<dyn Validator>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    /// Wrap this validator for reuse in several places of a schema.
    fn shared(self) -> Arc<dyn Validator>
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }

    /// Check a present value, turning a failure into an error that embeds
    /// the full explanation.
    fn check(&self, value: &Value) -> SchemaResult<()> {
        match self.explain(Some(value)) {
            Explanation::Valid => Ok(()),
            Explanation::Invalid(failure) => Err(SchemaError::from_failure(&failure)),
        }
    }

    /// Check a value and, if it conforms, deserialize it into `T`.
    fn narrow<T: DeserializeOwned>(&self, value: &Value) -> SchemaResult<T> {
        self.check(value)?;
        Ok(T::deserialize(value)?)
    }
}

impl<V: Validator + ?Sized> ValidatorExt for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{array, number, object, string};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Point {
        x: f64,
        label: String,
    }

    #[test]
    fn test_blanket_impls_delegate() {
        let inner = string();
        let by_ref: &dyn Validator = &inner;
        let boxed: Box<dyn Validator> = string().boxed();
        let shared: Arc<dyn Validator> = string().shared();
        let value = json!("x");

        assert!(by_ref.test(Some(&value)));
        assert!(boxed.test(Some(&value)));
        assert!(shared.test(Some(&value)));
        assert!(!shared.test(None));
        assert!(!boxed.explain(None).is_valid());
    }

    #[test]
    fn test_check_embeds_explanation() {
        let validator = array(number());
        assert!(validator.check(&json!([1, 2])).is_ok());

        let err = validator.check(&json!([1, "2"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Values in array were invalid. The explanations:\n\
             \t* Value at index 1: Expected a number, but got a string: \"2\"."
        );
    }

    #[test]
    fn test_narrow_into_struct() {
        let validator = object([("x", number().boxed()), ("label", string().boxed())]);

        let point: Point = validator
            .narrow(&json!({"x": 1.5, "label": "a", "extra": true}))
            .unwrap();
        assert_eq!(
            point,
            Point {
                x: 1.5,
                label: "a".to_string()
            }
        );

        let err = validator.narrow::<Point>(&json!({"x": 1.5})).unwrap_err();
        assert!(err.explanation().unwrap().contains("Value at key \"label\""));
    }

    #[test]
    fn test_narrow_reports_deserialize_errors() {
        // The shape check passes but `Point` needs more than the validator asks for.
        let validator = object([("x", number().boxed())]);
        let err = validator.narrow::<Point>(&json!({"x": 1})).unwrap_err();
        assert!(matches!(err, SchemaError::Deserialize(_)));
    }
}
