//! Validator for objects with a fixed set of declared keys.

use crate::explanation::{Explanation, Failure};
use crate::validator::Validator;
use serde_json::Value;

/// Accepts non-null objects whose declared keys each pass their validator.
///
/// Only declared keys are looked at: anything else in the object is ignored.
/// A declared key that is absent is validated as a missing value, so a key is
/// optional exactly when its validator accepts `None` (see
/// [`crate::optional`]).
///
/// Arrays pass the "non-null object" check. Declared keys that are canonical
/// array indices (`"0"`, `"1"`, ...) resolve to the element at that index;
/// every other key is missing.
#[derive(Debug, Default)]
pub struct ObjectValidator {
    fields: Vec<(String, Box<dyn Validator>)>,
}

impl ObjectValidator {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declare `key`, validated by `validator`.
    ///
    /// Declaring a key twice keeps its original position and replaces its
    /// validator.
    pub fn field(mut self, key: impl Into<String>, validator: impl Validator + 'static) -> Self {
        self.insert(key.into(), Box::new(validator));
        self
    }

    /// Declared keys, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    fn insert(&mut self, key: String, validator: Box<dyn Validator>) {
        if let Some(slot) = self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = validator;
        } else {
            self.fields.push((key, validator));
        }
    }
}

impl Validator for ObjectValidator {
    fn test(&self, value: Option<&Value>) -> bool {
        let Some(value) = value.filter(|v| is_non_null_object(v)) else {
            return false;
        };
        self.fields
            .iter()
            .all(|(key, validator)| validator.test(property(value, key)))
    }

    fn explain<'a>(&'a self, value: Option<&'a Value>) -> Explanation<'a> {
        let Some(target) = value.filter(|v| is_non_null_object(v)) else {
            return Explanation::Invalid(Failure::NotAnObject { value });
        };

        let failures: Vec<(&'a str, Failure<'a>)> = self
            .fields
            .iter()
            .filter_map(|(key, validator)| {
                validator
                    .explain(property(target, key))
                    .into_failure()
                    .map(|failure| (key.as_str(), failure))
            })
            .collect();

        if failures.is_empty() {
            Explanation::Valid
        } else {
            Explanation::Invalid(Failure::InvalidProperties(failures))
        }
    }
}

fn is_non_null_object(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Look up `key` the way property access on the value would.
fn property<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => array_index(key).and_then(|index| items.get(index)),
        _ => None,
    }
}

/// Parse a canonical array index: decimal digits, no sign, no leading zeros.
fn array_index(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse().ok()
}

/// Validate that a value is a non-null object whose declared keys each match
/// their validator.
///
/// ```
/// use schema_lib::{Validator, ValidatorExt, array, object, string};
/// use serde_json::json;
///
/// let validator = object([("a", array(string()).boxed())]);
/// assert!(validator.test(Some(&json!({"a": ["x"], "b": 999}))));
/// ```
pub fn object<I, K>(fields: I) -> ObjectValidator
where
    I: IntoIterator<Item = (K, Box<dyn Validator>)>,
    K: Into<String>,
{
    let mut validator = ObjectValidator::new();
    for (key, field) in fields {
        validator.insert(key.into(), field);
    }
    validator
}
