//! Validator for arrays whose elements all share one shape.

use crate::explanation::{Explanation, Failure};
use crate::validator::Validator;
use serde_json::Value;

/// Accepts arrays whose every element passes the element validator.
#[derive(Debug)]
pub struct ArrayValidator<E> {
    element: E,
}

impl<E: Validator> ArrayValidator<E> {
    pub fn new(element: E) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &E {
        &self.element
    }
}

impl<E: Validator> Validator for ArrayValidator<E> {
    fn test(&self, value: Option<&Value>) -> bool {
        // Stops at the first failing element instead of collecting them.
        match value {
            Some(Value::Array(items)) => items.iter().all(|item| self.element.test(Some(item))),
            _ => false,
        }
    }

    fn explain<'a>(&'a self, value: Option<&'a Value>) -> Explanation<'a> {
        let Some(Value::Array(items)) = value else {
            return Explanation::Invalid(Failure::NotAnArray { value });
        };

        let failures: Vec<(usize, Failure<'a>)> = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                self.element
                    .explain(Some(item))
                    .into_failure()
                    .map(|failure| (index, failure))
            })
            .collect();

        if failures.is_empty() {
            Explanation::Valid
        } else {
            Explanation::Invalid(Failure::InvalidElements(failures))
        }
    }
}

/// Validate that a value is an array and that each element matches `element`.
pub fn array<E: Validator>(element: E) -> ArrayValidator<E> {
    ArrayValidator::new(element)
}
