//! Validator for unions of shapes.

use crate::explanation::{Explanation, Failure};
use crate::validator::Validator;
use serde_json::Value;

/// Accepts a value if at least one member validator accepts it.
///
/// Members are tried in order. `test` stops at the first match; `explain`
/// also returns as soon as a member accepts, but when none do it keeps every
/// member's failure so the message can list them all.
#[derive(Debug)]
pub struct OneOfValidator {
    members: Vec<Box<dyn Validator>>,
}

impl OneOfValidator {
    /// Build a union. An empty union accepts nothing.
    pub fn new(members: Vec<Box<dyn Validator>>) -> Self {
        if members.is_empty() {
            tracing::warn!("one_of built with no members; it will reject every value");
        }
        Self { members }
    }

    pub fn members(&self) -> &[Box<dyn Validator>] {
        &self.members
    }
}

impl Validator for OneOfValidator {
    fn test(&self, value: Option<&Value>) -> bool {
        self.members.iter().any(|member| member.test(value))
    }

    fn explain<'a>(&'a self, value: Option<&'a Value>) -> Explanation<'a> {
        let mut branches = Vec::with_capacity(self.members.len());
        for member in &self.members {
            match member.explain(value) {
                Explanation::Valid => return Explanation::Valid,
                Explanation::Invalid(failure) => branches.push(failure),
            }
        }
        Explanation::Invalid(Failure::NoMatchingBranch { value, branches })
    }
}

/// Validate that a value matches at least one of `members`.
///
/// ```
/// use schema_lib::{Validator, ValidatorExt, literal, one_of};
/// use serde_json::json;
///
/// let asc_or_desc = one_of(vec![literal("asc").boxed(), literal("desc").boxed()]);
/// assert!(asc_or_desc.test(Some(&json!("desc"))));
/// assert!(!asc_or_desc.test(Some(&json!("up"))));
/// ```
pub fn one_of(members: Vec<Box<dyn Validator>>) -> OneOfValidator {
    OneOfValidator::new(members)
}
