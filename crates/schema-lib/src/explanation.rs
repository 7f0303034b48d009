//! Validation outcomes and their human-readable rendering.
//!
//! `explain` never formats anything. It returns an [`Explanation`] holding a
//! [`Failure`] tree that borrows the offending input, and the message is only
//! built when [`Failure::render`] (or `Display`) is called.

use crate::json;
use crate::validators::{Literal, PrimitiveKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The result of explaining a value against a validator.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Explanation<'a> {
    /// The value conforms.
    Valid,
    /// The value does not conform; the failure can be rendered on demand.
    Invalid(Failure<'a>),
}

impl<'a> Explanation<'a> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Explanation::Valid)
    }

    pub fn failure(&self) -> Option<&Failure<'a>> {
        match self {
            Explanation::Valid => None,
            Explanation::Invalid(failure) => Some(failure),
        }
    }

    pub fn into_failure(self) -> Option<Failure<'a>> {
        match self {
            Explanation::Valid => None,
            Explanation::Invalid(failure) => Some(failure),
        }
    }

    /// Render the message with an empty prefix, if there is one.
    pub fn message(&self) -> Option<String> {
        self.failure().map(|failure| failure.render(""))
    }
}

impl<'a> From<Explanation<'a>> for Result<(), Failure<'a>> {
    fn from(explanation: Explanation<'a>) -> Self {
        match explanation {
            Explanation::Valid => Ok(()),
            Explanation::Invalid(failure) => Err(failure),
        }
    }
}

/// Why a value failed validation.
///
/// Every variant keeps just enough to build its message later: borrowed
/// snapshots of the input and the nested failures of child validators.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure<'a> {
    /// The value's `typeof` differs from the expected primitive.
    TypeMismatch {
        expected: PrimitiveKind,
        value: Option<&'a Value>,
    },

    /// The value is not strictly equal to the accepted literal.
    LiteralMismatch {
        value: Option<&'a Value>,
        expected: &'a Literal,
    },

    /// An array validator received something that is not an array.
    NotAnArray { value: Option<&'a Value> },

    /// One or more elements failed; every failing index is listed.
    InvalidElements(Vec<(usize, Failure<'a>)>),

    /// An object validator received a non-object or `null`.
    NotAnObject { value: Option<&'a Value> },

    /// One or more declared keys failed; every failing key is listed.
    InvalidProperties(Vec<(&'a str, Failure<'a>)>),

    /// No branch of a union accepted the value.
    NoMatchingBranch {
        value: Option<&'a Value>,
        branches: Vec<Failure<'a>>,
    },
}

impl<'a> Failure<'a> {
    /// A stable, machine-readable tag for this failure.
    pub fn kind(&self) -> &'static str {
        match self {
            Failure::TypeMismatch { .. } => "type-mismatch",
            Failure::LiteralMismatch { .. } => "literal-mismatch",
            Failure::NotAnArray { .. } => "not-an-array",
            Failure::InvalidElements(_) => "invalid-elements",
            Failure::NotAnObject { .. } => "not-an-object",
            Failure::InvalidProperties(_) => "invalid-properties",
            Failure::NoMatchingBranch { .. } => "no-matching-branch",
        }
    }

    /// Build the message, using `prefix` as the indentation of this level.
    ///
    /// Nested entries are bulleted one tab deeper than `prefix`, and their
    /// own explanations are rendered with a prefix two tabs deeper. Array
    /// elements follow the same layout as object keys and union branches, so
    /// an element bullet never sits at `prefix` itself.
    pub fn render(&self, prefix: &str) -> String {
        match self {
            Failure::TypeMismatch { expected, value } => format!(
                "Expected a {}, but got a {}: {}.",
                expected.type_name(),
                json::type_of(*value),
                json::stringify(*value, prefix)
            ),
            Failure::LiteralMismatch { value, expected } => format!(
                "{} was expected to be {}",
                json::stringify(*value, prefix),
                expected.to_json_string(prefix)
            ),
            Failure::NotAnArray { value } => format!(
                "Expected an array, received {}",
                json::stringify(*value, prefix)
            ),
            Failure::InvalidElements(elements) => {
                let nested = format!("{prefix}\t\t");
                let mut out = String::from("Values in array were invalid. The explanations:");
                for (index, failure) in elements {
                    out.push_str(&format!(
                        "\n{prefix}\t* Value at index {index}: {}",
                        failure.render(&nested)
                    ));
                }
                out
            }
            Failure::NotAnObject { value } => format!(
                "Expected a non-null object, but got {}",
                json::stringify(*value, prefix)
            ),
            Failure::InvalidProperties(properties) => {
                let nested = format!("{prefix}\t\t");
                let mut out = String::from("Values in object were invalid. Explanations:");
                for (key, failure) in properties {
                    out.push_str(&format!(
                        "\n{prefix}\t* Value at key {}: {}",
                        json::quote(key),
                        failure.render(&nested)
                    ));
                }
                out
            }
            Failure::NoMatchingBranch { value, branches } => {
                let nested = format!("{prefix}\t\t");
                let mut out = format!(
                    "{} was expected to match one of several conditions, but it did not. Here are the explanations:",
                    json::stringify(*value, prefix)
                );
                for (i, branch) in branches.iter().enumerate() {
                    let separator = if i + 1 < branches.len() { " OR" } else { "" };
                    out.push_str(&format!(
                        "\n{prefix}\t* {}{separator}",
                        branch.render(&nested)
                    ));
                }
                out
            }
        }
    }

    /// Flatten the failure tree into leaf failures and where they occurred.
    ///
    /// Array and object failures are descended into. A union failure is a
    /// leaf: which branch was "meant" is not knowable.
    pub fn leaves(&self) -> Vec<(InstancePath, &Failure<'a>)> {
        let mut out = Vec::new();
        let mut path = InstancePath::new();
        self.collect_leaves(&mut path, &mut out);
        out
    }

    fn collect_leaves<'s>(
        &'s self,
        path: &mut InstancePath,
        out: &mut Vec<(InstancePath, &'s Failure<'a>)>,
    ) {
        match self {
            Failure::InvalidElements(elements) => {
                for (index, failure) in elements {
                    path.push_index(*index);
                    failure.collect_leaves(path, out);
                    path.pop();
                }
            }
            Failure::InvalidProperties(properties) => {
                for (key, failure) in properties {
                    path.push_key(*key);
                    failure.collect_leaves(path, out);
                    path.pop();
                }
            }
            _ => out.push((path.clone(), self)),
        }
    }

    /// Serializable records for each leaf failure.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.leaves()
            .into_iter()
            .map(|(path, failure)| Diagnostic {
                path: path.segments().to_vec(),
                kind: failure.kind().to_string(),
                message: failure.render(""),
            })
            .collect()
    }
}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(""))
    }
}

/// A single leaf failure, flattened for machine-readable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Where in the input the failure occurred
    pub path: Vec<PathSegment>,
    /// The failure's kind tag (see [`Failure::kind`])
    pub kind: String,
    /// The rendered explanation of the leaf
    pub message: String,
}

/// Instance path (e.g., `[0].direction`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstancePath {
    segments: Vec<PathSegment>,
}

impl InstancePath {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(PathSegment::Key(key.into()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for InstancePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "(root)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i > 0 => write!(f, ".{}", key)?,
                PathSegment::Key(key) => write!(f, "{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// A segment in an instance path (object key or array index)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{}", key),
            PathSegment::Index(index) => write!(f, "[{}]", index),
        }
    }
}
