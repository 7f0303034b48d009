// Runtime schema validation for untyped JSON
//
// This crate provides small composable validators that answer two questions
// about an untrusted `serde_json::Value`: does it have the expected shape, and
// if not, why not. The "why" is returned as structured data and only rendered
// to a string when a caller asks for it.

pub mod error;
pub mod explanation;
pub mod json;
pub mod validator;
pub mod validators;

pub use error::{SchemaError, SchemaResult};
pub use explanation::{Diagnostic, Explanation, Failure, InstancePath, PathSegment};
pub use validator::{Validator, ValidatorExt};
pub use validators::{
    ArrayValidator, Literal, LiteralValidator, ObjectValidator, OneOfValidator,
    OptionalValidator, PrimitiveKind, PrimitiveValidator, array, boolean, literal, null, number,
    object, one_of, optional, string, undefined,
};
