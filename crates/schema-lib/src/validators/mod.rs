//! Concrete validators and the functions that build them.
//!
//! Leaves ([`string`], [`number`], [`boolean`], [`literal`]) check a single
//! value. Composites ([`array`], [`object`], [`one_of`], [`optional`]) own
//! their children and are built leaves-first:
//!
//! ```
//! use schema_lib::{ValidatorExt, array, literal, object, one_of, Validator};
//! use serde_json::json;
//!
//! let sort = array(object([
//!     ("field", one_of(vec![literal("name").boxed(), literal("ip").boxed()]).boxed()),
//!     ("direction", one_of(vec![literal("asc").boxed(), literal("desc").boxed()]).boxed()),
//! ]));
//!
//! assert!(sort.test(Some(&json!([{"field": "ip", "direction": "asc"}]))));
//! assert!(!sort.test(Some(&json!([{"field": "ip"}]))));
//! ```

mod array;
mod literal;
mod object;
mod one_of;
mod optional;
mod primitive;

pub use array::{ArrayValidator, array};
pub use literal::{Literal, LiteralValidator, literal, null, undefined};
pub use object::{ObjectValidator, object};
pub use one_of::{OneOfValidator, one_of};
pub use optional::{OptionalValidator, optional};
pub use primitive::{PrimitiveKind, PrimitiveValidator, boolean, number, string};
