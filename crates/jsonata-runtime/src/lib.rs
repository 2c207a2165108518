//! Runtime value primitives for a JSONata evaluator.
//!
//! # Overview
//!
//! JSONata results are JSON, but while evaluating the interpreter has to keep
//! apart things JSON cannot express:
//!
//! - a JSON `null` versus no value at all ([`Value::NullSentinel`] versus `None`),
//! - one result versus a [`Sequence`] of results,
//! - sequences that collapse to their only element versus ones that must
//!   stay as they are (`keep_singleton`).
//!
//! This crate provides the value type, the sequence container, the null
//! normalization pass run at the result boundary, and the numeric and type
//! predicates the evaluator builds on.
//!
//! # Example
//!
//! ```
//! use jsonata_runtime::{convert_nulls, create_sequence, Value, NULL_VALUE};
//! use serde_json::json;
//!
//! let mut seq = create_sequence(Some(Value::from(1i64)));
//! seq.push(NULL_VALUE);
//!
//! let out = convert_nulls(Value::Sequence(seq));
//! assert_eq!(serde_json::Value::from(out), json!([1, null]));
//! ```

mod tracing_macros;

pub mod error;
pub mod function;
pub mod nulls;
pub mod numeric;
pub mod sequence;
pub mod types;
pub mod value;

// Re-export the core public API
pub use error::{Error, ErrorCode, Result};
pub use function::{Function, Lambda, NativeFunction};
pub use nulls::{convert_nulls, convert_nulls_opt, convert_value};
pub use numeric::{convert_number, is_array_of_numbers, is_numeric};
pub use sequence::{create_sequence, is_sequence, Sequence};
pub use types::{is_array_of_strings, is_function};
pub use value::{Map, Number, Value, NULL_VALUE};
