//! Type predicates the evaluator uses to pick code paths.

use crate::value::Value;

/// True if `v` is an array (or sequence) whose elements are all strings.
/// Empty arrays qualify.
pub fn is_array_of_strings(v: &Value) -> bool {
    match v.as_array() {
        Some(elements) => elements.iter().all(|el| matches!(el, Value::String(_))),
        None => false,
    }
}

/// True for native built-ins and lambdas, never for plain data.
pub fn is_function(v: &Value) -> bool {
    matches!(v, Value::Function(_))
}
