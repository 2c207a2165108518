//! Null normalization at the result boundary.
//!
//! While evaluating, a JSON `null` is carried as [`Value::NullSentinel`] so
//! it cannot be confused with "no result". Before a result leaves the
//! evaluator every sentinel, at any depth, is replaced by [`Value::Null`].
//!
//! Owned `Value` trees cannot contain cycles, so the walk needs no visited
//! set.

use crate::value::{Map, Value};

/// Maps the sentinel to `Null`; every other value passes through.
pub fn convert_value(val: Value) -> Value {
    match val {
        Value::NullSentinel => Value::Null,
        other => other,
    }
}

fn convert_in_place(val: &mut Value) {
    if val.is_null_sentinel() {
        *val = Value::Null;
    }
}

/// Normalizes the values of an object in place.
pub fn convert_object_nulls(res: &mut Map) {
    for val in res.values_mut() {
        convert_in_place(val);
        recurse(val);
    }
}

/// Normalizes the elements of an array or sequence in place.
pub fn convert_array_nulls<'a, I>(res: I)
where
    I: IntoIterator<Item = &'a mut Value>,
{
    for val in res {
        convert_in_place(val);
        recurse(val);
    }
}

/// Descends into the direct children of a container. Scalars are left alone.
pub fn recurse(val: &mut Value) {
    match val {
        Value::Object(map) => convert_object_nulls(map),
        Value::Array(elements) => convert_array_nulls(elements.iter_mut()),
        Value::Sequence(seq) => convert_array_nulls(seq.iter_mut()),
        _ => {}
    }
}

/// Replaces every sentinel in `res`, including `res` itself.
///
/// Call this once per top-level result, just before it is handed back to the
/// caller.
pub fn convert_nulls(mut res: Value) -> Value {
    crate::trace!(kind = res.type_name(), "converting nulls");
    recurse(&mut res);
    convert_value(res)
}

/// [`convert_nulls`] for a result that may be absent.
pub fn convert_nulls_opt(res: Option<Value>) -> Option<Value> {
    res.map(convert_nulls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::create_sequence;

    #[test]
    fn test_convert_value() {
        assert_eq!(convert_value(Value::NullSentinel), Value::Null);
        assert_eq!(convert_value(Value::from(1i64)), Value::from(1i64));
        assert_eq!(convert_value(Value::Null), Value::Null);
    }

    #[test]
    fn test_sequence_flags_survive() {
        let mut seq = create_sequence(Some(Value::NullSentinel)).with_keep_singleton(true);
        seq.tuple_stream = true;
        let Value::Sequence(out) = convert_nulls(Value::Sequence(seq)) else {
            panic!("expected a sequence");
        };
        assert!(out.sequence && out.keep_singleton && out.tuple_stream);
        assert_eq!(out[0], Value::Null);
    }
}
