//! Numeric predicates and coercion.

use crate::error::{Error, Result};
use crate::value::{Number, Value};

/// Returns whether `v` is a usable number.
///
/// Booleans are never numbers. NaN is not a number either, but an infinite
/// float is an error (`D1001`) rather than `false`.
pub fn is_numeric(v: &Value) -> Result<bool> {
    match v {
        Value::Number(Number::Int(_)) => Ok(true),
        Value::Number(Number::Float(f)) => check_float(*f),
        _ => Ok(false),
    }
}

fn check_float(f: f64) -> Result<bool> {
    if f.is_nan() {
        return Ok(false);
    }
    if f.is_infinite() {
        return Err(Error::number_out_of_range(f));
    }
    Ok(true)
}

/// True if `v` is an array (or sequence) of numbers. Empty arrays qualify.
pub fn is_array_of_numbers(v: &Value) -> Result<bool> {
    let Some(elements) = v.as_array() else {
        return Ok(false);
    };
    for el in elements {
        if !is_numeric(el)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Converts a computed float to its output representation.
///
/// Whole numbers within `i64` range become [`Number::Int`]; other finite
/// values stay [`Number::Float`]. NaN gives `None`.
pub fn convert_number(n: f64) -> Result<Option<Number>> {
    if !check_float(n)? {
        return Ok(None);
    }
    // 2^63 is exactly representable as f64 but is out of i64 range.
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        return Ok(Some(Number::Int(n as i64)));
    }
    Ok(Some(Number::Float(n)))
}
