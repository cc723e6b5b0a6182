//! Lenient extraction of typed values from a `serde_json::Value` object.
//!
//! Request bodies come from a browser form, so a field with the wrong JSON
//! type is treated the same as a missing one. These helpers never fail.

use serde_json::Value;

/// Returns `params[name]` as a string slice, or `None` if missing or not a string.
pub fn param_str<'a>(params: &'a Value, name: &str) -> Option<&'a str> {
    params.get(name).and_then(Value::as_str)
}

/// Extracts a `String` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    param_str(params, name)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

/// Returns `params[name]` as an integer.
///
/// Integers pass through; finite floats are truncated toward zero; anything
/// else (strings, null, NaN) yields `None`.
pub fn param_i64(params: &Value, name: &str) -> Option<i64> {
    let value = params.get(name)?;
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc().clamp(i64::MIN as f64, i64::MAX as f64) as i64)
    })
}
