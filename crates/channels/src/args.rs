//! Lenient readers for tool-call argument objects.
//!
//! Tool arguments come straight from a model, so every reader tolerates a
//! missing key, a non-object `args`, or a value of the wrong type by returning
//! `None`.

use serde_json::Value;

/// The raw string under `key`, untrimmed.
pub fn str_arg<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(Value::as_str)
}

/// The trimmed string under `key`, or `None` if it is absent or blank.
pub fn trimmed_arg<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    str_arg(args, key).map(str::trim).filter(|s| !s.is_empty())
}

/// An identifier under `key`: a non-blank string (trimmed) or an integer.
///
/// Snowflake-style ids are often emitted as JSON numbers.
pub fn id_arg(args: &Value, key: &str) -> Option<String> {
    match args.get(key)? {
        Value::String(s) => Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_string),
        Value::Number(n) if n.is_u64() || n.is_i64() => Some(n.to_string()),
        _ => None,
    }
}
