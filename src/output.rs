//! JSON output for generated values.
//!
//! Values are converted to [`serde_json::Value`] and encoded by serde_json.
//! Object keys come out sorted, so output is deterministic even though
//! generator objects are unordered.
//!
//! # Features
//!
//! - **Compact output** via [`to_json()`] - one line per document
//! - **Pretty output** via [`to_json_pretty()`] - tab indented
//! - **Type preservation** - integers never gain a fractional part
//!
//! # Examples
//!
//! ```
//! use jg::Value;
//! use jg::output::{to_json, to_json_pretty};
//!
//! let value = Value::Array(vec![Value::Integer(1), Value::Float(1.5)]);
//!
//! assert_eq!(to_json(&value).unwrap(), "[1,1.5]");
//! assert_eq!(to_json_pretty(&value).unwrap(), "[\n\t1,\n\t1.5\n]");
//! ```

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::value::Value;

/// Convert a generated value to serde_json's model.
///
/// Non-finite floats have no JSON form and become `null`.
pub fn to_serde_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(arr) => serde_json::Value::Array(arr.iter().map(to_serde_json).collect()),
        Value::Object(obj) => serde_json::Value::Object(
            obj.iter()
                .map(|(k, v)| (k.clone(), to_serde_json(v)))
                .collect(),
        ),
    }
}

/// Compact, single-line JSON
pub fn to_json(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string(&to_serde_json(value))
}

/// JSON indented with one tab per level
pub fn to_json_pretty(value: &Value) -> Result<String, serde_json::Error> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"\t"));
    to_serde_json(value).serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
