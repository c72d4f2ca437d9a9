use std::collections::HashMap;

/// The evaluated form of a generator, ready for JSON encoding.
///
/// Numbers keep the shape of the raw literal they came from: `:7` stays an
/// [`Value::Integer`], `:7.0` and `:7e0` become a [`Value::Float`]. Bare
/// literals are always strings, so `n=7` yields `"7"`.
///
/// # Examples
///
/// ```
/// use jg::{Evaluator, Value, compile_generators};
///
/// let forest = compile_generators("user.id=$id user.tags=[admin :1]").unwrap();
/// let mut evaluator = Evaluator::new();
/// evaluator.bind("id", Value::Integer(7));
///
/// let Value::Object(root) = evaluator.eval(&forest[0]) else {
///     panic!("field expressions build an object");
/// };
/// let Some(Value::Object(user)) = root.get("user") else {
///     panic!("`user.` paths share one object");
/// };
/// assert_eq!(user.get("id"), Some(&Value::Integer(7)));
/// assert_eq!(
///     user.get("tags"),
///     Some(&Value::Array(vec![Value::from("admin"), Value::Integer(1)]))
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,

    Boolean(bool),

    Float(f64),

    /// Kept apart from floats so `:1` encodes as `1`, not `1.0`
    Integer(i64),

    String(String),

    /// Elements in generator order
    Array(Vec<Value>),

    /// Fields of an object generator; key order is not tracked
    Object(HashMap<String, Value>),
}

/// A raw literal body that is none of `true`, `false`, `null` or a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid raw literal {text:?}: isn't any of true, false, null or a numeric")]
pub struct RawLiteralError {
    pub text: String,
}

impl Value {
    /// Interpret the body of a raw literal (the text after `:`).
    ///
    /// ```
    /// use jg::Value;
    ///
    /// assert_eq!(Value::parse_raw("true"), Ok(Value::Boolean(true)));
    /// assert_eq!(Value::parse_raw("-12"), Ok(Value::Integer(-12)));
    /// assert_eq!(Value::parse_raw("1e3"), Ok(Value::Float(1000.0)));
    /// assert!(Value::parse_raw("abc").is_err());
    /// ```
    pub fn parse_raw(text: &str) -> Result<Value, RawLiteralError> {
        match text {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            "null" => Ok(Value::Null),
            _ => {
                if let Ok(n) = text.parse::<i64>() {
                    Ok(Value::Integer(n))
                } else if let Ok(n) = text.parse::<f64>() {
                    Ok(Value::Float(n))
                } else {
                    Err(RawLiteralError {
                        text: text.to_string(),
                    })
                }
            }
        }
    }

    /// Human-readable type name
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Float(_) => "float",
            Value::Integer(_) => "integer",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

#[test]
fn test_parse_raw_keywords_are_case_sensitive() {
    assert!(Value::parse_raw("True").is_err());
    assert!(Value::parse_raw("NULL").is_err());
    assert_eq!(Value::parse_raw("null"), Ok(Value::Null));
}

#[test]
fn test_parse_raw_integer_overflow_falls_back_to_float() {
    assert_eq!(
        Value::parse_raw("99999999999999999999"),
        Ok(Value::Float(99999999999999999999.0))
    );
}

#[test]
fn test_raw_literal_error_message() {
    let err = Value::parse_raw("abc").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid raw literal \"abc\": isn't any of true, false, null or a numeric"
    );
}
