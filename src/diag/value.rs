use std::fmt;

/// A renderable log value, independent of the call site's concrete types.
///
/// Log lines are composed from an ordered sequence of these instead of
/// fixed-arity generic overloads; every variant renders via its default
/// `Display` representation.
#[derive(Clone, Debug, PartialEq)]
pub enum DiagValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    Str(String),
    /// Parsed JSON, rendered in its compact serialization
    Json(serde_json::Value),
}

impl fmt::Display for DiagValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DiagValue::Null => write!(f, "null"),
            DiagValue::Bool(v) => write!(f, "{}", v),
            DiagValue::I64(v) => write!(f, "{}", v),
            DiagValue::U64(v) => write!(f, "{}", v),
            DiagValue::F64(v) => write!(f, "{}", v),
            DiagValue::Str(v) => write!(f, "{}", v),
            DiagValue::Json(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! diag_value_from {
    ($($ty:ty => $variant:ident as $target:ty),+ $(,)?) => {
        $(impl From<$ty> for DiagValue {
            fn from(v: $ty) -> Self {
                DiagValue::$variant(<$target>::from(v))
            }
        })+
    };
}

diag_value_from! {
    i8 => I64 as i64,
    i16 => I64 as i64,
    i32 => I64 as i64,
    i64 => I64 as i64,
    u8 => U64 as u64,
    u16 => U64 as u64,
    u32 => U64 as u64,
    u64 => U64 as u64,
    f32 => F64 as f64,
    f64 => F64 as f64,
}

impl From<bool> for DiagValue {
    fn from(v: bool) -> Self {
        DiagValue::Bool(v)
    }
}

impl From<&str> for DiagValue {
    fn from(v: &str) -> Self {
        DiagValue::Str(v.to_string())
    }
}

impl From<String> for DiagValue {
    fn from(v: String) -> Self {
        DiagValue::Str(v)
    }
}

impl From<char> for DiagValue {
    fn from(v: char) -> Self {
        DiagValue::Str(v.to_string())
    }
}

impl From<serde_json::Value> for DiagValue {
    fn from(v: serde_json::Value) -> Self {
        DiagValue::Json(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_rendering() {
        assert_eq!(DiagValue::from(42).to_string(), "42");
        assert_eq!(DiagValue::from(-7i8).to_string(), "-7");
        assert_eq!(DiagValue::from(3.5f32).to_string(), "3.5");
        assert_eq!(DiagValue::from(true).to_string(), "true");
        assert_eq!(DiagValue::from("hello").to_string(), "hello");
        assert_eq!(DiagValue::Null.to_string(), "null");
    }

    #[test]
    fn test_json_rendering() {
        let value = serde_json::json!({"a": 1});
        assert_eq!(DiagValue::from(value).to_string(), r#"{"a":1}"#);
    }
}
