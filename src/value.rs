use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Type of a property value, as inferred from its raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Unknown,
    String,
    Float,
    Bool,
    Int,
}

/// A typed property value.
///
/// `Unknown` is what an assignment with an empty right-hand side produces;
/// it renders back to empty text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Unknown,
    Str(String),
    Float(f64),
    Bool(bool),
    Int(i64),
}

// An optional single sign, then digits only.
static INT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("int pattern is valid"));

// An optional single sign, digits with at most one dot, and at least one
// digit somewhere. A lone sign or a lone dot is not a number.
static FLOAT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").expect("float pattern is valid"));

/// Estimate the type a raw text token would have, first match wins:
/// empty, bool literal, integer, float, and string as the catch-all.
///
/// No magnitude checking happens here: a digit sequence wider than `i64`
/// still classifies as `Int`. Conversion is where overflow is handled.
pub fn classify(token: &str) -> ValueType {
    if token.is_empty() {
        return ValueType::Unknown;
    }

    if matches!(token, "True" | "true" | "False" | "false") {
        return ValueType::Bool;
    }

    if INT_PATTERN.is_match(token) {
        return ValueType::Int;
    }

    if FLOAT_PATTERN.is_match(token) {
        return ValueType::Float;
    }

    ValueType::String
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Unknown => ValueType::Unknown,
            Value::Str(_) => ValueType::String,
            Value::Float(_) => ValueType::Float,
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::Str(s) = self { Some(s) } else { None }
    }

    pub fn as_int(&self) -> Option<i64> {
        if let Value::Int(n) = self { Some(*n) } else { None }
    }

    pub fn as_float(&self) -> Option<f64> {
        if let Value::Float(x) = self { Some(*x) } else { None }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self { Some(*b) } else { None }
    }
}

impl fmt::Display for Value {
    /// Render the value as it appears on the wire.
    ///
    /// Numbers use locale-independent decimal formatting. A float with no
    /// fractional part keeps a trailing `.0` so it re-reads as a float
    /// instead of an integer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unknown => Ok(()),
            Value::Str(s) => write!(f, "{}", s),
            Value::Float(x) => {
                if x.is_finite() && x.fract() == 0.0 {
                    write!(f, "{:.1}", x)
                } else {
                    write!(f, "{}", x)
                }
            }
            Value::Bool(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Value::Int(n) => write!(f, "{}", n),
        }
    }
}
