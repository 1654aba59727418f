//! Typed values produced by argument and flag processors
//!
//! A `Value` is built once from raw tokens and then only read. Accessing the
//! wrong variant yields an absent value, never a panic, so completion code can
//! probe values without caring how they were produced.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{UsageError, UsageResult};

/// The shapes a value can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    Str,
    StrList,
    Int,
    IntList,
    Float,
    FloatList,
    Bool,
}

impl ValueType {
    /// Whether this type holds multiple elements
    pub fn is_list(&self) -> bool {
        matches!(self, ValueType::StrList | ValueType::IntList | ValueType::FloatList)
    }

    /// The absent value for this type, not marked as provided
    pub fn zero(&self) -> Value {
        let payload = match self {
            ValueType::Str => Payload::Str(String::new()),
            ValueType::StrList => Payload::StrList(Vec::new()),
            ValueType::Int => Payload::Int(0),
            ValueType::IntList => Payload::IntList(Vec::new()),
            ValueType::Float => Payload::Float(0.0),
            ValueType::FloatList => Payload::FloatList(Vec::new()),
            ValueType::Bool => Payload::Bool(false),
        };
        Value {
            payload,
            provided: false,
        }
    }

    /// Parse a single token into a scalar value
    ///
    /// List types accept a single token as a one-element list.
    pub fn parse_scalar(&self, token: &str) -> UsageResult<Value> {
        let payload = match self {
            ValueType::Str => Payload::Str(token.to_string()),
            ValueType::Int => Payload::Int(parse_int(token, *self)?),
            ValueType::Float => Payload::Float(parse_float(token, *self)?),
            ValueType::Bool => Payload::Bool(parse_bool(token, *self)?),
            ValueType::StrList | ValueType::IntList | ValueType::FloatList => {
                let single = [token.to_string()];
                let (value, mut errors) = self.parse_list(&single);
                return match errors.pop() {
                    Some(err) => Err(err),
                    None => Ok(value),
                };
            }
        };
        Ok(Value {
            payload,
            provided: true,
        })
    }

    /// Parse a token slice into a single list value
    ///
    /// Parse failures are collected but the value is still returned, with the
    /// type's zero value in the failed slots. Execution surfaces the first
    /// error; completion proceeds on the best-effort value.
    pub fn parse_list(&self, tokens: &[String]) -> (Value, Vec<UsageError>) {
        let mut errors = Vec::new();
        let payload = match self {
            ValueType::StrList => Payload::StrList(tokens.to_vec()),
            ValueType::IntList => Payload::IntList(
                tokens
                    .iter()
                    .map(|t| parse_int(t, *self).unwrap_or_else(|e| {
                        errors.push(e);
                        0
                    }))
                    .collect(),
            ),
            ValueType::FloatList => Payload::FloatList(
                tokens
                    .iter()
                    .map(|t| parse_float(t, *self).unwrap_or_else(|e| {
                        errors.push(e);
                        0.0
                    }))
                    .collect(),
            ),
            // Scalar types degrade to parsing the first token
            _ => match tokens.first() {
                Some(token) => match self.parse_scalar(token) {
                    Ok(value) => return (value, errors),
                    Err(err) => {
                        errors.push(err);
                        return (self.zero(), errors);
                    }
                },
                None => return (self.zero(), errors),
            },
        };
        (
            Value {
                payload,
                provided: true,
            },
            errors,
        )
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Str => "string",
            ValueType::StrList => "string list",
            ValueType::Int => "int",
            ValueType::IntList => "int list",
            ValueType::Float => "float",
            ValueType::FloatList => "float list",
            ValueType::Bool => "bool",
        };
        write!(f, "{}", name)
    }
}

fn parse_int(token: &str, expected: ValueType) -> UsageResult<i64> {
    token.parse().map_err(|_| UsageError::BadScalar {
        value: token.to_string(),
        expected,
    })
}

fn parse_float(token: &str, expected: ValueType) -> UsageResult<f64> {
    token.parse().map_err(|_| UsageError::BadScalar {
        value: token.to_string(),
        expected,
    })
}

fn parse_bool(token: &str, expected: ValueType) -> UsageResult<bool> {
    match token.to_ascii_lowercase().as_str() {
        "true" | "t" => Ok(true),
        "false" | "f" => Ok(false),
        _ => Err(UsageError::BadScalar {
            value: token.to_string(),
            expected,
        }),
    }
}

/// A typed, immutable value with a record of whether input supplied it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Value {
    payload: Payload,
    provided: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Payload {
    Str(String),
    StrList(Vec<String>),
    Int(i64),
    IntList(Vec<i64>),
    Float(f64),
    FloatList(Vec<f64>),
    Bool(bool),
}

impl Value {
    /// Create a provided string value
    pub fn str(s: impl Into<String>) -> Self {
        Value {
            payload: Payload::Str(s.into()),
            provided: true,
        }
    }

    /// Create a provided string list value
    pub fn str_list(items: Vec<String>) -> Self {
        Value {
            payload: Payload::StrList(items),
            provided: true,
        }
    }

    /// Create a provided int value
    pub fn int(n: i64) -> Self {
        Value {
            payload: Payload::Int(n),
            provided: true,
        }
    }

    /// Create a provided int list value
    pub fn int_list(items: Vec<i64>) -> Self {
        Value {
            payload: Payload::IntList(items),
            provided: true,
        }
    }

    /// Create a provided float value
    pub fn float(x: f64) -> Self {
        Value {
            payload: Payload::Float(x),
            provided: true,
        }
    }

    /// Create a provided float list value
    pub fn float_list(items: Vec<f64>) -> Self {
        Value {
            payload: Payload::FloatList(items),
            provided: true,
        }
    }

    /// Create a provided bool value
    pub fn boolean(b: bool) -> Self {
        Value {
            payload: Payload::Bool(b),
            provided: true,
        }
    }

    /// Whether input explicitly supplied this value (vs defaulted)
    pub fn provided(&self) -> bool {
        self.provided
    }

    /// The type of this value
    pub fn value_type(&self) -> ValueType {
        match self.payload {
            Payload::Str(_) => ValueType::Str,
            Payload::StrList(_) => ValueType::StrList,
            Payload::Int(_) => ValueType::Int,
            Payload::IntList(_) => ValueType::IntList,
            Payload::Float(_) => ValueType::Float,
            Payload::FloatList(_) => ValueType::FloatList,
            Payload::Bool(_) => ValueType::Bool,
        }
    }

    /// Element count: list length for lists, 1 for scalars
    pub fn len(&self) -> usize {
        match &self.payload {
            Payload::StrList(v) => v.len(),
            Payload::IntList(v) => v.len(),
            Payload::FloatList(v) => v.len(),
            _ => 1,
        }
    }

    /// Whether the value holds no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.payload {
            Payload::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The string list payload, or empty for any other variant
    pub fn str_list_ref(&self) -> &[String] {
        match &self.payload {
            Payload::StrList(v) => v,
            _ => &[],
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self.payload {
            Payload::Int(n) => Some(n),
            _ => None,
        }
    }

    /// The int list payload, or empty for any other variant
    pub fn int_list_ref(&self) -> &[i64] {
        match &self.payload {
            Payload::IntList(v) => v,
            _ => &[],
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self.payload {
            Payload::Float(x) => Some(x),
            _ => None,
        }
    }

    /// The float list payload, or empty for any other variant
    pub fn float_list_ref(&self) -> &[f64] {
        match &self.payload {
            Payload::FloatList(v) => v,
            _ => &[],
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.payload {
            Payload::Bool(b) => Some(b),
            _ => None,
        }
    }
}
