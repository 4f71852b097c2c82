//! @ai:module:intent Numeric value type preserving the integer/float distinction
//! @ai:module:layer domain
//! @ai:module:public_api Value
//! @ai:module:stateless true

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// @ai:intent A single dataset value, integer or floating-point
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    /// @ai:intent Numeric key used by all descending-order comparisons
    /// @ai:effects pure
    pub fn key(&self) -> f64 {
        match self {
            Value::Int(i) => *i as f64,
            Value::Float(f) => *f,
        }
    }
}

impl std::str::FromStr for Value {
    type Err = Error;

    /// A token containing a decimal point parses as a float, anything
    /// else as an integer. "inf" and "nan" are rejected by the integer
    /// branch, so parsed values always compare totally.
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();

        if token.contains('.') {
            token
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| Error::InvalidToken(token.to_string()))
        } else {
            token
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| Error::InvalidToken(token.to_string()))
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
        }
    }
}
