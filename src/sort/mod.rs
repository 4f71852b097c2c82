//! @ai:module:intent Descending sort algorithms and ordering verification
//! @ai:module:layer domain
//! @ai:module:public_api Algorithm, SortKey, is_sorted_descending
//! @ai:module:stateless true

pub mod bubble;
pub mod insertion;
pub mod merge;

use crate::dataset::Value;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// @ai:intent Numeric key projection used by every descending comparison
///            Not a comparator surface: the ordering is fixed, the key
///            only lets callers attach payload to a numeric key.
pub trait SortKey {
    fn key(&self) -> f64;
}

impl SortKey for Value {
    fn key(&self) -> f64 {
        Value::key(self)
    }
}

impl SortKey for i64 {
    fn key(&self) -> f64 {
        *self as f64
    }
}

impl SortKey for f64 {
    fn key(&self) -> f64 {
        *self
    }
}

/// @ai:intent The three classical sorts offered by the program
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Insertion,
    Merge,
}

impl Algorithm {
    /// Fixed benchmark order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Insertion, Algorithm::Merge];

    /// @ai:intent Convert algorithm to string representation
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
        }
    }

    /// @ai:intent Human-readable name for display tables
    /// @ai:effects pure
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
        }
    }

    /// @ai:intent Run this algorithm on a fresh copy of the input
    /// @ai:post output is a descending permutation of input
    /// @ai:effects pure
    pub fn run<T: SortKey + Clone>(&self, input: &[T]) -> (Vec<T>, Duration) {
        match self {
            Algorithm::Bubble => bubble::sort(input),
            Algorithm::Insertion => insertion::sort(input),
            Algorithm::Merge => merge::sort(input),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(Algorithm::Bubble),
            "insertion" => Ok(Algorithm::Insertion),
            "merge" => Ok(Algorithm::Merge),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// @ai:intent Verify the descending ordering invariant
/// @ai:post true iff every adjacent pair satisfies left >= right
/// @ai:effects pure
pub fn is_sorted_descending<T: SortKey>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0].key() >= w[1].key())
}
