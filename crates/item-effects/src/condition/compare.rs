//! Shared numeric comparator used by level, friendship, stat and HP checks.

use core::fmt;

/// Numeric comparison against a value read from the context.
///
/// `Range` bounds are inclusive; a missing bound leaves that side open.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Comparison {
    Equals(f64),
    NotEquals(f64),
    Greater(f64),
    Less(f64),
    GreaterEqual(f64),
    LessEqual(f64),
    Range { min: Option<f64>, max: Option<f64> },
}

impl Comparison {
    pub fn between(min: f64, max: f64) -> Self {
        Self::Range {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn at_least(min: f64) -> Self {
        Self::Range {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: f64) -> Self {
        Self::Range {
            min: None,
            max: Some(max),
        }
    }

    pub fn matches(&self, actual: f64) -> bool {
        match *self {
            Self::Equals(expected) => actual == expected,
            Self::NotEquals(expected) => actual != expected,
            Self::Greater(expected) => actual > expected,
            Self::Less(expected) => actual < expected,
            Self::GreaterEqual(expected) => actual >= expected,
            Self::LessEqual(expected) => actual <= expected,
            Self::Range { min, max } => {
                min.is_none_or(|min| actual >= min) && max.is_none_or(|max| actual <= max)
            }
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Equals(v) => write!(f, "= {v}"),
            Self::NotEquals(v) => write!(f, "!= {v}"),
            Self::Greater(v) => write!(f, "> {v}"),
            Self::Less(v) => write!(f, "< {v}"),
            Self::GreaterEqual(v) => write!(f, ">= {v}"),
            Self::LessEqual(v) => write!(f, "<= {v}"),
            Self::Range {
                min: Some(min),
                max: Some(max),
            } => write!(f, "between {min} and {max}"),
            Self::Range {
                min: Some(min),
                max: None,
            } => write!(f, ">= {min}"),
            Self::Range {
                min: None,
                max: Some(max),
            } => write!(f, "<= {max}"),
            Self::Range {
                min: None,
                max: None,
            } => f.write_str("any value"),
        }
    }
}
