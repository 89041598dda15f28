//! Total conversion of loosely typed upstream values into finite numbers.
//!
//! Balances and amounts arrive from the bookkeeping store as JSON numbers,
//! numeric strings, or nothing at all. Every value passes through here once
//! before arithmetic, so no NaN or infinity can reach a sum.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Convert any upstream value to a finite `f64`, defaulting to zero.
///
/// Finite numbers pass through; strings go through the standard float
/// parser; everything else (null, booleans, arrays, objects) is zero.
/// Never panics.
pub fn finite_or_zero(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Value::String(s) => parse_finite(s),
        _ => 0.0,
    }
}

fn parse_finite(s: &str) -> f64 {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// An amount exactly as the upstream store represented it.
///
/// The store mixes numbers and numeric strings for the same field, and some
/// records carry nothing at all. This keeps the raw shape at the boundary;
/// calculators only ever see the coerced value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl RawAmount {
    /// Coerce to a finite number, defaulting to zero.
    pub fn to_finite(&self) -> f64 {
        match self {
            RawAmount::Number(n) if n.is_finite() => *n,
            RawAmount::Number(_) => 0.0,
            RawAmount::Text(s) => parse_finite(s),
            RawAmount::Missing => 0.0,
        }
    }

    /// Magnitude of the coerced value; direction comes from the record kind.
    pub fn magnitude(&self) -> f64 {
        self.to_finite().abs()
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(value: String) -> Self {
        RawAmount::Text(value)
    }
}
