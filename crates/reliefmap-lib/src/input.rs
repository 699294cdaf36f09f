//! Lenient numeric input.
//!
//! Clients send coordinates and counts either as JSON numbers or as numeric
//! strings (form-backed frontends do the latter). [`NumberInput`] accepts both
//! and performs the coercion once, at the edge of the store.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A JSON number or a string holding one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(serde_json::Number),
    Text(String),
}

impl NumberInput {
    /// Coerce into a finite float.
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            NumberInput::Number(n) => n.as_f64()?,
            NumberInput::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Coerce into a non-negative integer, truncating any fractional part.
    pub fn to_u64(&self) -> Option<u64> {
        if let NumberInput::Number(n) = self {
            if let Some(v) = n.as_u64() {
                return Some(v);
            }
        }
        let value = self.to_f64()?;
        if value < 0.0 || value > u64::MAX as f64 {
            return None;
        }
        Some(value.trunc() as u64)
    }
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(NumberInput::Number)
            .unwrap_or_else(|| NumberInput::Text(value.to_string()))
    }
}

impl From<u64> for NumberInput {
    fn from(value: u64) -> Self {
        NumberInput::Number(value.into())
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput::Text(value.to_string())
    }
}

/// Coerce an optional count field, reporting `field` on failure.
pub(crate) fn coerce_count(input: Option<&NumberInput>, field: &'static str) -> Result<Option<u64>> {
    input
        .map(|n| n.to_u64().ok_or(Error::InvalidNumber { field }))
        .transpose()
}

/// Coerce an optional coordinate component.
pub(crate) fn coerce_coordinate(input: Option<&NumberInput>) -> Result<Option<f64>> {
    input
        .map(|n| n.to_f64().ok_or(Error::InvalidCoordinates))
        .transpose()
}
