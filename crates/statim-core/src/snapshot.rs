//! The dashboard snapshot: one complete set of values produced by the
//! external data source and consumed wholesale by the view.
//!
//! Only the document itself must be well-formed JSON. Individual fields are
//! read leniently: a value of an unexpected type becomes a default or an
//! artifact (`NaN`, empty timestamp) instead of rejecting the snapshot.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

// ── Snapshot types (matching the published JSON document) ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardSnapshot {
    #[serde(default, deserialize_with = "lenient::section")]
    pub pulse: Pulse,
    #[serde(default, deserialize_with = "lenient::section")]
    pub token_usage: TokenUsage,
    #[serde(default, deserialize_with = "lenient::section")]
    pub active_state: ActiveState,
    /// Log lines in display order.
    #[serde(default, deserialize_with = "lenient::entries")]
    pub journal: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Pulse {
    #[serde(default, deserialize_with = "lenient::text")]
    pub last_heartbeat: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TokenUsage {
    #[serde(default, deserialize_with = "lenient::count")]
    pub daily_limit: i64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub current_usage: i64,
    /// Precomputed by the source. Never derived from the two counters.
    /// Non-numeric values read as NaN.
    #[serde(default, deserialize_with = "lenient::ratio")]
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ActiveState {
    #[serde(default, deserialize_with = "lenient::text")]
    pub notion_sync: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: bool,
}

impl DashboardSnapshot {
    /// Parse a snapshot from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, FetchError> {
        serde_json::from_str(text).map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Parse a snapshot from raw response bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, FetchError> {
        serde_json::from_slice(bytes).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

/// Field readers that accept any JSON value and never fail.
mod lenient {
    use serde::de::{DeserializeOwned, Deserializer};
    use serde::Deserialize;
    use serde_json::Value;

    /// Strings pass through, numbers and booleans are spelled out, anything
    /// else is empty.
    pub fn text<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(de)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => String::new(),
        })
    }

    /// Integers as given; fractional or numeric-string values are floored.
    /// Everything else counts as zero.
    pub fn count<'de, D: Deserializer<'de>>(de: D) -> Result<i64, D::Error> {
        let value = Value::deserialize(de)?;
        if let Some(n) = value.as_i64() {
            return Ok(n);
        }
        Ok(number(&value)
            .filter(|f| f.is_finite())
            .map(|f| f.floor() as i64)
            .unwrap_or_default())
    }

    pub fn ratio<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
        Ok(number(&Value::deserialize(de)?).unwrap_or(f64::NAN))
    }

    pub fn flag<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
        Ok(Value::deserialize(de)?.as_bool().unwrap_or_default())
    }

    /// Array items in order; non-string items keep their JSON text.
    pub fn entries<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(de)? {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    /// A nested object, or its default when the value is not an object.
    pub fn section<'de, D, T>(de: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        Ok(match Value::deserialize(de)? {
            object @ Value::Object(_) => serde_json::from_value(object).unwrap_or_default(),
            _ => T::default(),
        })
    }

    fn number(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
