//! Loosely-typed catalog records and lenient field extraction.
//!
//! Catalog rows arrive as flat maps of scalars whose keys may be lower- or
//! upper-case and whose values may be numbers, numeric strings, placeholders
//! such as `"N/A"`, or null. Every lookup goes through [`FieldSource`], which
//! tries the key as given and then its upper-case form, and treats anything
//! that does not coerce to a finite number as absent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RecordError;

/// A single catalog row: field name to untyped scalar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(BTreeMap<String, Value>);

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a record from JSON object text.
    pub fn from_json(text: &str) -> Result<Self, RecordError> {
        let value: Value = serde_json::from_str(text).map_err(RecordError::Parse)?;
        Self::from_value(value)
    }

    /// Convert an already-parsed JSON value. Only objects are records.
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        match value {
            Value::Object(map) => Ok(Self(map.into_iter().collect())),
            Value::Null => Err(RecordError::NotAnObject("null")),
            Value::Bool(_) => Err(RecordError::NotAnObject("a boolean")),
            Value::Number(_) => Err(RecordError::NotAnObject("a number")),
            Value::String(_) => Err(RecordError::NotAnObject("a string")),
            Value::Array(_) => Err(RecordError::NotAnObject("an array")),
        }
    }

    /// Set a field, returning the previous value stored under the exact key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Named-field access with fallback and case-insensitive key fallback.
///
/// Implementors only provide exact-key lookup; the coercion and dual-case
/// policy is shared by every source.
pub trait FieldSource {
    /// The value stored under exactly `key`, if any.
    fn raw(&self, key: &str) -> Option<&Value>;

    /// First value under `key` or its upper-case form that is not null.
    fn field(&self, key: &str) -> Option<&Value> {
        resolve(self, key, |value| (!value.is_null()).then_some(value))
    }

    /// Finite numeric value of the field, coerced from numbers or numeric strings.
    fn number(&self, key: &str) -> Option<f64> {
        resolve(self, key, coerce_number)
    }

    /// Numeric value of the field, or `fallback` when absent or non-numeric.
    fn number_or(&self, key: &str, fallback: f64) -> f64 {
        self.number(key).unwrap_or(fallback)
    }

    /// Non-blank text value of the field. Numbers are rendered as text.
    fn text(&self, key: &str) -> Option<String> {
        resolve(self, key, coerce_text)
    }

    fn text_or(&self, key: &str, fallback: &str) -> String {
        self.text(key).unwrap_or_else(|| fallback.to_string())
    }
}

impl FieldSource for RawRecord {
    fn raw(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl FieldSource for Map<String, Value> {
    fn raw(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

/// Try `key` verbatim, then upper-cased, keeping the first value `coerce` accepts.
fn resolve<'a, S, T>(
    source: &'a S,
    key: &str,
    coerce: impl Fn(&'a Value) -> Option<T>,
) -> Option<T>
where
    S: FieldSource + ?Sized,
{
    if let Some(found) = source.raw(key).and_then(&coerce) {
        return Some(found);
    }
    let upper = key.to_uppercase();
    if upper == key {
        return None;
    }
    source.raw(&upper).and_then(coerce)
}

/// Numeric coercion for catalog scalars.
///
/// Numbers pass through, strings are parsed after trimming, booleans become
/// 1 or 0. Blank strings, placeholders, nested values and anything non-finite
/// count as absent.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };
    number.filter(|n| n.is_finite())
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
