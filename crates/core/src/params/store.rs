// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Heterogeneous, typed parameter store

use super::key::{Parameter, ParameterKey};
use super::value::ParameterValue;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors from typed parameter access
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// The stored value does not fit the key's declared value type.
    ///
    /// Reachable when two key types share an identifier but declare
    /// different value types, or when a loaded value does not fit the key.
    #[error("value type mismatch for key {key}: expected {expected}, found {found}")]
    ValueTypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// A set of event parameters addressed by typed keys.
///
/// Stores are values: cloning is cheap and shares the underlying map until
/// one side writes, so deriving a store never changes one held elsewhere.
/// Entries are kept ordered by identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterStore {
    entries: Arc<BTreeMap<String, ParameterValue>>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from raw identifier/value pairs (later pairs win)
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = (S, ParameterValue)>,
        S: Into<String>,
    {
        Self {
            entries: Arc::new(values.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    /// Read the value for `key`, or the key's default when there is no entry.
    pub fn get<K: ParameterKey>(&self, _key: K) -> Result<K::Value, ParameterError> {
        let Some(stored) = self.entries.get(K::KEY) else {
            return Ok(K::default_value());
        };

        <K::Value as Parameter>::from_value(stored).ok_or_else(|| ParameterError::ValueTypeMismatch {
            key: K::KEY.to_string(),
            expected: <K::Value as Parameter>::KIND,
            found: stored.kind(),
        })
    }

    /// Store `value` under `key`; an absent value removes the entry.
    pub fn set<K: ParameterKey>(&mut self, key: K, value: K::Value) {
        match value.into_value() {
            Some(stored) => {
                Arc::make_mut(&mut self.entries).insert(K::KEY.to_string(), stored);
            }
            None => self.remove(key),
        }
    }

    /// Chaining form of [`set`](Self::set)
    pub fn with<K: ParameterKey>(mut self, key: K, value: K::Value) -> Self {
        self.set(key, value);
        self
    }

    pub fn remove<K: ParameterKey>(&mut self, _key: K) {
        if self.entries.contains_key(K::KEY) {
            Arc::make_mut(&mut self.entries).remove(K::KEY);
        }
    }

    pub fn contains<K: ParameterKey>(&self, _key: K) -> bool {
        self.entries.contains_key(K::KEY)
    }

    /// Return a new store holding `self` overlaid with `other`.
    ///
    /// Entries in `other` replace entries with the same identifier; neither
    /// input changes.
    pub fn merge(&self, other: &ParameterStore) -> ParameterStore {
        let mut merged = self.clone();
        merged.append(other);
        merged
    }

    /// In-place form of [`merge`](Self::merge)
    pub fn append(&mut self, other: &ParameterStore) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.entries = Arc::clone(&other.entries);
            return;
        }

        let entries = Arc::make_mut(&mut self.entries);
        for (key, value) in other.entries.iter() {
            entries.insert(key.clone(), value.clone());
        }
    }

    /// Number of explicitly set entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw stored value for an identifier
    pub fn raw(&self, key: &str) -> Option<&ParameterValue> {
        self.entries.get(key)
    }

    /// Entries in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every entry rendered to a string, the shape most backends forward
    pub fn to_string_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }

    /// One-line rendering: `"a: 2 | b: 1"`
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Multi-line rendering: one `"- id: value"` line per entry
    pub fn debug_describe(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("- {}: {}", k, v))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for ParameterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
