//! Metrics map supplied by report pages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named numeric aggregates gathered by a report page.
///
/// Fields are report-specific (`negative_count`, `total_accounts`, ...).
/// Absent fields read as 0, since reports may legitimately omit optional
/// aggregates, and absence is never an error. Backed by a `BTreeMap` so
/// iteration order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metrics(BTreeMap<String, f64>);

impl Metrics {
    /// Creates an empty metrics map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, consuming and returning the map for chaining.
    pub fn with(mut self, field: impl Into<String>, value: f64) -> Self {
        self.0.insert(field.into(), value);
        self
    }

    /// Inserts or replaces a field.
    pub fn insert(&mut self, field: impl Into<String>, value: f64) {
        self.0.insert(field.into(), value);
    }

    /// Reads a field, defaulting to 0.0 when absent.
    pub fn get(&self, field: &str) -> f64 {
        self.0.get(field).copied().unwrap_or(0.0)
    }

    /// True when the field was explicitly supplied.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of supplied fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no fields were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Metrics {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, value)| (field.into(), value))
                .collect(),
        )
    }
}
