//! Registry of report configurations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::foundation::{ConfigError, ReportKey};

/// Holds the evaluation policy for every supported report type.
///
/// Lookups for unregistered reports fail with a configuration error;
/// nothing is evaluated against a guessed default policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineRegistry {
    reports: HashMap<ReportKey, ReportConfig>,
}

impl EngineRegistry {
    pub fn new() -> Self {
        EngineRegistry {
            reports: HashMap::new(),
        }
    }

    /// Registers a configuration under its report key.
    ///
    /// Registering the same key again replaces the earlier entry, which
    /// lets tests overlay the built-in catalog.
    pub fn register(&mut self, config: ReportConfig) {
        self.reports.insert(config.key, config);
    }

    /// Looks up the configuration for a report.
    pub fn report(&self, key: ReportKey) -> Result<&ReportConfig, ConfigError> {
        self.reports
            .get(&key)
            .ok_or_else(|| ConfigError::unknown_report(key.as_str()))
    }

    pub fn contains(&self, key: ReportKey) -> bool {
        self.reports.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Registered keys in the fixed [`ReportKey::all`] order, so that
    /// iteration does not depend on hash ordering.
    pub fn keys(&self) -> impl Iterator<Item = ReportKey> + '_ {
        ReportKey::all()
            .iter()
            .copied()
            .filter(|key| self.contains(*key))
    }
}
