//! Severity thresholds on the closeness coefficient.

use serde::{Deserialize, Serialize};

use crate::foundation::{ConfigError, Severity};

/// Closeness at or above which a finding is reported as critical.
pub const DEFAULT_CRITICAL_CLOSENESS: f64 = 0.66;

/// Closeness at or above which a finding is reported as a warning.
pub const DEFAULT_WARNING_CLOSENESS: f64 = 0.33;

/// Maps TOPSIS closeness coefficients to severity levels.
///
/// Classification is inclusive at both cut points: a closeness exactly on
/// the critical threshold is critical, exactly on the warning threshold is
/// a warning, anything below is informational.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityThresholds {
    pub critical: f64,
    pub warning: f64,
}

impl SeverityThresholds {
    pub fn new(critical: f64, warning: f64) -> Self {
        SeverityThresholds { critical, warning }
    }

    /// Classifies a closeness coefficient into a severity level.
    pub fn classify(&self, closeness: f64) -> Severity {
        if closeness >= self.critical {
            Severity::Critical
        } else if closeness >= self.warning {
            Severity::Warning
        } else {
            Severity::Info
        }
    }

    /// Checks that both cut points lie in `[0, 1]` with warning below
    /// critical.
    pub fn validate(&self, report: &str) -> Result<(), ConfigError> {
        let ordered = self.warning <= self.critical;
        let in_range = (0.0..=1.0).contains(&self.warning) && (0.0..=1.0).contains(&self.critical);
        if ordered && in_range {
            Ok(())
        } else {
            Err(ConfigError::InvalidThresholds {
                report: report.to_string(),
                warning: self.warning,
                critical: self.critical,
            })
        }
    }
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        SeverityThresholds {
            critical: DEFAULT_CRITICAL_CLOSENESS,
            warning: DEFAULT_WARNING_CLOSENESS,
        }
    }
}
