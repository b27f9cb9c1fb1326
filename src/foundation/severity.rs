//! Severity level for ranked findings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a diagnosed finding, derived from its closeness coefficient.
///
/// The enum is closed: unknown levels are unrepresentable, which realizes
/// the "fatal in development" policy for bad level tokens in the type
/// system. Serde rejects unknown tokens at the boundary.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Critical,
}

/// Display metadata for a severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelMeta {
    pub label: &'static str,
    pub class_name: &'static str,
}

impl Severity {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Critical => "Critical",
        }
    }

    /// Returns the style tag report pages attach to the finding row.
    pub fn class_name(&self) -> &'static str {
        match self {
            Severity::Info => "level-info",
            Severity::Warning => "level-warning",
            Severity::Critical => "level-critical",
        }
    }

    /// Returns the fixed display metadata for this level.
    pub fn meta(&self) -> LevelMeta {
        LevelMeta {
            label: self.label(),
            class_name: self.class_name(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
