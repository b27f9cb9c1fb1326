//! Error types for the advisory engine.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("fuzzy triple must satisfy 0 < l <= m <= u, got ({l}, {m}, {u})")]
    FuzzyOrder { l: f64, m: f64, u: f64 },

    #[error("judgment intensity must be between 1 and 9, got {actual}")]
    JudgmentIntensity { actual: u8 },

    #[error("upper triangle of a {n}x{n} comparison table needs {expected} entries, got {actual}")]
    UpperTriangleLen {
        n: usize,
        expected: usize,
        actual: usize,
    },
}

/// Configuration errors.
///
/// Every variant indicates a build-time defect in the registered
/// configuration (or a caller/engine version mismatch). These are fatal:
/// they surface at engine construction or on first use, are never retried,
/// and never degrade into silently altered rankings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("no report configuration registered for '{key}'")]
    UnknownReport { key: String },

    #[error("report '{report}' has no candidate '{candidate}'")]
    UnknownCandidate { report: String, candidate: String },

    #[error("report '{report}' declares no criteria")]
    EmptyCriteria { report: String },

    #[error("report '{report}' declares criterion '{criterion}' more than once")]
    DuplicateCriterion { report: String, criterion: String },

    #[error("report '{report}' declares candidate '{candidate}' more than once")]
    DuplicateCandidate { report: String, candidate: String },

    #[error("report '{report}' comparison table is {rows}x{cols}, expected {expected}x{expected}")]
    TableShape {
        report: String,
        rows: usize,
        cols: usize,
        expected: usize,
    },

    #[error("report '{report}' comparison table diagonal entry {index} is not (1, 1, 1)")]
    BrokenDiagonal { report: String, index: usize },

    #[error("report '{report}' comparison entry ({row}, {col}) is not an ordered fuzzy triple")]
    MalformedEntry {
        report: String,
        row: usize,
        col: usize,
    },

    #[error(
        "report '{report}' comparison entries ({row}, {col}) and ({col}, {row}) \
         are not fuzzy reciprocals"
    )]
    BrokenReciprocity {
        report: String,
        row: usize,
        col: usize,
    },

    #[error("report '{report}' comparison table is inconsistent: CR {ratio:.3} exceeds {limit}")]
    InconsistentComparisons {
        report: String,
        ratio: f64,
        limit: f64,
    },

    #[error("candidate '{candidate}' in report '{report}' scores unknown criterion '{criterion}'")]
    UnknownCriterion {
        report: String,
        candidate: String,
        criterion: String,
    },

    #[error(
        "report '{report}' severity thresholds are invalid: \
         warning {warning} must not exceed critical {critical}, both within [0, 1]"
    )]
    InvalidThresholds {
        report: String,
        warning: f64,
        critical: f64,
    },

    #[error("template '{template}' has an unclosed placeholder")]
    MalformedTemplate { template: String },

    #[error("template '{template}' references placeholder '{placeholder}' absent from the context")]
    MissingPlaceholder {
        template: String,
        placeholder: String,
    },

    #[error(transparent)]
    InvalidJudgment(#[from] ValidationError),
}

impl ConfigError {
    /// Creates an unknown-report error.
    pub fn unknown_report(key: impl Into<String>) -> Self {
        ConfigError::UnknownReport { key: key.into() }
    }

    /// Creates an unknown-candidate error.
    pub fn unknown_candidate(report: impl Into<String>, candidate: impl Into<String>) -> Self {
        ConfigError::UnknownCandidate {
            report: report.into(),
            candidate: candidate.into(),
        }
    }

    /// Creates a missing-placeholder error.
    pub fn missing_placeholder(template: impl Into<String>, placeholder: impl Into<String>) -> Self {
        ConfigError::MissingPlaceholder {
            template: template.into(),
            placeholder: placeholder.into(),
        }
    }
}
