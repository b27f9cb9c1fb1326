//! Criterion definitions.
//!
//! A criterion names one dimension along which report findings are
//! compared. Its direction flag records whether a larger raw score makes
//! a finding more severe (the usual case for anomaly metrics) or less.

use serde::{Deserialize, Serialize};

/// One column of a report's decision matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionDef {
    /// Stable identifier, matched by candidate scoring rules.
    pub key: String,
    /// Human-readable name for logs and explanations.
    pub label: String,
    /// When true, larger raw scores make the finding more severe and pull
    /// it up the ranking: severity criteria rather than benefit criteria.
    pub higher_is_worse: bool,
}

impl CriterionDef {
    /// Creates a criterion where larger scores indicate worse findings.
    ///
    /// This is the common case: anomaly counts, imbalance magnitudes and
    /// affected shares all grow with severity.
    pub fn severity(key: impl Into<String>, label: impl Into<String>) -> Self {
        CriterionDef {
            key: key.into(),
            label: label.into(),
            higher_is_worse: true,
        }
    }

    /// Creates a criterion where larger scores indicate better findings.
    pub fn benefit(key: impl Into<String>, label: impl Into<String>) -> Self {
        CriterionDef {
            key: key.into(),
            label: label.into(),
            higher_is_worse: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_criterion_raises_findings() {
        let criterion = CriterionDef::severity("count", "Affected account count");
        assert_eq!(criterion.key, "count");
        assert_eq!(criterion.label, "Affected account count");
        assert!(criterion.higher_is_worse);
    }

    #[test]
    fn benefit_criterion_lowers_findings() {
        let criterion = CriterionDef::benefit("coverage", "Audit coverage");
        assert!(!criterion.higher_is_worse);
    }

    #[test]
    fn criterion_serializes_with_direction_flag() {
        let criterion = CriterionDef::severity("magnitude", "Monetary magnitude");
        let json = serde_json::to_value(&criterion).unwrap();
        assert_eq!(json["key"], "magnitude");
        assert_eq!(json["higher_is_worse"], true);
    }
}
