//! Per-report configuration.
//!
//! Bundles everything one report needs to be evaluated: its criteria,
//! the pairwise importance judgments, the candidate catalog, and the
//! severity thresholds. A configuration is inert data until it passes
//! [`ReportConfig::validate`] during registration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::advisory::validate_template;
use crate::config::{CandidateDef, ComparisonTable, CriterionDef, SeverityThresholds};
use crate::foundation::{ConfigError, ReportKey};

/// Complete evaluation policy for one report type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub key: ReportKey,
    pub criteria: Vec<CriterionDef>,
    pub comparisons: ComparisonTable,
    pub candidates: Vec<CandidateDef>,
    pub thresholds: SeverityThresholds,
}

impl ReportConfig {
    /// Creates a configuration with default severity thresholds.
    pub fn new(
        key: ReportKey,
        criteria: Vec<CriterionDef>,
        comparisons: ComparisonTable,
        candidates: Vec<CandidateDef>,
    ) -> Self {
        ReportConfig {
            key,
            criteria,
            comparisons,
            candidates,
            thresholds: SeverityThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: SeverityThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Criterion keys in declaration order, which is also the column
    /// order of the decision matrix.
    pub fn criterion_keys(&self) -> impl Iterator<Item = &str> {
        self.criteria.iter().map(|criterion| criterion.key.as_str())
    }

    /// Looks up a candidate by key.
    pub fn candidate(&self, key: &str) -> Option<&CandidateDef> {
        self.candidates.iter().find(|candidate| candidate.key == key)
    }

    /// Checks the configuration for structural defects.
    ///
    /// Runs when the configuration is registered so that defects surface
    /// at startup, not in the middle of a report evaluation. The
    /// consistency of the judgments themselves is checked separately
    /// during weight derivation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let report = self.key.as_str();

        if self.criteria.is_empty() {
            return Err(ConfigError::EmptyCriteria {
                report: report.to_string(),
            });
        }

        let mut criterion_keys = HashSet::new();
        for criterion in &self.criteria {
            if !criterion_keys.insert(criterion.key.as_str()) {
                return Err(ConfigError::DuplicateCriterion {
                    report: report.to_string(),
                    criterion: criterion.key.clone(),
                });
            }
        }

        self.comparisons.validate(report, self.criteria.len())?;

        let mut candidate_keys = HashSet::new();
        for candidate in &self.candidates {
            if !candidate_keys.insert(candidate.key.as_str()) {
                return Err(ConfigError::DuplicateCandidate {
                    report: report.to_string(),
                    candidate: candidate.key.clone(),
                });
            }
            for score in &candidate.scores {
                if !criterion_keys.contains(score.criterion.as_str()) {
                    return Err(ConfigError::UnknownCriterion {
                        report: report.to_string(),
                        candidate: candidate.key.clone(),
                        criterion: score.criterion.clone(),
                    });
                }
            }
            validate_template(&candidate.finding_template)?;
            validate_template(&candidate.recommendation_template)?;
        }

        self.thresholds.validate(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoreRule;
    use crate::foundation::FuzzyTriangular;

    fn two_criteria_config() -> ReportConfig {
        let comparisons = ComparisonTable::from_upper_triangle(
            2,
            &[FuzzyTriangular::judgment(3).unwrap()],
        )
        .unwrap();
        ReportConfig::new(
            ReportKey::AccountBalance,
            vec![
                CriterionDef::severity("count", "Affected account count"),
                CriterionDef::severity("share", "Share of accounts affected"),
            ],
            comparisons,
            vec![
                CandidateDef::new("negative-balance", "Negative balances")
                    .with_finding("Negative balances found in {period_label}")
                    .with_recommendation("Review postings for {period_label}")
                    .with_threshold(1.0)
                    .with_score("count", ScoreRule::metric("negative_count"))
                    .with_score("share", ScoreRule::share("negative_count", "total_accounts")),
            ],
        )
    }

    #[test]
    fn well_formed_config_validates() {
        assert!(two_criteria_config().validate().is_ok());
    }

    #[test]
    fn criterion_keys_follow_declaration_order() {
        let config = two_criteria_config();
        let keys: Vec<&str> = config.criterion_keys().collect();
        assert_eq!(keys, vec!["count", "share"]);
    }

    #[test]
    fn candidate_lookup_by_key() {
        let config = two_criteria_config();
        assert!(config.candidate("negative-balance").is_some());
        assert!(config.candidate("zero-balance").is_none());
    }

    #[test]
    fn empty_criteria_are_rejected() {
        let mut config = two_criteria_config();
        config.criteria.clear();
        config.comparisons = ComparisonTable::from_upper_triangle(0, &[]).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyCriteria { .. })
        ));
    }

    #[test]
    fn duplicate_criterion_keys_are_rejected() {
        let mut config = two_criteria_config();
        config.criteria[1].key = "count".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateCriterion { .. })
        ));
    }

    #[test]
    fn duplicate_candidate_keys_are_rejected() {
        let mut config = two_criteria_config();
        let duplicate = config.candidates[0].clone();
        config.candidates.push(duplicate);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateCandidate { .. })
        ));
    }

    #[test]
    fn scores_must_reference_declared_criteria() {
        let mut config = two_criteria_config();
        config.candidates[0].scores[0].criterion = "magnitude".into();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownCriterion { ref criterion, .. } if criterion == "magnitude"
        ));
    }

    #[test]
    fn unclosed_placeholder_in_template_is_rejected() {
        let mut config = two_criteria_config();
        config.candidates[0].finding_template = "Broken {period_label".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MalformedTemplate { .. })
        ));
    }

    #[test]
    fn threshold_defects_are_rejected() {
        let mut config = two_criteria_config();
        config.thresholds = SeverityThresholds::new(0.2, 0.8);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThresholds { .. })
        ));
    }

    #[test]
    fn table_size_must_match_criteria_count() {
        let mut config = two_criteria_config();
        config.criteria.push(CriterionDef::severity(
            "magnitude",
            "Monetary magnitude",
        ));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TableShape { .. })
        ));
    }
}
