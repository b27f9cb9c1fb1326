//! Candidate findings and their scoring rules.
//!
//! A candidate is one anomaly a report screens for. Its scoring rules
//! declare how each criterion score is read off the report metrics, and
//! its relevance threshold decides whether the candidate enters the
//! ranking at all.

use serde::{Deserialize, Serialize};

use crate::foundation::Metrics;

/// Declarative rule mapping report metrics to one criterion score.
///
/// Rules are plain data so a registered catalog can be validated at
/// engine construction and serialized for inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRule {
    /// Reads one metric field directly. Absent fields evaluate to zero.
    Metric(String),
    /// Ratio of two metric fields. A zero or absent denominator
    /// evaluates to zero rather than infinity.
    Share { part: String, whole: String },
    /// Fixed score independent of the metrics.
    Constant(f64),
}

impl ScoreRule {
    pub fn metric(field: impl Into<String>) -> Self {
        ScoreRule::Metric(field.into())
    }

    pub fn share(part: impl Into<String>, whole: impl Into<String>) -> Self {
        ScoreRule::Share {
            part: part.into(),
            whole: whole.into(),
        }
    }

    /// Evaluates the rule against a metrics map.
    pub fn evaluate(&self, metrics: &Metrics) -> f64 {
        match self {
            ScoreRule::Metric(field) => metrics.get(field),
            ScoreRule::Share { part, whole } => {
                let denominator = metrics.get(whole);
                if denominator == 0.0 {
                    0.0
                } else {
                    metrics.get(part) / denominator
                }
            }
            ScoreRule::Constant(value) => *value,
        }
    }
}

/// Binds a scoring rule to the criterion it feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub criterion: String,
    pub rule: ScoreRule,
}

/// One anomaly a report can surface, with its message templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateDef {
    /// Stable identifier carried through ranking results.
    pub key: String,
    /// Human-readable name for logs and explanations.
    pub label: String,
    /// Finding message, possibly holding `{placeholder}` markers.
    pub finding_template: String,
    /// Recommendation message, possibly holding `{placeholder}` markers.
    pub recommendation_template: String,
    /// Smallest criterion score at which the candidate is worth ranking.
    pub relevance_threshold: f64,
    /// Scoring rules, at most one per criterion.
    pub scores: Vec<CriterionScore>,
}

impl CandidateDef {
    /// Creates a candidate with empty templates and a zero relevance
    /// threshold, to be filled in fluently.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        CandidateDef {
            key: key.into(),
            label: label.into(),
            finding_template: String::new(),
            recommendation_template: String::new(),
            relevance_threshold: 0.0,
            scores: Vec::new(),
        }
    }

    pub fn with_finding(mut self, template: impl Into<String>) -> Self {
        self.finding_template = template.into();
        self
    }

    pub fn with_recommendation(mut self, template: impl Into<String>) -> Self {
        self.recommendation_template = template.into();
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.relevance_threshold = threshold;
        self
    }

    pub fn with_score(mut self, criterion: impl Into<String>, rule: ScoreRule) -> Self {
        self.scores.push(CriterionScore {
            criterion: criterion.into(),
            rule,
        });
        self
    }

    /// Evaluates the rule registered for one criterion.
    ///
    /// Criteria the candidate declares no rule for score zero, so a
    /// candidate only competes on the dimensions it speaks to.
    pub fn score_for(&self, criterion_key: &str, metrics: &Metrics) -> f64 {
        self.scores
            .iter()
            .find(|score| score.criterion == criterion_key)
            .map(|score| score.rule.evaluate(metrics))
            .unwrap_or(0.0)
    }

    /// Decides whether a scored row belongs in the decision matrix.
    ///
    /// A candidate is relevant when at least one criterion score is
    /// strictly positive and reaches the relevance threshold. Healthy
    /// reports therefore produce empty matrices instead of rankings of
    /// zero-score noise.
    pub fn is_relevant(&self, row: &[f64]) -> bool {
        row.iter()
            .any(|&score| score > 0.0 && score >= self.relevance_threshold)
    }
}
