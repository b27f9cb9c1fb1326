//! Decision matrix construction.
//!
//! Scores every cataloged candidate against the report criteria and
//! keeps only the relevant ones. Rows are candidates, columns follow the
//! criteria declaration order, so the matrix lines up with the weight
//! vector derived from the same configuration.

use crate::config::{CriterionDef, ReportConfig};
use crate::foundation::Metrics;

/// Raw candidate-by-criterion scores for one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMatrix {
    candidate_keys: Vec<String>,
    criteria: Vec<CriterionDef>,
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Scores the candidate catalog against one set of report metrics.
    ///
    /// Candidates whose scores stay below their relevance threshold are
    /// dropped here, so healthy reports produce an empty matrix and no
    /// findings downstream.
    ///
    /// # Edge Cases
    /// - Absent metric fields score zero and cannot make a candidate
    ///   relevant.
    /// - An empty metrics map yields an empty matrix.
    pub fn build(config: &ReportConfig, metrics: &Metrics) -> Self {
        let mut candidate_keys = Vec::new();
        let mut rows = Vec::new();
        for candidate in &config.candidates {
            let row: Vec<f64> = config
                .criteria
                .iter()
                .map(|criterion| candidate.score_for(&criterion.key, metrics))
                .collect();
            if candidate.is_relevant(&row) {
                candidate_keys.push(candidate.key.clone());
                rows.push(row);
            }
        }
        DecisionMatrix {
            candidate_keys,
            criteria: config.criteria.clone(),
            rows,
        }
    }

    /// Keys of the relevant candidates, in catalog order.
    pub fn candidate_keys(&self) -> &[String] {
        &self.candidate_keys
    }

    /// The criteria defining the columns.
    pub fn criteria(&self) -> &[CriterionDef] {
        &self.criteria
    }

    /// Score rows, one per relevant candidate.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn candidate_count(&self) -> usize {
        self.candidate_keys.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidate_keys.is_empty()
    }
}
