//! TOPSIS ranking.
//!
//! Orders the rows of a decision matrix by their relative closeness to
//! the most severe score profile: normalize columns, weight them, find
//! the per-column severe and benign poles, and score each row by how
//! much closer it sits to the severe pole than to the benign one. For a
//! higher-is-worse criterion the severe pole is the column maximum;
//! benefit criteria invert it. Ranking descending by closeness therefore
//! puts the most pressing finding first.

use serde::{Deserialize, Serialize};

use crate::analysis::{DecisionMatrix, WeightVector};

/// One candidate's closeness to the severe pole, in `[0, 1]`.
///
/// Closeness one means the candidate sits on the severe pole of every
/// criterion; zero means it sits on the benign pole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate_key: String,
    pub closeness: f64,
}

/// Ranks decision matrix rows by relative closeness.
pub struct TopsisRanker;

impl TopsisRanker {
    /// Scores and orders the matrix rows, most severe first.
    ///
    /// The weight vector must come from the same configuration as the
    /// matrix so its entries align with the matrix columns.
    ///
    /// # Edge Cases
    /// - An empty matrix ranks to an empty sequence.
    /// - An all-zero column normalizes to zeros instead of dividing by
    ///   zero.
    /// - A candidate identical to both poles (the degenerate single-row
    ///   case) gets closeness zero, not NaN.
    /// - Ties keep catalog registration order; the sort is stable.
    pub fn rank(matrix: &DecisionMatrix, weights: &WeightVector) -> Vec<ScoredCandidate> {
        if matrix.is_empty() {
            return Vec::new();
        }

        debug_assert_eq!(
            weights.len(),
            matrix.criterion_count(),
            "weights must align with matrix columns"
        );
        debug_assert!(
            matrix
                .criteria()
                .iter()
                .zip(weights.entries())
                .all(|(criterion, weight)| criterion.key == weight.criterion),
            "weights must come from the matrix's own configuration"
        );

        let rows = matrix.rows();
        let columns = matrix.criterion_count();

        // Vector normalization, then weighting, column by column.
        let mut weighted = vec![vec![0.0; columns]; rows.len()];
        for (j, weight) in weights.values().enumerate() {
            let norm = rows
                .iter()
                .map(|row| row[j] * row[j])
                .sum::<f64>()
                .sqrt();
            if norm == 0.0 {
                continue;
            }
            for (i, row) in rows.iter().enumerate() {
                weighted[i][j] = row[j] / norm * weight;
            }
        }

        // Per-column severity poles, oriented by the criterion direction.
        let mut severe_pole = vec![0.0; columns];
        let mut benign_pole = vec![0.0; columns];
        for (j, criterion) in matrix.criteria().iter().enumerate() {
            let column = weighted.iter().map(|row| row[j]);
            let min = column.clone().fold(f64::INFINITY, f64::min);
            let max = column.fold(f64::NEG_INFINITY, f64::max);
            if criterion.higher_is_worse {
                severe_pole[j] = max;
                benign_pole[j] = min;
            } else {
                severe_pole[j] = min;
                benign_pole[j] = max;
            }
        }

        let mut scored: Vec<ScoredCandidate> = matrix
            .candidate_keys()
            .iter()
            .zip(&weighted)
            .map(|(key, row)| {
                let to_severe = euclidean(row, &severe_pole);
                let to_benign = euclidean(row, &benign_pole);
                let denominator = to_severe + to_benign;
                let closeness = if denominator == 0.0 {
                    0.0
                } else {
                    to_benign / denominator
                };
                ScoredCandidate {
                    candidate_key: key.clone(),
                    closeness,
                }
            })
            .collect();

        // Stable by construction, so ties keep registration order.
        scored.sort_by(|a, b| b.closeness.total_cmp(&a.closeness));
        scored
    }
}

fn euclidean(row: &[f64], pole: &[f64]) -> f64 {
    row.iter()
        .zip(pole)
        .map(|(value, target)| (value - target) * (value - target))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{CriterionWeight, DecisionMatrix};
    use crate::config::{CandidateDef, ComparisonTable, CriterionDef, ReportConfig, ScoreRule};
    use crate::foundation::{FuzzyTriangular, Metrics, ReportKey};

    fn weights(entries: &[(&str, f64)]) -> WeightVector {
        WeightVector::from_entries(
            entries
                .iter()
                .map(|(criterion, weight)| CriterionWeight {
                    criterion: (*criterion).into(),
                    weight: *weight,
                })
                .collect(),
        )
    }

    fn matrix_from(metrics: &Metrics) -> DecisionMatrix {
        let comparisons = ComparisonTable::from_upper_triangle(
            2,
            &[FuzzyTriangular::judgment(3).unwrap()],
        )
        .unwrap();
        let config = ReportConfig::new(
            ReportKey::AccountBalance,
            vec![
                CriterionDef::severity("count", "Affected account count"),
                CriterionDef::severity("share", "Share of accounts affected"),
            ],
            comparisons,
            vec![
                CandidateDef::new("negative-balance", "Negative balances")
                    .with_threshold(1.0)
                    .with_score("count", ScoreRule::metric("negative_count"))
                    .with_score("share", ScoreRule::share("negative_count", "total_accounts")),
                CandidateDef::new("zero-balance", "Zero balances")
                    .with_threshold(1.0)
                    .with_score("count", ScoreRule::metric("zero_count"))
                    .with_score("share", ScoreRule::share("zero_count", "total_accounts")),
            ],
        );
        DecisionMatrix::build(&config, metrics)
    }

    #[test]
    fn empty_matrix_ranks_to_nothing() {
        let matrix = matrix_from(&Metrics::new());
        let ranked = TopsisRanker::rank(&matrix, &weights(&[("count", 0.75), ("share", 0.25)]));
        assert!(ranked.is_empty());
    }

    #[test]
    fn dominant_candidate_ranks_first() {
        let metrics = Metrics::new()
            .with("negative_count", 20.0)
            .with("zero_count", 5.0)
            .with("total_accounts", 100.0);
        let matrix = matrix_from(&metrics);
        let ranked = TopsisRanker::rank(&matrix, &weights(&[("count", 0.75), ("share", 0.25)]));
        assert_eq!(ranked[0].candidate_key, "negative-balance");
        assert_eq!(ranked[1].candidate_key, "zero-balance");
        assert!(ranked[0].closeness > ranked[1].closeness);
    }

    #[test]
    fn dominating_on_every_criterion_scores_closeness_one() {
        let metrics = Metrics::new()
            .with("negative_count", 20.0)
            .with("zero_count", 5.0)
            .with("total_accounts", 100.0);
        let matrix = matrix_from(&metrics);
        let ranked = TopsisRanker::rank(&matrix, &weights(&[("count", 0.75), ("share", 0.25)]));
        // The dominant row sits exactly on the severe pole of both
        // columns, the dominated row exactly on the benign pole.
        assert!((ranked[0].closeness - 1.0).abs() < 1e-12);
        assert!(ranked[1].closeness.abs() < 1e-12);
    }

    #[test]
    fn closeness_stays_within_unit_interval() {
        let metrics = Metrics::new()
            .with("negative_count", 20.0)
            .with("zero_count", 5.0)
            .with("total_accounts", 100.0);
        let matrix = matrix_from(&metrics);
        let ranked = TopsisRanker::rank(&matrix, &weights(&[("count", 0.75), ("share", 0.25)]));
        for candidate in &ranked {
            assert!(candidate.closeness >= 0.0);
            assert!(candidate.closeness <= 1.0);
        }
    }

    #[test]
    fn single_candidate_scores_zero_closeness() {
        // Identical to both poles, so both distances vanish.
        let metrics = Metrics::new()
            .with("negative_count", 20.0)
            .with("total_accounts", 100.0);
        let matrix = matrix_from(&metrics);
        assert_eq!(matrix.candidate_count(), 1);
        let ranked = TopsisRanker::rank(&matrix, &weights(&[("count", 0.75), ("share", 0.25)]));
        assert_eq!(ranked[0].closeness, 0.0);
    }

    #[test]
    fn tied_candidates_keep_registration_order() {
        let metrics = Metrics::new()
            .with("negative_count", 5.0)
            .with("zero_count", 5.0)
            .with("total_accounts", 100.0);
        let matrix = matrix_from(&metrics);
        let ranked = TopsisRanker::rank(&matrix, &weights(&[("count", 0.75), ("share", 0.25)]));
        assert_eq!(ranked[0].candidate_key, "negative-balance");
        assert_eq!(ranked[1].candidate_key, "zero-balance");
        assert!((ranked[0].closeness - ranked[1].closeness).abs() < 1e-12);
    }

    #[test]
    fn ranking_is_deterministic() {
        let metrics = Metrics::new()
            .with("negative_count", 20.0)
            .with("zero_count", 5.0)
            .with("total_accounts", 100.0);
        let matrix = matrix_from(&metrics);
        let w = weights(&[("count", 0.75), ("share", 0.25)]);
        let first = TopsisRanker::rank(&matrix, &w);
        let second = TopsisRanker::rank(&matrix, &w);
        assert_eq!(first, second);
    }

    #[test]
    fn raising_a_severity_score_does_not_lower_the_rank() {
        let baseline = Metrics::new()
            .with("negative_count", 6.0)
            .with("zero_count", 5.0)
            .with("total_accounts", 100.0);
        let raised = Metrics::new()
            .with("negative_count", 12.0)
            .with("zero_count", 5.0)
            .with("total_accounts", 100.0);
        let w = weights(&[("count", 0.75), ("share", 0.25)]);
        let before = TopsisRanker::rank(&matrix_from(&baseline), &w);
        let after = TopsisRanker::rank(&matrix_from(&raised), &w);
        let closeness_of = |ranked: &[ScoredCandidate]| {
            ranked
                .iter()
                .find(|c| c.candidate_key == "negative-balance")
                .map(|c| c.closeness)
                .unwrap()
        };
        assert!(closeness_of(&after) >= closeness_of(&before));
    }

    #[test]
    fn all_zero_column_does_not_poison_the_ranking() {
        // Neither candidate scores on share because the denominator is
        // absent, leaving that column all zero.
        let metrics = Metrics::new()
            .with("negative_count", 20.0)
            .with("zero_count", 5.0);
        let matrix = matrix_from(&metrics);
        let ranked = TopsisRanker::rank(&matrix, &weights(&[("count", 0.75), ("share", 0.25)]));
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|candidate| candidate.closeness.is_finite()));
        assert_eq!(ranked[0].candidate_key, "negative-balance");
    }

    #[test]
    fn benefit_criteria_invert_the_severe_pole() {
        // One severity column, one benefit column, equal weights. The
        // first row is worse on both counts: higher severity score and
        // lower benefit score.
        let config = ReportConfig::new(
            ReportKey::TrialBalance,
            vec![
                CriterionDef::severity("count", "Affected count"),
                CriterionDef::benefit("coverage", "Audit coverage"),
            ],
            ComparisonTable::from_upper_triangle(2, &[FuzzyTriangular::EQUAL]).unwrap(),
            vec![
                CandidateDef::new("first", "First")
                    .with_score("count", ScoreRule::metric("first_count"))
                    .with_score("coverage", ScoreRule::metric("first_coverage")),
                CandidateDef::new("second", "Second")
                    .with_score("count", ScoreRule::metric("second_count"))
                    .with_score("coverage", ScoreRule::metric("second_coverage")),
            ],
        );
        let metrics = Metrics::new()
            .with("first_count", 9.0)
            .with("first_coverage", 1.0)
            .with("second_count", 1.0)
            .with("second_coverage", 9.0);
        let matrix = DecisionMatrix::build(&config, &metrics);
        let ranked =
            TopsisRanker::rank(&matrix, &weights(&[("count", 0.5), ("coverage", 0.5)]));
        assert_eq!(ranked[0].candidate_key, "first");
        assert!(ranked[0].closeness > ranked[1].closeness);
    }
}
