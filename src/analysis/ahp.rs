//! Fuzzy AHP criterion weighting.
//!
//! Derives crisp criterion weights from a table of triangular fuzzy
//! pairwise judgments: fuzzy geometric row means, fuzzy normalization,
//! centroid defuzzification, then a final crisp renormalization. Before
//! any weight is derived the judgments must pass Saaty's consistency
//! check on their modal values.

use serde::{Deserialize, Serialize};

use crate::config::{ComparisonTable, CriterionDef};
use crate::foundation::ConfigError;

/// Largest acceptable consistency ratio for a comparison table.
pub const CONSISTENCY_RATIO_LIMIT: f64 = 0.1;

/// Saaty random index by matrix size. Sizes above ten reuse the last
/// entry.
const RANDOM_INDEX: [f64; 11] = [
    0.0, 0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49,
];

/// One criterion's derived weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeight {
    pub criterion: String,
    pub weight: f64,
}

/// Crisp criterion weights in declaration order, summing to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    entries: Vec<CriterionWeight>,
}

impl WeightVector {
    pub fn from_entries(entries: Vec<CriterionWeight>) -> Self {
        WeightVector { entries }
    }

    pub fn entries(&self) -> &[CriterionWeight] {
        &self.entries
    }

    /// Looks up the weight for one criterion key.
    pub fn get(&self, criterion: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.criterion == criterion)
            .map(|entry| entry.weight)
    }

    /// Weights in declaration order, aligned with the decision matrix
    /// columns.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|entry| entry.weight)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derives criterion weights from fuzzy pairwise judgments.
pub struct AhpWeighting;

impl AhpWeighting {
    /// Turns a validated comparison table into crisp weights.
    ///
    /// The table is structurally validated and consistency-checked here
    /// even when the caller already did so, because weights silently
    /// derived from a defective table would corrupt every ranking that
    /// follows.
    ///
    /// # Edge Cases
    /// - A single criterion gets weight `1.0` with no consistency check.
    /// - Two criteria are always consistent; the ratio is zero.
    /// - Empty criteria are a configuration error, not an empty vector.
    pub fn derive_weights(
        report: &str,
        criteria: &[CriterionDef],
        comparisons: &ComparisonTable,
    ) -> Result<WeightVector, ConfigError> {
        if criteria.is_empty() {
            return Err(ConfigError::EmptyCriteria {
                report: report.to_string(),
            });
        }
        comparisons.validate(report, criteria.len())?;

        let ratio = Self::consistency_ratio(comparisons);
        if ratio > CONSISTENCY_RATIO_LIMIT {
            return Err(ConfigError::InconsistentComparisons {
                report: report.to_string(),
                ratio,
                limit: CONSISTENCY_RATIO_LIMIT,
            });
        }

        let n = criteria.len();
        let mut row_means = Vec::with_capacity(n);
        for i in 0..n {
            let mut product = comparisons.entry(i, 0);
            for j in 1..n {
                product = product.multiply(&comparisons.entry(i, j));
            }
            row_means.push(product.powf(1.0 / n as f64));
        }

        let mut total = row_means[0];
        for mean in &row_means[1..] {
            total = total.add(mean);
        }
        let inverse = total.reciprocal();

        let crisp: Vec<f64> = row_means
            .iter()
            .map(|mean| mean.multiply(&inverse).defuzzify())
            .collect();
        let crisp_total: f64 = crisp.iter().sum();

        let entries = criteria
            .iter()
            .zip(crisp)
            .map(|(criterion, weight)| CriterionWeight {
                criterion: criterion.key.clone(),
                weight: weight / crisp_total,
            })
            .collect();
        Ok(WeightVector { entries })
    }

    /// Saaty consistency ratio of the modal (most-likely) judgments.
    ///
    /// Builds the crisp modal matrix, estimates the principal eigenvalue
    /// from the geometric-mean priority vector, and relates the resulting
    /// consistency index to the random index for the table size.
    ///
    /// The table must already be square with positive entries; sizes up
    /// to two are consistent by definition.
    pub fn consistency_ratio(comparisons: &ComparisonTable) -> f64 {
        let n = comparisons.size();
        if n <= 2 {
            return 0.0;
        }

        let modal: Vec<Vec<f64>> = (0..n)
            .map(|i| (0..n).map(|j| comparisons.entry(i, j).modal()).collect())
            .collect();

        let mut weights: Vec<f64> = modal
            .iter()
            .map(|row| row.iter().product::<f64>().powf(1.0 / n as f64))
            .collect();
        let total: f64 = weights.iter().sum();
        for weight in &mut weights {
            *weight /= total;
        }

        let lambda_max = (0..n)
            .map(|i| {
                let dot: f64 = modal[i]
                    .iter()
                    .zip(&weights)
                    .map(|(a, w)| a * w)
                    .sum();
                dot / weights[i]
            })
            .sum::<f64>()
            / n as f64;

        let consistency_index = (lambda_max - n as f64) / (n as f64 - 1.0);
        consistency_index / RANDOM_INDEX[n.min(10)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::FuzzyTriangular;

    fn judgment(intensity: u8) -> FuzzyTriangular {
        FuzzyTriangular::judgment(intensity).unwrap()
    }

    fn criteria(keys: &[&str]) -> Vec<CriterionDef> {
        keys.iter()
            .map(|key| CriterionDef::severity(*key, *key))
            .collect()
    }

    #[test]
    fn single_criterion_gets_full_weight() {
        let table = ComparisonTable::from_upper_triangle(1, &[]).unwrap();
        let weights =
            AhpWeighting::derive_weights("cash-ledger", &criteria(&["magnitude"]), &table)
                .unwrap();
        assert_eq!(weights.len(), 1);
        assert!((weights.get("magnitude").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn equal_judgments_give_equal_weights() {
        let table = ComparisonTable::from_upper_triangle(
            3,
            &[judgment(1), judgment(1), judgment(1)],
        )
        .unwrap();
        let weights = AhpWeighting::derive_weights(
            "closing-balance",
            &criteria(&["magnitude", "count", "share"]),
            &table,
        )
        .unwrap();
        for entry in weights.entries() {
            assert!((entry.weight - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn derived_weights_sum_to_one() {
        let table = ComparisonTable::from_upper_triangle(
            3,
            &[judgment(5), judgment(3), judgment(2).reciprocal()],
        )
        .unwrap();
        let weights = AhpWeighting::derive_weights(
            "closing-balance",
            &criteria(&["magnitude", "count", "share"]),
            &table,
        )
        .unwrap();
        let sum: f64 = weights.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(weights.values().all(|w| w > 0.0 && w < 1.0));
    }

    #[test]
    fn stronger_judgment_earns_the_larger_weight() {
        let table = ComparisonTable::from_upper_triangle(2, &[judgment(3)]).unwrap();
        let weights = AhpWeighting::derive_weights(
            "account-balance",
            &criteria(&["count", "share"]),
            &table,
        )
        .unwrap();
        assert!(weights.get("count").unwrap() > weights.get("share").unwrap());
    }

    #[test]
    fn weights_follow_criteria_declaration_order() {
        let table = ComparisonTable::from_upper_triangle(2, &[judgment(3)]).unwrap();
        let weights = AhpWeighting::derive_weights(
            "account-balance",
            &criteria(&["count", "share"]),
            &table,
        )
        .unwrap();
        let keys: Vec<&str> = weights
            .entries()
            .iter()
            .map(|entry| entry.criterion.as_str())
            .collect();
        assert_eq!(keys, vec!["count", "share"]);
    }

    #[test]
    fn two_criteria_are_always_consistent() {
        let table = ComparisonTable::from_upper_triangle(2, &[judgment(9)]).unwrap();
        assert_eq!(AhpWeighting::consistency_ratio(&table), 0.0);
    }

    #[test]
    fn nearly_transitive_judgments_pass_the_consistency_check() {
        let table = ComparisonTable::from_upper_triangle(
            3,
            &[judgment(5), judgment(3), judgment(2).reciprocal()],
        )
        .unwrap();
        let ratio = AhpWeighting::consistency_ratio(&table);
        assert!(ratio >= -1e-12);
        assert!(ratio < CONSISTENCY_RATIO_LIMIT);
    }

    #[test]
    fn circular_judgments_are_rejected() {
        // A beats B, B beats C, yet C beats A.
        let table = ComparisonTable::from_upper_triangle(
            3,
            &[judgment(9), judgment(9).reciprocal(), judgment(9)],
        )
        .unwrap();
        let err = AhpWeighting::derive_weights(
            "trial-balance",
            &criteria(&["a", "b", "c"]),
            &table,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InconsistentComparisons { ratio, .. } if ratio > CONSISTENCY_RATIO_LIMIT
        ));
    }

    #[test]
    fn broken_reciprocity_fails_before_weighting() {
        let table = ComparisonTable::from_rows(vec![
            vec![FuzzyTriangular::EQUAL, judgment(3)],
            vec![judgment(5), FuzzyTriangular::EQUAL],
        ]);
        let err = AhpWeighting::derive_weights(
            "account-balance",
            &criteria(&["count", "share"]),
            &table,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::BrokenReciprocity { .. }));
    }

    #[test]
    fn empty_criteria_are_a_configuration_error() {
        let table = ComparisonTable::from_upper_triangle(0, &[]).unwrap();
        let err = AhpWeighting::derive_weights("account-balance", &[], &table).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyCriteria { .. }));
    }

    #[test]
    fn weight_lookup_misses_return_none() {
        let weights = WeightVector::from_entries(vec![CriterionWeight {
            criterion: "count".into(),
            weight: 1.0,
        }]);
        assert_eq!(weights.get("count"), Some(1.0));
        assert_eq!(weights.get("magnitude"), None);
    }
}
