//! Decision engine orchestration.
//!
//! Wires the registry, weight derivation, matrix construction, and
//! ranking into the single call a report page makes per render.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{
    AhpWeighting, DecisionMatrix, ScoredCandidate, TopsisRanker, WeightVector,
};
use crate::config::{EngineRegistry, ReportConfig};
use crate::foundation::{ConfigError, Metrics, ReportKey, Severity};

/// One ranked finding with its severity level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFinding {
    pub candidate_key: String,
    pub closeness: f64,
    /// 1-based position in the ranking.
    pub rank: usize,
    pub level: Severity,
}

/// Everything one engine call produces.
///
/// Formatting functions are pure projections of this value plus
/// caller-supplied context; the engine keeps no per-call state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub report_key: ReportKey,
    pub ranked_findings: Vec<RankedFinding>,
    pub weights: WeightVector,
}

/// Evaluates report metrics against the registered advisory policies.
///
/// Construction validates every registered configuration and memoizes the
/// derived criterion weights, so misconfiguration surfaces at startup and
/// per-request evaluation works on read-only state. The engine holds no
/// interior mutability and is freely shareable across threads.
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    registry: EngineRegistry,
    weights: HashMap<ReportKey, WeightVector>,
}

impl DecisionEngine {
    /// Validates every registered report and derives its weights.
    ///
    /// Fails on the first defective configuration; a partially valid
    /// registry never serves.
    pub fn new(registry: EngineRegistry) -> Result<Self, ConfigError> {
        let mut weights = HashMap::new();
        for key in registry.keys() {
            let config = registry.report(key)?;
            config.validate()?;
            let derived = AhpWeighting::derive_weights(
                key.as_str(),
                &config.criteria,
                &config.comparisons,
            )?;
            weights.insert(key, derived);
        }
        debug!(reports = weights.len(), "validated advisory configuration");
        Ok(DecisionEngine { registry, weights })
    }

    /// The validated configuration for one report, for handing to the
    /// formatting functions.
    pub fn report_config(&self, key: ReportKey) -> Result<&ReportConfig, ConfigError> {
        self.registry.report(key)
    }

    /// Memoized criterion weights for one report.
    pub fn weights(&self, key: ReportKey) -> Result<&WeightVector, ConfigError> {
        self.weights
            .get(&key)
            .ok_or_else(|| ConfigError::unknown_report(key.as_str()))
    }

    /// Evaluates one report's metrics into ranked findings.
    ///
    /// # Edge Cases
    /// - An unknown report key is a configuration error, never a silent
    ///   empty result; it indicates a caller/engine version mismatch.
    /// - A healthy report (no relevant candidate) yields empty findings
    ///   with the weights still attached.
    pub fn run_fuzzy_ahp_topsis(
        &self,
        key: ReportKey,
        metrics: &Metrics,
    ) -> Result<EvaluationResult, ConfigError> {
        let config = self.registry.report(key)?;
        let weights = self.weights(key)?;

        let matrix = DecisionMatrix::build(config, metrics);
        debug!(
            report = %key,
            catalog = config.candidates.len(),
            relevant = matrix.candidate_count(),
            "built decision matrix"
        );

        let ranked_findings: Vec<RankedFinding> = TopsisRanker::rank(&matrix, weights)
            .into_iter()
            .enumerate()
            .map(|(index, scored)| {
                let ScoredCandidate {
                    candidate_key,
                    closeness,
                } = scored;
                RankedFinding {
                    candidate_key,
                    closeness,
                    rank: index + 1,
                    level: config.thresholds.classify(closeness),
                }
            })
            .collect();
        debug!(
            report = %key,
            findings = ranked_findings.len(),
            "ranked advisory findings"
        );

        Ok(EvaluationResult {
            report_key: key,
            ranked_findings,
            weights: weights.clone(),
        })
    }
}
