//! Finding and recommendation assembly.
//!
//! Pure projections of an evaluation result onto the report's message
//! catalogs: descriptive finding texts with severity levels, and
//! prescriptive recommendation texts. Contextualization fills in the
//! `{placeholder}` markers with page-supplied values.

use serde::{Deserialize, Serialize};

use crate::advisory::template::{render_template, TemplateContext};
use crate::analysis::EvaluationResult;
use crate::config::ReportConfig;
use crate::foundation::{ConfigError, Severity};

/// One display-ready finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub text: String,
    pub level: Severity,
}

/// Maps the top `n` ranked candidates to their finding templates.
///
/// The ranking order is preserved and `n` larger than the ranking simply
/// yields fewer items. A ranked candidate key the configuration does not
/// know means the result and the catalog come from different versions,
/// which fails fast instead of dropping the finding.
pub fn build_top_findings(
    config: &ReportConfig,
    result: &EvaluationResult,
    n: usize,
) -> Result<Vec<Finding>, ConfigError> {
    result
        .ranked_findings
        .iter()
        .take(n)
        .map(|ranked| {
            let candidate = config.candidate(&ranked.candidate_key).ok_or_else(|| {
                ConfigError::unknown_candidate(config.key.as_str(), ranked.candidate_key.as_str())
            })?;
            Ok(Finding {
                text: candidate.finding_template.clone(),
                level: ranked.level,
            })
        })
        .collect()
}

/// Maps the top `n` ranked candidates to their recommendation templates.
///
/// Same ranking as [`build_top_findings`], prescriptive catalog instead
/// of descriptive.
pub fn build_recommendations(
    config: &ReportConfig,
    result: &EvaluationResult,
    n: usize,
) -> Result<Vec<String>, ConfigError> {
    result
        .ranked_findings
        .iter()
        .take(n)
        .map(|ranked| {
            let candidate = config.candidate(&ranked.candidate_key).ok_or_else(|| {
                ConfigError::unknown_candidate(config.key.as_str(), ranked.candidate_key.as_str())
            })?;
            Ok(candidate.recommendation_template.clone())
        })
        .collect()
}

/// Substitutes placeholders in finding texts, keeping the levels.
pub fn contextualize_findings(
    items: &[Finding],
    context: &TemplateContext,
) -> Result<Vec<Finding>, ConfigError> {
    items
        .iter()
        .map(|finding| {
            Ok(Finding {
                text: render_template(&finding.text, context)?,
                level: finding.level,
            })
        })
        .collect()
}

/// Substitutes placeholders in recommendation texts.
pub fn contextualize_recommendations(
    items: &[String],
    context: &TemplateContext,
) -> Result<Vec<String>, ConfigError> {
    items
        .iter()
        .map(|item| render_template(item, context))
        .collect()
}
