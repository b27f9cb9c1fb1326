//! Built-in advisory catalog.
//!
//! The authored evaluation policy for the four report families the
//! application renders advisory panels on. Comparison judgments, candidate
//! catalogs, message templates, and severity thresholds are policy values,
//! kept here in one place so they can be reviewed and tuned without
//! touching the engine mechanics.
//!
//! A defect in this catalog is a programmer error: constructors panic and
//! the shared engine fails at first use rather than serving rankings
//! derived from a broken table.

use once_cell::sync::Lazy;

use crate::analysis::DecisionEngine;
use crate::config::{
    CandidateDef, ComparisonTable, CriterionDef, EngineRegistry, ReportConfig, ScoreRule,
    SeverityThresholds,
};
use crate::foundation::{FuzzyTriangular, ReportKey};

static ENGINE: Lazy<DecisionEngine> = Lazy::new(|| {
    DecisionEngine::new(registry())
        .unwrap_or_else(|e| panic!("built-in advisory catalog failed validation: {}", e))
});

/// Shared engine over the built-in catalog.
///
/// Validated once on first use; safe to share across threads because the
/// engine is read-only after construction.
pub fn engine() -> &'static DecisionEngine {
    &ENGINE
}

/// Builds a fresh registry holding the built-in catalog.
///
/// Callers that want to extend or replace single reports register over
/// this before constructing their own engine.
pub fn registry() -> EngineRegistry {
    let mut registry = EngineRegistry::new();
    registry.register(account_balance());
    registry.register(closing_balance());
    registry.register(trial_balance());
    registry.register(cash_ledger());
    registry
}

fn judgment(intensity: u8) -> FuzzyTriangular {
    FuzzyTriangular::judgment(intensity)
        .unwrap_or_else(|e| panic!("built-in judgment scale entry {}: {}", intensity, e))
}

fn upper_triangle(n: usize, entries: &[FuzzyTriangular]) -> ComparisonTable {
    ComparisonTable::from_upper_triangle(n, entries)
        .unwrap_or_else(|e| panic!("built-in comparison table: {}", e))
}

/// Account balance listing: anomalies are counted accounts, so the share
/// of the ledger affected says more than the raw count.
fn account_balance() -> ReportConfig {
    ReportConfig::new(
        ReportKey::AccountBalance,
        vec![
            CriterionDef::severity("count", "Affected account count"),
            CriterionDef::severity("share", "Share of accounts affected"),
        ],
        upper_triangle(2, &[judgment(3).reciprocal()]),
        vec![
            CandidateDef::new("negative-balance", "Accounts with negative balances")
                .with_finding(
                    "Accounts with negative balances appear in {source_label} for {period_label}",
                )
                .with_recommendation(
                    "Review journal postings for the negative-balance accounts in {period_label}",
                )
                .with_threshold(1.0)
                .with_score("count", ScoreRule::metric("negative_count"))
                .with_score("share", ScoreRule::share("negative_count", "total_accounts")),
            CandidateDef::new("zero-balance", "Dormant zero-balance accounts")
                .with_finding(
                    "Dormant zero-balance accounts remain in {source_label} for {period_label}",
                )
                .with_recommendation(
                    "Consider archiving or reclassifying the dormant accounts before closing \
                     {period_label}",
                )
                .with_threshold(1.0)
                .with_score("count", ScoreRule::metric("zero_count"))
                .with_score("share", ScoreRule::share("zero_count", "total_accounts")),
            CandidateDef::new("suspicious-code", "Accounts carrying the reserved 00 code")
                .with_finding(
                    "Accounts carrying the reserved 00 code appear in {source_label} for \
                     {period_label}",
                )
                .with_recommendation(
                    "Audit the account codes flagged 00 before closing {period_label}",
                )
                .with_threshold(1.0)
                .with_score("count", ScoreRule::metric("marked_00_count"))
                .with_score("share", ScoreRule::share("marked_00_count", "total_accounts")),
        ],
    )
}

/// Closing balance sheet: a monetary imbalance outweighs any count of
/// affected accounts, and the share again outweighs the raw count.
fn closing_balance() -> ReportConfig {
    ReportConfig::new(
        ReportKey::ClosingBalance,
        vec![
            CriterionDef::severity("magnitude", "Monetary magnitude"),
            CriterionDef::severity("count", "Affected account count"),
            CriterionDef::severity("share", "Share of accounts affected"),
        ],
        upper_triangle(
            3,
            &[judgment(5), judgment(3), judgment(2).reciprocal()],
        ),
        vec![
            CandidateDef::new("unbalanced-sheet", "Balance sheet does not balance")
                .with_finding(
                    "Assets and liabilities plus equity differ in {source_label} for \
                     {period_label}",
                )
                .with_recommendation(
                    "Trace the imbalance to its journal entries before publishing {period_label}",
                )
                .with_threshold(0.01)
                .with_score("magnitude", ScoreRule::metric("imbalance")),
            CandidateDef::new("negative-balance", "Closing balances below zero")
                .with_finding(
                    "Closing balances below zero appear in {source_label} for {period_label}",
                )
                .with_recommendation(
                    "Verify the postings behind the negative closing balances in {period_label}",
                )
                .with_threshold(1.0)
                .with_score("count", ScoreRule::metric("negative_count"))
                .with_score("share", ScoreRule::share("negative_count", "total_accounts")),
            CandidateDef::new("zero-balance", "Accounts closing at exactly zero")
                .with_finding(
                    "Accounts closing at exactly zero remain in {source_label} for {period_label}",
                )
                .with_recommendation(
                    "Confirm the zero closing balances in {period_label} are intentional",
                )
                .with_threshold(1.0)
                .with_score("count", ScoreRule::metric("zero_count"))
                .with_score("share", ScoreRule::share("zero_count", "total_accounts")),
        ],
    )
}

/// Trial balance: same criteria family as the closing balance sheet.
fn trial_balance() -> ReportConfig {
    ReportConfig::new(
        ReportKey::TrialBalance,
        vec![
            CriterionDef::severity("magnitude", "Monetary magnitude"),
            CriterionDef::severity("count", "Affected account count"),
            CriterionDef::severity("share", "Share of accounts affected"),
        ],
        upper_triangle(
            3,
            &[judgment(5), judgment(3), judgment(2).reciprocal()],
        ),
        vec![
            CandidateDef::new("unbalanced-totals", "Debit and credit totals differ")
                .with_finding(
                    "Debit and credit totals differ in {source_label} for {period_label}",
                )
                .with_recommendation(
                    "Re-foot the ledger columns and trace the difference in {period_label}",
                )
                .with_threshold(0.01)
                .with_score("magnitude", ScoreRule::metric("imbalance")),
            CandidateDef::new("negative-balance", "Trial balances below zero")
                .with_finding(
                    "Trial balances below zero appear in {source_label} for {period_label}",
                )
                .with_recommendation(
                    "Check the normal balance side of the affected accounts in {period_label}",
                )
                .with_threshold(1.0)
                .with_score("count", ScoreRule::metric("negative_count"))
                .with_score("share", ScoreRule::share("negative_count", "total_accounts")),
            CandidateDef::new("missing-account", "Referenced accounts without postings")
                .with_finding(
                    "Referenced accounts are missing postings in {source_label} for \
                     {period_label}",
                )
                .with_recommendation(
                    "Post or remove the unposted account references before closing {period_label}",
                )
                .with_threshold(1.0)
                .with_score("count", ScoreRule::metric("missing_count"))
                .with_score("share", ScoreRule::share("missing_count", "total_accounts")),
        ],
    )
}

/// Cash ledger: tighter thresholds because cash anomalies are the ones
/// management reads first.
fn cash_ledger() -> ReportConfig {
    ReportConfig::new(
        ReportKey::CashLedger,
        vec![
            CriterionDef::severity("magnitude", "Monetary magnitude"),
            CriterionDef::severity("count", "Affected entry count"),
        ],
        upper_triangle(2, &[judgment(3)]),
        vec![
            CandidateDef::new("negative-cash-balance", "Cash balance runs negative")
                .with_finding(
                    "The cash balance runs negative in {source_label} during {period_label}",
                )
                .with_recommendation(
                    "Verify receipt postings; a physical cash balance cannot go negative in \
                     {period_label}",
                )
                .with_threshold(0.01)
                .with_score("magnitude", ScoreRule::metric("max_overdraft"))
                .with_score("count", ScoreRule::metric("negative_entry_count")),
            CandidateDef::new("uncategorized-entry", "Entries without an account assignment")
                .with_finding(
                    "Cash entries without an account assignment appear in {source_label} for \
                     {period_label}",
                )
                .with_recommendation(
                    "Assign accounts to the uncategorized cash entries in {period_label}",
                )
                .with_threshold(1.0)
                .with_score("count", ScoreRule::metric("uncategorized_count"))
                .with_score("magnitude", ScoreRule::metric("uncategorized_total")),
        ],
    )
    .with_thresholds(SeverityThresholds::new(0.75, 0.40))
}
