//! Ledger Advisor - Decision Support Engine for Accounting Reports
//!
//! This crate ranks potential findings on accounting report pages using
//! fuzzy AHP criterion weighting and TOPSIS ranking, then formats them
//! into findings and recommendations for display.
//!
//! A report page gathers its aggregate metrics, runs the engine once per
//! render, and projects the result into contextualized text:
//!
//! ```
//! use ledger_advisor::advisory::{
//!     build_top_findings, contextualize_findings, TemplateContext,
//! };
//! use ledger_advisor::config::builtin;
//! use ledger_advisor::foundation::{Metrics, ReportKey};
//!
//! # fn main() -> Result<(), ledger_advisor::foundation::ConfigError> {
//! let engine = builtin::engine();
//! let metrics = Metrics::new()
//!     .with("total_accounts", 100.0)
//!     .with("negative_count", 20.0);
//! let result = engine.run_fuzzy_ahp_topsis(ReportKey::AccountBalance, &metrics)?;
//!
//! let config = engine.report_config(ReportKey::AccountBalance)?;
//! let findings = build_top_findings(config, &result, 3)?;
//! let context = TemplateContext::new()
//!     .with("period_label", "Jan 2024")
//!     .with("source_label", "account balance report");
//! let display = contextualize_findings(&findings, &context)?;
//! # assert!(!display.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod advisory;
pub mod analysis;
pub mod config;
pub mod foundation;
