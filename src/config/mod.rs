//! Configuration Module - Immutable per-report evaluation policy.
//!
//! Everything here is loaded once and treated as read-only for the life
//! of the process: criterion definitions, pairwise comparison judgments,
//! candidate catalogs with their scoring rules and message templates, and
//! severity thresholds. The registry is injected into the engine so tests
//! can evaluate against synthetic policies.
//!
//! # Components
//!
//! - `CriterionDef` - One decision dimension with its direction flag
//! - `ComparisonTable` - Pairwise fuzzy importance judgments
//! - `CandidateDef` / `ScoreRule` - Candidate catalog and metric scoring
//! - `SeverityThresholds` - Closeness cutoffs for finding levels
//! - `ReportConfig` / `EngineRegistry` - Per-report bundle and lookup
//! - `builtin` - The authored catalog for the shipped report families

mod candidate;
mod comparison;
mod criteria;
mod registry;
mod report;
mod thresholds;

pub mod builtin;

pub use candidate::{CandidateDef, CriterionScore, ScoreRule};
pub use comparison::ComparisonTable;
pub use criteria::CriterionDef;
pub use registry::EngineRegistry;
pub use report::ReportConfig;
pub use thresholds::{
    SeverityThresholds, DEFAULT_CRITICAL_CLOSENESS, DEFAULT_WARNING_CLOSENESS,
};
