//! Foundation module - Shared value objects and error types.
//!
//! Contains the vocabulary of the advisory engine: fuzzy comparison
//! judgments, metric maps, report keys, severity levels, and the error
//! taxonomy.

mod errors;
mod fuzzy;
mod metrics;
mod report_key;
mod severity;

pub use errors::{ConfigError, ValidationError};
pub use fuzzy::FuzzyTriangular;
pub use metrics::Metrics;
pub use report_key::ReportKey;
pub use severity::{LevelMeta, Severity};
