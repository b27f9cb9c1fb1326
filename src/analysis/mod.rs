//! Analysis Module - Weight derivation, matrix construction, and ranking.
//!
//! This module contains the numeric core of the advisory engine. All
//! functions are pure computations over configuration and metrics; the
//! only state is the engine's memoized weight table, built once at
//! construction.
//!
//! # Components
//!
//! - `AhpWeighting` - Fuzzy AHP criterion weights with a consistency check
//! - `DecisionMatrix` - Candidate-by-criterion scores with relevance filtering
//! - `TopsisRanker` - Closeness-to-severe-pole ranking of matrix rows
//! - `DecisionEngine` - Orchestration: one validated call per report render

mod ahp;
mod engine;
mod matrix;
mod topsis;

// Re-export all public types
pub use ahp::{AhpWeighting, CriterionWeight, WeightVector, CONSISTENCY_RATIO_LIMIT};
pub use engine::{DecisionEngine, EvaluationResult, RankedFinding};
pub use matrix::DecisionMatrix;
pub use topsis::{ScoredCandidate, TopsisRanker};
