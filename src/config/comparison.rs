//! Pairwise fuzzy comparison tables.
//!
//! A comparison table records expert judgments of relative criterion
//! importance. Entry `(i, j)` answers "how much more important is
//! criterion `i` than criterion `j`", so the diagonal is equal importance
//! and the lower triangle mirrors the upper one reciprocally.

use serde::{Deserialize, Serialize};

use crate::foundation::{ConfigError, FuzzyTriangular, ValidationError};

/// Tolerance for the diagonal and reciprocity checks.
///
/// Authored tables are exact; the slack only absorbs floating-point noise
/// in tables that were serialized and read back.
const RECIPROCITY_TOLERANCE: f64 = 1e-9;

/// Square table of pairwise fuzzy comparison judgments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonTable {
    entries: Vec<Vec<FuzzyTriangular>>,
}

impl ComparisonTable {
    /// Wraps raw rows without checking them.
    ///
    /// Structural invariants are enforced by [`ComparisonTable::validate`]
    /// when the owning report configuration is registered.
    pub fn from_rows(entries: Vec<Vec<FuzzyTriangular>>) -> Self {
        ComparisonTable { entries }
    }

    /// Builds a full table from the judgments above the diagonal.
    ///
    /// `upper` lists entries `(i, j)` with `i < j` in row-major order, so
    /// an `n`-criteria table takes `n * (n - 1) / 2` judgments. The
    /// diagonal is filled with equal importance and the lower triangle
    /// with reciprocals, which makes reciprocity hold by construction.
    pub fn from_upper_triangle(
        n: usize,
        upper: &[FuzzyTriangular],
    ) -> Result<Self, ValidationError> {
        let expected = n * n.saturating_sub(1) / 2;
        if upper.len() != expected {
            return Err(ValidationError::UpperTriangleLen {
                n,
                expected,
                actual: upper.len(),
            });
        }

        let mut entries = vec![vec![FuzzyTriangular::EQUAL; n]; n];
        let mut next = upper.iter();
        for i in 0..n {
            for j in (i + 1)..n {
                // The length check above guarantees the iterator holds
                // exactly enough judgments.
                let judgment = *next.next().ok_or(ValidationError::UpperTriangleLen {
                    n,
                    expected,
                    actual: upper.len(),
                })?;
                entries[i][j] = judgment;
                entries[j][i] = judgment.reciprocal();
            }
        }
        Ok(ComparisonTable { entries })
    }

    /// Number of criteria the table compares.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Entry at `(row, col)`. Indices must be within `size()`.
    pub fn entry(&self, row: usize, col: usize) -> FuzzyTriangular {
        self.entries[row][col]
    }

    /// Checks squareness, entry ordering, the diagonal, and reciprocity.
    ///
    /// # Edge Cases
    /// - A `1x1` table is valid and needs no reciprocity check.
    /// - Entries deserialized from stored configuration may violate the
    ///   fuzzy ordering invariant; they are re-checked here.
    pub fn validate(&self, report: &str, expected: usize) -> Result<(), ConfigError> {
        let rows = self.entries.len();
        let cols = self.entries.iter().map(Vec::len).max().unwrap_or(0);
        let ragged = self.entries.iter().any(|row| row.len() != rows);
        if rows != expected || ragged || (rows > 0 && cols != expected) {
            return Err(ConfigError::TableShape {
                report: report.to_string(),
                rows,
                cols,
                expected,
            });
        }

        for (i, row) in self.entries.iter().enumerate() {
            for (j, entry) in row.iter().enumerate() {
                if !entry.is_ordered() {
                    return Err(ConfigError::MalformedEntry {
                        report: report.to_string(),
                        row: i,
                        col: j,
                    });
                }
            }
        }

        for i in 0..rows {
            if !self.entries[i][i].approx_eq(&FuzzyTriangular::EQUAL, RECIPROCITY_TOLERANCE) {
                return Err(ConfigError::BrokenDiagonal {
                    report: report.to_string(),
                    index: i,
                });
            }
            for j in (i + 1)..rows {
                let mirrored = self.entries[j][i].reciprocal();
                if !self.entries[i][j].approx_eq(&mirrored, RECIPROCITY_TOLERANCE) {
                    return Err(ConfigError::BrokenReciprocity {
                        report: report.to_string(),
                        row: i,
                        col: j,
                    });
                }
            }
        }
        Ok(())
    }
}
