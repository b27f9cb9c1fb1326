//! Triangular fuzzy number value object for pairwise comparison judgments.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A triangular fuzzy number `(l, m, u)` with `0 < l <= m <= u`.
///
/// Represents an uncertain comparison judgment as a range around a
/// most-likely point. Fuzzy triples live only inside weight derivation;
/// evaluation results expose crisp weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuzzyTriangular {
    l: f64,
    m: f64,
    u: f64,
}

impl FuzzyTriangular {
    /// Equal importance `(1, 1, 1)`, the diagonal of a comparison table.
    pub const EQUAL: Self = Self {
        l: 1.0,
        m: 1.0,
        u: 1.0,
    };

    /// Creates a fuzzy triple, returning an error unless `0 < l <= m <= u`.
    pub fn try_new(l: f64, m: f64, u: f64) -> Result<Self, ValidationError> {
        if l > 0.0 && l <= m && m <= u {
            Ok(Self { l, m, u })
        } else {
            Err(ValidationError::FuzzyOrder { l, m, u })
        }
    }

    /// Creates the triangular Saaty judgment for an intensity in `1..=9`.
    ///
    /// Intensity 1 is equal importance and stays crisp at `(1, 1, 1)`;
    /// stronger judgments spread one step to each side, clamped to the
    /// 1..9 scale: `(i - 1, i, min(9, i + 1))`.
    pub fn judgment(intensity: u8) -> Result<Self, ValidationError> {
        match intensity {
            1 => Ok(Self::EQUAL),
            2..=9 => {
                let m = f64::from(intensity);
                Ok(Self {
                    l: m - 1.0,
                    m,
                    u: (m + 1.0).min(9.0),
                })
            }
            _ => Err(ValidationError::JudgmentIntensity { actual: intensity }),
        }
    }

    /// Lower bound.
    pub fn lower(&self) -> f64 {
        self.l
    }

    /// Most-likely (modal) point.
    pub fn modal(&self) -> f64 {
        self.m
    }

    /// Upper bound.
    pub fn upper(&self) -> f64 {
        self.u
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self {
            l: self.l + other.l,
            m: self.m + other.m,
            u: self.u + other.u,
        }
    }

    /// Component-wise product.
    ///
    /// Ordering is preserved because the constructor guarantees positive
    /// components.
    pub fn multiply(&self, other: &Self) -> Self {
        Self {
            l: self.l * other.l,
            m: self.m * other.m,
            u: self.u * other.u,
        }
    }

    /// Fuzzy reciprocal `(1/u, 1/m, 1/l)`.
    pub fn reciprocal(&self) -> Self {
        Self {
            l: 1.0 / self.u,
            m: 1.0 / self.m,
            u: 1.0 / self.l,
        }
    }

    /// Component-wise power. The exponent must be non-negative so that
    /// ordering is preserved; weight derivation only uses `1/n` roots.
    pub fn powf(&self, exponent: f64) -> Self {
        debug_assert!(exponent >= 0.0, "negative exponents reverse ordering");
        Self {
            l: self.l.powf(exponent),
            m: self.m.powf(exponent),
            u: self.u.powf(exponent),
        }
    }

    /// Centroid defuzzification: `(l + m + u) / 3`.
    pub fn defuzzify(&self) -> f64 {
        (self.l + self.m + self.u) / 3.0
    }

    /// True when the triple satisfies the `0 < l <= m <= u` invariant.
    ///
    /// Deserialized tables bypass `try_new`, so registry validation
    /// re-checks every entry with this predicate.
    pub fn is_ordered(&self) -> bool {
        self.l > 0.0 && self.l <= self.m && self.m <= self.u
    }

    /// True when every component of `other` is within `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.l - other.l).abs() <= tolerance
            && (self.m - other.m).abs() <= tolerance
            && (self.u - other.u).abs() <= tolerance
    }
}

impl fmt::Display for FuzzyTriangular {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.l, self.m, self.u)
    }
}
