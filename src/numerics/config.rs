// src/numerics/config.rs
// Numeric tolerances used by inversion and approximate comparison.

use serde::{Deserialize, Serialize};

/// Tolerance settings for operations that have to judge a floating point
/// value as "zero".
///
/// A matrix is treated as singular when its determinant is not finite, is
/// exactly zero, or has a magnitude below `singularity_epsilon`. The same
/// policy applies to every square size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Determinants with a magnitude strictly below this value are singular.
    pub singularity_epsilon: f64,

    /// Maximum per-element difference accepted by approximate comparisons.
    pub comparison_epsilon: f64,
}

impl Default for Tolerance {
    /// Double precision machine epsilon for singularity and `1e-9` for
    /// element comparison.
    fn default() -> Self {
        Self {
            singularity_epsilon: f64::EPSILON,
            comparison_epsilon: 1e-9,
        }
    }
}

impl Tolerance {
    pub fn new(singularity_epsilon: f64, comparison_epsilon: f64) -> Self {
        Self {
            singularity_epsilon,
            comparison_epsilon,
        }
    }

    /// Only an exactly zero determinant is singular.
    pub fn exact() -> Self {
        Self {
            singularity_epsilon: 0.0,
            comparison_epsilon: 0.0,
        }
    }

    /// Thresholds suited to matrices holding `f32` data.
    pub fn single_precision() -> Self {
        Self {
            singularity_epsilon: f32::EPSILON as f64,
            comparison_epsilon: 1e-5,
        }
    }

    pub fn with_singularity_epsilon(mut self, epsilon: f64) -> Self {
        self.singularity_epsilon = epsilon;
        self
    }

    pub fn with_comparison_epsilon(mut self, epsilon: f64) -> Self {
        self.comparison_epsilon = epsilon;
        self
    }

    pub fn is_singular(&self, determinant: f64) -> bool {
        !determinant.is_finite()
            || determinant == 0.0
            || determinant.abs() < self.singularity_epsilon
    }

    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.comparison_epsilon
    }
}
