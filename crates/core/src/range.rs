//! Score ranges and score rounding
//!
//! A [`ScoreRange`] is the `[min, max]` interval a raw similarity in `[0, 1]`
//! is projected onto. Construction is the only fallible step: inverted or
//! non-finite bounds are rejected, so projection is total: it never
//! overflows, even for bounds near `f64::MAX`.

use crate::error::{Error, Result};
use serde::Serialize;

/// Number of decimal digits kept in every projected score
pub const SCORE_DECIMALS: i32 = 2;

/// Scaled values at or beyond this magnitude have no fractional digits left
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Round a score to [`SCORE_DECIMALS`] decimal digits
///
/// Rounds the exact binary value of `value`, with ties going to the even
/// digit. `2.675` is stored just below the tie, so it becomes `2.67`, while
/// `0.125` is an exact tie and becomes `0.12`. Values too large to carry
/// decimals are returned unchanged.
///
/// # Example
///
/// ```
/// use essayscore_core::round_score;
///
/// assert_eq!(round_score(42.456), 42.46);
/// assert_eq!(round_score(12.3048), 12.3);
/// assert_eq!(round_score(0.125), 0.12);
/// assert_eq!(round_score(0.375), 0.38);
/// ```
pub fn round_score(value: f64) -> f64 {
    let factor = 10f64.powi(SCORE_DECIMALS);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }

    let floor = scaled.floor();
    // Fused, so the sign of `value * factor - (floor + 0.5)` is exact.
    let offset = value.mul_add(factor, -(floor + 0.5));
    let rounded = if offset > 0.0 || (offset == 0.0 && floor % 2.0 != 0.0) {
        floor + 1.0
    } else {
        floor
    };
    rounded / factor
}

/// Validated `[min, max]` score interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreRange {
    min: f64,
    max: f64,
}

impl ScoreRange {
    /// Create a range, rejecting `min > max` and non-finite bounds
    ///
    /// A zero-width range (`min == max`) is allowed: every score is `min`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(ScoreRange { min, max })
    }

    /// Lower bound
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the interval
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Project a similarity onto the range and round it
    ///
    /// `similarity` is clamped to `[0, 1]` first, so the result always lies
    /// in `[min, max]`. Similarity 0 maps to `min` and 1 maps to `max`
    /// before rounding.
    pub fn project(&self, similarity: f64) -> f64 {
        let s = if similarity.is_nan() {
            0.0
        } else {
            similarity.clamp(0.0, 1.0)
        };
        // Interpolate instead of `min + s * span`: the span of a wide range
        // can overflow to infinity.
        let raw = if s == 0.0 {
            self.min
        } else if s == 1.0 {
            self.max
        } else {
            self.min * (1.0 - s) + self.max * s
        };
        round_score(raw).clamp(self.min, self.max)
    }
}

impl Default for ScoreRange {
    fn default() -> Self {
        ScoreRange {
            min: 0.0,
            max: 100.0,
        }
    }
}

impl TryFrom<(f64, f64)> for ScoreRange {
    type Error = Error;

    fn try_from((min, max): (f64, f64)) -> Result<Self> {
        ScoreRange::new(min, max)
    }
}
