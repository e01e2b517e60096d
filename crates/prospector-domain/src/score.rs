//! Quality score module
//!
//! One canonical scale is used everywhere: [0, 100]. Rubric totals expressed
//! on other scales (e.g. `12/15`) are rescaled onto it by [`QualityScore::from_ratio`].

use std::fmt;

/// Lowest representable score
pub const MIN_SCORE: f64 = 0.0;

/// Highest representable score
pub const MAX_SCORE: f64 = 100.0;

/// Mid-range score used when nothing better is known
pub const DEFAULT_SCORE: f64 = 50.0;

/// Plausibility score for a prospect, always within [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct QualityScore(f64);

impl QualityScore {
    /// Create a score if the value is finite and within [0, 100]
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a score, clamping finite values into range
    ///
    /// Non-finite input falls back to [`DEFAULT_SCORE`].
    pub fn clamped(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_SCORE, MAX_SCORE))
        } else {
            Self(DEFAULT_SCORE)
        }
    }

    /// Rescale `total` out of `max` onto [0, 100]
    ///
    /// Returns `None` when `max` is not positive or either side is not finite.
    pub fn from_ratio(total: f64, max: f64) -> Option<Self> {
        if !total.is_finite() || !max.is_finite() || max <= 0.0 {
            return None;
        }
        Some(Self::clamped(total / max * MAX_SCORE))
    }

    /// Get the raw value
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for QualityScore {
    fn default() -> Self {
        Self(DEFAULT_SCORE)
    }
}

impl fmt::Display for QualityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
