//! Effective value bounds of a slider.

use serde::{Deserialize, Serialize};

/// Ordered `[min, max]` interval a slider's handles move along.
///
/// Always satisfies `min <= max`; construct through [`Bounds::normalized`]
/// so callers may pass a reversed range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
        }
    }
}

impl Bounds {
    /// Build bounds from two raw endpoints in any order.
    pub fn normalized(a: f64, b: f64) -> Self {
        // NaN would poison every comparison downstream
        let a = if a.is_nan() { 0.0 } else { a };
        let b = if b.is_nan() { 0.0 } else { b };
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether the interval has no usable width.
    pub fn is_degenerate(&self) -> bool {
        let span = self.span();
        !span.is_finite() || span <= 0.0
    }

    /// Clamp a value into the interval.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.max(self.min).min(self.max)
    }

    /// Check if a value lies inside the interval (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Position of `value` along the track as a percentage (0-100).
    ///
    /// A zero-width interval maps every value to 0%.
    pub fn percent(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        (value - self.min) / self.span() * 100.0
    }

    /// Inverse of [`Bounds::percent`] for a fraction in `0.0..=1.0`.
    pub fn value_at(&self, fraction: f64) -> f64 {
        if self.is_degenerate() {
            return self.min;
        }
        self.min + fraction.clamp(0.0, 1.0) * self.span()
    }
}
