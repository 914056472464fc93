//! Step snapping and marker generation.
//!
//! Values snap the way a native range input sanitizes them: clamp into the
//! bounds, round to the nearest `min + k * step` (ties go up), and never
//! exceed the last step position that fits below `max`.

use crate::bounds::Bounds;
use crate::config::Variant;

/// Upper limit on generated step markers.
pub const MAX_MARKERS: usize = 1000;

/// Tolerance used when deciding whether `max` sits exactly on a step.
const STEP_EPSILON: f64 = 1e-9;

/// Most fraction digits kept when cleaning up step arithmetic.
const MAX_DECIMALS: usize = 15;

/// Fraction digits in the shortest decimal form of `value`.
fn decimals(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let text = value.to_string();
    let digits = text
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len().min(MAX_DECIMALS));
    digits as i32
}

/// Decimal precision of the grid `min + k * step`.
pub fn step_decimals(bounds: &Bounds, step: f64) -> i32 {
    decimals(step).max(decimals(bounds.min))
}

/// Round to `decimals` fraction digits, dropping float noise such as
/// `0.30000000000000004`.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    // beyond 2^53 the scaled value has no fraction left to clean up
    if !scaled.is_finite() || scaled.abs() >= 9.0e15 {
        return value;
    }
    scaled.round() / factor
}

/// Snap granularity used for a variant.
///
/// Only the discrete variant snaps to `step`; continuous and range inputs
/// move in whole units.
pub fn granularity(variant: Variant, step: f64) -> f64 {
    match variant {
        Variant::Discrete => step,
        Variant::Continuous | Variant::Range => 1.0,
    }
}

/// Number of whole steps between `bounds.min` and `bounds.max`.
fn whole_steps(bounds: &Bounds, step: f64) -> f64 {
    if bounds.is_degenerate() || !(step > 0.0) {
        return 0.0;
    }
    (bounds.span() / step + STEP_EPSILON).floor()
}

/// The greatest step position `min + k * step` that is `<= max`.
pub fn effective_max(bounds: &Bounds, step: f64) -> f64 {
    let last = bounds.min + whole_steps(bounds, step) * step;
    round_to(last, step_decimals(bounds, step)).min(bounds.max)
}

/// Sanitize a raw value for an input with the given granularity.
pub fn snap_value(raw: f64, bounds: &Bounds, step: f64) -> f64 {
    let clamped = bounds.clamp(raw);
    if bounds.is_degenerate() || !(step > 0.0) {
        return clamped;
    }
    let k = ((clamped - bounds.min) / step + 0.5).floor();
    let snapped = round_to(bounds.min + k * step, step_decimals(bounds, step));
    snapped.min(effective_max(bounds, step)).max(bounds.min)
}

/// Step marker values: `min, min + step, ...` up to the last value `<= max`.
pub fn step_markers(bounds: &Bounds, step: f64) -> Vec<f64> {
    let count = (whole_steps(bounds, step) as usize).saturating_add(1);
    if count > MAX_MARKERS {
        log::warn!(
            "Step {} yields {} markers over {:?}, capping at {}",
            step,
            count,
            bounds,
            MAX_MARKERS
        );
    }
    let precision = step_decimals(bounds, step);
    (0..count.min(MAX_MARKERS))
        .map(|i| round_to(bounds.min + i as f64 * step, precision))
        .collect()
}

/// Coerce raw input text to a number.
///
/// Blank text counts as zero; anything that is not a finite decimal number
/// yields `None`.
pub fn coerce_raw(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
