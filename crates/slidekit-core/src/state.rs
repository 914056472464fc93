//! Mutable slider state.

use serde::{Deserialize, Serialize};

use crate::config::{SliderConfig, Status, Variant};
use crate::snap::{granularity, snap_value};

/// Current value of a slider.
///
/// This is also the payload delivered to change callbacks: a single number
/// for continuous/discrete sliders, an ordered pair for range sliders.
///
/// Serializes as a bare number or a `[start, end]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ValueRepr", into = "ValueRepr")]
pub enum SliderValue {
    Single(f64),
    Range { start: f64, end: f64 },
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ValueRepr {
    Single(f64),
    Pair(f64, f64),
}

impl From<SliderValue> for ValueRepr {
    fn from(value: SliderValue) -> Self {
        match value {
            SliderValue::Single(v) => ValueRepr::Single(v),
            SliderValue::Range { start, end } => ValueRepr::Pair(start, end),
        }
    }
}

impl From<ValueRepr> for SliderValue {
    fn from(repr: ValueRepr) -> Self {
        match repr {
            ValueRepr::Single(v) => SliderValue::Single(v),
            ValueRepr::Pair(start, end) => SliderValue::Range { start, end },
        }
    }
}

impl SliderValue {
    /// `(start, end)`; a single value yields the same number twice.
    pub fn as_pair(&self) -> (f64, f64) {
        match *self {
            SliderValue::Single(v) => (v, v),
            SliderValue::Range { start, end } => (start, end),
        }
    }

    /// Value of the given handle, if this value has one.
    pub fn get(&self, handle: Handle) -> Option<f64> {
        match (*self, handle) {
            (SliderValue::Single(v), Handle::Start) => Some(v),
            (SliderValue::Single(_), Handle::End) => None,
            (SliderValue::Range { start, .. }, Handle::Start) => Some(start),
            (SliderValue::Range { end, .. }, Handle::End) => Some(end),
        }
    }
}

/// Which handle a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    /// The only handle of a single-value slider, or the lower range handle.
    Start,
    /// The upper range handle.
    End,
}

/// Pointer transitions over the slider container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
    Down,
    Up,
}

impl Status {
    /// Status after a pointer transition.
    pub fn after(self, event: PointerEvent) -> Status {
        match event {
            PointerEvent::Enter | PointerEvent::Up => Status::Hover,
            PointerEvent::Down => Status::Active,
            PointerEvent::Leave => Status::Default,
        }
    }
}

/// State owned by one slider instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    pub value: SliderValue,
    pub status: Status,
}

impl SliderState {
    /// State derived from the configuration's clamped defaults.
    pub fn initial(config: &SliderConfig) -> Self {
        Self {
            value: initial_value(config, config.default_start, config.raw_default_end()),
            status: config.status,
        }
    }
}

/// Clamp default start/end into a valid value for the configured variant.
pub(crate) fn initial_value(config: &SliderConfig, start: f64, end: f64) -> SliderValue {
    let bounds = config.bounds();
    let step = granularity(config.variant, config.effective_step());
    let start = snap_value(start, &bounds, step);

    if config.variant != Variant::Range {
        return SliderValue::Single(start);
    }

    let sep = config.min_separation();
    let mut end = snap_value(end, &bounds, step).max(start);
    let mut start = start;

    if bounds.span() < sep {
        log::debug!(
            "Range {:?} is narrower than separation {}, spanning the full track",
            bounds,
            sep
        );
        return SliderValue::Range {
            start: bounds.min,
            end: bounds.max,
        };
    }
    if end - start < sep {
        end = (start + sep).min(bounds.max);
        if end - start < sep {
            start = (end - sep).max(bounds.min);
        }
    }
    SliderValue::Range { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Separation;

    #[test]
    fn test_status_transitions() {
        assert_eq!(Status::Default.after(PointerEvent::Enter), Status::Hover);
        assert_eq!(Status::Hover.after(PointerEvent::Down), Status::Active);
        assert_eq!(Status::Active.after(PointerEvent::Up), Status::Hover);
        assert_eq!(Status::Hover.after(PointerEvent::Leave), Status::Default);
        assert_eq!(Status::Active.after(PointerEvent::Leave), Status::Default);
    }

    #[test]
    fn test_initial_range_defaults() {
        let state = SliderState::initial(&SliderConfig::default());
        assert_eq!(state.value, SliderValue::Range { start: 0.0, end: 100.0 });
        assert_eq!(state.status, Status::Default);
    }

    #[test]
    fn test_initial_clamps_into_bounds() {
        let config = SliderConfig::default().with_defaults(-50.0, Some(500.0));
        assert_eq!(
            SliderState::initial(&config).value,
            SliderValue::Range { start: 0.0, end: 100.0 }
        );
    }

    #[test]
    fn test_initial_end_not_below_start() {
        let config = SliderConfig::default().with_defaults(60.0, Some(30.0));
        assert_eq!(
            SliderState::initial(&config).value,
            SliderValue::Range { start: 60.0, end: 61.0 }
        );
    }

    #[test]
    fn test_initial_separation_at_top_of_track() {
        let config = SliderConfig::default()
            .with_step(10.0)
            .with_separation(Separation::Step)
            .with_defaults(100.0, Some(100.0));
        assert_eq!(
            SliderState::initial(&config).value,
            SliderValue::Range { start: 90.0, end: 100.0 }
        );
    }

    #[test]
    fn test_initial_narrow_track() {
        let config = SliderConfig::default()
            .with_bounds(0.0, 5.0)
            .with_step(10.0)
            .with_separation(Separation::Step);
        assert_eq!(
            SliderState::initial(&config).value,
            SliderValue::Range { start: 0.0, end: 5.0 }
        );
    }

    #[test]
    fn test_initial_single_value() {
        let config = SliderConfig::new(Variant::Continuous).with_defaults(50.0, Some(75.0));
        assert_eq!(SliderState::initial(&config).value, SliderValue::Single(50.0));
    }

    #[test]
    fn test_initial_discrete_snaps() {
        let config = SliderConfig::new(Variant::Discrete).with_defaults(45.0, None);
        assert_eq!(SliderState::initial(&config).value, SliderValue::Single(40.0));
    }

    #[test]
    fn test_initial_status_from_config() {
        let config = SliderConfig::default().with_status(Status::Active);
        assert_eq!(SliderState::initial(&config).status, Status::Active);
    }

    #[test]
    fn test_value_accessors() {
        let value = SliderValue::Range { start: 10.0, end: 20.0 };
        assert_eq!(value.as_pair(), (10.0, 20.0));
        assert_eq!(value.get(Handle::End), Some(20.0));
        assert_eq!(SliderValue::Single(5.0).get(Handle::End), None);
        assert_eq!(SliderValue::Single(5.0).as_pair(), (5.0, 5.0));
    }

    #[test]
    fn test_value_serializes_like_callback_payload() {
        assert_eq!(serde_json::to_string(&SliderValue::Single(5.0)).unwrap(), "5.0");
        let range = SliderValue::Range { start: 1.0, end: 2.0 };
        assert_eq!(
            serde_json::to_string(&range).unwrap(),
            "[1.0,2.0]"
        );
        let parsed: SliderValue = serde_json::from_str("[20, 80]").unwrap();
        assert_eq!(parsed, SliderValue::Range { start: 20.0, end: 80.0 });
        let parsed: SliderValue = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, SliderValue::Single(7.0));
    }
}
