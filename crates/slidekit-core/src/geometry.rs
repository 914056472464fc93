//! Positions derived from configuration and state.
//!
//! Nothing here is stored; a [`SliderGeometry`] is recomputed for every
//! render from the current value(s) and the effective bounds. All offsets
//! are percentages of the track width.

use crate::config::{SliderConfig, Variant};
use crate::snap::step_markers;
use crate::state::{Handle, SliderState, SliderValue};

/// Vertical offset of tooltips above the track, in px.
pub const TOOLTIP_TOP: f32 = -35.0;

/// Opacity applied to the track of a disabled slider.
pub const DISABLED_OPACITY: f32 = 0.5;

/// Highlighted part of the track as left/right insets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillInsets {
    pub left: f64,
    pub right: f64,
}

impl FillInsets {
    /// Width of the fill in percent.
    pub fn width(&self) -> f64 {
        (100.0 - self.left - self.right).max(0.0)
    }
}

/// A handle's position on the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlePosition {
    pub handle: Handle,
    pub value: f64,
    pub offset: f64,
}

/// Floating label showing a handle's value.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub handle: Handle,
    pub text: String,
    pub left: f64,
    pub top: f32,
}

/// A discrete step marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub value: f64,
    pub offset: f64,
}

/// Everything needed to draw a slider in its current state.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderGeometry {
    pub fill: FillInsets,
    pub handles: Vec<HandlePosition>,
    pub tooltips: Vec<Tooltip>,
    pub markers: Vec<Marker>,
    pub opacity: f32,
}

impl SliderGeometry {
    pub fn compute(config: &SliderConfig, state: &SliderState) -> Self {
        let bounds = config.bounds();

        let handles: Vec<HandlePosition> = match state.value {
            SliderValue::Single(value) => vec![HandlePosition {
                handle: Handle::Start,
                value,
                offset: bounds.percent(value),
            }],
            SliderValue::Range { start, end } => vec![
                HandlePosition {
                    handle: Handle::Start,
                    value: start,
                    offset: bounds.percent(start),
                },
                HandlePosition {
                    handle: Handle::End,
                    value: end,
                    offset: bounds.percent(end),
                },
            ],
        };

        let fill = match state.value {
            SliderValue::Single(value) => FillInsets {
                left: 0.0,
                right: 100.0 - bounds.percent(value),
            },
            SliderValue::Range { start, end } => FillInsets {
                left: bounds.percent(start),
                right: 100.0 - bounds.percent(end),
            },
        };

        let tooltips = if config.tooltip {
            handles
                .iter()
                .map(|h| Tooltip {
                    handle: h.handle,
                    text: format_value(h.value),
                    left: h.offset,
                    top: TOOLTIP_TOP,
                })
                .collect()
        } else {
            Vec::new()
        };

        let markers = if config.variant == Variant::Discrete {
            step_markers(&bounds, config.effective_step())
                .into_iter()
                .map(|value| Marker {
                    value,
                    offset: bounds.percent(value),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            fill,
            handles,
            tooltips,
            markers,
            opacity: if config.disabled { DISABLED_OPACITY } else { 1.0 },
        }
    }

    /// Offset of a handle, if present.
    pub fn handle_offset(&self, handle: Handle) -> Option<f64> {
        self.handles
            .iter()
            .find(|h| h.handle == handle)
            .map(|h| h.offset)
    }
}

/// Format a value for display; whole numbers print without a fraction.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Format a percentage as a CSS length.
pub fn format_percent(percent: f64) -> String {
    format!("{}%", format_value(percent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::{Slider, SliderCommand};

    #[test]
    fn test_continuous_fill() {
        let config = SliderConfig::new(Variant::Continuous).with_defaults(50.0, None);
        let geometry = Slider::new(config).geometry();
        assert_eq!(geometry.fill, FillInsets { left: 0.0, right: 50.0 });
        assert_eq!(geometry.fill.width(), 50.0);
        assert!(geometry.markers.is_empty());
    }

    #[test]
    fn test_range_fill() {
        let config = SliderConfig::default().with_defaults(20.0, Some(80.0));
        let geometry = Slider::new(config).geometry();
        assert_eq!(geometry.fill, FillInsets { left: 20.0, right: 20.0 });
        assert_eq!(geometry.handle_offset(Handle::Start), Some(20.0));
        assert_eq!(geometry.handle_offset(Handle::End), Some(80.0));
    }

    #[test]
    fn test_range_fill_offset_bounds() {
        let config = SliderConfig::default()
            .with_bounds(50.0, 250.0)
            .with_defaults(100.0, Some(200.0));
        let geometry = Slider::new(config).geometry();
        assert_eq!(geometry.fill, FillInsets { left: 25.0, right: 25.0 });
    }

    #[test]
    fn test_discrete_markers() {
        let geometry = Slider::new(SliderConfig::new(Variant::Discrete)).geometry();
        let values: Vec<f64> = geometry.markers.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        let offsets: Vec<f64> = geometry.markers.iter().map(|m| m.offset).collect();
        assert_eq!(offsets, values);
    }

    #[test]
    fn test_tooltips_follow_handles() {
        let config = SliderConfig::default()
            .with_tooltip(true)
            .with_defaults(25.0, Some(75.0));
        let mut slider = Slider::new(config);
        slider.apply(SliderCommand::Drag {
            handle: Handle::End,
            raw: 60.0,
        });
        let geometry = slider.geometry();
        assert_eq!(geometry.tooltips.len(), 2);
        assert_eq!(geometry.tooltips[0].text, "25");
        assert_eq!(geometry.tooltips[0].left, 25.0);
        assert_eq!(geometry.tooltips[1].text, "60");
        assert_eq!(geometry.tooltips[1].left, 60.0);
        assert_eq!(geometry.tooltips[1].top, TOOLTIP_TOP);
    }

    #[test]
    fn test_no_tooltips_by_default() {
        assert!(Slider::default().geometry().tooltips.is_empty());
    }

    #[test]
    fn test_zero_width_track() {
        let config = SliderConfig::new(Variant::Continuous).with_bounds(10.0, 10.0);
        let geometry = Slider::new(config).geometry();
        assert_eq!(geometry.fill, FillInsets { left: 0.0, right: 100.0 });
        assert_eq!(geometry.handle_offset(Handle::Start), Some(0.0));
        assert!(geometry.fill.left.is_finite() && geometry.fill.right.is_finite());
    }

    #[test]
    fn test_disabled_opacity() {
        let geometry = Slider::new(SliderConfig::default().with_disabled(true)).geometry();
        assert_eq!(geometry.opacity, DISABLED_OPACITY);
        assert_eq!(Slider::default().geometry().opacity, 1.0);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(40.0), "40");
        assert_eq!(format_value(-3.0), "-3");
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_percent(33.5), "33.5%");
        assert_eq!(format_percent(0.0), "0%");
    }
}
