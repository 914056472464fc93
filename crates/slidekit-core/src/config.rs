//! Caller-supplied slider configuration.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::SliderError;

/// Presentation variant; determines handle count and snapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Variant {
    /// One handle, integer granularity.
    #[serde(alias = "Continous")]
    Continuous,
    /// One handle snapping to multiples of `step`, with markers.
    Discrete,
    /// Two handles bounding a sub-range.
    #[default]
    Range,
}

impl Variant {
    /// All variants, in display order.
    pub const ALL: [Variant; 3] = [Variant::Continuous, Variant::Discrete, Variant::Range];

    /// Number of handles drawn for this variant.
    pub fn handle_count(self) -> usize {
        match self {
            Variant::Range => 2,
            Variant::Continuous | Variant::Discrete => 1,
        }
    }

    pub fn is_range(self) -> bool {
        self == Variant::Range
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Variant::Continuous => "Continuous",
            Variant::Discrete => "Discrete",
            Variant::Range => "Range",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Variant {
    type Err = SliderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            // "continous" is the spelling older callers still send
            "continuous" | "continous" => Ok(Variant::Continuous),
            "discrete" => Ok(Variant::Discrete),
            "range" => Ok(Variant::Range),
            _ => Err(SliderError::InvalidVariant(s.to_string())),
        }
    }
}

/// Size preset. Serialized as its pixel height (24 or 32).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Size {
    #[default]
    Small,
    Large,
}

impl Size {
    pub const ALL: [Size; 2] = [Size::Small, Size::Large];

    pub fn label(self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Large => "Large",
        }
    }

    /// Container height in px.
    pub fn height(self) -> f32 {
        match self {
            Size::Small => 24.0,
            Size::Large => 32.0,
        }
    }

    /// Handle diameter in px.
    pub fn handle_diameter(self) -> f32 {
        match self {
            Size::Small => 16.0,
            Size::Large => 24.0,
        }
    }

    /// Step marker diameter in px (0.6rem / 0.8rem at 16px root).
    pub fn marker_diameter(self) -> f32 {
        match self {
            Size::Small => 9.6,
            Size::Large => 12.8,
        }
    }

    /// Vertical nudge applied to step markers, in px.
    pub fn marker_margin_top(self) -> f32 {
        match self {
            Size::Small => -2.0,
            Size::Large => -3.0,
        }
    }

    /// Utility class for the container height.
    pub fn height_class(self) -> &'static str {
        match self {
            Size::Small => "h-6",
            Size::Large => "h-8",
        }
    }

    /// Utility classes for the handle size.
    pub fn thumb_class(self) -> &'static str {
        match self {
            Size::Small => "w-4 h-4",
            Size::Large => "w-6 h-6",
        }
    }

    /// Marker diameter as a CSS length.
    pub fn marker_css(self) -> &'static str {
        match self {
            Size::Small => "0.6rem",
            Size::Large => "0.8rem",
        }
    }
}

impl From<Size> for u32 {
    fn from(size: Size) -> Self {
        match size {
            Size::Small => 24,
            Size::Large => 32,
        }
    }
}

impl TryFrom<u32> for Size {
    type Error = SliderError;

    fn try_from(px: u32) -> Result<Self, Self::Error> {
        match px {
            24 => Ok(Size::Small),
            32 => Ok(Size::Large),
            other => Err(SliderError::InvalidSize(other.to_string())),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u32::from(*self))
    }
}

impl FromStr for Size {
    type Err = SliderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "24" => Ok(Size::Small),
            "large" | "32" => Ok(Size::Large),
            _ => Err(SliderError::InvalidSize(s.to_string())),
        }
    }
}

/// Pointer interaction state; drives styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Default,
    Hover,
    Active,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Default, Status::Hover, Status::Active];

    /// Extra class applied to the variant container.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Status::Default => None,
            Status::Hover => Some("slider-hover"),
            Status::Active => Some("slider-active"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Default => "default",
            Status::Hover => "hover",
            Status::Active => "active",
        }
    }
}

impl FromStr for Status {
    type Err = SliderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Status::Default),
            "hover" => Ok(Status::Hover),
            "active" => Ok(Status::Active),
            _ => Err(SliderError::InvalidStatus(s.to_string())),
        }
    }
}

/// Minimum distance kept between the two handles of a range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separation {
    /// Handles stay at least 1 apart.
    #[default]
    Unit,
    /// Handles stay at least one `step` apart.
    Step,
}

impl Separation {
    pub const ALL: [Separation; 2] = [Separation::Unit, Separation::Step];

    pub fn label(self) -> &'static str {
        match self {
            Separation::Unit => "unit",
            Separation::Step => "step",
        }
    }
}

impl FromStr for Separation {
    type Err = SliderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unit" | "1" => Ok(Separation::Unit),
            "step" => Ok(Separation::Step),
            _ => Err(SliderError::InvalidSeparation(s.to_string())),
        }
    }
}

/// Immutable configuration of one slider.
///
/// Field names deserialize from the camelCase prop names used by stories
/// (`defaultStart`, `className`, ...). Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SliderConfig {
    /// Raw lower bound (may exceed `max`).
    pub min: f64,
    /// Raw upper bound (may be below `min`).
    pub max: f64,
    /// Snap increment for Discrete, separation unit for Range when
    /// `separation` is [`Separation::Step`].
    pub step: f64,
    pub default_start: f64,
    /// Initial end value; `None` means the effective max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_end: Option<f64>,
    pub variant: Variant,
    pub size: Size,
    pub tooltip: bool,
    pub disabled: bool,
    /// Initial interaction status.
    pub status: Status,
    pub separation: Separation,
    /// Extra classes appended to the outer container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Inline style declarations passed through to the outer container.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 20.0,
            default_start: 0.0,
            default_end: None,
            variant: Variant::default(),
            size: Size::default(),
            tooltip: false,
            disabled: false,
            status: Status::default(),
            separation: Separation::default(),
            class_name: None,
            style: BTreeMap::new(),
        }
    }
}

impl SliderConfig {
    /// Create a config for the given variant with default everything else.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    /// Effective (ordered) bounds.
    pub fn bounds(&self) -> Bounds {
        Bounds::normalized(self.min, self.max)
    }

    /// Step coerced to a usable positive increment.
    pub fn effective_step(&self) -> f64 {
        if self.step.is_finite() && self.step > 0.0 {
            self.step
        } else {
            1.0
        }
    }

    /// Whether `other` seeds the value the same way: bounds, step,
    /// separation, defaults and variant all match.
    pub fn same_value_domain(&self, other: &SliderConfig) -> bool {
        self.min == other.min
            && self.max == other.max
            && self.step == other.step
            && self.separation == other.separation
            && self.default_start == other.default_start
            && self.default_end == other.default_end
            && self.variant == other.variant
    }

    /// Minimum distance between range handles.
    pub fn min_separation(&self) -> f64 {
        match self.separation {
            Separation::Unit => 1.0,
            Separation::Step => self.effective_step(),
        }
    }

    /// Initial end value before clamping.
    pub fn raw_default_end(&self) -> f64 {
        self.default_end.unwrap_or_else(|| self.bounds().max)
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set the initial value(s). `end` is ignored by single-value variants.
    pub fn with_defaults(mut self, start: f64, end: Option<f64>) -> Self {
        self.default_start = start;
        self.default_end = end;
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_tooltip(mut self, tooltip: bool) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_separation(mut self, separation: Separation) -> Self {
        self.separation = separation;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Add one inline style declaration.
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }
}
