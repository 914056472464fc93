//! Slidekit Core Library
//!
//! Platform-agnostic model of the Slidekit slider: configuration, owned
//! state, command handling, derived geometry and the HTML element tree.
//! Renderers (egui, HTML) sit on top of this crate.

pub mod bounds;
pub mod config;
pub mod error;
pub mod geometry;
pub mod markup;
pub mod slider;
pub mod snap;
pub mod state;
pub mod story;

pub use bounds::Bounds;
pub use config::{Separation, Size, SliderConfig, Status, Variant};
pub use error::{SliderError, SliderResult};
pub use geometry::{format_value, FillInsets, HandlePosition, Marker, SliderGeometry, Tooltip};
pub use markup::{render, Element, Node};
pub use slider::{ChangeCallback, Slider, SliderCommand};
pub use snap::{coerce_raw, snap_value, step_markers};
pub use state::{Handle, PointerEvent, SliderState, SliderValue};
pub use story::{Story, StoryBook};
