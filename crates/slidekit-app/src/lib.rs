//! Slidekit showcase application
//!
//! A storybook-style shell around the slider: pick a preset, tweak its
//! args, and watch the widget and its change notifications.

mod app;
mod ui;

pub use app::{render_story, ShowcaseApp};
pub use ui::{render_central, render_controls, UiAction, UiState};
