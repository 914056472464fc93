//! egui widgets for Slidekit with Tailwind-inspired styling.
//!
//! - **Slider**: the continuous / discrete / range slider
//! - **Buttons**: toggle buttons and option rows for showcase controls
//! - **Colors**: CSS colour parsing
//! - **Layout**: section labels, separators, panel frames

pub mod buttons;
pub mod colors;
pub mod layout;
pub mod slider;

pub use buttons::{option_row, ToggleButton};
pub use colors::parse_css_color;
pub use layout::{panel_frame, section_label, separator};
pub use slider::{SliderResponse, SliderWidget};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
    /// Track bar height as a fraction of the container height
    pub const TRACK_RATIO: f32 = 0.25;
    /// Default slider width when the layout gives no hint
    pub const SLIDER_WIDTH: f32 = 240.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
    /// Slider track (gray-200)
    pub const TRACK: Color32 = Color32::from_rgb(229, 231, 235);
    /// Handle fill
    pub const HANDLE: Color32 = Color32::WHITE;
    /// Tooltip bubble (gray-800)
    pub const TOOLTIP_BG: Color32 = Color32::from_rgb(31, 41, 55);
}
