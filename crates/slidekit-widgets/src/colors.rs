//! CSS colour parsing.

use egui::Color32;

/// Parse a CSS hex color (`#rgb` or `#rrggbb`) to Color32.
///
/// Anything unparseable falls back to mid gray.
pub fn parse_css_color(color: &str) -> Color32 {
    let fallback = Color32::from_rgb(128, 128, 128);
    let Some(hex) = color.trim().strip_prefix('#') else {
        return fallback;
    };
    if !hex.is_ascii() {
        return fallback;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    let rgb = match hex.len() {
        6 => (channel(&hex[0..2]), channel(&hex[2..4]), channel(&hex[4..6])),
        3 => (
            channel(&hex[0..1]).map(|v| v * 17),
            channel(&hex[1..2]).map(|v| v * 17),
            channel(&hex[2..3]).map(|v| v * 17),
        ),
        _ => return fallback,
    };
    match rgb {
        (Some(r), Some(g), Some(b)) => Color32::from_rgb(r, g, b),
        _ => fallback,
    }
}
