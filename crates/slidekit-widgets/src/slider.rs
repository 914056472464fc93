//! egui rendering of a [`Slider`].
//!
//! The widget is a thin view: it turns egui pointer/keyboard input into
//! [`SliderCommand`]s and paints the [`SliderGeometry`] the core computes.

use egui::{
    pos2, vec2, Align2, Color32, CornerRadius, CursorIcon, FontId, Id, Key, Pos2, Rect, Response,
    Sense, Stroke, Ui,
};
use slidekit_core::geometry::SliderGeometry;
use slidekit_core::markup::MARKER_COLOR;
use slidekit_core::{Handle, PointerEvent, Slider, SliderCommand, SliderValue, Status};

use crate::colors::parse_css_color;
use crate::{sizing, theme};

/// Result of showing a slider.
pub struct SliderResponse {
    pub response: Response,
    /// New value if the user changed it this frame.
    pub changed: Option<SliderValue>,
}

/// Horizontal mapping between track percentages and screen x.
///
/// Handles are kept fully inside the allocated rect, so the usable track
/// is inset by the handle radius on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMetrics {
    pub left: f32,
    pub width: f32,
    pub inset: f32,
}

impl TrackMetrics {
    pub fn new(left: f32, width: f32, inset: f32) -> Self {
        Self { left, width, inset }
    }

    fn usable(&self) -> f32 {
        (self.width - 2.0 * self.inset).max(0.0)
    }

    /// Screen x of a percentage offset.
    pub fn x_at(&self, percent: f64) -> f32 {
        self.left + self.inset + (percent as f32 / 100.0) * self.usable()
    }

    /// Fraction (0..=1) of the track under screen x.
    pub fn fraction_at(&self, x: f32) -> f64 {
        let usable = self.usable();
        if usable <= 0.0 {
            return 0.0;
        }
        f64::from(((x - self.left - self.inset) / usable).clamp(0.0, 1.0))
    }
}

/// Pointer events that move the status from `from` to `to`.
pub fn pointer_transitions(from: Status, to: Status) -> Vec<PointerEvent> {
    match (from, to) {
        (Status::Default, Status::Hover) => vec![PointerEvent::Enter],
        (Status::Default, Status::Active) => vec![PointerEvent::Enter, PointerEvent::Down],
        (Status::Hover, Status::Active) => vec![PointerEvent::Down],
        (Status::Active, Status::Hover) => vec![PointerEvent::Up],
        (Status::Hover, Status::Default) | (Status::Active, Status::Default) => {
            vec![PointerEvent::Leave]
        }
        _ => Vec::new(),
    }
}

/// Handle closest to a track percentage.
///
/// When both handles sit on the same spot, the side of the pointer decides
/// so a collapsed range can still be opened in either direction.
pub fn nearest_handle(geometry: &SliderGeometry, percent: f64) -> Handle {
    match (
        geometry.handle_offset(Handle::Start),
        geometry.handle_offset(Handle::End),
    ) {
        (Some(start), Some(end)) => {
            let to_start = (percent - start).abs();
            let to_end = (percent - end).abs();
            if to_end < to_start || (to_end == to_start && percent > end) {
                Handle::End
            } else {
                Handle::Start
            }
        }
        _ => Handle::Start,
    }
}

/// A slider widget bound to a [`Slider`] model.
pub struct SliderWidget<'a> {
    slider: &'a mut Slider,
    width: Option<f32>,
}

impl<'a> SliderWidget<'a> {
    pub fn new(slider: &'a mut Slider) -> Self {
        Self {
            slider,
            width: None,
        }
    }

    /// Set a fixed width (defaults to the available width).
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Show the slider and apply any interaction to the model.
    pub fn show(mut self, ui: &mut Ui) -> SliderResponse {
        let config = self.slider.config().clone();
        let size = config.size;
        let tooltip_band = if config.tooltip {
            -slidekit_core::geometry::TOOLTIP_TOP
        } else {
            0.0
        };

        let width = self
            .width
            .unwrap_or_else(|| ui.available_width())
            .max(size.handle_diameter() * 2.0);
        let width = if width.is_finite() { width } else { sizing::SLIDER_WIDTH };

        let sense = if config.disabled {
            Sense::hover()
        } else {
            Sense::click_and_drag()
        };
        let (rect, mut response) =
            ui.allocate_exact_size(vec2(width, size.height() + tooltip_band), sense);
        let track_rect = Rect::from_min_max(pos2(rect.left(), rect.top() + tooltip_band), rect.max);
        let metrics = TrackMetrics::new(rect.left(), width, size.handle_diameter() / 2.0);

        self.sync_status(ui, &response);
        let changed = self.handle_input(ui, &response, &metrics);
        if changed.is_some() {
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            paint(ui, self.slider, track_rect, &metrics);
        }

        let cursor = if config.disabled {
            CursorIcon::NotAllowed
        } else if response.dragged() {
            CursorIcon::Grabbing
        } else {
            CursorIcon::Grab
        };
        let response = response.on_hover_cursor(cursor);

        SliderResponse { response, changed }
    }

    /// Forward hover/press transitions since the previous frame.
    fn sync_status(&mut self, ui: &Ui, response: &Response) {
        let observed = if response.is_pointer_button_down_on() || response.dragged() {
            Status::Active
        } else if response.hovered() {
            Status::Hover
        } else {
            Status::Default
        };

        let key = response.id.with("status");
        let previous = ui.data(|d| d.get_temp::<Status>(key));
        ui.data_mut(|d| d.insert_temp(key, observed));

        // first frame: keep the configured initial status
        let Some(previous) = previous else {
            return;
        };
        for event in pointer_transitions(previous, observed) {
            self.slider.apply(SliderCommand::Pointer(event));
        }
    }

    fn handle_input(
        &mut self,
        ui: &Ui,
        response: &Response,
        metrics: &TrackMetrics,
    ) -> Option<SliderValue> {
        if self.slider.is_disabled() {
            return None;
        }

        let handle_key: Id = response.id.with("handle");
        let mut changed = None;

        if let Some(pos) = response.interact_pointer_pos() {
            if response.drag_started() || response.clicked() {
                let percent = metrics.fraction_at(pos.x) * 100.0;
                let handle = nearest_handle(&self.slider.geometry(), percent);
                ui.data_mut(|d| d.insert_temp(handle_key, handle));
                response.request_focus();
            }
            if response.dragged() || response.clicked() {
                let handle = ui
                    .data(|d| d.get_temp::<Handle>(handle_key))
                    .unwrap_or(Handle::Start);
                let raw = self.slider.bounds().value_at(metrics.fraction_at(pos.x));
                changed = self.slider.apply(SliderCommand::Drag { handle, raw });
            }
        }

        if response.has_focus() {
            let steps = ui.input(|i| {
                let mut steps = 0;
                if i.key_pressed(Key::ArrowRight) || i.key_pressed(Key::ArrowUp) {
                    steps += 1;
                }
                if i.key_pressed(Key::ArrowLeft) || i.key_pressed(Key::ArrowDown) {
                    steps -= 1;
                }
                steps
            });
            if steps != 0 {
                let handle = ui
                    .data(|d| d.get_temp::<Handle>(handle_key))
                    .unwrap_or(Handle::Start);
                changed = self
                    .slider
                    .apply(SliderCommand::Nudge { handle, steps })
                    .or(changed);
            }
        }

        if let Some(value) = changed {
            log::debug!("Slider {:?} changed to {:?}", response.id, value);
        }
        changed
    }
}

fn paint(ui: &Ui, slider: &Slider, track_rect: Rect, metrics: &TrackMetrics) {
    let config = slider.config();
    let geometry = slider.geometry();
    let painter = ui.painter();
    let opacity = geometry.opacity;
    let fade = |c: Color32| c.gamma_multiply(opacity);

    let accent = parse_css_color(MARKER_COLOR);
    let center_y = track_rect.center().y;
    let bar_height = (config.size.height() * sizing::TRACK_RATIO).round();
    let bar_radius = CornerRadius::same((bar_height / 2.0) as u8);

    // Track
    let bar = Rect::from_min_max(
        pos2(metrics.x_at(0.0), center_y - bar_height / 2.0),
        pos2(metrics.x_at(100.0), center_y + bar_height / 2.0),
    );
    painter.rect_filled(bar, bar_radius, fade(theme::TRACK));

    // Range fill
    let fill = Rect::from_min_max(
        pos2(metrics.x_at(geometry.fill.left), bar.top()),
        pos2(metrics.x_at(100.0 - geometry.fill.right), bar.bottom()),
    );
    if fill.width() > 0.0 {
        painter.rect_filled(fill, bar_radius, fade(accent));
    }

    // Step markers
    let marker_radius = config.size.marker_diameter() / 2.0;
    for marker in &geometry.markers {
        painter.circle_filled(
            pos2(metrics.x_at(marker.offset), center_y + config.size.marker_margin_top() / 2.0),
            marker_radius,
            fade(accent),
        );
    }

    // Handles
    let handle_radius = config.size.handle_diameter() / 2.0;
    let (ring_width, handle_fill) = match slider.status() {
        Status::Default => (2.0, theme::HANDLE),
        Status::Hover => (3.0, theme::HANDLE),
        Status::Active => (3.0, accent),
    };
    for handle in &geometry.handles {
        let center = pos2(metrics.x_at(handle.offset), center_y);
        painter.circle_filled(center, handle_radius, fade(handle_fill));
        painter.circle_stroke(center, handle_radius, Stroke::new(ring_width, fade(accent)));
    }

    // Tooltips
    for tooltip in &geometry.tooltips {
        let anchor = pos2(metrics.x_at(tooltip.left), track_rect.top() + tooltip.top);
        paint_tooltip(ui, anchor, &tooltip.text, opacity);
    }
}

fn paint_tooltip(ui: &Ui, anchor: Pos2, text: &str, opacity: f32) {
    let painter = ui.painter();
    let galley = painter.layout_no_wrap(
        text.to_string(),
        FontId::proportional(11.0),
        Color32::WHITE.gamma_multiply(opacity),
    );
    let padding = vec2(6.0, 3.0);
    let bubble = Align2::CENTER_TOP.anchor_size(anchor, galley.size() + padding * 2.0);
    painter.rect_filled(
        bubble,
        CornerRadius::same(sizing::CORNER_RADIUS),
        theme::TOOLTIP_BG.gamma_multiply(opacity),
    );
    painter.galley(bubble.min + padding, galley, Color32::WHITE);
}
