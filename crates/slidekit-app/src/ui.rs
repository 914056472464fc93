//! UI components using egui.

use egui::{RichText, Ui};
use slidekit_core::{
    format_value, render, Separation, Size, Slider, SliderConfig, SliderValue, Status, Variant,
};
use slidekit_widgets::{
    option_row, section_label, separator, sizing, theme, SliderWidget, ToggleButton,
};

/// Actions the controls panel asks the app to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    SelectStory(usize),
    SetVariant(Variant),
    SetSize(Size),
    SetStatus(Status),
    SetSeparation(Separation),
    SetTooltip(bool),
    SetDisabled(bool),
    /// Re-initialise the value from the current defaults.
    Reset,
}

/// Snapshot of what the controls panel displays.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub stories: Vec<String>,
    pub selected: usize,
    pub config: SliderConfig,
}

/// Human-readable form of an `onChange` payload.
pub fn describe_value(value: SliderValue) -> String {
    match value {
        SliderValue::Single(v) => format_value(v),
        SliderValue::Range { start, end } => {
            format!("[{}, {}]", format_value(start), format_value(end))
        }
    }
}

fn labelled<T: Copy>(all: &[T], label: fn(T) -> &'static str) -> Vec<(T, &'static str)> {
    all.iter().map(|v| (*v, label(*v))).collect()
}

/// Render the story list and args controls.
pub fn render_controls(ui: &mut Ui, state: &UiState) -> Vec<UiAction> {
    let mut actions = Vec::new();
    let config = &state.config;

    section_label(ui, "Stories");
    for (index, name) in state.stories.iter().enumerate() {
        if ToggleButton::new(name, index == state.selected)
            .min_width(140.0)
            .show(ui)
        {
            actions.push(UiAction::SelectStory(index));
        }
    }

    separator(ui);

    section_label(ui, "Variant");
    let mut variant = config.variant;
    if option_row(ui, &labelled(&Variant::ALL, Variant::label), &mut variant) {
        actions.push(UiAction::SetVariant(variant));
    }

    section_label(ui, "Size");
    let mut size = config.size;
    if option_row(ui, &labelled(&Size::ALL, Size::label), &mut size) {
        actions.push(UiAction::SetSize(size));
    }

    section_label(ui, "Status");
    let mut status = config.status;
    if option_row(ui, &labelled(&Status::ALL, Status::label), &mut status) {
        actions.push(UiAction::SetStatus(status));
    }

    section_label(ui, "Separation");
    let mut separation = config.separation;
    if option_row(ui, &labelled(&Separation::ALL, Separation::label), &mut separation) {
        actions.push(UiAction::SetSeparation(separation));
    }

    separator(ui);

    ui.horizontal(|ui| {
        if ToggleButton::new("Tooltip", config.tooltip).show(ui) {
            actions.push(UiAction::SetTooltip(!config.tooltip));
        }
        if ToggleButton::new("Disabled", config.disabled).show(ui) {
            actions.push(UiAction::SetDisabled(!config.disabled));
        }
        if ToggleButton::new("Reset", false).show(ui) {
            actions.push(UiAction::Reset);
        }
    });

    actions
}

/// Render the live slider with its current value and last notification.
pub fn render_central(ui: &mut Ui, slider: &mut Slider, last_change: Option<SliderValue>) {
    ui.add_space(48.0);
    SliderWidget::new(slider).width(sizing::SLIDER_WIDTH).show(ui);
    ui.add_space(16.0);

    ui.label(RichText::new(format!("Value: {}", describe_value(slider.value()))).color(theme::TEXT));
    let notified = last_change.map_or_else(|| "none".to_string(), describe_value);
    ui.label(RichText::new(format!("onChange: {notified}")).color(theme::TEXT_MUTED));
    ui.label(RichText::new(format!("Status: {}", slider.status().label())).color(theme::TEXT_MUTED));

    ui.add_space(8.0);
    ui.collapsing("Markup", |ui| {
        ui.code(render(slider).to_html());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_value() {
        assert_eq!(describe_value(SliderValue::Single(50.0)), "50");
        assert_eq!(describe_value(SliderValue::Single(2.5)), "2.5");
        assert_eq!(
            describe_value(SliderValue::Range { start: 20.0, end: 80.0 }),
            "[20, 80]"
        );
    }

    #[test]
    fn test_labelled_options() {
        let options = labelled(&Variant::ALL, Variant::label);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].0, Variant::Continuous);
        assert_eq!(options[0].1, Variant::Continuous.label());
    }
}
