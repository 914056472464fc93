//! Showcase application state and the eframe shell.

use std::cell::RefCell;
use std::rc::Rc;

use slidekit_core::{render, Slider, SliderResult, SliderValue, StoryBook};
use slidekit_widgets::panel_frame;

use crate::ui::{render_central, render_controls, UiAction, UiState};

/// Render a story's markup as HTML.
pub fn render_story(book: &StoryBook, name: &str) -> SliderResult<String> {
    let story = book.find(name)?;
    Ok(render(&story.slider()).to_html())
}

/// The storybook-style showcase.
pub struct ShowcaseApp {
    book: StoryBook,
    selected: usize,
    slider: Slider,
    /// Last payload delivered to the slider's change callback.
    last_change: Rc<RefCell<Option<SliderValue>>>,
}

impl ShowcaseApp {
    pub fn new(book: StoryBook) -> Self {
        let last_change = Rc::new(RefCell::new(None));
        let slider = build_slider(&book, 0, &last_change);
        Self {
            book,
            selected: 0,
            slider,
            last_change,
        }
    }

    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut Slider {
        &mut self.slider
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn last_change(&self) -> Option<SliderValue> {
        *self.last_change.borrow()
    }

    pub fn ui_state(&self) -> UiState {
        UiState {
            stories: self.book.names().map(str::to_string).collect(),
            selected: self.selected,
            config: self.slider.config().clone(),
        }
    }

    /// Select a story and rebuild the slider from its args.
    pub fn select(&mut self, index: usize) {
        if index >= self.book.len() {
            log::warn!("No story at index {}", index);
            return;
        }
        self.selected = index;
        self.slider = build_slider(&self.book, index, &self.last_change);
        *self.last_change.borrow_mut() = None;
        log::info!("Selected story {:?}", self.book.stories[index].name);
    }

    pub fn apply(&mut self, action: UiAction) {
        let mut config = self.slider.config().clone();
        match action {
            UiAction::SelectStory(index) => return self.select(index),
            UiAction::Reset => {
                self.slider
                    .reset_defaults(config.default_start, config.default_end);
                *self.last_change.borrow_mut() = None;
                return;
            }
            UiAction::SetVariant(variant) => config.variant = variant,
            UiAction::SetSize(size) => config.size = size,
            UiAction::SetStatus(status) => config.status = status,
            UiAction::SetSeparation(separation) => config.separation = separation,
            UiAction::SetTooltip(tooltip) => config.tooltip = tooltip,
            UiAction::SetDisabled(disabled) => config.disabled = disabled,
        }
        log::info!("Updated args: {:?}", config);
        self.slider.set_config(config);
    }

    /// Open the native showcase window.
    pub fn run(self) -> eframe::Result {
        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title("Slidekit")
                .with_inner_size([720.0, 480.0]),
            ..Default::default()
        };
        eframe::run_native(
            "Slidekit",
            native_options,
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

fn build_slider(
    book: &StoryBook,
    index: usize,
    sink: &Rc<RefCell<Option<SliderValue>>>,
) -> Slider {
    let config = book
        .stories
        .get(index)
        .map(|story| story.args.clone())
        .unwrap_or_default();
    let sink = Rc::clone(sink);
    Slider::new(config).with_on_change(move |value| {
        log::info!("onChange {:?}", value);
        *sink.borrow_mut() = Some(value);
    })
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = self.ui_state();
        let mut actions = Vec::new();

        egui::SidePanel::left("controls")
            .resizable(false)
            .frame(panel_frame())
            .show(ctx, |ui| {
                actions = render_controls(ui, &state);
            });

        let last_change = self.last_change();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                render_central(ui, &mut self.slider, last_change);
            });
        });

        for action in actions {
            self.apply(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_core::{Handle, SliderCommand, SliderError, Status, Variant};

    #[test]
    fn test_new_selects_first_story() {
        let app = ShowcaseApp::new(StoryBook::builtin());
        assert_eq!(app.selected(), 0);
        assert_eq!(app.slider().variant(), Variant::Continuous);
        assert_eq!(app.last_change(), None);
    }

    #[test]
    fn test_empty_book_uses_default_slider() {
        let mut app = ShowcaseApp::new(StoryBook::default());
        assert_eq!(app.slider().variant(), Variant::Range);
        app.select(3);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_change_callback_records_payload() {
        let mut app = ShowcaseApp::new(StoryBook::builtin());
        app.slider_mut().apply(SliderCommand::Drag {
            handle: Handle::Start,
            raw: 70.0,
        });
        assert_eq!(app.last_change(), Some(SliderValue::Single(70.0)));
    }

    #[test]
    fn test_select_story_rebuilds_slider() {
        let mut app = ShowcaseApp::new(StoryBook::builtin());
        app.slider_mut().apply(SliderCommand::Drag {
            handle: Handle::Start,
            raw: 70.0,
        });
        app.apply(UiAction::SelectStory(2));
        assert_eq!(app.selected(), 2);
        assert_eq!(app.last_change(), None);
        assert_eq!(
            app.slider().value(),
            SliderValue::Range { start: 20.0, end: 80.0 }
        );

        // the rebuilt slider still reports changes
        app.slider_mut().apply(SliderCommand::Drag {
            handle: Handle::End,
            raw: 90.0,
        });
        assert_eq!(
            app.last_change(),
            Some(SliderValue::Range { start: 20.0, end: 90.0 })
        );
    }

    #[test]
    fn test_controls_update_config() {
        let mut app = ShowcaseApp::new(StoryBook::builtin());
        app.apply(UiAction::SetVariant(Variant::Range));
        assert_eq!(app.slider().variant(), Variant::Range);
        assert!(matches!(app.slider().value(), SliderValue::Range { .. }));

        app.apply(UiAction::SetStatus(Status::Active));
        assert_eq!(app.slider().status(), Status::Active);

        app.apply(UiAction::SetDisabled(true));
        assert!(app.slider().is_disabled());
        assert!(app.ui_state().config.disabled);
    }

    #[test]
    fn test_presentation_controls_keep_value() {
        let mut app = ShowcaseApp::new(StoryBook::builtin());
        app.slider_mut().apply(SliderCommand::Drag {
            handle: Handle::Start,
            raw: 70.0,
        });
        app.apply(UiAction::SetTooltip(true));
        app.apply(UiAction::SetSize(slidekit_core::Size::Large));
        assert_eq!(app.slider().value(), SliderValue::Single(70.0));
        assert!(app.slider().config().tooltip);
        assert_eq!(app.last_change(), Some(SliderValue::Single(70.0)));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut app = ShowcaseApp::new(StoryBook::builtin());
        app.slider_mut().apply(SliderCommand::Drag {
            handle: Handle::Start,
            raw: 10.0,
        });
        app.apply(UiAction::Reset);
        assert_eq!(app.slider().value(), SliderValue::Single(50.0));
        assert_eq!(app.last_change(), None);
    }

    #[test]
    fn test_render_story() {
        let book = StoryBook::builtin();
        let html = render_story(&book, "range").unwrap();
        assert!(html.starts_with("<div class=\"slider-container"));
        assert!(html.contains("min-slider-wrapper"));

        let err = render_story(&book, "Vertical").unwrap_err();
        assert!(matches!(err, SliderError::StoryNotFound(_)));
    }
}
