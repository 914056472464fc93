//! The slider component: configuration, owned state and command handling.

use std::fmt;

use crate::bounds::Bounds;
use crate::config::{SliderConfig, Status, Variant};
use crate::geometry::SliderGeometry;
use crate::snap::{coerce_raw, granularity, snap_value};
use crate::state::{initial_value, Handle, PointerEvent, SliderState, SliderValue};

/// Callback invoked with the new value after every user-driven change.
pub type ChangeCallback = Box<dyn FnMut(SliderValue)>;

/// A user interaction applied to a slider.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderCommand {
    /// Move a handle to a numeric value (pointer drag).
    Drag { handle: Handle, raw: f64 },
    /// Move a handle to the value typed or reported as text.
    Input { handle: Handle, raw: String },
    /// Step a handle by a number of increments (keyboard).
    Nudge { handle: Handle, steps: i32 },
    /// Pointer crossed or pressed the container.
    Pointer(PointerEvent),
}

/// A slider instance.
///
/// Owns its state exclusively; every mutation goes through
/// [`Slider::apply`] or [`Slider::reset_defaults`].
pub struct Slider {
    config: SliderConfig,
    state: SliderState,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(SliderConfig::default())
    }
}

impl Slider {
    /// Create a slider initialised from the config's clamped defaults.
    pub fn new(config: SliderConfig) -> Self {
        let state = SliderState::initial(&config);
        log::debug!("New {} slider with {:?}", config.variant, state.value);
        Self {
            config,
            state,
            on_change: None,
        }
    }

    /// Set the change callback.
    pub fn with_on_change(mut self, callback: impl FnMut(SliderValue) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Replace (or clear) the change callback.
    pub fn set_on_change(&mut self, callback: Option<ChangeCallback>) {
        self.on_change = callback;
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn state(&self) -> &SliderState {
        &self.state
    }

    pub fn value(&self) -> SliderValue {
        self.state.value
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn bounds(&self) -> Bounds {
        self.config.bounds()
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Snap granularity for this slider's inputs.
    pub fn granularity(&self) -> f64 {
        granularity(self.config.variant, self.config.effective_step())
    }

    /// Derived positions for rendering the current state.
    pub fn geometry(&self) -> SliderGeometry {
        SliderGeometry::compute(&self.config, &self.state)
    }

    /// Apply a command. Returns the new value if it changed.
    pub fn apply(&mut self, command: SliderCommand) -> Option<SliderValue> {
        match command {
            SliderCommand::Pointer(event) => {
                self.state.status = self.state.status.after(event);
                None
            }
            SliderCommand::Drag { handle, raw } => self.set_handle(handle, raw),
            SliderCommand::Input { handle, raw } => match coerce_raw(&raw) {
                Some(value) => self.set_handle(handle, value),
                None => {
                    log::debug!("Ignoring non-numeric input {:?}", raw);
                    None
                }
            },
            SliderCommand::Nudge { handle, steps } => {
                let current = self.state.value.get(handle)?;
                self.set_handle(handle, current + f64::from(steps) * self.granularity())
            }
        }
    }

    /// Re-initialise the value from new defaults.
    ///
    /// Owners call this when upstream defaults change. Status is kept and
    /// the change callback is not invoked.
    pub fn reset_defaults(&mut self, start: f64, end: Option<f64>) {
        self.config.default_start = start;
        self.config.default_end = end;
        self.state.value = initial_value(&self.config, start, self.config.raw_default_end());
        log::debug!("Reset defaults to {:?}", self.state.value);
    }

    /// Replace the configuration.
    ///
    /// The value is re-initialised only when bounds, step, separation,
    /// defaults or variant changed; presentation-only changes keep the
    /// current handle positions. The interaction status only follows the
    /// new config when its `status` field differs from the previous one.
    pub fn set_config(&mut self, config: SliderConfig) {
        let status = if config.status != self.config.status {
            config.status
        } else {
            self.state.status
        };
        let value = if config.same_value_domain(&self.config) {
            self.state.value
        } else {
            let value = SliderState::initial(&config).value;
            log::debug!("Config changed value domain, re-initialised to {:?}", value);
            value
        };
        self.config = config;
        self.state = SliderState { value, status };
    }

    fn set_handle(&mut self, handle: Handle, raw: f64) -> Option<SliderValue> {
        if self.config.disabled {
            log::debug!("Slider is disabled, ignoring {:?} -> {}", handle, raw);
            return None;
        }

        let bounds = self.config.bounds();
        let snapped = snap_value(raw, &bounds, self.granularity());
        let sep = self.config.min_separation();

        let next = match (self.state.value, handle) {
            (SliderValue::Single(_), Handle::Start) => SliderValue::Single(snapped),
            (SliderValue::Single(_), Handle::End) => return None,
            (SliderValue::Range { end, .. }, Handle::Start) => SliderValue::Range {
                start: snapped.min(end - sep).max(bounds.min),
                end,
            },
            (SliderValue::Range { start, .. }, Handle::End) => SliderValue::Range {
                start,
                end: snapped.max(start + sep).min(bounds.max),
            },
        };

        if next == self.state.value {
            return None;
        }
        if next.get(handle) != Some(snapped) {
            log::debug!("Clamped {:?} handle from {} to {:?}", handle, raw, next);
        }

        self.state.value = next;
        if let Some(callback) = self.on_change.as_mut() {
            callback(next);
        }
        Some(next)
    }
}
