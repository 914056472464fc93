//! Named slider presets ("stories") for showcases and snapshot rendering.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{SliderConfig, Size, Variant};
use crate::error::{SliderError, SliderResult};
use crate::slider::Slider;

/// A named configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub name: String,
    #[serde(default)]
    pub args: SliderConfig,
}

impl Story {
    pub fn new(name: impl Into<String>, args: SliderConfig) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Build a fresh slider from this story's args.
    pub fn slider(&self) -> Slider {
        Slider::new(self.args.clone())
    }
}

/// An ordered collection of stories.
///
/// Serialized as a plain JSON array of `{ "name": ..., "args": {...} }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryBook {
    pub stories: Vec<Story>,
}

impl StoryBook {
    /// The presets shipped with the widget.
    ///
    /// `Continuous` mirrors the long-standing default story; the others
    /// exist for the showcase.
    pub fn builtin() -> Self {
        let base = SliderConfig::default().with_bounds(0.0, 100.0).with_step(20.0);
        Self {
            stories: vec![
                Story::new(
                    "Continuous",
                    base.clone()
                        .with_variant(Variant::Continuous)
                        .with_defaults(50.0, Some(75.0)),
                ),
                Story::new(
                    "Discrete",
                    base.clone()
                        .with_variant(Variant::Discrete)
                        .with_defaults(40.0, None)
                        .with_tooltip(true),
                ),
                Story::new(
                    "Range",
                    base.clone()
                        .with_variant(Variant::Range)
                        .with_defaults(20.0, Some(80.0))
                        .with_tooltip(true),
                ),
                Story::new(
                    "Large",
                    base.clone()
                        .with_variant(Variant::Range)
                        .with_size(Size::Large)
                        .with_defaults(10.0, Some(60.0)),
                ),
                Story::new(
                    "Disabled",
                    base.with_variant(Variant::Continuous)
                        .with_defaults(30.0, None)
                        .with_disabled(true),
                ),
            ],
        }
    }

    /// Parse a JSON array of stories.
    pub fn from_json(json: &str) -> SliderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load stories from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SliderResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let book = Self::from_json(&json)?;
        log::info!("Loaded {} stories from {:?}", book.stories.len(), path);
        Ok(book)
    }

    pub fn to_json(&self) -> SliderResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up a story by name, ignoring case.
    pub fn find(&self, name: &str) -> SliderResult<&Story> {
        self.stories
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| SliderError::StoryNotFound(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stories.iter().map(|s| s.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }
}
