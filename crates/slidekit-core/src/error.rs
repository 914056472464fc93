//! Errors raised at the configuration boundary.
//!
//! Slider values never produce errors: out-of-range or malformed input is
//! clamped or ignored. Only parsing configuration and loading story
//! presets can fail.

use thiserror::Error;

/// Configuration and preset errors.
#[derive(Debug, Error)]
pub enum SliderError {
    #[error("Unknown slider variant: {0}")]
    InvalidVariant(String),
    #[error("Unknown slider size: {0} (expected small, large, 24 or 32)")]
    InvalidSize(String),
    #[error("Unknown slider status: {0}")]
    InvalidStatus(String),
    #[error("Unknown separation: {0} (expected unit or step)")]
    InvalidSeparation(String),
    #[error("Story not found: {0}")]
    StoryNotFound(String),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type SliderResult<T> = Result<T, SliderError>;
