//! # Sizer Configuration
//!
//! JSON configuration for the quick bet buttons and the slider resolution
//! of a table view.
//!
//! ## Basic Usage
//!
//! ```rust
//! use bet_sizer::config::SizerConfig;
//!
//! // From inline JSON
//! let config = SizerConfig::from_json(r#"{"slider_steps": 200}"#).unwrap();
//! assert_eq!(config.slider_steps, 200);
//!
//! // From file path
//! # // let config = SizerConfig::from_file("table/sizer.json").unwrap();
//!
//! // Smart parsing (tries file first, then inline JSON)
//! # // let config = SizerConfig::from_str_or_file("table/sizer.json").unwrap();
//! ```
//!
//! ## Format
//!
//! Every field is optional. Left out, the slider has 100 steps and the
//! presets are half pot, three quarter pot and pot.
//!
//! ```json
//! {
//!   "slider_steps": 100,
//!   "presets": [
//!     {"label": "⅓ Pot", "portion": 0.33},
//!     {"label": "Pot", "portion": 1.0},
//!     {"label": "2x Pot", "portion": 2.0}
//!   ]
//! }
//! ```
//!
//! A preset's `portion` is the fraction of the after call pot raised on top
//! of the call. Portions above 1.0 are fine, the bet is clamped to the table
//! limits anyway.

use serde::{Deserialize, Serialize};
use std::{io::ErrorKind, path::Path};
use thiserror::Error;

use crate::sizing::SizingEvent;
use crate::widget::MemoryRange;

/// A quick bet button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Text on the button
    pub label: String,
    /// Fraction of the after call pot to bet
    pub portion: f64,
}

impl Preset {
    pub fn new(label: impl Into<String>, portion: f64) -> Self {
        Self {
            label: label.into(),
            portion,
        }
    }

    /// The event clicking this preset sends to the sizer.
    pub fn event(&self) -> SizingEvent {
        SizingEvent::Preset(self.portion)
    }
}

/// Configuration for a table view's bet sizing controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizerConfig {
    /// Number of steps on the range slider
    #[serde(default = "default_slider_steps")]
    pub slider_steps: u32,
    /// Quick bet buttons, in display order
    #[serde(default = "default_presets")]
    pub presets: Vec<Preset>,
}

fn default_slider_steps() -> u32 {
    100
}

fn default_presets() -> Vec<Preset> {
    vec![
        Preset::new("½ Pot", 0.5),
        Preset::new("¾ Pot", 0.75),
        Preset::new("Pot", 1.0),
    ]
}

impl Default for SizerConfig {
    fn default() -> Self {
        Self {
            slider_steps: default_slider_steps(),
            presets: default_presets(),
        }
    }
}

/// Errors that can occur loading a sizer configuration
#[derive(Debug, Error)]
pub enum SizerConfigError {
    /// The slider needs at least one step
    #[error("Slider must have at least one step")]
    NoSliderSteps,

    /// Preset portions must be finite and non-negative
    #[error("Invalid portion {portion} for preset {label:?}")]
    InvalidPortion { label: String, portion: f64 },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SizerConfig {
    /// Validate that the configuration is correct
    pub fn validate(&self) -> Result<(), SizerConfigError> {
        if self.slider_steps == 0 {
            return Err(SizerConfigError::NoSliderSteps);
        }
        for preset in &self.presets {
            if !preset.portion.is_finite() || preset.portion < 0.0 {
                return Err(SizerConfigError::InvalidPortion {
                    label: preset.label.clone(),
                    portion: preset.portion,
                });
            }
        }
        Ok(())
    }

    /// Create from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SizerConfigError> {
        let config: SizerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Create from a file path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SizerConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Try to parse as file path first, then as inline JSON
    pub fn from_str_or_file(input: &str) -> Result<Self, SizerConfigError> {
        match Self::from_file(input) {
            Ok(config) => Ok(config),
            Err(SizerConfigError::IoError(err)) if err.kind() == ErrorKind::NotFound => {
                Self::from_json(input)
            }
            Err(err) => Err(err),
        }
    }

    /// Look up a preset by its button label.
    pub fn preset(&self, label: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.label == label)
    }

    /// An in-memory slider with this configuration's resolution.
    pub fn new_range(&self) -> MemoryRange {
        MemoryRange::new(self.slider_steps)
    }
}
