//! Centralized viewer options with TOML preset support.
//!
//! Everything a host can tune without code (default representation and
//! background, overlay geometry constants) lives here. Options serialize
//! to/from TOML for presets, and the JSON schema feeds a generated
//! controls panel.

mod display;
mod overlay;

use std::path::Path;

pub use display::{DisplayOptions, PartStyle, Representation, StyleSpec};
pub use overlay::{AxesOptions, OverlayOptions, UnitCellOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[overlay.axes]`) work
/// correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct ViewerOptions {
    /// Default representation and background.
    pub display: DisplayOptions,
    /// Axes and unit-cell overlay parameters.
    pub overlay: OverlayOptions,
}

impl ViewerOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(ViewerOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    /// [`ViewerError::Io`] on read failure, [`ViewerError::OptionsParse`]
    /// on invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path).map_err(ViewerError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    /// [`ViewerError::Io`] on write failure, [`ViewerError::OptionsParse`]
    /// if serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), ViewerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewerError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewerError::Io)
    }
}
