//! Geometry constants for the axes and unit-cell overlays.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cell::dash;

/// Overlay parameter container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct OverlayOptions {
    /// Coordinate-axes overlay parameters.
    pub axes: AxesOptions,
    /// Unit-cell wireframe overlay parameters.
    pub unit_cell: UnitCellOptions,
}

/// Parameters of the X/Y/Z axes overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Axes", inline)]
#[serde(default)]
pub struct AxesOptions {
    /// Arrow length from the origin.
    #[schemars(title = "Length")]
    pub length: f64,
    /// Arrow shaft radius.
    #[schemars(title = "Radius")]
    pub radius: f64,
    /// Arrowhead radius relative to the shaft radius.
    #[schemars(title = "Head Ratio")]
    pub head_ratio: f64,
    /// Distance of the label beyond the arrow tip.
    #[schemars(title = "Label Offset")]
    pub label_offset: f64,
    /// Label font size in points.
    #[schemars(title = "Font Size")]
    pub font_size: f64,
}

impl Default for AxesOptions {
    fn default() -> Self {
        Self {
            length: 2.5,
            radius: 0.05,
            head_ratio: 0.3,
            label_offset: 0.3,
            font_size: 14.0,
        }
    }
}

/// Parameters of the dashed unit-cell wireframe overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Unit Cell", inline)]
#[serde(default)]
pub struct UnitCellOptions {
    /// Edge cylinder radius.
    #[schemars(title = "Radius")]
    pub radius: f64,
    /// Edge color (CSS name or hex string).
    #[schemars(title = "Color")]
    pub color: String,
    /// Edge opacity in `[0, 1]`.
    #[schemars(title = "Opacity")]
    pub opacity: f64,
    /// Dash subdivisions per edge.
    #[schemars(title = "Segments")]
    pub segments: u32,
    /// Visible fraction of each subdivision.
    #[schemars(title = "Dash Fraction")]
    pub dash_fraction: f64,
}

impl Default for UnitCellOptions {
    fn default() -> Self {
        Self {
            radius: 0.05,
            color: "magenta".to_owned(),
            opacity: 0.8,
            segments: dash::DEFAULT_SEGMENTS,
            dash_fraction: dash::DEFAULT_DASH_FRACTION,
        }
    }
}
