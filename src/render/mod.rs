//! The rendering-engine boundary.
//!
//! The crate never renders anything itself: every drawing operation goes
//! through [`RenderBackend`], whose verbs mirror the primitive surface of
//! the external engine (models, cylinders, arrows, labels, background,
//! view, framing, render pass). [`RecordingBackend`] is the in-memory
//! implementation used by tests and headless hosts.

mod recording;

pub use recording::{
    RecordedLabel, RecordedModel, RecordedShape, RecordingBackend,
};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::view::ViewState;

/// Handle to a loaded model, issued by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelHandle(pub u32);

/// Handle to a drawn shape (cylinder or arrow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub u32);

/// Handle to a placed text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelId(pub u32);

/// A straight cylindrical segment between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderSpec {
    /// Segment start point.
    pub start: DVec3,
    /// Segment end point.
    pub end: DVec3,
    /// Cylinder radius.
    pub radius: f64,
    /// CSS color name or hex string.
    pub color: String,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// A directional arrow from `start` to `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowSpec {
    /// Arrow tail.
    pub start: DVec3,
    /// Arrow tip.
    pub end: DVec3,
    /// Shaft radius.
    pub radius: f64,
    /// CSS color name or hex string.
    pub color: String,
    /// Arrowhead radius relative to the shaft radius.
    pub head_ratio: f64,
    /// Fraction of the length at which the head begins (1.0 puts the whole
    /// head at the tip).
    pub mid: f64,
}

/// A text label at a 3D position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSpec {
    /// Anchor position.
    pub position: DVec3,
    /// Font color (CSS name or hex string).
    pub font_color: String,
    /// Font size in points.
    pub font_size: f64,
    /// Whether to draw a background plate behind the text.
    pub show_background: bool,
    /// Background plate color, when shown.
    pub background_color: Option<String>,
}

/// The primitive operation surface of the external rendering engine.
///
/// Implementations are expected to be cheap to call and never to fail:
/// the engine owns its own error handling, and a session treats every
/// backend call as fire-and-forget. `render` marks the end of a batch of
/// mutations; backends may draw eagerly and treat it as a no-op.
pub trait RenderBackend {
    /// Load a model from raw structure-file text in the named format,
    /// returning a handle for later styling and framing.
    fn add_model(&mut self, content: &str, format: &str) -> ModelHandle;

    /// Replace the visual style of every atom in `model`. The style payload
    /// is the serialized style dictionary (see
    /// [`StyleSpec`](crate::options::StyleSpec)).
    fn set_style(&mut self, model: ModelHandle, style: &serde_json::Value);

    /// Draw a solid cylinder segment.
    fn add_cylinder(&mut self, spec: &CylinderSpec) -> ShapeId;

    /// Draw a directional arrow.
    fn add_arrow(&mut self, spec: &ArrowSpec) -> ShapeId;

    /// Place a text label.
    fn add_label(&mut self, text: &str, spec: &LabelSpec) -> LabelId;

    /// Remove every shape drawn so far (cylinders and arrows alike; the
    /// engine offers no per-shape deletion).
    fn remove_all_shapes(&mut self);

    /// Remove every label placed so far.
    fn remove_all_labels(&mut self);

    /// Set the viewport background color.
    fn set_background(&mut self, color: &str);

    /// Push a camera view state.
    fn set_view(&mut self, view: &ViewState);

    /// Frame the camera on the given model.
    fn zoom_to(&mut self, model: ModelHandle);

    /// Trigger a render pass.
    fn render(&mut self);
}
