//! In-memory backend that records every call.
//!
//! Doubles as the test backend and as a headless driver: a host can run a
//! full session against it and read back the drawn primitives.

use rustc_hash::FxHashMap;

use super::{
    ArrowSpec, CylinderSpec, LabelId, LabelSpec, ModelHandle, RenderBackend,
    ShapeId,
};
use crate::view::ViewState;

/// A recorded shape: either primitive kind keeps its full spec.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedShape {
    /// A cylinder segment.
    Cylinder(CylinderSpec),
    /// A directional arrow.
    Arrow(ArrowSpec),
}

/// A recorded label: text plus placement.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedLabel {
    /// Label text.
    pub text: String,
    /// Placement and font parameters.
    pub spec: LabelSpec,
}

/// A recorded model load.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedModel {
    /// Raw structure-file text as passed to `add_model`.
    pub content: String,
    /// Format token as passed to `add_model`.
    pub format: String,
    /// Last style dictionary applied via `set_style`, if any.
    pub style: Option<serde_json::Value>,
}

/// [`RenderBackend`] implementation that stores every call in memory.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    models: FxHashMap<u32, RecordedModel>,
    shapes: FxHashMap<u32, RecordedShape>,
    labels: FxHashMap<u32, RecordedLabel>,
    next_id: u32,
    background: Option<String>,
    view: Option<ViewState>,
    zoomed_to: Option<ModelHandle>,
    render_count: u32,
}

impl RecordingBackend {
    /// Fresh empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Number of currently drawn shapes.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Currently drawn cylinders.
    #[must_use]
    pub fn cylinders(&self) -> Vec<&CylinderSpec> {
        let mut ids: Vec<_> = self
            .shapes
            .iter()
            .filter_map(|(id, s)| match s {
                RecordedShape::Cylinder(c) => Some((*id, c)),
                RecordedShape::Arrow(_) => None,
            })
            .collect();
        ids.sort_by_key(|(id, _)| *id);
        ids.into_iter().map(|(_, c)| c).collect()
    }

    /// Currently drawn arrows.
    #[must_use]
    pub fn arrows(&self) -> Vec<&ArrowSpec> {
        let mut ids: Vec<_> = self
            .shapes
            .iter()
            .filter_map(|(id, s)| match s {
                RecordedShape::Arrow(a) => Some((*id, a)),
                RecordedShape::Cylinder(_) => None,
            })
            .collect();
        ids.sort_by_key(|(id, _)| *id);
        ids.into_iter().map(|(_, a)| a).collect()
    }

    /// Currently placed labels, in placement order.
    #[must_use]
    pub fn labels(&self) -> Vec<&RecordedLabel> {
        let mut ids: Vec<_> = self.labels.iter().collect();
        ids.sort_by_key(|(id, _)| **id);
        ids.into_iter().map(|(_, l)| l).collect()
    }

    /// Recorded state of a loaded model.
    #[must_use]
    pub fn model(&self, handle: ModelHandle) -> Option<&RecordedModel> {
        self.models.get(&handle.0)
    }

    /// Number of models loaded over the backend's lifetime.
    #[must_use]
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Last background color set, if any.
    #[must_use]
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Last view state pushed, if any.
    #[must_use]
    pub fn view(&self) -> Option<&ViewState> {
        self.view.as_ref()
    }

    /// Model last framed via `zoom_to`, if any.
    #[must_use]
    pub fn zoomed_to(&self) -> Option<ModelHandle> {
        self.zoomed_to
    }

    /// Number of render passes triggered.
    #[must_use]
    pub fn render_count(&self) -> u32 {
        self.render_count
    }
}

impl RenderBackend for RecordingBackend {
    fn add_model(&mut self, content: &str, format: &str) -> ModelHandle {
        let id = self.next_id();
        let _ = self.models.insert(
            id,
            RecordedModel {
                content: content.to_owned(),
                format: format.to_owned(),
                style: None,
            },
        );
        ModelHandle(id)
    }

    fn set_style(&mut self, model: ModelHandle, style: &serde_json::Value) {
        if let Some(m) = self.models.get_mut(&model.0) {
            m.style = Some(style.clone());
        }
    }

    fn add_cylinder(&mut self, spec: &CylinderSpec) -> ShapeId {
        let id = self.next_id();
        let _ = self
            .shapes
            .insert(id, RecordedShape::Cylinder(spec.clone()));
        ShapeId(id)
    }

    fn add_arrow(&mut self, spec: &ArrowSpec) -> ShapeId {
        let id = self.next_id();
        let _ = self.shapes.insert(id, RecordedShape::Arrow(spec.clone()));
        ShapeId(id)
    }

    fn add_label(&mut self, text: &str, spec: &LabelSpec) -> LabelId {
        let id = self.next_id();
        let _ = self.labels.insert(
            id,
            RecordedLabel { text: text.to_owned(), spec: spec.clone() },
        );
        LabelId(id)
    }

    fn remove_all_shapes(&mut self) {
        self.shapes.clear();
    }

    fn remove_all_labels(&mut self) {
        self.labels.clear();
    }

    fn set_background(&mut self, color: &str) {
        self.background = Some(color.to_owned());
    }

    fn set_view(&mut self, view: &ViewState) {
        self.view = Some(*view);
    }

    fn zoom_to(&mut self, model: ModelHandle) {
        self.zoomed_to = Some(model);
    }

    fn render(&mut self) {
        self.render_count += 1;
    }
}
