//! The viewer session: all runtime state, driving a render backend.
//!
//! A [`ViewerSession`] owns what the original UI kept in globals: the loaded
//! model handle, parsed crystal data, current representation, background,
//! overlay toggles, camera view, and the side panel. Every mutation goes
//! through a session method that takes the backend explicitly, which keeps
//! the parser and geometry builders pure and the session testable against
//! [`RecordingBackend`](crate::render::RecordingBackend).

mod commands;
mod hover;
mod overlays;
mod panel;

pub use commands::{
    validate_commands, BuildStructureParams, DisplayMessageParams,
    LoadPdbParams, ResetViewParams, RotateCameraParams,
    SetBackgroundColorParams, SetRepresentationParams, SetViewParams,
    StructureFormat, ToggleAxesParams, ToggleUnitCellParams,
    TranslateCameraParams, ViewerCommand, ZoomParams,
};
pub use hover::HoverAtom;
pub use panel::{ChatMessage, MessageKind, PanelState, PanelTab};

use glam::DVec3;

use crate::error::ViewerError;
use crate::lattice::{parse_cryst1, LatticeParameters};
use crate::options::{Representation, StyleSpec, ViewerOptions};
use crate::render::{ModelHandle, RenderBackend};
use crate::view::{RotationAxis, ViewState};

/// The viewer state machine.
///
/// Exactly one structure is loaded at a time; loading a new one replaces
/// the previous model and its crystal data. No operation is fatal: errors
/// come back to the caller with the session left consistent.
#[derive(Debug)]
pub struct ViewerSession {
    model: Option<ModelHandle>,
    crystal: Option<LatticeParameters>,
    representation: Representation,
    background: String,
    axes_shown: bool,
    cell_shown: bool,
    view: ViewState,
    panel: PanelState,
    options: ViewerOptions,
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new(ViewerOptions::default())
    }
}

impl ViewerSession {
    /// Fresh session with no model loaded.
    #[must_use]
    pub fn new(options: ViewerOptions) -> Self {
        Self {
            model: None,
            crystal: None,
            representation: options.display.representation,
            background: options.display.background.clone(),
            axes_shown: false,
            cell_shown: false,
            view: ViewState::default(),
            panel: PanelState::default(),
            options,
        }
    }

    // ── Accessors ──

    /// Handle of the loaded model, if any.
    #[must_use]
    pub fn model(&self) -> Option<ModelHandle> {
        self.model
    }

    /// Crystal data parsed from the loaded structure (or supplied by a
    /// `toggleUnitCell` command).
    #[must_use]
    pub fn crystal(&self) -> Option<&LatticeParameters> {
        self.crystal.as_ref()
    }

    /// Current representation.
    #[must_use]
    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// Current background color.
    #[must_use]
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Whether the axes overlay is shown.
    #[must_use]
    pub fn axes_shown(&self) -> bool {
        self.axes_shown
    }

    /// Whether the unit-cell overlay is shown.
    #[must_use]
    pub fn cell_shown(&self) -> bool {
        self.cell_shown
    }

    /// Tracked camera view state.
    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Side-panel state (active tab and chat transcript).
    #[must_use]
    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    /// Session options.
    #[must_use]
    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    // ── Structure loading ──

    /// Load a structure from raw file text, replacing any previous model.
    ///
    /// The text is handed to the backend's loader opaquely; the one record
    /// read here is CRYST1, whose presence gates the unit-cell feature.
    /// The current representation and background are applied, enabled
    /// overlays are redrawn, and the camera is framed on the new model.
    pub fn load_structure(
        &mut self,
        backend: &mut dyn RenderBackend,
        content: &str,
        format: &str,
    ) {
        let model = backend.add_model(content, format);
        self.model = Some(model);

        self.crystal = parse_cryst1(content);
        if let Some(crystal) = &self.crystal {
            log::info!("crystal data: {crystal:?}");
        } else {
            log::info!("structure carries no usable CRYST1 record");
        }

        self.apply_style(backend, &self.representation.style());
        backend.set_background(&self.background);
        self.redraw_overlays(backend);
        backend.zoom_to(model);
        backend.render();
    }

    /// Install explicit crystal data (from a `toggleUnitCell` payload),
    /// overriding whatever the CRYST1 record supplied. Non-finite values
    /// are refused; the parser invariant holds for every stored value.
    pub fn set_crystal(&mut self, crystal: LatticeParameters) {
        if crystal.is_finite() {
            self.crystal = Some(crystal);
        } else {
            log::warn!("ignoring non-finite crystal data: {crystal:?}");
        }
    }

    // ── Representation and background ──

    /// Switch the representation by wire token, with optional colorscheme
    /// and opacity overrides across the active style parts.
    ///
    /// An unrecognized token applies the empty style (the model goes
    /// unstyled) and leaves the tracked representation unchanged.
    pub fn set_representation(
        &mut self,
        backend: &mut dyn RenderBackend,
        token: &str,
        colorscheme: Option<&str>,
        opacity: Option<f64>,
    ) {
        if let Some(rep) = Representation::from_token(token) {
            self.representation = rep;
        } else {
            log::warn!("unrecognized representation token: {token:?}");
        }
        let spec = StyleSpec::for_token(token)
            .with_overrides(colorscheme, opacity);
        self.apply_style(backend, &spec);
        backend.render();
    }

    /// Set the viewport background color (pass-through CSS string).
    pub fn set_background(
        &mut self,
        backend: &mut dyn RenderBackend,
        color: &str,
    ) {
        self.background = color.to_owned();
        backend.set_background(color);
        backend.render();
    }

    /// Clear existing styles, then apply `spec` to the loaded model.
    fn apply_style(&self, backend: &mut dyn RenderBackend, spec: &StyleSpec) {
        let Some(model) = self.model else { return };
        backend.set_style(model, &serde_json::Value::Object(serde_json::Map::new()));
        if let Ok(style) = serde_json::to_value(spec) {
            backend.set_style(model, &style);
        }
    }

    // ── Camera ──

    /// Frame the camera on the loaded model.
    pub fn reset_view(&mut self, backend: &mut dyn RenderBackend) {
        if let Some(model) = self.model {
            backend.zoom_to(model);
            backend.render();
        }
    }

    /// Rotate the camera about `axis` by `degrees` in the world frame.
    ///
    /// # Errors
    /// [`ViewerError::ZeroRotationAxis`] for a zero axis vector; the view
    /// is unchanged.
    pub fn rotate_camera(
        &mut self,
        backend: &mut dyn RenderBackend,
        axis: RotationAxis,
        degrees: f64,
    ) -> Result<(), ViewerError> {
        self.view = self.view.rotated(axis, degrees)?;
        backend.set_view(&self.view);
        backend.render();
        Ok(())
    }

    /// Pan the camera by `vector`.
    pub fn translate_camera(
        &mut self,
        backend: &mut dyn RenderBackend,
        vector: DVec3,
    ) {
        self.view = self.view.translated(vector);
        backend.set_view(&self.view);
        backend.render();
    }

    /// Scale the camera zoom by `factor` (>1 zooms in).
    pub fn zoom(&mut self, backend: &mut dyn RenderBackend, factor: f64) {
        self.view = self.view.zoomed(factor);
        backend.set_view(&self.view);
        backend.render();
    }

    /// Restore a saved view state.
    pub fn set_view(
        &mut self,
        backend: &mut dyn RenderBackend,
        view: ViewState,
    ) {
        self.view = view;
        backend.set_view(&self.view);
        backend.render();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingBackend;
    use crate::view::PrincipalAxis;

    const PDB: &str = "CRYST1    5.000    5.000    5.000  90.00  90.00  90.00\nATOM      1  N   ALA A   1\n";

    #[test]
    fn load_applies_style_background_and_frames() {
        let mut backend = RecordingBackend::new();
        let mut session = ViewerSession::default();
        session.load_structure(&mut backend, PDB, "pdb");

        let model = session.model().unwrap();
        assert_eq!(backend.zoomed_to(), Some(model));
        assert_eq!(backend.background(), Some("white"));
        assert!(session.crystal().is_some());

        // Default representation is ball-and-stick.
        let style = backend.model(model).unwrap().style.clone().unwrap();
        assert_eq!(style["stick"]["radius"], 0.15);
        assert_eq!(style["sphere"]["radius"], 0.4);
    }

    #[test]
    fn reload_replaces_model_and_crystal() {
        let mut backend = RecordingBackend::new();
        let mut session = ViewerSession::default();
        session.load_structure(&mut backend, PDB, "pdb");
        let first = session.model().unwrap();

        session.load_structure(&mut backend, "ATOM      1\n", "pdb");
        assert_ne!(session.model().unwrap(), first);
        assert!(session.crystal().is_none());
    }

    #[test]
    fn unknown_representation_token_unstyles() {
        let mut backend = RecordingBackend::new();
        let mut session = ViewerSession::default();
        session.load_structure(&mut backend, PDB, "pdb");
        session.set_representation(&mut backend, "cartoon", None, None);

        assert_eq!(session.representation(), Representation::BallAndStick);
        let model = session.model().unwrap();
        let style = backend.model(model).unwrap().style.clone().unwrap();
        assert_eq!(style, serde_json::json!({}));
    }

    #[test]
    fn representation_overrides_reach_the_backend() {
        let mut backend = RecordingBackend::new();
        let mut session = ViewerSession::default();
        session.load_structure(&mut backend, PDB, "pdb");
        session.set_representation(
            &mut backend,
            "stick",
            Some("element"),
            Some(0.5),
        );
        assert_eq!(session.representation(), Representation::Stick);
        let model = session.model().unwrap();
        let style = backend.model(model).unwrap().style.clone().unwrap();
        assert_eq!(style["stick"]["colorscheme"], "element");
        assert_eq!(style["stick"]["opacity"], 0.5);
    }

    #[test]
    fn background_is_tracked_and_forwarded() {
        let mut backend = RecordingBackend::new();
        let mut session = ViewerSession::default();
        session.set_background(&mut backend, "#4b5563");
        assert_eq!(session.background(), "#4b5563");
        assert_eq!(backend.background(), Some("#4b5563"));
    }

    #[test]
    fn camera_operations_update_the_tracked_view() {
        let mut backend = RecordingBackend::new();
        let mut session = ViewerSession::default();
        session
            .rotate_camera(
                &mut backend,
                RotationAxis::Principal(PrincipalAxis::Y),
                90.0,
            )
            .unwrap();
        session.translate_camera(&mut backend, DVec3::new(1.0, 0.0, 0.0));
        session.zoom(&mut backend, 2.0);

        let view = session.view();
        assert!((view.quaternion.y - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9);
        assert_eq!(view.translation.x, 1.0);
        assert_eq!(view.zoom, 2.0);
        assert_eq!(backend.view(), Some(view));
    }

    #[test]
    fn failed_rotation_leaves_the_view_unchanged() {
        let mut backend = RecordingBackend::new();
        let mut session = ViewerSession::default();
        let before = *session.view();
        let result = session.rotate_camera(
            &mut backend,
            RotationAxis::Vector([0.0, 0.0, 0.0]),
            45.0,
        );
        assert!(matches!(result, Err(ViewerError::ZeroRotationAxis)));
        assert_eq!(session.view(), &before);
        assert!(backend.view().is_none());
    }

    #[test]
    fn reset_without_model_is_a_no_op() {
        let mut backend = RecordingBackend::new();
        let mut session = ViewerSession::default();
        session.reset_view(&mut backend);
        assert_eq!(backend.render_count(), 0);
        assert!(backend.zoomed_to().is_none());
    }
}
