//! The viewer's complete command vocabulary.
//!
//! Every operation a host or automation layer can request is a
//! [`ViewerCommand`], carried on the wire as
//! `{"command": <name>, "params": {...}}` with camelCase names and strict
//! params (unknown fields rejected). [`validate_commands`] checks a whole
//! JSON batch up front, reporting the index of the first bad element;
//! [`ViewerSession::execute`] dispatches one validated command.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::panel::MessageKind;
use super::ViewerSession;
use crate::error::ViewerError;
use crate::lattice::LatticeParameters;
use crate::render::RenderBackend;
use crate::view::{RotationAxis, ViewState};

/// Structure-file formats the backend loader accepts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StructureFormat {
    /// Legacy fixed-column PDB.
    Pdb,
    /// Plain XYZ coordinates.
    Xyz,
    /// MDL SD file.
    Sdf,
    /// Tripos MOL2.
    Mol2,
    /// Crystallographic information file.
    Cif,
}

impl StructureFormat {
    /// Wire token, as passed through to the backend loader.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdb => "pdb",
            Self::Xyz => "xyz",
            Self::Sdf => "sdf",
            Self::Mol2 => "mol2",
            Self::Cif => "cif",
        }
    }
}

/// Parameters of `buildStructure`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildStructureParams {
    /// File format of `content`.
    pub format: StructureFormat,
    /// Raw structure data as text.
    pub content: String,
    /// Loader options, accepted for wire compatibility and ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

/// Parameters of `loadPdb`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct LoadPdbParams {
    /// Four-character alphanumeric PDB identifier.
    pub pdb_id: String,
}

/// Parameters of `setRepresentation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SetRepresentationParams {
    /// Representation style token.
    pub style: String,
    /// Coloring scheme override (Jmol, element, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,
    /// Opacity override, 0.0 transparent to 1.0 opaque.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// Parameters of `setBackgroundColor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetBackgroundColorParams {
    /// CSS color string or hex code.
    pub color: String,
}

/// Parameters of `rotateCamera`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotateCameraParams {
    /// Principal axis name or custom axis vector.
    pub axis: RotationAxis,
    /// Rotation angle in degrees.
    pub angle: f64,
}

/// Parameters of `translateCamera`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslateCameraParams {
    /// Translation vector `[dx, dy, dz]`.
    pub vector: [f64; 3],
}

/// Parameters of `zoom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ZoomParams {
    /// Zoom factor (>1 zooms in, <1 zooms out).
    pub factor: f64,
    /// Accepted for wire compatibility and ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_path: Option<bool>,
}

/// Parameters of `resetView` (none).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResetViewParams {}

/// Parameters of `toggleAxes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToggleAxesParams {
    /// True to show axes, false to hide.
    pub show: bool,
}

/// Parameters of `toggleUnitCell`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ToggleUnitCellParams {
    /// True to show the unit cell, false to hide.
    pub show: bool,
    /// Explicit cell parameters, overriding the parsed CRYST1 record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crystal_data: Option<LatticeParameters>,
}

/// Parameters of `setView`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SetViewParams {
    /// Saved view state to restore.
    pub view_object: ViewState,
}

/// Parameters of `displayMessage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayMessageParams {
    /// Text to show in the chat pane.
    pub message: String,
    /// Message severity.
    #[serde(rename = "type")]
    pub kind: MessageKind,
}

/// A single instruction for the viewer.
///
/// The session never cares how a command was produced; a GUI toggle and a
/// scripted batch look identical:
///
/// ```
/// use xtalview::render::RecordingBackend;
/// use xtalview::session::{
///     SetBackgroundColorParams, ViewerCommand, ViewerSession,
/// };
///
/// let mut backend = RecordingBackend::new();
/// let mut session = ViewerSession::default();
/// session
///     .execute(
///         &mut backend,
///         ViewerCommand::SetBackgroundColor(SetBackgroundColorParams {
///             color: "black".to_owned(),
///         }),
///     )
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", content = "params", rename_all = "camelCase")]
pub enum ViewerCommand {
    /// Load a structure from raw file text.
    BuildStructure(BuildStructureParams),
    /// Download a PDB entry by id and load it.
    LoadPdb(LoadPdbParams),
    /// Change the representation style.
    SetRepresentation(SetRepresentationParams),
    /// Change the background color.
    SetBackgroundColor(SetBackgroundColorParams),
    /// Rotate the camera in the world frame.
    RotateCamera(RotateCameraParams),
    /// Pan the camera.
    TranslateCamera(TranslateCameraParams),
    /// Zoom the camera.
    Zoom(ZoomParams),
    /// Frame the camera on the loaded model.
    ResetView(ResetViewParams),
    /// Show or hide the coordinate axes.
    ToggleAxes(ToggleAxesParams),
    /// Show or hide the unit-cell wireframe.
    ToggleUnitCell(ToggleUnitCellParams),
    /// Restore a saved camera view.
    SetView(SetViewParams),
    /// Append a chat message.
    DisplayMessage(DisplayMessageParams),
}

impl ViewerCommand {
    /// Semantic checks beyond what deserialization enforces.
    fn validate(&self) -> Result<(), String> {
        match self {
            Self::LoadPdb(p) => {
                if p.pdb_id.len() == 4
                    && p.pdb_id.chars().all(|c| c.is_ascii_alphanumeric())
                {
                    Ok(())
                } else {
                    Err(format!(
                        "pdbId must be 4 alphanumeric characters, got {:?}",
                        p.pdb_id
                    ))
                }
            }
            Self::SetRepresentation(p) => match p.opacity {
                Some(o) if !(0.0..=1.0).contains(&o) => {
                    Err(format!("opacity must be within [0, 1], got {o}"))
                }
                _ => Ok(()),
            },
            _ => Ok(()),
        }
    }
}

/// Parse and validate a JSON array of commands.
///
/// # Errors
/// [`ViewerError::Command`] naming the first element that fails to parse
/// or validate.
pub fn validate_commands(json: &str) -> Result<Vec<ViewerCommand>, ViewerError> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(json)
        .map_err(|e| ViewerError::Command { index: 0, message: e.to_string() })?;

    raw.into_iter()
        .enumerate()
        .map(|(index, value)| {
            let command: ViewerCommand = serde_json::from_value(value)
                .map_err(|e| ViewerError::Command {
                    index,
                    message: e.to_string(),
                })?;
            command
                .validate()
                .map_err(|message| ViewerError::Command { index, message })?;
            Ok(command)
        })
        .collect()
}

impl ViewerSession {
    /// Execute one command against the backend.
    ///
    /// # Errors
    /// Whatever the underlying operation reports; the session state stays
    /// consistent on failure.
    pub fn execute(
        &mut self,
        backend: &mut dyn RenderBackend,
        command: ViewerCommand,
    ) -> Result<(), ViewerError> {
        match command {
            ViewerCommand::BuildStructure(p) => {
                self.load_structure(backend, &p.content, p.format.as_str());
                Ok(())
            }
            ViewerCommand::LoadPdb(p) => {
                let content = fetch_pdb(&p.pdb_id)?;
                self.load_structure(backend, &content, "pdb");
                Ok(())
            }
            ViewerCommand::SetRepresentation(p) => {
                self.set_representation(
                    backend,
                    &p.style,
                    p.color_scheme.as_deref(),
                    p.opacity,
                );
                Ok(())
            }
            ViewerCommand::SetBackgroundColor(p) => {
                self.set_background(backend, &p.color);
                Ok(())
            }
            ViewerCommand::RotateCamera(p) => {
                self.rotate_camera(backend, p.axis, p.angle)
            }
            ViewerCommand::TranslateCamera(p) => {
                self.translate_camera(backend, DVec3::from_array(p.vector));
                Ok(())
            }
            ViewerCommand::Zoom(p) => {
                self.zoom(backend, p.factor);
                Ok(())
            }
            ViewerCommand::ResetView(ResetViewParams {}) => {
                self.reset_view(backend);
                Ok(())
            }
            ViewerCommand::ToggleAxes(p) => {
                self.set_axes(backend, p.show);
                Ok(())
            }
            ViewerCommand::ToggleUnitCell(p) => {
                if let Some(crystal) = p.crystal_data {
                    self.set_crystal(crystal);
                }
                self.set_unit_cell(backend, p.show)
            }
            ViewerCommand::SetView(p) => {
                self.set_view(backend, p.view_object);
                Ok(())
            }
            ViewerCommand::DisplayMessage(p) => {
                self.display_message(p.kind, &p.message);
                Ok(())
            }
        }
    }
}

/// Download a PDB entry, or explain why that is impossible.
#[cfg(feature = "fetch")]
fn fetch_pdb(pdb_id: &str) -> Result<String, ViewerError> {
    crate::fetch::fetch_structure(pdb_id)
}

#[cfg(not(feature = "fetch"))]
fn fetch_pdb(_pdb_id: &str) -> Result<String, ViewerError> {
    Err(ViewerError::Fetch(
        "built without the `fetch` feature".to_owned(),
    ))
}
