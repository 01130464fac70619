//! Hover-label methods for [`ViewerSession`].
//!
//! The engine reports atom hover enter/leave events; the session answers
//! with a transient label at the atom position. Label colors follow the
//! current background so the text stays readable on dark themes.

use glam::DVec3;

use super::ViewerSession;
use crate::render::{LabelSpec, RenderBackend};

/// Hover font size; smaller than overlay labels.
const HOVER_FONT_SIZE: f64 = 12.0;

/// An atom under the cursor, as reported by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverAtom {
    /// Element symbol (e.g. `"C"`).
    pub elem: String,
    /// Atom name within the residue (e.g. `"CA"`).
    pub name: String,
    /// Residue sequence number, when the atom belongs to one.
    pub resi: Option<i32>,
    /// World-space atom position.
    pub position: DVec3,
}

impl HoverAtom {
    /// Label text: `"<elem> <name>"`, with `.<resi>` appended when known.
    fn label_text(&self) -> String {
        match self.resi {
            Some(resi) => format!("{} {}.{resi}", self.elem, self.name),
            None => format!("{} {}", self.elem, self.name),
        }
    }
}

/// Whether a background color counts as dark for label contrast.
///
/// CSS `black` and any `#rrggbb` color of low relative luminance are dark;
/// unknown color names fall back to light.
fn is_dark_background(color: &str) -> bool {
    if color.eq_ignore_ascii_case("black") {
        return true;
    }
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    if hex.len() != 6 {
        return false;
    }
    let Ok(rgb) = u32::from_str_radix(hex, 16) else {
        return false;
    };
    let r = f64::from((rgb >> 16) & 0xff);
    let g = f64::from((rgb >> 8) & 0xff);
    let b = f64::from(rgb & 0xff);
    // Rec. 709 luma, against the midpoint of the 8-bit range.
    0.2126 * r + 0.7152 * g + 0.0722 * b < 127.5
}

impl ViewerSession {
    /// Place a transient label for the hovered atom.
    pub fn hover_enter(
        &self,
        backend: &mut dyn RenderBackend,
        atom: &HoverAtom,
    ) {
        let dark = is_dark_background(self.background());
        let _ = backend.add_label(
            &atom.label_text(),
            &LabelSpec {
                position: atom.position,
                font_color: if dark { "white" } else { "black" }.to_owned(),
                font_size: HOVER_FONT_SIZE,
                show_background: true,
                background_color: Some(
                    if dark {
                        "rgba(50,50,50,0.8)"
                    } else {
                        "rgba(220,220,220,0.8)"
                    }
                    .to_owned(),
                ),
            },
        );
        backend.render();
    }

    /// Remove hover labels. The engine offers no per-label deletion, so
    /// this clears all labels, overlay labels included; re-showing the
    /// axes restores theirs.
    pub fn hover_leave(&self, backend: &mut dyn RenderBackend) {
        backend.remove_all_labels();
        backend.render();
    }
}
