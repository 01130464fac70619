//! Axes and unit-cell overlay methods for [`ViewerSession`].
//!
//! The engine offers no per-overlay deletion, only `remove_all_shapes` /
//! `remove_all_labels`. Every toggle change therefore clears everything and
//! redraws whichever overlays are enabled from scratch; showing is a full
//! rebuild, hiding is an unconditional clear. Repeated toggling is
//! idempotent.

use glam::DVec3;

use super::ViewerSession;
use crate::cell::{dash, UnitCellWireframe};
use crate::error::ViewerError;
use crate::lattice::LatticeParameters;
use crate::render::{ArrowSpec, CylinderSpec, LabelSpec, RenderBackend};

impl ViewerSession {
    /// Show or hide the coordinate-axes overlay.
    pub fn set_axes(&mut self, backend: &mut dyn RenderBackend, show: bool) {
        self.axes_shown = show;
        self.redraw_overlays(backend);
        backend.render();
    }

    /// Show or hide the unit-cell wireframe overlay.
    ///
    /// Showing requires crystal data; without it the toggle is a logged
    /// no-op. A degenerate wireframe (non-finite vertices from impossible
    /// lattice angles) is never drawn. Hiding re-frames the camera on the
    /// model.
    ///
    /// # Errors
    /// [`ViewerError::DegenerateCell`] when the lattice parameters have no
    /// consistent 3D realization; the overlay stays hidden.
    pub fn set_unit_cell(
        &mut self,
        backend: &mut dyn RenderBackend,
        show: bool,
    ) -> Result<(), ViewerError> {
        if show {
            let Some(crystal) = self.crystal else {
                log::warn!("cannot show unit cell: no crystal data");
                return Ok(());
            };
            if UnitCellWireframe::from_lattice(&crystal).is_degenerate() {
                self.cell_shown = false;
                self.redraw_overlays(backend);
                backend.render();
                return Err(ViewerError::DegenerateCell);
            }
            self.cell_shown = true;
        } else {
            self.cell_shown = false;
        }

        self.redraw_overlays(backend);
        if !show {
            if let Some(model) = self.model {
                backend.zoom_to(model);
            }
        }
        backend.render();
        Ok(())
    }

    /// Clear all shapes and labels, then draw every enabled overlay.
    pub(super) fn redraw_overlays(&self, backend: &mut dyn RenderBackend) {
        backend.remove_all_shapes();
        backend.remove_all_labels();
        if self.axes_shown {
            self.draw_axes(backend);
        }
        if self.cell_shown {
            if let Some(crystal) = &self.crystal {
                self.draw_unit_cell(backend, crystal);
            }
        }
    }

    /// Draw X/Y/Z arrows from the world origin with matching labels.
    fn draw_axes(&self, backend: &mut dyn RenderBackend) {
        let axes = &self.options().overlay.axes;
        for (text, color, direction) in [
            ("X", "red", DVec3::X),
            ("Y", "green", DVec3::Y),
            ("Z", "blue", DVec3::Z),
        ] {
            let _ = backend.add_arrow(&ArrowSpec {
                start: DVec3::ZERO,
                end: direction * axes.length,
                radius: axes.radius,
                color: color.to_owned(),
                head_ratio: axes.head_ratio,
                mid: 1.0,
            });
            let _ = backend.add_label(
                text,
                &LabelSpec {
                    position: direction * (axes.length + axes.label_offset),
                    font_color: color.to_owned(),
                    font_size: axes.font_size,
                    show_background: false,
                    background_color: None,
                },
            );
        }
    }

    /// Draw the unit-cell wireframe as dashed cylinder runs.
    ///
    /// Callers have already ruled out degeneracy; a non-finite wireframe
    /// reaching this point would be skipped by the gate in
    /// [`set_unit_cell`](Self::set_unit_cell).
    fn draw_unit_cell(
        &self,
        backend: &mut dyn RenderBackend,
        crystal: &LatticeParameters,
    ) {
        let cell = &self.options().overlay.unit_cell;
        let wireframe = UnitCellWireframe::from_lattice(crystal);
        if wireframe.is_degenerate() {
            log::warn!("skipping degenerate unit cell: {crystal:?}");
            return;
        }
        for (start, end) in wireframe.edges() {
            for (p1, p2) in dash::dash_segments(
                start,
                end,
                cell.segments,
                cell.dash_fraction,
            ) {
                let _ = backend.add_cylinder(&CylinderSpec {
                    start: p1,
                    end: p2,
                    radius: cell.radius,
                    color: cell.color.clone(),
                    opacity: cell.opacity,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingBackend;

    const PDB: &str = "CRYST1    5.000    5.000    5.000  90.00  90.00  90.00\nATOM      1  N   ALA A   1\n";

    // gamma = 0 divides by zero in the basis derivation.
    const DEGENERATE_PDB: &str =
        "CRYST1    5.000    5.000    5.000  90.00  90.00   0.00\nATOM      1\n";

    fn loaded_session(backend: &mut RecordingBackend) -> ViewerSession {
        let mut session = ViewerSession::default();
        session.load_structure(backend, PDB, "pdb");
        session
    }

    #[test]
    fn axes_draw_three_arrows_and_labels() {
        let mut backend = RecordingBackend::new();
        let mut session = loaded_session(&mut backend);
        session.set_axes(&mut backend, true);

        let arrows = backend.arrows();
        assert_eq!(arrows.len(), 3);
        assert_eq!(arrows[0].color, "red");
        assert_eq!(arrows[0].end, DVec3::new(2.5, 0.0, 0.0));
        assert_eq!(arrows[0].mid, 1.0);

        let labels = backend.labels();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0].text, "X");
        assert_eq!(labels[2].spec.position, DVec3::new(0.0, 0.0, 2.8));
        assert!(!labels[0].spec.show_background);

        session.set_axes(&mut backend, false);
        assert_eq!(backend.shape_count(), 0);
        assert!(backend.labels().is_empty());
    }

    #[test]
    fn unit_cell_draws_120_dash_cylinders() {
        let mut backend = RecordingBackend::new();
        let mut session = loaded_session(&mut backend);
        session.set_unit_cell(&mut backend, true).unwrap();

        let cylinders = backend.cylinders();
        assert_eq!(cylinders.len(), 120);
        assert_eq!(cylinders[0].color, "magenta");
        assert_eq!(cylinders[0].radius, 0.05);
        assert_eq!(cylinders[0].opacity, 0.8);
        assert!(session.cell_shown());
    }

    #[test]
    fn hiding_the_cell_clears_and_reframes() {
        let mut backend = RecordingBackend::new();
        let mut session = loaded_session(&mut backend);
        session.set_unit_cell(&mut backend, true).unwrap();
        session.set_unit_cell(&mut backend, false).unwrap();

        assert_eq!(backend.shape_count(), 0);
        assert!(!session.cell_shown());
        assert_eq!(backend.zoomed_to(), session.model());
    }

    #[test]
    fn repeated_toggling_is_idempotent() {
        let mut backend = RecordingBackend::new();
        let mut session = loaded_session(&mut backend);
        session.set_unit_cell(&mut backend, true).unwrap();
        session.set_unit_cell(&mut backend, true).unwrap();
        assert_eq!(backend.cylinders().len(), 120);

        session.set_axes(&mut backend, true);
        session.set_axes(&mut backend, true);
        assert_eq!(backend.arrows().len(), 3);
        // The cell overlay survives the axes toggle.
        assert_eq!(backend.cylinders().len(), 120);
    }

    #[test]
    fn toggle_without_crystal_data_is_a_no_op() {
        let mut backend = RecordingBackend::new();
        let mut session = ViewerSession::default();
        session.load_structure(&mut backend, "ATOM      1\n", "pdb");
        session.set_unit_cell(&mut backend, true).unwrap();
        assert!(!session.cell_shown());
        assert_eq!(backend.shape_count(), 0);
    }

    #[test]
    fn degenerate_cell_is_never_drawn() {
        let mut backend = RecordingBackend::new();
        let mut session = ViewerSession::default();
        session.load_structure(&mut backend, DEGENERATE_PDB, "pdb");
        assert!(session.crystal().is_some());

        let result = session.set_unit_cell(&mut backend, true);
        assert!(matches!(result, Err(ViewerError::DegenerateCell)));
        assert!(!session.cell_shown());
        assert_eq!(backend.shape_count(), 0);
    }

    #[test]
    fn load_redraws_enabled_overlays() {
        let mut backend = RecordingBackend::new();
        let mut session = loaded_session(&mut backend);
        session.set_axes(&mut backend, true);
        session.set_unit_cell(&mut backend, true).unwrap();

        session.load_structure(&mut backend, PDB, "pdb");
        assert_eq!(backend.arrows().len(), 3);
        assert_eq!(backend.cylinders().len(), 120);
    }
}
