//! Serializable camera view state and view math.
//!
//! [`ViewState`] mirrors the rendering engine's view object (rotation
//! quaternion, translation, zoom) so views can round-trip through the
//! command layer. The math here produces crystal-face presets and applies
//! world-frame rotations; the engine itself does the actual camera work.

use glam::{DQuat, DVec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// Collinearity threshold for the face-preset axis derivation.
const AXIS_EPSILON: f64 = 1e-6;

/// Rotation quaternion in the engine's `{x, y, z, w}` wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Quaternion {
    /// Vector x component.
    pub x: f64,
    /// Vector y component.
    pub y: f64,
    /// Vector z component.
    pub z: f64,
    /// Scalar component.
    pub w: f64,
}

impl From<DQuat> for Quaternion {
    fn from(q: DQuat) -> Self {
        Self { x: q.x, y: q.y, z: q.z, w: q.w }
    }
}

impl From<Quaternion> for DQuat {
    fn from(q: Quaternion) -> Self {
        Self::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

/// Camera translation in the engine's `{x, y, z}` wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Translation {
    /// X offset.
    pub x: f64,
    /// Y offset.
    pub y: f64,
    /// Z offset.
    pub z: f64,
}

impl From<DVec3> for Translation {
    fn from(v: DVec3) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

impl From<Translation> for DVec3 {
    fn from(t: Translation) -> Self {
        Self::new(t.x, t.y, t.z)
    }
}

/// The engine's serializable camera state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ViewState {
    /// Camera orientation.
    pub quaternion: Quaternion,
    /// Camera translation.
    pub translation: Translation,
    /// Zoom level (1.0 is the framing baseline).
    pub zoom: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            quaternion: DQuat::IDENTITY.into(),
            translation: DVec3::ZERO.into(),
            zoom: 1.0,
        }
    }
}

/// Axis of a camera rotation: a principal axis by name, or an arbitrary
/// vector. Deserializes from either `"x"`/`"y"`/`"z"` or `[x, y, z]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RotationAxis {
    /// Named principal axis.
    Principal(PrincipalAxis),
    /// Arbitrary axis vector; normalized before use.
    Vector([f64; 3]),
}

/// The three principal axes, by wire name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalAxis {
    /// The +X axis.
    X,
    /// The +Y axis.
    Y,
    /// The +Z axis.
    Z,
}

impl RotationAxis {
    /// Resolve to a unit vector.
    ///
    /// # Errors
    /// [`ViewerError::ZeroRotationAxis`] when the vector form is (near)
    /// zero-length.
    pub fn unit_vector(self) -> Result<DVec3, ViewerError> {
        match self {
            Self::Principal(PrincipalAxis::X) => Ok(DVec3::X),
            Self::Principal(PrincipalAxis::Y) => Ok(DVec3::Y),
            Self::Principal(PrincipalAxis::Z) => Ok(DVec3::Z),
            Self::Vector(v) => {
                let v = DVec3::from_array(v);
                if v.length() < AXIS_EPSILON {
                    return Err(ViewerError::ZeroRotationAxis);
                }
                Ok(v.normalize())
            }
        }
    }
}

impl ViewState {
    /// View preset looking at a crystal face, for `face` in
    /// `"100"`, `"010"`, `"001"`, `"110"`, `"111"`.
    ///
    /// The rotation aligns the camera's default look direction `(0, 0, -1)`
    /// with the face normal, rotating about their cross product. When the
    /// two are collinear the axis degenerates: the parallel case is the
    /// identity, the antiparallel case a 180 degree turn about +Y.
    /// Translation is zero and zoom 1.0; framing stays with the engine.
    ///
    /// # Errors
    /// [`ViewerError::UnknownFace`] for any other face token.
    pub fn face_preset(face: &str) -> Result<Self, ViewerError> {
        let direction = match face {
            "100" => DVec3::new(1.0, 0.0, 0.0),
            "010" => DVec3::new(0.0, 1.0, 0.0),
            "001" => DVec3::new(0.0, 0.0, 1.0),
            "110" => DVec3::new(1.0, 1.0, 0.0),
            "111" => DVec3::new(1.0, 1.0, 1.0),
            other => return Err(ViewerError::UnknownFace(other.to_owned())),
        }
        .normalize();

        let default_look = DVec3::new(0.0, 0.0, -1.0);
        let axis = default_look.cross(direction);
        let quaternion = if axis.length() < AXIS_EPSILON {
            if default_look.dot(direction) > 0.999 {
                DQuat::IDENTITY
            } else {
                DQuat::from_rotation_y(std::f64::consts::PI)
            }
        } else {
            let angle = default_look.dot(direction).acos();
            DQuat::from_axis_angle(axis.normalize(), angle)
        };

        Ok(Self {
            quaternion: quaternion.into(),
            translation: DVec3::ZERO.into(),
            zoom: 1.0,
        })
    }

    /// Apply a world-frame rotation of `degrees` about `axis`:
    /// `new = rot(axis, angle) * prev`.
    ///
    /// # Errors
    /// [`ViewerError::ZeroRotationAxis`] for a zero axis vector.
    pub fn rotated(
        &self,
        axis: RotationAxis,
        degrees: f64,
    ) -> Result<Self, ViewerError> {
        let rot =
            DQuat::from_axis_angle(axis.unit_vector()?, degrees.to_radians());
        Ok(Self {
            quaternion: (rot * DQuat::from(self.quaternion)).into(),
            ..*self
        })
    }

    /// Offset the camera translation by `vector`.
    #[must_use]
    pub fn translated(&self, vector: DVec3) -> Self {
        Self {
            translation: (DVec3::from(self.translation) + vector).into(),
            ..*self
        }
    }

    /// Scale the zoom level by `factor` (>1 zooms in).
    #[must_use]
    pub fn zoomed(&self, factor: f64) -> Self {
        Self { zoom: self.zoom * factor, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-6;

    fn assert_quat(q: Quaternion, expected: [f64; 4]) {
        assert!((q.x - expected[0]).abs() < TOL, "x: {q:?}");
        assert!((q.y - expected[1]).abs() < TOL, "y: {q:?}");
        assert!((q.z - expected[2]).abs() < TOL, "z: {q:?}");
        assert!((q.w - expected[3]).abs() < TOL, "w: {q:?}");
    }

    fn rotates_look_onto(view: &ViewState, direction: DVec3) -> bool {
        let look = DQuat::from(view.quaternion) * DVec3::new(0.0, 0.0, -1.0);
        (look - direction.normalize()).length() < TOL
    }

    #[test]
    fn face_presets_align_the_look_direction() {
        for face in ["100", "010", "110", "111"] {
            let view = ViewState::face_preset(face).unwrap();
            let normal = DVec3::new(
                f64::from(face.as_bytes()[0] - b'0'),
                f64::from(face.as_bytes()[1] - b'0'),
                f64::from(face.as_bytes()[2] - b'0'),
            );
            assert!(rotates_look_onto(&view, normal), "face {face}");
            let t = view.translation;
            assert!(t.x.abs() < TOL && t.y.abs() < TOL && t.z.abs() < TOL);
            assert!((view.zoom - 1.0).abs() < TOL);
        }
    }

    #[test]
    fn antiparallel_face_turns_about_y() {
        // (0,0,1) is opposite the default look; the convention is a half
        // turn about +Y.
        let view = ViewState::face_preset("001").unwrap();
        assert_quat(view.quaternion, [0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn unknown_face_is_rejected() {
        assert!(matches!(
            ViewState::face_preset("011"),
            Err(ViewerError::UnknownFace(_))
        ));
    }

    #[test]
    fn principal_axis_rotations_from_identity() {
        let half = std::f64::consts::FRAC_1_SQRT_2;
        let v = ViewState::default();
        let y = v.rotated(RotationAxis::Principal(PrincipalAxis::Y), 90.0);
        assert_quat(y.unwrap().quaternion, [0.0, half, 0.0, half]);
        let x = v.rotated(RotationAxis::Principal(PrincipalAxis::X), 90.0);
        assert_quat(x.unwrap().quaternion, [half, 0.0, 0.0, half]);
        let z = v.rotated(RotationAxis::Principal(PrincipalAxis::Z), 90.0);
        assert_quat(z.unwrap().quaternion, [0.0, 0.0, half, half]);
    }

    #[test]
    fn arbitrary_axis_rotation() {
        let v = ViewState::default();
        let rotated =
            v.rotated(RotationAxis::Vector([1.0, 1.0, 1.0]), 60.0).unwrap();
        // sin(30)/sqrt(3) in each vector slot, cos(30) scalar.
        let s = 0.5 / 3.0_f64.sqrt();
        assert_quat(rotated.quaternion, [s, s, s, 0.75_f64.sqrt()]);
    }

    #[test]
    fn world_frame_composition_order() {
        // Rotating an already-rotated view about a world axis premultiplies.
        let base = ViewState::default()
            .rotated(RotationAxis::Principal(PrincipalAxis::X), 90.0)
            .unwrap();
        let composed =
            base.rotated(RotationAxis::Principal(PrincipalAxis::Y), 90.0).unwrap();
        let expected = DQuat::from_rotation_y(std::f64::consts::FRAC_PI_2)
            * DQuat::from_rotation_x(std::f64::consts::FRAC_PI_2);
        assert_quat(composed.quaternion, [
            expected.x, expected.y, expected.z, expected.w,
        ]);
    }

    #[test]
    fn zero_axis_is_rejected() {
        let v = ViewState::default();
        assert!(matches!(
            v.rotated(RotationAxis::Vector([0.0, 0.0, 0.0]), 45.0),
            Err(ViewerError::ZeroRotationAxis)
        ));
    }

    #[test]
    fn translate_and_zoom_helpers() {
        let v = ViewState::default()
            .translated(DVec3::new(1.0, 2.0, 3.0))
            .translated(DVec3::new(1.0, 0.0, 0.0))
            .zoomed(2.0)
            .zoomed(0.5);
        assert!((DVec3::from(v.translation) - DVec3::new(2.0, 2.0, 3.0))
            .length()
            < TOL);
        assert!((v.zoom - 1.0).abs() < TOL);
    }

    #[test]
    fn view_state_round_trips_through_json() {
        let v = ViewState::face_preset("111").unwrap();
        let json = serde_json::to_string(&v).unwrap();
        let back: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }

    #[test]
    fn rotation_axis_wire_forms() {
        let named: RotationAxis = serde_json::from_str("\"y\"").unwrap();
        assert_eq!(named, RotationAxis::Principal(PrincipalAxis::Y));
        let vector: RotationAxis =
            serde_json::from_str("[0.0, 1.0, 0.0]").unwrap();
        assert_eq!(vector, RotationAxis::Vector([0.0, 1.0, 0.0]));
    }
}
