//! Face alignment: placing face-local 2D coordinates into 3D model space.
//!
//! Every face carries a fixed rotation taking the canonical front-face
//! frame onto its own plane. The plan view replaces the side faces'
//! placement with a tilt about the last-layer boundary before that
//! rotation is applied.

use super::{CubeGeometry, Face, ViewKind};
use crate::math::transform::{rotate, translate, Axis, Rotation};
use crate::math::Point3;

/// Outward tilt of the side faces in the plan view, in degrees.
pub const TILT_ANGLE: f64 = 34.0;

static ONTO_U: [Rotation; 1] = [Rotation::new(Axis::X, -90.0)];
static ONTO_R: [Rotation; 1] = [Rotation::new(Axis::Y, 90.0)];
static ONTO_D: [Rotation; 1] = [Rotation::new(Axis::X, 90.0)];
static ONTO_L: [Rotation; 1] = [Rotation::new(Axis::Y, -90.0)];
static ONTO_B: [Rotation; 1] = [Rotation::new(Axis::Y, 180.0)];

/// Canonical alignment rotation for each face. F is the identity frame.
static ROTATION_ONTO_FACE: [&[Rotation]; 6] = [&ONTO_U, &ONTO_R, &[], &ONTO_D, &ONTO_L, &ONTO_B];

/// The fixed rotation from the front-face frame onto `face`.
#[must_use]
pub fn rotation_onto_face(face: Face) -> &'static [Rotation] {
    ROTATION_ONTO_FACE[face.index()]
}

impl CubeGeometry {
    /// Places a face-local `(u, v)` coordinate (`0 ≤ u,v ≤ N`) into 3D
    /// model space, before the view rotation.
    pub(crate) fn align_to_face(&self, face: Face, u: f64, v: f64) -> Point3 {
        let half = self.half();
        let tilted = self.view == ViewKind::Plan && face != Face::U && face != Face::D;
        let base = if tilted {
            // Tilt about the last-layer boundary: the v = N row stays on
            // the U edge while the rest of the face splays outward.
            let p = Point3::new(u - half, v - f64::from(self.dimension()), 0.0);
            let p = rotate(&p, &[Rotation::new(Axis::X, -TILT_ANGLE)]);
            translate(&p, 0.0, half, half)
        } else {
            Point3::new(u - half, v - half, half)
        };
        rotate(&base, rotation_onto_face(face))
    }
}
