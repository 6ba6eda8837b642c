//! The cube body's outer outline in the current orientation.
//!
//! The normal view hulls the projected cube corners; the plan view walks
//! the four tilted side faces and stitches neighboring outlines with line
//! intersections, since tilting moves each face's edge independently and
//! adjacent edges no longer meet at a shared 3D corner.

use super::{CubeGeometry, Face, ViewKind, EXTRA_MARGIN, STICKER_MARGIN};
use crate::error::{GeometryError, Result};
use crate::math::hull_2d::convex_hull;
use crate::math::intersect_2d::line_intersection;
use crate::math::transform::{project, rotate, scale};
use crate::math::{Point2, Point3};
use crate::path::RoundedVertex;

/// How far below the layer boundary the plan-view side faces reach.
pub const BOTTOM_EXTRA_MARGIN: f64 = 0.06;

/// Sideways overhang of the plan-view side faces.
pub const SIDE_EXTRA_MARGIN: f64 = 0.0;

/// Corner rounding at the plan-view base corners.
pub const BASE_ROUND: f64 = 0.05;

/// The 8 cube corners in URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB order,
/// at ±0.5 on each axis.
static UNIT_CORNERS: [[f64; 3]; 8] = [
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
];

/// Screen-space outline of one tilted side face.
struct SideOutline {
    right_base: Point3,
    right_tip: Point3,
    left_tip: Point3,
    left_base: Point3,
}

impl CubeGeometry {
    /// The body outline as rounded vertices, wound counter-clockwise.
    ///
    /// # Errors
    ///
    /// In plan view, returns [`GeometryError::ParallelLines`] when two
    /// neighboring side-face edges project to parallel lines (cannot
    /// happen for sane view rotations and distances).
    pub fn silhouette(&self, distance: f64) -> Result<Vec<RoundedVertex>> {
        match self.view() {
            ViewKind::Normal => Ok(self.hull_silhouette(distance)),
            ViewKind::Plan => self.plan_silhouette(distance),
        }
    }

    fn hull_silhouette(&self, distance: f64) -> Vec<RoundedVertex> {
        let n = f64::from(self.dimension());
        let body_scale = n + 2.0 * EXTRA_MARGIN;
        let corners: Vec<Point3> = UNIT_CORNERS
            .iter()
            .map(|&[x, y, z]| {
                let scaled = scale(&Point3::new(x, y, z), body_scale, None);
                rotate(&scaled, self.rotations())
            })
            .collect();
        let projected: Vec<Point2> = corners.iter().map(|c| project(c, distance)).collect();

        convex_hull(&projected)
            .into_iter()
            .map(|idx| RoundedVertex::symmetric(corners[idx], STICKER_MARGIN + EXTRA_MARGIN))
            .collect()
    }

    fn plan_silhouette(&self, distance: f64) -> Result<Vec<RoundedVertex>> {
        let n = f64::from(self.dimension());
        let tip_v = n - 1.0 - BOTTOM_EXTRA_MARGIN;
        let outlines: Vec<SideOutline> = Face::SIDES
            .iter()
            .map(|&face| {
                let place = |u, v| rotate(&self.align_to_face(face, u, v), self.rotations());
                SideOutline {
                    right_base: place(n + SIDE_EXTRA_MARGIN, n),
                    right_tip: place(n + SIDE_EXTRA_MARGIN, tip_v),
                    left_tip: place(-SIDE_EXTRA_MARGIN, tip_v),
                    left_base: place(-SIDE_EXTRA_MARGIN, n),
                }
            })
            .collect();

        let mut vertices = Vec::with_capacity(3 * outlines.len());
        for (k, current) in outlines.iter().enumerate() {
            // The base corner shared with the previous face is not a 3D
            // vertex: intersect the neighbors' nearest edges in screen
            // space and lift the crossing back onto the z = 0 plane,
            // which projection maps through unchanged.
            let previous = &outlines[(k + outlines.len() - 1) % outlines.len()];
            let left_edge = [
                project(&previous.left_base, distance),
                project(&previous.left_tip, distance),
            ];
            let right_edge = [
                project(&current.right_base, distance),
                project(&current.right_tip, distance),
            ];
            let corner = line_intersection(&left_edge, &right_edge)
                .ok_or(GeometryError::ParallelLines)?;

            vertices.push(RoundedVertex::symmetric(
                Point3::new(corner.x, corner.y, 0.0),
                BASE_ROUND,
            ));
            vertices.push(RoundedVertex {
                vertex: current.right_tip,
                prev_cutoff: BOTTOM_EXTRA_MARGIN + STICKER_MARGIN,
                next_cutoff: SIDE_EXTRA_MARGIN + STICKER_MARGIN,
            });
            vertices.push(RoundedVertex {
                vertex: current.left_tip,
                prev_cutoff: SIDE_EXTRA_MARGIN + STICKER_MARGIN,
                next_cutoff: BOTTOM_EXTRA_MARGIN + STICKER_MARGIN,
            });
        }
        Ok(vertices)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::transform::{Axis, Rotation};

    fn cube(view: ViewKind) -> CubeGeometry {
        CubeGeometry::new(3, view).unwrap()
    }

    #[test]
    fn identity_silhouette_is_the_front_square() {
        let c = cube(ViewKind::Normal);
        let outline = c.silhouette(5.0).unwrap();
        assert_eq!(outline.len(), 4);
        for v in &outline {
            // Only the near corners survive the hull.
            assert!(v.vertex.z > 0.0);
            assert_relative_eq!(
                v.prev_cutoff,
                STICKER_MARGIN + EXTRA_MARGIN,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn oblique_silhouette_has_six_corners() {
        let mut c = cube(ViewKind::Normal);
        c.rotate(&[Rotation::new(Axis::Y, 30.0), Rotation::new(Axis::X, -25.0)]);
        let outline = c.silhouette(5.0).unwrap();
        assert_eq!(outline.len(), 6);
    }

    #[test]
    fn silhouette_extends_past_the_facelet_grid() {
        let c = cube(ViewKind::Normal);
        let outline = c.silhouette(5.0).unwrap();
        let half = 1.5 + EXTRA_MARGIN;
        for v in &outline {
            assert_relative_eq!(v.vertex.x.abs(), half, epsilon = 1e-12);
            assert_relative_eq!(v.vertex.y.abs(), half, epsilon = 1e-12);
        }
    }

    #[test]
    fn plan_silhouette_walks_four_faces() {
        let c = cube(ViewKind::Plan);
        let outline = c.silhouette(5.0).unwrap();
        assert_eq!(outline.len(), 12);
        // base, right tip, left tip pattern repeats per side face
        for face in 0..4 {
            let base = &outline[face * 3];
            assert_relative_eq!(base.prev_cutoff, BASE_ROUND, epsilon = 1e-12);
            let tip = &outline[face * 3 + 1];
            assert_relative_eq!(
                tip.prev_cutoff,
                BOTTOM_EXTRA_MARGIN + STICKER_MARGIN,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn plan_base_corner_meets_the_shared_cube_corner() {
        // With a zero side margin the stitched intersection lands exactly
        // on the projection of the shared top corner.
        let c = cube(ViewKind::Plan);
        let outline = c.silhouette(5.0).unwrap();
        // First side face is R, its previous neighbor is B: shared top
        // corner (1.5, 1.5, -1.5).
        let expected = project(&Point3::new(1.5, 1.5, -1.5), 5.0);
        let corner = project(&outline[0].vertex, 5.0);
        assert_relative_eq!(corner.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(corner.y, expected.y, epsilon = 1e-9);
    }
}
