//! Polyline geometry for annotation arrows across sticker centers.

use super::{CubeGeometry, Facelet, STICKER_MARGIN};
use crate::error::{GeometryError, Result};
use crate::path::RoundedVertex;

/// An arrow running through a sequence of sticker centers.
///
/// Consecutive facelets on different faces get a bend point inserted at
/// the shared hull edge, so the arrow follows the cube surface instead of
/// cutting a chord through the body.
#[derive(Debug, Clone)]
pub struct GeometricArrow {
    facelets: Vec<Facelet>,
    extend_start: f64,
    extend_end: f64,
}

impl GeometricArrow {
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] for fewer than two
    /// facelets.
    pub fn new(facelets: Vec<Facelet>, extend_start: f64, extend_end: f64) -> Result<Self> {
        if facelets.len() < 2 {
            return Err(GeometryError::TooFewVertices {
                min: 2,
                got: facelets.len(),
            }
            .into());
        }
        Ok(Self {
            facelets,
            extend_start,
            extend_end,
        })
    }

    #[must_use]
    pub fn facelets(&self) -> &[Facelet] {
        &self.facelets
    }

    /// Rounded vertices for the arrow's open path on the given cube.
    ///
    /// Sticker-center vertices are cut back by half a cell minus the
    /// sticker margin so the shaft starts and ends at sticker edges;
    /// endpoint extensions push past that by `extend_*` cells.
    ///
    /// # Errors
    ///
    /// Propagates facelet validation and bend-point failures.
    pub fn vertices(&self, cube: &CubeGeometry) -> Result<Vec<RoundedVertex>> {
        let interior_cutoff = 0.5 - STICKER_MARGIN;
        let last = self.facelets.len() - 1;

        let mut vertices = Vec::with_capacity(2 * self.facelets.len() - 1);
        for (k, facelet) in self.facelets.iter().enumerate() {
            if k > 0 && self.facelets[k - 1].face != facelet.face {
                vertices.push(RoundedVertex::symmetric(
                    cube.bent_point(self.facelets[k - 1], *facelet)?,
                    STICKER_MARGIN,
                ));
            }
            let center = cube.sticker_center(*facelet)?;
            let mut vertex = RoundedVertex::symmetric(center, interior_cutoff);
            if k == 0 {
                vertex.next_cutoff = -self.extend_start;
            }
            if k == last {
                vertex.prev_cutoff = -self.extend_end;
            }
            vertices.push(vertex);
        }
        Ok(vertices)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::cube::{CubeGeometry, Face, ViewKind};

    fn cube() -> CubeGeometry {
        CubeGeometry::new(3, ViewKind::Normal).unwrap()
    }

    #[test]
    fn rejects_single_facelet() {
        let err = GeometricArrow::new(vec![Facelet::new(Face::U, 0, 0)], 0.0, 0.0);
        assert!(err.is_err());
    }

    #[test]
    fn straight_arrow_has_no_bend() {
        let arrow = GeometricArrow::new(
            vec![Facelet::new(Face::F, 0, 1), Facelet::new(Face::F, 2, 1)],
            0.0,
            0.0,
        )
        .unwrap();
        let vertices = arrow.vertices(&cube()).unwrap();
        assert_eq!(vertices.len(), 2);
        // Endpoints with no extension sit exactly at the sticker centers.
        assert_relative_eq!(vertices[0].vertex.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(vertices[0].vertex.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(vertices[0].next_cutoff, 0.0, epsilon = 1e-12);
        assert_relative_eq!(vertices[1].prev_cutoff, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn face_crossing_inserts_a_bend() {
        let arrow = GeometricArrow::new(
            vec![Facelet::new(Face::F, 2, 1), Facelet::new(Face::R, 0, 1)],
            0.0,
            0.0,
        )
        .unwrap();
        let vertices = arrow.vertices(&cube()).unwrap();
        assert_eq!(vertices.len(), 3);
        // Bend sits on the shared F/R hull edge.
        assert_relative_eq!(vertices[1].vertex.x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(vertices[1].vertex.z, 1.5, epsilon = 1e-12);
        assert_relative_eq!(vertices[1].prev_cutoff, STICKER_MARGIN, epsilon = 1e-12);
    }

    #[test]
    fn extensions_land_on_the_endpoint_cutoffs() {
        let arrow = GeometricArrow::new(
            vec![Facelet::new(Face::U, 0, 0), Facelet::new(Face::U, 2, 2)],
            0.3,
            0.1,
        )
        .unwrap();
        let vertices = arrow.vertices(&cube()).unwrap();
        assert_relative_eq!(vertices[0].next_cutoff, -0.3, epsilon = 1e-12);
        assert_relative_eq!(vertices[1].prev_cutoff, -0.1, epsilon = 1e-12);
    }

    #[test]
    fn interior_vertices_are_cut_to_sticker_edges() {
        let arrow = GeometricArrow::new(
            vec![
                Facelet::new(Face::U, 0, 0),
                Facelet::new(Face::U, 2, 0),
                Facelet::new(Face::U, 2, 2),
            ],
            0.0,
            0.0,
        )
        .unwrap();
        let vertices = arrow.vertices(&cube()).unwrap();
        assert_eq!(vertices.len(), 3);
        assert_relative_eq!(
            vertices[1].prev_cutoff,
            0.5 - STICKER_MARGIN,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            vertices[1].next_cutoff,
            0.5 - STICKER_MARGIN,
            epsilon = 1e-12
        );
    }
}
