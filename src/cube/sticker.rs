//! Sticker quads, centers, facing tests and arrow bend points.

use super::{CubeGeometry, Face, Facelet, STICKER_MARGIN};
use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::on_right_side;
use crate::math::transform::{
    axis_of_max_abs, coordinate, project, remaining_axis, rotate, set_coordinate,
};
use crate::math::Point3;

impl CubeGeometry {
    /// The four margined corner points of a facelet's sticker, in model
    /// space with the view rotation applied. Corners run bottom-left,
    /// top-left, top-right, bottom-right in face-local orientation.
    ///
    /// # Errors
    ///
    /// Returns a range error for indices outside the cube dimension.
    pub fn sticker(&self, facelet: Facelet) -> Result<[Point3; 4]> {
        facelet.validate(self.dimension())?;
        Ok(self.sticker_points(facelet))
    }

    /// Center of a facelet's sticker in model space, view rotation applied.
    ///
    /// # Errors
    ///
    /// Returns a range error for indices outside the cube dimension.
    pub fn sticker_center(&self, facelet: Facelet) -> Result<Point3> {
        facelet.validate(self.dimension())?;
        Ok(rotate(&self.unrotated_center(facelet), self.rotations()))
    }

    /// Whether a face points toward the viewer at the given projection
    /// distance.
    ///
    /// Projects the first three corners of the face's (0, 0) sticker and
    /// tests their winding; the positive orientation convention is shared
    /// with the silhouette hull.
    #[must_use]
    pub fn facing_front(&self, face: Face, distance: f64) -> bool {
        let sticker = self.sticker_points(Facelet::new(face, 0, 0));
        let a = project(&sticker[0], distance);
        let b = project(&sticker[1], distance);
        let c = project(&sticker[2], distance);
        on_right_side(&[a, b], &c)
    }

    /// Where an arrow crossing from `a`'s face to `b`'s face bends.
    ///
    /// The bend sits exactly on the shared cube edge: its coordinate along
    /// `a`'s face normal is `a`'s, along `b`'s face normal it is `b`'s, and
    /// along the edge it is the similar-triangle crossing of the two
    /// unfolded sticker centers.
    ///
    /// # Errors
    ///
    /// Returns a range error for invalid indices and a degeneracy error
    /// when the two facelets sit on the same or opposite faces.
    pub fn bent_point(&self, a: Facelet, b: Facelet) -> Result<Point3> {
        a.validate(self.dimension())?;
        b.validate(self.dimension())?;
        let p1 = self.unrotated_center(a);
        let p2 = self.unrotated_center(b);
        let s = axis_of_max_abs(&p1);
        let t = axis_of_max_abs(&p2);
        if s == t {
            return Err(GeometryError::Degenerate(format!(
                "facelets on faces {:?} and {:?} do not share a cube edge",
                a.face, b.face
            ))
            .into());
        }
        let u = remaining_axis(s, t);
        let wa = (coordinate(&p2, t) - coordinate(&p1, t)).abs();
        let wb = (coordinate(&p1, s) - coordinate(&p2, s)).abs();

        let mut bent = Point3::origin();
        set_coordinate(&mut bent, s, coordinate(&p1, s));
        set_coordinate(&mut bent, t, coordinate(&p2, t));
        set_coordinate(
            &mut bent,
            u,
            (wb * coordinate(&p1, u) + wa * coordinate(&p2, u)) / (wa + wb),
        );
        Ok(rotate(&bent, self.rotations()))
    }

    fn sticker_points(&self, facelet: Facelet) -> [Point3; 4] {
        let m = STICKER_MARGIN;
        let i = f64::from(facelet.i);
        let j = f64::from(facelet.j);
        let corners = [
            (m + i, m + j),
            (m + i, 1.0 - m + j),
            (1.0 - m + i, 1.0 - m + j),
            (1.0 - m + i, m + j),
        ];
        corners.map(|(u, v)| {
            rotate(
                &self.align_to_face(facelet.face, u, v),
                self.rotations(),
            )
        })
    }

    pub(crate) fn unrotated_center(&self, facelet: Facelet) -> Point3 {
        self.align_to_face(
            facelet.face,
            0.5 + f64::from(facelet.i),
            0.5 + f64::from(facelet.j),
        )
    }
}
