use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::{angle_between, lerp};
use crate::math::transform::{move_toward, project};
use crate::math::{Point2, TOLERANCE};

use super::{PathSegment, RoundedVertex};

/// Composes a vertex list into a vector path whose corners are replaced
/// by circular-arc Bézier curves.
///
/// Retraction happens in 3D model space (so cutoff distances are uniform
/// across the cube surface); the retracted points are then projected and
/// the curve is fitted in 2D. Closed paths start at the last vertex's
/// curve exit so the path closes without a seam; open paths start and end
/// at the first and last vertex's retraction points, which is where arrow
/// extension amounts take effect.
#[derive(Debug)]
pub struct RoundedPath {
    vertices: Vec<RoundedVertex>,
    closed: bool,
    distance: f64,
}

/// Screen-space geometry of one rounded corner.
struct Corner {
    entry: Point2,
    exit: Point2,
    /// Control points when the corner is rounded; `None` keeps it sharp.
    curve: Option<(Point2, Point2)>,
}

impl RoundedPath {
    /// Creates a new path composition over `vertices`.
    #[must_use]
    pub fn new(vertices: Vec<RoundedVertex>, closed: bool, distance: f64) -> Self {
        Self {
            vertices,
            closed,
            distance,
        }
    }

    /// Executes the composition, producing an ordered segment list.
    ///
    /// # Errors
    ///
    /// Returns an error when fewer than 3 (closed) or 2 (open) vertices
    /// are provided.
    pub fn execute(&self) -> Result<Vec<PathSegment>> {
        if self.closed {
            self.compose_closed()
        } else {
            self.compose_open()
        }
    }

    fn compose_closed(&self) -> Result<Vec<PathSegment>> {
        let n = self.vertices.len();
        if n < 3 {
            return Err(GeometryError::TooFewVertices { min: 3, got: n }.into());
        }

        let corners: Vec<Corner> = (0..n).map(|i| self.corner(i)).collect();
        let start = corners[n - 1].exit;
        let mut segments = vec![PathSegment::MoveTo(start)];
        let mut cursor = start;

        for corner in &corners {
            if (corner.entry - cursor).norm() > TOLERANCE {
                segments.push(PathSegment::LineTo(corner.entry));
            }
            if let Some((control1, control2)) = corner.curve {
                segments.push(PathSegment::CurveTo {
                    control1,
                    control2,
                    end: corner.exit,
                });
            }
            cursor = corner.exit;
        }

        // The final connector lands on the start point; the closing
        // segment already draws it.
        if let Some(PathSegment::LineTo(p)) = segments.last() {
            if (*p - start).norm() < TOLERANCE {
                segments.pop();
            }
        }
        segments.push(PathSegment::Close);
        Ok(segments)
    }

    fn compose_open(&self) -> Result<Vec<PathSegment>> {
        let n = self.vertices.len();
        if n < 2 {
            return Err(GeometryError::TooFewVertices { min: 2, got: n }.into());
        }

        let first = &self.vertices[0];
        let last = &self.vertices[n - 1];
        let start = project(
            &move_toward(&first.vertex, &self.vertices[1].vertex, first.next_cutoff),
            self.distance,
        );
        let end = project(
            &move_toward(&last.vertex, &self.vertices[n - 2].vertex, last.prev_cutoff),
            self.distance,
        );

        let mut segments = vec![PathSegment::MoveTo(start)];
        let mut cursor = start;
        for i in 1..n - 1 {
            let corner = self.corner(i);
            if (corner.entry - cursor).norm() > TOLERANCE {
                segments.push(PathSegment::LineTo(corner.entry));
            }
            if let Some((control1, control2)) = corner.curve {
                segments.push(PathSegment::CurveTo {
                    control1,
                    control2,
                    end: corner.exit,
                });
            }
            cursor = corner.exit;
        }
        if (end - cursor).norm() > TOLERANCE {
            segments.push(PathSegment::LineTo(end));
        }
        Ok(segments)
    }

    /// Screen geometry at vertex `i`, with cyclic neighbors.
    fn corner(&self, i: usize) -> Corner {
        let n = self.vertices.len();
        let v = &self.vertices[i];
        let sharp = v.prev_cutoff.abs() < TOLERANCE || v.next_cutoff.abs() < TOLERANCE;
        if sharp {
            let p = project(&v.vertex, self.distance);
            return Corner {
                entry: p,
                exit: p,
                curve: None,
            };
        }

        let prev = &self.vertices[(i + n - 1) % n].vertex;
        let next = &self.vertices[(i + 1) % n].vertex;
        let entry = project(&move_toward(&v.vertex, prev, v.prev_cutoff), self.distance);
        let exit = project(&move_toward(&v.vertex, next, v.next_cutoff), self.distance);
        let corner = project(&v.vertex, self.distance);

        // Four-point circular-arc approximation: handle length ratio
        // k = (4/3)·tan(θ/4) for arc angle θ.
        let theta = angle_between(&[entry, corner], &[corner, exit]);
        let k = 4.0 / 3.0 * (theta / 4.0).tan();
        Corner {
            entry,
            exit,
            curve: Some((lerp(&entry, &corner, k), lerp(&exit, &corner, k))),
        }
    }
}
