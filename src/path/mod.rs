pub mod rounded;

pub use rounded::RoundedPath;

use crate::math::{Point2, Point3};

/// A path vertex annotated with how far to retract toward each neighbor
/// before rounding the corner. A cutoff of zero keeps the corner sharp;
/// at an open path's ends a negative cutoff extends the path past the
/// vertex instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedVertex {
    pub vertex: Point3,
    pub prev_cutoff: f64,
    pub next_cutoff: f64,
}

impl RoundedVertex {
    /// A vertex with the same cutoff toward both neighbors.
    #[must_use]
    pub const fn symmetric(vertex: Point3, cutoff: f64) -> Self {
        Self {
            vertex,
            prev_cutoff: cutoff,
            next_cutoff: cutoff,
        }
    }
}

/// One step of a composed 2D vector path, in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point2),
    LineTo(Point2),
    CurveTo {
        control1: Point2,
        control2: Point2,
        end: Point2,
    },
    Close,
}
