use super::{Point2, Point3, TOLERANCE};

/// A model-space coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A single axis-angle rotation step, angle in degrees.
///
/// Rotation lists compose by sequential application in list order;
/// the order is significant and preserved end-to-end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub axis: Axis,
    pub degrees: f64,
}

impl Rotation {
    /// Creates a rotation of `degrees` around `axis`.
    #[must_use]
    pub const fn new(axis: Axis, degrees: f64) -> Self {
        Self { axis, degrees }
    }

    /// The rotation angle in radians.
    #[must_use]
    pub fn radians(&self) -> f64 {
        self.degrees.to_radians()
    }
}

/// Applies one right-handed axis rotation to a point.
#[must_use]
pub fn rotate_step(p: &Point3, rotation: &Rotation) -> Point3 {
    let (sin, cos) = rotation.radians().sin_cos();
    match rotation.axis {
        Axis::X => Point3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos),
        Axis::Y => Point3::new(p.z * sin + p.x * cos, p.y, p.z * cos - p.x * sin),
        Axis::Z => Point3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z),
    }
}

/// Applies a rotation list to a point, one step at a time, in list order.
#[must_use]
pub fn rotate(p: &Point3, rotations: &[Rotation]) -> Point3 {
    rotations.iter().fold(*p, |acc, r| rotate_step(&acc, r))
}

/// Translates a point by per-axis offsets.
#[must_use]
pub fn translate(p: &Point3, dx: f64, dy: f64, dz: f64) -> Point3 {
    Point3::new(p.x + dx, p.y + dy, p.z + dz)
}

/// Uniformly scales a point, optionally about an arbitrary center.
#[must_use]
pub fn scale(p: &Point3, factor: f64, center: Option<&Point3>) -> Point3 {
    match center {
        None => Point3::new(p.x * factor, p.y * factor, p.z * factor),
        Some(c) => {
            let local = scale(&translate(p, -c.x, -c.y, -c.z), factor, None);
            translate(&local, c.x, c.y, c.z)
        }
    }
}

/// Perspective projection onto the viewing plane.
///
/// `x' = distance·x / (distance − z)`, and likewise for y. An infinite
/// distance degenerates to the orthographic projection `(x, y)` exactly.
/// Callers must guarantee `distance` exceeds the point's z coordinate;
/// the kernel does not re-validate.
#[must_use]
pub fn project(p: &Point3, distance: f64) -> Point2 {
    if distance.is_infinite() {
        return Point2::new(p.x, p.y);
    }
    Point2::new(
        distance * p.x / (distance - p.z),
        distance * p.y / (distance - p.z),
    )
}

/// Advances `p` by exactly `distance` along the direction toward `target`.
///
/// A negative distance retreats away from `target`. When the two points
/// coincide there is no direction to move along and `p` is returned
/// unchanged.
#[must_use]
pub fn move_toward(p: &Point3, target: &Point3, distance: f64) -> Point3 {
    let d = target - p;
    let len = d.norm();
    if len < TOLERANCE {
        return *p;
    }
    p + d * (distance / len)
}

/// The axis on which a point has its largest absolute coordinate.
///
/// For a point on a face of an axis-aligned cube this is the face's
/// normal axis.
#[must_use]
pub fn axis_of_max_abs(p: &Point3) -> Axis {
    let (ax, ay, az) = (p.x.abs(), p.y.abs(), p.z.abs());
    if ax >= ay && ax >= az {
        Axis::X
    } else if ay >= az {
        Axis::Y
    } else {
        Axis::Z
    }
}

/// Reads the coordinate of a point along one axis.
#[must_use]
pub fn coordinate(p: &Point3, axis: Axis) -> f64 {
    match axis {
        Axis::X => p.x,
        Axis::Y => p.y,
        Axis::Z => p.z,
    }
}

/// Writes the coordinate of a point along one axis.
pub fn set_coordinate(p: &mut Point3, axis: Axis, value: f64) {
    match axis {
        Axis::X => p.x = value,
        Axis::Y => p.y = value,
        Axis::Z => p.z = value,
    }
}

/// The axis that is neither `a` nor `b`. Requires `a != b`.
#[must_use]
pub fn remaining_axis(a: Axis, b: Axis) -> Axis {
    match (a, b) {
        (Axis::X, Axis::Y) | (Axis::Y, Axis::X) => Axis::Z,
        (Axis::X, Axis::Z) | (Axis::Z, Axis::X) => Axis::Y,
        _ => Axis::X,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn rotate_x_90() {
        let p = Point3::new(0.0, 1.0, 0.0);
        let r = rotate(&p, &[Rotation::new(Axis::X, 90.0)]);
        assert_relative_eq!(r.x, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(r.y, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(r.z, 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn rotate_y_90() {
        let p = Point3::new(0.0, 0.0, 1.0);
        let r = rotate(&p, &[Rotation::new(Axis::Y, 90.0)]);
        assert_relative_eq!(r.x, 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(r.z, 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn rotate_z_90() {
        let p = Point3::new(1.0, 0.0, 0.0);
        let r = rotate(&p, &[Rotation::new(Axis::Z, 90.0)]);
        assert_relative_eq!(r.x, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(r.y, 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn identity_rotation_list() {
        let p = Point3::new(1.5, -2.0, 0.25);
        let zero = [
            Rotation::new(Axis::X, 0.0),
            Rotation::new(Axis::Y, 0.0),
            Rotation::new(Axis::Z, 0.0),
        ];
        let r = rotate(&p, &zero);
        assert_relative_eq!(r.x, p.x, epsilon = TOLERANCE);
        assert_relative_eq!(r.y, p.y, epsilon = TOLERANCE);
        assert_relative_eq!(r.z, p.z, epsilon = TOLERANCE);
        let r = rotate(&p, &[]);
        assert_relative_eq!(r.x, p.x, epsilon = TOLERANCE);
    }

    #[test]
    fn rotation_order_matters() {
        let p = Point3::new(1.0, 0.0, 0.0);
        let yx = rotate(
            &p,
            &[Rotation::new(Axis::Y, 90.0), Rotation::new(Axis::X, 90.0)],
        );
        let xy = rotate(
            &p,
            &[Rotation::new(Axis::X, 90.0), Rotation::new(Axis::Y, 90.0)],
        );
        // Y then X: (1,0,0) -> (0,0,-1) -> (0,1,0); X then Y leaves (1,0,0)
        // fixed on its own axis then sends it to (0,0,-1).
        assert_relative_eq!(yx.y, 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(xy.z, -1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn project_basic() {
        let p = Point3::new(1.0, 2.0, 1.0);
        let q = project(&p, 5.0);
        assert_relative_eq!(q.x, 1.25, epsilon = TOLERANCE);
        assert_relative_eq!(q.y, 2.5, epsilon = TOLERANCE);
    }

    #[test]
    fn project_infinite_distance_is_orthographic() {
        let p = Point3::new(0.3, -0.7, 123.0);
        let q = project(&p, f64::INFINITY);
        // Exact equality required: no arithmetic may touch the coordinates.
        assert_eq!(q.x, 0.3);
        assert_eq!(q.y, -0.7);
    }

    #[test]
    fn project_converges_to_orthographic() {
        let p = Point3::new(1.0, -2.0, 0.5);
        let q = project(&p, 1e12);
        assert_relative_eq!(q.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(q.y, -2.0, epsilon = 1e-9);
    }

    #[test]
    fn move_toward_advances_by_distance() {
        let p = Point3::new(0.0, 0.0, 0.0);
        let t = Point3::new(3.0, 4.0, 0.0);
        let m = move_toward(&p, &t, 1.0);
        assert_relative_eq!(m.x, 0.6, epsilon = TOLERANCE);
        assert_relative_eq!(m.y, 0.8, epsilon = TOLERANCE);
    }

    #[test]
    fn move_toward_negative_distance_retreats() {
        let p = Point3::new(0.0, 0.0, 0.0);
        let t = Point3::new(1.0, 0.0, 0.0);
        let m = move_toward(&p, &t, -2.0);
        assert_relative_eq!(m.x, -2.0, epsilon = TOLERANCE);
    }

    #[test]
    fn move_toward_coincident_is_noop() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let m = move_toward(&p, &p, 5.0);
        assert_eq!(m, p);
    }

    #[test]
    fn scale_about_center() {
        let p = Point3::new(2.0, 0.0, 0.0);
        let c = Point3::new(1.0, 0.0, 0.0);
        let s = scale(&p, 3.0, Some(&c));
        assert_relative_eq!(s.x, 4.0, epsilon = TOLERANCE);
        assert_relative_eq!(s.y, 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn translate_shifts_each_axis() {
        let p = translate(&Point3::new(1.0, 2.0, 3.0), -0.5, 0.0, 1.5);
        assert_relative_eq!(p.x, 0.5, epsilon = TOLERANCE);
        assert_relative_eq!(p.y, 2.0, epsilon = TOLERANCE);
        assert_relative_eq!(p.z, 4.5, epsilon = TOLERANCE);
    }

    #[test]
    fn max_abs_axis() {
        assert_eq!(axis_of_max_abs(&Point3::new(3.0, -1.0, 2.0)), Axis::X);
        assert_eq!(axis_of_max_abs(&Point3::new(0.0, -5.0, 2.0)), Axis::Y);
        assert_eq!(axis_of_max_abs(&Point3::new(0.1, -0.2, 0.9)), Axis::Z);
    }
}
