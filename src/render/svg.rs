//! SVG serialization of a [`Scene`].
//!
//! Pure string building with no I/O. Scene coordinates are divided by the
//! cube dimension into a fixed `-0.9 .. 0.9` viewBox, and y is negated
//! because SVG y grows downward.

use std::fmt::Write;

use super::{ArrowPath, FaceGroup, MarkerKind, Scene};
use crate::cube::{Face, ViewKind};
use crate::math::Point2;
use crate::path::PathSegment;

const VIEW_BOX: &str = "-0.9 -0.9 1.8 1.8";
const OUTLINE_STROKE_WIDTH: f64 = 0.1;
const ARROW_STROKE_WIDTH: f64 = 0.12;

/// Serializes the scene into a standalone SVG document.
#[must_use]
pub fn to_svg(scene: &Scene) -> String {
    let n = f64::from(scene.dimension);
    let mut out = String::new();

    let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="{VIEW_BOX}">"#,
        size = scene.size,
    );

    write_marker_defs(&mut out, &scene.arrows);

    if let Some(background) = scene.background {
        let _ = writeln!(
            out,
            r#"  <rect x="-0.9" y="-0.9" width="1.8" height="1.8" fill="{background}"/>"#,
        );
    }

    // A translucent body lets the far side show through, painted first.
    if scene.body_color.is_translucent() && scene.view == ViewKind::Normal {
        let _ = writeln!(out, r#"  <g stroke-linejoin="round">"#);
        for group in scene.faces.iter().filter(|g| !g.facing_front) {
            write_face(&mut out, scene, group, n, None);
        }
        let _ = writeln!(out, "  </g>");
    }

    let _ = writeln!(
        out,
        r#"  <g stroke-width="{OUTLINE_STROKE_WIDTH}" stroke-linejoin="round" opacity="{:.4}">"#,
        scene.body_color.opacity(),
    );
    let _ = writeln!(
        out,
        r#"    <path d="{}" fill="{color}" stroke="{color}"/>"#,
        path_d(&scene.body, n),
        color = scene.body_color,
    );
    let _ = writeln!(out, "  </g>");

    let _ = writeln!(out, r#"  <g stroke-linejoin="round">"#);
    match scene.view {
        ViewKind::Normal => {
            for group in scene.faces.iter().filter(|g| g.facing_front) {
                write_face(&mut out, scene, group, n, None);
            }
        }
        ViewKind::Plan => {
            // Top-down diagram: the U face plus the tilted last-layer row
            // of each side face.
            for group in &scene.faces {
                match group.face {
                    Face::U => write_face(&mut out, scene, group, n, None),
                    Face::D => {}
                    _ => write_face(&mut out, scene, group, n, Some(scene.dimension - 1)),
                }
            }
        }
    }
    let _ = writeln!(out, "  </g>");

    if !scene.arrows.is_empty() {
        let _ = writeln!(
            out,
            r#"  <g fill="none" stroke-width="{:.4}" stroke-linejoin="round">"#,
            ARROW_STROKE_WIDTH / n,
        );
        for (idx, arrow) in scene.arrows.iter().enumerate() {
            write_arrow(&mut out, arrow, idx, n);
        }
        let _ = writeln!(out, "  </g>");
    }

    let _ = writeln!(out, "</svg>");
    out
}

/// One triangular `<marker>` per arrow end that wants a head, colored to
/// match its arrow.
fn write_marker_defs(out: &mut String, arrows: &[ArrowPath]) {
    if arrows.iter().all(|a| a.marker == MarkerKind::None) {
        return;
    }
    let _ = writeln!(out, "  <defs>");
    for (idx, arrow) in arrows.iter().enumerate() {
        if matches!(arrow.marker, MarkerKind::End | MarkerKind::Both) {
            let _ = writeln!(
                out,
                r#"    <marker id="arrow-end-{idx}" viewBox="0 0 10 10" refX="6" refY="5" markerWidth="6" markerHeight="6" orient="auto"><path d="M 0 0 L 10 5 L 0 10 z" fill="{}"/></marker>"#,
                arrow.color,
            );
        }
        if matches!(arrow.marker, MarkerKind::Start | MarkerKind::Both) {
            let _ = writeln!(
                out,
                r#"    <marker id="arrow-start-{idx}" viewBox="0 0 10 10" refX="4" refY="5" markerWidth="6" markerHeight="6" orient="auto"><path d="M 10 0 L 0 5 L 10 10 z" fill="{}"/></marker>"#,
                arrow.color,
            );
        }
    }
    let _ = writeln!(out, "  </defs>");
}

fn write_face(out: &mut String, scene: &Scene, group: &FaceGroup, n: f64, only_row: Option<u32>) {
    for quad in &group.facelets {
        if only_row.is_some_and(|row| quad.j != row) {
            continue;
        }
        let mut points = String::new();
        for corner in &quad.corners {
            if !points.is_empty() {
                points.push(' ');
            }
            let (x, y) = screen(corner, n);
            let _ = write!(points, "{x:.4},{y:.4}");
        }
        let _ = writeln!(
            out,
            r#"    <polygon fill="{}" stroke="{}" opacity="{:.4}" points="{points}"/>"#,
            quad.color,
            scene.body_color,
            quad.color.opacity(),
        );
    }
}

fn write_arrow(out: &mut String, arrow: &ArrowPath, idx: usize, n: f64) {
    let mut attrs = String::new();
    if matches!(arrow.marker, MarkerKind::Start | MarkerKind::Both) {
        let _ = write!(attrs, r##" marker-start="url(#arrow-start-{idx})""##);
    }
    if matches!(arrow.marker, MarkerKind::End | MarkerKind::Both) {
        let _ = write!(attrs, r##" marker-end="url(#arrow-end-{idx})""##);
    }
    let _ = writeln!(
        out,
        r#"    <path d="{}" stroke="{}"{attrs}/>"#,
        path_d(&arrow.segments, n),
        arrow.color,
    );
}

fn path_d(segments: &[PathSegment], n: f64) -> String {
    let mut d = String::new();
    for segment in segments {
        if !d.is_empty() {
            d.push(' ');
        }
        match segment {
            PathSegment::MoveTo(p) => {
                let (x, y) = screen(p, n);
                let _ = write!(d, "M {x:.4} {y:.4}");
            }
            PathSegment::LineTo(p) => {
                let (x, y) = screen(p, n);
                let _ = write!(d, "L {x:.4} {y:.4}");
            }
            PathSegment::CurveTo {
                control1,
                control2,
                end,
            } => {
                let (x1, y1) = screen(control1, n);
                let (x2, y2) = screen(control2, n);
                let (x, y) = screen(end, n);
                let _ = write!(d, "C {x1:.4} {y1:.4} {x2:.4} {y2:.4} {x:.4} {y:.4}");
            }
            PathSegment::Close => d.push('Z'),
        }
    }
    d
}

fn screen(p: &Point2, n: f64) -> (f64, f64) {
    (p.x / n, -p.y / n)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::render::{render, ArrowSpec, Color, FaceletColors, RenderOptions};

    fn scene(options: &RenderOptions) -> Scene {
        let colors = FaceletColors::solved(3).unwrap();
        render(3, &colors, options).unwrap()
    }

    #[test]
    fn document_structure_is_valid() {
        let svg = to_svg(&scene(&RenderOptions::default()));
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        assert!(svg.contains(r#"width="128" height="128""#));
        assert!(svg.contains(r#"viewBox="-0.9 -0.9 1.8 1.8""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn opaque_default_view_draws_three_faces() {
        let svg = to_svg(&scene(&RenderOptions::default()));
        assert_eq!(svg.matches("<polygon").count(), 27);
        // White U stickers are visible in the default orientation.
        assert!(svg.contains(r##"fill="#ffffff""##));
        assert_eq!(svg.matches("<path").count(), 1);
    }

    #[test]
    fn background_rect_only_when_requested() {
        let svg = to_svg(&scene(&RenderOptions::default()));
        assert!(!svg.contains("<rect"));

        let options = RenderOptions {
            background: Some(Color::WHITE),
            ..RenderOptions::default()
        };
        assert!(to_svg(&scene(&options)).contains(r##"<rect x="-0.9" y="-0.9""##));
    }

    #[test]
    fn translucent_body_shows_all_six_faces() {
        let options = RenderOptions {
            body_color: Color::new(0, 0, 0, 128),
            ..RenderOptions::default()
        };
        let svg = to_svg(&scene(&options));
        assert_eq!(svg.matches("<polygon").count(), 54);
    }

    #[test]
    fn plan_view_draws_top_face_and_side_rows() {
        let options = RenderOptions {
            view: crate::cube::ViewKind::Plan,
            rotations: Vec::new(),
            ..RenderOptions::default()
        };
        let svg = to_svg(&scene(&options));
        // 9 U stickers plus 3 last-layer stickers per side face.
        assert_eq!(svg.matches("<polygon").count(), 21);
    }

    #[test]
    fn arrows_emit_markers_and_paths() {
        let mut options = RenderOptions::default();
        options.arrows.push(ArrowSpec {
            marker: crate::render::MarkerKind::Both,
            ..ArrowSpec::new(&["U0", "U8"])
        });
        let svg = to_svg(&scene(&options));
        assert!(svg.contains("<defs>"));
        assert!(svg.contains(r##"marker-start="url(#arrow-start-0)""##));
        assert!(svg.contains(r##"marker-end="url(#arrow-end-0)""##));
        assert_eq!(svg.matches(r#"<marker id="#).count(), 2);
    }

    #[test]
    fn screen_coordinates_flip_y() {
        let p = Point2::new(1.5, 1.5);
        let (x, y) = screen(&p, 3.0);
        assert!((x - 0.5).abs() < 1e-12);
        assert!((y + 0.5).abs() < 1e-12);
    }
}
