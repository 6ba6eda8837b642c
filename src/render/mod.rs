//! Scene assembly: from a facelet→color mapping to drawable 2D geometry.

pub mod color;
pub mod svg;

pub use color::Color;

use tracing::debug;

use crate::cube::arrow::GeometricArrow;
use crate::cube::mask::Stage;
use crate::cube::{CubeGeometry, Face, Facelet, ViewKind, EXTRA_MARGIN};
use crate::error::{RenderError, Result};
use crate::math::transform::{project, Axis, Rotation};
use crate::math::Point2;
use crate::path::{PathSegment, RoundedPath};

/// Dense color storage for all `6·N²` facelets.
#[derive(Debug, Clone)]
pub struct FaceletColors {
    dimension: u32,
    colors: Vec<Color>,
}

impl FaceletColors {
    /// The conventional scheme in U R F D L B order.
    pub const SOLVED_SCHEME: [Color; 6] = [
        Color::WHITE,
        Color::RED,
        Color::GREEN,
        Color::YELLOW,
        Color::ORANGE,
        Color::BLUE,
    ];

    /// All facelets set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ZeroDimension`] for a zero dimension.
    pub fn uniform(dimension: u32, fill: Color) -> Result<Self> {
        if dimension == 0 {
            return Err(RenderError::ZeroDimension.into());
        }
        let count = 6 * (dimension as usize).pow(2);
        Ok(Self {
            dimension,
            colors: vec![fill; count],
        })
    }

    /// The solved cube in the conventional color scheme.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ZeroDimension`] for a zero dimension.
    pub fn solved(dimension: u32) -> Result<Self> {
        let mut colors = Self::uniform(dimension, Color::BLACK)?;
        for (face, &scheme) in Face::ALL.iter().zip(&Self::SOLVED_SCHEME) {
            for i in 0..dimension {
                for j in 0..dimension {
                    colors.set(Facelet::new(*face, i, j), scheme)?;
                }
            }
        }
        Ok(colors)
    }

    #[must_use]
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    fn index(&self, facelet: &Facelet) -> usize {
        let n = self.dimension as usize;
        (facelet.face.index() * n + facelet.i as usize) * n + facelet.j as usize
    }

    /// # Errors
    ///
    /// Returns [`FaceletError::IndexOutOfRange`] for indices outside the
    /// face grid.
    ///
    /// [`FaceletError::IndexOutOfRange`]: crate::error::FaceletError::IndexOutOfRange
    pub fn get(&self, facelet: Facelet) -> Result<Color> {
        facelet.validate(self.dimension)?;
        Ok(self.colors[self.index(&facelet)])
    }

    /// # Errors
    ///
    /// Returns [`FaceletError::IndexOutOfRange`] for indices outside the
    /// face grid.
    ///
    /// [`FaceletError::IndexOutOfRange`]: crate::error::FaceletError::IndexOutOfRange
    pub fn set(&mut self, facelet: Facelet, color: Color) -> Result<()> {
        facelet.validate(self.dimension)?;
        let idx = self.index(&facelet);
        self.colors[idx] = color;
        Ok(())
    }

    /// Repaints every facelet the stage hides with `masked`.
    pub fn apply_mask(&mut self, stage: Stage, masked: Color) {
        for face in Face::ALL {
            for i in 0..self.dimension {
                for j in 0..self.dimension {
                    if !stage.visible(face, i, j, self.dimension) {
                        let idx = self.index(&Facelet::new(face, i, j));
                        self.colors[idx] = masked;
                    }
                }
            }
        }
    }
}

/// Arrowhead placement along an annotation arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerKind {
    None,
    Start,
    #[default]
    End,
    Both,
}

/// An annotation arrow by facelet names, resolved during [`render`].
#[derive(Debug, Clone)]
pub struct ArrowSpec {
    /// Facelet names such as `"U0"`, in visit order.
    pub facelets: Vec<String>,
    pub marker: MarkerKind,
    pub color: Color,
    /// Extra cells of shaft past the first sticker center.
    pub extend_start: f64,
    /// Extra cells of shaft past the last sticker center.
    pub extend_end: f64,
}

impl ArrowSpec {
    #[must_use]
    pub fn new(facelets: &[&str]) -> Self {
        Self {
            facelets: facelets.iter().map(|&s| s.to_owned()).collect(),
            marker: MarkerKind::End,
            color: Color::GRAY,
            extend_start: 0.0,
            extend_end: 0.0,
        }
    }
}

/// Rendering parameters with the conventional oblique default view.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Output edge length in pixels.
    pub size: u32,
    pub view: ViewKind,
    pub rotations: Vec<Rotation>,
    /// Camera distance in cube edge lengths.
    pub distance: f64,
    pub background: Option<Color>,
    pub body_color: Color,
    pub arrows: Vec<ArrowSpec>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: 128,
            view: ViewKind::Normal,
            rotations: vec![Rotation::new(Axis::Y, 30.0), Rotation::new(Axis::X, -25.0)],
            distance: 5.0,
            background: None,
            body_color: Color::BLACK,
            arrows: Vec::new(),
        }
    }
}

/// One facelet's screen-space quad.
#[derive(Debug, Clone)]
pub struct FaceletQuad {
    pub i: u32,
    pub j: u32,
    pub color: Color,
    pub corners: [Point2; 4],
}

/// All facelets of one face, flagged by orientation toward the camera.
#[derive(Debug, Clone)]
pub struct FaceGroup {
    pub face: Face,
    pub facing_front: bool,
    pub facelets: Vec<FaceletQuad>,
}

/// A resolved arrow ready for drawing.
#[derive(Debug, Clone)]
pub struct ArrowPath {
    pub segments: Vec<PathSegment>,
    pub marker: MarkerKind,
    pub color: Color,
}

/// Drawable geometry in projection space, before the SVG coordinate map.
///
/// Coordinates span roughly `±(N/2 + margins)`; the writer normalizes them
/// into its viewBox.
#[derive(Debug, Clone)]
pub struct Scene {
    pub dimension: u32,
    pub size: u32,
    pub view: ViewKind,
    pub background: Option<Color>,
    pub body_color: Color,
    pub body: Vec<PathSegment>,
    pub faces: Vec<FaceGroup>,
    pub arrows: Vec<ArrowPath>,
}

/// Assembles the drawable scene for one cube state.
///
/// # Errors
///
/// Fails on a dimension mismatch between `colors` and `dimension`, a
/// camera distance that does not clear the cube, or malformed arrow
/// facelet names.
pub fn render(dimension: u32, colors: &FaceletColors, options: &RenderOptions) -> Result<Scene> {
    if colors.dimension() != dimension {
        return Err(RenderError::DimensionMismatch {
            colors: colors.dimension(),
            requested: dimension,
        }
        .into());
    }

    let mut cube = CubeGeometry::new(dimension, options.view)?;
    cube.rotate(&options.rotations);

    // Camera distance is given in cube edge lengths; geometry works in
    // cells, so scale it up and check it clears the body's bounding sphere.
    let n = f64::from(dimension);
    let distance = options.distance * n;
    let extent = (n / 2.0 + EXTRA_MARGIN) * 3.0_f64.sqrt();
    if distance <= extent {
        return Err(RenderError::DistanceTooClose { distance, extent }.into());
    }

    let body = RoundedPath::new(cube.silhouette(distance)?, true, distance).execute()?;
    debug!(dimension, view = ?options.view, "assembled body outline");

    let mut faces = Vec::with_capacity(Face::ALL.len());
    for face in Face::ALL {
        let facing_front = cube.facing_front(face, distance);
        let mut facelets = Vec::with_capacity((dimension as usize).pow(2));
        for i in 0..dimension {
            for j in 0..dimension {
                let facelet = Facelet::new(face, i, j);
                let quad = cube.sticker(facelet)?;
                let corners = [
                    project(&quad[0], distance),
                    project(&quad[1], distance),
                    project(&quad[2], distance),
                    project(&quad[3], distance),
                ];
                facelets.push(FaceletQuad {
                    i,
                    j,
                    color: colors.get(facelet)?,
                    corners,
                });
            }
        }
        faces.push(FaceGroup {
            face,
            facing_front,
            facelets,
        });
    }

    let mut arrows = Vec::with_capacity(options.arrows.len());
    for spec in &options.arrows {
        let facelets = spec
            .facelets
            .iter()
            .map(|name| Facelet::parse(name, dimension))
            .collect::<Result<Vec<_>>>()?;
        let arrow = GeometricArrow::new(facelets, spec.extend_start, spec.extend_end)?;
        let segments = RoundedPath::new(arrow.vertices(&cube)?, false, distance).execute()?;
        arrows.push(ArrowPath {
            segments,
            marker: spec.marker,
            color: spec.color,
        });
    }
    debug!(faces = faces.len(), arrows = arrows.len(), "scene ready");

    Ok(Scene {
        dimension,
        size: options.size,
        view: options.view,
        background: options.background,
        body_color: options.body_color,
        body,
        faces,
        arrows,
    })
}
