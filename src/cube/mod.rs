pub mod align;
pub mod arrow;
pub mod mask;
pub mod silhouette;
pub mod sticker;

use crate::error::{FaceletError, RenderError, Result};
use crate::math::transform::Rotation;

/// Inward margin of a sticker quad, as a fraction of one unit cell.
///
/// Must stay in `[0, 0.5)` or opposing sticker edges would cross.
pub const STICKER_MARGIN: f64 = 0.075;

/// Outward margin added to the body silhouette beyond the facelet grid.
pub const EXTRA_MARGIN: f64 = 0.02;

/// One of the six symbolic cube faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    /// All faces, in canonical U R F D L B order.
    pub const ALL: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// The four side faces, in the order the plan-view outline walks them.
    pub const SIDES: [Face; 4] = [Face::R, Face::F, Face::L, Face::B];

    /// The face's letter in facelet names.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    /// Parses a face letter.
    #[must_use]
    pub const fn from_letter(c: char) -> Option<Face> {
        match c {
            'U' => Some(Face::U),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'B' => Some(Face::B),
            _ => None,
        }
    }

    /// Dense index in [`Face::ALL`] order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether the face is one of the four sides (not U or D).
    #[must_use]
    pub const fn is_side(self) -> bool {
        matches!(self, Face::R | Face::F | Face::L | Face::B)
    }
}

/// Address of one facelet: face, column (left to right) and row (bottom to
/// top) in face-local orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facelet {
    pub face: Face,
    pub i: u32,
    pub j: u32,
}

impl Facelet {
    /// Creates a facelet address without range checking; call
    /// [`Facelet::validate`] at API boundaries.
    #[must_use]
    pub const fn new(face: Face, i: u32, j: u32) -> Self {
        Self { face, i, j }
    }

    /// Checks that both indices fit an N×N face.
    ///
    /// # Errors
    ///
    /// Returns [`FaceletError::IndexOutOfRange`] when `i` or `j` is not in
    /// `[0, dimension)`.
    pub fn validate(&self, dimension: u32) -> Result<()> {
        if self.i >= dimension || self.j >= dimension {
            return Err(FaceletError::IndexOutOfRange {
                face: self.face,
                i: self.i,
                j: self.j,
                dimension,
            }
            .into());
        }
        Ok(())
    }

    /// Parses a facelet name of the form `<face letter><serial>`.
    ///
    /// Serials run left-to-right then top-to-bottom within a face:
    /// `serial = i + (N − 1 − j)·N`.
    ///
    /// # Errors
    ///
    /// Returns [`FaceletError::MalformedName`] when the name does not match
    /// the pattern, and [`FaceletError::SerialOutOfRange`] when the serial
    /// does not fit the face.
    pub fn parse(name: &str, dimension: u32) -> Result<Self> {
        let malformed = || FaceletError::MalformedName(name.to_owned());
        let mut chars = name.chars();
        let face = chars
            .next()
            .and_then(Face::from_letter)
            .ok_or_else(malformed)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed().into());
        }
        let serial: u32 = digits.parse().map_err(|_| malformed())?;
        if serial >= dimension * dimension {
            return Err(FaceletError::SerialOutOfRange {
                face,
                serial,
                dimension,
            }
            .into());
        }
        let i = serial % dimension;
        let j = dimension - 1 - serial / dimension;
        Ok(Self { face, i, j })
    }

    /// Formats the facelet back into its `<face letter><serial>` name.
    #[must_use]
    pub fn name(&self, dimension: u32) -> String {
        let serial = self.i + (dimension - 1 - self.j) * dimension;
        format!("{}{serial}", self.face.letter())
    }
}

/// Which silhouette and alignment strategy a cube uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    /// Full cube in an arbitrary orientation.
    #[default]
    Normal,
    /// Flattened top layer with the side faces splayed outward.
    Plan,
}

/// Geometric model of an N×N×N cube under a view rotation.
///
/// Holds no per-render caches: every sticker, silhouette and arrow query
/// derives its points from the dimension, the rotation list and the view
/// tag, so independent instances can be used from parallel renders freely.
#[derive(Debug, Clone)]
pub struct CubeGeometry {
    dimension: u32,
    view: ViewKind,
    rotations: Vec<Rotation>,
}

impl CubeGeometry {
    /// Creates a cube model with no view rotation applied yet.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ZeroDimension`] for a zero dimension.
    pub fn new(dimension: u32, view: ViewKind) -> Result<Self> {
        if dimension == 0 {
            return Err(RenderError::ZeroDimension.into());
        }
        Ok(Self {
            dimension,
            view,
            rotations: Vec::new(),
        })
    }

    /// Appends rotation steps to the view orientation, preserving order.
    pub fn rotate(&mut self, rotations: &[Rotation]) {
        self.rotations.extend_from_slice(rotations);
    }

    #[must_use]
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    #[must_use]
    pub fn view(&self) -> ViewKind {
        self.view
    }

    #[must_use]
    pub fn rotations(&self) -> &[Rotation] {
        &self.rotations
    }

    /// Half the cube's edge length in model units.
    #[must_use]
    pub(crate) fn half(&self) -> f64 {
        f64::from(self.dimension) / 2.0
    }
}
