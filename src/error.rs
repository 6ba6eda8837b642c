use thiserror::Error;

use crate::cube::Face;

/// Top-level error type for the cubeviz rendering engine.
#[derive(Debug, Error)]
pub enum CubevizError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Facelet(#[from] FaceletError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("lines are parallel, no intersection")]
    ParallelLines,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("path needs at least {min} vertices, got {got}")]
    TooFewVertices { min: usize, got: usize },
}

/// Errors related to facelet addressing.
#[derive(Debug, Error)]
pub enum FaceletError {
    #[error("malformed facelet name {0:?}, expected <face letter><serial>")]
    MalformedName(String),

    #[error("facelet index ({i}, {j}) on face {face:?} is out of range for dimension {dimension}")]
    IndexOutOfRange {
        face: Face,
        i: u32,
        j: u32,
        dimension: u32,
    },

    #[error("facelet serial {serial} on face {face:?} exceeds {dimension}x{dimension} face")]
    SerialOutOfRange {
        face: Face,
        serial: u32,
        dimension: u32,
    },
}

/// Errors related to assembling a render.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("dimension must be at least 1")]
    ZeroDimension,

    #[error("projection distance {distance} does not clear the cube extent {extent}")]
    DistanceTooClose { distance: f64, extent: f64 },

    #[error("facelet color mapping covers dimension {colors}, render requested {requested}")]
    DimensionMismatch { colors: u32, requested: u32 },

    #[error("unknown stage name {0:?}")]
    UnknownStage(String),
}

/// Convenience type alias for results using [`CubevizError`].
pub type Result<T> = std::result::Result<T, CubevizError>;
