pub mod cube;
pub mod error;
pub mod math;
pub mod path;
pub mod render;

pub use error::{CubevizError, Result};
