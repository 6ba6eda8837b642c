//! Solving-stage visibility masks.
//!
//! A stage hides the stickers a solver has not placed yet, so a diagram
//! can show only the part of the cube a step cares about. Coordinates
//! follow the facelet grid: `i` runs left to right, `j` bottom to top.

use std::str::FromStr;

use super::Face;
use crate::error::{CubevizError, RenderError};

/// A named solving stage selecting which stickers stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// First layer.
    Fl,
    /// First two layers.
    F2l,
    /// F2L minus one corner/edge pair.
    F2lSlot1,
    /// F2L minus two pairs.
    F2lSlot2,
    /// F2L minus three pairs.
    F2lSlot3,
    /// F2L minus diagonal pairs.
    F2lSameSlot,
    /// First two blocks (Roux).
    F2b,
    /// Bottom line only.
    Line,
    /// Bottom cross.
    Cross,
    /// 2x2x2 block.
    Block2x2x2,
    /// 2x2x3 block.
    Block2x2x3,
    /// Last layer.
    Ll,
    /// Last-layer corners.
    Cll,
    /// Last-layer edges.
    Ell,
    /// Oriented last layer (top face only).
    Oll,
    /// Top face restricted to corners.
    Ocll,
    /// Top face restricted to edges.
    Oell,
    /// Top face plus last-layer corners.
    Coll,
    /// Top face plus last-layer edges.
    Ocell,
    /// Winter variation (F2L plus oriented corners context).
    Wv,
    /// VH: F2L plus oriented top edges.
    Vh,
    /// Edge last slot.
    Els,
    /// Corner last slot.
    Cls,
    /// CMLL (Roux): two blocks plus corners.
    Cmll,
    /// Hide everything.
    None,
    /// Show everything.
    #[default]
    Full,
}

impl Stage {
    /// Whether the sticker at `(i, j)` on `face` stays visible.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub fn visible(self, face: Face, i: u32, j: u32, dimension: u32) -> bool {
        let top = dimension - 1;
        match self {
            Self::Full => true,
            Self::None => false,
            Self::Fl => face != Face::U && (face == Face::D || j == 0),
            Self::F2l => face != Face::U && !last_layer_side(face, j, dimension),
            Self::F2lSlot1 => {
                Self::F2l.visible(face, i, j, dimension)
                    && match face {
                        Face::F => i != top,
                        Face::R => i != 0,
                        Face::D => i != top || j != top,
                        _ => true,
                    }
            }
            Self::F2lSlot2 => {
                Self::F2lSlot1.visible(face, i, j, dimension)
                    && match face {
                        Face::F => i != 0,
                        Face::L => i != top,
                        Face::D => i != 0 || j != top,
                        _ => true,
                    }
            }
            Self::F2lSlot3 => {
                Self::F2l.visible(face, i, j, dimension)
                    && match face {
                        Face::F => i != 0,
                        Face::R => i != top,
                        Face::L | Face::B => i != 0 && i != top,
                        Face::D => ![(0, 0), (0, top), (top, 0)].contains(&(i, j)),
                        _ => true,
                    }
            }
            Self::F2lSameSlot => {
                Self::F2l.visible(face, i, j, dimension)
                    && match face {
                        Face::F | Face::B => i != 0,
                        Face::R | Face::L => i != top,
                        Face::D => ![(0, top), (top, 0)].contains(&(i, j)),
                        _ => true,
                    }
            }
            Self::F2b => {
                Self::F2l.visible(face, i, j, dimension)
                    && match face {
                        Face::F | Face::B | Face::D => i == 0 || i == top,
                        _ => true,
                    }
            }
            Self::Line => {
                Self::F2l.visible(face, i, j, dimension)
                    && !Self::F2b.visible(face, i, j, dimension)
            }
            Self::Cross => {
                Self::F2l.visible(face, i, j, dimension)
                    && if face.is_side() {
                        i != 0 && i != top
                    } else {
                        ![(0, 0), (0, top), (top, 0), (top, top)].contains(&(i, j))
                    }
            }
            Self::Block2x2x3 => {
                Self::F2l.visible(face, i, j, dimension)
                    && match face {
                        Face::B => false,
                        Face::R => i != top,
                        Face::L => i != 0,
                        Face::D => j != 0,
                        _ => true,
                    }
            }
            Self::Block2x2x2 => {
                Self::Block2x2x3.visible(face, i, j, dimension)
                    && match face {
                        Face::L => false,
                        Face::F | Face::D => i != 0,
                        _ => true,
                    }
            }
            Self::Ll => {
                face == Face::U || (face != Face::D && last_layer_side(face, j, dimension))
            }
            Self::Cll => Self::Ll.visible(face, i, j, dimension) && !is_edge(i, j, dimension),
            Self::Ell => Self::Ll.visible(face, i, j, dimension) && !is_corner(i, j, dimension),
            Self::Oll => face == Face::U,
            Self::Ocll => {
                Self::Oll.visible(face, i, j, dimension)
                    && Self::Cll.visible(face, i, j, dimension)
            }
            Self::Oell => {
                Self::Oll.visible(face, i, j, dimension)
                    && Self::Ell.visible(face, i, j, dimension)
            }
            Self::Coll => {
                Self::Oll.visible(face, i, j, dimension)
                    || Self::Cll.visible(face, i, j, dimension)
            }
            Self::Ocell => {
                Self::Oll.visible(face, i, j, dimension)
                    || Self::Ell.visible(face, i, j, dimension)
            }
            Self::Wv | Self::Cls => !last_layer_side(face, j, dimension),
            Self::Vh => {
                Self::F2l.visible(face, i, j, dimension)
                    || Self::Oell.visible(face, i, j, dimension)
            }
            Self::Els => {
                Self::Vh.visible(face, i, j, dimension)
                    && !matches!(
                        (face, i == top, i == 0, j == 0, j == top),
                        (Face::F, true, _, true, _)
                            | (Face::R, _, true, true, _)
                            | (Face::D, true, _, _, true)
                    )
            }
            Self::Cmll => {
                Self::F2b.visible(face, i, j, dimension) || is_corner(i, j, dimension)
            }
        }
    }
}

impl FromStr for Stage {
    type Err = CubevizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "fl" => Self::Fl,
            "f2l" => Self::F2l,
            "f2l_1" => Self::F2lSlot1,
            "f2l_2" => Self::F2lSlot2,
            "f2l_3" => Self::F2lSlot3,
            "f2l_sm" => Self::F2lSameSlot,
            "f2b" => Self::F2b,
            "line" => Self::Line,
            "cross" => Self::Cross,
            "2x2x2" => Self::Block2x2x2,
            "2x2x3" => Self::Block2x2x3,
            "ll" => Self::Ll,
            "cll" => Self::Cll,
            "ell" => Self::Ell,
            "oll" => Self::Oll,
            "ocll" => Self::Ocll,
            "oell" => Self::Oell,
            "coll" => Self::Coll,
            "ocell" => Self::Ocell,
            "wv" => Self::Wv,
            "vh" => Self::Vh,
            "els" => Self::Els,
            "cls" => Self::Cls,
            "cmll" => Self::Cmll,
            "none" => Self::None,
            "full" => Self::Full,
            _ => return Err(RenderError::UnknownStage(s.to_owned()).into()),
        })
    }
}

fn last_layer_side(face: Face, j: u32, dimension: u32) -> bool {
    face.is_side() && j == dimension - 1
}

fn is_edge(i: u32, j: u32, dimension: u32) -> bool {
    let top = dimension - 1;
    ((i == 0 || i == top) && j != 0 && j != top) || ((j == 0 || j == top) && i != 0 && i != top)
}

fn is_corner(i: u32, j: u32, dimension: u32) -> bool {
    let top = dimension - 1;
    (i == 0 || i == top) && (j == 0 || j == top)
}
