use crate::error::RasterError;
use crate::line::LineEquation;
use crate::point2d::{Axis, Point2D};

/// Direction along the secondary axis that points into the triangle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Parity {
    /// +1
    Forward,
    /// -1
    Backward,
}

impl Parity {
    #[inline(always)]
    pub fn step(self) -> i32 {
        match self {
            Parity::Forward => 1,
            Parity::Backward => -1,
        }
    }
}

impl TryFrom<i32> for Parity {
    type Error = RasterError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Parity::Forward),
            -1 => Ok(Parity::Backward),
            other => Err(RasterError::InvalidParity(other)),
        }
    }
}

/// Half-plane membership test against one triangle edge.
///
/// `AtOrBelow` keeps the boundary, `Above` drops it, so a lattice point lying
/// exactly on an edge shared by two half-planes is claimed by only one side.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Constraint {
    /// The edge has no extent along the primary axis and bounds nothing.
    Unbounded,
    AtOrBelow { slope: f64, shift: f64, axis: Axis },
    Above { slope: f64, shift: f64, axis: Axis },
}

impl Constraint {
    pub fn new(line: LineEquation, axis: Axis, parity: Parity) -> Constraint {
        match (line, parity) {
            (LineEquation::Vertical, _) => Constraint::Unbounded,
            (LineEquation::Affine { slope, shift }, Parity::Forward) => {
                Constraint::AtOrBelow { slope, shift, axis }
            }
            (LineEquation::Affine { slope, shift }, Parity::Backward) => {
                Constraint::Above { slope, shift, axis }
            }
        }
    }

    #[inline(always)]
    pub fn contains(&self, p: Point2D) -> bool {
        match *self {
            Constraint::Unbounded => true,
            Constraint::AtOrBelow { slope, shift, axis } => {
                p.get(axis.other()) as f64 <= slope * p.get(axis) as f64 + shift
            }
            Constraint::Above { slope, shift, axis } => {
                p.get(axis.other()) as f64 > slope * p.get(axis) as f64 + shift
            }
        }
    }

    pub fn is_bounded(&self) -> bool {
        !matches!(self, Constraint::Unbounded)
    }
}
