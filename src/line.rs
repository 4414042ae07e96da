use std::fmt;

use crate::point2d::{angle, distance, Axis, Point2D};

/// Two ordered lattice points. Direction matters for `angle` and for the
/// discrete trace, not for the line equation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Segment {
    pub start: Point2D,
    pub end: Point2D,
}

impl Segment {
    pub const fn new(start: Point2D, end: Point2D) -> Self {
        Segment { start, end }
    }

    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    pub fn angle(&self) -> f64 {
        angle(self.start, self.end)
    }

    pub fn is_point(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// `secondary = slope * primary + shift`, or `Vertical` when the segment has
/// no extent along the primary axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LineEquation {
    Affine { slope: f64, shift: f64 },
    Vertical,
}

impl LineEquation {
    /// Line through `segment` with `axis` as the independent coordinate.
    /// The shift is anchored at the segment midpoint so neither endpoint
    /// is favoured.
    pub fn from_segment(segment: Segment, axis: Axis) -> LineEquation {
        let secondary = axis.other();
        let (start, end) = (segment.start, segment.end);
        let (x1, y1) = (start.get(axis) as i64, start.get(secondary) as i64);
        let (x2, y2) = (end.get(axis) as i64, end.get(secondary) as i64);

        let dx = x2 - x1;
        let dy = y2 - y1;
        if dx == 0 {
            return LineEquation::Vertical;
        }

        let slope = dy as f64 / dx as f64;
        let shift = (y1 + y2) as f64 / 2.0 - slope * (x1 + x2) as f64 / 2.0;
        LineEquation::Affine { slope, shift }
    }

    /// Secondary coordinate at `primary`; `None` for a vertical line.
    #[inline(always)]
    pub fn eval(&self, primary: f64) -> Option<f64> {
        match *self {
            LineEquation::Affine { slope, shift } => Some(slope * primary + shift),
            LineEquation::Vertical => None,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, LineEquation::Vertical)
    }
}

impl fmt::Display for LineEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineEquation::Affine { slope, shift } => write!(f, "s = {slope}p + {shift}"),
            LineEquation::Vertical => write!(f, "vertical"),
        }
    }
}
