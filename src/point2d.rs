use std::fmt;
use std::ops::{Add, Sub};

/// A lattice coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

/// Which coordinate is treated as the independent one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

impl Point2D {
    pub const fn new(x: i32, y: i32) -> Self {
        Point2D { x, y }
    }

    #[inline(always)]
    pub fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Copy of `self` with the `axis` coordinate replaced.
    #[inline(always)]
    pub fn with(self, axis: Axis, value: i32) -> Point2D {
        match axis {
            Axis::X => Point2D { x: value, y: self.y },
            Axis::Y => Point2D { x: self.x, y: value },
        }
    }
}

impl From<(i32, i32)> for Point2D {
    fn from((x, y): (i32, i32)) -> Self {
        Point2D { x, y }
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl Add for Point2D {
    type Output = Point2D;
    fn add(self, other: Point2D) -> Point2D {
        Point2D { x: self.x + other.x, y: self.y + other.y }
    }
}

impl Sub for Point2D {
    type Output = Point2D;
    fn sub(self, other: Point2D) -> Point2D {
        Point2D { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Euclidean length of `p2 - p1`.
#[inline(always)]
pub fn distance(p1: Point2D, p2: Point2D) -> f64 {
    let dx = p2.x as f64 - p1.x as f64;
    let dy = p2.y as f64 - p1.y as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Signed angle of `p2 - p1` in radians, within `(-pi, pi]`.
/// A zero vector has angle `0`.
#[inline(always)]
pub fn angle(p1: Point2D, p2: Point2D) -> f64 {
    if p1 == p2 {
        return 0.0;
    }
    let dx = p2.x as f64 - p1.x as f64;
    let dy = p2.y as f64 - p1.y as f64;
    dy.atan2(dx)
}
