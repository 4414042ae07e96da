//! Scanline triangle rasterizer over the integer lattice.
//! `Triangle::rasterize` walks the longest edge and sweeps each column or
//! row toward the opposite vertex, bounded by the two remaining edges.

pub mod batch;
pub mod bresenham;
pub mod constraint;
pub mod error;
pub mod line;
pub mod parse;
pub mod point2d;
pub mod scan;
pub mod screen;
pub mod triangle;

pub use batch::{build_pool, rasterize_all};
pub use constraint::{Constraint, Parity};
pub use error::{ParseError, RasterError};
pub use line::{LineEquation, Segment};
pub use point2d::{angle, distance, Axis, Point2D};
pub use screen::Canvas;
pub use triangle::{rasterize, RasterPlan, Triangle};
