use std::f64::consts::PI;

use crate::constraint::{Constraint, Parity};
use crate::line::{LineEquation, Segment};
use crate::point2d::{Axis, Point2D};
use crate::scan::scan_convert;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Triangle {
    pub a: Point2D,
    pub b: Point2D,
    pub c: Point2D,
}

/// Everything the rasterizer decides before scanning.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RasterPlan {
    pub scan_edge: Segment,
    pub apex: Point2D,
    pub orientation: Axis,
    pub parity: Parity,
    pub bounds: [Constraint; 2],
}

impl RasterPlan {
    #[inline(always)]
    pub fn contains(&self, p: Point2D) -> bool {
        self.bounds[0].contains(p) && self.bounds[1].contains(p)
    }
}

impl Triangle {
    pub const fn new(a: Point2D, b: Point2D, c: Point2D) -> Self {
        Triangle { a, b, c }
    }

    /// `ab`, `bc`, `ca`, in the order used for tie-breaking.
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    pub fn vertices(&self) -> [Point2D; 3] {
        [self.a, self.b, self.c]
    }

    /// Twice the signed shoelace area; positive for counter-clockwise.
    pub fn doubled_area(&self) -> i64 {
        let ab = (self.b.x as i64 - self.a.x as i64, self.b.y as i64 - self.a.y as i64);
        let ac = (self.c.x as i64 - self.a.x as i64, self.c.y as i64 - self.a.y as i64);
        ab.0 * ac.1 - ab.1 * ac.0
    }

    pub fn is_degenerate(&self) -> bool {
        self.doubled_area() == 0
    }

    /// Index into `edges()` of the longest edge. Equal lengths resolve to
    /// the earliest edge.
    pub fn longest_edge(&self) -> usize {
        let edges = self.edges();
        let mut best = 0;
        for (i, edge) in edges.iter().enumerate().skip(1) {
            if edge.length() > edges[best].length() {
                best = i;
            }
        }
        best
    }

    /// Picks the scan edge, orientation, parity and the two bounding
    /// half-planes.
    pub fn plan(&self) -> RasterPlan {
        let edges = self.edges();
        let scan_idx = self.longest_edge();
        let scan_edge = edges[scan_idx];
        // edge k ends where edge k+1 starts, so the vertex opposite edge k
        // is the start of edge k+2
        let first = edges[(scan_idx + 2) % 3];
        let second = edges[(scan_idx + 1) % 3];
        let apex = first.start;

        let orientation = orientation_for(scan_edge.angle());
        let secondary = orientation.other();

        let axial = LineEquation::from_segment(scan_edge, orientation);
        let parity = match axial.eval(apex.get(orientation) as f64) {
            Some(on_edge) if on_edge < apex.get(secondary) as f64 => Parity::Forward,
            _ => Parity::Backward,
        };

        let g = LineEquation::from_segment(first, orientation);
        let h = LineEquation::from_segment(second, orientation);

        log::debug!(
            "scan edge {scan_edge} (angle {:.4}), apex {apex}, orientation {}, parity {}",
            scan_edge.angle(),
            orientation.index(),
            parity.step()
        );
        log::debug!("axial {axial}, bounds {g} / {h}");

        RasterPlan {
            scan_edge,
            apex,
            orientation,
            parity,
            bounds: [
                Constraint::new(g, orientation, parity),
                Constraint::new(h, orientation, parity),
            ],
        }
    }

    /// Lattice points inside or on the boundary of the triangle, in scan
    /// order.
    pub fn rasterize(&self) -> Vec<Point2D> {
        if self.edges().iter().all(|e| e.is_point()) {
            log::debug!("triangle collapsed to {}", self.a);
            return vec![self.a];
        }

        let plan = self.plan();
        let points =
            scan_convert(plan.scan_edge, plan.orientation, plan.parity, |p| plan.contains(p));
        log::debug!("{} points", points.len());
        points
    }
}

impl From<[Point2D; 3]> for Triangle {
    fn from([a, b, c]: [Point2D; 3]) -> Self {
        Triangle { a, b, c }
    }
}

/// Edges within 45 degrees of vertical scan by row, the rest by column.
pub fn orientation_for(angle: f64) -> Axis {
    let quarter = PI / 4.0;
    let three_quarters = 3.0 * PI / 4.0;
    if (quarter..three_quarters).contains(&angle)
        || (-three_quarters..-quarter).contains(&angle)
    {
        Axis::Y
    } else {
        Axis::X
    }
}

pub fn rasterize(a: Point2D, b: Point2D, c: Point2D) -> Vec<Point2D> {
    Triangle::new(a, b, c).rasterize()
}
