use crate::bresenham::LineIter;
use crate::constraint::Parity;
use crate::line::Segment;
use crate::point2d::{Axis, Point2D};

/// Walks the trace of `edge` and, once per distinct `axis` coordinate, sweeps
/// the other coordinate by `parity` from the trace point while `inside`
/// holds. The failing point ends the run and is not collected.
///
/// `inside` must reject some point along every sweep or the run never ends.
pub fn scan_convert<F>(edge: Segment, axis: Axis, parity: Parity, inside: F) -> Vec<Point2D>
where
    F: Fn(Point2D) -> bool,
{
    let secondary = axis.other();
    let step = parity.step();
    let mut points = Vec::new();
    let mut prev_row: Option<i32> = None;

    for seed in LineIter::iterate(edge.start, edge.end) {
        let row = seed.get(axis);
        if prev_row == Some(row) {
            continue;
        }
        prev_row = Some(row);

        let first = points.len();
        let mut pos = seed;
        while inside(pos) {
            points.push(pos);
            // the lattice ends at the i32 limits
            let Some(next) = pos.get(secondary).checked_add(step) else {
                break;
            };
            pos = pos.with(secondary, next);
        }
        log::trace!("row {row}: seed {seed}, {} points", points.len() - first);
    }

    points
}
