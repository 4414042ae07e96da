use crate::point2d::Point2D;

/// Integer line trace from `from` to `to`, both ends inclusive.
///
/// Steps one unit along the longer extent per item. Error ties (`d == 0`)
/// step the shorter coordinate, so the trace of `a -> b` can differ from the
/// reverse of `b -> a` on lines that pass exactly between two lattice points.
pub struct LineIter {
    // major/minor are x/y, or y/x when `steep`
    major: i32,
    minor: i32,
    major_step: i32,
    minor_step: i32,
    major_len: i64,
    minor_len: i64,
    error: i64,
    steep: bool,
    index: i64,
    end: Point2D,
    ended: bool,
}

impl LineIter {
    pub fn iterate(from: Point2D, to: Point2D) -> Self {
        let dx = (to.x as i64 - from.x as i64).abs();
        let dy = (to.y as i64 - from.y as i64).abs();
        let sx = if to.x > from.x { 1 } else { -1 };
        let sy = if to.y > from.y { 1 } else { -1 };

        let steep = dx > dy;
        let (major, minor, major_step, minor_step, major_len, minor_len) = if steep {
            (from.x, from.y, sx, sy, dx, dy)
        } else {
            (from.y, from.x, sy, sx, dy, dx)
        };

        Self {
            major,
            minor,
            major_step,
            minor_step,
            major_len,
            minor_len,
            error: 2 * minor_len - major_len,
            steep,
            index: 0,
            end: to,
            ended: false,
        }
    }

    fn current(&self) -> Point2D {
        if self.steep {
            Point2D::new(self.major, self.minor)
        } else {
            Point2D::new(self.minor, self.major)
        }
    }
}

impl Iterator for LineIter {
    type Item = Point2D;

    fn next(&mut self) -> Option<Self::Item> {
        if self.ended {
            return None;
        }
        if self.index == self.major_len {
            // the last point is pinned to the exact endpoint
            self.ended = true;
            return Some(self.end);
        }

        let item = self.current();
        while self.error >= 0 {
            self.minor += self.minor_step;
            self.error -= 2 * self.major_len;
        }
        self.major += self.major_step;
        self.error += 2 * self.minor_len;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.ended { 0 } else { (self.major_len - self.index + 1) as usize };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineIter {}
