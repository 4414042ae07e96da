use std::path::Path;

use image::{GrayImage, Luma};

use crate::error::RasterError;
use crate::point2d::Point2D;

/// Boolean raster covering a set of points, with a one cell margin on the
/// high side of each axis.
pub struct Canvas {
    pub origin: Point2D,
    pub width: u32,
    pub height: u32,
    cells: Vec<bool>,
}

impl Canvas {
    pub fn new(origin: Point2D, width: u32, height: u32) -> Result<Self, RasterError> {
        let len = width
            .checked_mul(height)
            .ok_or(RasterError::CanvasTooLarge { width: width as u64, height: height as u64 })?;
        Ok(Self {
            origin,
            width,
            height,
            cells: vec![false; len as usize],
        })
    }

    /// Smallest canvas holding `points`: `max - min + 2` cells per axis.
    pub fn fit(points: &[Point2D]) -> Result<Self, RasterError> {
        let first = points.first().ok_or(RasterError::EmptyCanvas)?;
        let (mut min, mut max) = (*first, *first);
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        let span_x = (max.x as i64 - min.x as i64 + 2) as u64;
        let span_y = (max.y as i64 - min.y as i64 + 2) as u64;
        let too_large = || RasterError::CanvasTooLarge { width: span_x, height: span_y };
        let width = u32::try_from(span_x).map_err(|_| too_large())?;
        let height = u32::try_from(span_y).map_err(|_| too_large())?;
        let mut canvas = Canvas::new(min, width, height)?;
        for p in points {
            canvas.mark(*p);
        }
        Ok(canvas)
    }

    fn index(&self, p: Point2D) -> Option<usize> {
        let x = p.x as i64 - self.origin.x as i64;
        let y = p.y as i64 - self.origin.y as i64;
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y * self.width as i64 + x) as usize)
    }

    /// Sets the cell under `p`. Points outside the canvas are ignored.
    pub fn mark(&mut self, p: Point2D) {
        if let Some(i) = self.index(p) {
            self.cells[i] = true;
        }
    }

    pub fn is_set(&self, p: Point2D) -> bool {
        self.index(p).is_some_and(|i| self.cells[i])
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// One text line per row, highest `y` first.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        if self.width == 0 {
            return out;
        }
        for row in self.cells.chunks(self.width as usize).rev() {
            out.extend(row.iter().map(|&c| if c { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }

    pub fn to_image(&self) -> GrayImage {
        let mut img = GrayImage::new(self.width, self.height);
        for (i, &c) in self.cells.iter().enumerate() {
            if c {
                let x = i as u32 % self.width;
                let y = i as u32 / self.width;
                // image rows run top-down
                img.put_pixel(x, self.height - 1 - y, Luma([255]));
            }
        }
        img
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), RasterError> {
        self.to_image().save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}
