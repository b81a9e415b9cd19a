//! Owned single-channel u8 grid in row-major layout (index `y * width + x`).
//!
//! Every accessor is bounds-checked and reports the offending coordinate as
//! [`ShapeError::OutOfBounds`]; a failed access never modifies the grid.
use std::fmt;

use super::traits::{ImageView, ImageViewMut};
use crate::error::ShapeError;
use crate::types::{Color, Point, BACKGROUND};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<Color>,
}

impl PixelGrid {
    /// Construct a `width × height` grid filled with [`BACKGROUND`].
    pub fn new(width: usize, height: usize) -> Result<Self, ShapeError> {
        Self::filled(width, height, BACKGROUND)
    }

    /// Construct a `width × height` grid with every pixel set to `fill`.
    pub fn filled(width: usize, height: usize, fill: Color) -> Result<Self, ShapeError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![fill; len],
        })
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(width: usize, height: usize, data: Vec<Color>) -> Result<Self, ShapeError> {
        let expected = checked_len(width, height)?;
        if data.len() != expected {
            return Err(ShapeError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[Color] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<Color> {
        self.data
    }

    /// True iff `(x, y)` addresses a pixel of this grid.
    #[inline]
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Result<Color, ShapeError> {
        let idx = self.checked_index(x, y)?;
        Ok(self.data[idx])
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: Color) -> Result<(), ShapeError> {
        let idx = self.checked_index(x, y)?;
        self.data[idx] = value;
        Ok(())
    }

    #[inline]
    pub fn get_point(&self, p: Point) -> Result<Color, ShapeError> {
        self.get(p.x, p.y)
    }

    #[inline]
    pub fn set_point(&mut self, p: Point, value: Color) -> Result<(), ShapeError> {
        self.set(p.x, p.y, value)
    }

    /// True iff `(x, y)` is in range and holds anything but [`BACKGROUND`].
    #[inline]
    pub fn is_foreground(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Ok(v) if v != BACKGROUND)
    }

    /// Fill `(start.x ..= x_end, start.y)` with `color`.
    ///
    /// The whole span is validated before any pixel is written.
    pub fn draw_horizontal_line(
        &mut self,
        start: Point,
        x_end: i32,
        color: Color,
    ) -> Result<(), ShapeError> {
        if start.x > x_end {
            return Err(self.out_of_bounds(start.x, start.y));
        }
        self.checked_index(start.x, start.y)?;
        self.checked_index(x_end, start.y)?;
        // Both ends are in range, so the casts below cannot wrap.
        let row = self.row_mut(start.y as usize);
        row[start.x as usize..=x_end as usize].fill(color);
        Ok(())
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize, ShapeError> {
        self.index(x, y).ok_or_else(|| self.out_of_bounds(x, y))
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> ShapeError {
        ShapeError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Largest width or height; every pixel must be addressable with `i32`.
pub const MAX_DIMENSION: usize = i32::MAX as usize;

fn checked_len(width: usize, height: usize) -> Result<usize, ShapeError> {
    if width == 0 || height == 0 {
        return Err(ShapeError::EmptyGrid { width, height });
    }
    let too_large = ShapeError::GridTooLarge {
        width,
        height,
        max: MAX_DIMENSION,
    };
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(too_large);
    }
    width.checked_mul(height).ok_or(too_large)
}

impl ImageView for PixelGrid {
    type Pixel = Color;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[Color] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

impl ImageViewMut for PixelGrid {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Color] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }
}

/// Whitespace-separated intensities, one row per line.
impl fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for v in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{v}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
