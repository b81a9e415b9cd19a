use serde::Serialize;

use crate::error::ShapeError;
use crate::image::PixelGrid;
use crate::types::{Color, Point, BACKGROUND};

/// Radius stored by [`Circle::default`]; such a circle draws nothing.
pub const UNDRAWABLE_RADIUS: i32 = -1;

/// Filled disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Circle {
    center: Point,
    radius: i32,
    color: Color,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            center: Point::origin(),
            radius: UNDRAWABLE_RADIUS,
            color: BACKGROUND,
        }
    }
}

impl Circle {
    /// The disk's bounding box `center ± radius` must be representable in
    /// `i32`.
    pub fn new(center: Point, radius: i32, color: Color) -> Result<Self, ShapeError> {
        if radius < 0 {
            return Err(ShapeError::geometry(format!(
                "circle radius must be non-negative, got {radius}"
            )));
        }
        let fits = |c: i32| c.checked_sub(radius).is_some() && c.checked_add(radius).is_some();
        if !fits(center.x) || !fits(center.y) {
            return Err(ShapeError::geometry(format!(
                "circle at ({}, {}) with radius {radius} leaves the i32 plane",
                center.x, center.y
            )));
        }
        Ok(Self {
            center,
            radius,
            color,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_drawable(&self) -> bool {
        self.radius >= 0
    }

    /// Same geometry, different color.
    pub fn recolored(&self, color: Color) -> Self {
        Self {
            center: self.center,
            radius: self.radius,
            color,
        }
    }

    /// Midpoint circle walk over one octant; each step fills the four
    /// horizontal spans mirrored from the current octant point.
    pub fn draw(&self, grid: &mut PixelGrid) -> Result<(), ShapeError> {
        if !self.is_drawable() {
            return Ok(());
        }
        let mut dx = 0;
        let mut dy = self.radius;
        let mut decision = 3 - 2 * i64::from(self.radius);
        loop {
            self.draw_spans(grid, dx, dy)?;
            dx += 1;
            if decision > 0 {
                dy -= 1;
                decision += 4 * i64::from(dx - dy) + 10;
            } else {
                decision += 4 * i64::from(dx) + 6;
            }
            if dy < dx {
                return Ok(());
            }
        }
    }

    fn draw_spans(&self, grid: &mut PixelGrid, dx: i32, dy: i32) -> Result<(), ShapeError> {
        let c = self.center;
        grid.draw_horizontal_line(Point::new(c.x - dx, c.y + dy), c.x + dx, self.color)?;
        grid.draw_horizontal_line(Point::new(c.x - dx, c.y - dy), c.x + dx, self.color)?;
        grid.draw_horizontal_line(Point::new(c.x - dy, c.y + dx), c.x + dy, self.color)?;
        grid.draw_horizontal_line(Point::new(c.x - dy, c.y - dx), c.x + dy, self.color)
    }
}
