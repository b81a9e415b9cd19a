use log::trace;

use super::{seed_color, triangle::trace_triangle};
use crate::error::ShapeError;
use crate::image::PixelGrid;
use crate::shapes::{ConvexPolygon, Rectangle, Triangle};
use crate::types::{BoundingBox, Point};

/// Outcome of tracing a rectangle that may enclose one triangle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RectangleTrace {
    pub rectangle: Rectangle,
    pub triangle: Option<Triangle>,
}

impl RectangleTrace {
    pub fn triangle_found(&self) -> bool {
        self.triangle.is_some()
    }
}

/// Walk from the top-left pixel of a foreground rectangle to its bottom-right
/// pixel.
///
/// The walk goes diagonally while the next diagonal pixel is foreground (of
/// any color), then finishes along whichever edge is longer.
pub(crate) fn bottom_right_corner(grid: &PixelGrid, top_left: Point) -> Point {
    let fg = |x: i32, y: i32| grid.is_foreground(x, y);
    let (mut x, mut y) = (top_left.x, top_left.y);
    while fg(x + 1, y + 1) {
        x += 1;
        y += 1;
    }
    if fg(x, y + 1) {
        while fg(x, y + 1) {
            y += 1;
        }
    } else {
        while fg(x + 1, y) {
            x += 1;
        }
    }
    Point::new(x, y)
}

/// Recover the rectangle whose top-left pixel is `top_left`.
pub fn trace_rectangle(grid: &PixelGrid, top_left: Point) -> Result<Rectangle, ShapeError> {
    let color = seed_color(grid, top_left)?;
    let bottom_right = bottom_right_corner(grid, top_left);
    trace!(
        "rectangle ({}, {})..=({}, {}) color={color}",
        top_left.x,
        top_left.y,
        bottom_right.x,
        bottom_right.y
    );
    Ok(Rectangle::spanning(top_left, bottom_right, color))
}

/// Recover the rectangle at `top_left` and, if one is embedded, the triangle
/// inside it.
///
/// The first pixel in the rectangle (row-major) whose color differs from the
/// rectangle's own is taken as the triangle's top-left pixel.
pub fn trace_rectangle_with_triangle(
    grid: &PixelGrid,
    top_left: Point,
) -> Result<RectangleTrace, ShapeError> {
    let rectangle = trace_rectangle(grid, top_left)?;
    let color = rectangle.color();
    let bounds = BoundingBox {
        min: rectangle.top_left(),
        max: rectangle.bottom_right(),
    };
    let mut triangle = None;
    for p in bounds.points() {
        if grid.get_point(p)? != color {
            triangle = Some(trace_triangle(grid, p)?);
            break;
        }
    }
    Ok(RectangleTrace {
        rectangle,
        triangle,
    })
}
