//! Flat-colored shape model.
//!
//! [`Shape`] is a closed sum over the three supported primitives. Polygons
//! (rectangles and triangles) share the [`ConvexPolygon`] rasterizer: a
//! bounding-box scan where each point is kept iff it lies on the inner side of
//! every clockwise edge. Circles use their own midpoint span filler.
//!
//! Shapes never change after construction; `recolored` returns a copy.

mod circle;
mod polygon;
mod rectangle;
mod triangle;

pub use circle::{Circle, UNDRAWABLE_RADIUS};
pub use polygon::{in_half_space, ConvexPolygon};
pub use rectangle::Rectangle;
pub use triangle::Triangle;

use serde::Serialize;

use crate::error::ShapeError;
use crate::image::PixelGrid;
use crate::types::{Color, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangle,
    Triangle,
    Circle,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Rectangle(Rectangle),
    Triangle(Triangle),
    Circle(Circle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Shape::Rectangle(r) => r.color(),
            Shape::Triangle(t) => t.color(),
            Shape::Circle(c) => c.color(),
        }
    }

    /// Polygon vertices in clockwise order; `None` for circles.
    pub fn vertices(&self) -> Option<&[Point]> {
        match self {
            Shape::Rectangle(r) => Some(r.vertices()),
            Shape::Triangle(t) => Some(t.vertices()),
            Shape::Circle(_) => None,
        }
    }

    pub fn draw(&self, grid: &mut PixelGrid) -> Result<(), ShapeError> {
        match self {
            Shape::Rectangle(r) => r.draw(grid),
            Shape::Triangle(t) => t.draw(grid),
            Shape::Circle(c) => c.draw(grid),
        }
    }

    pub fn recolored(&self, color: Color) -> Shape {
        match self {
            Shape::Rectangle(r) => Shape::Rectangle(r.recolored(color)),
            Shape::Triangle(t) => Shape::Triangle(t.recolored(color)),
            Shape::Circle(c) => Shape::Circle(c.recolored(color)),
        }
    }

    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Shape::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_triangle(&self) -> Option<&Triangle> {
        match self {
            Shape::Triangle(t) => Some(t),
            _ => None,
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

/// Draw `shapes` in order, stopping at the first failure.
pub fn draw_shapes(grid: &mut PixelGrid, shapes: &[Shape]) -> Result<(), ShapeError> {
    shapes.iter().try_for_each(|shape| shape.draw(grid))
}
