use serde::Serialize;

use super::polygon::{cross, ConvexPolygon};
use crate::error::ShapeError;
use crate::types::{Color, Point};

/// Triangle with one horizontal edge, vertices in clockwise order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Triangle {
    vertices: [Point; 3],
    color: Color,
}

impl Triangle {
    /// Counter-clockwise input is reordered to clockwise by swapping `b` and
    /// `c`. Zero-area triangles and triangles without a horizontal edge are
    /// rejected.
    pub fn new(a: Point, b: Point, c: Point, color: Color) -> Result<Self, ShapeError> {
        let area = cross(a, b, c);
        if area == 0 {
            return Err(ShapeError::geometry(format!(
                "triangle ({}, {}), ({}, {}), ({}, {}) has zero area",
                a.x, a.y, b.x, b.y, c.x, c.y
            )));
        }
        if a.y != b.y && b.y != c.y && c.y != a.y {
            return Err(ShapeError::geometry("triangle has no horizontal edge"));
        }
        let vertices = if area > 0 { [a, b, c] } else { [a, c, b] };
        Ok(Self { vertices, color })
    }

    /// Unchecked constructor for vertices found by the tracer.
    pub(crate) fn from_traced(vertices: [Point; 3], color: Color) -> Self {
        Self { vertices, color }
    }

    /// Same geometry, different color.
    pub fn recolored(&self, color: Color) -> Self {
        Self {
            vertices: self.vertices,
            color,
        }
    }

    /// True when `other` lists the same vertices, possibly starting at a
    /// different one, and has the same color.
    pub fn same_as(&self, other: &Triangle) -> bool {
        self.color == other.color
            && (0..3).any(|shift| {
                (0..3).all(|i| self.vertices[i] == other.vertices[(i + shift) % 3])
            })
    }
}

impl ConvexPolygon for Triangle {
    fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    fn color(&self) -> Color {
        self.color
    }
}
