use serde::Serialize;

use super::polygon::ConvexPolygon;
use crate::error::ShapeError;
use crate::types::{Color, Point};

/// Axis-aligned rectangle; vertices are stored top-left, top-right,
/// bottom-right, bottom-left.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Rectangle {
    vertices: [Point; 4],
    color: Color,
}

impl Rectangle {
    pub fn new(top_left: Point, bottom_right: Point, color: Color) -> Result<Self, ShapeError> {
        if top_left.x > bottom_right.x || top_left.y > bottom_right.y {
            return Err(ShapeError::geometry(format!(
                "rectangle corner ({}, {}) is not above-left of ({}, {})",
                top_left.x, top_left.y, bottom_right.x, bottom_right.y
            )));
        }
        Ok(Self::spanning(top_left, bottom_right, color))
    }

    /// Build from all four corners, which must already be axis-aligned and
    /// listed clockwise starting at the top-left.
    pub fn from_corners(
        top_left: Point,
        top_right: Point,
        bottom_right: Point,
        bottom_left: Point,
        color: Color,
    ) -> Result<Self, ShapeError> {
        let rect = Self::new(top_left, bottom_right, color)?;
        if rect.vertices != [top_left, top_right, bottom_right, bottom_left] {
            return Err(ShapeError::geometry(
                "rectangle corners must be axis-aligned and clockwise from the top-left",
            ));
        }
        Ok(rect)
    }

    /// Unchecked constructor for corners found by the tracer.
    pub(crate) fn spanning(top_left: Point, bottom_right: Point, color: Color) -> Self {
        Self {
            vertices: [
                top_left,
                Point::new(bottom_right.x, top_left.y),
                bottom_right,
                Point::new(top_left.x, bottom_right.y),
            ],
            color,
        }
    }

    pub fn top_left(&self) -> Point {
        self.vertices[0]
    }

    pub fn bottom_right(&self) -> Point {
        self.vertices[2]
    }

    pub fn width(&self) -> i64 {
        i64::from(self.vertices[2].x) - i64::from(self.vertices[0].x) + 1
    }

    pub fn height(&self) -> i64 {
        i64::from(self.vertices[2].y) - i64::from(self.vertices[0].y) + 1
    }

    /// Same geometry, different color.
    pub fn recolored(&self, color: Color) -> Self {
        Self {
            vertices: self.vertices,
            color,
        }
    }
}

impl ConvexPolygon for Rectangle {
    fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::PixelGrid;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn corners_are_clockwise_from_top_left() {
        let rect = Rectangle::new(p(1, 1), p(3, 2), 70).unwrap();
        assert_eq!(rect.vertices(), &[p(1, 1), p(3, 1), p(3, 2), p(1, 2)]);
        assert_eq!(rect.top_left(), p(1, 1));
        assert_eq!(rect.bottom_right(), p(3, 2));
        assert_eq!((rect.width(), rect.height()), (3, 2));
    }

    #[test]
    fn inverted_corners_are_rejected() {
        assert!(matches!(
            Rectangle::new(p(3, 1), p(1, 2), 70),
            Err(ShapeError::InvalidGeometry(_))
        ));
        assert!(Rectangle::new(p(1, 3), p(3, 2), 70).is_err());
    }

    #[test]
    fn from_corners_checks_alignment_and_winding() {
        assert!(Rectangle::from_corners(p(1, 1), p(3, 1), p(3, 2), p(1, 2), 9).is_ok());
        // counter-clockwise
        assert!(Rectangle::from_corners(p(1, 1), p(1, 2), p(3, 2), p(3, 1), 9).is_err());
        // skewed
        assert!(Rectangle::from_corners(p(1, 1), p(3, 0), p(3, 2), p(1, 2), 9).is_err());
    }

    #[test]
    fn containment_boundary() {
        let rect = Rectangle::new(p(1, 1), p(3, 2), 70).unwrap();
        assert!(rect.contains(p(2, 1)));
        assert!(rect.contains(p(1, 1)));
        assert!(rect.contains(p(3, 2)));
        assert!(!rect.contains(p(4, 1)));
        assert!(!rect.contains(p(0, 1)));
        assert!(!rect.contains(p(2, 3)));
    }

    #[test]
    fn draw_fills_inclusive_box() {
        let mut grid = PixelGrid::new(6, 6).unwrap();
        Rectangle::new(p(1, 1), p(3, 2), 70)
            .unwrap()
            .draw(&mut grid)
            .unwrap();
        let painted: Vec<_> = (0..6)
            .flat_map(|y| (0..6).map(move |x| (x, y)))
            .filter(|&(x, y)| grid.get(x, y).unwrap() == 70)
            .collect();
        assert_eq!(painted, vec![(1, 1), (2, 1), (3, 1), (1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn single_pixel_rectangle() {
        let mut grid = PixelGrid::new(3, 3).unwrap();
        Rectangle::new(p(1, 1), p(1, 1), 4)
            .unwrap()
            .draw(&mut grid)
            .unwrap();
        assert_eq!(grid.data(), &[0, 0, 0, 0, 4, 0, 0, 0, 0]);
    }

    #[test]
    fn draw_out_of_grid_keeps_partial_writes() {
        let mut grid = PixelGrid::new(6, 6).unwrap();
        let err = Rectangle::new(p(3, 0), p(7, 1), 9)
            .unwrap()
            .draw(&mut grid)
            .unwrap_err();
        assert_eq!(
            err,
            ShapeError::OutOfBounds {
                x: 6,
                y: 0,
                width: 6,
                height: 6
            }
        );
        assert_eq!(grid.get(3, 0), Ok(9));
        assert_eq!(grid.get(5, 0), Ok(9));
        assert_eq!(grid.get(3, 1), Ok(0));
    }

    #[test]
    fn huge_rectangle_reports_out_of_bounds() {
        let mut grid = PixelGrid::new(6, 6).unwrap();
        let err = Rectangle::new(p(0, 0), p(70_000, 70_000), 9)
            .unwrap()
            .draw(&mut grid)
            .unwrap_err();
        assert_eq!(
            err,
            ShapeError::OutOfBounds {
                x: 6,
                y: 0,
                width: 6,
                height: 6
            }
        );
        assert!((0..6).all(|x| grid.get(x, 0) == Ok(9)));
        assert_eq!(grid.get(0, 1), Ok(0));
    }

    #[test]
    fn extreme_corners_keep_exact_size_and_containment() {
        let rect = Rectangle::new(p(i32::MIN, -1), p(i32::MAX, 1), 9).unwrap();
        assert_eq!(rect.width(), 1 << 32);
        assert_eq!(rect.height(), 3);
        assert!(rect.contains(p(0, 0)));
        assert!(rect.contains(p(i32::MAX, 1)));
        assert!(!rect.contains(p(0, 2)));
    }

    #[test]
    fn recolored_keeps_geometry() {
        let rect = Rectangle::new(p(1, 1), p(3, 2), 70).unwrap();
        let erased = rect.recolored(0);
        assert_eq!(erased.vertices(), rect.vertices());
        assert_eq!(erased.color(), 0);
        assert_eq!(rect.color(), 70);
    }
}
