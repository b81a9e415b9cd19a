use crate::error::ShapeError;
use crate::image::PixelGrid;
use crate::types::{BoundingBox, Color, Point};

/// True iff `p` lies on the inner (right-hand, for screen coordinates) side
/// of the directed edge `a -> b`, or on the edge itself.
#[inline]
pub fn in_half_space(a: Point, b: Point, p: Point) -> bool {
    cross(a, p, b) <= 0
}

/// Signed double area of the triangle `a, b, c`; positive when the points
/// run clockwise on screen.
///
/// Computed in `i128`: differences of two `i32` need 33 bits, their
/// products 66.
#[inline]
pub(crate) fn cross(a: Point, b: Point, c: Point) -> i128 {
    let wide = |p: Point| (i128::from(p.x) - i128::from(a.x), i128::from(p.y) - i128::from(a.y));
    let (abx, aby) = wide(b);
    let (acx, acy) = wide(c);
    abx * acy - aby * acx
}

/// Convex polygon with clockwise vertices, filled with a single color.
pub trait ConvexPolygon {
    fn vertices(&self) -> &[Point];
    fn color(&self) -> Color;

    /// Half-space test against every cyclic edge.
    fn contains(&self, p: Point) -> bool {
        let vs = self.vertices();
        let Some(&last) = vs.last() else {
            return false;
        };
        let mut prev = last;
        for &v in vs {
            if !in_half_space(prev, v, p) {
                return false;
            }
            prev = v;
        }
        true
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::of(self.vertices())
    }

    /// Scan the bounding box and paint every contained point.
    ///
    /// Not atomic: when a contained point falls outside `grid`, pixels already
    /// painted stay painted and the error is returned.
    fn draw(&self, grid: &mut PixelGrid) -> Result<(), ShapeError> {
        let Some(bbox) = self.bounding_box() else {
            return Ok(());
        };
        let color = self.color();
        for p in bbox.points().filter(|&p| self.contains(p)) {
            grid.set_point(p, color)?;
        }
        Ok(())
    }
}
