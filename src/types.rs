use nalgebra::Point2;
use serde::Serialize;

/// Integer pixel coordinate; `y` grows downward.
pub type Point = Point2<i32>;

/// Grayscale intensity of a pixel or a shape.
pub type Color = u8;

/// Reserved intensity meaning "no shape here". Never a drawable shape color.
pub const BACKGROUND: Color = 0;

/// Inclusive axis-aligned bounds of a set of points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// Bounds of `points`, or `None` for an empty slice.
    pub fn of(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = Self {
            min: *first,
            max: *first,
        };
        for p in rest {
            bbox.min.x = bbox.min.x.min(p.x);
            bbox.min.y = bbox.min.y.min(p.y);
            bbox.max.x = bbox.max.x.max(p.x);
            bbox.max.y = bbox.max.y.max(p.y);
        }
        Some(bbox)
    }

    /// Row-major iterator over every integer point inside the box.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (min, max) = (self.min, self.max);
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_covers_all_vertices() {
        let pts = [Point::new(2, 1), Point::new(3, 2), Point::new(1, 2)];
        let bbox = BoundingBox::of(&pts).unwrap();
        assert_eq!(bbox.min, Point::new(1, 1));
        assert_eq!(bbox.max, Point::new(3, 2));
        assert_eq!(bbox.points().count(), 6);
        assert_eq!(bbox.points().next(), Some(Point::new(1, 1)));
    }

    #[test]
    fn bounding_box_of_nothing_is_none() {
        assert!(BoundingBox::of(&[]).is_none());
    }
}
