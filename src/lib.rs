#![doc = include_str!("../README.md")]

// Public modules
pub mod error;
pub mod extract;
pub mod image;
pub mod shapes;
pub mod trace;
pub mod types;

// Demo-binary configuration; not needed by library users.
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::ShapeError;
pub use crate::extract::{
    extract_rectangles, extract_rectangles_and_triangles, ExtractOptions, ExtractionReport,
    ShapeExtractor,
};
pub use crate::image::PixelGrid;
pub use crate::shapes::{draw_shapes, Circle, ConvexPolygon, Rectangle, Shape, ShapeKind, Triangle};
pub use crate::types::{Color, Point, BACKGROUND};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use shape_tracer::prelude::*;
///
/// # fn main() -> Result<(), ShapeError> {
/// let mut grid = PixelGrid::new(6, 6)?;
/// Rectangle::new(Point::new(1, 1), Point::new(3, 2), 70)?.draw(&mut grid)?;
/// let shapes = extract_rectangles(&grid)?;
/// assert_eq!(shapes.len(), 1);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::extract::{extract_rectangles, extract_rectangles_and_triangles};
    pub use crate::image::PixelGrid;
    pub use crate::shapes::{Circle, ConvexPolygon, Rectangle, Shape, Triangle};
    pub use crate::types::Point;
    pub use crate::ShapeError;
}
