//! Boundary tracers that rebuild exact shape geometry from pixels.
//!
//! Both tracers start from a seed: the top-left-most pixel of the region, as
//! found by a row-major scan.
//!
//! - Rectangles: walk diagonally down-right while the next pixel is
//!   foreground, then straight down or right to reach the bottom-right
//!   corner. Any non-background color counts, so an embedded triangle does not
//!   stop the walk.
//! - Triangles: follow the left edge down (preferring down-left, then down,
//!   then down-right, same color only; failing those, the first pixel under
//!   the current run) to the bottom row, compare the widths of the top and
//!   bottom rows, and place the apex at the middle of the narrower one.
//!
//! Inputs must be flat, solid, non-overlapping shapes on a [`BACKGROUND`]
//! field. Anything else yields some geometry, not an error.

mod rectangle;
mod triangle;

pub use rectangle::{trace_rectangle, trace_rectangle_with_triangle, RectangleTrace};
pub use triangle::trace_triangle;

use crate::error::ShapeError;
use crate::image::PixelGrid;
use crate::types::{Color, Point, BACKGROUND};

/// Color under the seed; out of range or background seeds are errors.
fn seed_color(grid: &PixelGrid, seed: Point) -> Result<Color, ShapeError> {
    let color = grid.get_point(seed)?;
    if color == BACKGROUND {
        return Err(ShapeError::geometry(format!(
            "seed ({}, {}) is background",
            seed.x, seed.y
        )));
    }
    Ok(color)
}
