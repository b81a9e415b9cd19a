use log::trace;

use super::seed_color;
use crate::error::ShapeError;
use crate::image::PixelGrid;
use crate::shapes::Triangle;
use crate::types::{Color, Point};

/// Preferred order when following the left edge downward.
const DOWN_STEPS: [(i32, i32); 3] = [(-1, 1), (0, 1), (1, 1)];

fn same_color(grid: &PixelGrid, x: i32, y: i32, color: Color) -> bool {
    matches!(grid.get(x, y), Ok(v) if v == color)
}

/// First same-colored pixel on the row below `p`, more than one column to
/// its right but not past the end of the run that starts at `p`.
///
/// An edge that moves inward by two or more pixels per row has no
/// neighbour in [`DOWN_STEPS`].
fn first_below_run(grid: &PixelGrid, p: Point, color: Color) -> Option<Point> {
    let run_end = p.x + run_length(grid, p, color);
    (p.x + 2..=run_end)
        .map(|x| Point::new(x, p.y + 1))
        .find(|n| same_color(grid, n.x, n.y, color))
}

/// Follow the left edge from `top_left` down to the last row of the triangle,
/// then slide left along that row.
fn find_bottom_left(grid: &PixelGrid, top_left: Point, color: Color) -> Point {
    let mut p = top_left;
    loop {
        let next = DOWN_STEPS
            .iter()
            .map(|&(dx, dy)| Point::new(p.x + dx, p.y + dy))
            .find(|n| same_color(grid, n.x, n.y, color))
            .or_else(|| first_below_run(grid, p, color));
        match next {
            Some(n) => p = n,
            None => break,
        }
    }
    // A wide apex can leave the walk right of the row start.
    while same_color(grid, p.x - 1, p.y, color) {
        p.x -= 1;
    }
    p
}

/// Number of same-colored pixels to the right of `left` on its row.
fn run_length(grid: &PixelGrid, left: Point, color: Color) -> i32 {
    let mut x = left.x;
    while same_color(grid, x + 1, left.y, color) {
        x += 1;
    }
    x - left.x
}

/// Recover the triangle whose top-left pixel is `top_left`.
///
/// The row that is wider between the top and bottom rows holds the flat edge;
/// the apex sits at the middle of the narrower row.
pub fn trace_triangle(grid: &PixelGrid, top_left: Point) -> Result<Triangle, ShapeError> {
    let color = seed_color(grid, top_left)?;
    let bottom_left = find_bottom_left(grid, top_left, color);
    let top_length = run_length(grid, top_left, color);
    let bottom_length = run_length(grid, bottom_left, color);

    let vertices = if top_length > bottom_length {
        let apex = Point::new(bottom_left.x + bottom_length / 2, bottom_left.y);
        [
            top_left,
            Point::new(top_left.x + top_length, top_left.y),
            apex,
        ]
    } else {
        let apex = Point::new(top_left.x + top_length / 2, top_left.y);
        [
            apex,
            Point::new(bottom_left.x + bottom_length, bottom_left.y),
            bottom_left,
        ]
    };
    trace!(
        "triangle top_len={top_length} bottom_len={bottom_length} vertices={:?} color={color}",
        vertices.map(|v| (v.x, v.y))
    );
    Ok(Triangle::from_traced(vertices, color))
}
