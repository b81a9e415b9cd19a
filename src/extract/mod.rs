//! Whole-image shape extraction.
//!
//! The extractor scans a private copy of the grid row by row. Every pixel
//! that is still foreground seeds a rectangle trace (optionally with an
//! embedded-triangle search); the recognised rectangle is then erased from the
//! copy. Each rectangle is emitted right before the triangle it encloses, and
//! rectangles appear in the order their top-left pixels are met.
//!
//! Input must hold only flat, non-overlapping, axis-aligned rectangles (each
//! with at most one embedded triangle) on a background of 0.

mod extractor;
mod options;

pub use extractor::{ExtractionReport, ShapeExtractor};
pub use options::ExtractOptions;

use crate::error::ShapeError;
use crate::image::PixelGrid;
use crate::shapes::Shape;

/// Every rectangle in `grid`, ignoring anything drawn inside them.
pub fn extract_rectangles(grid: &PixelGrid) -> Result<Vec<Shape>, ShapeError> {
    ShapeExtractor::new(grid, ExtractOptions::rectangles_only())
        .extract()
        .map(|report| report.shapes)
}

/// Every rectangle in `grid`, each followed by its embedded triangle if any.
pub fn extract_rectangles_and_triangles(grid: &PixelGrid) -> Result<Vec<Shape>, ShapeError> {
    ShapeExtractor::new(grid, ExtractOptions::with_triangles())
        .extract()
        .map(|report| report.shapes)
}
