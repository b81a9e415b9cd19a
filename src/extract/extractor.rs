use std::time::Instant;

use log::debug;
use serde::Serialize;

use super::options::ExtractOptions;
use crate::error::ShapeError;
use crate::image::PixelGrid;
use crate::shapes::{ConvexPolygon, Rectangle, Shape};
use crate::trace::{trace_rectangle, trace_rectangle_with_triangle};
use crate::types::{Point, BACKGROUND};

/// Shapes recovered from one grid, in discovery order.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionReport {
    pub width: usize,
    pub height: usize,
    pub rectangle_count: usize,
    pub triangle_count: usize,
    pub elapsed_ms: f64,
    pub shapes: Vec<Shape>,
}

/// Row-major scan/erase driver.
///
/// Owns a working copy of the input. The first foreground pixel met in scan
/// order is always the top-left pixel of an unseen rectangle; once traced, the
/// rectangle's whole box is painted back to background in the copy so none of
/// its pixels seed again.
pub struct ShapeExtractor {
    work: PixelGrid,
    options: ExtractOptions,
    shapes: Vec<Shape>,
    rectangle_count: usize,
    triangle_count: usize,
}

impl ShapeExtractor {
    pub fn new(grid: &PixelGrid, options: ExtractOptions) -> Self {
        Self {
            work: grid.clone(),
            options,
            shapes: Vec::new(),
            rectangle_count: 0,
            triangle_count: 0,
        }
    }

    pub fn extract(mut self) -> Result<ExtractionReport, ShapeError> {
        let t0 = Instant::now();
        let width = self.work.width();
        let height = self.work.height();
        // Grid dimensions are bounded by `MAX_DIMENSION`, so these casts are exact.
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                if self.work.get(x, y)? != BACKGROUND {
                    self.process_seed(Point::new(x, y))?;
                }
            }
        }
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "extract: {}x{} -> rectangles={} triangles={} elapsed_ms={:.3}",
            width, height, self.rectangle_count, self.triangle_count, elapsed_ms
        );
        Ok(ExtractionReport {
            width,
            height,
            rectangle_count: self.rectangle_count,
            triangle_count: self.triangle_count,
            elapsed_ms,
            shapes: self.shapes,
        })
    }

    fn process_seed(&mut self, seed: Point) -> Result<(), ShapeError> {
        let (rectangle, triangle) = if self.options.detect_triangles {
            let traced = trace_rectangle_with_triangle(&self.work, seed)?;
            (traced.rectangle, traced.triangle)
        } else {
            (trace_rectangle(&self.work, seed)?, None)
        };
        debug!(
            "extract: rectangle ({}, {})..=({}, {}) color={} triangle={}",
            seed.x,
            seed.y,
            rectangle.bottom_right().x,
            rectangle.bottom_right().y,
            rectangle.color(),
            triangle.is_some()
        );
        self.erase(&rectangle)?;
        self.rectangle_count += 1;
        self.shapes.push(rectangle.into());
        if let Some(triangle) = triangle {
            self.triangle_count += 1;
            self.shapes.push(triangle.into());
        }
        Ok(())
    }

    fn erase(&mut self, rectangle: &Rectangle) -> Result<(), ShapeError> {
        rectangle.recolored(BACKGROUND).draw(&mut self.work)
    }
}
