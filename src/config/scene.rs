use crate::error::ShapeError;
use crate::extract::ExtractOptions;
use crate::image::PixelGrid;
use crate::shapes::{Circle, Rectangle, Shape, Triangle};
use crate::types::{Color, Point};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Scene rendered by the `render_scene` demo and traced back.
#[derive(Debug, Deserialize)]
pub struct SceneConfig {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub shapes: Vec<ShapeConfig>,
    #[serde(flatten)]
    pub extract: ExtractOptions,
    #[serde(default)]
    pub output: SceneOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeConfig {
    Rectangle {
        top_left: [i32; 2],
        bottom_right: [i32; 2],
        color: Color,
    },
    Triangle {
        vertices: [[i32; 2]; 3],
        color: Color,
    },
    Circle {
        center: [i32; 2],
        radius: i32,
        color: Color,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SceneOutputConfig {
    /// Grayscale PNG of the rendered scene.
    pub image: Option<PathBuf>,
    /// JSON extraction report.
    pub json_out: Option<PathBuf>,
}

fn point([x, y]: [i32; 2]) -> Point {
    Point::new(x, y)
}

impl ShapeConfig {
    /// Build the shape through the validating constructors.
    pub fn to_shape(&self) -> Result<Shape, ShapeError> {
        Ok(match *self {
            ShapeConfig::Rectangle {
                top_left,
                bottom_right,
                color,
            } => Rectangle::new(point(top_left), point(bottom_right), color)?.into(),
            ShapeConfig::Triangle {
                vertices: [a, b, c],
                color,
            } => Triangle::new(point(a), point(b), point(c), color)?.into(),
            ShapeConfig::Circle {
                center,
                radius,
                color,
            } => Circle::new(point(center), radius, color)?.into(),
        })
    }
}

impl SceneConfig {
    pub fn build_shapes(&self) -> Result<Vec<Shape>, ShapeError> {
        self.shapes.iter().map(ShapeConfig::to_shape).collect()
    }

    /// Blank grid of the configured size with every shape drawn in order.
    pub fn render(&self) -> Result<PixelGrid, ShapeError> {
        let mut grid = PixelGrid::new(self.width, self.height)?;
        crate::shapes::draw_shapes(&mut grid, &self.build_shapes()?)?;
        Ok(grid)
    }
}

pub fn parse_config(json: &str) -> Result<SceneConfig, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse scene: {e}"))
}

pub fn load_config(path: &Path) -> Result<SceneConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
