use shape_tracer::config::trace;
use shape_tracer::image::io::{load_grayscale_grid, save_grayscale_grid, write_json_file};
use shape_tracer::{draw_shapes, PixelGrid, ShapeExtractor};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = trace::load_config(Path::new(&config_path))?;

    let grid = load_grayscale_grid(&config.input)?;
    let report = ShapeExtractor::new(&grid, config.extract)
        .extract()
        .map_err(|e| format!("Failed to extract shapes from {}: {e}", config.input.display()))?;

    write_json_file(&config.output.shapes_json, &report)?;
    println!(
        "Saved {} rectangles and {} triangles to {} ({:.3} ms)",
        report.rectangle_count,
        report.triangle_count,
        config.output.shapes_json.display(),
        report.elapsed_ms
    );

    if let Some(path) = &config.output.redrawn_image {
        let mut redrawn =
            PixelGrid::new(grid.width(), grid.height()).map_err(|e| e.to_string())?;
        draw_shapes(&mut redrawn, &report.shapes)
            .map_err(|e| format!("Failed to redraw shapes: {e}"))?;
        save_grayscale_grid(&redrawn, path)?;
        println!("Saved redrawn image to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: trace_image <config.json>".to_string()
}
