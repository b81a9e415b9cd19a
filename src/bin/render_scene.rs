use shape_tracer::config::scene;
use shape_tracer::image::io::{save_grayscale_grid, write_json_file};
use shape_tracer::{draw_shapes, PixelGrid, Shape, ShapeExtractor};
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
    let config = scene::load_config(Path::new(&config_path))?;

    let grid = config
        .render()
        .map_err(|e| format!("Failed to render scene: {e}"))?;
    println!("Rendered {}x{} scene:\n{grid}", grid.width(), grid.height());

    let report = ShapeExtractor::new(&grid, config.extract)
        .extract()
        .map_err(|e| format!("Failed to extract shapes: {e}"))?;
    print_summary(&report.shapes);

    let mut redrawn =
        PixelGrid::new(grid.width(), grid.height()).map_err(|e| e.to_string())?;
    draw_shapes(&mut redrawn, &report.shapes)
        .map_err(|e| format!("Failed to redraw shapes: {e}"))?;
    println!("Redrawn from recovered shapes:\n{redrawn}");
    println!("round trip exact: {}", redrawn == grid);

    if let Some(path) = &config.output.image {
        save_grayscale_grid(&grid, path)?;
        println!("Saved scene image to {}", path.display());
    }
    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("Saved {} shapes to {}", report.shapes.len(), path.display());
    }

    Ok(())
}

fn print_summary(shapes: &[Shape]) {
    println!("Recovered {} shapes", shapes.len());
    for shape in shapes {
        match shape.vertices() {
            Some(vs) => {
                let pts: Vec<String> = vs.iter().map(|v| format!("({}, {})", v.x, v.y)).collect();
                println!("  {:?} color={} [{}]", shape.kind(), shape.color(), pts.join(" "));
            }
            None => println!("  {:?} color={}", shape.kind(), shape.color()),
        }
    }
}

fn usage() -> String {
    "Usage: render_scene <scene.json>".to_string()
}
