use shape_tracer::{
    draw_shapes, extract_rectangles, extract_rectangles_and_triangles, PixelGrid, Point,
    Rectangle, Shape, ShapeError, Triangle,
};

const SIZE: usize = 6;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ShapeError> {
    // Demo: one image with two rectangles, one with a triangle inside the first.
    let p = Point::new;
    let originals: Vec<Shape> = vec![
        Rectangle::new(p(1, 1), p(3, 2), 70)?.into(),
        Rectangle::new(p(3, 4), p(4, 5), 140)?.into(),
        Triangle::new(p(2, 1), p(3, 2), p(1, 2), 210)?.into(),
    ];

    let mut rectangles_only = PixelGrid::new(SIZE, SIZE)?;
    let mut with_triangle = PixelGrid::new(SIZE, SIZE)?;
    draw_shapes(&mut rectangles_only, &originals[..2])?;
    draw_shapes(&mut with_triangle, &originals)?;

    println!("Original images:\n");
    println!("{rectangles_only}\n");
    println!("{with_triangle}\n");

    let found_rectangles = extract_rectangles(&rectangles_only)?;
    let found_all = extract_rectangles_and_triangles(&with_triangle)?;

    let mut redrawn_rectangles = PixelGrid::new(SIZE, SIZE)?;
    let mut redrawn_all = PixelGrid::new(SIZE, SIZE)?;
    draw_shapes(&mut redrawn_rectangles, &found_rectangles)?;
    draw_shapes(&mut redrawn_all, &found_all)?;

    println!("New images:\n");
    println!("{redrawn_rectangles}\n");
    println!("{redrawn_all}\n");

    println!(
        "round trip: rectangles={} with_triangle={}",
        redrawn_rectangles == rectangles_only,
        redrawn_all == with_triangle
    );
    Ok(())
}
