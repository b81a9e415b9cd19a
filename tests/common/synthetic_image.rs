use shape_tracer::{draw_shapes, PixelGrid, Point, Rectangle, Shape, Triangle};

pub fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// Draws `shapes` in order on a blank `width × height` grid.
pub fn render(width: usize, height: usize, shapes: &[Shape]) -> PixelGrid {
    let mut grid = PixelGrid::new(width, height).expect("grid dimensions must be positive");
    draw_shapes(&mut grid, shapes).expect("synthetic shapes must fit the grid");
    grid
}

/// The two-rectangle, one-triangle sample used by the demo binary (6x6).
pub fn demo_shapes() -> Vec<Shape> {
    vec![
        Rectangle::new(p(1, 1), p(3, 2), 70).unwrap().into(),
        Rectangle::new(p(3, 4), p(4, 5), 140).unwrap().into(),
        Triangle::new(p(2, 1), p(3, 2), p(1, 2), 210).unwrap().into(),
    ]
}

/// A 20x12 scene mixing apex-up and apex-down embedded triangles.
pub fn framed_scene() -> (usize, usize, Vec<Shape>) {
    let shapes = vec![
        Rectangle::new(p(1, 1), p(8, 6), 90).unwrap().into(),
        Triangle::new(p(4, 2), p(6, 4), p(2, 4), 200).unwrap().into(),
        Rectangle::new(p(11, 2), p(14, 9), 60).unwrap().into(),
        Rectangle::new(p(3, 8), p(6, 10), 150).unwrap().into(),
        Triangle::new(p(4, 8), p(6, 8), p(5, 9), 25).unwrap().into(),
    ];
    (20, 12, shapes)
}

/// Grid of `cols × rows` rectangles, each `cell_w × cell_h`, separated by
/// `gap` background pixels. With `triangles`, each rectangle gets a small
/// apex-up triangle near its top-left corner (needs `cell_w >= 4`,
/// `cell_h >= 3`).
///
/// Shapes are returned as `(rectangle, triangle)` groups in row-major order.
pub fn rectangle_lattice(
    cols: usize,
    rows: usize,
    cell_w: i32,
    cell_h: i32,
    gap: i32,
    triangles: bool,
) -> (usize, usize, Vec<Vec<Shape>>) {
    assert!(cell_w > 0 && cell_h > 0 && gap > 0, "lattice needs positive sizes");
    let width = (gap + cols as i32 * (cell_w + gap)) as usize;
    let height = (gap + rows as i32 * (cell_h + gap)) as usize;
    let mut groups = Vec::with_capacity(cols * rows);
    for r in 0..rows as i32 {
        for c in 0..cols as i32 {
            let idx = r * cols as i32 + c;
            let color = (1 + (idx * 37) % 254) as u8;
            let x0 = gap + c * (cell_w + gap);
            let y0 = gap + r * (cell_h + gap);
            let mut group: Vec<Shape> = vec![Rectangle::new(
                p(x0, y0),
                p(x0 + cell_w - 1, y0 + cell_h - 1),
                color,
            )
            .unwrap()
            .into()];
            if triangles {
                group.push(
                    Triangle::new(
                        p(x0 + 2, y0 + 1),
                        p(x0 + 3, y0 + 2),
                        p(x0 + 1, y0 + 2),
                        255 - color,
                    )
                    .unwrap()
                    .into(),
                );
            }
            groups.push(group);
        }
    }
    (width, height, groups)
}

/// True when both lists hold the same shapes in the same order, comparing
/// triangles up to rotation of their vertex lists.
pub fn same_shapes(found: &[Shape], expected: &[Shape]) -> bool {
    found.len() == expected.len()
        && found.iter().zip(expected).all(|(a, b)| match (a, b) {
            (Shape::Triangle(ta), Shape::Triangle(tb)) => ta.same_as(tb),
            _ => a == b,
        })
}
