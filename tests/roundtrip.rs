mod common;

use common::synthetic_image::{
    demo_shapes, framed_scene, p, rectangle_lattice, render, same_shapes,
};
use shape_tracer::{
    extract_rectangles, extract_rectangles_and_triangles, ConvexPolygon, ExtractOptions,
    Rectangle, Shape, ShapeExtractor, ShapeKind, Triangle,
};

#[test]
fn demo_rectangles_are_recovered() {
    let _ = env_logger::builder().is_test(true).try_init();
    let shapes = demo_shapes();
    let grid = render(6, 6, &shapes[..2]);

    let found = extract_rectangles(&grid).unwrap();

    assert_eq!(found, shapes[..2].to_vec());
}

#[test]
fn demo_rectangle_with_triangle_is_recovered() {
    let _ = env_logger::builder().is_test(true).try_init();
    let shapes = demo_shapes();
    let grid = render(6, 6, &shapes);

    let found = extract_rectangles_and_triangles(&grid).unwrap();

    assert_eq!(found.len(), 3, "found {found:?}");
    assert_eq!(
        found[0],
        Shape::from(Rectangle::new(p(1, 1), p(3, 2), 70).unwrap())
    );
    let triangle = found[1].as_triangle().expect("triangle follows its rectangle");
    let expected = Triangle::new(p(2, 1), p(3, 2), p(1, 2), 210).unwrap();
    assert!(
        triangle.same_as(&expected),
        "got vertices {:?}",
        triangle.vertices()
    );
    assert_eq!(found[2], shapes[1]);
}

#[test]
fn rectangles_only_mode_ignores_embedded_triangles() {
    let shapes = demo_shapes();
    let grid = render(6, 6, &shapes);

    let found = extract_rectangles(&grid).unwrap();

    assert_eq!(found, shapes[..2].to_vec());
    assert!(found.iter().all(|s| s.kind() == ShapeKind::Rectangle));
}

#[test]
fn non_square_scene_round_trips() {
    let (w, h, shapes) = framed_scene();
    let grid = render(w, h, &shapes);

    let found = extract_rectangles_and_triangles(&grid).unwrap();

    assert!(same_shapes(&found, &shapes), "found {found:#?}");
    assert_eq!(render(w, h, &found), grid);
}

#[test]
fn symmetric_triangles_of_any_slope_round_trip() {
    for half_width in 1..=4 {
        for height in 1..=4 {
            for apex_down in [false, true] {
                let (base_y, apex_y) = if apex_down {
                    (2, 2 + height)
                } else {
                    (2 + height, 2)
                };
                let shapes: Vec<Shape> = vec![
                    Rectangle::new(p(1, 1), p(2 * half_width + 3, height + 3), 90)
                        .unwrap()
                        .into(),
                    Triangle::new(
                        p(2 + half_width, apex_y),
                        p(2 + 2 * half_width, base_y),
                        p(2, base_y),
                        200,
                    )
                    .unwrap()
                    .into(),
                ];
                let (w, h) = ((2 * half_width + 5) as usize, (height + 5) as usize);
                let grid = render(w, h, &shapes);

                let found = extract_rectangles_and_triangles(&grid).unwrap();

                let case = format!("half_width={half_width} height={height} apex_down={apex_down}");
                assert!(same_shapes(&found, &shapes), "{case}: found {found:?}");
                assert_eq!(render(w, h, &found), grid, "{case}");
            }
        }
    }
}

#[test]
fn lattice_round_trips_regardless_of_draw_order() {
    let (w, h, groups) = rectangle_lattice(5, 4, 6, 4, 2, true);
    let expected: Vec<Shape> = groups.iter().flatten().cloned().collect();

    // Rectangles must still precede their own triangle.
    let reversed: Vec<Shape> = groups.iter().rev().flatten().cloned().collect();
    for order in [&expected, &reversed] {
        let grid = render(w, h, order);
        let report = ShapeExtractor::new(&grid, ExtractOptions::with_triangles())
            .extract()
            .unwrap();
        assert_eq!(report.rectangle_count, 20);
        assert_eq!(report.triangle_count, 20);
        assert!(same_shapes(&report.shapes, &expected));
    }
}

#[test]
fn plain_lattice_round_trips() {
    let (w, h, groups) = rectangle_lattice(3, 6, 1, 5, 1, false);
    let expected: Vec<Shape> = groups.into_iter().flatten().collect();
    let grid = render(w, h, &expected);

    let found = extract_rectangles(&grid).unwrap();

    assert_eq!(found, expected);
}

#[test]
fn re_extraction_is_idempotent() {
    let (w, h, shapes) = framed_scene();
    let first = extract_rectangles_and_triangles(&render(w, h, &shapes)).unwrap();
    let redrawn = render(w, h, &first);
    let second = extract_rectangles_and_triangles(&redrawn).unwrap();

    assert_eq!(second, first);
    assert_eq!(render(w, h, &second), redrawn);
}

#[test]
fn recovered_rectangles_keep_clockwise_corners() {
    let (w, h, shapes) = framed_scene();
    let found = extract_rectangles(&render(w, h, &shapes)).unwrap();
    for shape in &found {
        let rect = shape.as_rectangle().unwrap();
        let v = rect.vertices();
        assert_eq!(v[0].y, v[1].y);
        assert_eq!(v[1].x, v[2].x);
        assert_eq!(v[2].y, v[3].y);
        assert_eq!(v[3].x, v[0].x);
        assert!(v[0].x <= v[1].x && v[0].y <= v[3].y);
    }
}
