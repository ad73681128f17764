use flipbook_pack_core::{frame_hit, point_in_polygon, Frame, Point, Polygon, Rect};

fn square() -> Polygon {
    Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ])
}

#[test]
fn unit_square_contains_center_not_outside() {
    let poly = square();
    assert!(point_in_polygon(Point::new(5.0, 5.0), &poly, Point::ZERO, 1.0));
    assert!(!point_in_polygon(
        Point::new(15.0, 15.0),
        &poly,
        Point::ZERO,
        1.0
    ));
}

#[test]
fn degenerate_rings_never_hit() {
    let empty = Polygon::default();
    let single = Polygon::new(vec![Point::new(5.0, 5.0)]);
    for poly in [&empty, &single] {
        assert!(!point_in_polygon(Point::new(5.0, 5.0), poly, Point::ZERO, 1.0));
        assert!(!point_in_polygon(
            Point::new(5.0, 5.0),
            poly,
            Point::new(-100.0, 40.0),
            3.0
        ));
    }
}

#[test]
fn offset_and_scale_transform_vertices_before_testing() {
    let poly = square();
    let offset = Point::new(100.0, 100.0);

    // At scale 2 the square spans [100, 120] on both axes.
    assert!(point_in_polygon(Point::new(105.0, 115.0), &poly, offset, 2.0));
    assert!(!point_in_polygon(Point::new(125.0, 105.0), &poly, offset, 2.0));
    // The untransformed center no longer hits.
    assert!(!point_in_polygon(Point::new(5.0, 5.0), &poly, offset, 2.0));
}

#[test]
fn horizontal_edges_do_not_divide_by_zero() {
    // Triangle with a horizontal base.
    let poly = Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(5.0, 10.0),
    ]);
    assert!(point_in_polygon(Point::new(5.0, 4.0), &poly, Point::ZERO, 1.0));
    assert!(!point_in_polygon(Point::new(0.5, 9.0), &poly, Point::ZERO, 1.0));

    // A two-point horizontal segment hits nothing and must not crash.
    let segment = Polygon::new(vec![Point::new(0.0, 5.0), Point::new(10.0, 5.0)]);
    assert!(!point_in_polygon(Point::new(5.0, 5.0), &segment, Point::ZERO, 1.0));
}

#[test]
fn concave_ring_uses_even_odd_rule() {
    // U shape: the notch between the prongs is outside.
    let poly = Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(7.0, 10.0),
        Point::new(7.0, 3.0),
        Point::new(3.0, 3.0),
        Point::new(3.0, 10.0),
        Point::new(0.0, 10.0),
    ]);
    assert!(point_in_polygon(Point::new(1.5, 8.0), &poly, Point::ZERO, 1.0));
    assert!(point_in_polygon(Point::new(8.5, 8.0), &poly, Point::ZERO, 1.0));
    assert!(!point_in_polygon(Point::new(5.0, 8.0), &poly, Point::ZERO, 1.0));
}

#[test]
fn frame_hit_ors_across_rings() {
    let frame = Frame {
        polys: vec![
            square(),
            Polygon::new(vec![
                Point::new(20.0, 20.0),
                Point::new(30.0, 20.0),
                Point::new(30.0, 30.0),
                Point::new(20.0, 30.0),
            ]),
        ],
        ..Frame::default()
    };

    assert!(frame_hit(&frame, Point::new(5.0, 5.0), Point::ZERO, 1.0));
    assert!(frame_hit(&frame, Point::new(25.0, 25.0), Point::ZERO, 1.0));
    assert!(!frame_hit(&frame, Point::new(15.0, 15.0), Point::ZERO, 1.0));
}

#[test]
fn frame_without_polygons_never_hits() {
    let frame = Frame::default();
    assert!(!frame_hit(&frame, Point::new(0.0, 0.0), Point::ZERO, 1.0));
    assert!(!frame_hit(&frame, Point::new(5.0, 5.0), Point::new(5.0, 5.0), 2.0));
}

#[test]
fn frame_rect_helpers_follow_the_same_transform() {
    let frame = Frame {
        x: 64,
        y: 0,
        w: 32,
        h: 16,
        ox: -16,
        oy: -16,
        ..Frame::default()
    };

    assert_eq!(
        frame.source_rect(),
        Rect {
            x: 64.0,
            y: 0.0,
            w: 32.0,
            h: 16.0
        }
    );

    let origin = Point::new(100.0, 200.0);
    assert_eq!(
        frame.dest_rect(origin, 2.0),
        Rect {
            x: 68.0,
            y: 168.0,
            w: 64.0,
            h: 32.0
        }
    );
    // The hit-test offset is the dest rect's top-left corner.
    let offset = frame.offset(origin, 2.0);
    assert_eq!((offset.x, offset.y), (68.0, 168.0));
}
