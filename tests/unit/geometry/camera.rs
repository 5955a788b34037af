use super::*;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn identity_projects_plane_one_to_one() {
    let p = Camera3D::new().projection();
    let q = p.map_point(Point::new(12.0, -7.0)).unwrap();
    assert!(close(q, Point::new(12.0, -7.0)));
}

#[test]
fn translate_xy_is_plain_offset_at_zero_depth() {
    let p = Camera3D::new().translate(5.0, -3.0, 0.0).projection();
    let q = p.map_point(Point::new(1.0, 1.0)).unwrap();
    assert!(close(q, Point::new(6.0, -2.0)));
}

#[test]
fn depth_shrinks_towards_origin() {
    let p = Camera3D::new()
        .translate(0.0, 0.0, FOCAL_LENGTH)
        .projection();
    let q = p.map_point(Point::new(100.0, 40.0)).unwrap();
    assert!(close(q, Point::new(50.0, 20.0)));
}

#[test]
fn rotate_x_foreshortens_vertical_extent() {
    let p = Camera3D::new().rotate_x(60.0).projection();
    let top = p.map_point(Point::new(0.0, -100.0)).unwrap();
    let bottom = p.map_point(Point::new(0.0, 100.0)).unwrap();
    assert!((top.y.abs() - 100.0).abs() > 1.0);
    assert!(bottom.y.abs() < 100.0);
    // x on the rotation axis stays put.
    let on_axis = p.map_point(Point::new(33.0, 0.0)).unwrap();
    assert!(close(on_axis, Point::new(33.0, 0.0)));
}

#[test]
fn points_behind_the_eye_are_dropped() {
    let p = Camera3D::new()
        .translate(0.0, 0.0, -2.0 * FOCAL_LENGTH)
        .projection();
    assert!(p.map_point(Point::new(0.0, 0.0)).is_none());

    let tilted = Camera3D::new().rotate_x(80.0).projection();
    let line = [
        Point::new(0.0, 0.0),
        Point::new(0.0, -10_000.0),
        Point::new(0.0, 10.0),
    ];
    let path = tilted.map_polyline(&line);
    for el in path.elements() {
        if let kurbo::PathEl::MoveTo(p) | kurbo::PathEl::LineTo(p) = el {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }
}

#[test]
fn full_turn_about_z_is_identity() {
    let p = Camera3D::new().rotate_z(360.0).rotate_y(0.0).projection();
    let q = p.map_point(Point::new(3.0, 4.0)).unwrap();
    assert!((q.x - 3.0).abs() < 1e-9 && (q.y - 4.0).abs() < 1e-9);
}
