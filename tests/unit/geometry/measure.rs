use super::*;

fn l_shape() -> BezPath {
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.line_to((100.0, 0.0));
    p.line_to((100.0, 50.0));
    p
}

#[test]
fn length_sums_segments() {
    let m = PathMeasure::new(&l_shape());
    assert!((m.length() - 150.0).abs() < 1e-6);
}

#[test]
fn pos_tan_walks_across_segments() {
    let m = PathMeasure::new(&l_shape());
    let (p, t) = m.pos_tan(50.0).unwrap();
    assert!((p.x - 50.0).abs() < 1e-6 && p.y.abs() < 1e-6);
    assert!((t.x - 1.0).abs() < 1e-9);

    let (p, t) = m.pos_tan(125.0).unwrap();
    assert!((p.x - 100.0).abs() < 1e-6 && (p.y - 25.0).abs() < 1e-6);
    assert!((t.y - 1.0).abs() < 1e-9);
    assert!((m.angle_deg(125.0).unwrap() - 90.0).abs() < 1e-6);
}

#[test]
fn distance_is_clamped() {
    let m = PathMeasure::new(&l_shape());
    let (p, _) = m.pos_tan(-10.0).unwrap();
    assert!(p.x.abs() < 1e-9);
    let (p, _) = m.pos_tan(1e9).unwrap();
    assert!((p.y - 50.0).abs() < 1e-6);
    let (p, _) = m.pos_tan(f64::NAN).unwrap();
    assert!(p.x.abs() < 1e-9);
}

#[test]
fn cubic_arclength_is_uniform() {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.curve_to((30.0, 80.0), (120.0, 90.0), (150.0, 10.0));
    let m = PathMeasure::new(&path);
    let pts: Vec<_> = (0..=10)
        .map(|i| m.pos_tan(m.length() * i as f64 / 10.0).unwrap().0)
        .collect();
    let step = m.length() / 10.0;
    for w in pts.windows(2) {
        // Chords are never longer than the arc they subtend.
        assert!(w[0].distance(w[1]) <= step + 1e-2);
        assert!(w[0].distance(w[1]) > step * 0.8);
    }
}

#[test]
fn empty_path_has_no_samples() {
    let m = PathMeasure::new(&BezPath::new());
    assert!(m.is_empty());
    assert!(m.pos_tan(0.0).is_none());
    assert!(m.sample_every(4.0).is_empty());
}

#[test]
fn sample_every_spaces_points() {
    let m = PathMeasure::new(&l_shape());
    let pts = m.sample_every(10.0);
    assert_eq!(pts.len(), 15);
    assert!(pts[3].distance(Point::new(30.0, 0.0)) < 1e-6);
    assert!(m.sample_every(0.0).is_empty());
}
