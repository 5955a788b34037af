use super::*;

#[test]
fn thousand_draws_keep_phase_finite_and_bounded() {
    let mut p = SnowyPainter::new(Density::new(1.0).unwrap());
    p.attach();
    p.resize(800, 600);
    let mut canvas = Canvas::new(200, 150);
    for _ in 0..1000 {
        canvas.reset();
        p.draw(&mut canvas);
        let rot = p.rotation();
        assert!(rot.is_finite() && (0.0..360.0).contains(&rot));
        assert!(p.route_distance() >= 0.0 && p.route_distance() < p.route_length());
        assert!(p.ring_radius() > p.flake.min_radius && p.ring_radius() <= p.flake.max_radius);
    }
    assert!((p.rotation() - 50.0).abs() < 1e-6);
}

#[test]
fn rotation_wraps_over_long_runs() {
    let mut p = SnowyPainter::new(Density::default());
    p.resize(400, 400);
    for _ in 0..20_000 {
        p.advance();
    }
    assert!((0.0..360.0).contains(&p.rotation()));
    assert!((p.rotation() - (20_000.0 * ROTATION_STEP) % 360.0).abs() < 1e-6);
}

#[test]
fn ring_radius_cycles_from_max_back_to_min() {
    let p = SnowyPainter::new(Density::default());
    let f = &p.flake;
    assert_eq!(f.min_radius, 60.0);
    assert_eq!(f.next_radius(f.max_radius, 1.0), f.min_radius + 1.0);
    assert_eq!(f.next_radius(100.0, 1.0), 101.0);
}

#[test]
fn ring_alpha_rises_then_falls() {
    let p = SnowyPainter::new(Density::default());
    let f = &p.flake;
    assert_eq!(f.ring_alpha(f.max_radius), 0.0);
    let peak = f.min_radius + 0.2 * (f.max_radius - f.min_radius);
    assert!((f.ring_alpha(peak) - 200.0).abs() < 1e-9);
}

#[test]
fn route_runs_down_from_the_upper_left_quarter() {
    let mut p = SnowyPainter::new(Density::default());
    p.resize(800, 600);
    assert!(p.sprite.is_some());
    let route = &p.layout.as_ref().unwrap().route;
    let (start, _) = route.pos_tan(0.0).unwrap();
    let (end, _) = route.pos_tan(route.length()).unwrap();
    assert!((start - Point::new(200.0, 150.0)).hypot() < 1e-6);
    assert!((end - Point::new(200.0, 450.0)).hypot() < 1e-2);
}
