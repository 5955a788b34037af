use super::*;

fn painter() -> RainyPainter {
    RainyPainter::with_rng(Density::default(), StdRng::seed_from_u64(42))
}

#[test]
fn first_layout_spawns_the_pool_inside_bounds() {
    let mut p = painter();
    assert!(p.ripples().is_empty());
    p.resize(400, 800);
    assert_eq!(p.ripples().len(), RIPPLE_COUNT);
    for r in p.ripples() {
        let c = r.center();
        assert!((0.0..400.0).contains(&c.x) && (0.0..800.0).contains(&c.y));
        assert!(r.is_running());
    }
    p.resize(500, 500);
    assert_eq!(p.ripples().len(), RIPPLE_COUNT);
}

#[test]
fn shrinking_moves_outside_ripples_back_in() {
    let mut p = painter();
    p.attach();
    p.resize(400, 800);
    let inside: Vec<_> = p
        .ripples()
        .iter()
        .map(Ripple::center)
        .filter(|c| c.x < 50.0 && c.y < 60.0)
        .collect();
    p.resize(50, 60);
    for r in p.ripples() {
        let c = r.center();
        assert!((0.0..50.0).contains(&c.x) && (0.0..60.0).contains(&c.y), "{c:?}");
        assert!(r.is_running());
    }
    for c in inside {
        assert!(p.ripples().iter().any(|r| r.center() == c));
    }
}

#[test]
fn detach_stops_and_attach_restarts() {
    let mut p = painter();
    p.resize(100, 100);
    p.detach();
    assert!(p.ripples().iter().all(|r| !r.is_running()));
    p.attach();
    assert!(p.ripples().iter().all(Ripple::is_running));
    assert_eq!(p.base().layout_builds(), 1);
}

#[test]
fn ripples_keep_cycling() {
    let mut p = painter();
    p.attach();
    p.resize(64, 64);
    let mut canvas = Canvas::new(64, 64);
    for _ in 0..2_000 {
        canvas.reset();
        p.draw(&mut canvas);
    }
    assert!(p.ripples().iter().any(|r| r.runs_completed() > 0));
    assert_eq!(p.phase().get("running"), Some(RIPPLE_COUNT as f64));
    for r in p.ripples() {
        let c = r.center();
        assert!((0.0..64.0).contains(&c.x) && (0.0..64.0).contains(&c.y));
    }
}
