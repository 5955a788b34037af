use super::*;

#[test]
fn rings_rest_at_staggered_angles() {
    let p = SunnyPainter::new(Density::default());
    for (i, ring) in p.rings().iter().enumerate() {
        assert_eq!(ring.scale, 1.0);
        assert_eq!(ring.rotation, 2.0 * (4.0 - i as f64));
    }
    assert!(!p.is_animating());
}

#[test]
fn clocks_stay_bounded_and_values_in_range() {
    let mut p = SunnyPainter::new(Density::default());
    p.attach();
    p.resize(300, 500);
    assert!(p.is_animating());
    for _ in 0..100_000 {
        p.advance();
    }
    for (i, ring) in p.rings().iter().enumerate() {
        assert!(ring.scale_clock_ms < SCALE_PERIOD_MS);
        assert!(ring.rotate_clock_ms < ROTATE_STAGGER_MS * i as f64 + ROTATE_PERIOD_MS);
        let k = 0.04 * (i + 1) as f64;
        assert!(ring.scale >= 1.0 - 1e-12 && ring.scale <= 1.0 + k + 1e-12);
        assert!(ring.rotation.is_finite());
    }
}

#[test]
fn detach_pauses_and_attach_resumes() {
    let mut p = SunnyPainter::new(Density::default());
    p.attach();
    p.resize(120, 160);
    let mut canvas = Canvas::new(120, 160);
    for _ in 0..10 {
        p.draw(&mut canvas);
    }
    assert!(p.rings()[0].scale > 1.0);
    p.detach();
    let frozen = *p.rings();
    for _ in 0..10 {
        p.draw(&mut canvas);
    }
    assert_eq!(*p.rings(), frozen);
    p.attach();
    p.draw(&mut canvas);
    assert_ne!(*p.rings(), frozen);
    assert_eq!(p.base().layout_builds(), 1);
}

#[test]
fn layout_alone_does_not_start_animation() {
    let mut p = SunnyPainter::new(Density::default());
    p.resize(300, 500);
    assert!(!p.is_animating());
    p.attach();
    assert!(p.is_animating());
}

#[test]
fn staggered_rotation_waits_for_its_delay() {
    let mut ring = SunRing::initial(5);
    for _ in 0..10 {
        ring.step(5, FRAME_STEP_MS);
    }
    assert_eq!(ring.rotation, 2.0 * (4.0 - 5.0));
    for _ in 0..100 {
        ring.step(5, FRAME_STEP_MS);
    }
    assert!(ring.rotation > -2.0);
}

#[test]
fn phase_reports_every_ring() {
    let p = SunnyPainter::new(Density::default());
    let snap = p.phase();
    assert_eq!(snap.values.len(), 2 * RING_COUNT);
    assert_eq!(snap.get("rotation_3"), Some(2.0));
}
