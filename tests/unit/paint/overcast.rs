use super::*;

#[test]
fn offset_period_follows_density() {
    let p = OvercastPainter::new(Density::new(1.5).unwrap());
    assert_eq!(p.x_offset_period(), 450.0 * 4.0);
}

#[test]
fn offset_wraps() {
    let mut p = OvercastPainter::new(Density::default());
    let period = p.x_offset_period();
    for _ in 0..100_000 {
        p.advance();
        assert!(p.x_offset() >= 0.0 && p.x_offset() < period);
    }
}

#[test]
fn highlight_center_is_rotated_with_the_gradient() {
    let mut p = OvercastPainter::new(Density::default());
    p.resize(300, 600);
    let layout = p.layout.as_ref().unwrap();
    let Paint::Sweep { center, .. } = &layout.line.paint else {
        panic!("expected sweep paint");
    };
    assert!((center.x - 260.0).abs() < 1e-9);
    assert!((center.y + 200.0).abs() < 1e-9);
}
