use super::*;

#[test]
fn x_offset_stays_inside_its_period() {
    let mut p = CloudyPainter::new(Density::default());
    p.resize(400, 300);
    for _ in 0..100_000 {
        p.advance();
        assert!((0.0..X_OFFSET_PERIOD).contains(&p.x_offset()));
    }
}

#[test]
fn draw_advances_and_detach_resets() {
    let mut p = CloudyPainter::new(Density::default());
    p.attach();
    p.resize(64, 48);
    let mut canvas = Canvas::new(64, 48);
    p.draw(&mut canvas);
    p.draw(&mut canvas);
    assert_eq!(p.phase().get("x_offset"), Some(2.0 * X_STEP));
    p.detach();
    assert_eq!(p.x_offset(), 0.0);
}

#[test]
fn zero_size_draw_is_a_no_op() {
    let mut p = CloudyPainter::new(Density::default());
    let mut canvas = Canvas::new(8, 8);
    p.draw(&mut canvas);
    assert_eq!(p.x_offset(), 0.0);
    assert_eq!(p.base().layout_builds(), 0);
}
