use super::*;

#[test]
fn counters_stay_bounded() {
    let mut p = SandyPainter::new(Density::default());
    let period = p.x_offset_period();
    for _ in 0..100_000 {
        p.advance();
        assert!(p.degree() > -360.0 && p.degree() <= 0.0);
        assert!(p.x_offset() > -period && p.x_offset() <= 0.0);
    }
}

#[test]
fn grains_are_sampled_along_one_period_and_a_bit() {
    let mut p = SandyPainter::new(Density::default());
    p.resize(200, 100);
    let points = &p.layout.as_ref().unwrap().points;
    assert_eq!(points.len(), POINT_COUNT);
    assert_eq!(points[1].x - points[0].x, 12.0);
}

#[test]
fn draw_renders_grains_over_background() {
    let mut p = SandyPainter::new(Density::new(1.0).unwrap());
    p.attach();
    p.resize(120, 80);
    let mut canvas = Canvas::new(120, 80);
    let mut frame = crate::render::frame::FrameBuffer::new(120, 80).unwrap();
    p.draw(&mut canvas);
    canvas.render_into(&mut frame).unwrap();
    assert_eq!(frame.pixel(0, 0).map(|px| px[3]), Some(255));
    assert_eq!(p.phase().get("degree"), Some(-0.5));
    assert_eq!(p.phase().get("x_offset"), Some(-1.0));
}
