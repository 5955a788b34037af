use super::*;
use crate::foundation::core::Density;
use crate::paint::registry::create_painter;

fn every_painter() -> Vec<Box<dyn Painter>> {
    WeatherType::ALL
        .into_iter()
        .filter_map(|kind| create_painter(kind, Density::default()))
        .collect()
}

#[test]
fn resize_with_same_size_lays_out_once() {
    for mut p in every_painter() {
        p.resize(320, 240);
        p.resize(320, 240);
        assert_eq!(p.base().layout_builds(), 1, "{}", p.weather());
        p.attach();
        assert_eq!(p.base().layout_builds(), 1, "{}", p.weather());
        p.resize(321, 240);
        assert_eq!(p.base().layout_builds(), 2, "{}", p.weather());
    }
}

#[test]
fn zero_size_draw_is_harmless() {
    let mut canvas = Canvas::new(16, 16);
    for mut p in every_painter() {
        p.draw(&mut canvas);
        p.attach();
        p.draw(&mut canvas);
        p.resize(0, 0);
        p.draw(&mut canvas);
        p.resize(0, 50);
        p.draw(&mut canvas);
        assert_eq!(p.base().layout_builds(), 0, "{}", p.weather());
        p.detach();
    }
}

#[test]
fn attach_after_resize_lays_out_pending_size() {
    for mut p in every_painter() {
        p.resize(64, 64);
        p.detach();
        p.attach();
        assert!(p.base().is_attached());
        assert_eq!(p.base().layout_builds(), 1);
    }
}

#[test]
fn every_painter_covers_the_frame() {
    use crate::render::offline::render_frames;
    for mut p in every_painter() {
        p.attach();
        let frame = render_frames(p.as_mut(), 48, 64, 3).unwrap();
        assert_eq!(frame.pixel(0, 63).map(|px| px[3]), Some(255), "{}", p.weather());
    }
}

#[test]
fn default_brush_is_green_and_three_dp() {
    let base = PainterBase::new(Density::new(2.0).unwrap());
    let brush = base.default_brush();
    assert_eq!(brush.width, 6.0);
    assert_eq!(brush.style, crate::render::canvas::BrushStyle::FillAndStroke);
    assert_eq!(
        brush.paint,
        crate::render::canvas::Paint::Solid(crate::foundation::core::Rgba8::rgb(0x00_FF_00))
    );
}

#[test]
fn phase_snapshot_lookup() {
    let snap = PhaseSnapshot::new(WeatherType::Cloudy).with("x_offset", 3.0);
    assert_eq!(snap.get("x_offset"), Some(3.0));
    assert_eq!(snap.get("missing"), None);
}
