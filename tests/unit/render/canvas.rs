use super::*;

fn frame(w: u32, h: u32) -> FrameBuffer {
    FrameBuffer::new(w, h).unwrap()
}

#[test]
fn background_covers_every_pixel_regardless_of_transform() {
    let mut canvas = Canvas::new(8, 8);
    canvas.translate(100.0, 100.0);
    canvas.fill_background(&Paint::Solid(Rgba8::rgb(0xFF_00_00)));
    let mut f = frame(8, 8);
    canvas.render_into(&mut f).unwrap();
    assert_eq!(f.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(7, 7), Some([255, 0, 0, 255]));
}

#[test]
fn save_restore_round_trips_transform() {
    let mut canvas = Canvas::new(4, 4);
    canvas.save();
    canvas.translate(3.0, 1.0);
    canvas.rotate_deg(45.0);
    assert_ne!(canvas.transform(), Affine::IDENTITY);
    canvas.restore();
    assert_eq!(canvas.transform(), Affine::IDENTITY);
    canvas.restore();
    assert_eq!(canvas.transform(), Affine::IDENTITY);
}

#[test]
fn points_land_under_the_current_transform() {
    let mut canvas = Canvas::new(16, 16);
    canvas.translate(10.0, 4.0);
    canvas.draw_points(
        [Point::new(0.5, 0.5)],
        &Brush::solid(Rgba8::WHITE).with_width(2.0),
    );
    let mut f = frame(16, 16);
    canvas.render_into(&mut f).unwrap();
    assert_eq!(f.pixel(10, 4), Some([255, 255, 255, 255]));
    assert_eq!(f.pixel(2, 2), Some([0, 0, 0, 0]));
}

#[test]
fn faded_paint_scales_alpha() {
    let p = Paint::vertical(10.0, Rgba8::WHITE, Rgba8::rgb(0x00_00_00)).faded(0.5);
    let Paint::Linear { stops, .. } = p else {
        panic!("expected linear paint");
    };
    assert!(stops.iter().all(|s| s.color.a == 128 || s.color.a == 127));
}

#[test]
fn sprite_is_drawn_centered() {
    let sprite = Sprite::render(4, 4, |c| {
        c.fill_background(&Paint::Solid(Rgba8::rgb(0x00_FF_00)));
    });
    assert_eq!((sprite.width(), sprite.height()), (4, 4));
    let mut canvas = Canvas::new(20, 20);
    canvas.translate(10.0, 10.0);
    canvas.draw_sprite(&sprite, 1.0);
    let mut f = frame(20, 20);
    canvas.render_into(&mut f).unwrap();
    assert_eq!(f.pixel(9, 9).map(|p| p[1]), Some(255));
    assert_eq!(f.pixel(2, 2), Some([0, 0, 0, 0]));
}

#[test]
fn mismatched_frame_is_reported() {
    let mut canvas = Canvas::new(4, 4);
    let mut f = frame(5, 4);
    assert!(matches!(
        canvas.render_into(&mut f),
        Err(SurfaceError::SizeMismatch { .. })
    ));
}
