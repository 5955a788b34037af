use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn acquire_present_cycle_is_counted() {
    let mut surface = InMemorySurface::new(3, 2);
    let probe = surface.probe();
    let mut f = surface.acquire_frame().unwrap();
    f.fill(Rgba8::WHITE);
    surface.present(f).unwrap();
    assert_eq!(probe.acquired(), 1);
    assert_eq!(probe.presented(), 1);
    assert_eq!(probe.last_pixel(2, 1), Some([255, 255, 255, 255]));
    let (w, h, px) = probe.last_frame_rgba8().unwrap();
    assert_eq!((w, h, px.len()), (3, 2, 24));
}

#[test]
fn empty_surface_has_no_frames() {
    let mut surface = InMemorySurface::new(0, 10);
    assert!(surface.acquire_frame().is_none());
}

#[test]
fn destroyed_surface_refuses_frames() {
    let mut surface = InMemorySurface::new(2, 2);
    let probe = surface.probe();
    let f = surface.acquire_frame().unwrap();
    probe.mark_destroyed();
    assert_eq!(surface.present(f), Err(SurfaceError::Destroyed));
    assert!(surface.acquire_frame().is_none());
}

#[test]
fn foreign_sized_frames_are_rejected() {
    let mut surface = InMemorySurface::new(2, 2);
    let f = FrameBuffer::new(3, 3).unwrap();
    assert!(matches!(
        surface.present(f),
        Err(SurfaceError::SizeMismatch { .. })
    ));
}
