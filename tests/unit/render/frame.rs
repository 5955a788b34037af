use super::*;

#[test]
fn oversize_frames_are_rejected() {
    assert!(matches!(
        FrameBuffer::new(70_000, 4),
        Err(SurfaceError::TooLarge { width: 70_000, .. })
    ));
}

#[test]
fn fill_then_clear() {
    let mut f = FrameBuffer::new(4, 3).unwrap();
    assert_eq!(f.width(), 4);
    assert_eq!(f.height(), 3);
    f.fill(Rgba8::new(255, 0, 0, 255));
    assert_eq!(f.pixel(3, 2), Some([255, 0, 0, 255]));
    f.clear();
    assert!(f.as_premul_bytes().iter().all(|&b| b == 0));
    assert_eq!(f.pixel(4, 0), None);
}

#[test]
fn fill_premultiplies_and_export_unpremultiplies() {
    let mut f = FrameBuffer::new(1, 1).unwrap();
    f.fill(Rgba8::new(200, 100, 0, 128));
    assert_eq!(f.pixel(0, 0), Some([100, 50, 0, 128]));
    let straight = f.to_rgba8();
    assert!((i32::from(straight[0]) - 200).abs() <= 1);
    assert!((i32::from(straight[1]) - 100).abs() <= 1);
    assert_eq!(straight[3], 128);
}
