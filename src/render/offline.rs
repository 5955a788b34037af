use crate::foundation::error::{SkypaintError, SkypaintResult};
use crate::paint::Painter;
use crate::render::canvas::Canvas;
use crate::render::frame::FrameBuffer;

/// Draw `frames` consecutive frames of `painter` at `width x height` and return the last one.
///
/// The painter is resized to the target first; attach/detach is left to the caller.
pub fn render_frames(
    painter: &mut dyn Painter,
    width: u32,
    height: u32,
    frames: u32,
) -> SkypaintResult<FrameBuffer> {
    if width == 0 || height == 0 {
        return Err(SkypaintError::validation("frame size must be non-zero"));
    }
    let mut frame = FrameBuffer::new(width, height)?;
    let (w, h) = (frame.width() as u16, frame.height() as u16);
    let mut canvas = Canvas::new(w, h);
    painter.resize(width, height);

    for _ in 0..frames.max(1) {
        canvas.reset();
        frame.clear();
        painter.draw(&mut canvas);
        canvas.render_into(&mut frame)?;
    }
    tracing::debug!(
        weather = %painter.weather(),
        width,
        height,
        frames,
        "offline render finished"
    );
    Ok(frame)
}
