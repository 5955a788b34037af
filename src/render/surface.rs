use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::foundation::core::SurfaceSize;
use crate::foundation::error::SurfaceError;
use crate::render::frame::FrameBuffer;

/// A platform drawing target: lends out writable frames and takes them back for display.
///
/// `acquire_frame` may return `None` when no buffer is available right now; the render loop
/// then skips the frame. `present` is only ever called with a frame this surface handed out.
pub trait DrawingSurface: Send {
    fn acquire_frame(&mut self) -> Option<FrameBuffer>;

    fn present(&mut self, frame: FrameBuffer) -> Result<(), SurfaceError>;
}

/// Shared view into an [`InMemorySurface`], usable from any thread.
#[derive(Clone, Debug, Default)]
pub struct SurfaceProbe {
    inner: Arc<ProbeInner>,
}

#[derive(Debug, Default)]
struct ProbeInner {
    acquired: AtomicU64,
    presented: AtomicU64,
    destroyed: AtomicBool,
    last: Mutex<Option<FrameBuffer>>,
}

impl SurfaceProbe {
    pub fn acquired(&self) -> u64 {
        self.inner.acquired.load(Ordering::Acquire)
    }

    pub fn presented(&self) -> u64 {
        self.inner.presented.load(Ordering::Acquire)
    }

    /// Make every later `acquire_frame` fail and every `present` report `Destroyed`.
    pub fn mark_destroyed(&self) {
        self.inner.destroyed.store(true, Ordering::Release);
    }

    pub fn is_destroyed(&self) -> bool {
        self.inner.destroyed.load(Ordering::Acquire)
    }

    /// Straight-alpha pixels of the last presented frame, with its dimensions.
    pub fn last_frame_rgba8(&self) -> Option<(u32, u32, Vec<u8>)> {
        let guard = self.inner.last.lock().unwrap_or_else(PoisonError::into_inner);
        guard
            .as_ref()
            .map(|f| (f.width(), f.height(), f.to_rgba8()))
    }

    /// Premultiplied pixel of the last presented frame.
    pub fn last_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let guard = self.inner.last.lock().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().and_then(|f| f.pixel(x, y))
    }
}

/// Headless surface backed by plain memory. Keeps the last presented frame for inspection.
#[derive(Debug)]
pub struct InMemorySurface {
    size: SurfaceSize,
    spare: Option<FrameBuffer>,
    probe: SurfaceProbe,
}

impl InMemorySurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: SurfaceSize::new(width, height),
            spare: None,
            probe: SurfaceProbe::default(),
        }
    }

    pub fn probe(&self) -> SurfaceProbe {
        self.probe.clone()
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }
}

impl DrawingSurface for InMemorySurface {
    fn acquire_frame(&mut self) -> Option<FrameBuffer> {
        if self.probe.is_destroyed() || self.size.is_empty() {
            return None;
        }
        let frame = match self.spare.take() {
            Some(f) if f.width() == self.size.width && f.height() == self.size.height => f,
            _ => match FrameBuffer::new(self.size.width, self.size.height) {
                Ok(f) => f,
                Err(err) => {
                    tracing::warn!(%err, "in-memory surface cannot allocate frame");
                    return None;
                }
            },
        };
        self.probe.inner.acquired.fetch_add(1, Ordering::AcqRel);
        Some(frame)
    }

    fn present(&mut self, frame: FrameBuffer) -> Result<(), SurfaceError> {
        if self.probe.is_destroyed() {
            return Err(SurfaceError::Destroyed);
        }
        if frame.width() != self.size.width || frame.height() != self.size.height {
            return Err(SurfaceError::SizeMismatch {
                expected: (self.size.width, self.size.height),
                got: (frame.width(), frame.height()),
            });
        }
        let mut last = self
            .probe
            .inner
            .last
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        self.spare = last.replace(frame);
        drop(last);
        self.probe.inner.presented.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
