use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::foundation::core::{Rgba8, SurfaceSize};
use crate::foundation::error::SurfaceError;
use crate::paint::PhaseSnapshot;
use crate::paint::registry::PainterRegistry;
use crate::render::canvas::Canvas;
use crate::render::surface::DrawingSurface;
use crate::weather::WeatherType;

/// Frame counters shared between the drawing thread and the host.
#[derive(Debug, Default)]
pub(crate) struct LoopCounters {
    presented: AtomicU64,
    skipped: AtomicU64,
}

/// Point-in-time copy of the render loop counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Frames drawn and handed to the surface.
    pub presented: u64,
    /// Iterations where the surface had no buffer to lend.
    pub skipped: u64,
}

impl LoopCounters {
    pub(crate) fn snapshot(&self) -> LoopStats {
        LoopStats {
            presented: self.presented.load(Ordering::Acquire),
            skipped: self.skipped.load(Ordering::Acquire),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FrameOutcome {
    Presented,
    Skipped,
}

/// Everything the drawing thread needs: painters, the surface and the active selection.
///
/// Owned by the host while the loop is stopped and moved into the loop thread while it runs,
/// so painter state is never touched from two threads at once.
pub(crate) struct Stage {
    registry: PainterRegistry,
    active: WeatherType,
    last_size: Option<SurfaceSize>,
    live: bool,
    surface: Box<dyn DrawingSurface>,
    idle: Rgba8,
    counters: Arc<LoopCounters>,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("registry", &self.registry)
            .field("active", &self.active)
            .field("last_size", &self.last_size)
            .field("live", &self.live)
            .finish_non_exhaustive()
    }
}

impl Stage {
    pub(crate) fn new(
        registry: PainterRegistry,
        surface: Box<dyn DrawingSurface>,
        idle: Rgba8,
        counters: Arc<LoopCounters>,
    ) -> Self {
        Self {
            registry,
            active: WeatherType::None,
            last_size: None,
            live: false,
            surface,
            idle,
            counters,
        }
    }

    pub(crate) fn active(&self) -> WeatherType {
        self.active
    }

    /// Swap the active painter. The outgoing one is detached, the incoming one attached (when
    /// the loop is live) and given the last known surface size.
    pub(crate) fn set_weather(&mut self, kind: WeatherType) {
        if kind == self.active {
            return;
        }
        if self.live
            && let Some(old) = self.registry.get(self.active)
        {
            old.detach();
        }
        self.active = kind;
        let live = self.live;
        let last_size = self.last_size;
        if let Some(painter) = self.registry.get(kind) {
            if live {
                painter.attach();
            }
            if let Some(size) = last_size {
                painter.resize(size.width, size.height);
            }
        }
        tracing::debug!(weather = %kind, live, "active painter swapped");
    }

    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        self.last_size = Some(SurfaceSize::new(width, height));
        if let Some(painter) = self.registry.get(self.active) {
            painter.resize(width, height);
        }
    }

    /// Mark the loop live and attach the active painter.
    pub(crate) fn attach_active(&mut self) {
        self.live = true;
        if let Some(painter) = self.registry.get(self.active) {
            painter.attach();
        }
    }

    /// Mark the loop stopped and detach the active painter.
    pub(crate) fn detach_active(&mut self) {
        self.live = false;
        if let Some(painter) = self.registry.get(self.active) {
            painter.detach();
        }
    }

    pub(crate) fn stats(&self) -> LoopStats {
        self.counters.snapshot()
    }

    pub(crate) fn phase(&mut self) -> Option<PhaseSnapshot> {
        self.registry.get(self.active).map(|p| p.phase())
    }

    /// One loop iteration: acquire, clear, draw (or idle fill), present.
    ///
    /// `canvas` is reused across frames and rebuilt whenever the frame size changes.
    pub(crate) fn render_frame(
        &mut self,
        canvas: &mut Option<Canvas>,
    ) -> Result<FrameOutcome, SurfaceError> {
        let Some(mut frame) = self.surface.acquire_frame().filter(|f| !f.is_empty()) else {
            self.counters.skipped.fetch_add(1, Ordering::AcqRel);
            tracing::trace!("no drawable frame buffer available, skipping");
            return Ok(FrameOutcome::Skipped);
        };
        frame.clear();
        match self.registry.get(self.active) {
            Some(painter) => {
                let canvas = ensure_canvas(canvas, frame.width(), frame.height());
                canvas.reset();
                painter.draw(canvas);
                canvas.render_into(&mut frame)?;
            }
            None => frame.fill(self.idle),
        }
        self.surface.present(frame)?;
        self.counters.presented.fetch_add(1, Ordering::AcqRel);
        Ok(FrameOutcome::Presented)
    }
}

fn ensure_canvas(slot: &mut Option<Canvas>, width: u32, height: u32) -> &mut Canvas {
    let w = u16::try_from(width).unwrap_or(u16::MAX);
    let h = u16::try_from(height).unwrap_or(u16::MAX);
    match slot {
        Some(c) if c.width() == w && c.height() == h => {}
        _ => *slot = Some(Canvas::new(w, h)),
    }
    slot.get_or_insert_with(|| Canvas::new(w, h))
}

#[cfg(test)]
#[path = "../../tests/unit/host/stage.rs"]
mod tests;
