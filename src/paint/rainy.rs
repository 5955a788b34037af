use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animation::timeline::FRAME_STEP_MS;
use crate::foundation::core::{Density, Point, Rgba8, SurfaceSize};
use crate::paint::ripple::{Ripple, entropy_rng};
use crate::paint::{Painter, PainterBase, PhaseSnapshot};
use crate::render::canvas::{Canvas, Paint};
use crate::weather::WeatherType;

/// Ripples kept alive on screen at once.
pub const RIPPLE_COUNT: usize = 15;

/// A field of raindrop ripples on a dark blue night.
///
/// Every ripple relocates to a random point and starts over when its rings have faded.
pub struct RainyPainter {
    base: PainterBase,
    background: Option<Paint>,
    ripples: Vec<Ripple>,
    rng: StdRng,
}

impl RainyPainter {
    pub fn new(density: Density) -> Self {
        Self::with_rng(density, entropy_rng())
    }

    /// Painter whose ripple placement and sizing derive from `rng`.
    pub fn with_rng(density: Density, rng: StdRng) -> Self {
        Self {
            base: PainterBase::new(density),
            background: None,
            ripples: Vec::new(),
            rng,
        }
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    fn spawn_ripples(&mut self, size: SurfaceSize) {
        for _ in 0..RIPPLE_COUNT {
            let x = self.rng.random_range(0..size.width);
            let y = self.rng.random_range(0..size.height);
            let seed = StdRng::from_rng(&mut self.rng);
            let mut ripple = Ripple::new(Point::new(f64::from(x), f64::from(y)), seed);
            ripple.set_field(size);
            ripple.set_listener(|r| {
                r.relocate_random();
                r.start();
            });
            ripple.start();
            self.ripples.push(ripple);
        }
        tracing::debug!(count = self.ripples.len(), "rain ripples created");
    }
}

impl Painter for RainyPainter {
    fn weather(&self) -> WeatherType {
        WeatherType::Rainy
    }

    fn base(&self) -> &PainterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut PainterBase {
        &mut self.base
    }

    fn layout(&mut self, size: SurfaceSize) {
        self.background = Some(Paint::vertical(
            size.h(),
            Rgba8::rgb(0x49_59_76),
            Rgba8::rgb(0x1D_25_3C),
        ));
        if self.ripples.is_empty() {
            self.spawn_ripples(size);
        } else {
            for ripple in &mut self.ripples {
                ripple.set_field(size);
                let c = ripple.center();
                if c.x >= size.w() || c.y >= size.h() {
                    ripple.relocate_random();
                    if ripple.is_running() {
                        ripple.start();
                    }
                }
            }
        }
    }

    fn on_attach(&mut self) {
        for ripple in &mut self.ripples {
            ripple.start();
        }
    }

    fn on_detach(&mut self) {
        for ripple in &mut self.ripples {
            ripple.stop();
        }
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        let Some(background) = self.background.as_ref().filter(|_| !self.base.size().is_empty())
        else {
            return;
        };
        canvas.fill_background(background);
        for ripple in &self.ripples {
            ripple.draw(canvas);
        }
        for ripple in &mut self.ripples {
            ripple.advance(FRAME_STEP_MS);
        }
    }

    fn phase(&self) -> PhaseSnapshot {
        let running = self.ripples.iter().filter(|r| r.is_running()).count();
        let clock: f64 = self.ripples.iter().map(Ripple::elapsed_ms).sum();
        PhaseSnapshot::new(WeatherType::Rainy)
            .with("ripples", self.ripples.len() as f64)
            .with("running", running as f64)
            .with("ripple_clock_ms", clock)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/rainy.rs"]
mod tests;
