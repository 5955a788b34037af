//! Expanding-ring raindrop impact.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animation::ease::Ease;
use crate::animation::timeline::{Timeline, TimelinePhase};
use crate::foundation::core::{Point, Rgba8, SurfaceSize};
use crate::foundation::math::alpha_to_opacity;
use crate::render::canvas::{Brush, BrushStyle, Canvas};

/// Most rings a single ripple can spawn.
pub const MAX_RINGS: usize = 3;
/// Ring expansion time per pixel of maximum radius.
pub const MS_PER_RADIUS_PX: f64 = 17.0;
const MIN_RADIUS: u32 = 60;
const START_ALPHA: f64 = 180.0;
const STROKE_WIDTH: f64 = 4.0;

/// Callback fired after a run completes on its own.
pub type RippleListener = Box<dyn FnMut(&mut Ripple) + Send>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RippleState {
    Idle,
    Expanding,
}

/// One concentric ring: its timing and where it currently is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub timeline: Timeline,
    pub radius: f64,
    pub alpha: f64,
}

impl Ring {
    const IDLE: Self = Self {
        timeline: Timeline::once(0.0, 0.0),
        radius: 0.0,
        alpha: 0.0,
    };

    fn settle(&mut self, elapsed_ms: f64, max_radius: f64) {
        match self.timeline.phase(elapsed_ms) {
            TimelinePhase::Pending => {
                self.radius = 0.0;
                self.alpha = 0.0;
            }
            TimelinePhase::Running(t) => {
                let v = Ease::OutQuad.apply(t);
                self.radius = v * max_radius;
                self.alpha = START_ALPHA * (1.0 - v);
            }
            TimelinePhase::Finished => {
                self.radius = max_radius;
                self.alpha = 0.0;
            }
        }
    }
}

/// A raindrop impact: one to three rings expanding from a point and fading out.
///
/// `Idle -> start -> Expanding -> (complete: Idle, listener fired) | (stop: Idle)`.
pub struct Ripple {
    center: Point,
    field: SurfaceSize,
    rings: [Ring; MAX_RINGS],
    ring_count: usize,
    max_radius: f64,
    state: RippleState,
    elapsed_ms: f64,
    runs_completed: u64,
    brush: Brush,
    listener: Option<RippleListener>,
    rng: StdRng,
}

impl std::fmt::Debug for Ripple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ripple")
            .field("center", &self.center)
            .field("ring_count", &self.ring_count)
            .field("max_radius", &self.max_radius)
            .field("state", &self.state)
            .field("elapsed_ms", &self.elapsed_ms)
            .finish_non_exhaustive()
    }
}

impl Ripple {
    /// A ripple at `center` drawing its randomness from `rng`.
    pub fn new(center: Point, mut rng: StdRng) -> Self {
        let ring_count = roll_ring_count(&mut rng);
        let max_radius = roll_max_radius(&mut rng);
        Self {
            center,
            field: SurfaceSize::ZERO,
            rings: [Ring::IDLE; MAX_RINGS],
            ring_count,
            max_radius,
            state: RippleState::Idle,
            elapsed_ms: 0.0,
            runs_completed: 0,
            brush: Brush::solid(Rgba8::WHITE)
                .with_style(BrushStyle::Stroke)
                .with_width(STROKE_WIDTH),
            listener: None,
            rng,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn ring_count(&self) -> usize {
        self.ring_count
    }

    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    pub fn state(&self) -> RippleState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RippleState::Expanding
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Runs that ended on their own (not via [`Ripple::stop`]).
    pub fn runs_completed(&self) -> u64 {
        self.runs_completed
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings[..self.ring_count]
    }

    /// Full expansion time of one ring.
    pub fn duration_ms(&self) -> f64 {
        MS_PER_RADIUS_PX * self.max_radius
    }

    /// Area used by [`Ripple::relocate_random`].
    pub fn set_field(&mut self, field: SurfaceSize) {
        self.field = field;
    }

    pub fn set_listener(&mut self, listener: impl FnMut(&mut Ripple) + Send + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Begin a run. Restarts from the beginning when already expanding.
    pub fn start(&mut self) {
        let duration = self.duration_ms();
        let half = (duration / 2.0).floor() as u64;
        let delay = if half > 0 {
            self.rng.random_range(0..half) as f64
        } else {
            0.0
        };
        for (i, ring) in self.rings.iter_mut().enumerate() {
            *ring = Ring {
                timeline: Timeline::once(duration, delay * (i + 1) as f64),
                radius: 0.0,
                alpha: 0.0,
            };
        }
        self.elapsed_ms = 0.0;
        self.state = RippleState::Expanding;
    }

    /// Force-end the current run without notifying the listener.
    pub fn stop(&mut self) {
        if self.state == RippleState::Expanding {
            for ring in &mut self.rings {
                ring.radius = self.max_radius;
                ring.alpha = 0.0;
            }
            self.state = RippleState::Idle;
        }
    }

    /// Move to `(x, y)` and re-roll ring count and maximum radius.
    pub fn relocate(&mut self, x: f64, y: f64) {
        self.center = Point::new(x, y);
        self.ring_count = roll_ring_count(&mut self.rng);
        self.max_radius = roll_max_radius(&mut self.rng);
    }

    /// Relocate to a uniformly random integer point inside the field. No-op for an empty field.
    pub fn relocate_random(&mut self) {
        if self.field.is_empty() {
            return;
        }
        let x = self.rng.random_range(0..self.field.width);
        let y = self.rng.random_range(0..self.field.height);
        self.relocate(f64::from(x), f64::from(y));
    }

    /// Move time forward by `step_ms`; fires the listener when the last ring finishes.
    pub fn advance(&mut self, step_ms: f64) {
        if self.state != RippleState::Expanding {
            return;
        }
        self.elapsed_ms += step_ms.max(0.0);
        let (elapsed, max_radius) = (self.elapsed_ms, self.max_radius);
        for ring in &mut self.rings[..self.ring_count] {
            ring.settle(elapsed, max_radius);
        }
        let end = self.rings[..self.ring_count]
            .iter()
            .map(|r| r.timeline.end_ms())
            .fold(0.0, f64::max);
        if elapsed >= end {
            self.complete();
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        for ring in self.rings() {
            if ring.alpha > 0.0 && ring.radius > 0.0 {
                let brush = self.brush.faded(alpha_to_opacity(ring.alpha));
                canvas.draw_circle(self.center, ring.radius, &brush);
            }
        }
    }

    fn complete(&mut self) {
        self.state = RippleState::Idle;
        self.runs_completed += 1;
        if let Some(mut listener) = self.listener.take() {
            listener(self);
            // The listener may have installed a replacement for itself.
            if self.listener.is_none() {
                self.listener = Some(listener);
            }
        }
    }
}

/// 60% one ring, 35% two, 5% three.
pub(crate) fn roll_ring_count(rng: &mut impl Rng) -> usize {
    let f: f32 = rng.random();
    if f < 0.6 {
        1
    } else if f < 0.95 {
        2
    } else {
        3
    }
}

/// 50% in 60..110, 30% in 60..210, 20% in 60..410.
pub(crate) fn roll_max_radius(rng: &mut impl Rng) -> f64 {
    let f: f32 = rng.random();
    let span = if f < 0.5 {
        50
    } else if f < 0.8 {
        150
    } else {
        350
    };
    f64::from(MIN_RADIUS + rng.random_range(0..span))
}

/// Fresh generator seeded from the thread-local source.
pub(crate) fn entropy_rng() -> StdRng {
    StdRng::from_rng(&mut rand::rng())
}

#[cfg(test)]
#[path = "../../tests/unit/paint/ripple.rs"]
mod tests;
