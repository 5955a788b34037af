use crate::animation::ease::{CubicBezierEase, Ease};
use crate::animation::timeline::{FRAME_STEP_MS, Timeline, TimelinePhase};
use crate::foundation::core::{BezPath, Density, Point, Rgba8, SurfaceSize};
use crate::foundation::math::alpha_to_opacity;
use crate::geometry::shapes::{polygon, round_corners};
use crate::paint::{Painter, PainterBase, PhaseSnapshot};
use crate::render::canvas::{Brush, BrushStyle, Canvas, GradientStop, Paint};
use crate::weather::WeatherType;

pub const RING_COUNT: usize = 6;
const SIDES: usize = 6;
const MAX_ALPHA: u32 = 180;
const MIN_ALPHA: u32 = 10;
const STROKE_WIDTH: f64 = 4.0;
const SCALE_PERIOD_MS: f64 = 16_200.0;
const ROTATE_PERIOD_MS: f64 = 40_500.0;
const ROTATE_STAGGER_MS: f64 = 240.0;
const ROTATE_EASE: CubicBezierEase = CubicBezierEase {
    x1: 0.2,
    y1: 0.27,
    x2: 0.7,
    y2: 0.92,
};
const RING_STOPS: [GradientStop; 4] = [
    GradientStop::new(0.05, Rgba8::argb(0x00_FF_FF_FF)),
    GradientStop::new(0.35, Rgba8::WHITE),
    GradientStop::new(0.65, Rgba8::WHITE),
    GradientStop::new(0.95, Rgba8::argb(0x00_FF_FF_FF)),
];
const ROTATION_KEYS: [&str; RING_COUNT] = [
    "rotation_0",
    "rotation_1",
    "rotation_2",
    "rotation_3",
    "rotation_4",
    "rotation_5",
];
const SCALE_KEYS: [&str; RING_COUNT] =
    ["scale_0", "scale_1", "scale_2", "scale_3", "scale_4", "scale_5"];

/// Animated state of one halo ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunRing {
    pub scale_clock_ms: f64,
    pub rotate_clock_ms: f64,
    pub scale: f64,
    pub rotation: f64,
}

impl SunRing {
    fn initial(index: usize) -> Self {
        let mut ring = Self {
            scale_clock_ms: 0.0,
            rotate_clock_ms: 0.0,
            scale: 1.0,
            rotation: 0.0,
        };
        ring.settle(index);
        ring
    }

    fn scale_timeline() -> Timeline {
        Timeline::looping(SCALE_PERIOD_MS, 0.0)
    }

    fn rotate_timeline(index: usize) -> Timeline {
        Timeline::looping(ROTATE_PERIOD_MS, ROTATE_STAGGER_MS * index as f64)
    }

    /// Advance both clocks by `step_ms`, keeping them bounded.
    fn step(&mut self, index: usize, step_ms: f64) {
        self.scale_clock_ms = Self::scale_timeline().fold_elapsed(self.scale_clock_ms + step_ms);
        self.rotate_clock_ms =
            Self::rotate_timeline(index).fold_elapsed(self.rotate_clock_ms + step_ms);
        self.settle(index);
    }

    fn settle(&mut self, index: usize) {
        let k = (index + 1) as f64;
        self.scale = match Self::scale_timeline().phase(self.scale_clock_ms) {
            TimelinePhase::Running(t) => {
                1.0 + 0.04 * k * (std::f64::consts::PI * Ease::InOutSine.apply(t)).sin()
            }
            _ => 1.0,
        };
        let rest = 2.0 * (4.0 - index as f64);
        self.rotation = match Self::rotate_timeline(index).phase(self.rotate_clock_ms) {
            TimelinePhase::Running(t) => 360.0 * ROTATE_EASE.apply(t) + rest,
            _ => rest,
        };
    }
}

struct Layout {
    background: Paint,
    center: Point,
    outlines: Vec<BezPath>,
}

/// A halo of rounded hexagons that slowly breathe and turn over a warm sky.
pub struct SunnyPainter {
    base: PainterBase,
    brushes: Vec<Brush>,
    rings: [SunRing; RING_COUNT],
    animating: bool,
    layout: Option<Layout>,
}

impl SunnyPainter {
    pub fn new(density: Density) -> Self {
        let base = PainterBase::new(density);
        let sweep = Paint::Sweep {
            center: Point::ZERO,
            rotation_deg: -60.0,
            stops: RING_STOPS.to_vec(),
        };
        let d_alpha = (MAX_ALPHA - MIN_ALPHA) / (RING_COUNT as u32 - 1);
        let template = base
            .default_brush()
            .clone()
            .with_paint(sweep)
            .with_style(BrushStyle::Stroke)
            .with_width(STROKE_WIDTH);
        let brushes = (0..RING_COUNT as u32)
            .map(|i| template.faded(alpha_to_opacity(f64::from(MAX_ALPHA - d_alpha * i))))
            .collect();
        Self {
            base,
            brushes,
            rings: std::array::from_fn(SunRing::initial),
            animating: false,
            layout: None,
        }
    }

    pub fn rings(&self) -> &[SunRing; RING_COUNT] {
        &self.rings
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    fn advance(&mut self) {
        if !self.animating {
            return;
        }
        for (i, ring) in self.rings.iter_mut().enumerate() {
            ring.step(i, FRAME_STEP_MS);
        }
    }
}

impl Painter for SunnyPainter {
    fn weather(&self) -> WeatherType {
        WeatherType::Sunny
    }

    fn base(&self) -> &PainterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut PainterBase {
        &mut self.base
    }

    fn layout(&mut self, size: SurfaceSize) {
        let min_side = size.width.min(size.height);
        let min_radius = (f64::from(min_side / 2) - STROKE_WIDTH / 2.0) * 0.8;
        let corner = self.base.dp(20.0);
        let step = self.base.dp(3.0);
        let outlines = (0..RING_COUNT)
            .map(|i| round_corners(&polygon(SIDES, min_radius + step * i as f64), corner))
            .collect();
        self.layout = Some(Layout {
            background: Paint::Linear {
                start: Point::ZERO,
                end: Point::new(0.0, size.h()),
                stops: vec![
                    GradientStop::new(0.0, Rgba8::rgb(0xEF_64_3C)),
                    GradientStop::new(0.8, Rgba8::rgb(0xDE_E3_D1)),
                    GradientStop::new(1.0, Rgba8::rgb(0xD6_EA_E3)),
                ],
            },
            center: Point::new(size.w() / 2.0, size.h() * 0.3),
            outlines,
        });
        self.animating = self.base.is_attached();
    }

    fn on_attach(&mut self) {
        self.animating = self.base.is_laid_out();
    }

    fn on_detach(&mut self) {
        self.animating = false;
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        let size = self.base.size();
        let Some(layout) = self.layout.as_ref().filter(|_| !size.is_empty()) else {
            return;
        };
        canvas.fill_background(&layout.background);
        canvas.save();
        canvas.translate(layout.center.x, layout.center.y);
        for ((outline, ring), brush) in layout.outlines.iter().zip(&self.rings).zip(&self.brushes) {
            canvas.save();
            canvas.scale(ring.scale, ring.scale);
            canvas.rotate_deg(-ring.rotation);
            canvas.draw_path(outline, brush);
            canvas.restore();
        }
        canvas.restore();
        self.advance();
    }

    fn phase(&self) -> PhaseSnapshot {
        let mut snap = PhaseSnapshot::new(WeatherType::Sunny);
        for (i, ring) in self.rings.iter().enumerate() {
            snap = snap
                .with(SCALE_KEYS[i], ring.scale)
                .with(ROTATION_KEYS[i], ring.rotation);
        }
        snap
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/sunny.rs"]
mod tests;
