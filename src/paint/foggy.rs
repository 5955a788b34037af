//! Drifting hexagonal fog bands, shared by the foggy and hazy backdrops.

use crate::foundation::core::{Density, Point, Rgba8, SurfaceSize};
use crate::foundation::math::{alpha_to_opacity, peak_alpha};
use crate::geometry::measure::PathMeasure;
use crate::geometry::shapes::{closed_path, polygon};
use crate::paint::{Painter, PainterBase, PhaseSnapshot};
use crate::render::canvas::{Brush, BrushStyle, Canvas, Paint};
use crate::weather::WeatherType;

pub const LAYER_COUNT: usize = 5;
const SIDES: usize = 6;
const DELTA_SCALE: f64 = 0.13;
/// Scale at which a band wraps back to `1.0`.
pub const MAX_SCALE: f64 = 1.0 + LAYER_COUNT as f64 * DELTA_SCALE;
const DOT_RADIUS: f64 = 4.0;
const SCALE_KEYS: [&str; LAYER_COUNT] = ["scale_0", "scale_1", "scale_2", "scale_3", "scale_4"];

/// One copy of the band stack, placed relative to the previous one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FogInstance {
    /// Offset in multiples of the hexagon radius.
    pub offset: (f64, f64),
    pub scale: f64,
}

/// Palette and arrangement of a fog-family backdrop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FogStyle {
    pub weather: WeatherType,
    pub top: Rgba8,
    pub bottom: Rgba8,
    pub dot: Rgba8,
    /// First instance origin as fractions of the surface width and height.
    pub anchor: (f64, f64),
    pub instances: &'static [FogInstance],
    /// Multiplier on the per-layer scale step.
    pub drift: f64,
}

pub const FOGGY: FogStyle = FogStyle {
    weather: WeatherType::Foggy,
    top: Rgba8::rgb(0xAB_B3_B7),
    bottom: Rgba8::rgb(0xD0_D9_DA),
    dot: Rgba8::WHITE,
    anchor: (0.55, 1.0 / 3.0),
    instances: &[
        FogInstance {
            offset: (0.0, 0.0),
            scale: 1.0,
        },
        FogInstance {
            offset: (-(1.0 + MAX_SCALE) * 0.5, 0.7),
            scale: 0.6,
        },
    ],
    drift: 1.0,
};

pub const HAZY: FogStyle = FogStyle {
    weather: WeatherType::Hazy,
    top: Rgba8::rgb(0xB9_A9_8A),
    bottom: Rgba8::rgb(0xE2_D6_BD),
    dot: Rgba8::rgb(0xFF_F4_DC),
    anchor: (0.4, 0.45),
    instances: &[
        FogInstance {
            offset: (0.0, 0.0),
            scale: 1.0,
        },
        FogInstance {
            offset: (1.3, 0.5),
            scale: 0.7,
        },
        FogInstance {
            offset: (-2.6, 0.9),
            scale: 0.8,
        },
    ],
    drift: 0.5,
};

/// Next scale of a band: a slow step that speeds up as the band widens, wrapping past the max.
pub(crate) fn next_scale(scale: f64, drift: f64) -> f64 {
    let s = scale + ((scale - 1.0) * 0.0002 + 0.00025) * drift;
    if s > MAX_SCALE { 1.0 + s % MAX_SCALE } else { s }
}

/// Band opacity in `0..=255`, brightest halfway through its growth.
pub(crate) fn band_alpha(scale: f64) -> f64 {
    peak_alpha((scale - 1.0) / (MAX_SCALE - 1.0), 0.5, 255.0)
}

struct Layout {
    background: Paint,
    radius: f64,
    dots: Vec<Point>,
}

/// Concentric dotted hexagons that swell outward and fade, one style per fog-like weather.
pub struct FogPainter {
    base: PainterBase,
    style: &'static FogStyle,
    dot: Brush,
    scales: [f64; LAYER_COUNT],
    layout: Option<Layout>,
}

impl FogPainter {
    pub fn new(density: Density, style: &'static FogStyle) -> Self {
        let base = PainterBase::new(density);
        let dot = base
            .default_brush()
            .clone()
            .with_paint(Paint::Solid(style.dot))
            .with_style(BrushStyle::Stroke)
            .with_width(1.0);
        Self {
            base,
            style,
            dot,
            scales: std::array::from_fn(|i| 1.0 + i as f64 * DELTA_SCALE),
            layout: None,
        }
    }

    pub fn foggy(density: Density) -> Self {
        Self::new(density, &FOGGY)
    }

    pub fn hazy(density: Density) -> Self {
        Self::new(density, &HAZY)
    }

    pub fn scales(&self) -> &[f64; LAYER_COUNT] {
        &self.scales
    }

    pub fn style(&self) -> &FogStyle {
        self.style
    }
}

/// Draw every band once, advancing each one step afterwards.
fn draw_bands(
    canvas: &mut Canvas,
    dots: &[Point],
    scales: &mut [f64; LAYER_COUNT],
    brush: &Brush,
    drift: f64,
) {
    for scale in scales.iter_mut() {
        let s = *scale;
        let centers = dots.iter().map(|p| (p.to_vec2() * s).to_point());
        canvas.draw_circles(centers, DOT_RADIUS, &brush.faded(alpha_to_opacity(band_alpha(s))));
        *scale = next_scale(s, drift);
    }
}

impl Painter for FogPainter {
    fn weather(&self) -> WeatherType {
        self.style.weather
    }

    fn base(&self) -> &PainterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut PainterBase {
        &mut self.base
    }

    fn layout(&mut self, size: SurfaceSize) {
        let radius = self.base.dp(70.0);
        // Stamps on a band scaled by `s` sit at `s` times these points.
        let outline = PathMeasure::new(&closed_path(&polygon(SIDES, radius)));
        self.layout = Some(Layout {
            background: Paint::vertical(size.h(), self.style.top, self.style.bottom),
            radius,
            dots: outline.sample_every(self.base.dp(5.0)),
        });
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        let size = self.base.size();
        let Some(layout) = self.layout.as_ref().filter(|_| !size.is_empty()) else {
            return;
        };
        canvas.fill_background(&layout.background);
        canvas.save();
        canvas.translate(size.w() * self.style.anchor.0, size.h() * self.style.anchor.1);
        for instance in self.style.instances {
            canvas.translate(instance.offset.0 * layout.radius, instance.offset.1 * layout.radius);
            canvas.scale(instance.scale, instance.scale);
            draw_bands(
                canvas,
                &layout.dots,
                &mut self.scales,
                &self.dot,
                self.style.drift,
            );
        }
        canvas.restore();
    }

    fn phase(&self) -> PhaseSnapshot {
        SCALE_KEYS
            .into_iter()
            .zip(self.scales)
            .fold(PhaseSnapshot::new(self.style.weather), |snap, (key, s)| {
                snap.with(key, s)
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/foggy.rs"]
mod tests;
