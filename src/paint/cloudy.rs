use crate::foundation::core::{Density, Point, Rgba8, SurfaceSize};
use crate::foundation::math::{alpha_to_opacity, wrap};
use crate::geometry::camera::Camera3D;
use crate::geometry::shapes::{FLATTEN_TOLERANCE, flatten_points, quad_wave};
use crate::paint::{Painter, PainterBase, PhaseSnapshot};
use crate::render::canvas::{Brush, BrushStyle, Canvas, Paint};
use crate::weather::WeatherType;

const LINE_COUNT: usize = 16;
const DELTA_DEGREE: f64 = 10.0;
const MIN_ALPHA: u32 = 80;
const MAX_ALPHA: u32 = 200;
const WAVE_WIDTH: f64 = 900.0;
const AMPLITUDE: f64 = WAVE_WIDTH * 0.5;
const X_STEP: f64 = 3.0;
/// Wrapping period of the horizontal offset.
pub const X_OFFSET_PERIOD: f64 = WAVE_WIDTH * 4.0;

struct Layout {
    background: Paint,
    wave: Vec<Point>,
}

/// Sheets of white wave lines fanning away from the viewer over a blue sky.
pub struct CloudyPainter {
    base: PainterBase,
    line: Brush,
    canvas_x_offset: f64,
    layout: Option<Layout>,
    x_offset: f64,
}

impl CloudyPainter {
    pub fn new(density: Density) -> Self {
        let base = PainterBase::new(density);
        let line = base
            .default_brush()
            .clone()
            .with_paint(Paint::Solid(Rgba8::WHITE))
            .with_style(BrushStyle::Stroke)
            .with_width(base.dp(1.0));
        let canvas_x_offset = base.dp(130.0);
        Self {
            base,
            line,
            canvas_x_offset,
            layout: None,
            x_offset: 0.0,
        }
    }

    pub fn x_offset(&self) -> f64 {
        self.x_offset
    }

    fn advance(&mut self) {
        self.x_offset = wrap(self.x_offset + X_STEP, X_OFFSET_PERIOD);
    }
}

impl Painter for CloudyPainter {
    fn weather(&self) -> WeatherType {
        WeatherType::Cloudy
    }

    fn base(&self) -> &PainterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut PainterBase {
        &mut self.base
    }

    fn layout(&mut self, size: SurfaceSize) {
        let background = Paint::vertical(size.h(), Rgba8::rgb(0x0B_8A_C6), Rgba8::WHITE);
        let path = quad_wave(-5.0 * size.w(), size.w(), WAVE_WIDTH, AMPLITUDE, false);
        self.layout = Some(Layout {
            background,
            wave: flatten_points(&path, FLATTEN_TOLERANCE),
        });
    }

    fn on_detach(&mut self) {
        self.x_offset = 0.0;
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        let size = self.base.size();
        let Some(layout) = self.layout.as_ref().filter(|_| !size.is_empty()) else {
            return;
        };
        canvas.fill_background(&layout.background);
        canvas.save();
        canvas.rotate_deg(20.0);
        canvas.translate(size.w() + self.canvas_x_offset, (size.height / 3) as f64);
        canvas.scale(1.1, 1.1);
        let d_alpha = (MAX_ALPHA - MIN_ALPHA) / (LINE_COUNT as u32 - 1);
        for i in 0..LINE_COUNT {
            let projection = Camera3D::new()
                .translate(-500.0 + self.x_offset, 0.0, i as f64 * 20.0)
                .rotate_x(i as f64 * DELTA_DEGREE)
                .projection();
            let alpha = MIN_ALPHA + d_alpha * i as u32;
            let path = projection.map_polyline(&layout.wave);
            canvas.draw_path(&path, &self.line.faded(alpha_to_opacity(f64::from(alpha))));
        }
        canvas.restore();
        self.advance();
    }

    fn phase(&self) -> PhaseSnapshot {
        PhaseSnapshot::new(WeatherType::Cloudy).with("x_offset", self.x_offset)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/cloudy.rs"]
mod tests;
