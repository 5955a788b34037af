use crate::foundation::core::{Density, Point, Rgba8, SurfaceSize};
use crate::geometry::camera::Camera3D;
use crate::geometry::shapes::sine_points;
use crate::paint::{Painter, PainterBase, PhaseSnapshot};
use crate::render::canvas::{Brush, BrushStyle, Canvas, Paint};
use crate::weather::WeatherType;

const LINE_COUNT: usize = 18;
const DELTA_DEGREE: f64 = 10.0;
const POINT_COUNT: usize = 225;
const DEGREE_STEP: f64 = 0.5;

struct Layout {
    background: Paint,
    points: Vec<Point>,
}

/// Tilted ribbons of dust grains rolling across a sand-colored sky.
pub struct SandyPainter {
    base: PainterBase,
    grain: Brush,
    wave_width: f64,
    delta_x: f64,
    layout: Option<Layout>,
    degree: f64,
    x_offset: f64,
}

impl SandyPainter {
    pub fn new(density: Density) -> Self {
        let base = PainterBase::new(density);
        let grain = base
            .default_brush()
            .clone()
            .with_paint(Paint::Solid(Rgba8::rgb(0x5B_49_23)))
            .with_style(BrushStyle::Fill)
            .with_width(base.dp(1.5));
        let wave_width = base.dp(350.0);
        let delta_x = base.dp(3.0);
        Self {
            base,
            grain,
            wave_width,
            delta_x,
            layout: None,
            degree: 0.0,
            x_offset: 0.0,
        }
    }

    /// Rotation phase, in `(-360, 0]`.
    pub fn degree(&self) -> f64 {
        self.degree
    }

    /// Horizontal phase, in `(-2 * wave_width, 0]`.
    pub fn x_offset(&self) -> f64 {
        self.x_offset
    }

    pub fn x_offset_period(&self) -> f64 {
        self.wave_width * 2.0
    }

    // `%` truncates toward zero, so both counters stay in (-period, 0].
    fn advance(&mut self) {
        self.degree = (self.degree - DEGREE_STEP) % 360.0;
        self.x_offset = (self.x_offset - 1.0) % self.x_offset_period();
    }
}

impl Painter for SandyPainter {
    fn weather(&self) -> WeatherType {
        WeatherType::Sandy
    }

    fn base(&self) -> &PainterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut PainterBase {
        &mut self.base
    }

    fn layout(&mut self, size: SurfaceSize) {
        let amplitude = (self.wave_width * 0.2).trunc();
        self.layout = Some(Layout {
            background: Paint::vertical(size.h(), Rgba8::rgb(0x87_78_49), Rgba8::rgb(0xBF_BD_A0)),
            points: sine_points(POINT_COUNT, 2.0 * self.delta_x, self.wave_width, amplitude),
        });
    }

    fn on_detach(&mut self) {
        self.degree = 0.0;
        self.x_offset = 0.0;
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        let size = self.base.size();
        let Some(layout) = self.layout.as_ref().filter(|_| !size.is_empty()) else {
            return;
        };
        canvas.fill_background(&layout.background);
        canvas.save();
        canvas.rotate_deg(-20.0);
        canvas.translate(0.0, (size.height / 2) as f64);
        for i in 0..LINE_COUNT {
            let projection = Camera3D::new()
                .translate(200.0 + self.x_offset + 20.0 * i as f64, 0.0, 0.0)
                .rotate_x(DELTA_DEGREE * i as f64 + self.degree)
                .projection();
            canvas.draw_points(projection.map_points(&layout.points), &self.grain);
        }
        canvas.restore();
        self.advance();
    }

    fn phase(&self) -> PhaseSnapshot {
        PhaseSnapshot::new(WeatherType::Sandy)
            .with("degree", self.degree)
            .with("x_offset", self.x_offset)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/sandy.rs"]
mod tests;
