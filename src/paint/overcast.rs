use crate::foundation::core::{Affine, Density, Point, Rgba8, SurfaceSize};
use crate::foundation::math::{alpha_to_opacity, wrap};
use crate::geometry::camera::Camera3D;
use crate::geometry::shapes::{FLATTEN_TOLERANCE, flatten_points, quad_wave};
use crate::paint::{Painter, PainterBase, PhaseSnapshot};
use crate::render::canvas::{Brush, BrushStyle, Canvas, GradientStop, Paint};
use crate::weather::WeatherType;

const LINE_COUNT: usize = 20;
const DELTA_DEGREE: f64 = 8.0;
const X_STEP: f64 = 3.0;
const LIGHT_STOPS: [GradientStop; 3] = [
    GradientStop::new(0.35, Rgba8::rgb(0x43_48_4D)),
    GradientStop::new(0.5, Rgba8::WHITE),
    GradientStop::new(0.65, Rgba8::rgb(0x43_48_4D)),
];

struct Layout {
    background: Paint,
    line: Brush,
    wave: Vec<Point>,
}

/// Grey wave lines lit by a sweeping highlight, drifting under a heavy sky.
pub struct OvercastPainter {
    base: PainterBase,
    canvas_x_offset: f64,
    wave_width: f64,
    layout: Option<Layout>,
    x_offset: f64,
}

impl OvercastPainter {
    pub fn new(density: Density) -> Self {
        let base = PainterBase::new(density);
        let canvas_x_offset = base.dp(130.0);
        let wave_width = base.dp(300.0);
        Self {
            base,
            canvas_x_offset,
            wave_width,
            layout: None,
            x_offset: 0.0,
        }
    }

    pub fn x_offset(&self) -> f64 {
        self.x_offset
    }

    pub fn x_offset_period(&self) -> f64 {
        self.wave_width * 4.0
    }

    fn advance(&mut self) {
        self.x_offset = wrap(self.x_offset + X_STEP, self.x_offset_period());
    }
}

impl Painter for OvercastPainter {
    fn weather(&self) -> WeatherType {
        WeatherType::Overcast
    }

    fn base(&self) -> &PainterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut PainterBase {
        &mut self.base
    }

    fn layout(&mut self, size: SurfaceSize) {
        let amplitude = (self.wave_width * 0.7).trunc();
        let path = quad_wave(-5.0 * size.w(), size.w(), self.wave_width, amplitude, true);

        // The highlight is rotated about the local origin, not its own center.
        let turn = Affine::rotate((-90.0_f64).to_radians());
        let center = turn * Point::new((size.height / 3) as f64, self.canvas_x_offset);
        let light = Paint::Sweep {
            center,
            rotation_deg: -90.0,
            stops: LIGHT_STOPS.to_vec(),
        };
        let line = self
            .base
            .default_brush()
            .clone()
            .with_paint(light)
            .with_style(BrushStyle::Stroke)
            .with_width(self.base.dp(1.0));

        self.layout = Some(Layout {
            background: Paint::vertical(size.h(), Rgba8::rgb(0x49_50_52), Rgba8::rgb(0xA2_B2_B4)),
            line,
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
        canvas.translate(
            (size.width / 2) as f64 - self.canvas_x_offset,
            (size.height / 3) as f64,
        );
        let d_alpha = 255 / (LINE_COUNT as u32 - 1);
        for i in 0..LINE_COUNT {
            let shift = 5.0 * i as f64;
            let projection = Camera3D::new()
                .translate(self.x_offset + shift, shift, 25.0 * i as f64)
                .rotate_x(i as f64 * DELTA_DEGREE)
                .projection();
            let alpha = 255 - d_alpha * i as u32;
            let path = projection.map_polyline(&layout.wave);
            canvas.draw_path(&path, &layout.line.faded(alpha_to_opacity(f64::from(alpha))));
        }
        canvas.restore();
        self.advance();
    }

    fn phase(&self) -> PhaseSnapshot {
        PhaseSnapshot::new(WeatherType::Overcast).with("x_offset", self.x_offset)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/overcast.rs"]
mod tests;
