use crate::foundation::core::{BezPath, Density, Point, Rgba8, SurfaceSize, Vec2};
use crate::foundation::math::{alpha_to_opacity, peak_alpha, wrap};
use crate::geometry::measure::PathMeasure;
use crate::paint::{Painter, PainterBase, PhaseSnapshot};
use crate::render::canvas::{Brush, BrushStyle, Canvas, GradientStop, Paint, Sprite};
use crate::weather::WeatherType;

const RING_COUNT: usize = 7;
const ARM_COUNT: usize = 6;
const ROTATION_STEP: f64 = 0.05;
const ROUTE_STEP: f64 = 2.0;
const EDGE_ALPHA: f64 = 100.0;

/// Geometry and brushes of the six-armed flake, shared by the main flake and the sprite.
struct Flake {
    max_radius: f64,
    min_radius: f64,
    delta_radius: f64,
    axle_length: f64,
    edges: [(f64, f64); 2],
    ring: Brush,
    edge: Brush,
    axle: Brush,
}

impl Flake {
    fn new(base: &PainterBase) -> Self {
        let max_radius = base.dp(100.0);
        let delta_radius = base.dp(10.0);
        let axle_length = 1.5 * max_radius;
        let ring = base
            .default_brush()
            .clone()
            .with_paint(Paint::Solid(Rgba8::WHITE))
            .with_style(BrushStyle::Stroke)
            .with_width(base.dp(1.5))
            .with_round_cap(true);
        let edge = base
            .default_brush()
            .clone()
            .with_paint(Paint::Solid(Rgba8::rgb(0xCA_D6_D9)))
            .with_style(BrushStyle::Stroke)
            .with_width(base.dp(2.0));
        let axle = edge.clone().with_paint(Paint::Radial {
            center: Point::ZERO,
            radius: axle_length,
            stops: vec![
                GradientStop::new(0.0, Rgba8::WHITE),
                GradientStop::new(1.0, Rgba8::argb(0x80_CA_D6_D9)),
            ],
        });
        Self {
            max_radius,
            min_radius: max_radius - delta_radius * RING_COUNT as f64,
            delta_radius,
            axle_length,
            edges: [(max_radius * 1.1, max_radius * 0.2), (max_radius * 1.3, max_radius * 0.1)],
            ring,
            edge,
            axle,
        }
    }

    /// Next radius in the ring cycle: grows by `step`, folding back above the max.
    fn next_radius(&self, r: f64, step: f64) -> f64 {
        let r = r + step;
        if r > self.max_radius {
            self.min_radius + wrap(r - self.max_radius, self.max_radius - self.min_radius)
        } else {
            r
        }
    }

    fn ring_alpha(&self, r: f64) -> f64 {
        let fraction = (self.max_radius - r) / (self.max_radius - self.min_radius);
        peak_alpha(1.0 - fraction, 0.2, 200.0)
    }

    /// Draw the flake around the local origin with its innermost ring at `radius`.
    fn draw(&self, canvas: &mut Canvas, radius: f64) {
        let (sin, cos) = 30.0_f64.to_radians().sin_cos();
        let mut r = radius;
        for _ in 0..RING_COUNT {
            let brush = self.ring.faded(alpha_to_opacity(self.ring_alpha(r)));
            let (x, y) = (r * cos, r * (1.0 + sin));
            canvas.save();
            for _ in 0..ARM_COUNT {
                chevron(canvas, Point::new(-x, y), Point::new(0.0, r), Point::new(x, y), &brush);
                canvas.rotate_deg(60.0);
            }
            canvas.restore();
            r = self.next_radius(r, self.delta_radius);
        }

        // The static strokes stand in for one pass per ring stacked on top of each other.
        let stacked = 1.0 - (1.0 - EDGE_ALPHA / 255.0).powi(RING_COUNT as i32);
        let edge = self.edge.faded(stacked as f32 * alpha_to_opacity(EDGE_ALPHA));
        let axle = self.axle.faded(stacked as f32 * alpha_to_opacity(EDGE_ALPHA));
        canvas.save();
        for _ in 0..ARM_COUNT {
            for &(er, len) in &self.edges {
                let (x, y) = (len * cos, er + len * sin);
                chevron(canvas, Point::new(-x, y), Point::new(0.0, er), Point::new(x, y), &edge);
            }
            canvas.draw_line(Point::ZERO, Point::new(0.0, self.axle_length), &axle);
            canvas.rotate_deg(60.0);
        }
        canvas.restore();
    }
}

fn chevron(canvas: &mut Canvas, a: Point, apex: Point, b: Point, brush: &Brush) {
    let mut path = BezPath::new();
    path.move_to(a);
    path.line_to(apex);
    path.line_to(b);
    canvas.draw_path(&path, brush);
}

struct Layout {
    background: Paint,
    route: PathMeasure,
}

/// A slowly turning snowflake with pulsing rings, plus two small flakes drifting down a curve.
pub struct SnowyPainter {
    base: PainterBase,
    flake: Flake,
    sprite_size: u16,
    sprite: Option<Sprite>,
    layout: Option<Layout>,
    rotation: f64,
    radius: f64,
    distance: f64,
}

impl SnowyPainter {
    pub fn new(density: Density) -> Self {
        let base = PainterBase::new(density);
        let flake = Flake::new(&base);
        let sprite_size = base.dp(100.0).clamp(1.0, f64::from(u16::MAX)) as u16;
        let radius = flake.max_radius;
        Self {
            base,
            flake,
            sprite_size,
            sprite: None,
            layout: None,
            rotation: 0.0,
            radius,
            distance: 0.0,
        }
    }

    /// Rotation of the main flake, in `[0, 360)`.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn ring_radius(&self) -> f64 {
        self.radius
    }

    pub fn route_distance(&self) -> f64 {
        self.distance
    }

    pub fn route_length(&self) -> f64 {
        self.layout.as_ref().map_or(0.0, |l| l.route.length())
    }

    fn draw_small(&self, canvas: &mut Canvas, route: &PathMeasure, sprite: &Sprite, distance: f64) {
        let length = route.length();
        let Some((pos, tan)) = route.pos_tan(distance) else {
            return;
        };
        let alpha = peak_alpha(distance / length, 0.2, 200.0);
        canvas.save();
        canvas.translate(pos.x, pos.y);
        canvas.rotate_deg(tan.y.atan2(tan.x).to_degrees());
        canvas.draw_sprite(sprite, alpha_to_opacity(alpha));
        canvas.restore();
    }

    fn advance(&mut self) {
        self.radius = self.flake.next_radius(self.radius, 1.0);
        self.rotation = wrap(self.rotation + ROTATION_STEP, 360.0);
        self.distance = wrap(self.distance + ROUTE_STEP, self.route_length());
    }
}

impl Painter for SnowyPainter {
    fn weather(&self) -> WeatherType {
        WeatherType::Snowy
    }

    fn base(&self) -> &PainterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut PainterBase {
        &mut self.base
    }

    fn layout(&mut self, size: SurfaceSize) {
        let (w, h) = (f64::from(size.width), f64::from(size.height));
        let start = Point::new((size.width / 4) as f64, (size.height / 4) as f64);
        let mut path = BezPath::new();
        path.move_to(start);
        path.curve_to(
            start + Vec2::new((-w / 16.0).trunc(), (h / 6.0).trunc()),
            start + Vec2::new((w / 3.0).trunc(), (h / 5.0).trunc()),
            start + Vec2::new(0.0, (h / 2.0).trunc()),
        );
        let route = PathMeasure::new(&path);
        self.distance = wrap(self.distance, route.length());
        self.radius = self.flake.max_radius;

        if self.sprite.is_none() {
            let side = self.sprite_size;
            let scale = f64::from(side) / (self.flake.axle_length * 2.0);
            let flake = &self.flake;
            self.sprite = Some(Sprite::render(side, side, |c| {
                c.translate(f64::from(side / 2), f64::from(side / 2));
                c.scale(scale, scale);
                flake.draw(c, flake.max_radius);
            }));
        }

        self.layout = Some(Layout {
            background: Paint::vertical(h, Rgba8::rgb(0xDC_E5_E9), Rgba8::rgb(0x7A_95_93)),
            route,
        });
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        let size = self.base.size();
        let (Some(layout), Some(sprite)) = (self.layout.as_ref(), self.sprite.as_ref()) else {
            return;
        };
        if size.is_empty() {
            return;
        }
        canvas.fill_background(&layout.background);

        let length = layout.route.length();
        if length > 0.0 {
            let trailing = wrap(self.distance + length / 2.0, length);
            self.draw_small(canvas, &layout.route, sprite, self.distance);
            self.draw_small(canvas, &layout.route, sprite, trailing);
        }

        canvas.save();
        canvas.translate(size.w() * 0.8, size.h() * 0.15);
        canvas.rotate_deg(self.rotation);
        self.flake.draw(canvas, self.radius);
        canvas.restore();

        self.advance();
    }

    fn phase(&self) -> PhaseSnapshot {
        PhaseSnapshot::new(WeatherType::Snowy)
            .with("rotation", self.rotation)
            .with("ring_radius", self.radius)
            .with("route_distance", self.distance)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/snowy.rs"]
mod tests;
