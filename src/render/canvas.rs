use std::sync::Arc;

use kurbo::Shape;

use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8};
use crate::foundation::error::SurfaceError;
use crate::render::frame::FrameBuffer;

/// One color stop of a gradient paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba8,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Rgba8) -> Self {
        Self { offset, color }
    }
}

/// What a fill or stroke is colored with. Geometry is in the local space active at draw time.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba8),
    Linear {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
    /// Angular sweep around `center`; offset `0` starts at `rotation_deg` (clockwise from +x).
    Sweep {
        center: Point,
        rotation_deg: f64,
        stops: Vec<GradientStop>,
    },
    Radial {
        center: Point,
        radius: f64,
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    /// Vertical two-color gradient from `y = 0` to `y = height`.
    pub fn vertical(height: f64, top: Rgba8, bottom: Rgba8) -> Self {
        Self::Linear {
            start: Point::ZERO,
            end: Point::new(0.0, height),
            stops: vec![GradientStop::new(0.0, top), GradientStop::new(1.0, bottom)],
        }
    }

    /// Same paint with every color's alpha scaled by `opacity`.
    pub fn faded(&self, opacity: f32) -> Self {
        let fade_stops = |stops: &[GradientStop]| -> Vec<GradientStop> {
            stops
                .iter()
                .map(|s| GradientStop::new(s.offset, s.color.fade(opacity)))
                .collect()
        };
        match self {
            Self::Solid(c) => Self::Solid(c.fade(opacity)),
            Self::Linear { start, end, stops } => Self::Linear {
                start: *start,
                end: *end,
                stops: fade_stops(stops),
            },
            Self::Sweep {
                center,
                rotation_deg,
                stops,
            } => Self::Sweep {
                center: *center,
                rotation_deg: *rotation_deg,
                stops: fade_stops(stops),
            },
            Self::Radial {
                center,
                radius,
                stops,
            } => Self::Radial {
                center: *center,
                radius: *radius,
                stops: fade_stops(stops),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrushStyle {
    Fill,
    Stroke,
    FillAndStroke,
}

/// Paint plus the geometry rules used to apply it.
#[derive(Clone, Debug, PartialEq)]
pub struct Brush {
    pub paint: Paint,
    pub style: BrushStyle,
    pub width: f64,
    pub round_cap: bool,
}

impl Brush {
    pub fn solid(color: Rgba8) -> Self {
        Self {
            paint: Paint::Solid(color),
            style: BrushStyle::Fill,
            width: 1.0,
            round_cap: false,
        }
    }

    pub fn with_paint(mut self, paint: Paint) -> Self {
        self.paint = paint;
        self
    }

    pub fn with_style(mut self, style: BrushStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_round_cap(mut self, round: bool) -> Self {
        self.round_cap = round;
        self
    }

    pub fn faded(&self, opacity: f32) -> Self {
        Self {
            paint: self.paint.faded(opacity),
            ..self.clone()
        }
    }
}

/// Pre-rendered bitmap, drawn centered on the current origin.
#[derive(Clone)]
pub struct Sprite {
    image: vello_cpu::Image,
    width: u16,
    height: u16,
}

impl std::fmt::Debug for Sprite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sprite")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl Sprite {
    /// Rasterize `draw` into a fresh transparent bitmap of `width x height`.
    pub fn render(width: u16, height: u16, draw: impl FnOnce(&mut Canvas)) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        let mut canvas = Canvas::new(width, height);
        draw(&mut canvas);
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        canvas.flush_into(&mut pixmap);
        Self {
            image: vello_cpu::Image {
                image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
                sampler: vello_cpu::peniko::ImageSampler::default(),
            },
            width,
            height,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }
}

/// Immediate-mode 2D canvas on top of the CPU rasterizer.
///
/// Keeps an affine transform with a save/restore stack. Nothing reaches pixels until
/// [`Canvas::render_into`].
pub struct Canvas {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
    transform: Affine,
    stack: Vec<Affine>,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("transform", &self.transform)
            .field("depth", &self.stack.len())
            .finish()
    }
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        Self {
            ctx: vello_cpu::RenderContext::new(width, height),
            width,
            height,
            transform: Affine::IDENTITY,
            stack: Vec::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Drop recorded drawing and return to the identity transform.
    pub fn reset(&mut self) {
        self.ctx.reset();
        self.transform = Affine::IDENTITY;
        self.stack.clear();
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }

    pub fn save(&mut self) {
        self.stack.push(self.transform);
    }

    /// Pop the last saved transform. Unbalanced restores are ignored.
    pub fn restore(&mut self) {
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.transform *= Affine::translate((dx, dy));
    }

    /// Rotate clockwise on screen by `degrees` around the local origin.
    pub fn rotate_deg(&mut self, degrees: f64) {
        self.transform *= Affine::rotate(degrees.to_radians());
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.transform *= Affine::scale_non_uniform(sx, sy);
    }

    /// Paint the whole canvas, ignoring the current transform.
    pub fn fill_background(&mut self, paint: &Paint) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        apply_paint(&mut self.ctx, paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
    }

    pub fn draw_path(&mut self, path: &BezPath, brush: &Brush) {
        if path.elements().is_empty() {
            return;
        }
        let cpu_path = bezpath_to_cpu(path);
        self.ctx.set_transform(affine_to_cpu(self.transform));
        apply_paint(&mut self.ctx, &brush.paint);
        if matches!(brush.style, BrushStyle::Fill | BrushStyle::FillAndStroke) {
            self.ctx.fill_path(&cpu_path);
        }
        if matches!(brush.style, BrushStyle::Stroke | BrushStyle::FillAndStroke) {
            self.ctx.set_stroke(stroke_for(brush));
            self.ctx.stroke_path(&cpu_path);
        }
    }

    pub fn draw_line(&mut self, from: Point, to: Point, brush: &Brush) {
        let mut path = BezPath::new();
        path.move_to(from);
        path.line_to(to);
        self.draw_path(&path, &brush.clone().with_style(BrushStyle::Stroke));
    }

    pub fn draw_circle(&mut self, center: Point, radius: f64, brush: &Brush) {
        self.draw_circles([center], radius, brush);
    }

    /// Equal circles around every center, drawn as one path.
    pub fn draw_circles(
        &mut self,
        centers: impl IntoIterator<Item = Point>,
        radius: f64,
        brush: &Brush,
    ) {
        if !(radius.is_finite() && radius > 0.0) {
            return;
        }
        let mut path = BezPath::new();
        for c in centers {
            path.extend(kurbo::Circle::new(c, radius).path_elements(0.1));
        }
        self.draw_path(&path, brush);
    }

    /// Square dots of side `brush.width` centered on each point.
    pub fn draw_points(&mut self, points: impl IntoIterator<Item = Point>, brush: &Brush) {
        let half = brush.width * 0.5;
        let mut path = BezPath::new();
        for p in points {
            let r = Rect::new(p.x - half, p.y - half, p.x + half, p.y + half);
            path.move_to((r.x0, r.y0));
            path.line_to((r.x1, r.y0));
            path.line_to((r.x1, r.y1));
            path.line_to((r.x0, r.y1));
            path.close_path();
        }
        self.draw_path(&path, &brush.clone().with_style(BrushStyle::Fill));
    }

    /// Draw `sprite` centered on the local origin.
    pub fn draw_sprite(&mut self, sprite: &Sprite, opacity: f32) {
        if opacity <= 0.0 {
            return;
        }
        let (w, h) = (f64::from(sprite.width), f64::from(sprite.height));
        let t = self.transform * Affine::translate((-w * 0.5, -h * 0.5));
        self.ctx.set_transform(affine_to_cpu(t));
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(sprite.image.clone());
        if opacity < 1.0 {
            self.ctx.push_opacity_layer(opacity);
        }
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
        if opacity < 1.0 {
            self.ctx.pop_layer();
        }
    }

    /// Rasterize everything recorded so far into `frame`.
    pub fn render_into(&mut self, frame: &mut FrameBuffer) -> Result<(), SurfaceError> {
        if frame.width() != u32::from(self.width) || frame.height() != u32::from(self.height) {
            return Err(SurfaceError::SizeMismatch {
                expected: (u32::from(self.width), u32::from(self.height)),
                got: (frame.width(), frame.height()),
            });
        }
        self.flush_into(frame.pixmap_mut());
        Ok(())
    }

    fn flush_into(&mut self, pixmap: &mut vello_cpu::Pixmap) {
        self.ctx.flush();
        self.ctx.render_to_pixmap(pixmap);
    }
}

fn stroke_for(brush: &Brush) -> vello_cpu::kurbo::Stroke {
    let stroke = vello_cpu::kurbo::Stroke::new(brush.width.max(0.0));
    if brush.round_cap {
        stroke.with_caps(vello_cpu::kurbo::Cap::Round)
    } else {
        stroke
    }
}

fn apply_paint(ctx: &mut vello_cpu::RenderContext, paint: &Paint) {
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    match paint {
        Paint::Solid(c) => ctx.set_paint(color_to_cpu(*c)),
        Paint::Linear { start, end, stops } => {
            let gradient =
                vello_cpu::peniko::Gradient::new_linear(point_to_cpu(*start), point_to_cpu(*end))
                    .with_stops(stops_to_cpu(stops).as_slice());
            ctx.set_paint(gradient);
        }
        Paint::Sweep {
            center,
            rotation_deg,
            stops,
        } => {
            let c = point_to_cpu(*center);
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::rotate_about(
                rotation_deg.to_radians(),
                c,
            ));
            let gradient =
                vello_cpu::peniko::Gradient::new_sweep(c, 0.0, std::f32::consts::TAU)
                    .with_stops(stops_to_cpu(stops).as_slice());
            ctx.set_paint(gradient);
        }
        Paint::Radial {
            center,
            radius,
            stops,
        } => {
            let gradient =
                vello_cpu::peniko::Gradient::new_radial(point_to_cpu(*center), *radius as f32)
                    .with_stops(stops_to_cpu(stops).as_slice());
            ctx.set_paint(gradient);
        }
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn stops_to_cpu(stops: &[GradientStop]) -> Vec<vello_cpu::peniko::ColorStop> {
    stops
        .iter()
        .map(|s| vello_cpu::peniko::ColorStop::from((s.offset, color_to_cpu(s.color))))
        .collect()
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
