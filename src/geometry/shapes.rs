//! Base shapes shared by the painters.

use crate::foundation::core::{BezPath, Point, Vec2};

/// Flattening tolerance, in pixels, for curves that are later projected point by point.
pub const FLATTEN_TOLERANCE: f64 = 0.5;

/// Vertices of a regular polygon centered on the origin, vertex 0 at 12 o'clock, clockwise.
pub fn polygon(sides: usize, radius: f64) -> Vec<Point> {
    if sides < 3 || !radius.is_finite() {
        return Vec::new();
    }
    let step = 360.0 / sides as f64;
    (0..sides)
        .map(|j| {
            let a = (j as f64 * step).to_radians();
            Point::new(radius * a.sin(), -radius * a.cos())
        })
        .collect()
}

/// Closed path through `points`.
pub fn closed_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(*first);
    for &p in rest {
        path.line_to(p);
    }
    path.close_path();
    path
}

/// Closed path through `points` with every corner blended by a quadratic arc.
///
/// Each corner is cut back by `radius` along both edges (at most half the edge) and the
/// vertex becomes the quadratic control point.
pub fn round_corners(points: &[Point], radius: f64) -> BezPath {
    let n = points.len();
    if n < 3 || !radius.is_finite() || radius <= 0.0 {
        return closed_path(points);
    }
    let cut = |from: Point, to: Point| -> Point {
        let d: Vec2 = to - from;
        let len = d.hypot();
        if len <= 0.0 {
            return from;
        }
        let r = radius.min(len * 0.5);
        from + d * (r / len)
    };
    let corners: Vec<(Point, Point, Point)> = (0..n)
        .map(|i| {
            let v = points[i];
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            (cut(v, prev), v, cut(v, next))
        })
        .collect();

    let mut path = BezPath::new();
    path.move_to(corners[0].2);
    for &(a, v, b) in corners.iter().skip(1).chain(corners.iter().take(1)) {
        path.line_to(a);
        path.quad_to(v, b);
    }
    path.close_path();
    path
}

/// Horizontal quadratic wave from `x = start_x` until it passes `end_x`.
///
/// Each half period spans `2 * wave_width`, bulging alternately by `amplitude` down and up
/// (or up first when `up_first`).
pub fn quad_wave(start_x: f64, end_x: f64, wave_width: f64, amplitude: f64, up_first: bool) -> BezPath {
    let mut path = BezPath::new();
    if !(wave_width.is_finite() && wave_width > 0.0 && start_x.is_finite() && end_x.is_finite()) {
        return path;
    }
    path.move_to((start_x, 0.0));
    let mut x = start_x;
    let mut up = up_first;
    while x < end_x {
        let bulge = if up { -amplitude } else { amplitude };
        path.quad_to((x + wave_width, bulge), (x + 2.0 * wave_width, 0.0));
        x += 2.0 * wave_width;
        up = !up;
    }
    path
}

/// Flatten curves into a polyline of points (subpaths are concatenated).
pub fn flatten_points(path: &BezPath, tolerance: f64) -> Vec<Point> {
    let mut out = Vec::new();
    kurbo::flatten(path.iter(), tolerance, |el| match el {
        kurbo::PathEl::MoveTo(p) | kurbo::PathEl::LineTo(p) => out.push(p),
        _ => {}
    });
    out
}

/// `count` points on `y = amplitude * sin(pi * x / wave_width)`, starting at `x = -wave_width`
/// and stepping by `dx`.
pub fn sine_points(count: usize, dx: f64, wave_width: f64, amplitude: f64) -> Vec<Point> {
    if !(wave_width.is_finite() && wave_width > 0.0) {
        return Vec::new();
    }
    let omega = std::f64::consts::PI / wave_width;
    (0..count)
        .map(|k| {
            let x = k as f64 * dx - wave_width;
            Point::new(x, (omega * x).sin() * amplitude)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shapes.rs"]
mod tests;
