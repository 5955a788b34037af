//! Pinhole camera that turns a flat 2D shape into a receding 3D plane.
//!
//! Coordinates follow screen conventions: +x right, +y down, +z away from the viewer. The
//! camera sits at `z = -FOCAL_LENGTH` looking down +z, so the `z = 0` plane projects 1:1.

use crate::foundation::core::{BezPath, Point};

/// Distance from the eye to the projection plane (eight inches at 72 dpi).
pub const FOCAL_LENGTH: f64 = 576.0;

const MIN_DEPTH: f64 = 1e-3;

/// Accumulates 3D translate/rotate operations, each pre-concatenated onto the current state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera3D {
    // Row-major 3x4 affine transform.
    m: [[f64; 4]; 3],
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera3D {
    pub fn new() -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
            ],
        }
    }

    pub fn translate(mut self, x: f64, y: f64, z: f64) -> Self {
        for row in &mut self.m {
            row[3] += row[0] * x + row[1] * y + row[2] * z;
        }
        self
    }

    /// Rotate about the horizontal axis; positive angles tip the top of the plane away.
    pub fn rotate_x(self, degrees: f64) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        self.pre_rotate([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    pub fn rotate_y(self, degrees: f64) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        self.pre_rotate([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    pub fn rotate_z(self, degrees: f64) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        self.pre_rotate([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    fn pre_rotate(mut self, r: [[f64; 3]; 3]) -> Self {
        for row in &mut self.m {
            let (a, b, c) = (row[0], row[1], row[2]);
            for (j, cell) in row.iter_mut().take(3).enumerate() {
                *cell = a * r[0][j] + b * r[1][j] + c * r[2][j];
            }
        }
        self
    }

    /// Collapse the camera into a homogeneous 2D projection of the `z = 0` plane.
    pub fn projection(&self) -> Projection {
        let f = FOCAL_LENGTH;
        let m = &self.m;
        Projection {
            m: [
                [f * m[0][0], f * m[0][1], f * m[0][3]],
                [f * m[1][0], f * m[1][1], f * m[1][3]],
                [m[2][0], m[2][1], m[2][3] + f],
            ],
        }
    }
}

/// Homogeneous 3x3 transform with a perspective row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    m: [[f64; 3]; 3],
}

impl Projection {
    /// Map a point; `None` when it lands on or behind the eye.
    pub fn map_point(&self, p: Point) -> Option<Point> {
        let m = &self.m;
        let w = m[2][0] * p.x + m[2][1] * p.y + m[2][2];
        if !w.is_finite() || w < MIN_DEPTH {
            return None;
        }
        let x = (m[0][0] * p.x + m[0][1] * p.y + m[0][2]) / w;
        let y = (m[1][0] * p.x + m[1][1] * p.y + m[1][2]) / w;
        (x.is_finite() && y.is_finite()).then(|| Point::new(x, y))
    }

    /// Map a polyline into a path. Points that fail to project split the line.
    pub fn map_polyline(&self, points: &[Point]) -> BezPath {
        let mut out = BezPath::new();
        let mut pen_down = false;
        for &p in points {
            match self.map_point(p) {
                Some(q) if pen_down => out.line_to(q),
                Some(q) => {
                    out.move_to(q);
                    pen_down = true;
                }
                None => pen_down = false,
            }
        }
        out
    }

    /// Map isolated points, dropping the ones that fail to project.
    pub fn map_points<'a>(&'a self, points: &'a [Point]) -> impl Iterator<Item = Point> + 'a {
        points.iter().filter_map(|&p| self.map_point(p))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/camera.rs"]
mod tests;
