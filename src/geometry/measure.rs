//! Arclength parameterization of a path: position and heading at a distance along it.

use kurbo::{ParamCurve, ParamCurveArclen, ParamCurveDeriv, PathSeg};

use crate::foundation::core::{BezPath, Point, Vec2};

const ACCURACY: f64 = 1e-3;

#[derive(Clone, Debug)]
struct MeasuredSeg {
    seg: PathSeg,
    start: f64,
    len: f64,
}

/// Precomputed segment lengths of a path, for repeated distance lookups.
#[derive(Clone, Debug, Default)]
pub struct PathMeasure {
    segs: Vec<MeasuredSeg>,
    length: f64,
}

impl PathMeasure {
    pub fn new(path: &BezPath) -> Self {
        let mut segs = Vec::new();
        let mut length = 0.0;
        for seg in path.segments() {
            let len = seg.arclen(ACCURACY);
            if !len.is_finite() || len <= 0.0 {
                continue;
            }
            segs.push(MeasuredSeg {
                seg,
                start: length,
                len,
            });
            length += len;
        }
        Self { segs, length }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.segs.is_empty()
    }

    /// Position and unit tangent at `distance`, clamped into `[0, length]`.
    pub fn pos_tan(&self, distance: f64) -> Option<(Point, Vec2)> {
        let d = if distance.is_finite() {
            distance.clamp(0.0, self.length)
        } else {
            0.0
        };
        let idx = self
            .segs
            .partition_point(|s| s.start + s.len < d)
            .min(self.segs.len().checked_sub(1)?);
        let ms = &self.segs[idx];
        let local = (d - ms.start).clamp(0.0, ms.len);
        let t = ms.seg.inv_arclen(local, ACCURACY).clamp(0.0, 1.0);
        let pos = ms.seg.eval(t);
        let tan = tangent(ms.seg, t);
        let len = tan.hypot();
        let tan = if len > 0.0 && len.is_finite() {
            tan / len
        } else {
            Vec2::new(1.0, 0.0)
        };
        Some((pos, tan))
    }

    /// Heading in degrees at `distance`, measured clockwise from +x in screen space.
    pub fn angle_deg(&self, distance: f64) -> Option<f64> {
        self.pos_tan(distance)
            .map(|(_, tan)| tan.y.atan2(tan.x).to_degrees())
    }

    /// Points at `0, spacing, 2 * spacing, ...` along the path.
    pub fn sample_every(&self, spacing: f64) -> Vec<Point> {
        if !spacing.is_finite() || spacing <= 0.0 || self.is_empty() {
            return Vec::new();
        }
        let count = (self.length / spacing).floor() as usize;
        (0..count)
            .filter_map(|i| self.pos_tan(i as f64 * spacing).map(|(p, _)| p))
            .collect()
    }
}

fn tangent(seg: PathSeg, t: f64) -> Vec2 {
    match seg {
        PathSeg::Line(l) => l.p1 - l.p0,
        PathSeg::Quad(q) => q.deriv().eval(t).to_vec2(),
        PathSeg::Cubic(c) => {
            let v = c.deriv().eval(t).to_vec2();
            // Degenerate control points give a zero derivative at the ends.
            if v.hypot2() > 1e-18 {
                v
            } else {
                c.p3 - c.p0
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/measure.rs"]
mod tests;
