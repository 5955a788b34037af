/// Timing curves applied to normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    /// Decelerating quadratic, `1 - (1 - t)^2`.
    OutQuad,
    /// Accelerate-then-decelerate cosine curve.
    InOutSine,
    CubicBezier(CubicBezierEase),
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutSine => ((t + 1.0) * std::f64::consts::PI).cos() / 2.0 + 0.5,
            Self::CubicBezier(curve) => curve.apply(t),
        }
    }
}

/// CSS-style cubic Bezier timing function anchored at `(0, 0)` and `(1, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CubicBezierEase {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezierEase {
    const NEWTON_ITERATIONS: usize = 8;
    const BISECT_ITERATIONS: usize = 40;
    const EPSILON: f64 = 1e-7;

    /// Control point x-coordinates are clamped to `[0, 1]` so the curve stays a function of x.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    pub fn apply(self, x: f64) -> f64 {
        let x = if x.is_finite() { x.clamp(0.0, 1.0) } else { 0.0 };
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let s = self.solve_param(x);
        bezier1d(s, self.y1, self.y2).clamp(0.0, 1.0)
    }

    fn solve_param(self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..Self::NEWTON_ITERATIONS {
            let err = bezier1d(s, self.x1, self.x2) - x;
            if err.abs() < Self::EPSILON {
                return s;
            }
            let d = bezier1d_deriv(s, self.x1, self.x2);
            if d.abs() < 1e-6 {
                break;
            }
            s -= err / d;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        for _ in 0..Self::BISECT_ITERATIONS {
            let v = bezier1d(s, self.x1, self.x2);
            if (v - x).abs() < Self::EPSILON {
                break;
            }
            if v < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) * 0.5;
        }
        s
    }
}

fn bezier1d(s: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

fn bezier1d_deriv(s: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * p1 + 6.0 * u * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
