use crate::foundation::error::{SkypaintError, SkypaintResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Pixel dimensions of a drawing surface.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero; nothing can be drawn at this size.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    pub fn h(self) -> f64 {
        f64::from(self.height)
    }

    pub fn min_side(self) -> f64 {
        self.w().min(self.h())
    }
}

/// Device-independent to physical pixel scale factor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Density(f64);

impl Density {
    pub fn new(scale: f64) -> SkypaintResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(SkypaintError::validation(format!(
                "density must be a positive finite number, got {scale}"
            )));
        }
        Ok(Self(scale))
    }

    pub fn scale(self) -> f64 {
        self.0
    }

    /// Convert device-independent units to whole physical pixels.
    pub fn dp(self, v: f64) -> f64 {
        (v * self.0).round()
    }
}

impl Default for Density {
    fn default() -> Self {
        Self(2.0)
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::rgb(0xFF_FF_FF);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn rgb(hex: u32) -> Self {
        Self::argb(0xFF00_0000 | hex)
    }

    /// Color from a `0xAARRGGBB` literal.
    pub const fn argb(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
            a: (hex >> 24) as u8,
        }
    }

    /// Multiply alpha by `opacity` (clamped to `[0, 1]`).
    pub fn fade(self, opacity: f32) -> Self {
        let o = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let a = (f32::from(self.a) * o).round() as u8;
        Self { a, ..self }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
