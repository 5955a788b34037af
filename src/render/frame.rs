use crate::foundation::core::Rgba8;
use crate::foundation::error::SurfaceError;

/// A writable frame: premultiplied RGBA8 pixels, row-major, tightly packed.
pub struct FrameBuffer {
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let (w, h) = match (u16::try_from(width), u16::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(SurfaceError::TooLarge { width, height }),
        };
        Ok(Self {
            pixmap: vello_cpu::Pixmap::new(w, h),
        })
    }

    pub fn width(&self) -> u32 {
        u32::from(self.pixmap.width())
    }

    pub fn height(&self) -> u32 {
        u32::from(self.pixmap.height())
    }

    pub fn is_empty(&self) -> bool {
        self.pixmap.width() == 0 || self.pixmap.height() == 0
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.pixmap.data_as_u8_slice_mut().fill(0);
    }

    /// Fill every pixel with a straight-alpha color.
    pub fn fill(&mut self, color: Rgba8) {
        let px = premul_rgba8(color);
        for dst in self.pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
            dst.copy_from_slice(&px);
        }
    }

    /// Premultiplied pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let idx = ((y as usize) * (self.width() as usize) + (x as usize)) * 4;
        let data = self.pixmap.data_as_u8_slice();
        Some([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]])
    }

    pub fn as_premul_bytes(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Straight-alpha RGBA8 copy, suitable for image encoders.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = self.pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut out);
        out
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut vello_cpu::Pixmap {
        &mut self.pixmap
    }
}

pub(crate) fn premul_rgba8(c: Rgba8) -> [u8; 4] {
    let af = u16::from(c.a) + 1;
    let premul = |v: u8| -> u8 { ((u16::from(v) * af) >> 8) as u8 };
    [premul(c.r), premul(c.g), premul(c.b), c.a]
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
