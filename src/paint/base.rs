use std::cell::OnceCell;

use crate::foundation::core::{Density, Rgba8, SurfaceSize};
use crate::render::canvas::{Brush, BrushStyle};

/// State every painter carries: surface size, density, attach flag, and layout bookkeeping.
#[derive(Debug)]
pub struct PainterBase {
    size: SurfaceSize,
    density: Density,
    attached: bool,
    laid_out: Option<SurfaceSize>,
    layout_builds: u64,
    default_brush: OnceCell<Brush>,
}

impl PainterBase {
    pub fn new(density: Density) -> Self {
        Self {
            size: SurfaceSize::ZERO,
            density,
            attached: false,
            laid_out: None,
            layout_builds: 0,
            default_brush: OnceCell::new(),
        }
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn width(&self) -> f64 {
        self.size.w()
    }

    pub fn height(&self) -> f64 {
        self.size.h()
    }

    pub fn density(&self) -> Density {
        self.density
    }

    /// Density-independent length to pixels, rounded.
    pub fn dp(&self, v: f64) -> f64 {
        self.density.dp(v)
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Number of times size-dependent setup has run.
    pub fn layout_builds(&self) -> u64 {
        self.layout_builds
    }

    /// Starting point for a painter's brushes: green, fill-and-stroke, 3 dp wide.
    pub fn default_brush(&self) -> &Brush {
        self.default_brush.get_or_init(|| {
            Brush::solid(Rgba8::rgb(0x00_FF_00))
                .with_style(BrushStyle::FillAndStroke)
                .with_width(self.density.dp(3.0))
        })
    }

    pub(crate) fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    /// Store `size`; returns whether it differs from the previous one.
    pub(crate) fn set_size(&mut self, size: SurfaceSize) -> bool {
        let changed = self.size != size;
        self.size = size;
        changed
    }

    /// Claim a layout pass for `size`. Returns `false` for empty sizes and for the size that
    /// is already laid out.
    pub(crate) fn begin_layout(&mut self, size: SurfaceSize) -> bool {
        if size.is_empty() || self.laid_out == Some(size) {
            return false;
        }
        self.laid_out = Some(size);
        self.layout_builds += 1;
        tracing::trace!(
            width = size.width,
            height = size.height,
            builds = self.layout_builds,
            "painter layout"
        );
        true
    }

    pub(crate) fn is_laid_out(&self) -> bool {
        self.laid_out.is_some()
    }
}
