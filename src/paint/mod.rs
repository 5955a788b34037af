//! Weather painters.
//!
//! A painter owns all animation state for one weather type. Each `draw` renders the current
//! state and then advances it by one fixed step ([`crate::FRAME_STEP_MS`]), so the animation
//! speed is tied to the redraw rate rather than to wall-clock time.

pub mod base;
pub mod cloudy;
pub mod foggy;
pub mod overcast;
pub mod rainy;
pub mod registry;
pub mod ripple;
pub mod sandy;
pub mod snowy;
pub mod sunny;

use crate::foundation::core::SurfaceSize;
use crate::render::canvas::Canvas;
use crate::weather::WeatherType;

pub use base::PainterBase;

/// Named scalar values describing where a painter's animation currently is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhaseSnapshot {
    pub weather: WeatherType,
    pub values: Vec<(&'static str, f64)>,
}

impl PhaseSnapshot {
    pub fn new(weather: WeatherType) -> Self {
        Self {
            weather,
            values: Vec::new(),
        }
    }

    pub fn with(mut self, name: &'static str, value: f64) -> Self {
        self.values.push((name, value));
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, v)| v)
    }
}

/// Drawing strategy for one weather type.
///
/// Implementors provide `layout`, `draw` and `phase`; the lifecycle entry points (`attach`,
/// `detach`, `resize`) are shared and route through [`PainterBase`] so size-dependent setup
/// runs at most once per distinct non-empty size.
pub trait Painter: Send {
    fn weather(&self) -> WeatherType;

    fn base(&self) -> &PainterBase;

    fn base_mut(&mut self) -> &mut PainterBase;

    /// Rebuild size-dependent resources. Only called with a non-empty size that differs from
    /// the last one laid out.
    fn layout(&mut self, size: SurfaceSize);

    /// Render the current state onto `canvas`, then advance one step.
    fn draw(&mut self, canvas: &mut Canvas);

    fn phase(&self) -> PhaseSnapshot;

    fn on_attach(&mut self) {}

    fn on_detach(&mut self) {}

    /// Painter became active on a host.
    fn attach(&mut self) {
        let size = self.base().size();
        if self.base_mut().begin_layout(size) {
            self.layout(size);
        }
        self.base_mut().set_attached(true);
        self.on_attach();
    }

    /// Painter stopped being active.
    fn detach(&mut self) {
        self.base_mut().set_attached(false);
        self.on_detach();
    }

    /// Surface dimensions changed.
    fn resize(&mut self, width: u32, height: u32) {
        let size = SurfaceSize::new(width, height);
        if self.base_mut().set_size(size) && self.base_mut().begin_layout(size) {
            self.layout(size);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/mod.rs"]
mod tests;
