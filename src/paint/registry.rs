use std::collections::HashMap;

use crate::foundation::core::Density;
use crate::paint::Painter;
use crate::paint::cloudy::CloudyPainter;
use crate::paint::foggy::FogPainter;
use crate::paint::overcast::OvercastPainter;
use crate::paint::rainy::RainyPainter;
use crate::paint::sandy::SandyPainter;
use crate::paint::snowy::SnowyPainter;
use crate::paint::sunny::SunnyPainter;
use crate::weather::WeatherType;

/// Build a fresh painter for `kind`. `WeatherType::None` has no painter.
///
/// Construction does no drawing; size-dependent setup waits for the first resize.
pub fn create_painter(kind: WeatherType, density: Density) -> Option<Box<dyn Painter>> {
    let painter: Box<dyn Painter> = match kind {
        WeatherType::None => return None,
        WeatherType::Cloudy => Box::new(CloudyPainter::new(density)),
        WeatherType::Sunny => Box::new(SunnyPainter::new(density)),
        WeatherType::Overcast => Box::new(OvercastPainter::new(density)),
        WeatherType::Sandy => Box::new(SandyPainter::new(density)),
        WeatherType::Snowy => Box::new(SnowyPainter::new(density)),
        WeatherType::Rainy => Box::new(RainyPainter::new(density)),
        WeatherType::Foggy => Box::new(FogPainter::foggy(density)),
        WeatherType::Hazy => Box::new(FogPainter::hazy(density)),
    };
    Some(painter)
}

/// Lazily built painters, one per weather type, kept until the registry is dropped.
pub struct PainterRegistry {
    density: Density,
    painters: HashMap<WeatherType, Box<dyn Painter>>,
}

impl std::fmt::Debug for PainterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.painters.keys().map(|k| k.name()).collect();
        kinds.sort_unstable();
        f.debug_struct("PainterRegistry")
            .field("density", &self.density)
            .field("painters", &kinds)
            .finish()
    }
}

impl PainterRegistry {
    pub fn new(density: Density) -> Self {
        Self {
            density,
            painters: HashMap::new(),
        }
    }

    pub fn density(&self) -> Density {
        self.density
    }

    /// Painter for `kind`, built on first request and reused afterwards.
    pub fn get(&mut self, kind: WeatherType) -> Option<&mut (dyn Painter + 'static)> {
        if !self.painters.contains_key(&kind) {
            self.build(kind)?;
        }
        self.painters.get_mut(&kind).map(|p| p.as_mut())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn build(&mut self, kind: WeatherType) -> Option<()> {
        let painter = create_painter(kind, self.density)?;
        tracing::debug!("painter created");
        self.painters.insert(kind, painter);
        Some(())
    }

    pub fn contains(&self, kind: WeatherType) -> bool {
        self.painters.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.painters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.painters.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/registry.rs"]
mod tests;
