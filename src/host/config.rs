use std::path::Path;

use anyhow::Context;

use crate::foundation::core::{Density, Rgba8};
use crate::foundation::error::{SkypaintError, SkypaintResult};
use crate::weather::WeatherType;

/// Construction-time settings for a [`crate::RenderHost`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Weather shown before the first `set_weather` call.
    pub initial_weather: WeatherType,
    /// Physical pixels per device-independent pixel.
    pub density: f64,
    /// Pause between two frames of the render loop.
    pub frame_interval_ms: u64,
    /// Straight-alpha fill used while no painter is active.
    pub idle_rgba: [u8; 4],
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            initial_weather: WeatherType::None,
            density: 2.0,
            frame_interval_ms: 1,
            idle_rgba: [0xFF, 0xFF, 0xFF, 0xFF],
        }
    }
}

impl HostConfig {
    pub fn validate(&self) -> SkypaintResult<()> {
        Density::new(self.density)?;
        if self.frame_interval_ms == 0 {
            return Err(SkypaintError::validation(
                "frame_interval_ms must be at least 1",
            ));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> SkypaintResult<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| SkypaintError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> SkypaintResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read host config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn density(&self) -> SkypaintResult<Density> {
        Density::new(self.density)
    }

    pub fn idle_color(&self) -> Rgba8 {
        let [r, g, b, a] = self.idle_rgba;
        Rgba8::new(r, g, b, a)
    }

    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/config.rs"]
mod tests;
