//! Render host: owns the drawing surface and runs the redraw loop for the active painter.

pub mod config;
pub mod render_host;
pub(crate) mod stage;

pub use config::HostConfig;
pub use render_host::{RenderHost, WeatherListener};
pub use stage::LoopStats;
