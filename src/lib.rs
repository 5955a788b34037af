//! Skypaint renders animated, full-screen weather backdrops on the CPU.
//!
//! Each [`WeatherType`] has a procedural [`Painter`] that owns its animation state and advances
//! it by one fixed step per drawn frame. A [`RenderHost`] drives a [`DrawingSurface`] from a
//! dedicated loop thread:
//!
//! - Build a host from a [`HostConfig`] and a surface
//! - Forward surface and visibility events to it
//! - Pick the weather with [`RenderHost::set_weather`]
//!
//! Painters can also be driven headlessly with [`render_frames`].
#![forbid(unsafe_code)]

pub mod animation;
pub mod foundation;
pub mod geometry;
pub mod host;
pub mod paint;
pub mod render;
pub mod weather;

pub use crate::animation::ease::{CubicBezierEase, Ease};
pub use crate::animation::timeline::{FRAME_STEP_MS, Timeline, TimelinePhase};
pub use crate::foundation::core::{Affine, BezPath, Density, Point, Rgba8, SurfaceSize, Vec2};
pub use crate::foundation::error::{SkypaintError, SkypaintResult, SurfaceError};
pub use crate::host::{HostConfig, LoopStats, RenderHost, WeatherListener};
pub use crate::paint::registry::{PainterRegistry, create_painter};
pub use crate::paint::ripple::{Ripple, RippleState};
pub use crate::paint::{Painter, PainterBase, PhaseSnapshot};
pub use crate::render::canvas::{Brush, BrushStyle, Canvas, GradientStop, Paint, Sprite};
pub use crate::render::frame::FrameBuffer;
pub use crate::render::offline::render_frames;
pub use crate::render::surface::{DrawingSurface, InMemorySurface, SurfaceProbe};
pub use crate::weather::WeatherType;
