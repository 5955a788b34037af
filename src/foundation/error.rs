/// Convenience result type used across skypaint.
pub type SkypaintResult<T> = Result<T, SkypaintError>;

/// Top-level error taxonomy used by host and configuration APIs.
///
/// Painters never fail; only the outer surfaces (configuration, surfaces, the loop thread)
/// report errors.
#[derive(thiserror::Error, Debug)]
pub enum SkypaintError {
    /// Invalid user-provided configuration or input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure reported by a drawing surface.
    #[error("surface error: {0}")]
    Surface(#[from] SurfaceError),

    /// The render loop thread could not be spawned or joined.
    #[error("worker error: {0}")]
    Worker(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SkypaintError {
    /// Build a [`SkypaintError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SkypaintError::Worker`] value.
    pub fn worker(msg: impl Into<String>) -> Self {
        Self::Worker(msg.into())
    }

    /// Build a [`SkypaintError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

/// Errors raised by [`crate::DrawingSurface`] implementations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The surface was torn down while a frame was in flight.
    #[error("surface destroyed")]
    Destroyed,

    /// A presented frame does not match the surface dimensions.
    #[error("frame size mismatch: got {got:?}, expected {expected:?}")]
    SizeMismatch {
        /// Surface dimensions.
        expected: (u32, u32),
        /// Presented frame dimensions.
        got: (u32, u32),
    },

    /// The requested frame exceeds the rasterizer limits.
    #[error("frame size {width}x{height} exceeds u16 limits")]
    TooLarge {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
