/// Crate-wide result alias.
pub type JourneyResult<T> = Result<T, JourneyError>;

/// Errors raised while validating configuration or building animators.
///
/// Queries on a constructed animator never fail; every error surfaces at construction time.
#[derive(thiserror::Error, Debug)]
pub enum JourneyError {
    /// Malformed configuration (too few keyframes, non-positive durations, zero fps, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// A configuration that is well formed but cannot be animated.
    #[error("animation error: {0}")]
    Animation(String),

    /// JSON parse or write failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, typically I/O from a sink.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl JourneyError {
    /// Build a [`JourneyError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`JourneyError::Animation`].
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`JourneyError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
