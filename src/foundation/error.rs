/// Convenience result type used across scrollmorph.
pub type MorphResult<T> = Result<T, MorphError>;

/// Top-level error taxonomy used by driver APIs.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// Invalid user-provided storyboard or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or sampling animation layers.
    #[error("animation error: {0}")]
    Animation(String),

    /// Rejected input-event data (non-finite coordinates and the like).
    #[error("input error: {0}")]
    Input(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphError {
    /// Build a [`MorphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MorphError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`MorphError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`MorphError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
