/// Convenience result type used across the crate.
pub type HeroResult<T> = Result<T, HeroError>;

/// Top-level error taxonomy used by the sequencer APIs.
#[derive(thiserror::Error, Debug)]
pub enum HeroError {
    /// Invalid user-provided values (indices, lengths, CSS-like literals).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or sampling animation descriptors.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while driving timelines against a scene.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Invalid configuration documents.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HeroError {
    /// Build a [`HeroError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HeroError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`HeroError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`HeroError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`HeroError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for HeroError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
