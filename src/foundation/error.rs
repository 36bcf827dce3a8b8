/// Convenience result type used across the crate.
pub type AdResult<T> = Result<T, AdError>;

/// Error taxonomy shared by rendering, capture and the site surfaces.
#[derive(thiserror::Error, Debug)]
pub enum AdError {
    /// Invalid timeline, config or call arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// The drawing surface (canvas, render context or font) could not be obtained.
    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// The encoding facility could not be constructed.
    #[error("capture unavailable: {0}")]
    CaptureUnavailable(String),

    /// The encoding facility failed while a session was running.
    #[error("encode error: {0}")]
    Encode(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, usually IO with attached context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AdError {
    /// Build an [`AdError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AdError::SurfaceUnavailable`].
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::SurfaceUnavailable(msg.into())
    }

    /// Build an [`AdError::CaptureUnavailable`].
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::CaptureUnavailable(msg.into())
    }

    /// Build an [`AdError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`AdError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for AdError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
