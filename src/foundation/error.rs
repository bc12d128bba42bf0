/// Convenience result type used across walka.
pub type WalkaResult<T> = Result<T, WalkaError>;

/// Top-level error taxonomy used by engine APIs.
///
/// An empty digit stream is deliberately absent: stepping with no digits is a no-op,
/// reported as [`crate::StepOutcome::Idle`].
#[derive(thiserror::Error, Debug)]
pub enum WalkaError {
    /// Rejected configuration value; the previous valid value is kept.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Render surfaces could not be created or resized.
    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// A digit source could not produce digit text.
    #[error("digit source error: {0}")]
    DigitSource(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WalkaError {
    /// Build a [`WalkaError::InvalidConfiguration`] value.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Build a [`WalkaError::SurfaceUnavailable`] value.
    pub fn surface_unavailable(msg: impl Into<String>) -> Self {
        Self::SurfaceUnavailable(msg.into())
    }

    /// Build a [`WalkaError::DigitSource`] value.
    pub fn digit_source(msg: impl Into<String>) -> Self {
        Self::DigitSource(msg.into())
    }

    /// Build a [`WalkaError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
