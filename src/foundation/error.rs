/// Result alias used across the crate.
pub type TesseraResult<T> = Result<T, TesseraError>;

/// Error type for request resolution and rendering.
///
/// Generators never fail: malformed colors fall back to black, degenerate geometry yields
/// fewer primitives and out-of-range parameters are clamped. Errors are reserved for
/// caller mistakes (unknown style, bad palette index, zero dimensions) and renderer faults.
#[derive(thiserror::Error, Debug)]
pub enum TesseraError {
    /// The request is structurally invalid.
    #[error("validation error: {0}")]
    Validation(String),

    /// The request names a style that is not registered.
    #[error("unknown style '{0}'")]
    UnknownStyle(String),

    /// Rasterization or image encoding failed.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, preserving its source.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TesseraError {
    /// Build a [`TesseraError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TesseraError::UnknownStyle`].
    pub fn unknown_style(id: impl Into<String>) -> Self {
        Self::UnknownStyle(id.into())
    }

    /// Build a [`TesseraError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TesseraError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TesseraError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
