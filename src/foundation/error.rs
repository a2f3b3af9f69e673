/// Convenience result type used across embusen.
pub type EmbusenResult<T> = Result<T, EmbusenError>;

/// Error taxonomy for the crate's outer surfaces.
///
/// The interpolation and framing core is infallible; these errors only come from option
/// validation, sequence decoding, session preconditions, and rasterization.
#[derive(thiserror::Error, Debug)]
pub enum EmbusenError {
    /// Invalid caller-provided options or indices.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing sequence records.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while producing SVG or raster output.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EmbusenError {
    /// Build an [`EmbusenError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`EmbusenError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build an [`EmbusenError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
