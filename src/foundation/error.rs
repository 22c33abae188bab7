/// Convenience result type used across maskview.
pub type PreviewResult<T> = Result<T, PreviewError>;

/// Top-level error taxonomy used by preview APIs.
///
/// The renderer itself signals no errors (unready rasters and zero-size
/// surfaces are silent no-ops); this taxonomy covers the asset-preparation
/// boundary, where external bytes enter the crate.
#[derive(thiserror::Error, Debug)]
pub enum PreviewError {
    /// Invalid user-provided or asset data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while decoding or rasterizing an asset.
    #[error("decode error: {0}")]
    Decode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PreviewError {
    /// Build a [`PreviewError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PreviewError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
