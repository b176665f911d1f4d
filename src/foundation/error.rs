/// Convenience result type used across pixfmt.
pub type PixfmtResult<T> = Result<T, PixfmtError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// The per-pixel codec itself never fails; these cover parsing, validation, checked buffer
/// writes, image files and configuration.
#[derive(thiserror::Error, Debug)]
pub enum PixfmtError {
    /// Malformed text (pixel format names, color literals).
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid user-provided values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Destination buffer cannot hold the pixel.
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall {
        /// Bytes the write requires.
        needed: usize,
        /// Bytes available after the offset.
        available: usize,
    },

    /// Image decoding or encoding failure.
    #[error("image error: {0}")]
    Image(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixfmtError {
    /// Build a [`PixfmtError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`PixfmtError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PixfmtError::BufferTooSmall`] value.
    pub fn buffer_too_small(needed: usize, available: usize) -> Self {
        Self::BufferTooSmall { needed, available }
    }

    /// Build a [`PixfmtError::Image`] value.
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    /// Build a [`PixfmtError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
