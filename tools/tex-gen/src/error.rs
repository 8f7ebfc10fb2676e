//! Error type shared by every texture operation

/// Errors raised while drawing, resampling, or exporting a texture
#[derive(Debug, thiserror::Error)]
pub enum TexError {
    /// Canvas created with a zero dimension
    #[error("invalid canvas dimensions {width}x{height} (both must be > 0)")]
    InvalidDimensions { width: u32, height: u32 },

    /// Resample target is empty or larger than the source
    #[error("invalid resample target {target_w}x{target_h} for {source_w}x{source_h} source")]
    InvalidTarget {
        target_w: u32,
        target_h: u32,
        source_w: u32,
        source_h: u32,
    },

    /// A geometry primitive was given an unusable parameter
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// Polygon with fewer than 3 vertices
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoder failure other than I/O (which maps to `Io`)
    #[error("PNG encoding failed: {0}")]
    Encode(#[source] png::EncodingError),

    #[error("PNG decoding failed: {0}")]
    Decode(#[from] png::DecodingError),

    /// PNG decoded fine but is not 8-bit RGBA
    #[error("unsupported PNG format: {0}")]
    UnsupportedFormat(String),
}

impl TexError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl From<png::EncodingError> for TexError {
    fn from(err: png::EncodingError) -> Self {
        match err {
            png::EncodingError::IoError(e) => Self::Io(e),
            other => Self::Encode(other),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_io_failure_is_io_error() {
        let err = TexError::from(png::EncodingError::IoError(std::io::Error::other("disk full")));
        assert!(matches!(err, TexError::Io(_)));

        let err = TexError::from(png::EncodingError::LimitsExceeded);
        assert!(matches!(err, TexError::Encode(_)));
    }
}
