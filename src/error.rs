use thiserror::Error;

/// Errors reported by the ring geometry engine.
///
/// Both kinds describe caller configuration bugs. They are deterministic and
/// never worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RingError {
    /// Structurally impossible ring: non-positive radius, negative stroke,
    /// or a stroke wide enough to invert the inner and outer radius.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Out-of-range configuration for a helper operation (value scale,
    /// block layout, tessellation).
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`RingError`].
pub type Result<T> = std::result::Result<T, RingError>;
