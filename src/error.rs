use thiserror::Error;

/// Top-level error type for the polygon kernel.
///
/// Degenerate geometry is never reported here: offset and decimation
/// invalidate the polygon instead.
#[derive(Debug, Error)]
pub enum KernelError {
    #[error(transparent)]
    Context(#[from] ContextError),
}

/// Errors raised while building a [`Context`](crate::math::Context).
#[derive(Debug, Error, PartialEq)]
pub enum ContextError {
    #[error("scale factor must be finite and positive, got {0}")]
    InvalidScale(f64),

    #[error("coincidence epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),

    #[error("precision of {0} decimal digits exceeds the integer coordinate range")]
    PrecisionTooLarge(u32),
}

/// Convenience type alias for results using [`KernelError`].
pub type Result<T> = std::result::Result<T, KernelError>;
