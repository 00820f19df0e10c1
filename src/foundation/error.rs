/// Crate-wide result alias.
pub type PinwheelResult<T> = Result<T, PinwheelError>;

/// Error taxonomy for the render pipeline.
#[derive(thiserror::Error, Debug)]
pub enum PinwheelError {
    /// Invalid dimensions or transform parameters, raised before any drawing starts.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Failure reported by the animation encoder (I/O, container format).
    #[error("encoding error: {0}")]
    Encoding(String),

    /// API misuse such as mismatched buffer sizes or a refused overwrite.
    #[error("validation error: {0}")]
    Validation(String),

    /// Contextual errors from collaborators.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PinwheelError {
    /// Build a [`PinwheelError::Geometry`].
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`PinwheelError::Encoding`].
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Build a [`PinwheelError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<gif::EncodingError> for PinwheelError {
    fn from(e: gif::EncodingError) -> Self {
        Self::encoding(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
