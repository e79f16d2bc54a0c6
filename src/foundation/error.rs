/// Result alias used across the crate.
pub type DuelvizResult<T> = Result<T, DuelvizError>;

/// Error type for every fallible library operation.
#[derive(thiserror::Error, Debug)]
pub enum DuelvizError {
    /// Invalid caller input or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Match data is missing, malformed, or inconsistent.
    #[error("data error: {0}")]
    Data(String),

    /// The SVG template cannot be parsed or lacks a bindable element.
    #[error("template error: {0}")]
    Template(String),

    /// Rasterization or output encoding failed.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level failure (I/O and friends).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DuelvizError {
    /// Build a [`DuelvizError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DuelvizError::Data`].
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Build a [`DuelvizError::Template`].
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    /// Build a [`DuelvizError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
