use thiserror::Error;

/// Errors surfaced by canvas and history operations
#[derive(Debug, Error)]
pub enum PaintError {
    /// A local precondition was violated (bad point, width out of range, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl PaintError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Errors that can occur while reading a saved drawing.
///
/// Loading is all-or-nothing, so any of these means the history was left untouched.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read drawing: {0}")]
    Read(#[from] std::io::Error),

    #[error("Malformed drawing: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Unsupported drawing version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Errors that can occur while writing a drawing
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write drawing: {0}")]
    Write(#[from] std::io::Error),

    #[error("Failed to serialize drawing: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type PaintResult<T> = Result<T, PaintError>;
