use thiserror::Error;

/// Failures a conversion run can end with. Every variant is terminal;
/// nothing is retried.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// The input path does not exist. Unreadable-but-present files are
    /// reported as [`TranscodeError::Io`] instead.
    #[error("File '{0}' not found")]
    InputNotFound(String),

    /// Any other read or write fault, surfaced with the OS error text.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
