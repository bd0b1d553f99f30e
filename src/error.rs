//! Error types for quotation rendering and printing

use thiserror::Error;

/// Result type alias for quotepad operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around the renderer.
///
/// These cover loading inputs, template failures reported by
/// `try_render_document`, and the work done inside print backends.
#[derive(Error, Debug)]
pub enum Error {
    /// Quotation input could not be parsed
    #[error("Invalid quotation input: {0}")]
    InvalidInput(String),

    /// Invalid seller profile or logo
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The document template failed to compile or render
    #[error("Template error: {0}")]
    Template(String),

    /// A print backend failed to produce its output
    #[error("Printing failed: {0}")]
    PrintError(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CDP-specific error
    #[cfg(feature = "cdp")]
    #[error("CDP error: {0}")]
    CdpError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

#[cfg(feature = "cdp")]
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::CdpError(err.to_string())
    }
}
