//! Error types for the names panel plugin.
//!
//! [`NamesPanelError`] covers failures that escape a single user flow: bad
//! configuration, theme loading, request encoding. Network failures never show
//! up here; they are recovered at the flow boundary and turned into banners
//! (see [`crate::gateway::GatewayError`]).

use thiserror::Error;

/// The main error type for plugin operations.
///
/// # Examples
///
/// ```
/// use names_panel::NamesPanelError;
///
/// fn check_base(base: &str) -> Result<(), NamesPanelError> {
///     if base.is_empty() {
///         return Err(NamesPanelError::Config("api_base must not be empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(check_base("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum NamesPanelError {
    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A request body could not be serialized to JSON.
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// A specialized `Result` type for plugin operations.
pub type Result<T> = std::result::Result<T, NamesPanelError>;
