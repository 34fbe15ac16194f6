//! Gateway error taxonomy and user-facing classification.

use serde::Deserialize;
use thiserror::Error;

/// Uniform failure type for every remote call.
///
/// Callers never look at raw status codes: an HTTP rejection always arrives as
/// [`GatewayError::Rejected`] carrying a human-readable message, whether the
/// server supplied one or not.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The HTTP exchange never completed (DNS, refused connection, reset).
    #[error("Unable to connect to server")]
    Unreachable,

    /// The request exceeded its deadline.
    #[error("Request timed out")]
    TimedOut,

    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected {
        message: String,
        /// Structured error code, when the server sends one.
        code: Option<ErrorKind>,
    },

    /// A success response whose body could not be decoded.
    #[error("Unexpected response from server")]
    Malformed { detail: String },
}

/// User-facing failure categories.
///
/// Deserializes from the server's optional `code` field; unknown codes map to
/// [`ErrorKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    AlreadyExists,
    TooLong,
    Empty,
    NotFound,
    #[serde(other)]
    Other,
}

impl ErrorKind {
    /// Classifies a gateway error.
    ///
    /// A structured code from the server wins. Without one, the message text is
    /// matched against the phrases the server is known to use.
    ///
    /// ```
    /// use names_panel::gateway::{ErrorKind, GatewayError};
    ///
    /// let err = GatewayError::Rejected { message: "name already exists".into(), code: None };
    /// assert_eq!(ErrorKind::classify(&err), ErrorKind::AlreadyExists);
    /// assert_eq!(ErrorKind::classify(&GatewayError::Unreachable), ErrorKind::Other);
    /// ```
    #[must_use]
    pub fn classify(error: &GatewayError) -> Self {
        match error {
            GatewayError::Rejected {
                code: Some(code), ..
            } if *code != Self::Other => *code,
            GatewayError::Rejected { message, .. } => Self::from_message(message),
            GatewayError::Unreachable | GatewayError::TimedOut | GatewayError::Malformed { .. } => {
                Self::Other
            }
        }
    }

    fn from_message(message: &str) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("already exists") || lower.contains("duplicate") {
            Self::AlreadyExists
        } else if lower.contains("too long")
            || lower.contains("max length")
            || lower.contains("exceed")
        {
            Self::TooLong
        } else if lower.contains("empty") {
            Self::Empty
        } else if lower.contains("not found") {
            Self::NotFound
        } else {
            Self::Other
        }
    }
}
