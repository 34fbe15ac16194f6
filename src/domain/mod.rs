//! Domain layer: name records, validation rules, and error types.
//!
//! Nothing here knows about Zellij or the transport used to reach the server.
//!
//! - [`error`]: crate error type and result alias
//! - [`name`]: `NameRecord`, `NameId`, collection payload decoding
//! - [`validation`]: candidate name validation and keystroke notices

pub mod error;
pub mod name;
pub mod validation;

pub use error::{NamesPanelError, Result};
pub use name::{decode_collection, escape_control, NameId, NameRecord};
pub use validation::{validate, ValidName, ValidationError};
