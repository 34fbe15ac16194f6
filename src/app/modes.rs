//! Focus and input mode types for the application.
//!
//! These enums decide which keybindings the shim maps and how the footer reads.
//!
//! # State Machine
//!
//! The panel has two focus targets:
//! - **Input**: typing a new name, Enter submits it
//! - **List**: navigating the names, with delete and refresh keys
//!
//! Independently of focus, a delete request switches the input mode to
//! [`InputMode::ConfirmDelete`] until the user answers the prompt.
//!
//! # Example
//!
//! ```rust
//! use names_panel::app::modes::{Focus, InputMode};
//!
//! let focus = Focus::Input;
//! let mode = InputMode::Normal;
//! assert_ne!(focus, Focus::List);
//! assert_eq!(mode, InputMode::Normal);
//! ```

use crate::domain::NameRecord;

/// Element receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The name input field.
    ///
    /// Accepts characters, backspace, and Enter (submit).
    #[default]
    Input,

    /// The names list.
    ///
    /// Accepts j/k for movement, d to delete, r to refresh, and i to return
    /// to the input.
    List,
}

/// Current input handling mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default editing and navigation mode.
    #[default]
    Normal,

    /// Waiting for the user to confirm deletion of a record.
    ///
    /// Only y/Enter (confirm) and n/Esc (cancel) are accepted.
    ConfirmDelete(NameRecord),
}
