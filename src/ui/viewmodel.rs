//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data: the
//! labels of busy controls, truncated names, and the tone of each feedback
//! line are all decided before rendering starts.
//!
//! # Example
//!
//! ```rust
//! use names_panel::ui::viewmodel::{FeedbackLine, Tone};
//!
//! let banner = FeedbackLine { text: "Successfully added \"Alice\"".to_string(), tone: Tone::Success };
//! assert_eq!(banner.tone, Tone::Success);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Name input and its submit control.
    pub input: InputInfo,

    /// Error or notice attached to the input.
    pub field_feedback: Option<FeedbackLine>,

    /// The single banner region.
    pub banner: Option<FeedbackLine>,

    /// Visible window of list rows.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected item within `display_items`.
    pub selected_index: usize,

    /// Single row shown instead of records (loading, empty, failed).
    pub placeholder: Option<Placeholder>,

    pub footer: FooterInfo,
}

/// Display information for a single record row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Escaped and truncated name.
    pub name: String,

    /// Formatted creation time, empty if unknown or the pane is too narrow.
    pub created_at: String,

    /// `Delete` or `Deleting...`.
    pub delete_label: String,

    pub is_selected: bool,

    /// Whether a delete of this record is in flight.
    pub is_busy: bool,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,

    /// Busy label of the list container, if a refresh is running.
    pub status: Option<String>,
}

/// Name input display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputInfo {
    pub value: String,
    pub focused: bool,
    /// `Add` or `Adding...`.
    pub submit_label: String,
    pub busy: bool,
}

/// Tone of a feedback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Notice,
}

/// One line of feedback text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackLine {
    pub text: String,
    pub tone: Tone,
}

/// Placeholder row shown in place of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub message: String,
    pub is_error: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,

    /// Pending confirmation question, shown instead of the help text.
    pub prompt: Option<String>,
}
