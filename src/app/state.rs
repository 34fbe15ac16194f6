//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin,
//! along with selection management and UI view model generation. It is the
//! single source of truth for everything the panel shows: the rendered
//! collection, the input value, focus, feedback, and the requests in flight.
//!
//! # State Components
//!
//! - **List**: the collection as last applied from the server, or its loading
//!   and failure states
//! - **Input**: the raw value of the name input
//! - **Selection**: cursor position within the list
//! - **Focus / Input Mode**: which keybindings apply, whether a delete
//!   confirmation is pending
//! - **Feedback**: banner, field feedback, and busy controls
//! - **In-flight requests**: flows waiting for a response or their deadline
//!
//! # Example
//!
//! ```rust
//! use names_panel::app::{AppState, Settings};
//! use names_panel::ui::theme::Theme;
//!
//! let state = AppState::new(Settings::default(), Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.display_items.is_empty());
//! ```

use super::feedback::{BannerKind, Control, Feedback, FieldFeedback};
use super::modes::{Focus, InputMode};
use super::sync::Flow;
use crate::domain::validation::DEFAULT_MAX_NAME_LENGTH;
use crate::domain::NameRecord;
use crate::gateway::RequestId;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, FeedbackLine, FooterInfo, HeaderInfo, InputInfo, Placeholder, Tone, UIViewModel,
};
use std::collections::BTreeMap;
use std::time::Duration;

/// Default deadline for a single request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Rows taken by everything except list items: header, input box (3),
/// field feedback, banner, column header, and separator above the list, plus
/// separator and footer below it.
const CHROME_ROWS: usize = 10;

/// Visible width of the name column, including padding.
const NAME_COLUMN_WIDTH: usize = 37;

/// Behavioral knobs taken from the plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub max_name_length: usize,
    pub request_timeout: Duration,
    pub success_banner: Duration,
    pub error_banner: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            success_banner: super::feedback::DEFAULT_SUCCESS_BANNER,
            error_banner: super::feedback::DEFAULT_ERROR_BANNER,
        }
    }
}

/// What the list container currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// No refresh has completed yet.
    Loading,
    /// The collection as returned by the last applied refresh, in server order.
    Loaded(Vec<NameRecord>),
    /// The last applied refresh failed.
    Failed(String),
}

/// Central application state container.
///
/// Mutated by the event handler in response to user input, command results
/// and timers. View models are computed on-demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Raw value of the name input.
    pub input: String,

    pub focus: Focus,

    pub input_mode: InputMode,

    /// The rendered collection. Only ever replaced wholesale by a refresh.
    pub list: ListView,

    /// Zero-based index of the selected record.
    ///
    /// Clamped whenever the list is replaced.
    pub selected_index: usize,

    pub feedback: Feedback,

    /// Flows waiting for their response or deadline.
    pub(crate) in_flight: BTreeMap<RequestId, Flow>,

    pub(crate) next_request: u64,

    /// Most recent refresh whose result was applied to `list`.
    pub(crate) last_applied_refresh: Option<RequestId>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// The list starts in [`ListView::Loading`] until the initial refresh
    /// completes.
    #[must_use]
    pub fn new(settings: Settings, theme: Theme) -> Self {
        let feedback = Feedback::new(settings.success_banner, settings.error_banner);
        Self {
            settings,
            theme,
            input: String::new(),
            focus: Focus::Input,
            input_mode: InputMode::Normal,
            list: ListView::Loading,
            selected_index: 0,
            feedback,
            in_flight: BTreeMap::new(),
            next_request: 0,
            last_applied_refresh: None,
        }
    }

    /// Records currently shown, empty unless the list is loaded.
    #[must_use]
    pub fn records(&self) -> &[NameRecord] {
        match &self.list {
            ListView::Loaded(records) => records,
            ListView::Loading | ListView::Failed(_) => &[],
        }
    }

    /// Moves selection cursor down by one position, wrapping to top if at end.
    pub fn move_selection_down(&mut self) {
        let len = self.records().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves selection cursor up by one position, wrapping to bottom if at start.
    pub fn move_selection_up(&mut self) {
        let len = self.records().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_record(&self) -> Option<&NameRecord> {
        self.records().get(self.selected_index)
    }

    /// Number of requests waiting for a response.
    #[must_use]
    pub fn pending_requests(&self) -> usize {
        self.in_flight.len()
    }

    pub(crate) fn clamp_selection(&mut self) {
        let len = self.records().len();
        self.selected_index = if len == 0 {
            0
        } else {
            self.selected_index.min(len - 1)
        };
    }

    pub(crate) fn allocate_request_id(&mut self) -> RequestId {
        let id = RequestId(self.next_request);
        self.next_request += 1;
        id
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting UI chrome
    /// 2. Center window around selected index
    /// 3. Adjust window if near the end to maximize visible items
    /// 4. Compute relative selection index within visible window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let records = self.records();
        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(records.len());

        let actual_count = visible_end.saturating_sub(visible_start);
        if actual_count < available_rows && records.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items: Vec<DisplayItem> = records
            .get(visible_start..visible_end)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(relative_idx, record)| {
                self.compute_display_item(record, visible_start + relative_idx, cols)
            })
            .collect();

        UIViewModel {
            header: self.compute_header(),
            input: self.compute_input(),
            field_feedback: self.compute_field_feedback(),
            banner: self.compute_banner(),
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            placeholder: self.compute_placeholder(),
            footer: self.compute_footer(),
        }
    }

    fn compute_display_item(&self, record: &NameRecord, absolute_idx: usize, cols: usize) -> DisplayItem {
        let name = crate::ui::helpers::truncate(&record.display_name(), NAME_COLUMN_WIDTH - 2);
        let is_busy = self.feedback.is_busy(Control::Delete(record.id));
        let created_at = if cols > NAME_COLUMN_WIDTH + 30 {
            record.created_at_display().unwrap_or_default()
        } else {
            String::new()
        };

        DisplayItem {
            name,
            created_at,
            delete_label: if is_busy { "Deleting..." } else { "Delete" }.to_string(),
            is_selected: self.focus == Focus::List && absolute_idx == self.selected_index,
            is_busy,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match &self.list {
            ListView::Loaded(records) => format!(" Names ({}) ", records.len()),
            ListView::Loading | ListView::Failed(_) => " Names ".to_string(),
        };
        let status = self
            .feedback
            .is_busy(Control::List)
            .then(|| "Loading...".to_string());
        HeaderInfo { title, status }
    }

    fn compute_input(&self) -> InputInfo {
        let busy = self.feedback.is_busy(Control::Submit);
        InputInfo {
            value: self.input.clone(),
            focused: self.focus == Focus::Input && self.input_mode == InputMode::Normal,
            submit_label: if busy { "Adding..." } else { "Add" }.to_string(),
            busy,
        }
    }

    fn compute_field_feedback(&self) -> Option<FeedbackLine> {
        self.feedback.field().map(|field| match field {
            FieldFeedback::Error(text) => FeedbackLine {
                text: text.clone(),
                tone: Tone::Error,
            },
            FieldFeedback::Notice(text) => FeedbackLine {
                text: text.clone(),
                tone: Tone::Notice,
            },
        })
    }

    fn compute_banner(&self) -> Option<FeedbackLine> {
        self.feedback.banner().map(|banner| FeedbackLine {
            text: banner.message.clone(),
            tone: match banner.kind {
                BannerKind::Success => Tone::Success,
                BannerKind::Error => Tone::Error,
            },
        })
    }

    fn compute_placeholder(&self) -> Option<Placeholder> {
        match &self.list {
            ListView::Loading => Some(Placeholder {
                message: "Loading...".to_string(),
                is_error: false,
            }),
            ListView::Loaded(records) if records.is_empty() => Some(Placeholder {
                message: "No names found".to_string(),
                is_error: false,
            }),
            ListView::Loaded(_) => None,
            ListView::Failed(message) => Some(Placeholder {
                message: format!("Error loading names: {message}"),
                is_error: true,
            }),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        match (&self.input_mode, self.focus) {
            (InputMode::ConfirmDelete(record), _) => FooterInfo {
                keybindings: "y/Enter: confirm  n/Esc: cancel".to_string(),
                prompt: Some(format!("Delete \"{}\"?", record.display_name())),
            },
            (InputMode::Normal, Focus::Input) => FooterInfo {
                keybindings: "Enter: add  Tab/Esc: list  Ctrl+r: refresh".to_string(),
                prompt: None,
            },
            (InputMode::Normal, Focus::List) => FooterInfo {
                keybindings: "j/k: navigate  d: delete  r: refresh  i/Tab: add  q: quit".to_string(),
                prompt: None,
            },
        }
    }
}
