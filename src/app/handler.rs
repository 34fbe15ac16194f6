//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! command results, and timers, translating them into state changes and action
//! sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Input**: `Char`, `Backspace`, `Submit`
//! - **Navigation**: `KeyDown`, `KeyUp`, `FocusInput`, `FocusList`, `ToggleFocus`
//! - **List**: `Refresh`, `RequestDelete`, `ConfirmDelete`, `CancelDelete`
//! - **System**: `PermissionsResult`, `ResponseReceived`, `TimerElapsed`
//!
//! # Example
//!
//! ```rust
//! use names_panel::app::{handle_event, Action, AppState, Event, Settings};
//! use names_panel::ui::theme::Theme;
//!
//! let mut state = AppState::new(Settings::default(), Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert!(matches!(actions[0], Action::SendRequest(_)));
//! # Ok::<(), names_panel::NamesPanelError>(())
//! ```

use super::actions::{Action, TimerId};
use super::modes::{Focus, InputMode};
use super::state::AppState;
use super::sync::RefreshReason;
use crate::domain::error::Result;
use crate::domain::validation::keystroke_notice;
use crate::gateway::{interpret, HttpOutcome, RequestId};

/// Events triggered by user input, command results, or timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the name input.
    Char(char),
    /// Removes the last character from the name input.
    Backspace,
    /// Validates the input and creates the name.
    Submit,

    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    FocusInput,
    FocusList,
    ToggleFocus,

    /// Re-fetches the collection.
    Refresh,
    /// Asks for confirmation to delete the selected record.
    RequestDelete,
    ConfirmDelete,
    CancelDelete,

    /// Hides the plugin pane.
    Close,

    /// Reports whether the `RunCommands` permission was granted.
    ///
    /// The initial refresh starts once it is.
    PermissionsResult { granted: bool },

    /// Result of a request previously emitted as `Action::SendRequest`.
    ResponseReceived {
        request: RequestId,
        outcome: HttpOutcome,
    },

    /// A timer previously armed with `Action::ScheduleTimer` elapsed.
    TimerElapsed(TimerId),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI needs to be re-rendered together with the actions
/// to execute in sequence.
///
/// # Errors
///
/// Returns an encoding error if a request body cannot be serialized.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if matches!(state.input_mode, InputMode::ConfirmDelete(_)) && is_user_input(event) {
        return Ok(match event {
            Event::ConfirmDelete => state.confirm_delete(true),
            Event::CancelDelete => state.confirm_delete(false),
            _ => (false, vec![]),
        });
    }

    match event {
        Event::Char(c) => {
            if state.focus != Focus::Input {
                return Ok((false, vec![]));
            }
            state.input.push(*c);
            tracing::trace!(len = state.input.chars().count(), "input updated");
            on_input_changed(state);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.focus != Focus::Input || state.input.pop().is_none() {
                return Ok((false, vec![]));
            }
            on_input_changed(state);
            Ok((true, vec![]))
        }
        Event::Submit => {
            if state.focus != Focus::Input {
                return Ok((false, vec![]));
            }
            state.submit()
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::FocusInput => {
            state.focus = Focus::Input;
            Ok((true, vec![]))
        }
        Event::FocusList => {
            state.focus = Focus::List;
            Ok((true, vec![]))
        }
        Event::ToggleFocus => {
            state.focus = match state.focus {
                Focus::Input => Focus::List,
                Focus::List => Focus::Input,
            };
            Ok((true, vec![]))
        }
        Event::Refresh => {
            let actions = state.refresh(RefreshReason::User);
            Ok((!actions.is_empty(), actions))
        }
        Event::RequestDelete => Ok((state.request_delete(), vec![])),
        Event::ConfirmDelete | Event::CancelDelete => Ok((false, vec![])),
        Event::Close => Ok((false, vec![Action::Close])),
        Event::PermissionsResult { granted: true } => {
            tracing::debug!("permissions granted, loading names");
            Ok((true, state.refresh(RefreshReason::Initial)))
        }
        Event::PermissionsResult { granted: false } => {
            tracing::warn!("run commands permission denied");
            state.list = super::state::ListView::Failed("Permission denied".to_string());
            state.feedback.show_error(
                "Permission to run commands was denied; the names server cannot be reached",
                false,
            );
            Ok((true, vec![]))
        }
        Event::ResponseReceived { request, outcome } => {
            let result = interpret(outcome.clone());
            Ok(state
                .complete(*request, result)
                .map_or((false, vec![]), |actions| (true, actions)))
        }
        Event::TimerElapsed(TimerId::Deadline(request)) => Ok(state
            .expire(*request)
            .map_or((false, vec![]), |actions| (true, actions))),
        Event::TimerElapsed(timer @ TimerId::Banner(_)) => {
            Ok((state.feedback.on_timer(*timer), vec![]))
        }
    }
}

/// Whether the event comes from a key press.
const fn is_user_input(event: &Event) -> bool {
    !matches!(
        event,
        Event::PermissionsResult { .. } | Event::ResponseReceived { .. } | Event::TimerElapsed(_)
    )
}

/// Keystroke feedback: clears a stale field error and warns near the limit.
fn on_input_changed(state: &mut AppState) {
    if !state.input.trim().is_empty() {
        state.feedback.clear_field_error();
    }
    match keystroke_notice(&state.input, state.settings.max_name_length) {
        Some(notice) => state.feedback.show_field_notice(notice),
        None => state.feedback.clear_field_notice(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::feedback::{BannerKind, Control, FieldFeedback};
    use crate::app::state::{ListView, Settings};
    use crate::domain::{NameId, NameRecord};
    use crate::gateway::{ApiRequest, HttpMethod};
    use crate::ui::theme::Theme;
    use std::collections::VecDeque;

    /// In-memory stand-in for the names API.
    struct FakeServer {
        names: Vec<NameRecord>,
        next_id: u64,
        max_len: usize,
        /// When set, every request fails at the transport.
        offline: bool,
        /// Canned answer for the next request only.
        next_outcome: Option<HttpOutcome>,
    }

    impl FakeServer {
        fn new() -> Self {
            Self {
                names: vec![],
                next_id: 1,
                max_len: 50,
                offline: false,
                next_outcome: None,
            }
        }

        fn with_names(names: &[&str]) -> Self {
            let mut server = Self::new();
            for name in names {
                server.insert(name);
            }
            server
        }

        fn insert(&mut self, name: &str) -> NameId {
            let id = NameId(self.next_id);
            self.next_id += 1;
            self.names.push(NameRecord {
                id,
                name: name.to_string(),
                created_at: Some("2024-01-02T03:04:05".to_string()),
            });
            id
        }

        fn answer(&mut self, request: &ApiRequest) -> HttpOutcome {
            if let Some(outcome) = self.next_outcome.take() {
                return outcome;
            }
            if self.offline {
                return HttpOutcome::Unreachable {
                    detail: "curl: (7) Failed to connect".to_string(),
                };
            }

            match (request.method, request.path.as_str()) {
                (HttpMethod::Get, "/names") => json(
                    200,
                    &serde_json::json!({ "names": self.names }).to_string(),
                ),
                (HttpMethod::Post, "/names") => {
                    let body: serde_json::Value =
                        serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
                    let name = body["name"].as_str().unwrap().trim().to_string();
                    if name.is_empty() {
                        json(400, r#"{"error": "Name cannot be empty"}"#)
                    } else if name.chars().count() > self.max_len {
                        json(400, r#"{"error": "Name too long"}"#)
                    } else if self.names.iter().any(|n| n.name == name) {
                        json(400, r#"{"error": "Name already exists"}"#)
                    } else {
                        let id = self.insert(&name);
                        json(201, &format!(r#"{{"id": {id}, "name": "{name}"}}"#))
                    }
                }
                (HttpMethod::Delete, path) => {
                    let id: u64 = path.trim_start_matches("/names/").parse().unwrap();
                    let before = self.names.len();
                    self.names.retain(|n| n.id != NameId(id));
                    if self.names.len() == before {
                        json(404, r#"{"error": "Name not found"}"#)
                    } else {
                        json(200, r#"{"message": "deleted"}"#)
                    }
                }
                other => panic!("unexpected request {other:?}"),
            }
        }
    }

    fn json(status: u16, body: &str) -> HttpOutcome {
        HttpOutcome::Response {
            status,
            body: body.to_string(),
        }
    }

    /// Drives the state machine the way the plugin runtime does, answering
    /// requests from the fake server. Timers are collected but never fire on
    /// their own.
    struct Harness {
        state: AppState,
        server: FakeServer,
        requests: VecDeque<ApiRequest>,
        timers: Vec<TimerId>,
        sent: Vec<ApiRequest>,
    }

    impl Harness {
        fn new(server: FakeServer) -> Self {
            Self {
                state: AppState::new(Settings::default(), Theme::default()),
                server,
                requests: VecDeque::new(),
                timers: vec![],
                sent: vec![],
            }
        }

        /// Starts the panel and lets the initial load complete.
        fn started(server: FakeServer) -> Self {
            let mut harness = Self::new(server);
            harness.send(&Event::PermissionsResult { granted: true });
            harness.settle();
            harness
        }

        fn send(&mut self, event: &Event) -> bool {
            let (render, actions) = handle_event(&mut self.state, event).unwrap();
            for action in actions {
                match action {
                    Action::SendRequest(request) => {
                        self.sent.push(request.clone());
                        self.requests.push_back(request);
                    }
                    Action::ScheduleTimer { timer, .. } => self.timers.push(timer),
                    Action::Close => {}
                }
            }
            self.assert_invariants();
            render
        }

        fn type_text(&mut self, text: &str) {
            for c in text.chars() {
                self.send(&Event::Char(c));
            }
        }

        /// Answers the oldest pending request.
        fn respond_next(&mut self) {
            let request = self.requests.pop_front().unwrap();
            let outcome = self.server.answer(&request);
            self.send(&Event::ResponseReceived {
                request: request.id,
                outcome,
            });
        }

        /// Answers requests until none are pending.
        fn settle(&mut self) {
            while !self.requests.is_empty() {
                self.respond_next();
            }
        }

        fn fire_banner_timer(&mut self) {
            let timer = self
                .state
                .feedback
                .banner()
                .and_then(|b| b.timer)
                .unwrap();
            self.send(&Event::TimerElapsed(timer));
        }

        fn banner(&self) -> Option<(BannerKind, String)> {
            self.state
                .feedback
                .banner()
                .map(|b| (b.kind, b.message.clone()))
        }

        fn names(&self) -> Vec<String> {
            self.state.records().iter().map(|r| r.name.clone()).collect()
        }

        fn assert_invariants(&self) {
            if self.state.pending_requests() == 0 {
                assert!(
                    !self.state.feedback.any_busy(),
                    "busy control left with no request in flight"
                );
            }
        }
    }

    #[test]
    fn initial_load_reports_count() {
        let harness = Harness::started(FakeServer::with_names(&["Alice", "Bob"]));
        assert_eq!(harness.names(), vec!["Alice", "Bob"]);
        assert_eq!(
            harness.banner(),
            Some((BannerKind::Success, "Found 2 names".to_string()))
        );

        let harness = Harness::started(FakeServer::with_names(&["Alice"]));
        assert_eq!(harness.banner().unwrap().1, "Found 1 name");
    }

    #[test]
    fn empty_collection_shows_placeholder_without_count() {
        let harness = Harness::started(FakeServer::new());
        let vm = harness.state.compute_viewmodel(24, 80);

        assert_eq!(vm.placeholder.unwrap().message, "No names found");
        assert!(harness.banner().is_none());
    }

    #[test]
    fn list_is_loading_until_first_response() {
        let mut harness = Harness::new(FakeServer::new());
        harness.send(&Event::PermissionsResult { granted: true });

        assert_eq!(harness.state.list, ListView::Loading);
        assert!(harness.state.feedback.is_busy(Control::List));
        harness.settle();
        assert!(!harness.state.feedback.is_busy(Control::List));
    }

    #[test]
    fn adding_alice_to_empty_list() {
        let mut harness = Harness::started(FakeServer::new());
        harness.type_text("Alice");
        harness.send(&Event::Submit);

        assert!(harness.state.feedback.is_busy(Control::Submit));
        harness.settle();

        assert_eq!(harness.names(), vec!["Alice"]);
        assert_eq!(
            harness.banner(),
            Some((BannerKind::Success, "Successfully added \"Alice\"".to_string()))
        );
        assert!(harness.state.input.is_empty());
        assert!(harness.state.feedback.field().is_none());
    }

    #[test]
    fn created_record_appears_exactly_once() {
        let mut harness = Harness::started(FakeServer::with_names(&["Bob"]));
        harness.type_text("Carol");
        harness.send(&Event::Submit);
        harness.settle();

        let count = harness.names().iter().filter(|n| *n == "Carol").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn duplicate_name_shows_field_error_and_banner() {
        let mut harness = Harness::started(FakeServer::with_names(&["Alice"]));
        let sent_before = harness.sent.len();
        harness.type_text("Alice");
        harness.send(&Event::Submit);
        harness.settle();

        assert_eq!(
            harness.state.feedback.field(),
            Some(&FieldFeedback::Error("This name already exists".to_string()))
        );
        let (kind, message) = harness.banner().unwrap();
        assert_eq!(kind, BannerKind::Error);
        assert!(message.contains("already exists"));
        assert_eq!(harness.names(), vec!["Alice"]);
        assert_eq!(harness.sent.len(), sent_before + 1, "no refresh after a failed create");
    }

    #[test]
    fn too_long_name_never_reaches_server() {
        let mut harness = Harness::started(FakeServer::new());
        let sent_before = harness.sent.len();
        harness.type_text(&"x".repeat(51));
        harness.send(&Event::Submit);

        assert_eq!(harness.sent.len(), sent_before);
        assert_eq!(
            harness.state.feedback.field(),
            Some(&FieldFeedback::Error("Name cannot exceed 50 characters".to_string()))
        );
    }

    #[test]
    fn blank_name_never_reaches_server() {
        let mut harness = Harness::started(FakeServer::new());
        let sent_before = harness.sent.len();
        harness.type_text("   ");
        harness.send(&Event::Submit);

        assert_eq!(harness.sent.len(), sent_before);
        assert_eq!(
            harness.state.feedback.field(),
            Some(&FieldFeedback::Error("Name cannot be empty".to_string()))
        );

        harness.type_text("A");
        assert!(harness.state.feedback.field().is_none());
    }

    #[test]
    fn surrounding_spaces_are_trimmed_with_notice() {
        let mut harness = Harness::started(FakeServer::new());
        harness.type_text("  Dana ");
        harness.send(&Event::Submit);

        assert_eq!(harness.state.input, "Dana");
        assert_eq!(
            harness.state.feedback.field(),
            Some(&FieldFeedback::Notice(
                "Leading and trailing spaces were removed".to_string()
            ))
        );
        assert_eq!(
            harness.requests.back().unwrap().body.as_deref(),
            Some(r#"{"name":"Dana"}"#)
        );

        harness.settle();
        assert_eq!(harness.names(), vec!["Dana"]);
    }

    #[test]
    fn keystrokes_near_limit_show_remaining_count() {
        let mut harness = Harness::started(FakeServer::new());
        harness.type_text(&"a".repeat(47));
        assert_eq!(
            harness.state.feedback.field(),
            Some(&FieldFeedback::Notice("3 characters remaining".to_string()))
        );
        harness.send(&Event::Backspace);
        harness.send(&Event::Backspace);
        assert!(harness.state.feedback.field().is_none());
    }

    #[test]
    fn submit_is_ignored_while_busy() {
        let mut harness = Harness::started(FakeServer::new());
        harness.type_text("Eve");
        harness.send(&Event::Submit);
        let sent = harness.sent.len();
        harness.send(&Event::Submit);
        assert_eq!(harness.sent.len(), sent);
        harness.settle();
    }

    fn select(harness: &mut Harness, name: &str) {
        harness.send(&Event::FocusList);
        let index = harness.names().iter().position(|n| n == name).unwrap();
        harness.state.selected_index = index;
    }

    #[test]
    fn deleting_requires_confirmation() {
        let mut harness = Harness::started(FakeServer::with_names(&["Alice", "Bob"]));
        select(&mut harness, "Bob");
        let sent = harness.sent.len();

        harness.send(&Event::RequestDelete);
        assert!(matches!(harness.state.input_mode, InputMode::ConfirmDelete(ref r) if r.name == "Bob"));
        harness.send(&Event::KeyDown);
        harness.send(&Event::CancelDelete);

        assert_eq!(harness.state.input_mode, InputMode::Normal);
        assert_eq!(harness.sent.len(), sent);
        assert_eq!(harness.names(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn deleting_alice_leaves_bob() {
        let mut harness = Harness::started(FakeServer::with_names(&["Alice", "Bob"]));
        let alice = harness.state.records()[0].id;
        select(&mut harness, "Alice");

        harness.send(&Event::RequestDelete);
        harness.send(&Event::ConfirmDelete);
        assert!(harness.state.feedback.is_busy(Control::Delete(alice)));
        harness.settle();

        assert_eq!(harness.names(), vec!["Bob"]);
        assert!(harness.state.records().iter().all(|r| r.id != alice));
        assert_eq!(
            harness.banner(),
            Some((BannerKind::Success, "Successfully deleted \"Alice\"".to_string()))
        );
    }

    #[test]
    fn deleting_missing_record_reports_not_found_and_refreshes() {
        let mut harness = Harness::started(FakeServer::with_names(&["Alice", "Bob"]));
        select(&mut harness, "Alice");
        harness.server.names.retain(|n| n.name != "Alice");

        harness.send(&Event::RequestDelete);
        harness.send(&Event::ConfirmDelete);
        harness.settle();

        let (kind, message) = harness.banner().unwrap();
        assert_eq!(kind, BannerKind::Error);
        assert!(message.contains("not found"));
        assert_eq!(harness.sent.last().unwrap().method, HttpMethod::Get);
        assert_eq!(harness.names(), vec!["Bob"]);
    }

    /// Submits `name` and returns the create failure as field text and banner.
    fn rejected_create(harness: &mut Harness, name: &str) -> (Option<FieldFeedback>, String) {
        harness.type_text(name);
        harness.send(&Event::Submit);
        harness.settle();

        assert_eq!(harness.sent.last().unwrap().method, HttpMethod::Post);
        assert!(!harness.state.feedback.is_busy(Control::Submit));
        let (kind, message) = harness.banner().unwrap();
        assert_eq!(kind, BannerKind::Error);
        (harness.state.feedback.field().cloned(), message)
    }

    #[test]
    fn server_length_rejection_maps_to_too_long() {
        let mut server = FakeServer::new();
        server.max_len = 3;
        let mut harness = Harness::started(server);

        let (field, banner) = rejected_create(&mut harness, "Alice");

        assert_eq!(
            field,
            Some(FieldFeedback::Error("Name cannot exceed 50 characters".to_string()))
        );
        assert_eq!(banner, "Failed to add name: Name cannot exceed 50 characters");
        assert!(harness.names().is_empty());
        assert_eq!(harness.state.input, "Alice");
    }

    #[test]
    fn structured_empty_code_maps_to_empty() {
        let mut harness = Harness::started(FakeServer::new());
        harness.server.next_outcome = Some(json(
            400,
            r#"{"error": "Invalid name", "code": "empty"}"#,
        ));

        let (field, banner) = rejected_create(&mut harness, "Alice");

        assert_eq!(field, Some(FieldFeedback::Error("Name cannot be empty".to_string())));
        assert_eq!(banner, "Failed to add name: Name cannot be empty");
    }

    #[test]
    fn unexpected_create_failure_keeps_server_text() {
        let mut harness = Harness::started(FakeServer::new());
        harness.server.next_outcome = Some(json(500, r#"{"error": "Database is locked"}"#));

        let (field, banner) = rejected_create(&mut harness, "Alice");

        assert_eq!(field, Some(FieldFeedback::Error("Database is locked".to_string())));
        assert_eq!(banner, "Failed to add name: Database is locked");
    }

    #[test]
    fn failed_delete_still_refreshes() {
        let mut harness = Harness::started(FakeServer::with_names(&["Alice", "Bob"]));
        select(&mut harness, "Alice");

        harness.send(&Event::RequestDelete);
        harness.send(&Event::ConfirmDelete);
        harness.server.offline = true;
        harness.respond_next();
        harness.server.offline = false;

        assert_eq!(harness.sent.last().unwrap().method, HttpMethod::Get);
        assert_eq!(
            harness.banner(),
            Some((
                BannerKind::Error,
                "Failed to delete \"Alice\": Unable to connect to server".to_string()
            ))
        );

        harness.settle();
        assert_eq!(harness.names(), vec!["Alice", "Bob"]);
        assert!(harness.banner().unwrap().1.starts_with("Failed to delete"));
        assert!(!harness.state.feedback.any_busy());
    }

    #[test]
    fn server_error_on_delete_still_refreshes() {
        let mut harness = Harness::started(FakeServer::with_names(&["Alice"]));
        select(&mut harness, "Alice");
        harness.server.next_outcome = Some(json(500, r#"{"error": "Internal error"}"#));

        harness.send(&Event::RequestDelete);
        harness.send(&Event::ConfirmDelete);
        harness.settle();

        assert_eq!(harness.sent.last().unwrap().method, HttpMethod::Get);
        assert_eq!(
            harness.banner().unwrap().1,
            "Failed to delete \"Alice\": Internal error"
        );
        assert_eq!(harness.names(), vec!["Alice"]);
        assert!(!harness.state.feedback.any_busy());
    }

    #[test]
    fn padded_too_long_input_is_trimmed_before_rejection() {
        let mut harness = Harness::started(FakeServer::new());
        let sent_before = harness.sent.len();
        let long = "x".repeat(51);
        harness.type_text(&format!(" {long} "));
        harness.send(&Event::Submit);

        assert_eq!(harness.sent.len(), sent_before);
        assert_eq!(harness.state.input, long);
        assert_eq!(
            harness.state.feedback.field(),
            Some(&FieldFeedback::Error("Name cannot exceed 50 characters".to_string()))
        );
    }

    #[test]
    fn unreachable_server_shows_load_failure() {
        let mut server = FakeServer::new();
        server.offline = true;
        let harness = Harness::started(server);

        assert_eq!(
            harness.banner(),
            Some((
                BannerKind::Error,
                "Failed to load names: Unable to connect to server".to_string()
            ))
        );
        let vm = harness.state.compute_viewmodel(24, 80);
        assert!(vm.placeholder.unwrap().is_error);
    }

    #[test]
    fn malformed_payload_is_reported() {
        let mut harness = Harness::new(FakeServer::new());
        harness.send(&Event::PermissionsResult { granted: true });
        let request = harness.requests.pop_front().unwrap();
        harness.send(&Event::ResponseReceived {
            request: request.id,
            outcome: json(200, "<html>"),
        });

        assert_eq!(
            harness.banner().unwrap().1,
            "Failed to load names: Unexpected response from server"
        );
    }

    #[test]
    fn deadline_fails_flow_and_ignores_late_response() {
        let mut harness = Harness::started(FakeServer::new());
        harness.type_text("Frank");
        harness.send(&Event::Submit);

        let request = harness.requests.pop_front().unwrap();
        harness.send(&Event::TimerElapsed(TimerId::Deadline(request.id)));

        assert!(!harness.state.feedback.is_busy(Control::Submit));
        assert_eq!(
            harness.banner(),
            Some((BannerKind::Error, "Failed to add name: Request timed out".to_string()))
        );

        let outcome = harness.server.answer(&request);
        let render = harness.send(&Event::ResponseReceived {
            request: request.id,
            outcome,
        });
        assert!(!render);
        assert!(harness.requests.is_empty(), "late response must not trigger a refresh");
    }

    #[test]
    fn deadline_after_response_is_ignored() {
        let mut harness = Harness::started(FakeServer::with_names(&["Alice"]));
        let last_request = harness.sent.last().unwrap().id;
        let render = harness.send(&Event::TimerElapsed(TimerId::Deadline(last_request)));
        assert!(!render);
        assert_eq!(harness.banner().unwrap().1, "Found 1 name");
    }

    #[test]
    fn stale_refresh_result_is_discarded() {
        let mut harness = Harness::started(FakeServer::with_names(&["Alice"]));
        harness.send(&Event::FocusList);

        // A delete and its reconciliation refresh overlap with a user refresh
        // issued earlier; the older refresh answers last.
        harness.send(&Event::Refresh);
        let old_refresh = harness.requests.pop_front().unwrap();
        let old_outcome = harness.server.answer(&old_refresh);

        harness.send(&Event::RequestDelete);
        harness.send(&Event::ConfirmDelete);
        harness.settle();
        assert!(harness.names().is_empty());
        assert!(harness.state.feedback.is_busy(Control::List));

        harness.send(&Event::ResponseReceived {
            request: old_refresh.id,
            outcome: old_outcome,
        });
        assert!(harness.names().is_empty());
        assert!(!harness.state.feedback.is_busy(Control::List));
    }

    #[test]
    fn user_refresh_is_ignored_while_loading() {
        let mut harness = Harness::new(FakeServer::new());
        harness.send(&Event::PermissionsResult { granted: true });
        let sent = harness.sent.len();
        harness.send(&Event::Refresh);
        assert_eq!(harness.sent.len(), sent);
        harness.settle();
    }

    #[test]
    fn banner_expires_only_by_its_own_timer() {
        let mut harness = Harness::started(FakeServer::with_names(&["Alice"]));
        let stale = harness.state.feedback.banner().and_then(|b| b.timer).unwrap();

        harness.type_text("Alice");
        harness.send(&Event::Submit);
        harness.settle();
        assert!(harness.timers.contains(&stale));

        harness.send(&Event::TimerElapsed(stale));
        assert!(harness.banner().is_some());

        harness.fire_banner_timer();
        assert!(harness.banner().is_none());
    }

    #[test]
    fn user_refresh_clears_banner() {
        let mut harness = Harness::started(FakeServer::with_names(&["Alice"]));
        harness.state.feedback.show_error("old", true);
        harness.send(&Event::Refresh);
        assert!(harness.banner().is_none());
        harness.settle();
        assert_eq!(harness.banner().unwrap().1, "Found 1 name");
    }

    #[test]
    fn denied_permission_shows_sticky_error() {
        let mut harness = Harness::new(FakeServer::new());
        harness.send(&Event::PermissionsResult { granted: false });

        assert!(harness.sent.is_empty());
        let banner = harness.state.feedback.banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert!(banner.timer.is_none());
    }

    #[test]
    fn list_keys_do_not_edit_input() {
        let mut harness = Harness::started(FakeServer::with_names(&["Alice"]));
        harness.send(&Event::FocusList);
        assert!(!harness.send(&Event::Char('x')));
        assert!(!harness.send(&Event::Submit));
        assert!(harness.state.input.is_empty());
    }

    #[test]
    fn close_emits_close_action() {
        let mut state = AppState::new(Settings::default(), Theme::default());
        let (render, actions) = handle_event(&mut state, &Event::Close).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::Close]);
    }
}
