//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the names panel library and the Zellij
//! plugin system. Zellij events become library [`Event`]s; library
//! [`Action`]s become Zellij API calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `RunCommandResult`, `Timer` and permission events
//! 3. **Initial Refresh**: Starts once `RunCommands` is granted
//! 4. **Update**: Handle events, delegate to library layer, execute actions
//! 5. **Render**: Call library render function
//!
//! # Host Effects
//!
//! - `Action::SendRequest` → `run_command(curl ...)` with the request id in
//!   the command context, so the `RunCommandResult` can be matched back
//! - `Action::ScheduleTimer` → `set_timeout`, correlated through [`TimerQueue`]
//! - `Action::Close` → `hide_self`
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+r`: Refresh the list
//! - `Tab`: Switch focus between the input and the list
//!
//! Input focused:
//! - Printable keys: Type
//! - `Enter`: Add the name
//! - `Backspace`: Delete the last character
//! - `Esc`/`Down`: Focus the list
//!
//! List focused:
//! - `j`/`Down`, `k`/`Up`: Move the selection
//! - `d`/`Delete`: Delete the selected name (asks for confirmation)
//! - `r`: Refresh
//! - `i`: Focus the input
//! - `q`: Close the plugin
//!
//! Confirming a delete:
//! - `y`/`Enter`: Confirm
//! - `n`/`Esc`: Cancel

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use names_panel::app::{Focus, InputMode};
use names_panel::gateway::{curl_command, HttpOutcome, RequestId};
use names_panel::infrastructure::TimerQueue;
use names_panel::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Context key carrying the request id through `run_command`.
const REQUEST_ID_KEY: &str = "request_id";

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the host-side pieces the library does
/// not see: where requests go and which timers are armed.
struct State {
    app: names_panel::AppState,

    /// Base URL of the names API.
    api_base: String,

    timers: TimerQueue,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: names_panel::initialize(&default_config),
            api_base: default_config.api_base,
            timers: TimerQueue::default(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Requests `RunCommands`, which is needed to reach the names API through
    /// `curl`. Nothing is fetched until the permission result arrives.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        names_panel::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(api_base = %config.api_base, "parsed configuration");
        self.app = names_panel::initialize(&config);
        self.api_base.clone_from(&config.api_base);

        request_permission(&[PermissionType::RunCommands]);
        subscribe(&[
            EventType::Key,
            EventType::RunCommandResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a Zellij event, delegates to `handle_event`, and executes
    /// the resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::RunCommandResult(exit_code, stdout, stderr, context) => {
                match Self::map_command_result_event(exit_code, &stdout, &stderr, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(elapsed) => match self.timers.fire(elapsed) {
                Some(timer) => Event::TimerElapsed(timer),
                None => {
                    tracing::debug!(elapsed, "timer with no armed token");
                    return false;
                }
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                let granted = matches!(status, PermissionStatus::Granted);
                if !granted {
                    tracing::warn!("RunCommands permission denied");
                }
                Event::PermissionsResult { granted }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        names_panel::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if let InputMode::ConfirmDelete(_) = self.app.input_mode {
            return match key.bare_key {
                BareKey::Char('y') | BareKey::Enter => Some(Event::ConfirmDelete),
                BareKey::Char('n') | BareKey::Esc => Some(Event::CancelDelete),
                _ => None,
            };
        }

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('r') => Some(Event::Refresh),
                _ => None,
            };
        }
        if key.bare_key == BareKey::Tab {
            return Some(Event::ToggleFocus);
        }

        match self.app.focus {
            Focus::Input => Some(match key.bare_key {
                BareKey::Enter => Event::Submit,
                BareKey::Backspace => Event::Backspace,
                BareKey::Esc | BareKey::Down => Event::FocusList,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            Focus::List => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Delete | BareKey::Char('d') => Event::RequestDelete,
                BareKey::Char('r') => Event::Refresh,
                BareKey::Char('i') => Event::FocusInput,
                BareKey::Char('q') => Event::Close,
                _ => return None,
            }),
        }
    }

    /// Maps a finished `curl` run back to the request that started it.
    fn map_command_result_event(
        exit_code: Option<i32>,
        stdout: &[u8],
        stderr: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(request) = context
            .get(REQUEST_ID_KEY)
            .and_then(|id| id.parse::<u64>().ok())
            .map(RequestId)
        else {
            tracing::debug!(exit_code = ?exit_code, "command result without request id");
            return None;
        };

        tracing::debug!(request = %request, exit_code = ?exit_code, "command result");
        Some(Event::ResponseReceived {
            request,
            outcome: HttpOutcome::from_curl(exit_code, stdout, stderr),
        })
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::SendRequest(request) => {
                let argv = curl_command(&self.api_base, request, self.app.settings.request_timeout);
                let argv: Vec<&str> = argv.iter().map(String::as_str).collect();

                let mut context = BTreeMap::new();
                context.insert(REQUEST_ID_KEY.to_string(), request.id.to_string());
                run_command(&argv, context);
            }
            Action::ScheduleTimer { timer, after } => {
                set_timeout(self.timers.arm(*timer, *after));
            }
            Action::Close => {
                hide_self();
            }
        }
    }
}
