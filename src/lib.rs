//! Names panel: a Zellij plugin for browsing and editing a remote names collection.
//!
//! The panel lists the entries of a single `names` collection served over
//! HTTP, lets the user add new names and delete existing ones, and reports
//! every outcome through one banner region and an inline field message:
//! - Client-side validation before anything reaches the network
//! - A full list refresh after every mutation
//! - Busy controls that ignore activation until their request settles
//! - Per-request deadlines so a silent server never leaves the panel stuck

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - List synchronization (refresh/create/delete)     │
//! │  - Feedback coordination (banners, busy controls)   │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Gateway       │   │ Domain        │
//! │ (ui/)         │   │ (gateway/)    │   │ (domain/)     │
//! │ - Rendering   │   │ - curl argv   │   │ - NameRecord  │
//! │ - Theming     │   │ - Outcomes    │   │ - Validation  │
//! │ - Components  │   │ - Error kinds │   │ - Errors      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure (paths, timers) & Observability     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Name records, validation, errors
//! - [`gateway`]: Requests to the names API and interpretation of their outcomes
//! - [`infrastructure`]: Sandbox paths and host timer correlation
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing with file-based OTLP export
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/names-panel.wasm" {
//!         api_base "http://localhost:8000/api"
//!         max_name_length "50"
//!         request_timeout_secs "10"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use names_panel::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! // The host grants the command permission; the first list request goes out.
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert!(matches!(actions.first(), Some(Action::SendRequest(_))));
//! # Ok::<(), names_panel::NamesPanelError>(())
//! ```

pub mod app;
pub mod domain;
pub mod gateway;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Settings, TimerId};
pub use domain::{NameId, NameRecord, NamesPanelError, Result};
pub use ui::Theme;

use domain::validation::DEFAULT_MAX_NAME_LENGTH;
use std::collections::BTreeMap;
use std::time::Duration;

const DEFAULT_API_BASE: &str = "http://localhost:8000/api";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SUCCESS_BANNER_MS: u64 = 3000;
const DEFAULT_ERROR_BANNER_MS: u64 = 5000;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/names-panel.wasm" {
///     api_base "http://names.internal:8000/api"
///     success_banner_ms "2000"
///     theme_file "~/.config/names-panel/theme.toml"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the names API, without a trailing slash.
    pub api_base: String,

    /// Longest accepted name, in characters after trimming.
    pub max_name_length: usize,

    /// Deadline for a single request.
    pub request_timeout_secs: u64,

    /// How long success banners stay visible.
    pub success_banner_ms: u64,

    /// How long transient error banners stay visible.
    pub error_banner_ms: u64,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            success_banner_ms: DEFAULT_SUCCESS_BANNER_MS,
            error_banner_ms: DEFAULT_ERROR_BANNER_MS,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `api_base`: trailing slashes removed; blank falls back to the default
    /// - numeric keys: positive integers; anything else falls back to the default
    /// - `theme`, `theme_file`, `trace_level`: taken as given
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use names_panel::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_base".to_string(), "http://example.test/api/".to_string());
    /// map.insert("max_name_length".to_string(), "20".to_string());
    /// map.insert("request_timeout_secs".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_base, "http://example.test/api");
    /// assert_eq!(config.max_name_length, 20);
    /// assert_eq!(config.request_timeout_secs, 10);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let api_base = config
            .get("api_base")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            api_base,
            max_name_length: positive(config, "max_name_length")
                .map_or(DEFAULT_MAX_NAME_LENGTH, |n| {
                    usize::try_from(n).unwrap_or(DEFAULT_MAX_NAME_LENGTH)
                }),
            request_timeout_secs: positive(config, "request_timeout_secs")
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            success_banner_ms: positive(config, "success_banner_ms")
                .unwrap_or(DEFAULT_SUCCESS_BANNER_MS),
            error_banner_ms: positive(config, "error_banner_ms")
                .unwrap_or(DEFAULT_ERROR_BANNER_MS),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Runtime settings derived from this configuration.
    #[must_use]
    pub const fn settings(&self) -> Settings {
        Settings {
            max_name_length: self.max_name_length,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            success_banner: Duration::from_millis(self.success_banner_ms),
            error_banner: Duration::from_millis(self.error_banner_ms),
        }
    }
}

fn positive(config: &BTreeMap<String, String>, key: &str) -> Option<u64> {
    let value = config.get(key)?;
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            tracing::debug!(key, value = %value, "ignoring invalid numeric setting");
            None
        }
    }
}

/// Initializes the plugin state from configuration.
///
/// The theme comes from `theme_file` if it loads, then `theme`, then the
/// default. The list starts in its loading state; nothing is requested until
/// the host grants the command permission.
///
/// # Example
///
/// ```rust
/// use names_panel::{initialize, Config};
///
/// let config = Config {
///     theme_name: Some("catppuccin-latte".to_string()),
///     max_name_length: 20,
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.theme.name, "catppuccin-latte");
/// assert_eq!(state.settings.max_name_length, 20);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_base = %config.api_base, "initializing names panel");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config.settings(), theme)
}
