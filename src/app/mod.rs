//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the domain/gateway layers. It implements the
//! event-driven architecture that powers the panel.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └─── Command Results / Timers ─────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`feedback`]: Banners, field feedback, and busy controls
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Focus and input mode types
//! - [`state`]: Central application state container and view model computation
//! - [`sync`]: Refresh, create, and delete flows against the remote collection
//!
//! # Example
//!
//! ```rust
//! use names_panel::app::{handle_event, AppState, Event, Settings};
//! use names_panel::ui::theme::Theme;
//!
//! let mut state = AppState::new(Settings::default(), Theme::default());
//! let (render, _) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(render);
//! # Ok::<(), names_panel::NamesPanelError>(())
//! ```

pub mod actions;
pub mod feedback;
pub mod handler;
pub mod modes;
pub mod state;
pub mod sync;

pub use actions::{Action, TimerId};
pub use feedback::{Banner, BannerKind, Control, Feedback, FieldFeedback};
pub use handler::{handle_event, Event};
pub use modes::{Focus, InputMode};
pub use state::{AppState, ListView, Settings};
pub use sync::{Flow, RefreshReason};
