//! Feedback coordinator: banners, field feedback, and busy controls.
//!
//! [`Feedback`] is the single owner of transient UI feedback. There is one
//! banner slot, so a success banner and an error banner can never be visible at
//! the same time; showing either replaces whatever was there. Transient banners
//! carry a fresh [`TimerId::Banner`] generation, which makes the timer of any
//! replaced banner stale.

use super::actions::{Action, TimerId};
use crate::domain::NameId;
use std::collections::BTreeSet;
use std::time::Duration;

/// Default lifetime of a transient success banner.
pub const DEFAULT_SUCCESS_BANNER: Duration = Duration::from_millis(3000);

/// Default lifetime of a transient error banner.
pub const DEFAULT_ERROR_BANNER: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// The visible banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    /// Auto-hide timer; `None` for sticky banners.
    pub timer: Option<TimerId>,
}

/// Feedback attached to the name input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFeedback {
    /// Blocking problem with the input.
    Error(String),
    /// Informational, non-blocking hint.
    Notice(String),
}

/// Triggerable controls that can be marked busy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Control {
    /// The "Add" button next to the input.
    Submit,
    /// The names list container.
    List,
    /// The delete control of one row.
    Delete(NameId),
}

/// Exclusively owned feedback state.
#[derive(Debug, Clone)]
pub struct Feedback {
    banner: Option<Banner>,
    field: Option<FieldFeedback>,
    busy: BTreeSet<Control>,
    generation: u64,
    success_ttl: Duration,
    error_ttl: Duration,
}

impl Default for Feedback {
    fn default() -> Self {
        Self::new(DEFAULT_SUCCESS_BANNER, DEFAULT_ERROR_BANNER)
    }
}

impl Feedback {
    #[must_use]
    pub fn new(success_ttl: Duration, error_ttl: Duration) -> Self {
        Self {
            banner: None,
            field: None,
            busy: BTreeSet::new(),
            generation: 0,
            success_ttl,
            error_ttl,
        }
    }

    #[must_use]
    pub const fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    #[must_use]
    pub const fn field(&self) -> Option<&FieldFeedback> {
        self.field.as_ref()
    }

    /// Shows a success banner, replacing any banner on screen.
    ///
    /// Returns the timer to arm when the banner is transient.
    pub fn show_success(&mut self, message: impl Into<String>, transient: bool) -> Option<Action> {
        self.show(BannerKind::Success, message.into(), transient)
    }

    /// Shows an error banner, replacing any banner on screen.
    ///
    /// Returns the timer to arm when the banner is transient.
    pub fn show_error(&mut self, message: impl Into<String>, transient: bool) -> Option<Action> {
        self.show(BannerKind::Error, message.into(), transient)
    }

    fn show(&mut self, kind: BannerKind, message: String, transient: bool) -> Option<Action> {
        tracing::debug!(?kind, message = %message, transient, "showing banner");

        let schedule = transient.then(|| {
            self.generation += 1;
            let timer = TimerId::Banner(self.generation);
            let after = match kind {
                BannerKind::Success => self.success_ttl,
                BannerKind::Error => self.error_ttl,
            };
            (timer, after)
        });

        self.banner = Some(Banner {
            kind,
            message,
            timer: schedule.map(|(timer, _)| timer),
        });

        schedule.map(|(timer, after)| Action::ScheduleTimer { timer, after })
    }

    pub fn clear_banner(&mut self) {
        self.banner = None;
    }

    /// Handles an elapsed banner timer.
    ///
    /// Returns `true` if the visible banner was hidden; stale timers are
    /// ignored.
    pub fn on_timer(&mut self, timer: TimerId) -> bool {
        let current = self.banner.as_ref().and_then(|b| b.timer);
        if current == Some(timer) {
            self.banner = None;
            true
        } else {
            tracing::trace!(?timer, "ignoring stale banner timer");
            false
        }
    }

    pub fn show_field_error(&mut self, message: impl Into<String>) {
        self.field = Some(FieldFeedback::Error(message.into()));
    }

    /// Shows a non-blocking notice unless a field error is displayed.
    pub fn show_field_notice(&mut self, message: impl Into<String>) {
        if !matches!(self.field, Some(FieldFeedback::Error(_))) {
            self.field = Some(FieldFeedback::Notice(message.into()));
        }
    }

    pub fn clear_field(&mut self) {
        self.field = None;
    }

    pub fn clear_field_error(&mut self) {
        if matches!(self.field, Some(FieldFeedback::Error(_))) {
            self.field = None;
        }
    }

    pub fn clear_field_notice(&mut self) {
        if matches!(self.field, Some(FieldFeedback::Notice(_))) {
            self.field = None;
        }
    }

    pub fn set_busy(&mut self, control: Control, busy: bool) {
        if busy {
            self.busy.insert(control);
        } else {
            self.busy.remove(&control);
        }
    }

    #[must_use]
    pub fn is_busy(&self, control: Control) -> bool {
        self.busy.contains(&control)
    }

    #[must_use]
    pub fn any_busy(&self) -> bool {
        !self.busy.is_empty()
    }
}
