//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never performs I/O. It returns a `Vec<Action>` and the
//! Zellij shim carries each one out: running the `curl` command for a request,
//! arming a host timer, or hiding the plugin pane.
//!
//! # Example
//!
//! ```
//! use names_panel::app::{Action, TimerId};
//! use names_panel::gateway::{ApiRequest, RequestId};
//! use std::time::Duration;
//!
//! let id = RequestId(0);
//! let actions = vec![
//!     Action::SendRequest(ApiRequest::list(id)),
//!     Action::ScheduleTimer { timer: TimerId::Deadline(id), after: Duration::from_secs(10) },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::gateway::{ApiRequest, RequestId};
use std::time::Duration;

/// Token identifying a scheduled timer.
///
/// Timers cannot be cancelled on the host, so cancellation is done by
/// ignoring stale tokens: a banner timer only counts if it still belongs to
/// the visible banner, a deadline only counts if its request is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    /// Auto-hide timer for the banner of the given generation.
    Banner(u64),
    /// Deadline of an in-flight request.
    Deadline(RequestId),
}

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    Close,

    /// Executes a request against the remote API.
    ///
    /// The runtime must answer with `Event::ResponseReceived` carrying the
    /// same request id.
    SendRequest(ApiRequest),

    /// Arms a one-shot timer.
    ///
    /// The runtime must answer with `Event::TimerElapsed(timer)` once `after`
    /// has passed.
    ScheduleTimer {
        timer: TimerId,
        after: Duration,
    },
}
