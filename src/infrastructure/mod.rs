//! Infrastructure layer for sandbox and host runtime interactions.
//!
//! - [`paths`]: locations inside the Zellij plugin sandbox, where the host
//!   filesystem is mounted under `/host`
//! - [`timers`]: correlation of Zellij timer events with armed timer tokens

pub mod paths;
pub mod timers;

pub use paths::{expand_tilde, get_data_dir};
pub use timers::TimerQueue;
