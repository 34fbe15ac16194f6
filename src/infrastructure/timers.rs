//! Correlation of host timer events with timer tokens.
//!
//! Zellij's `set_timeout(secs)` answers with `Timer(elapsed)`, where `elapsed`
//! is the measured time since the timer was armed and is never shorter than
//! `secs`. The timer that fired is the one with the longest armed duration not
//! exceeding `elapsed`; timers armed with the same duration fire in the order
//! they were armed.

use crate::app::TimerId;
use std::collections::VecDeque;
use std::time::Duration;

/// Armed timers in the order they were scheduled.
#[derive(Debug, Default)]
pub struct TimerQueue {
    armed: VecDeque<(f64, TimerId)>,
}

impl TimerQueue {
    /// Registers `timer` and returns the seconds to pass to `set_timeout`.
    pub fn arm(&mut self, timer: TimerId, after: Duration) -> f64 {
        let secs = after.as_secs_f64();
        self.armed.push_back((secs, timer));
        secs
    }

    /// Resolves an elapsed host timer to the token it was armed for.
    ///
    /// # Example
    ///
    /// ```
    /// use names_panel::app::TimerId;
    /// use names_panel::infrastructure::TimerQueue;
    /// use std::time::Duration;
    ///
    /// let mut timers = TimerQueue::default();
    /// timers.arm(TimerId::Banner(1), Duration::from_millis(3000));
    /// assert_eq!(timers.fire(3.0012), Some(TimerId::Banner(1)));
    /// assert_eq!(timers.fire(3.0012), None);
    /// ```
    pub fn fire(&mut self, elapsed_secs: f64) -> Option<TimerId> {
        let mut best: Option<(usize, f64)> = None;
        for (index, (secs, _)) in self.armed.iter().enumerate() {
            if *secs > elapsed_secs {
                continue;
            }
            // Strictly greater keeps the oldest among equal durations.
            if best.map_or(true, |(_, longest)| *secs > longest) {
                best = Some((index, *secs));
            }
        }
        let (position, _) = best?;
        self.armed.remove(position).map(|(_, timer)| timer)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.armed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.armed.is_empty()
    }
}
