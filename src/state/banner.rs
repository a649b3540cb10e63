//! Transient success banner.
//!
//! Showing the banner (re)starts its timer; there is never more than one.
//! Time is passed in so transitions stay pure.

use std::time::{Duration, Instant};

/// Default time a banner stays up.
pub const DEFAULT_BANNER_DURATION: Duration = Duration::from_millis(3000);

/// Text of the acknowledgment banner.
pub const SUCCESS_MESSAGE: &str = "Action completed successfully!";

/// Acknowledgment banner with a dismiss delay.
///
/// Visible from `show` until `duration` has elapsed. `expire` is the tick
/// hook that actually clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    shown_at: Option<Instant>,
    duration: Duration,
}

impl Default for Banner {
    fn default() -> Self {
        Self::new(DEFAULT_BANNER_DURATION)
    }
}

impl Banner {
    /// A hidden banner that stays up for `duration` once shown.
    pub fn new(duration: Duration) -> Self {
        Self {
            shown_at: None,
            duration,
        }
    }

    /// Configured dismiss delay.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Show the banner, restarting the dismiss delay if already up.
    pub fn show(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    /// True between `show` and the end of the delay.
    pub fn is_visible(&self, now: Instant) -> bool {
        self.shown_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.duration)
    }

    /// Dismiss once the delay has elapsed. Returns true if it was dismissed.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.shown_at.is_some() && !self.is_visible(now) {
            self.shown_at = None;
            return true;
        }
        false
    }
}
