//! Timer state structure and the read-only views derived from it

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Mode;

/// Time left on the clock, in whole seconds plus the derived display fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Remaining {
    pub total_seconds: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Remaining {
    pub const ZERO: Remaining = Remaining {
        total_seconds: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn from_total_seconds(total_seconds: u64) -> Self {
        Self {
            total_seconds,
            hours: total_seconds / 3600,
            minutes: (total_seconds / 60) % 60,
            seconds: total_seconds % 60,
        }
    }

    pub fn from_minutes(minutes: u64) -> Self {
        Self::from_total_seconds(minutes.saturating_mul(60))
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds == 0
    }

    /// Milliseconds covered by this remaining time
    pub fn as_millis(&self) -> i64 {
        i64::try_from(self.total_seconds.saturating_mul(1000)).unwrap_or(i64::MAX)
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours > 0 {
            write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        } else {
            write!(f, "{:02}:{:02}", self.minutes, self.seconds)
        }
    }
}

/// What the single start/stop control should offer next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Affordance {
    #[default]
    CanStart,
    CanStop,
}

impl Affordance {
    pub fn label(&self) -> &'static str {
        match self {
            Affordance::CanStart => "Start",
            Affordance::CanStop => "Stop",
        }
    }
}

/// Immutable value handed to the view on every tick or state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: Mode,
    pub remaining: Remaining,
}

/// Mutable countdown state owned by the engine.
///
/// `deadline_ms` is set exactly when the countdown is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    mode: Mode,
    remaining: Remaining,
    deadline_ms: Option<i64>,
}

impl TimerState {
    /// Create an idle timer state showing `remaining` for `mode`
    pub fn idle(mode: Mode, remaining: Remaining) -> Self {
        Self {
            mode,
            remaining,
            deadline_ms: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining(&self) -> Remaining {
        self.remaining
    }

    pub fn deadline_ms(&self) -> Option<i64> {
        self.deadline_ms
    }

    /// Check if the countdown is running
    pub fn is_running(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.mode,
            remaining: self.remaining,
        }
    }

    pub(crate) fn select(&mut self, mode: Mode, remaining: Remaining) {
        self.mode = mode;
        self.remaining = remaining;
        self.deadline_ms = None;
    }

    pub(crate) fn run_until(&mut self, deadline_ms: i64) {
        self.deadline_ms = Some(deadline_ms);
    }

    pub(crate) fn pause(&mut self) {
        self.deadline_ms = None;
    }

    pub(crate) fn set_remaining(&mut self, remaining: Remaining) {
        self.remaining = remaining;
    }
}

/// Everything a view knows about the timer, assembled from view calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerStatus {
    pub mode: Mode,
    pub active_mode: Mode,
    pub remaining: Remaining,
    pub display: String,
    pub running: bool,
    pub affordance: Affordance,
}

impl TimerStatus {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            mode: snapshot.mode,
            active_mode: snapshot.mode,
            remaining: snapshot.remaining,
            display: snapshot.remaining.to_string(),
            running: false,
            affordance: Affordance::CanStart,
        }
    }

    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) {
        self.mode = snapshot.mode;
        self.remaining = snapshot.remaining;
        self.display = snapshot.remaining.to_string();
    }

    pub fn apply_affordance(&mut self, affordance: Affordance) {
        self.affordance = affordance;
        self.running = affordance == Affordance::CanStop;
    }
}

impl Default for TimerStatus {
    fn default() -> Self {
        Self::new(Snapshot {
            mode: Mode::Work,
            remaining: Remaining::ZERO,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_splits_total_seconds() {
        let r = Remaining::from_total_seconds(1499);
        assert_eq!((r.hours, r.minutes, r.seconds), (0, 24, 59));
        assert_eq!(r.to_string(), "24:59");
    }

    #[test]
    fn remaining_wraps_minutes_into_hours() {
        let r = Remaining::from_minutes(90);
        assert_eq!((r.hours, r.minutes, r.seconds), (1, 30, 0));
        assert_eq!(r.to_string(), "1:30:00");
    }

    #[test]
    fn timer_state_deadline_tracks_running() {
        let mut state = TimerState::idle(Mode::Work, Remaining::from_minutes(25));
        assert!(!state.is_running());

        state.run_until(1_500_000);
        assert!(state.is_running());
        assert_eq!(state.deadline_ms(), Some(1_500_000));

        state.pause();
        assert!(!state.is_running());
        assert_eq!(state.remaining(), Remaining::from_minutes(25));
    }

    #[test]
    fn status_follows_affordance() {
        let mut status = TimerStatus::new(Snapshot {
            mode: Mode::ShortBreak,
            remaining: Remaining::from_minutes(5),
        });
        assert_eq!(status.display, "05:00");
        assert!(!status.running);

        status.apply_affordance(Affordance::CanStop);
        assert!(status.running);
        assert_eq!(status.affordance.label(), "Stop");
    }
}
