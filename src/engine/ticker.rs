//! Periodic sampling activity with cancel-before-reschedule

use std::time::Duration;

/// Nominal spacing between ticks while a countdown is running
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Handle on the single periodic activity an engine may have outstanding.
///
/// Every activation gets a fresh generation id. Arming always cancels the
/// previous activation first, so a tick from an older generation is stale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ticker {
    generation: u64,
    armed: bool,
}

impl Ticker {
    /// Schedule a new activation and return its generation
    pub fn arm(&mut self) -> u64 {
        self.cancel();
        self.generation += 1;
        self.armed = true;
        self.generation
    }

    pub fn cancel(&mut self) {
        self.armed = false;
    }

    /// Generation of the armed activation, if any
    pub fn active(&self) -> Option<u64> {
        self.armed.then_some(self.generation)
    }

    pub fn accepts(&self, generation: u64) -> bool {
        self.active() == Some(generation)
    }
}
