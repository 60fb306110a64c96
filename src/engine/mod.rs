//! Countdown engine module
//!
//! The engine owns the timer state and is the only place it changes. Time and
//! rendering are reached through the `Clock` and `View` seams so the engine
//! has no dependency on a runtime or rendering technology.

pub mod clock;
pub mod command;
pub mod countdown;
pub mod ticker;
pub mod view;

// Re-export main types
pub use clock::{Clock, ManualClock, SystemClock};
pub use command::Command;
pub use countdown::{sample_remaining, CountdownEngine, TickOutcome};
pub use ticker::{Ticker, TICK_PERIOD};
pub use view::{View, WatchView};
