//! Utility functions module
//!
//! Process-level helpers that are not part of the countdown itself.

pub mod signals;

// Re-export main functions
pub use signals::shutdown_signal;
