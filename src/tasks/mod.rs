//! Background tasks module
//!
//! This module contains the tasks that run alongside the HTTP server.

pub mod clock_display;
pub mod countdown_task;

// Re-export main functions
pub use clock_display::clock_display_task;
pub use countdown_task::{countdown_task, spawn_countdown, EngineHandle, EngineRequest};
