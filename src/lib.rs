//! Pomodoro Timer - A deadline-based work/break countdown
//!
//! This library provides the countdown engine behind a Pomodoro timer: named
//! modes with configured durations, start/stop/reset/switch-mode commands and
//! drift-free remaining-time sampling, plus an async driver and an HTTP
//! command surface.

pub mod config;
pub mod error;
pub mod state;
pub mod engine;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, TimerConfig};
pub use error::{ConfigurationError, EngineError};
pub use state::{AppState, Mode};
pub use engine::CountdownEngine;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
