//! Countdown modes

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three named countdown presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Work,
    ShortBreak,
    LongBreak,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Work, Mode::ShortBreak, Mode::LongBreak];

    /// Parse a mode identifier leniently.
    ///
    /// Accepts both the canonical names and the short aliases used by the
    /// mode buttons (`pomodoro`, `short`, `long`). Unknown identifiers yield
    /// `None` so callers can ignore them instead of failing.
    pub fn parse(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "work" | "pomodoro" => Some(Mode::Work),
            "short_break" | "short-break" | "short" => Some(Mode::ShortBreak),
            "long_break" | "long-break" | "long" => Some(Mode::LongBreak),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Work => "work",
            Mode::ShortBreak => "short_break",
            Mode::LongBreak => "long_break",
        }
    }

    /// Human readable label, as shown on the mode buttons
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Work => "Pomodoro",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
