//! Configuration and CLI argument handling

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigurationError,
    state::{Mode, Remaining},
};

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "pomodoro-timer")]
#[command(about = "A deadline-based Pomodoro countdown with an HTTP command surface")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Work session duration in minutes
    #[arg(short, long, default_value = "25")]
    pub work: u64,

    /// Short break duration in minutes
    #[arg(long, default_value = "5")]
    pub short_break: u64,

    /// Long break duration in minutes
    #[arg(long, default_value = "15")]
    pub long_break: u64,

    /// Work sessions before a long break is due
    #[arg(long, default_value = "4")]
    pub long_break_interval: u32,

    /// Do not print the clock to the terminal
    #[arg(long)]
    pub no_display: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Validate the duration flags into a timer configuration
    pub fn timer_config(&self) -> Result<TimerConfig, ConfigurationError> {
        TimerConfig::new(
            self.work,
            self.short_break,
            self.long_break,
            self.long_break_interval,
        )
    }
}

/// Per-mode durations in minutes.
///
/// `long_break_interval` is carried for clients but no transition reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    work: u64,
    short_break: u64,
    long_break: u64,
    long_break_interval: u32,
}

impl TimerConfig {
    pub fn new(
        work: u64,
        short_break: u64,
        long_break: u64,
        long_break_interval: u32,
    ) -> Result<Self, ConfigurationError> {
        for (mode, minutes) in [
            (Mode::Work, work),
            (Mode::ShortBreak, short_break),
            (Mode::LongBreak, long_break),
        ] {
            if minutes == 0 {
                return Err(ConfigurationError::NonPositiveDuration(mode));
            }
        }
        if long_break_interval == 0 {
            return Err(ConfigurationError::NonPositiveLongBreakInterval);
        }

        Ok(Self {
            work,
            short_break,
            long_break,
            long_break_interval,
        })
    }

    pub fn minutes(&self, mode: Mode) -> u64 {
        match mode {
            Mode::Work => self.work,
            Mode::ShortBreak => self.short_break,
            Mode::LongBreak => self.long_break,
        }
    }

    /// Full countdown for a mode
    pub fn duration(&self, mode: Mode) -> Remaining {
        Remaining::from_minutes(self.minutes(mode))
    }

    pub fn long_break_interval(&self) -> u32 {
        self.long_break_interval
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work: 25,
            short_break: 5,
            long_break: 15,
            long_break_interval: 4,
        }
    }
}
