//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{info, warn};

use super::TimerStatus;
use crate::{
    config::TimerConfig,
    engine::Command,
    error::EngineError,
    tasks::EngineHandle,
};

/// Shared state handed to the HTTP handlers
#[derive(Debug)]
pub struct AppState {
    /// Command side of the countdown task
    pub engine: EngineHandle,
    /// Latest status published by the engine's view
    pub status_rx: watch::Receiver<TimerStatus>,
    pub timer_config: TimerConfig,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    pub fn new(
        engine: EngineHandle,
        status_rx: watch::Receiver<TimerStatus>,
        timer_config: TimerConfig,
        port: u16,
        host: String,
    ) -> Self {
        Self {
            engine,
            status_rx,
            timer_config,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Forward a command to the engine and record it as the last action
    pub async fn execute(&self, command: Command) -> Result<TimerStatus, EngineError> {
        info!("Executing command: {:?}", command);
        let status = self.engine.send(command).await?;
        self.record_action(command.name());
        Ok(status)
    }

    fn record_action(&self, action: &str) {
        match self.last_action.lock() {
            Ok(mut last_action) => *last_action = Some(action.to_string()),
            Err(e) => warn!("Failed to lock last action: {}", e),
        }
        match self.last_action_time.lock() {
            Ok(mut last_time) => *last_time = Some(Utc::now()),
            Err(e) => warn!("Failed to lock last action time: {}", e),
        }
    }

    /// Get the most recently published timer status
    pub fn timer_status(&self) -> TimerStatus {
        self.status_rx.borrow().clone()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
