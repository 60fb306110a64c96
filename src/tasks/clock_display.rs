//! Terminal clock display task

use std::io::{self, Write};

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::state::TimerStatus;

/// Format the status line printed for each update
pub fn render_line(status: &TimerStatus) -> String {
    format!(
        "{}  [{}]  ({})",
        status.display,
        status.active_mode.label(),
        status.affordance.label()
    )
}

/// Background task that prints the clock whenever the published status changes
pub async fn clock_display_task(mut status_rx: watch::Receiver<TimerStatus>) {
    debug!("Starting clock display task");

    let mut last_line = String::new();
    loop {
        let line = render_line(&status_rx.borrow_and_update());

        // Affordance-only updates may produce an identical line
        if line != last_line {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{}", line).and_then(|_| stdout.flush()) {
                warn!("Failed to write clock to terminal: {}", e);
            }
            last_line = line;
        }

        if status_rx.changed().await.is_err() {
            debug!("Status channel closed, stopping clock display");
            break;
        }
    }
}
