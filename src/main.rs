//! Pomodoro Timer - A deadline-based work/break countdown
//!
//! This is the main entry point for the pomodoro-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use pomodoro_timer::{
    api::create_router,
    config::Config,
    engine::{CountdownEngine, SystemClock, WatchView},
    state::AppState,
    tasks::{clock_display_task, spawn_countdown},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr, the terminal clock owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_timer={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    let timer_config = config.timer_config()?;

    info!("Starting pomodoro-timer v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, work={}min, short_break={}min, long_break={}min",
        config.host, config.port, config.work, config.short_break, config.long_break
    );

    // Create the engine and move it onto its own task
    let (view, status_rx) = WatchView::new();
    let engine = CountdownEngine::new(timer_config, view, SystemClock);
    let (handle, countdown) = spawn_countdown(engine);

    if !config.no_display {
        tokio::spawn(clock_display_task(status_rx.clone()));
    }

    let state = Arc::new(AppState::new(
        handle,
        status_rx,
        timer_config,
        config.port,
        config.host.clone(),
    ));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start       - Start the countdown");
    info!("  POST /stop        - Pause the countdown");
    info!("  POST /toggle      - Start or stop, whichever applies");
    info!("  POST /reset       - Restore the current mode's full duration");
    info!("  POST /mode/:mode  - Switch to work, short_break or long_break");
    info!("  GET  /status      - Check timer status");
    info!("  GET  /health      - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    // Open connections may still hold command senders
    countdown.abort();

    info!("Server shutdown complete");
    Ok(())
}
