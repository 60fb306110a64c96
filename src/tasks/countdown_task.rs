//! Countdown driver background task

use std::future::pending;

use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
    time::{interval_at, Instant, Interval, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::{
    engine::{Clock, Command, CountdownEngine, TickOutcome, View, TICK_PERIOD},
    error::EngineError,
    state::TimerStatus,
};

/// A command plus the channel its resulting status is reported on
#[derive(Debug)]
pub struct EngineRequest {
    pub command: Command,
    pub reply: Option<oneshot::Sender<TimerStatus>>,
}

/// Cloneable sender side of the countdown task
#[derive(Debug, Clone)]
pub struct EngineHandle {
    tx: mpsc::Sender<EngineRequest>,
}

impl EngineHandle {
    /// Apply a command and wait for the status it produced
    pub async fn send(&self, command: Command) -> Result<TimerStatus, EngineError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(EngineRequest {
                command,
                reply: Some(reply_tx),
            })
            .await
            .map_err(|_| EngineError::Closed)?;
        reply_rx.await.map_err(|_| EngineError::Closed)
    }

    /// Queue a command without waiting for it to be applied
    pub async fn dispatch(&self, command: Command) -> Result<(), EngineError> {
        self.tx
            .send(EngineRequest {
                command,
                reply: None,
            })
            .await
            .map_err(|_| EngineError::Closed)
    }
}

/// Move the engine onto its own task and return a handle to command it
pub fn spawn_countdown<V, C>(engine: CountdownEngine<V, C>) -> (EngineHandle, JoinHandle<()>)
where
    V: View + Send + 'static,
    C: Clock + Send + 'static,
{
    let (tx, rx) = mpsc::channel(32);
    let task = tokio::spawn(countdown_task(engine, rx));
    (EngineHandle { tx }, task)
}

/// Interval backing one ticker activation
struct ActiveInterval {
    generation: u64,
    interval: Interval,
}

impl ActiveInterval {
    fn new(generation: u64) -> Self {
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            generation,
            interval,
        }
    }
}

/// Make the local interval mirror the engine's ticker.
///
/// The old interval is always dropped before a new one is created, so at
/// most one is ever outstanding.
fn sync_interval(slot: &mut Option<ActiveInterval>, armed: Option<u64>) {
    let current = slot.as_ref().map(|active| active.generation);
    if current == armed {
        return;
    }

    *slot = None;
    if let Some(generation) = armed {
        debug!("Scheduling tick activation {}", generation);
        *slot = Some(ActiveInterval::new(generation));
    }
}

async fn next_tick(slot: &mut Option<ActiveInterval>) -> u64 {
    match slot {
        Some(active) => {
            active.interval.tick().await;
            active.generation
        }
        None => pending().await,
    }
}

/// Background task that owns the engine and serializes commands and ticks
pub async fn countdown_task<V, C>(
    mut engine: CountdownEngine<V, C>,
    mut requests: mpsc::Receiver<EngineRequest>,
) where
    V: View,
    C: Clock,
{
    info!("Starting countdown task");

    let mut slot: Option<ActiveInterval> = None;

    loop {
        sync_interval(&mut slot, engine.ticker().active());

        tokio::select! {
            request = requests.recv() => {
                let Some(EngineRequest { command, reply }) = request else {
                    info!("All command sources closed, stopping countdown task");
                    break;
                };

                debug!("Countdown task received command: {:?}", command);
                engine.apply(command);

                if let Some(reply) = reply {
                    if reply.send(engine.status()).is_err() {
                        warn!("Command issuer went away before reading the status");
                    }
                }
            }

            generation = next_tick(&mut slot) => {
                if engine.tick(generation) == TickOutcome::Expired {
                    info!("Countdown expired, timer reset to {}", engine.state().remaining());
                }
            }
        }
    }

    engine.stop();
}
