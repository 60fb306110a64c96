//! Deadline-based countdown engine

use tracing::{debug, info};

use super::{Clock, Command, Ticker, View};
use crate::{
    config::TimerConfig,
    state::{Affordance, Mode, Remaining, TimerState, TimerStatus},
};

/// Remaining time between `now_ms` and `deadline_ms`, truncated to whole
/// seconds. A deadline that has already passed yields zero.
pub fn sample_remaining(deadline_ms: i64, now_ms: i64) -> Remaining {
    let delta_ms = deadline_ms.saturating_sub(now_ms);
    if delta_ms <= 0 {
        return Remaining::ZERO;
    }
    Remaining::from_total_seconds((delta_ms / 1000) as u64)
}

/// Result of feeding one tick to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick from a cancelled or superseded activation; nothing happened
    Stale,
    Running(Remaining),
    /// Countdown hit zero; the mode was reset and the engine stopped
    Expired,
}

/// Owns the timer state and drives the view
pub struct CountdownEngine<V, C> {
    config: TimerConfig,
    state: TimerState,
    ticker: Ticker,
    view: V,
    clock: C,
}

impl<V: View, C: Clock> CountdownEngine<V, C> {
    /// Create an engine idle in work mode and push the initial snapshot
    pub fn new(config: TimerConfig, view: V, clock: C) -> Self {
        let mut engine = Self {
            config,
            state: TimerState::idle(Mode::Work, config.duration(Mode::Work)),
            ticker: Ticker::default(),
            view,
            clock,
        };
        engine.switch_mode(Mode::Work);
        engine
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn ticker(&self) -> Ticker {
        self.ticker
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn affordance(&self) -> Affordance {
        if self.state.is_running() {
            Affordance::CanStop
        } else {
            Affordance::CanStart
        }
    }

    /// Current status as a view would see it
    pub fn status(&self) -> TimerStatus {
        let mut status = TimerStatus::new(self.state.snapshot());
        status.apply_affordance(self.affordance());
        status
    }

    /// Select `mode` and show its full duration, cancelling any countdown
    pub fn switch_mode(&mut self, mode: Mode) {
        self.ticker.cancel();
        self.state.select(mode, self.config.duration(mode));
        debug!("Switched to {} mode ({})", mode, self.state.remaining());

        self.view.render(&self.state.snapshot());
        self.view.highlight_mode(mode);
        self.view.set_affordance(Affordance::CanStart);
    }

    /// Start counting down from the current remaining time.
    ///
    /// Starting while already running recomputes the deadline from the last
    /// sampled remaining time. Returns the generation of the new activation.
    pub fn start(&mut self) -> u64 {
        let now = self.clock.now_ms();
        let deadline = now.saturating_add(self.state.remaining().as_millis());

        let generation = self.ticker.arm();
        self.state.run_until(deadline);
        info!(
            "Started {} countdown with {} remaining",
            self.state.mode(),
            self.state.remaining()
        );

        self.view.set_affordance(Affordance::CanStop);
        generation
    }

    /// Pause the countdown, keeping the last sampled remaining time
    pub fn stop(&mut self) {
        self.ticker.cancel();
        if self.state.is_running() {
            info!(
                "Stopped {} countdown at {}",
                self.state.mode(),
                self.state.remaining()
            );
        }
        self.state.pause();
        self.view.set_affordance(Affordance::CanStart);
    }

    /// Start when idle, stop when running
    pub fn toggle(&mut self) {
        match self.affordance() {
            Affordance::CanStart => {
                self.start();
            }
            Affordance::CanStop => self.stop(),
        }
    }

    /// Return to the full duration of the current mode, not running
    pub fn reset(&mut self) {
        self.stop();
        self.switch_mode(self.state.mode());
    }

    /// Recompute the remaining time from the deadline and notify the view
    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if !self.ticker.accepts(generation) {
            debug!("Ignoring stale tick from activation {}", generation);
            return TickOutcome::Stale;
        }
        let Some(deadline) = self.state.deadline_ms() else {
            self.ticker.cancel();
            return TickOutcome::Stale;
        };

        let remaining = sample_remaining(deadline, self.clock.now_ms());
        self.state.set_remaining(remaining);
        self.view.render(&self.state.snapshot());

        if remaining.is_zero() {
            info!("{} countdown finished", self.state.mode());
            self.ticker.cancel();
            self.switch_mode(self.state.mode());
            self.stop();
            return TickOutcome::Expired;
        }

        debug!("Tick: {} remaining", remaining);
        TickOutcome::Running(remaining)
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => {
                self.start();
            }
            Command::Stop => self.stop(),
            Command::Toggle => self.toggle(),
            Command::Reset => self.reset(),
            Command::SwitchMode(mode) => self.switch_mode(mode),
        }
    }
}
