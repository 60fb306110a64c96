//! Rendering collaborator seam

use tokio::sync::watch;

use crate::state::{Affordance, Mode, Snapshot, TimerStatus};

/// Receives read-only updates from the countdown engine.
///
/// Each snapshot is authoritative and replaces whatever was shown before.
pub trait View {
    fn render(&mut self, snapshot: &Snapshot);

    /// Exactly one mode is highlighted at a time
    fn highlight_mode(&mut self, mode: Mode);

    fn set_affordance(&mut self, affordance: Affordance);
}

/// View that publishes the folded timer status on a watch channel
#[derive(Debug)]
pub struct WatchView {
    tx: watch::Sender<TimerStatus>,
}

impl WatchView {
    pub fn new() -> (Self, watch::Receiver<TimerStatus>) {
        let (tx, rx) = watch::channel(TimerStatus::default());
        (Self { tx }, rx)
    }

    // send_modify stores the update even when nobody is subscribed
    fn publish<F>(&self, update: F)
    where
        F: FnOnce(&mut TimerStatus),
    {
        self.tx.send_modify(update);
    }
}

impl View for WatchView {
    fn render(&mut self, snapshot: &Snapshot) {
        self.publish(|status| status.apply_snapshot(snapshot));
    }

    fn highlight_mode(&mut self, mode: Mode) {
        self.publish(|status| status.active_mode = mode);
    }

    fn set_affordance(&mut self, affordance: Affordance) {
        self.publish(|status| status.apply_affordance(affordance));
    }
}
