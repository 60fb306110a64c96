use std::time::Duration;

use pomodoro_timer::{
    engine::{Clock, Command, CountdownEngine, WatchView},
    error::EngineError,
    state::{Affordance, Mode, TimerStatus},
    tasks::{spawn_countdown, EngineHandle},
    TimerConfig,
};
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{sleep, Instant},
};

/// Clock that follows tokio's paused test time
#[derive(Debug, Clone)]
struct PausedClock {
    origin: Instant,
}

impl Clock for PausedClock {
    fn now_ms(&self) -> i64 {
        self.origin.elapsed().as_millis() as i64
    }
}

fn spawn(config: TimerConfig) -> (EngineHandle, watch::Receiver<TimerStatus>, JoinHandle<()>) {
    let (view, status_rx) = WatchView::new();
    let clock = PausedClock {
        origin: Instant::now(),
    };
    let engine = CountdownEngine::new(config, view, clock);
    let (handle, task) = spawn_countdown(engine);
    (handle, status_rx, task)
}

#[tokio::test(start_paused = true)]
async fn first_tick_shows_one_second_elapsed() {
    let (handle, status_rx, _task) = spawn(TimerConfig::default());

    let started = handle.send(Command::Start).await.unwrap();
    assert!(started.running);
    assert_eq!(started.display, "25:00");

    sleep(Duration::from_millis(1_500)).await;

    let status = status_rx.borrow().clone();
    assert_eq!((status.remaining.minutes, status.remaining.seconds), (24, 59));
    assert_eq!(status.affordance, Affordance::CanStop);
}

#[tokio::test(start_paused = true)]
async fn expiry_resets_the_same_mode_and_stops() {
    let config = TimerConfig::new(1, 5, 15, 4).unwrap();
    let (handle, status_rx, _task) = spawn(config);

    handle.send(Command::Start).await.unwrap();
    sleep(Duration::from_millis(61_500)).await;

    let status = status_rx.borrow().clone();
    assert_eq!(status.mode, Mode::Work);
    assert_eq!(status.display, "01:00");
    assert!(!status.running);
    assert_eq!(status.affordance, Affordance::CanStart);

    // Nothing keeps ticking after expiry
    let mut status_rx = status_rx;
    status_rx.borrow_and_update();
    sleep(Duration::from_secs(5)).await;
    assert!(!status_rx.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn switching_mode_cancels_pending_ticks() {
    let (handle, mut status_rx, _task) = spawn(TimerConfig::default());

    handle.send(Command::Start).await.unwrap();
    sleep(Duration::from_millis(2_500)).await;
    assert_eq!(status_rx.borrow().display, "24:58");

    let switched = handle
        .send(Command::SwitchMode(Mode::ShortBreak))
        .await
        .unwrap();
    assert_eq!(switched.mode, Mode::ShortBreak);
    assert_eq!(switched.display, "05:00");
    assert!(!switched.running);

    status_rx.borrow_and_update();
    sleep(Duration::from_secs(5)).await;

    assert!(!status_rx.has_changed().unwrap());
    let status = status_rx.borrow().clone();
    assert_eq!(status.active_mode, Mode::ShortBreak);
    assert_eq!(status.display, "05:00");
}

#[tokio::test(start_paused = true)]
async fn resume_continues_from_paused_value() {
    let (handle, status_rx, _task) = spawn(TimerConfig::default());

    handle.send(Command::Start).await.unwrap();
    sleep(Duration::from_millis(3_500)).await;

    let paused = handle.send(Command::Stop).await.unwrap();
    assert_eq!(paused.remaining.total_seconds, 25 * 60 - 3);
    assert!(!paused.running);

    // Idle time does not count down
    sleep(Duration::from_millis(6_500)).await;
    assert_eq!(status_rx.borrow().remaining, paused.remaining);

    handle.send(Command::Toggle).await.unwrap();
    sleep(Duration::from_millis(1_500)).await;

    assert_eq!(
        status_rx.borrow().remaining.total_seconds,
        paused.remaining.total_seconds - 1
    );
}

#[tokio::test(start_paused = true)]
async fn reset_restores_full_duration() {
    let (handle, _status_rx, _task) = spawn(TimerConfig::default());

    handle
        .send(Command::SwitchMode(Mode::LongBreak))
        .await
        .unwrap();
    handle.send(Command::Start).await.unwrap();
    sleep(Duration::from_millis(4_200)).await;

    let status = handle.send(Command::Reset).await.unwrap();
    assert_eq!(status.mode, Mode::LongBreak);
    assert_eq!(status.display, "15:00");
    assert!(!status.running);
}

#[tokio::test(start_paused = true)]
async fn task_exits_when_every_handle_is_dropped() {
    let (handle, _status_rx, task) = spawn(TimerConfig::default());
    handle.dispatch(Command::Start).await.unwrap();

    drop(handle);

    assert!(task.await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn send_fails_once_the_task_is_gone() {
    let (handle, _status_rx, task) = spawn(TimerConfig::default());
    task.abort();
    let _ = task.await;

    assert_eq!(handle.send(Command::Start).await, Err(EngineError::Closed));
}
