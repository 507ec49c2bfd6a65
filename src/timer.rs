use crate::domain::TimerState;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Length of one focus session in seconds (25 minutes)
pub const SESSION_SECONDS: u32 = 1500;

/// Interval between two decrements of a running countdown
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Point-in-time view of the timer, published on every change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub remaining_seconds: u32,
    pub state: TimerState,
}

impl TimerSnapshot {
    fn with_remaining(remaining_seconds: u32) -> Self {
        Self {
            remaining_seconds,
            state: TimerState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Elapsed share of a full session, from 0.0 to 1.0
    pub fn progress(&self) -> f64 {
        let remaining = self.remaining_seconds.min(SESSION_SECONDS);
        f64::from(SESSION_SECONDS - remaining) / f64::from(SESSION_SECONDS)
    }
}

impl Default for TimerSnapshot {
    fn default() -> Self {
        Self::with_remaining(SESSION_SECONDS)
    }
}

/// Handle to the one countdown task a timer may own
struct Countdown {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// Pomodoro countdown: an Idle/Running/Paused state machine driving a
/// single background task that decrements once per second.
///
/// All mutations of the published snapshot go through the watch sender,
/// so a tick and a user intent never interleave inside a transition.
pub struct CountdownTimer {
    state: Arc<watch::Sender<TimerSnapshot>>,
    countdown: Option<Countdown>,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self::starting_at(SESSION_SECONDS)
    }

    fn starting_at(remaining_seconds: u32) -> Self {
        let (tx, _rx) = watch::channel(TimerSnapshot::with_remaining(remaining_seconds));
        Self {
            state: Arc::new(tx),
            countdown: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_remaining(remaining_seconds: u32) -> Self {
        Self::starting_at(remaining_seconds)
    }

    /// Latest committed state
    pub fn snapshot(&self) -> TimerSnapshot {
        *self.state.borrow()
    }

    /// Receiver notified on every committed change
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.state.subscribe()
    }

    /// Idle/Paused -> Running, Running -> Paused
    pub async fn toggle(&mut self) {
        match self.snapshot().state {
            TimerState::Running => self.pause().await,
            TimerState::Idle | TimerState::Paused => self.start().await,
        }
    }

    /// Back to Idle with a full session, stopping any countdown
    pub async fn reset(&mut self) {
        self.state.send_modify(|s| *s = TimerSnapshot::default());
        self.stop_countdown().await;
        info!(remaining = SESSION_SECONDS, "timer reset");
    }

    /// Stop the countdown task, if any, and wait for it to exit
    pub async fn shutdown(&mut self) {
        self.stop_countdown().await;
    }

    async fn start(&mut self) {
        // A task that expired on its own still sits in the slot
        self.stop_countdown().await;

        // Nothing left to count down; only reset restores a session
        if self.snapshot().remaining_seconds == 0 {
            self.state.send_modify(|s| s.state = TimerState::Idle);
            debug!("start ignored at 00:00");
            return;
        }

        self.state.send_modify(|s| s.state = TimerState::Running);

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_countdown(self.state.clone(), cancel.clone()));
        self.countdown = Some(Countdown { cancel, handle });
        info!(remaining = self.snapshot().remaining_seconds, "timer running");
    }

    async fn pause(&mut self) {
        // Commit first so a tick racing the cancellation skips its decrement
        self.state.send_modify(|s| s.state = TimerState::Paused);
        self.stop_countdown().await;
        info!(remaining = self.snapshot().remaining_seconds, "timer paused");
    }

    async fn stop_countdown(&mut self) {
        if let Some(countdown) = self.countdown.take() {
            countdown.cancel.cancel();
            if let Err(err) = countdown.handle.await {
                warn!(error = %err, "countdown task did not exit cleanly");
            }
        }
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        if let Some(countdown) = &self.countdown {
            countdown.cancel.cancel();
        }
    }
}

/// Body of the countdown task: sleep, decrement, repeat until zero or cancelled
async fn run_countdown(state: Arc<watch::Sender<TimerSnapshot>>, cancel: CancellationToken) {
    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("countdown cancelled");
                return;
            }
            _ = tokio::time::sleep(TICK_PERIOD) => {}
        }

        let mut still_running = false;
        state.send_if_modified(|s| {
            if s.state != TimerState::Running {
                return false;
            }
            s.remaining_seconds = s.remaining_seconds.saturating_sub(1);
            if s.remaining_seconds == 0 {
                s.state = TimerState::Idle;
            } else {
                still_running = true;
            }
            true
        });

        if !still_running {
            if state.borrow().remaining_seconds == 0 {
                info!("session complete");
            }
            return;
        }
    }
}
