//! Scheduler: tokio tasks that drive time for the mounted screen.
//!
//! DESIGN
//! ======
//! Three independent pieces:
//! - [`Animations`]: one-shot progress tasks keyed by name. Each publishes
//!   eased progress 0→1 through a `watch` channel. Starting a key that is
//!   already running aborts the old task first, so a key never has two runs.
//! - [`Ticker`]: sleeps for its period, publishes a tick count, repeats until
//!   stopped or dropped.
//! - [`Redraw`]: redraw requests collapse onto a single `Notify` permit, so
//!   any number of requests before the next frame yields one render.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use canvas::anim::Easing;
use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

// =============================================================================
// ANIMATIONS
// =============================================================================

/// Keyed one-shot animation tasks.
#[derive(Debug, Default)]
pub struct Animations {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl Animations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `key` from 0. A run already in flight under `key` is aborted and
    /// its receivers see the channel close.
    pub fn start(&mut self, key: &str, duration: Duration, easing: Easing, frame: Duration) -> watch::Receiver<f64> {
        if let Some(previous) = self.tasks.remove(key) {
            previous.abort();
        }
        let (tx, rx) = watch::channel(0.0);
        let handle = tokio::spawn(run_animation(tx, duration, easing, frame));
        self.tasks.insert(key.to_owned(), handle);
        rx
    }

    /// Abort `key`. Returns whether anything was running.
    pub fn stop(&mut self, key: &str) -> bool {
        match self.tasks.remove(key) {
            Some(handle) => {
                let running = !handle.is_finished();
                handle.abort();
                running
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_running(&self, key: &str) -> bool {
        self.tasks.get(key).is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Animations {
    fn drop(&mut self) {
        for handle in self.tasks.values() {
            handle.abort();
        }
    }
}

async fn run_animation(tx: watch::Sender<f64>, duration: Duration, easing: Easing, frame: Duration) {
    let started = Instant::now();
    let mut frames = tokio::time::interval(frame);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        frames.tick().await;
        let t = if duration.is_zero() { 1.0 } else { started.elapsed().as_secs_f64() / duration.as_secs_f64() };
        let t = t.min(1.0);
        if tx.send(easing.apply(t)).is_err() || t >= 1.0 {
            return;
        }
    }
}

// =============================================================================
// TICKER
// =============================================================================

/// Repeating ticker. Stops when dropped.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
    rx: watch::Receiver<u64>,
}

impl Ticker {
    #[must_use]
    pub fn start(period: Duration) -> Self {
        let (tx, rx) = watch::channel(0_u64);
        let handle = tokio::spawn(async move {
            let mut count = 0_u64;
            loop {
                tokio::time::sleep(period).await;
                count += 1;
                if tx.send(count).is_err() {
                    return;
                }
            }
        });
        Self { handle, rx }
    }

    /// Wait for the next tick and return how many have fired so far.
    /// `None` once the ticker has stopped.
    pub async fn tick(&mut self) -> Option<u64> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }

    pub fn stop(&self) {
        self.handle.abort();
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        *self.rx.borrow()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// =============================================================================
// REDRAW
// =============================================================================

/// Coalescing redraw request. Clones share one signal.
#[derive(Debug, Clone, Default)]
pub struct Redraw {
    notify: Arc<Notify>,
}

impl Redraw {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.notify.notify_one();
    }

    /// Resolve once at least one request arrived since the last wait.
    pub async fn wait(&self) {
        self.notify.notified().await;
    }
}
