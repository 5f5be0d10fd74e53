//! Headless host: mounts one screen and drives it for a fixed time.
//!
//! DESIGN
//! ======
//! A single task owns the engine and multiplexes every time source with
//! `select!`: scripted gestures, the one-second ticker, drag progress from
//! the scheduler, a frame interval that only runs while the screen is
//! animating, and coalesced redraw requests. Each redraw renders into a fresh
//! display list; the last one is kept for the report.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use std::collections::VecDeque;
use std::time::Duration;

use canvas::anim::Easing;
use canvas::clock::ClockTime;
use canvas::consts::TICK_INTERVAL_MS;
use canvas::engine::{Action, EngineCore, EngineError, ScreenKind};
use canvas::geom::Point;
use canvas::input::{GestureTracker, InputEvent};
use canvas::surface::DisplayList;
use time::OffsetDateTime;
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::GalleryConfig;
use crate::scheduler::{Animations, Redraw, Ticker};
use crate::script::{self, Cue, DRAG_DURATION, Gesture};

const DRAG_KEY: &str = "drag";

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// What happened during a run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub screen: ScreenKind,
    pub seed: u64,
    pub frames: u64,
    pub ticks: u64,
    /// Every action except redraw requests, in order.
    pub actions: Vec<Action>,
    pub last_frame: DisplayList,
}

/// A drag in flight: pointer position follows the progress channel.
struct Drag {
    from: Point,
    to: Point,
    progress: watch::Receiver<f64>,
}

struct Host {
    engine: EngineCore,
    gestures: GestureTracker,
    redraw: Redraw,
    started: Instant,
    report: RunReport,
}

impl Host {
    fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    fn feed(&mut self, events: Vec<InputEvent>) -> Result<(), HostError> {
        let now = self.now_ms();
        for event in events {
            debug!(?event, "input");
            let actions = self.engine.on_input(event, now)?;
            self.handle(actions);
        }
        Ok(())
    }

    fn handle(&mut self, actions: Vec<Action>) {
        for action in actions {
            if action == Action::RenderNeeded {
                self.redraw.request();
                continue;
            }
            info!(screen = self.report.screen.name(), ?action, "action");
            self.report.actions.push(action);
        }
    }

    fn render(&mut self) {
        let mut list = DisplayList::new(self.engine.size());
        let Ok(()) = self.engine.render(&mut list, self.now_ms());
        self.report.frames += 1;
        debug!(frame = self.report.frames, commands = list.len(), "rendered");
        self.report.last_frame = list;
    }

    fn on_tick(&mut self, count: u64) {
        self.report.ticks = count;
        let mut actions = self.engine.set_time(wall_clock());
        actions.extend(self.engine.tick_second());
        self.handle(actions);
    }
}

/// Run `config.screen` for `config.run_secs` and report what happened.
///
/// # Errors
///
/// Returns [`HostError`] when the screen cannot be mounted or a gesture fails.
pub async fn run(config: &GalleryConfig) -> Result<RunReport, HostError> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let engine = EngineCore::new(config.screen, config.size, seed, 0.0)?;
    info!(screen = config.screen.name(), seed, width = config.size.width, height = config.size.height, "mounted");

    let mut host = Host {
        gestures: GestureTracker::new(),
        redraw: Redraw::new(),
        started: Instant::now(),
        report: RunReport {
            screen: config.screen,
            seed,
            frames: 0,
            ticks: 0,
            actions: Vec::new(),
            last_frame: DisplayList::new(engine.size()),
        },
        engine,
    };

    let initial = host.engine.set_time(wall_clock());
    host.handle(initial);
    host.redraw.request();

    let frame = Duration::from_millis(config.frame_ms);
    let deadline = host.started + Duration::from_secs(config.run_secs);
    let mut ticker = config.screen.ticks().then(|| Ticker::start(Duration::from_millis(TICK_INTERVAL_MS)));
    let mut frames = tokio::time::interval(frame);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut cues: VecDeque<(Duration, Cue)> = script::demo_script(config.screen).into();
    let mut animations = Animations::new();
    let mut drag: Option<Drag> = None;

    loop {
        let next_cue = cues.front().map(|(at, _)| host.started + *at);
        let animating = host.engine.is_animating(host.now_ms());
        tokio::select! {
            () = tokio::time::sleep_until(deadline) => break,
            () = host.redraw.wait() => host.render(),
            Some(count) = next_tick(&mut ticker) => host.on_tick(count),
            _ = frames.tick(), if animating => host.redraw.request(),
            () = sleep_until_opt(next_cue) => {
                let Some((_, cue)) = cues.pop_front() else { continue };
                match script::resolve(cue, &host.engine) {
                    Some(Gesture::Tap(at)) => {
                        let mut events = host.gestures.pointer_down(at);
                        events.extend(host.gestures.pointer_up(at));
                        host.feed(events)?;
                    }
                    Some(Gesture::Drag { from, to }) => {
                        if animations.is_running(DRAG_KEY) {
                            warn!(?cue, "drag already in flight, restarting");
                        }
                        let events = host.gestures.pointer_down(from);
                        host.feed(events)?;
                        let progress = animations.start(DRAG_KEY, DRAG_DURATION, Easing::FastOutSlowIn, frame);
                        drag = Some(Drag { from, to, progress });
                    }
                    None => warn!(?cue, "cue has no target on this screen"),
                }
            }
            step = next_progress(&mut drag) => match step {
                Some((at, done)) => {
                    let mut events = host.gestures.pointer_move(at);
                    if done {
                        events.extend(host.gestures.pointer_up(at));
                        animations.stop(DRAG_KEY);
                        drag = None;
                    }
                    host.feed(events)?;
                }
                None => {
                    let events = host.gestures.cancel();
                    drag = None;
                    host.feed(events)?;
                }
            },
        }
    }

    if let Some(ticker) = &ticker {
        ticker.stop();
        host.report.ticks = ticker.count();
    }
    info!(
        screen = config.screen.name(),
        frames = host.report.frames,
        ticks = host.report.ticks,
        actions = host.report.actions.len(),
        "run finished"
    );
    Ok(host.report)
}

async fn next_tick(ticker: &mut Option<Ticker>) -> Option<u64> {
    match ticker {
        Some(ticker) => ticker.tick().await,
        None => std::future::pending().await,
    }
}

async fn sleep_until_opt(at: Option<Instant>) {
    match at {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}

/// Next pointer position of the drag and whether it is the last one.
/// `None` when the progress task went away before finishing.
async fn next_progress(drag: &mut Option<Drag>) -> Option<(Point, bool)> {
    let Some(drag) = drag else {
        return std::future::pending().await;
    };
    drag.progress.changed().await.ok()?;
    let p = *drag.progress.borrow_and_update();
    Some((drag.from.lerp(drag.to, p), p >= 1.0))
}

/// Local wall-clock time, falling back to UTC when the offset is unknown.
fn wall_clock() -> ClockTime {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    ClockTime::new(u32::from(now.hour()), u32::from(now.minute()), u32::from(now.second())).unwrap_or_default()
}
