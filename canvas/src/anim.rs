//! Time-driven animation math.
//!
//! Nothing here owns a clock. Callers pass the current time in milliseconds
//! (any monotonic origin) so playback is deterministic and testable; the host
//! decides how often to sample it.

#[cfg(test)]
#[path = "anim_test.rs"]
mod anim_test;

use crate::geom::Point;

/// Easing curves mapping linear time `t` in [0,1] to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Standard material curve: quick start, long settle. `cubic-bezier(0.4, 0, 0.2, 1)`.
    #[default]
    FastOutSlowIn,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
        }
    }
}

/// Evaluate a CSS-style cubic bezier easing at `x`.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 || x >= 1.0 {
        return x;
    }
    let curve = |a: f64, b: f64, s: f64| {
        let ms = 1.0 - s;
        3.0 * ms * ms * s * a + 3.0 * ms * s * s * b + s * s * s
    };
    // x(s) is monotonic for control x in [0,1]; bisection always converges.
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    let mut s = x;
    for _ in 0..64 {
        let cx = curve(x1, x2, s);
        if (cx - x).abs() < 1e-9 {
            break;
        }
        if cx < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    curve(y1, y2, s)
}

/// What happens when an animation reaches its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Hold at 1.0.
    #[default]
    Once,
    /// Jump back to 0.0 and play again, forever.
    Restart,
}

/// A restartable one-shot or looping animation clock.
///
/// Restarting while playing drops the old run entirely: progress snaps to 0
/// and there is never more than one run in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub duration_ms: f64,
    pub easing: Easing,
    pub repeat: Repeat,
    started_at_ms: Option<f64>,
}

impl Animation {
    #[must_use]
    pub fn new(duration_ms: f64) -> Self {
        Self { duration_ms, easing: Easing::default(), repeat: Repeat::Once, started_at_ms: None }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Start (or restart) playback at `now_ms`.
    pub fn restart(&mut self, now_ms: f64) {
        self.started_at_ms = Some(now_ms);
    }

    /// Forget the current run; progress reads as 0 again.
    pub fn stop(&mut self) {
        self.started_at_ms = None;
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started_at_ms.is_some()
    }

    /// Whether the animation still changes over time at `now_ms`.
    #[must_use]
    pub fn is_running(&self, now_ms: f64) -> bool {
        match (self.started_at_ms, self.repeat) {
            (None, _) => false,
            (Some(_), Repeat::Restart) => true,
            (Some(_), Repeat::Once) => self.fraction(now_ms) < 1.0,
        }
    }

    /// Linear time fraction in [0,1].
    #[must_use]
    pub fn fraction(&self, now_ms: f64) -> f64 {
        let Some(start) = self.started_at_ms else {
            return 0.0;
        };
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = (now_ms - start).max(0.0);
        match self.repeat {
            Repeat::Once => (elapsed / self.duration_ms).min(1.0),
            Repeat::Restart => (elapsed % self.duration_ms) / self.duration_ms,
        }
    }

    /// Eased progress in [0,1].
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        self.easing.apply(self.fraction(now_ms))
    }
}

/// Values that can be blended linearly.
pub trait Lerp: Copy {
    #[must_use]
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, other: f64, t: f64) -> f64 {
        (other - self).mul_add(t, self)
    }
}

impl Lerp for Point {
    fn lerp(self, other: Point, t: f64) -> Point {
        Point::lerp(self, other, t)
    }
}

/// A value that animates toward whatever target it was last given.
///
/// Retargeting mid-flight starts the new run from the currently displayed
/// value, so motion never jumps.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    animation: Animation,
}

impl<T: Lerp + PartialEq> Tween<T> {
    #[must_use]
    pub fn new(initial: T, animation: Animation) -> Self {
        Self { from: initial, to: initial, animation }
    }

    #[must_use]
    pub fn target(&self) -> T {
        self.to
    }

    /// Animate from the value shown at `now_ms` to `target`.
    pub fn retarget(&mut self, target: T, now_ms: f64) {
        if target == self.to {
            return;
        }
        self.from = self.value(now_ms);
        self.to = target;
        self.animation.restart(now_ms);
    }

    /// Jump to `value` with no animation.
    pub fn snap(&mut self, value: T) {
        self.from = value;
        self.to = value;
        self.animation.stop();
    }

    #[must_use]
    pub fn value(&self, now_ms: f64) -> T {
        if !self.animation.is_started() {
            return self.to;
        }
        self.from.lerp(self.to, self.animation.progress(now_ms))
    }

    #[must_use]
    pub fn is_running(&self, now_ms: f64) -> bool {
        self.animation.is_running(now_ms)
    }
}
