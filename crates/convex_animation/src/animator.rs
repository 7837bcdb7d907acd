//! Curve position animator
//!
//! Drives a single scalar (the curve center fraction) from one value to
//! another over a fixed duration. There is at most one session at a time:
//! `begin` replaces whatever was running, with no queuing or blending.

use std::time::{Duration, Instant};

use crate::easing::Easing;
use crate::values::Interpolate;

/// One timed interpolation from `from` to `to`
#[derive(Clone, Copy, Debug)]
pub struct AnimationSession {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl AnimationSession {
    pub fn new(from: f32, to: f32, started: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            started,
            duration,
            easing,
        }
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn to(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear time progress in `[0, 1]`
    pub fn time_progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether the session has reached its duration
    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// Eased value at `now`; exactly `to` once complete
    pub fn value_at(&self, now: Instant) -> f32 {
        if self.is_complete(now) {
            return self.to;
        }
        let progress = self.easing.apply(self.time_progress(now));
        self.from.lerp(&self.to, progress)
    }
}

/// Animator for the curve center fraction
#[derive(Clone, Debug)]
pub struct PositionAnimator {
    session: Option<AnimationSession>,
    /// Value reported when no session is running
    settled: f32,
}

impl PositionAnimator {
    /// Create an animator resting at `initial`
    pub fn new(initial: f32) -> Self {
        Self {
            session: None,
            settled: initial,
        }
    }

    /// Start a new session, cancelling any in-flight one
    pub fn begin(
        &mut self,
        from: f32,
        to: f32,
        duration: Duration,
        easing: Easing,
        now: Instant,
    ) {
        if let Some(previous) = self.session.take() {
            if !previous.is_complete(now) {
                tracing::debug!(
                    "replacing in-flight session {:.3} -> {:.3}",
                    previous.from(),
                    previous.to()
                );
            }
        }
        tracing::debug!("curve session {:.3} -> {:.3} over {:?}", from, to, duration);
        self.settled = to;
        self.session = Some(AnimationSession::new(from, to, now, duration, easing));
    }

    /// Current interpolated fraction.
    ///
    /// Once the running session completes it is dropped and every later read
    /// returns its target until the next `begin`.
    pub fn current_fraction(&mut self, now: Instant) -> f32 {
        match self.session {
            Some(session) if session.is_complete(now) => {
                self.session = None;
                self.settled = session.to();
                self.settled
            }
            Some(session) => session.value_at(now),
            None => self.settled,
        }
    }

    /// Whether a session is still running at `now`
    pub fn is_animating(&self, now: Instant) -> bool {
        self.session.is_some_and(|s| !s.is_complete(now))
    }

    /// The running session, if any
    pub fn session(&self) -> Option<&AnimationSession> {
        self.session.as_ref()
    }

    /// Value the animator is heading to (or resting at)
    pub fn target(&self) -> f32 {
        self.settled
    }

    /// Drop any running session and rest at its target
    pub fn snap_to_target(&mut self) {
        self.session = None;
    }

    /// Drop any running session and rest at `value`
    pub fn set_immediate(&mut self, value: f32) {
        self.session = None;
        self.settled = value;
    }
}
