use std::time::{Duration, Instant};

/// Easing curve applied to linear progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out: fast start, gentle landing
    #[default]
    Power2Out,
}

impl Ease {
    /// Map linear progress in [0, 1] to eased progress in [0, 1]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// A single value animated from `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    delay: Duration,
    duration: Duration,
    ease: Ease,
}

impl Tween {
    pub fn new(from: f32, to: f32, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            delay: Duration::ZERO,
            duration,
            ease: Ease::default(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// When the tween reaches its target
    pub fn end_time(&self) -> Instant {
        self.start + self.delay + self.duration
    }

    /// Eased progress at `now`; 0 during the delay, 1 once finished
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return if now >= self.start + self.delay { 1.0 } else { 0.0 };
        }

        let elapsed = now.saturating_duration_since(self.start + self.delay);
        let linear = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.ease.apply(linear)
    }

    pub fn value_at(&self, now: Instant) -> f32 {
        self.from + (self.to - self.from) * self.progress(now)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.end_time()
    }
}

#[cfg(test)]
#[path = "tween_tests.rs"]
mod tween_tests;
