//! Search button micro-animations
//!
//! Press: scale down to 0.7 over 100ms, back to 1.0 over 200ms, then report
//! completion so the caller can run the search. Hover: scale to 1.2 on enter
//! and back to 1.0 on leave over 200ms.
//!
//! Starting any tween cancels the one in flight. A press that gets cancelled
//! this way still reports completion on the next update, so a hover never
//! swallows a search.

use std::time::{Duration, Instant};

use super::Tween;

pub const REST_SCALE: f32 = 1.0;
pub const PRESS_SCALE: f32 = 0.7;
pub const HOVER_SCALE: f32 = 1.2;

const PRESS_DOWN_DURATION: Duration = Duration::from_millis(100);
const PRESS_UP_DURATION: Duration = Duration::from_millis(200);
const HOVER_DURATION: Duration = Duration::from_millis(200);

/// Emitted by `ButtonAnimator::update`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// The press animation finished; time to search
    PressComplete,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ButtonTween {
    Hover(Tween),
    PressDown(Tween),
    PressUp(Tween),
}

impl ButtonTween {
    fn tween(&self) -> &Tween {
        match self {
            ButtonTween::Hover(t) | ButtonTween::PressDown(t) | ButtonTween::PressUp(t) => t,
        }
    }

    fn is_press(&self) -> bool {
        matches!(self, ButtonTween::PressDown(_) | ButtonTween::PressUp(_))
    }
}

#[derive(Debug)]
pub struct ButtonAnimator {
    enabled: bool,
    scale: f32,
    active: Option<ButtonTween>,
    hovered: bool,
    pending_press: bool,
}

impl Default for ButtonAnimator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ButtonAnimator {
    /// Create an animator; when disabled, scale never changes and presses
    /// complete on the next update
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            scale: REST_SCALE,
            active: None,
            hovered: false,
            pending_press: false,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Whether a press is waiting to report completion
    pub fn is_pressing(&self) -> bool {
        self.pending_press
    }

    /// Start the press animation
    pub fn press(&mut self, now: Instant) {
        self.pending_press = true;
        if !self.enabled {
            return;
        }

        self.active = Some(ButtonTween::PressDown(Tween::new(
            self.scale,
            PRESS_SCALE,
            now,
            PRESS_DOWN_DURATION,
        )));
    }

    /// Abandon a press without reporting completion
    ///
    /// A running press tween eases back to the hover or rest scale.
    pub fn cancel_press(&mut self, now: Instant) {
        self.pending_press = false;

        if let Some(active) = self.active
            && active.is_press()
        {
            let target = if self.hovered { HOVER_SCALE } else { REST_SCALE };
            self.start_hover(target, now);
        }
    }

    /// Pointer entered the button
    pub fn hover_enter(&mut self, now: Instant) {
        if self.hovered {
            return;
        }
        self.hovered = true;
        self.start_hover(HOVER_SCALE, now);
    }

    /// Pointer left the button
    pub fn hover_leave(&mut self, now: Instant) {
        if !self.hovered {
            return;
        }
        self.hovered = false;
        self.start_hover(REST_SCALE, now);
    }

    fn start_hover(&mut self, target: f32, now: Instant) {
        if !self.enabled {
            return;
        }

        if let Some(active) = self.active.take() {
            self.scale = active.tween().value_at(now);
            if active.is_press() {
                log::debug!("Press animation cancelled");
            }
        }

        self.active = Some(ButtonTween::Hover(Tween::new(
            self.scale,
            target,
            now,
            HOVER_DURATION,
        )));
    }

    /// Advance to `now`
    ///
    /// Returns `PressComplete` once per press, after the scale-up finishes or
    /// as soon as the press tween has been cancelled.
    pub fn update(&mut self, now: Instant) -> Option<ButtonEvent> {
        if let Some(ButtonTween::PressDown(down)) = self.active
            && down.is_finished(now)
        {
            // Chain from the scheduled end so late ticks don't stretch the press
            self.active = Some(ButtonTween::PressUp(Tween::new(
                PRESS_SCALE,
                REST_SCALE,
                down.end_time(),
                PRESS_UP_DURATION,
            )));
        }

        if let Some(active) = self.active {
            let tween = active.tween();
            self.scale = tween.value_at(now);
            if tween.is_finished(now) {
                self.scale = tween.target();
                self.active = None;
            }
        }

        let press_running = self.active.is_some_and(|a| a.is_press());
        if self.pending_press && !press_running {
            self.pending_press = false;
            return Some(ButtonEvent::PressComplete);
        }

        None
    }
}

#[cfg(test)]
#[path = "button_tests.rs"]
mod button_tests;
