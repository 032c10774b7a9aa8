//! Staggered entrance for result cards
//!
//! Each card drops in from above, fading in and shrinking from 1.5x to its
//! natural size. Card `i` starts `i * stagger` after the first.

use std::time::{Duration, Instant};

use super::Tween;

/// Time each card takes to settle
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(200);

/// Default delay between consecutive cards
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(100);

/// Starting vertical offset, in rows (negative is up)
pub const START_OFFSET_ROWS: f32 = -3.0;

pub const START_SCALE: f32 = 1.5;

/// Visual state of one card at a point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFrame {
    pub offset_y: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl CardFrame {
    pub const SETTLED: CardFrame = CardFrame {
        offset_y: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    /// Frame for eased progress `p` in [0, 1]
    fn at_progress(p: f32) -> Self {
        Self {
            offset_y: START_OFFSET_ROWS * (1.0 - p),
            opacity: p,
            scale: START_SCALE + (1.0 - START_SCALE) * p,
        }
    }
}

#[derive(Debug)]
pub struct EntranceAnimation {
    enabled: bool,
    stagger: Duration,
    started_at: Option<Instant>,
    card_count: usize,
}

impl Default for EntranceAnimation {
    fn default() -> Self {
        Self::new(true, DEFAULT_STAGGER)
    }
}

impl EntranceAnimation {
    pub fn new(enabled: bool, stagger: Duration) -> Self {
        Self {
            enabled,
            stagger,
            started_at: None,
            card_count: 0,
        }
    }

    /// Play the entrance over `card_count` cards, restarting if already running
    pub fn start(&mut self, now: Instant, card_count: usize) {
        if !self.enabled || card_count == 0 {
            self.started_at = None;
            self.card_count = 0;
            return;
        }

        self.started_at = Some(now);
        self.card_count = card_count;
    }

    fn card_tween(&self, start: Instant, index: usize) -> Tween {
        let delay = self.stagger.saturating_mul(index.min(u32::MAX as usize) as u32);
        Tween::new(0.0, 1.0, start, ENTRANCE_DURATION).with_delay(delay)
    }

    /// Frame for card `index` at `now`
    pub fn frame(&self, index: usize, now: Instant) -> CardFrame {
        let Some(start) = self.started_at else {
            return CardFrame::SETTLED;
        };
        if index >= self.card_count {
            return CardFrame::SETTLED;
        }

        let tween = self.card_tween(start, index);
        CardFrame::at_progress(tween.value_at(now))
    }

    /// When the last card settles
    pub fn end_time(&self) -> Option<Instant> {
        let start = self.started_at?;
        let last = self.card_count.saturating_sub(1);
        Some(self.card_tween(start, last).end_time())
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.end_time().is_some_and(|end| now < end)
    }

    /// Drop the animation once every card has settled
    pub fn update(&mut self, now: Instant) {
        if self.started_at.is_some() && !self.is_active(now) {
            self.started_at = None;
            self.card_count = 0;
        }
    }
}

#[cfg(test)]
#[path = "entrance_tests.rs"]
mod entrance_tests;
