//! Animation module
//!
//! Time-based tweens for the search button and the result cards. Nothing here
//! reads the clock: every call takes `now`, so frames are reproducible in tests.

mod button;
mod entrance;
mod tween;

pub use button::{ButtonAnimator, ButtonEvent};
pub use entrance::{CardFrame, EntranceAnimation};
pub use tween::{Ease, Tween};
