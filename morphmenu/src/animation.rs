//! Frame scheduling seam.
//!
//! Nothing in this crate owns a render loop. The host measures time with a
//! [`FrameClock`] and pushes it down the controller tree through [`Animate`].

use std::time::{Duration, Instant};

/// Something whose visual state advances with time.
pub trait Animate {
    /// Advance by `dt`. Returns true if anything is still moving.
    fn tick(&mut self, dt: Duration) -> bool;

    /// Returns true if a transition is in flight.
    fn is_animating(&self) -> bool;
}

/// Default cap on a single frame step.
pub const DEFAULT_MAX_FRAME: Duration = Duration::from_millis(64);

/// Measures real time between frames.
///
/// Long gaps (a stalled host, a debugger pause) are capped so springs never
/// jump across most of their travel in a single frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    max_frame: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: None,
            max_frame: DEFAULT_MAX_FRAME,
        }
    }

    pub fn with_max_frame(mut self, max_frame: Duration) -> Self {
        self.max_frame = max_frame;
        self
    }

    /// Elapsed time since the previous frame. The first frame is zero.
    pub fn frame(&mut self) -> Duration {
        self.frame_at(Instant::now())
    }

    /// Same as [`frame`](Self::frame) with an explicit timestamp.
    pub fn frame_at(&mut self, now: Instant) -> Duration {
        let dt = self
            .last
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last = Some(now);
        dt.min(self.max_frame)
    }

    /// Forget the previous frame, e.g. after the host slept while idle.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
