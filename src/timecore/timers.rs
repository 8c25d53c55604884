//! `timecore::timers` submodule implements [`Timer`] - countdown that is advanced by frame time.
//!

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// [`TimerMode`] enum lists behaviours of [`Timer`] after it finishes.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimerMode {
    /// Timer finishes once and stays finished until it is reset.
    ///
    #[default]
    Once,
    /// Timer starts over every time it finishes.
    ///
    Repeating,
}

/// [`Timer`] struct counts time towards its duration.
///
/// # Example
/// ```rust
/// # use ggpatterns::timecore::timers::{Timer, TimerMode};
/// # use std::time::Duration;
/// let mut cooldown: Timer = Timer::new(Duration::from_millis(500), TimerMode::Once);
///
/// assert_eq!(cooldown.tick(Duration::from_millis(300)), 0);
/// assert!(!cooldown.finished());
/// assert_eq!(cooldown.remaining(), Duration::from_millis(200));
///
/// assert_eq!(cooldown.tick(Duration::from_millis(300)), 1);
/// assert!(cooldown.finished());
/// assert!(cooldown.just_finished());
///
/// let mut spawner: Timer = Timer::new(Duration::from_secs(1), TimerMode::Repeating);
/// assert_eq!(spawner.tick(Duration::from_millis(2500)), 2);
/// assert_eq!(spawner.elapsed(), Duration::from_millis(500));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Timer {
    /// Time it takes for timer to finish.
    ///
    duration: Duration,
    /// Time that passed since timer was started (or last repeat).
    ///
    elapsed: Duration,
    /// Behaviour after finishing.
    ///
    mode: TimerMode,
    /// Whether timer ignores ticks.
    ///
    paused: bool,
    /// Whether timer has finished (for repeating timers - during last tick).
    ///
    finished: bool,
    /// How many times timer finished during last tick.
    ///
    times_finished_this_tick: u32,
}
impl Timer {
    /// Creates new timer.
    ///
    pub fn new(duration: Duration, mode: TimerMode) -> Self {
        Timer {
            duration,
            elapsed: Duration::ZERO,
            mode,
            paused: false,
            finished: false,
            times_finished_this_tick: 0,
        }
    }

    /// Advances timer and returns how many times it finished during this tick.
    ///
    /// Repeating timer can finish several times if `delta` is longer than its duration;
    /// repeating timer with zero duration finishes exactly once per tick.
    /// Paused timers and finished [`TimerMode::Once`] timers do nothing.
    ///
    pub fn tick(&mut self, delta: Duration) -> u32 {
        self.times_finished_this_tick = 0;
        if self.paused {
            return 0;
        }

        match self.mode {
            TimerMode::Once => {
                if self.finished {
                    return 0;
                }
                self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
                if self.elapsed >= self.duration {
                    self.finished = true;
                    self.times_finished_this_tick = 1;
                }
            }
            TimerMode::Repeating => {
                let elapsed: Duration = self.elapsed.saturating_add(delta);
                if self.duration.is_zero() {
                    self.elapsed = Duration::ZERO;
                    self.times_finished_this_tick = 1;
                } else {
                    let (elapsed, duration) = (elapsed.as_nanos(), self.duration.as_nanos());
                    self.times_finished_this_tick =
                        u32::try_from(elapsed / duration).unwrap_or(u32::MAX);
                    self.elapsed = Duration::from_nanos(
                        u64::try_from(elapsed % duration).unwrap_or(u64::MAX),
                    );
                }
                self.finished = self.times_finished_this_tick > 0;
            }
        }
        self.times_finished_this_tick
    }

    /// Returns whether timer has finished.
    ///
    /// For repeating timers that is `true` only if timer finished during the last tick.
    ///
    pub fn finished(&self) -> bool {
        self.finished
    }
    /// Returns whether timer finished during the last tick.
    ///
    pub fn just_finished(&self) -> bool {
        self.times_finished_this_tick > 0
    }
    /// Returns how many times timer finished during the last tick.
    ///
    pub fn times_finished_this_tick(&self) -> u32 {
        self.times_finished_this_tick
    }

    /// Returns time that passed since timer was started (or since last repeat).
    ///
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
    /// Returns time left until timer finishes.
    ///
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }
    /// Returns progress of timer in `[0.0, 1.0]`.
    ///
    /// Timer with zero duration is always complete.
    ///
    pub fn fraction(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Returns duration of timer.
    ///
    pub fn duration(&self) -> Duration {
        self.duration
    }
    /// Sets duration of timer.
    ///
    /// Elapsed time is kept, so timer that has already passed new duration finishes on the next tick,
    /// and finished timer whose duration grows beyond elapsed time continues counting.
    ///
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
        if self.elapsed < duration {
            self.finished = false;
        }
    }
    /// Returns mode of timer.
    ///
    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    /// Stops timer from advancing.
    ///
    pub fn pause(&mut self) {
        self.paused = true;
    }
    /// Lets timer advance again.
    ///
    pub fn unpause(&mut self) {
        self.paused = false;
    }
    /// Returns whether timer is paused.
    ///
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Resets timer to its initial state (pause state is kept).
    ///
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.finished = false;
        self.times_finished_this_tick = 0;
    }
}
