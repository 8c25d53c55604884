//! `timecore::speedrun` submodule implements [`SpeedrunTimer`] - run timer with named splits,
//! and [`SpeedrunRecord`] that finished runs produce.
//!

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// [`TimerError`] enum lists errors of invalid [`SpeedrunTimer`] transitions.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum TimerError {
    /// Operation requires running timer.
    ///
    #[error("speedrun timer is not running")]
    NotRunning,
    /// Timer was already started.
    ///
    #[error("speedrun timer has already been started")]
    AlreadyStarted,
    /// Timer was already finished and should be reset first.
    ///
    #[error("speedrun timer has already finished")]
    AlreadyFinished,
}

/// [`SpeedrunState`] enum lists states of [`SpeedrunTimer`].
///
/// Allowed transitions are `Idle -> Running <-> Paused -> Finished`;
/// [`SpeedrunTimer::reset`] returns timer to `Idle` from any state.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpeedrunState {
    /// Timer has not started yet.
    ///
    #[default]
    Idle,
    /// Timer is counting.
    ///
    Running,
    /// Timer is paused.
    ///
    Paused,
    /// Run is over.
    ///
    Finished,
}

/// [`Split`] struct marks the moment when runner reached a checkpoint.
///
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Split {
    /// Name of checkpoint.
    ///
    pub label: String,
    /// Time since start of the run.
    ///
    pub time: Duration,
}

/// [`SplitComparison`] struct compares one split of a run against the same split of another run.
///
#[derive(Clone, Debug, PartialEq)]
pub struct SplitComparison {
    /// Name of checkpoint.
    ///
    pub label: String,
    /// Time of the split in compared run.
    ///
    pub time: Duration,
    /// Difference with the other run in seconds: negative means this run was ahead.
    ///
    /// `None` if the other run has no split with this label.
    ///
    pub delta: Option<f64>,
}

/// [`SpeedrunRecord`] struct is the result of finished run.
///
/// Records are serializable, so best runs can be saved with
/// [`ToFile`](crate::datacore::assets::ToFile).
///
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SpeedrunRecord {
    /// Splits in the order they were made.
    ///
    pub splits: Vec<Split>,
    /// Time of the whole run.
    ///
    pub total: Duration,
}
impl SpeedrunRecord {
    /// Compares every split of this run with the split that has the same label in `best`.
    ///
    pub fn compare(&self, best: &SpeedrunRecord) -> Vec<SplitComparison> {
        self.splits
            .iter()
            .map(|split| SplitComparison {
                label: split.label.clone(),
                time: split.time,
                delta: best
                    .splits
                    .iter()
                    .find(|other| other.label == split.label)
                    .map(|other| split.time.as_secs_f64() - other.time.as_secs_f64()),
            })
            .collect()
    }

    /// Returns whether this run is faster than the other one.
    ///
    pub fn is_better_than(&self, other: &SpeedrunRecord) -> bool {
        self.total < other.total
    }
}

/// [`SpeedrunTimer`] struct measures a run and records its splits.
///
/// # Example
/// ```rust
/// # use ggpatterns::timecore::speedrun::{SpeedrunRecord, SpeedrunTimer, TimerError};
/// # use std::time::Duration;
/// let mut timer: SpeedrunTimer = SpeedrunTimer::new();
/// assert_eq!(timer.pause(), Err(TimerError::NotRunning));
///
/// timer.start().expect("Timer is idle");
/// timer.tick(Duration::from_secs(30));
/// let _ = timer.split("forest").expect("Timer is running");
/// timer.tick(Duration::from_secs(45));
///
/// let record: SpeedrunRecord = timer.finish().expect("Timer is running");
/// assert_eq!(record.total, Duration::from_secs(75));
/// assert_eq!(record.splits[0].time, Duration::from_secs(30));
/// assert_eq!(timer.start(), Err(TimerError::AlreadyFinished));
/// ```
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpeedrunTimer {
    /// Current state.
    ///
    state: SpeedrunState,
    /// Time of the run so far.
    ///
    elapsed: Duration,
    /// Splits made so far.
    ///
    splits: Vec<Split>,
}
impl SpeedrunTimer {
    /// Creates idle timer.
    ///
    pub fn new() -> Self {
        SpeedrunTimer::default()
    }

    /// Returns error that describes why timer cannot be changed, if it is not in `expected` state.
    ///
    fn ensure(&self, expected: SpeedrunState) -> Result<(), TimerError> {
        match (self.state, expected) {
            (state, expected) if state == expected => Ok(()),
            (SpeedrunState::Finished, _) => Err(TimerError::AlreadyFinished),
            (SpeedrunState::Running | SpeedrunState::Paused, SpeedrunState::Idle) => {
                Err(TimerError::AlreadyStarted)
            }
            (SpeedrunState::Running, SpeedrunState::Paused) => Err(TimerError::AlreadyStarted),
            _ => Err(TimerError::NotRunning),
        }
    }

    /// Starts the run.
    ///
    /// # Errors
    /// Returns [`TimerError::AlreadyStarted`] if run is in progress and
    /// [`TimerError::AlreadyFinished`] if run is over.
    ///
    pub fn start(&mut self) -> Result<(), TimerError> {
        self.ensure(SpeedrunState::Idle)?;
        self.state = SpeedrunState::Running;
        info!("Speedrun started");
        Ok(())
    }
    /// Pauses running timer.
    ///
    /// # Errors
    /// Returns [`TimerError::NotRunning`] if timer is not running and
    /// [`TimerError::AlreadyFinished`] if run is over.
    ///
    pub fn pause(&mut self) -> Result<(), TimerError> {
        self.ensure(SpeedrunState::Running)?;
        self.state = SpeedrunState::Paused;
        Ok(())
    }
    /// Resumes paused timer.
    ///
    /// # Errors
    /// Returns [`TimerError::AlreadyStarted`] if timer is already running,
    /// [`TimerError::NotRunning`] if run was not started and
    /// [`TimerError::AlreadyFinished`] if run is over.
    ///
    pub fn resume(&mut self) -> Result<(), TimerError> {
        self.ensure(SpeedrunState::Paused)?;
        self.state = SpeedrunState::Running;
        Ok(())
    }

    /// Records split with given label and returns its time.
    ///
    /// # Errors
    /// Returns [`TimerError::NotRunning`] if timer is not running and
    /// [`TimerError::AlreadyFinished`] if run is over.
    ///
    pub fn split(&mut self, label: impl Into<String>) -> Result<Duration, TimerError> {
        self.ensure(SpeedrunState::Running)?;
        let split: Split = Split {
            label: label.into(),
            time: self.elapsed,
        };
        debug!("Split '{}' at {:?}", split.label, split.time);
        self.splits.push(split);
        Ok(self.elapsed)
    }
    /// Finishes the run (running or paused) and returns its record.
    ///
    /// # Errors
    /// Returns [`TimerError::NotRunning`] if run was not started and
    /// [`TimerError::AlreadyFinished`] if run is already over.
    ///
    pub fn finish(&mut self) -> Result<SpeedrunRecord, TimerError> {
        if self.state == SpeedrunState::Paused {
            self.state = SpeedrunState::Running;
        }
        self.ensure(SpeedrunState::Running)?;
        self.state = SpeedrunState::Finished;
        info!("Speedrun finished in {:?}", self.elapsed);
        Ok(SpeedrunRecord {
            splits: self.splits.clone(),
            total: self.elapsed,
        })
    }
    /// Returns timer to idle state, discarding the run.
    ///
    pub fn reset(&mut self) {
        *self = SpeedrunTimer::default();
    }

    /// Advances running timer.
    ///
    pub fn tick(&mut self, delta: Duration) {
        if self.state == SpeedrunState::Running {
            self.elapsed = self.elapsed.saturating_add(delta);
        }
    }

    /// Returns current state.
    ///
    pub fn state(&self) -> SpeedrunState {
        self.state
    }
    /// Returns time of the run so far.
    ///
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
    /// Returns splits made so far.
    ///
    pub fn splits(&self) -> &[Split] {
        &self.splits
    }
}

#[cfg(test)]
mod tests {
    use super::{SpeedrunRecord, SpeedrunState, SpeedrunTimer, Split, SplitComparison, TimerError};
    use std::time::Duration;

    #[test]
    fn transitions() {
        let mut timer: SpeedrunTimer = SpeedrunTimer::new();
        assert_eq!(timer.resume(), Err(TimerError::NotRunning));
        assert_eq!(timer.split("start"), Err(TimerError::NotRunning));
        assert_eq!(timer.finish(), Err(TimerError::NotRunning));

        timer.start().expect("Timer is idle");
        assert_eq!(timer.start(), Err(TimerError::AlreadyStarted));
        assert_eq!(timer.resume(), Err(TimerError::AlreadyStarted));

        timer.pause().expect("Timer is running");
        assert_eq!(timer.state(), SpeedrunState::Paused);
        assert_eq!(timer.pause(), Err(TimerError::NotRunning));
        assert_eq!(timer.start(), Err(TimerError::AlreadyStarted));
        timer.tick(Duration::from_secs(100));
        assert_eq!(timer.elapsed(), Duration::ZERO);

        timer.resume().expect("Timer is paused");
        timer.tick(Duration::from_secs(3));
        timer.pause().expect("Timer is running");
        let record: SpeedrunRecord = timer.finish().expect("Paused run can be finished");
        assert_eq!(record.total, Duration::from_secs(3));

        assert_eq!(timer.pause(), Err(TimerError::AlreadyFinished));
        assert_eq!(timer.finish(), Err(TimerError::AlreadyFinished));
        timer.reset();
        assert_eq!(timer, SpeedrunTimer::new());
    }

    #[test]
    fn comparing_records() {
        let mut timer: SpeedrunTimer = SpeedrunTimer::new();
        timer.start().expect("Timer is idle");
        timer.tick(Duration::from_secs(10));
        assert_eq!(timer.split("cave"), Ok(Duration::from_secs(10)));
        timer.tick(Duration::from_secs(20));
        assert_eq!(timer.split("castle"), Ok(Duration::from_secs(30)));
        assert_eq!(timer.splits().len(), 2);
        let run: SpeedrunRecord = timer.finish().expect("Timer is running");

        let best: SpeedrunRecord = SpeedrunRecord {
            splits: vec![Split {
                label: "cave".to_string(),
                time: Duration::from_secs(12),
            }],
            total: Duration::from_secs(40),
        };
        assert_eq!(
            run.compare(&best),
            vec![
                SplitComparison {
                    label: "cave".to_string(),
                    time: Duration::from_secs(10),
                    delta: Some(-2.0),
                },
                SplitComparison {
                    label: "castle".to_string(),
                    time: Duration::from_secs(30),
                    delta: None,
                },
            ]
        );
        assert!(run.is_better_than(&best));
        assert!(!best.is_better_than(&run));
    }

    #[test]
    fn huge_delta() {
        let mut timer: SpeedrunTimer = SpeedrunTimer::new();
        timer.start().expect("Timer is idle");
        timer.tick(Duration::from_secs(1));
        timer.tick(Duration::MAX);
        timer.tick(Duration::from_secs(1));
        assert_eq!(timer.elapsed(), Duration::MAX);
    }

    #[test]
    fn record_file() {
        use crate::datacore::assets::{tests::scratch_path, FromFile, ToFile};
        use std::path::PathBuf;

        let record: SpeedrunRecord = SpeedrunRecord {
            splits: vec![Split {
                label: "bridge".to_string(),
                time: Duration::from_millis(1500),
            }],
            total: Duration::from_millis(4200),
        };
        let path: PathBuf = scratch_path("speedrun.cbor");
        record.to_file(&path).expect("Temporary directory is writable");
        assert_eq!(
            SpeedrunRecord::from_file(&path).expect("Record was just saved"),
            record
        );
        let _ = std::fs::remove_file(path);
    }
}
