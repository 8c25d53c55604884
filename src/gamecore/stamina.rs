//! `gamecore::stamina` submodule implements [`Stamina`] - resource that is spent by actions
//! and regenerates over time.
//!

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// [`StaminaSettings`] struct configures [`Stamina`].
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct StaminaSettings {
    /// Maximal (and initial) amount of stamina.
    ///
    pub max_stamina: f32,
    /// Stamina regenerated per second.
    ///
    pub regeneration_rate: f32,
    /// Time after last use before regeneration starts.
    ///
    pub regeneration_delay: Duration,
    /// Amount of stamina that exhausted entity has to regain before it can act again.
    ///
    pub exhaustion_threshold: f32,
}
impl Default for StaminaSettings {
    fn default() -> Self {
        StaminaSettings {
            max_stamina: 100.0,
            regeneration_rate: 20.0,
            regeneration_delay: Duration::from_secs(1),
            exhaustion_threshold: 25.0,
        }
    }
}

/// [`Stamina`] struct tracks stamina of an entity.
///
/// When stamina hits zero, entity becomes exhausted and cannot spend stamina
/// until it regenerates up to [`StaminaSettings::exhaustion_threshold`].
///
/// # Example
/// ```rust
/// # use ggpatterns::gamecore::stamina::{Stamina, StaminaSettings};
/// # use std::time::Duration;
/// let mut stamina: Stamina = Stamina::new(StaminaSettings {
///     max_stamina: 30.0,
///     regeneration_rate: 10.0,
///     regeneration_delay: Duration::ZERO,
///     exhaustion_threshold: 20.0,
/// });
///
/// assert!(stamina.try_consume(30.0));
/// assert!(stamina.is_exhausted());
/// assert!(!stamina.try_consume(1.0));
///
/// stamina.tick(Duration::from_secs(2));
/// assert_eq!(stamina.current(), 20.0);
/// assert!(!stamina.is_exhausted());
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Stamina {
    /// Settings.
    ///
    settings: StaminaSettings,
    /// Current stamina.
    ///
    current: f32,
    /// Whether entity is exhausted.
    ///
    exhausted: bool,
    /// Time since stamina was last spent.
    ///
    since_use: Duration,
}
impl Stamina {
    /// Creates full stamina.
    ///
    pub fn new(settings: StaminaSettings) -> Self {
        Stamina {
            settings,
            current: settings.max_stamina,
            exhausted: false,
            since_use: settings.regeneration_delay,
        }
    }

    /// Records usage, exhausting entity if stamina ran out.
    ///
    fn spend(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
        self.since_use = Duration::ZERO;
        if self.current <= 0.0 {
            self.exhausted = true;
        }
    }

    /// Spends `amount` of stamina if there is enough of it.
    ///
    /// Either the whole amount is spent or nothing is;
    /// exhausted entity cannot spend stamina at all.
    ///
    pub fn try_consume(&mut self, amount: f32) -> bool {
        if self.exhausted || amount.is_nan() || amount < 0.0 || amount > self.current {
            return false;
        }
        self.spend(amount);
        true
    }
    /// Continuously spends stamina at `rate` per second during `delta`
    /// and returns whether entity can keep going.
    ///
    /// Drain stops at zero and exhausts entity.
    ///
    pub fn drain(&mut self, rate: f32, delta: Duration) -> bool {
        if self.exhausted {
            return false;
        }
        if rate > 0.0 {
            self.spend(rate * delta.as_secs_f32());
        }
        !self.exhausted
    }

    /// Advances regeneration.
    ///
    /// Only the part of `delta` that comes after regeneration delay regenerates stamina.
    ///
    pub fn tick(&mut self, delta: Duration) {
        let delay: Duration = self.settings.regeneration_delay;
        let before: Duration = self.since_use;
        self.since_use = self.since_use.saturating_add(delta);
        if self.since_use <= delay {
            return;
        }

        let regenerating: Duration = self.since_use - before.max(delay);
        self.current = (self.current
            + self.settings.regeneration_rate * regenerating.as_secs_f32())
        .min(self.settings.max_stamina);
        if self.exhausted && self.current >= self.settings.exhaustion_threshold {
            self.exhausted = false;
        }
    }

    /// Returns whether entity is exhausted.
    ///
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
    /// Returns current stamina.
    ///
    pub fn current(&self) -> f32 {
        self.current
    }
    /// Returns part of maximal stamina that is left, in `[0.0, 1.0]`.
    ///
    pub fn fraction(&self) -> f32 {
        if self.settings.max_stamina > 0.0 {
            self.current / self.settings.max_stamina
        } else {
            0.0
        }
    }
    /// Returns settings.
    ///
    pub fn settings(&self) -> &StaminaSettings {
        &self.settings
    }
}
impl Default for Stamina {
    fn default() -> Self {
        Stamina::new(StaminaSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{Stamina, StaminaSettings};
    use std::time::Duration;

    /// Stamina of 100 that regenerates 10 per second after 2 seconds.
    ///
    fn settings() -> StaminaSettings {
        StaminaSettings {
            max_stamina: 100.0,
            regeneration_rate: 10.0,
            regeneration_delay: Duration::from_secs(2),
            exhaustion_threshold: 30.0,
        }
    }

    #[test]
    fn consuming() {
        let mut stamina: Stamina = Stamina::new(settings());
        assert!(stamina.try_consume(60.0));
        assert!(!stamina.try_consume(50.0));
        assert_eq!(stamina.current(), 40.0);
        assert!(!stamina.try_consume(-5.0));
        assert!(stamina.try_consume(40.0));
        assert!(stamina.is_exhausted());
        assert_eq!(stamina.fraction(), 0.0);
    }

    #[test]
    fn regeneration_delay() {
        let mut stamina: Stamina = Stamina::new(settings());
        assert!(stamina.try_consume(50.0));

        stamina.tick(Duration::from_secs(1));
        assert_eq!(stamina.current(), 50.0);
        // one second of delay left, one second of regeneration
        stamina.tick(Duration::from_secs(2));
        assert_eq!(stamina.current(), 60.0);
        stamina.tick(Duration::from_secs(100));
        assert_eq!(stamina.current(), 100.0);
    }

    #[test]
    fn exhaustion() {
        let mut stamina: Stamina = Stamina::new(settings());
        assert!(stamina.drain(25.0, Duration::from_secs(2)));
        assert_eq!(stamina.current(), 50.0);
        assert!(!stamina.drain(25.0, Duration::from_secs(3)));
        assert!(stamina.is_exhausted());
        assert_eq!(stamina.current(), 0.0);
        assert!(!stamina.drain(1.0, Duration::from_secs(1)));

        stamina.tick(Duration::from_secs(4));
        assert_eq!(stamina.current(), 20.0);
        assert!(stamina.is_exhausted());
        assert!(!stamina.try_consume(5.0));

        stamina.tick(Duration::from_secs(1));
        assert!(!stamina.is_exhausted());
        assert!(stamina.try_consume(5.0));
    }
}
