//! `gamecore::health` submodule implements [`Health`] - hit points with invulnerability frames.
//!

use crate::poolcore::instances::Poolable;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// [`HealthSettings`] struct configures [`Health`].
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct HealthSettings {
    /// Maximal (and initial) amount of health.
    ///
    pub max_health: f32,
    /// How long entity ignores damage after being hit.
    ///
    pub invulnerability: Duration,
}
impl Default for HealthSettings {
    fn default() -> Self {
        HealthSettings {
            max_health: 100.0,
            invulnerability: Duration::from_millis(500),
        }
    }
}

/// [`IgnoreReason`] enum lists reasons for which damage could be ignored.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// Entity was hit recently.
    ///
    Invulnerable,
    /// Entity is already dead.
    ///
    Dead,
    /// Damage amount is zero, negative or not a number.
    ///
    NonPositive,
}

/// [`DamageOutcome`] enum describes what damage did to [`Health`].
///
#[derive(Copy, Clone, Debug, PartialEq)]
#[allow(variant_size_differences)]
pub enum DamageOutcome {
    /// Entity survived the hit.
    ///
    Damaged {
        /// Health left after the hit.
        ///
        remaining: f32,
    },
    /// Entity died from the hit.
    ///
    Killed,
    /// Damage had no effect.
    ///
    Ignored(IgnoreReason),
}

/// [`Health`] struct tracks hit points of an entity.
///
/// Every hit that does not kill makes entity invulnerable for
/// [`HealthSettings::invulnerability`], during which further damage is ignored.
/// Invulnerability runs out as [`Health::tick`] is called.
///
/// [`Health`] implements [`Poolable`], and pooled entities regain full health when they are released.
///
/// # Example
/// ```rust
/// # use ggpatterns::gamecore::health::{DamageOutcome, Health, HealthSettings, IgnoreReason};
/// # use std::time::Duration;
/// let mut health: Health = Health::new(HealthSettings {
///     max_health: 50.0,
///     invulnerability: Duration::from_secs(1),
/// });
///
/// assert_eq!(health.take_damage(20.0), DamageOutcome::Damaged { remaining: 30.0 });
/// assert_eq!(
///     health.take_damage(20.0),
///     DamageOutcome::Ignored(IgnoreReason::Invulnerable)
/// );
///
/// health.tick(Duration::from_secs(1));
/// assert_eq!(health.take_damage(100.0), DamageOutcome::Killed);
/// assert!(!health.is_alive());
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Health {
    /// Settings.
    ///
    settings: HealthSettings,
    /// Current health.
    ///
    current: f32,
    /// Time left until entity can be damaged again.
    ///
    invulnerable_for: Duration,
    /// Whether entity is active.
    ///
    active: bool,
}
impl Health {
    /// Creates full health.
    ///
    pub fn new(settings: HealthSettings) -> Self {
        Health {
            settings,
            current: settings.max_health,
            invulnerable_for: Duration::ZERO,
            active: true,
        }
    }

    /// Applies damage.
    ///
    pub fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        if !self.is_alive() {
            return DamageOutcome::Ignored(IgnoreReason::Dead);
        }
        if amount.is_nan() || amount <= 0.0 {
            return DamageOutcome::Ignored(IgnoreReason::NonPositive);
        }
        if self.is_invulnerable() {
            return DamageOutcome::Ignored(IgnoreReason::Invulnerable);
        }

        self.current -= amount;
        if self.current <= 0.0 {
            self.current = 0.0;
            self.invulnerable_for = Duration::ZERO;
            debug!("Entity was killed by {} damage", amount);
            return DamageOutcome::Killed;
        }
        self.invulnerable_for = self.settings.invulnerability;
        DamageOutcome::Damaged {
            remaining: self.current,
        }
    }
    /// Heals entity and returns amount that was actually healed.
    ///
    /// Health never exceeds maximum; dead entities cannot be healed (use [`Health::revive`]).
    ///
    pub fn heal(&mut self, amount: f32) -> f32 {
        if !self.is_alive() || amount.is_nan() || amount <= 0.0 {
            return 0.0;
        }
        let healed: f32 = amount.min(self.settings.max_health - self.current);
        self.current += healed;
        healed
    }

    /// Brings entity back to life with full health.
    ///
    pub fn revive(&mut self) {
        self.current = self.settings.max_health;
        self.invulnerable_for = Duration::ZERO;
    }
    /// Kills entity regardless of invulnerability.
    ///
    pub fn kill(&mut self) {
        self.current = 0.0;
        self.invulnerable_for = Duration::ZERO;
    }

    /// Advances invulnerability timer.
    ///
    pub fn tick(&mut self, delta: Duration) {
        self.invulnerable_for = self.invulnerable_for.saturating_sub(delta);
    }

    /// Returns whether entity is alive.
    ///
    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }
    /// Returns whether damage is currently ignored.
    ///
    pub fn is_invulnerable(&self) -> bool {
        !self.invulnerable_for.is_zero()
    }
    /// Returns current health.
    ///
    pub fn current(&self) -> f32 {
        self.current
    }
    /// Returns part of maximal health that is left, in `[0.0, 1.0]`.
    ///
    pub fn fraction(&self) -> f32 {
        if self.settings.max_health > 0.0 {
            self.current / self.settings.max_health
        } else {
            0.0
        }
    }
    /// Returns settings.
    ///
    pub fn settings(&self) -> &HealthSettings {
        &self.settings
    }
    /// Returns whether entity is active.
    ///
    pub fn is_active(&self) -> bool {
        self.active
    }
}
impl Default for Health {
    fn default() -> Self {
        Health::new(HealthSettings::default())
    }
}
impl Poolable for Health {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn reset(&mut self) {
        self.revive();
    }
}

#[cfg(test)]
mod tests {
    use super::{DamageOutcome, Health, HealthSettings, IgnoreReason};
    use std::time::Duration;

    /// Health of 100 with one second of invulnerability.
    ///
    fn settings() -> HealthSettings {
        HealthSettings {
            max_health: 100.0,
            invulnerability: Duration::from_secs(1),
        }
    }

    #[test]
    fn damage_and_invulnerability() {
        let mut health: Health = Health::new(settings());
        assert_eq!(
            health.take_damage(0.0),
            DamageOutcome::Ignored(IgnoreReason::NonPositive)
        );
        assert_eq!(
            health.take_damage(f32::NAN),
            DamageOutcome::Ignored(IgnoreReason::NonPositive)
        );
        assert!(!health.is_invulnerable());

        assert_eq!(
            health.take_damage(25.0),
            DamageOutcome::Damaged { remaining: 75.0 }
        );
        assert!(health.is_invulnerable());
        health.tick(Duration::from_millis(600));
        assert_eq!(
            health.take_damage(25.0),
            DamageOutcome::Ignored(IgnoreReason::Invulnerable)
        );
        health.tick(Duration::from_millis(600));
        assert_eq!(
            health.take_damage(25.0),
            DamageOutcome::Damaged { remaining: 50.0 }
        );
        assert_eq!(health.fraction(), 0.5);
    }

    #[test]
    fn death_and_healing() {
        let mut health: Health = Health::new(settings());
        assert_eq!(health.take_damage(10.0), DamageOutcome::Damaged { remaining: 90.0 });
        assert_eq!(health.heal(30.0), 10.0);
        assert_eq!(health.current(), 100.0);

        health.kill();
        assert!(!health.is_alive());
        assert_eq!(health.heal(50.0), 0.0);
        assert_eq!(
            health.take_damage(10.0),
            DamageOutcome::Ignored(IgnoreReason::Dead)
        );

        health.revive();
        assert!(health.is_alive());
        assert_eq!(health.take_damage(150.0), DamageOutcome::Killed);
        assert_eq!(health.current(), 0.0);
        assert!(!health.is_invulnerable());
    }

    #[test]
    fn pooled_health() {
        use crate::poolcore::{
            identifiers::TemplateId,
            instances::{Placement, Pooled},
            registry::PoolRegistry,
            templates::Prefab,
        };

        let mut registry: PoolRegistry<Health> = PoolRegistry::new();
        let template_id: TemplateId =
            registry.register(Prefab::new("enemy", Health::new(settings())));

        let mut enemy: Pooled<Health> = registry
            .acquire(template_id, Placement::default())
            .expect("Template is registered");
        assert!(enemy.is_active());
        assert_eq!(enemy.take_damage(200.0), DamageOutcome::Killed);
        registry.release(enemy).expect("Enemy came from this registry");

        let enemy: Pooled<Health> = registry
            .acquire(template_id, Placement::default())
            .expect("Template is registered");
        assert!(enemy.is_alive());
        assert_eq!(enemy.fraction(), 1.0);
        registry.release(enemy).expect("Enemy came from this registry");
    }
}
