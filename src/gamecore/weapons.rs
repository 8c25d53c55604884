//! `gamecore::weapons` submodule implements [`Weapon`] - magazine-fed weapon that can jam.
//!

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// [`WeaponSettings`] struct configures [`Weapon`].
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct WeaponSettings {
    /// Number of rounds in full magazine.
    ///
    pub magazine_size: u32,
    /// Probability that a shot jams the weapon, in `[0.0, 1.0]`.
    ///
    pub jam_chance: f64,
    /// Time after which jammed weapon clears itself.
    ///
    pub unjam_time: Duration,
}
impl Default for WeaponSettings {
    fn default() -> Self {
        WeaponSettings {
            magazine_size: 12,
            jam_chance: 0.05,
            unjam_time: Duration::from_millis(1500),
        }
    }
}

/// [`FireOutcome`] enum describes result of pulling the trigger.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FireOutcome {
    /// Round was fired.
    ///
    Fired,
    /// Weapon jammed on this shot; no round was spent.
    ///
    Jammed,
    /// Weapon is still jammed from an earlier shot.
    ///
    StillJammed,
    /// Magazine is empty.
    ///
    Empty,
}

/// [`Weapon`] struct tracks ammunition and jams of a weapon.
///
/// Randomness is supplied by the caller, which makes jams reproducible with seeded generators.
///
/// # Example
/// ```rust
/// # use ggpatterns::gamecore::weapons::{FireOutcome, Weapon, WeaponSettings};
/// # use rand::{rngs::StdRng, SeedableRng};
/// # use std::time::Duration;
/// let mut rng: StdRng = StdRng::seed_from_u64(7);
/// let mut pistol: Weapon = Weapon::new(WeaponSettings {
///     magazine_size: 2,
///     jam_chance: 0.0,
///     unjam_time: Duration::from_secs(1),
/// });
///
/// assert_eq!(pistol.fire(&mut rng), FireOutcome::Fired);
/// assert_eq!(pistol.fire(&mut rng), FireOutcome::Fired);
/// assert_eq!(pistol.fire(&mut rng), FireOutcome::Empty);
/// assert_eq!(pistol.reload(), 2);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Weapon {
    /// Settings.
    ///
    settings: WeaponSettings,
    /// Rounds left in magazine.
    ///
    ammo: u32,
    /// Time that passed since weapon jammed, `None` if it is not jammed.
    ///
    jammed_for: Option<Duration>,
}
impl Weapon {
    /// Creates weapon with full magazine.
    ///
    pub fn new(settings: WeaponSettings) -> Self {
        Weapon {
            settings,
            ammo: settings.magazine_size,
            jammed_for: None,
        }
    }

    /// Tries to fire one round.
    ///
    pub fn fire<R: Rng + ?Sized>(&mut self, rng: &mut R) -> FireOutcome {
        if self.is_jammed() {
            return FireOutcome::StillJammed;
        }
        if self.ammo == 0 {
            return FireOutcome::Empty;
        }

        let jam_chance: f64 = if self.settings.jam_chance.is_nan() {
            0.0
        } else {
            self.settings.jam_chance.clamp(0.0, 1.0)
        };
        if rng.gen_bool(jam_chance) {
            self.jammed_for = Some(Duration::ZERO);
            debug!("Weapon jammed with {} rounds left", self.ammo);
            return FireOutcome::Jammed;
        }
        self.ammo -= 1;
        FireOutcome::Fired
    }
    /// Refills magazine and returns number of loaded rounds.
    ///
    /// Jammed weapon cannot be reloaded.
    ///
    pub fn reload(&mut self) -> u32 {
        if self.is_jammed() {
            return 0;
        }
        let loaded: u32 = self.settings.magazine_size.saturating_sub(self.ammo);
        self.ammo = self.settings.magazine_size;
        loaded
    }
    /// Clears jam manually and returns whether weapon was jammed.
    ///
    pub fn clear_jam(&mut self) -> bool {
        self.jammed_for.take().is_some()
    }

    /// Advances jam timer, clearing jam after [`WeaponSettings::unjam_time`].
    ///
    pub fn tick(&mut self, delta: Duration) {
        if let Some(jammed_for) = self.jammed_for.as_mut() {
            *jammed_for = jammed_for.saturating_add(delta);
            if *jammed_for >= self.settings.unjam_time {
                self.jammed_for = None;
                debug!("Weapon cleared its jam");
            }
        }
    }

    /// Returns whether weapon is jammed.
    ///
    pub fn is_jammed(&self) -> bool {
        self.jammed_for.is_some()
    }
    /// Returns rounds left in magazine.
    ///
    pub fn ammo(&self) -> u32 {
        self.ammo
    }
    /// Returns settings.
    ///
    pub fn settings(&self) -> &WeaponSettings {
        &self.settings
    }
}
impl Default for Weapon {
    fn default() -> Self {
        Weapon::new(WeaponSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{FireOutcome, Weapon, WeaponSettings};
    use rand::rngs::mock::StepRng;
    use std::time::Duration;

    /// Weapon that jams on every shot.
    ///
    fn jamming() -> Weapon {
        Weapon::new(WeaponSettings {
            magazine_size: 3,
            jam_chance: 0.5,
            unjam_time: Duration::from_secs(2),
        })
    }

    #[test]
    fn jams() {
        // `StepRng` that always yields zero makes every roll succeed
        let mut rng: StepRng = StepRng::new(0, 0);
        let mut weapon: Weapon = jamming();

        assert_eq!(weapon.fire(&mut rng), FireOutcome::Jammed);
        assert_eq!(weapon.ammo(), 3);
        assert_eq!(weapon.fire(&mut rng), FireOutcome::StillJammed);
        assert_eq!(weapon.reload(), 0);

        weapon.tick(Duration::from_secs(1));
        assert!(weapon.is_jammed());
        weapon.tick(Duration::from_secs(1));
        assert!(!weapon.is_jammed());

        assert_eq!(weapon.fire(&mut rng), FireOutcome::Jammed);
        assert!(weapon.clear_jam());
        assert!(!weapon.clear_jam());

        // jam timer saturates instead of overflowing
        assert_eq!(weapon.fire(&mut rng), FireOutcome::Jammed);
        weapon.tick(Duration::from_millis(500));
        weapon.tick(Duration::MAX);
        assert!(!weapon.is_jammed());
    }

    #[test]
    fn magazine() {
        // `StepRng` that always yields the largest value makes every roll fail
        let mut rng: StepRng = StepRng::new(u64::MAX, 0);
        let mut weapon: Weapon = jamming();

        for _ in 0..3 {
            assert_eq!(weapon.fire(&mut rng), FireOutcome::Fired);
        }
        assert_eq!(weapon.fire(&mut rng), FireOutcome::Empty);
        assert_eq!(weapon.reload(), 3);
        assert_eq!(weapon.ammo(), 3);

        let mut broken: Weapon = Weapon::new(WeaponSettings {
            jam_chance: f64::NAN,
            ..WeaponSettings::default()
        });
        assert_eq!(broken.fire(&mut StepRng::new(0, 0)), FireOutcome::Fired);
    }

    #[test]
    fn settings_file() {
        use crate::datacore::assets::{tests::scratch_path, FromFile, ToFile};
        use std::path::PathBuf;

        let settings: WeaponSettings = WeaponSettings {
            magazine_size: 30,
            jam_chance: 0.01,
            unjam_time: Duration::from_millis(800),
        };
        let path: PathBuf = scratch_path("weapon.cbor");
        settings.to_file(&path).expect("Temporary directory is writable");
        assert_eq!(
            WeaponSettings::from_file(&path).expect("Settings were just saved"),
            settings
        );
        let _ = std::fs::remove_file(path);
    }
}
