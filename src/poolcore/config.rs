//! `poolcore::config` submodule defines [`PoolConfig`] - settings that control
//! growth, shrinking and release behaviour of pools.
//!

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! (
    /// [`PoolBehaviour`] bitflag struct lists switchable behaviours of a pool.
    ///
    /// All flags are set by default.
    ///
    #[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
    #[serde(transparent)]
    pub struct PoolBehaviour : u8 {
        /// Calls [`Poolable::reset`](super::instances::Poolable::reset) on released instances.
        ///
        const RESET_ON_RELEASE = 1 << 0;
        /// Instantiates new instance when pool has no idle ones.
        ///
        const GROW_ON_DEMAND = 1 << 1;
        /// Logs a warning when registry is cleared while instances are still leased.
        ///
        const WARN_ON_LEAK = 1 << 2;
    }
);
impl Default for PoolBehaviour {
    fn default() -> Self {
        PoolBehaviour::all()
    }
}

/// [`PoolConfig`] struct holds settings of one pool.
///
/// Default config describes unbounded pool that grows on demand and never shrinks on its own,
/// which favours availability over memory usage.
///
/// # Example
/// ```rust
/// # use ggpatterns::poolcore::config::{PoolBehaviour, PoolConfig};
/// let config: PoolConfig = PoolConfig::default()
///     .with_max_size(64)
///     .with_max_idle(16)
///     .without(PoolBehaviour::WARN_ON_LEAK);
/// assert_eq!(config.max_size, Some(64));
/// assert!(config.behaviour.contains(PoolBehaviour::GROW_ON_DEMAND));
/// assert!(!config.behaviour.contains(PoolBehaviour::WARN_ON_LEAK));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolConfig {
    /// Switchable behaviours.
    ///
    pub behaviour: PoolBehaviour,
    /// Maximal number of instances that are alive at once (both idle and leased).
    ///
    /// `None` means that pool is unbounded.
    ///
    pub max_size: Option<usize>,
    /// Maximal number of idle instances; released instances over that limit are destroyed.
    ///
    /// `None` means that every released instance is kept.
    ///
    pub max_idle: Option<usize>,
}
impl PoolConfig {
    /// Returns config with given size cap.
    ///
    pub fn with_max_size(self, max_size: usize) -> Self {
        PoolConfig {
            max_size: Some(max_size),
            ..self
        }
    }
    /// Returns config with given idle cap.
    ///
    pub fn with_max_idle(self, max_idle: usize) -> Self {
        PoolConfig {
            max_idle: Some(max_idle),
            ..self
        }
    }
    /// Returns config with given behaviours turned off.
    ///
    pub fn without(self, behaviour: PoolBehaviour) -> Self {
        PoolConfig {
            behaviour: self.behaviour.difference(behaviour),
            ..self
        }
    }
    /// Returns config with given behaviours turned on.
    ///
    pub fn with(self, behaviour: PoolBehaviour) -> Self {
        PoolConfig {
            behaviour: self.behaviour.union(behaviour),
            ..self
        }
    }

    /// Returns whether a pool that holds `alive` instances may instantiate another one.
    ///
    pub(crate) fn allows_growth(&self, alive: usize) -> bool {
        self.behaviour.contains(PoolBehaviour::GROW_ON_DEMAND)
            && self.max_size.map_or(true, |max_size| alive < max_size)
    }
    /// Returns whether a pool that holds `idle` idle instances may keep another one.
    ///
    pub(crate) fn allows_idle(&self, idle: usize) -> bool {
        self.max_idle.map_or(true, |max_idle| idle < max_idle)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn growth_rules() {
        use super::{PoolBehaviour, PoolConfig};

        let unbounded: PoolConfig = PoolConfig::default();
        assert!(unbounded.allows_growth(0));
        assert!(unbounded.allows_growth(usize::MAX - 1));
        assert!(unbounded.allows_idle(1_000_000));

        let capped: PoolConfig = PoolConfig::default().with_max_size(2).with_max_idle(1);
        assert!(capped.allows_growth(1));
        assert!(!capped.allows_growth(2));
        assert!(capped.allows_idle(0));
        assert!(!capped.allows_idle(1));

        let fixed: PoolConfig = PoolConfig::default().without(PoolBehaviour::GROW_ON_DEMAND);
        assert!(!fixed.allows_growth(0));
        assert!(fixed
            .with(PoolBehaviour::GROW_ON_DEMAND)
            .allows_growth(0));
    }

    #[test]
    fn config_file() {
        use super::{PoolBehaviour, PoolConfig};
        use crate::datacore::assets::{tests::scratch_path, FromFile, ToFile};
        use std::path::PathBuf;

        let path: PathBuf = scratch_path("pool-config.cbor");
        let config: PoolConfig = PoolConfig::default()
            .with_max_size(128)
            .without(PoolBehaviour::RESET_ON_RELEASE);
        config.to_file(&path).expect("Temporary directory is writable");
        assert_eq!(
            PoolConfig::from_file(&path).expect("Config was just saved"),
            config
        );

        let _ = std::fs::remove_file(path);
    }
}
