//! `poolcore::pools` submodule implements [`Pool`] - FIFO storage of idle instances
//! of one template, and several collections that registry uses to store pools.
//!

use crate::poolcore::{
    config::PoolConfig,
    identifiers::InstanceId,
    instances::Poolable,
    templates::BoxedTemplate,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, VecDeque},
    fmt,
    hash::{BuildHasher, Hasher},
};

/// [`NoOpHasher`] struct is a hasher that removes overhead of hashing by directly passing
/// its internals through.
///
/// # Usage
/// Id structs are sequentially assigned `u64`s, and so they are already unique,
/// which makes them high-quality hashes by themselves.
///
/// **This hasher only passes `usize` and `u64` as a no-op hashing,
/// `write` function should not be used (it's implementation is not suited for usage);
/// use `write_usize` or `write_u64` instead.**
///
#[derive(Copy, Clone, Debug)]
pub struct NoOpHasher(u64);
impl Hasher for NoOpHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        self.0 = bytes.iter().fold(self.0, |hash, x| {
            hash.rotate_right(8).wrapping_add(u64::from(*x))
        })
    }

    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }
    fn write_usize(&mut self, i: usize) {
        self.0 = i as u64;
    }
}

/// [`NoOpHasherState`] struct implements `BuildHasher` trait that produces [`NoOpHasher`].
///
#[derive(Copy, Clone, Debug, Default)]
pub struct NoOpHasherState;
impl BuildHasher for NoOpHasherState {
    type Hasher = NoOpHasher;

    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher(0)
    }
}

/// Type alias for `HashMap<K, V, NoOpHasherState>`.
///
/// [`IdMap`] should be used wherever id structs are keys in a `HashMap`.
///
pub type IdMap<K, V> = HashMap<K, V, NoOpHasherState>;

/// [`PoolStats`] struct describes what happened to a pool during its life.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Number of instances that were instantiated.
    ///
    pub created: usize,
    /// Number of acquires that were served by idle instances.
    ///
    pub reused: usize,
    /// Number of instances that were returned.
    ///
    pub released: usize,
    /// Number of instances that were destroyed by the pool.
    ///
    pub destroyed: usize,
    /// Number of idle instances.
    ///
    pub idle: usize,
    /// Number of instances that are currently leased.
    ///
    pub leased: usize,
}

/// [`Pool`] struct stores idle instances of one template.
///
/// Idle instances are stored in FIFO order: the instance that was returned first
/// is handed out first, which spreads wear evenly among instances.
///
/// Every instance in the idle queue was created by this pool's template and is inactive.
///
pub struct Pool<I: Poolable> {
    /// Template from which instances are created.
    ///
    template: BoxedTemplate<I>,
    /// Settings of this pool.
    ///
    config: PoolConfig,
    /// Idle instances with their ids.
    ///
    idle: VecDeque<(InstanceId, I)>,
    /// Whether `preload` was already called.
    ///
    preloaded: bool,
    /// Counters.
    ///
    stats: PoolStats,
}
impl<I: Poolable> Pool<I> {
    /// Creates empty pool.
    ///
    pub(crate) fn new(template: BoxedTemplate<I>, config: PoolConfig) -> Self {
        Pool {
            template,
            config,
            idle: VecDeque::new(),
            preloaded: false,
            stats: PoolStats::default(),
        }
    }

    /// Returns name of template.
    ///
    pub fn name(&self) -> &str {
        self.template.name()
    }
    /// Returns settings of this pool.
    ///
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }
    /// Returns counters of this pool.
    ///
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            idle: self.idle.len(),
            ..self.stats
        }
    }
    /// Returns number of idle instances.
    ///
    pub fn idle_count(&self) -> usize {
        self.idle.len()
    }
    /// Returns number of leased instances.
    ///
    pub fn leased_count(&self) -> usize {
        self.stats.leased
    }
    /// Returns number of instances that are alive (both idle and leased).
    ///
    pub fn alive_count(&self) -> usize {
        self.idle.len() + self.stats.leased
    }
    /// Returns whether `preload` was already called on this pool.
    ///
    pub fn is_preloaded(&self) -> bool {
        self.preloaded
    }
    /// Returns ids of idle instances in the order they will be handed out.
    ///
    pub fn idle_ids(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.idle.iter().map(|(id, _)| *id)
    }

    /// Marks pool as preloaded, returning whether it was preloaded before.
    ///
    pub(crate) fn mark_preloaded(&mut self) -> bool {
        std::mem::replace(&mut self.preloaded, true)
    }

    /// Instantiates new inactive instance.
    ///
    pub(crate) fn instantiate(&mut self) -> I {
        let mut instance: I = self.template.instantiate();
        instance.set_active(false);
        self.stats.created += 1;
        instance
    }
    /// Puts inactive instance at the back of idle queue.
    ///
    pub(crate) fn push_idle(&mut self, id: InstanceId, instance: I) {
        self.idle.push_back((id, instance));
    }
    /// Takes idle instance from the front of the queue.
    ///
    pub(crate) fn pop_idle(&mut self) -> Option<(InstanceId, I)> {
        let popped = self.idle.pop_front();
        if popped.is_some() {
            self.stats.reused += 1;
        }
        popped
    }

    /// Records that instance was handed out.
    ///
    pub(crate) fn lease(&mut self) {
        self.stats.leased += 1;
    }
    /// Records that instance came back.
    ///
    pub(crate) fn unlease(&mut self) {
        self.stats.leased = self.stats.leased.saturating_sub(1);
        self.stats.released += 1;
    }

    /// Destroys instance that belonged to this pool.
    ///
    pub(crate) fn destroy(&mut self, id: InstanceId, mut instance: I) {
        instance.on_destroy();
        self.stats.destroyed += 1;
        debug!("Destroyed {} of '{}'", id, self.name());
    }
    /// Destroys idle instances (oldest first) until at most `keep` remain
    /// and returns number of destroyed instances.
    ///
    pub(crate) fn trim(&mut self, keep: usize) -> usize {
        let mut destroyed: usize = 0;
        while self.idle.len() > keep {
            let (id, instance) = self
                .idle
                .pop_front()
                .expect("Queue is longer than `keep`, so it is not empty");
            self.destroy(id, instance);
            destroyed += 1;
        }
        destroyed
    }
}
impl<I: Poolable> fmt::Debug for Pool<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("template", &self.name())
            .field("config", &self.config)
            .field("preloaded", &self.preloaded)
            .field("stats", &self.stats())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::poolcore::instances::Poolable;

    /// Instance that counts lifecycle hooks.
    ///
    #[derive(Debug, Default)]
    struct Counter {
        active: bool,
        destroyed: bool,
    }
    impl Poolable for Counter {
        fn set_active(&mut self, active: bool) {
            self.active = active;
        }
        fn on_destroy(&mut self) {
            self.destroyed = true;
        }
    }

    #[test]
    fn no_op_hasher() {
        use super::{IdMap, NoOpHasherState};
        use crate::poolcore::identifiers::TemplateId;
        use std::hash::{BuildHasher, Hash, Hasher};

        let mut hasher = NoOpHasherState.build_hasher();
        TemplateId::new(42).hash(&mut hasher);
        assert_eq!(hasher.finish(), 42);

        let mut map: IdMap<TemplateId, &str> = IdMap::with_hasher(NoOpHasherState);
        let _ = map.insert(TemplateId::new(1), "bullet");
        let _ = map.insert(TemplateId::new(2), "enemy");
        assert_eq!(map.get(&TemplateId::new(2)), Some(&"enemy"));
    }

    #[test]
    fn fifo_and_stats() {
        use super::{Pool, PoolStats};
        use crate::poolcore::{config::PoolConfig, identifiers::InstanceId};

        let mut pool: Pool<Counter> = Pool::new(
            Box::new(|| Counter {
                active: true,
                destroyed: false,
            }),
            PoolConfig::default(),
        );

        let first: Counter = pool.instantiate();
        assert!(!first.active);
        pool.push_idle(InstanceId::new(1), first);
        let second: Counter = pool.instantiate();
        pool.push_idle(InstanceId::new(2), second);
        assert_eq!(
            pool.idle_ids().collect::<Vec<InstanceId>>(),
            vec![InstanceId::new(1), InstanceId::new(2)]
        );

        let (id, _) = pool.pop_idle().expect("Pool has idle instances");
        assert_eq!(id, InstanceId::new(1));
        pool.lease();
        assert_eq!(pool.alive_count(), 2);

        pool.unlease();
        assert_eq!(pool.trim(0), 1);
        assert!(pool.pop_idle().is_none());

        assert_eq!(
            pool.stats(),
            PoolStats {
                created: 2,
                reused: 1,
                released: 1,
                destroyed: 1,
                idle: 0,
                leased: 0,
            }
        );
        assert!(!pool.mark_preloaded());
        assert!(pool.mark_preloaded());
        assert!(pool.is_preloaded());
    }
}
