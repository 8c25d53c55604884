//! `poolcore::registry` submodule implements [`PoolRegistry`] -
//! the central allocator that mediates reuse of expensive-to-create objects.
//!

use crate::poolcore::{
    config::{PoolBehaviour, PoolConfig},
    errors::PoolError,
    identifiers::{InstanceId, RegistryId, TemplateId},
    instances::{Origin, Placement, Poolable, Pooled},
    pools::{IdMap, NoOpHasherState, Pool, PoolStats},
    templates::Template,
};
use log::{debug, warn};
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of process-unique registry ids.
///
static NEXT_REGISTRY_ID: AtomicU64 = AtomicU64::new(0);

/// [`PoolRegistry`] struct owns one [`Pool`] per registered [`Template`] and
/// hands out instances from them.
///
/// Registry is a plain value: construct it once when your game starts and pass it by reference
/// to whatever needs to spawn objects. There is no global instance.
///
/// # Lifecycle
/// Instances go through `created (inactive) -> leased (active, placed) -> idle (inactive, reset) -> ...`
/// and are destroyed when pool is trimmed, unregistered, cleared or when registry is dropped.
///
/// # Example
/// ```rust
/// # use ggpatterns::poolcore::prelude::*;
/// # use ggpatterns::mathcore::Vector2;
/// #[derive(Default)]
/// struct Bullet {
///     active: bool,
///     position: Vector2,
///     hits: u32,
/// }
/// impl Poolable for Bullet {
///     fn set_active(&mut self, active: bool) {
///         self.active = active;
///     }
///     fn place(&mut self, placement: &Placement) {
///         self.position = placement.position;
///     }
///     fn reset(&mut self) {
///         self.hits = 0;
///     }
/// }
///
/// let mut registry: PoolRegistry<Bullet> = PoolRegistry::new();
/// let bullet_template: TemplateId = registry.register(Bullet::default);
/// assert_eq!(registry.preload(bullet_template, 8), Ok(8));
///
/// let mut bullet: Pooled<Bullet> = registry
///     .acquire(bullet_template, Placement::at(Vector2 { x: 1.0, y: 2.0 }))
///     .expect("Template is registered");
/// assert!(bullet.active);
/// bullet.hits += 1;
///
/// registry.release(bullet).expect("Bullet came from this registry");
/// assert_eq!(registry.idle_count(bullet_template), Some(8));
/// ```
///
pub struct PoolRegistry<I: Poolable> {
    /// Id of this registry.
    ///
    id: RegistryId,
    /// Config that is used for templates registered without one.
    ///
    default_config: PoolConfig,
    /// Map that stores pools.
    ///
    pools: IdMap<TemplateId, Pool<I>>,
    /// Value of the next assigned `TemplateId`.
    ///
    next_template_id: u64,
    /// Value of the next assigned `InstanceId`.
    ///
    next_instance_id: u64,
}
impl<I: Poolable> PoolRegistry<I> {
    /// Initializes empty [`PoolRegistry`] which uses default [`PoolConfig`].
    ///
    pub fn new() -> Self {
        PoolRegistry::with_config(PoolConfig::default())
    }
    /// Initializes empty [`PoolRegistry`] which uses given config for templates registered without one.
    ///
    pub fn with_config(default_config: PoolConfig) -> Self {
        PoolRegistry {
            id: RegistryId::new(NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed)),
            default_config,
            pools: IdMap::with_hasher(NoOpHasherState),
            next_template_id: 0,
            next_instance_id: 0,
        }
    }

    /// Returns id of this registry.
    ///
    pub fn id(&self) -> RegistryId {
        self.id
    }
    /// Returns config that is used for templates registered without one.
    ///
    pub fn default_config(&self) -> &PoolConfig {
        &self.default_config
    }

    /// Assigns new id to instance.
    ///
    fn next_instance_id(&mut self) -> InstanceId {
        let id: InstanceId = InstanceId::new(self.next_instance_id);
        self.next_instance_id += 1;
        id
    }
    /// Returns pool of template, logging and returning error if it is not registered.
    ///
    fn pool_mut(&mut self, template_id: TemplateId) -> Result<&mut Pool<I>, PoolError> {
        match self.pools.get_mut(&template_id) {
            Some(pool) => Ok(pool),
            None => {
                warn!("{} is not registered in {}", template_id, self.id);
                Err(PoolError::InvalidTemplate(template_id))
            }
        }
    }
}
// templates
impl<I: Poolable> PoolRegistry<I> {
    /// Registers template and creates empty pool for it with default config.
    ///
    /// Every call registers a new template, even if the same template value was registered before.
    ///
    pub fn register(&mut self, template: impl Template<Instance = I> + 'static) -> TemplateId {
        self.register_with_config(template, self.default_config)
    }
    /// Registers template and creates empty pool for it with given config.
    ///
    pub fn register_with_config(
        &mut self,
        template: impl Template<Instance = I> + 'static,
        config: PoolConfig,
    ) -> TemplateId {
        let template_id: TemplateId = TemplateId::new(self.next_template_id);
        self.next_template_id += 1;

        let pool: Pool<I> = Pool::new(Box::new(template), config);
        debug!("Registered '{}' as {} in {}", pool.name(), template_id, self.id);
        let _ = self.pools.insert(template_id, pool);
        template_id
    }
    /// Registers template and preloads `count` instances of it.
    ///
    /// # Example
    /// ```rust
    /// # use ggpatterns::poolcore::prelude::*;
    /// #[derive(Default)]
    /// struct Spark(bool);
    /// impl Poolable for Spark {
    ///     fn set_active(&mut self, active: bool) {
    ///         self.0 = active;
    ///     }
    /// }
    ///
    /// let mut registry: PoolRegistry<Spark> = PoolRegistry::new();
    /// let sparks: TemplateId = registry.register_preloaded(Spark::default, 4);
    /// assert_eq!(registry.idle_count(sparks), Some(4));
    /// ```
    ///
    pub fn register_preloaded(
        &mut self,
        template: impl Template<Instance = I> + 'static,
        count: usize,
    ) -> TemplateId {
        let template_id: TemplateId = self.register(template);
        let _ = self
            .preload(template_id, count)
            .expect("Template was registered right now");
        template_id
    }
    /// Unregisters template, destroying its idle instances, and returns final statistics of its pool.
    ///
    /// Instances of that template that are still leased become unmanaged:
    /// releasing them destroys them.
    ///
    pub fn unregister(&mut self, template_id: TemplateId) -> Result<PoolStats, PoolError> {
        let _ = self.pool_mut(template_id)?;
        let mut pool: Pool<I> = self
            .pools
            .remove(&template_id)
            .expect("Existence of pool has been ensured");
        let _ = pool.trim(0);
        if pool.leased_count() > 0 {
            warn!(
                "{} ('{}') was unregistered with {} instances still leased",
                template_id,
                pool.name(),
                pool.leased_count()
            );
        }
        Ok(pool.stats())
    }

    /// Returns whether template is registered.
    ///
    pub fn contains(&self, template_id: TemplateId) -> bool {
        self.pools.contains_key(&template_id)
    }
    /// Returns ids of all registered templates in ascending order.
    ///
    pub fn template_ids(&self) -> Vec<TemplateId> {
        let mut ids: Vec<TemplateId> = self.pools.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
    /// Returns number of registered templates.
    ///
    pub fn len(&self) -> usize {
        self.pools.len()
    }
    /// Returns `true` if no templates are registered, otherwise `false`.
    ///
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Returns pool of template if it is registered.
    ///
    pub fn pool(&self, template_id: TemplateId) -> Option<&Pool<I>> {
        self.pools.get(&template_id)
    }
    /// Returns statistics of template's pool if it is registered.
    ///
    pub fn stats(&self, template_id: TemplateId) -> Option<PoolStats> {
        self.pool(template_id).map(Pool::stats)
    }
    /// Returns number of idle instances of template if it is registered.
    ///
    pub fn idle_count(&self, template_id: TemplateId) -> Option<usize> {
        self.pool(template_id).map(Pool::idle_count)
    }
    /// Returns number of leased instances of template if it is registered.
    ///
    pub fn leased_count(&self, template_id: TemplateId) -> Option<usize> {
        self.pool(template_id).map(Pool::leased_count)
    }
}
// instances
impl<I: Poolable> PoolRegistry<I> {
    /// Creates `count` inactive instances of template up front and returns number of created instances.
    ///
    /// `count` of 0 is clamped to 1 (with a warning), and count that exceeds
    /// `max_size` of the pool is clamped to it.
    /// Preloading is done once per template: repeated calls log a warning and create nothing.
    ///
    /// # Errors
    /// Returns [`PoolError::InvalidTemplate`] if template is not registered.
    ///
    pub fn preload(&mut self, template_id: TemplateId, count: usize) -> Result<usize, PoolError> {
        let pool: &mut Pool<I> = self.pool_mut(template_id)?;
        if pool.mark_preloaded() {
            warn!(
                "{} ('{}') is already preloaded, ignoring repeated preload",
                template_id,
                pool.name()
            );
            return Ok(0);
        }

        let mut count: usize = count;
        if count == 0 {
            warn!(
                "Preload count of {} ('{}') should be positive, preloading 1 instance",
                template_id,
                pool.name()
            );
            count = 1;
        }
        if let Some(max_size) = pool.config().max_size {
            let room: usize = max_size.saturating_sub(pool.alive_count());
            if count > room {
                warn!(
                    "Preload count of {} ('{}') exceeds its capacity, preloading {} instances",
                    template_id,
                    pool.name(),
                    room
                );
                count = room;
            }
        }

        for _ in 0..count {
            let id: InstanceId = self.next_instance_id();
            let pool: &mut Pool<I> = self
                .pools
                .get_mut(&template_id)
                .expect("Existence of pool has been ensured");
            let instance: I = pool.instantiate();
            pool.push_idle(id, instance);
        }
        debug!("Preloaded {} instances of {}", count, template_id);
        Ok(count)
    }

    /// Leases instance of template: takes the oldest idle instance or, if there are none,
    /// instantiates new one. Instance is placed and activated before it is returned.
    ///
    /// # Errors
    /// Returns [`PoolError::InvalidTemplate`] if template is not registered and
    /// [`PoolError::PoolExhausted`] if pool has no idle instances and is not allowed to grow.
    ///
    pub fn acquire(
        &mut self,
        template_id: TemplateId,
        placement: Placement,
    ) -> Result<Pooled<I>, PoolError> {
        let registry_id: RegistryId = self.id;
        let pool: &mut Pool<I> = self.pool_mut(template_id)?;
        let (instance_id, mut instance) = match pool.pop_idle() {
            Some(idle) => idle,
            None => {
                let alive: usize = pool.alive_count();
                if !pool.config().allows_growth(alive) {
                    warn!(
                        "{} ('{}') has no idle instances and cannot grow beyond {}",
                        template_id,
                        pool.name(),
                        alive
                    );
                    return Err(PoolError::PoolExhausted {
                        template: template_id,
                        capacity: alive,
                    });
                }
                let instance: I = pool.instantiate();
                let instance_id: InstanceId = self.next_instance_id();
                debug!("Instantiated {} of {} on demand", instance_id, template_id);
                (instance_id, instance)
            }
        };

        instance.place(&placement);
        instance.set_active(true);
        self.pools
            .get_mut(&template_id)
            .expect("Existence of pool has been ensured")
            .lease();

        Ok(Pooled::managed(
            instance,
            Origin {
                registry: registry_id,
                template: template_id,
                instance: instance_id,
            },
        ))
    }

    /// Returns leased instance to its pool: instance is deactivated, reset and put at the back of idle queue.
    ///
    /// If the pool already holds `max_idle` idle instances, returned instance is destroyed instead.
    ///
    /// # Errors
    /// If instance was not produced by this registry, or its template was unregistered,
    /// instance is destroyed, a warning is logged and [`PoolError::UnmanagedInstanceRelease`] is returned.
    /// No pool is affected in that case.
    ///
    pub fn release(&mut self, pooled: Pooled<I>) -> Result<(), PoolError> {
        let (mut instance, origin) = pooled.into_parts();
        let managed: Option<Origin> = origin.filter(|origin| {
            origin.registry == self.id && self.pools.contains_key(&origin.template)
        });
        let Some(origin) = managed else {
            match origin {
                Some(origin) => warn!(
                    "{} of {} from {} is not managed by {}, destroying it",
                    origin.instance, origin.template, origin.registry, self.id
                ),
                None => warn!(
                    "Released instance has no pool in {}, destroying it",
                    self.id
                ),
            }
            instance.set_active(false);
            instance.on_destroy();
            return Err(PoolError::UnmanagedInstanceRelease);
        };

        let pool: &mut Pool<I> = self
            .pools
            .get_mut(&origin.template)
            .expect("Existence of pool has been ensured");
        instance.set_active(false);
        if pool.config().behaviour.contains(PoolBehaviour::RESET_ON_RELEASE) {
            instance.reset();
        }
        pool.unlease();

        if pool.config().allows_idle(pool.idle_count()) {
            pool.push_idle(origin.instance, instance);
        } else {
            debug!(
                "{} ('{}') is full of idle instances",
                origin.template,
                pool.name()
            );
            pool.destroy(origin.instance, instance);
        }
        Ok(())
    }

    /// Destroys idle instances of template (oldest first) until at most `keep` remain,
    /// returning number of destroyed instances.
    ///
    /// # Errors
    /// Returns [`PoolError::InvalidTemplate`] if template is not registered.
    ///
    pub fn trim(&mut self, template_id: TemplateId, keep: usize) -> Result<usize, PoolError> {
        let pool: &mut Pool<I> = self.pool_mut(template_id)?;
        Ok(pool.trim(keep))
    }
    /// Destroys idle instances of every template until at most `keep` remain in each pool,
    /// returning total number of destroyed instances.
    ///
    pub fn trim_all(&mut self, keep: usize) -> usize {
        self.pools.values_mut().map(|pool| pool.trim(keep)).sum()
    }

    /// Destroys all idle instances and removes all pools.
    ///
    /// Leased instances become unmanaged; pools that still had leased instances are reported
    /// if they have [`PoolBehaviour::WARN_ON_LEAK`] set.
    ///
    pub fn clear(&mut self) {
        for (template_id, mut pool) in self.pools.drain() {
            let _ = pool.trim(0);
            let leased: usize = pool.leased_count();
            if leased > 0 && pool.config().behaviour.contains(PoolBehaviour::WARN_ON_LEAK) {
                warn!(
                    "{} ('{}') leaked {} instances",
                    template_id,
                    pool.name(),
                    leased
                );
            }
        }
    }
}
impl<I: Poolable> Default for PoolRegistry<I> {
    fn default() -> Self {
        PoolRegistry::new()
    }
}
impl<I: Poolable> Drop for PoolRegistry<I> {
    fn drop(&mut self) {
        self.clear();
    }
}
impl<I: Poolable> std::fmt::Debug for PoolRegistry<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoolRegistry")
            .field("id", &self.id)
            .field("default_config", &self.default_config)
            .field("pools", &self.pools)
            .finish()
    }
}
