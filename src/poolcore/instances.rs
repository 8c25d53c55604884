//! `poolcore::instances` submodule defines [`Poolable`] trait that pooled objects implement,
//! [`Placement`] that is applied to instances on acquiring
//! and [`Pooled`] - the handle through which leased instances are owned.
//!

use crate::{
    mathcore::Vector2,
    poolcore::identifiers::{InstanceId, RegistryId, TemplateId},
};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// [`Poolable`] trait defines objects that can be recycled by
/// [`PoolRegistry`](super::registry::PoolRegistry).
///
/// Registry drives instance through its lifecycle by calling those hooks:
/// 1. `set_active(false)` right after instance was created;
/// 2. `place` and `set_active(true)` when instance is leased;
/// 3. `set_active(false)` and `reset` when instance is returned;
/// 4. `on_destroy` before instance is dropped for good.
///
/// Only `set_active` is required, other hooks do nothing by default.
///
/// # Example
/// ```rust
/// # use ggpatterns::poolcore::instances::{Placement, Poolable};
/// # use ggpatterns::mathcore::Vector2;
/// #[derive(Default)]
/// struct Projectile {
///     active: bool,
///     position: Vector2,
///     bounces: u32,
/// }
/// impl Poolable for Projectile {
///     fn set_active(&mut self, active: bool) {
///         self.active = active;
///     }
///     fn place(&mut self, placement: &Placement) {
///         self.position = placement.position;
///     }
///     fn reset(&mut self) {
///         self.bounces = 0;
///     }
/// }
/// ```
///
pub trait Poolable {
    /// Activates or deactivates instance.
    ///
    /// Inactive instances are expected to be invisible to the game (not updated, not rendered).
    ///
    fn set_active(&mut self, active: bool);

    /// Applies placement that was requested by the caller of
    /// [`PoolRegistry::acquire`](super::registry::PoolRegistry::acquire).
    ///
    fn place(&mut self, placement: &Placement) {
        let _ = placement;
    }

    /// Resets internal state to defaults, so that the next caller
    /// does not observe mutations made by the previous one.
    ///
    fn reset(&mut self) {}

    /// Is called right before instance is destroyed.
    ///
    fn on_destroy(&mut self) {}
}

/// [`ParentId`] id struct is an opaque handle of the object in embedding application
/// which pooled instance should be attached to.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParentId(pub u64);

/// [`Placement`] struct describes where leased instance should appear.
///
/// # Example
/// ```rust
/// # use ggpatterns::poolcore::instances::{ParentId, Placement};
/// # use ggpatterns::mathcore::Vector2;
/// let placement: Placement = Placement::at(Vector2 { x: 2.0, y: 3.0 }).with_parent(ParentId(1));
/// assert_eq!(placement.position, Vector2 { x: 2.0, y: 3.0 });
/// assert_eq!(placement.parent, Some(ParentId(1)));
///
/// assert_eq!(Placement::default().position, Vector2::zero());
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq)]
pub struct Placement {
    /// Position of instance.
    ///
    pub position: Vector2,
    /// Object to attach instance to, `None` means scene root.
    ///
    pub parent: Option<ParentId>,
}
impl Placement {
    /// Creates placement at given position without parent.
    ///
    pub fn at(position: Vector2) -> Self {
        Placement {
            position,
            parent: None,
        }
    }

    /// Returns placement with given parent.
    ///
    pub fn with_parent(self, parent: ParentId) -> Self {
        Placement {
            parent: Some(parent),
            ..self
        }
    }
}

/// [`Origin`] struct is a back-reference from instance to the pool it belongs to.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Origin {
    /// Registry that created instance.
    ///
    pub(crate) registry: RegistryId,
    /// Template from which instance was created.
    ///
    pub(crate) template: TemplateId,
    /// Id of instance itself.
    ///
    pub(crate) instance: InstanceId,
}

/// [`Pooled`] struct owns leased instance together with the record of where it came from.
///
/// [`Pooled`] dereferences to the instance, so it can be used as the instance itself.
/// When caller is done with it, it should be returned with
/// [`PoolRegistry::release`](super::registry::PoolRegistry::release) -
/// dropping [`Pooled`] destroys instance and leaks its slot in the pool
/// (registry will report that as a leak).
///
/// Since `release` takes [`Pooled`] by value, instance cannot be released twice.
///
#[derive(Debug)]
pub struct Pooled<I> {
    /// Leased instance.
    ///
    instance: I,
    /// Where instance came from, `None` for unmanaged instances.
    ///
    origin: Option<Origin>,
}
impl<I> Pooled<I> {
    /// Wraps instance that is managed by registry.
    ///
    pub(crate) fn managed(instance: I, origin: Origin) -> Self {
        Pooled {
            instance,
            origin: Some(origin),
        }
    }
    /// Wraps instance that was not produced by any registry.
    ///
    /// Releasing such instance destroys it.
    ///
    /// # Example
    /// ```rust
    /// # use ggpatterns::poolcore::instances::Pooled;
    /// let pooled: Pooled<u32> = Pooled::unmanaged(5);
    /// assert!(!pooled.is_managed());
    /// assert_eq!(*pooled, 5);
    /// ```
    ///
    pub fn unmanaged(instance: I) -> Self {
        Pooled {
            instance,
            origin: None,
        }
    }

    /// Splits [`Pooled`] into instance and its back-reference.
    ///
    pub(crate) fn into_parts(self) -> (I, Option<Origin>) {
        (self.instance, self.origin)
    }

    /// Returns id of instance if it is managed by a registry.
    ///
    pub fn id(&self) -> Option<InstanceId> {
        self.origin.map(|origin| origin.instance)
    }
    /// Returns id of template from which instance was created, if it is managed by a registry.
    ///
    pub fn template_id(&self) -> Option<TemplateId> {
        self.origin.map(|origin| origin.template)
    }
    /// Returns id of registry that created instance, if it is managed by a registry.
    ///
    pub fn registry_id(&self) -> Option<RegistryId> {
        self.origin.map(|origin| origin.registry)
    }
    /// Returns whether instance was produced by a registry.
    ///
    pub fn is_managed(&self) -> bool {
        self.origin.is_some()
    }

    /// Consumes [`Pooled`] and returns instance, detaching it from its pool for good.
    ///
    /// Registry will consider its slot leaked.
    ///
    pub fn into_inner(self) -> I {
        self.instance
    }
}
impl<I> Deref for Pooled<I> {
    type Target = I;

    fn deref(&self) -> &I {
        &self.instance
    }
}
impl<I> DerefMut for Pooled<I> {
    fn deref_mut(&mut self) -> &mut I {
        &mut self.instance
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn pooled() {
        use super::{Origin, Pooled};
        use crate::poolcore::identifiers::{InstanceId, RegistryId, TemplateId};

        let origin: Origin = Origin {
            registry: RegistryId::new(1),
            template: TemplateId::new(2),
            instance: InstanceId::new(3),
        };
        let mut pooled: Pooled<Vec<u32>> = Pooled::managed(Vec::new(), origin);
        assert!(pooled.is_managed());
        assert_eq!(pooled.id(), Some(InstanceId::new(3)));
        assert_eq!(pooled.template_id(), Some(TemplateId::new(2)));
        assert_eq!(pooled.registry_id(), Some(RegistryId::new(1)));

        pooled.push(10);
        assert_eq!(pooled.len(), 1);
        assert_eq!(pooled.into_inner(), vec![10]);

        let unmanaged: Pooled<Vec<u32>> = Pooled::unmanaged(vec![1, 2]);
        assert_eq!(unmanaged.id(), None);
        assert_eq!(unmanaged.template_id(), None);
        assert_eq!(unmanaged.registry_id(), None);
        assert_eq!(unmanaged.into_parts(), (vec![1, 2], None));
    }
}
