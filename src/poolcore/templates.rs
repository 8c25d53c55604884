//! `poolcore::templates` submodule defines [`Template`] trait -
//! the prototype from which pooled instances are created,
//! and implements [`Prefab`] - the most common kind of template.
//!

use crate::poolcore::instances::Poolable;
use std::{any::type_name, fmt};

/// [`Template`] trait defines objects that describe "the kind of thing being pooled".
///
/// In Unity terms template is a prefab: registry asks it to instantiate new objects
/// whenever there are no idle ones left.
/// Templates are registered in [`PoolRegistry`](super::registry::PoolRegistry),
/// which returns [`TemplateId`](super::identifiers::TemplateId) that identifies the template from then on.
///
/// # Implementation
/// Every closure that returns [`Poolable`] value is a template:
/// ```rust
/// # use ggpatterns::poolcore::{instances::Poolable, templates::Template};
/// #[derive(Default)]
/// struct Bullet {
///     active: bool,
/// }
/// impl Poolable for Bullet {
///     fn set_active(&mut self, active: bool) {
///         self.active = active;
///     }
/// }
///
/// let template = || Bullet::default();
/// assert!(!template.instantiate().active);
/// ```
///
/// Structs can implement [`Template`] manually, which also allows naming them
/// (names are used in logs):
/// ```rust
/// # use ggpatterns::poolcore::{instances::Poolable, templates::Template};
/// struct Enemy {
///     health: u32,
///     active: bool,
/// }
/// impl Poolable for Enemy {
///     fn set_active(&mut self, active: bool) {
///         self.active = active;
///     }
/// }
///
/// struct EnemyTemplate {
///     health: u32,
/// }
/// impl Template for EnemyTemplate {
///     type Instance = Enemy;
///
///     fn instantiate(&self) -> Enemy {
///         Enemy { health: self.health, active: false }
///     }
///     fn name(&self) -> &str {
///         "enemy"
///     }
/// }
/// ```
///
pub trait Template {
    /// Type of instances that this template produces.
    ///
    type Instance: Poolable;

    /// Creates new instance.
    ///
    /// Registry deactivates instance right after creation,
    /// so it is not required to return inactive instance.
    ///
    fn instantiate(&self) -> Self::Instance;

    /// Returns human-readable name of this template.
    ///
    fn name(&self) -> &str {
        type_name::<Self>()
    }
}
impl<I: Poolable, F: Fn() -> I> Template for F {
    type Instance = I;

    fn instantiate(&self) -> I {
        self()
    }
}
/// Type alias for `Box<dyn Template<Instance = I>>`.
///
/// Registry stores templates in this form, which allows templates of different types
/// to produce instances of the same type.
///
pub type BoxedTemplate<I> = Box<dyn Template<Instance = I>>;
impl<I: Poolable> fmt::Debug for dyn Template<Instance = I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dyn Template ({:?})", self.name())
    }
}

/// [`Prefab`] struct is a template that clones its prototype.
///
/// # Example
/// ```rust
/// # use ggpatterns::poolcore::{instances::Poolable, templates::{Prefab, Template}};
/// #[derive(Clone, Debug, PartialEq)]
/// struct Coin {
///     value: u32,
///     active: bool,
/// }
/// impl Poolable for Coin {
///     fn set_active(&mut self, active: bool) {
///         self.active = active;
///     }
/// }
///
/// let prefab: Prefab<Coin> = Prefab::new("gold coin", Coin { value: 10, active: false });
/// assert_eq!(prefab.instantiate(), *prefab.prototype());
/// assert_eq!(prefab.name(), "gold coin");
/// ```
///
#[derive(Clone, Debug)]
pub struct Prefab<I> {
    /// Name of prefab.
    ///
    name: String,
    /// Value that is cloned on instantiation.
    ///
    prototype: I,
}
impl<I: Poolable + Clone> Prefab<I> {
    /// Creates new [`Prefab`] from its name and prototype.
    ///
    pub fn new(name: impl Into<String>, prototype: I) -> Self {
        Prefab {
            name: name.into(),
            prototype,
        }
    }

    /// Returns prototype that is cloned on instantiation.
    ///
    pub fn prototype(&self) -> &I {
        &self.prototype
    }
}
impl<I: Poolable + Clone> Template for Prefab<I> {
    type Instance = I;

    fn instantiate(&self) -> I {
        self.prototype.clone()
    }
    fn name(&self) -> &str {
        &self.name
    }
}
