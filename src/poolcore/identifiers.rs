//! `poolcore::identifiers` submodule provides id structs that
//! uniquely identify registries, templates and instances.
//!

use serde::{Deserialize, Serialize};
use std::fmt;

/// [`impl_id`] macro implements basic id struct interface.
///
/// Uniqueness of ids is not provided by id structs themselves, and that is why `new` associated function is
/// exposed only to crate visibility - it is [`PoolRegistry`](super::registry::PoolRegistry)'s job to provide it.
///
macro_rules! impl_id {
    ($struct:ident, $prefix:literal) => {
        impl $struct {
            /// Creates new id with given value.
            ///
            pub(crate) fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns underlying id.
            ///
            pub fn value(&self) -> u64 {
                self.0
            }
        }
        impl fmt::Display for $struct {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $prefix, self.0)
            }
        }
    };
}

/// [`RegistryId`] id struct identifies [`PoolRegistry`](super::registry::PoolRegistry)
/// which produced an instance.
///
/// Ids are unique for the whole process, so instances from one registry
/// are never mistaken for instances of another one.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegistryId(u64);
impl_id!(RegistryId, "registry");

/// [`TemplateId`] id struct identifies [`Template`](super::templates::Template)s
/// in [`PoolRegistry`](super::registry::PoolRegistry).
///
/// It is assigned by the registry in which template is registered and is never reused by it,
/// even after the template is unregistered.
///
/// # Note
/// [`TemplateId`] is only valid for the registry it was obtained from.
/// Using it with another registry will either fail with
/// [`PoolError::InvalidTemplate`](super::errors::PoolError::InvalidTemplate)
/// or address unrelated template.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemplateId(u64);
impl_id!(TemplateId, "template");

/// [`InstanceId`] id struct identifies instances that were created by
/// [`PoolRegistry`](super::registry::PoolRegistry).
///
/// Instance keeps its id for its whole life, through every acquire/release cycle,
/// which makes it possible to check that recycled instance is the same object.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceId(u64);
impl_id!(InstanceId, "instance");

#[cfg(test)]
mod tests {
    #[test]
    fn ids() {
        use super::{InstanceId, TemplateId};

        let template_id: TemplateId = TemplateId::new(3);
        assert_eq!(template_id.value(), 3);
        assert_eq!(template_id.to_string(), "template#3");
        assert_eq!(InstanceId::new(7).to_string(), "instance#7");
        assert!(TemplateId::new(1) < TemplateId::new(2));
    }
}
