//! `poolcore::errors` submodule defines [`PoolError`] - the error type of every fallible
//! [`PoolRegistry`](super::registry::PoolRegistry) operation.
//!

use crate::poolcore::identifiers::TemplateId;
use thiserror::Error;

/// [`PoolError`] enum lists all errors that could occur while working with pools.
///
/// None of those errors are fatal: pools are caches, so the registry always leaves itself
/// in a consistent state and the caller can fall back to creating or dropping objects directly.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Template is not registered in the registry
    /// (it was never registered, was unregistered, or belongs to another registry).
    ///
    #[error("{0} is not registered in this pool registry")]
    InvalidTemplate(TemplateId),
    /// Released instance was not produced by this registry or its pool no longer exists.
    ///
    /// Instance is destroyed instead of being pooled.
    ///
    #[error("released instance is not managed by this pool registry and was destroyed")]
    UnmanagedInstanceRelease,
    /// Pool cannot provide an instance because it is not allowed to grow further.
    ///
    #[error("pool of {template} cannot grow beyond {capacity} instances")]
    PoolExhausted {
        /// Template whose pool is exhausted.
        ///
        template: TemplateId,
        /// Number of instances that pool currently owns or leases.
        ///
        capacity: usize,
    },
}
