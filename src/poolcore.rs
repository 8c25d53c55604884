//! `ggpatterns::poolcore` module is a core that implements object pooling -
//! recycling of expensive-to-create game objects instead of creating and destroying them repeatedly.
//!
//! # Prelude
//! `ggpatterns::poolcore` prelude can be imported with `use ggpatterns::poolcore::prelude::*`.
//!
//! # Model
//! Objects that are pooled implement [`Poolable`](instances::Poolable) trait,
//! and the things they are created from implement [`Template`](templates::Template) trait.
//! Every template that is registered in [`PoolRegistry`](registry::PoolRegistry)
//! gets its own [`Pool`](pools::Pool) of idle instances.
//!
//! Leased instances are handed out as [`Pooled`](instances::Pooled) values
//! that remember where they came from, so returning instance to registry
//! does not require the caller to know its template.
//!
//! # Usage
//! Spawners register their templates once, optionally preload a batch of instances
//! (preloading avoids creation hitches during gameplay) and then acquire and release instances
//! as game goes on. Pools grow on demand unless their [`PoolConfig`](config::PoolConfig) says otherwise.
//!

// submodules and public re-exports
pub mod config;
pub mod errors;
pub mod identifiers;
pub mod instances;
pub mod pools;
pub mod registry;
pub mod templates;

// prelude
pub mod prelude;
