//! Prelude module: `timecore::prelude` re-exports all `ggpatterns::timecore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use ggpatterns::timecore::prelude::*;
//! ```
//!

// re-exports
pub use crate::timecore::speedrun::*;
pub use crate::timecore::timers::*;
