//! Prelude module: `datacore::prelude` re-exports all `ggpatterns::datacore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use ggpatterns::datacore::prelude::*;
//! ```
//!

// re-exports
pub use crate::datacore::assets::*;
pub use crate::datacore::ranking::*;
