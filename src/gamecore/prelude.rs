//! Prelude module: `gamecore::prelude` re-exports all `ggpatterns::gamecore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use ggpatterns::gamecore::prelude::*;
//! ```
//!

// re-exports
pub use crate::gamecore::commands::*;
pub use crate::gamecore::health::*;
pub use crate::gamecore::stamina::*;
pub use crate::gamecore::weapons::*;
