//! Prelude module: `poolcore::prelude` re-exports all `ggpatterns::poolcore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use ggpatterns::poolcore::prelude::*;
//! ```
//!

// re-exports
pub use crate::poolcore::config::*;
pub use crate::poolcore::errors::*;
pub use crate::poolcore::identifiers::*;
pub use crate::poolcore::instances::*;
pub use crate::poolcore::pools::*;
pub use crate::poolcore::registry::*;
pub use crate::poolcore::templates::*;
