//! `ggpatterns::timecore` module is a core that implements game timers:
//! countdowns that are driven by frame time and speedrun timers with splits.
//!
//! # Prelude
//! `ggpatterns::timecore` prelude can be imported with `use ggpatterns::timecore::prelude::*`.
//!
//! # Model
//! Timers never read system clock themselves - every timer is advanced by `tick`,
//! which receives frame time from the game loop.
//! That makes timers pausable, scalable (just pass scaled time) and deterministic in tests.
//!

// submodules and public re-exports
pub mod speedrun;
pub mod timers;

// prelude
pub mod prelude;
