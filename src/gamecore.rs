//! `ggpatterns::gamecore` module is a core that supplies gameplay building blocks
//! which are usually attached to pooled entities: health, stamina, weapons and undoable commands.
//!
//! # Prelude
//! `ggpatterns::gamecore` prelude can be imported with `use ggpatterns::gamecore::prelude::*`.
//!
//! # Usage
//! Every block is a plain struct that is advanced by `tick` with frame time,
//! so blocks can be owned by any entity type and updated from any game loop.
//! Settings of blocks are serializable and can be stored with `datacore`.
//!

// submodules and public re-exports
pub mod commands;
pub mod health;
pub mod stamina;
pub mod weapons;

// prelude
pub mod prelude;
