//! `ggpatterns::datacore` module is a core that supplies structs and functions
//! that are needed to store game data on disk.
//!
//! # Prelude
//! `ggpatterns::datacore` prelude can be imported with `use ggpatterns::datacore::prelude::*`.
//!
//! # Usage
//! Every serializable struct of the crate (pool configs, gameplay settings, speedrun records, leaderboards)
//! can be saved and loaded with [`ToFile`](assets::ToFile) and [`FromFile`](assets::FromFile).
//! [`AssetManager`](assets::AssetManager) encapsulates work with directories of game data.
//!

// submodules and public re-exports
pub mod assets;
pub mod ranking;

// prelude
pub mod prelude;
