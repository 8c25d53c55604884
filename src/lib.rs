//! # GGPatterns
//!
//! **GGPatterns** - game programming patterns written in pure Rust for Unity-like games:
//! object pools, timers, gameplay building blocks and persistent data.
//!
//! # Cores
//! * [`poolcore`] - pool registry that recycles expensive-to-create objects;
//! * [`timecore`] - countdown and speedrun timers;
//! * [`gamecore`] - health, stamina, weapons and undoable commands;
//! * [`datacore`] - saving and loading of game data, leaderboards;
//! * [`mathcore`] - 2d vectors.
//!
//! # Logging
//! Crate reports through `log` facade and never installs a logger itself.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate bitflags;

extern crate log;
extern crate thiserror;

extern crate rand;

extern crate serde;
extern crate serde_cbor;

// cores
pub mod datacore;
pub mod gamecore;
pub mod mathcore;
pub mod poolcore;
pub mod timecore;
