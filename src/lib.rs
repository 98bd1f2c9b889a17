//! Gale - Embeddable command parsing and dispatch engine
//!
//! This crate re-exports all layers of the Gale system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: gale_runtime    — REPL, CLI host, console sender
//! Layer 2: gale_engine     — Backtracking dispatcher, engine front door
//! Layer 1: gale_tree       — Command tree, adapters, priority resolution
//! Layer 0: gale_foundation — Core types (Value, Cursor, Error, results)
//! ```

pub use gale_engine as engine;
pub use gale_foundation as foundation;
pub use gale_runtime as runtime;
pub use gale_tree as tree;
