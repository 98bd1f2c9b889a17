//! Console host for Gale: line editing, the REPL, and the `gale` binary.
//!
//! # Modules
//!
//! - [`editor`] - `LineEditor` abstraction and the rustyline implementation
//! - [`repl`] - The interactive loop
//! - [`demo`] - A small standalone command set for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod demo;
pub mod editor;
pub mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
