//! Core types, input cursor, and error spans for Gale.
//!
//! This crate provides:
//! - [`Value`] - The dynamically typed payload bound to parsed arguments
//! - [`Cursor`] - A cheap-to-clone cursor over an immutable input line
//! - [`Marker`] - A position span used to point error messages at input
//! - [`Error`] - Parse and execution errors with optional spans
//! - [`Sender`] - The capability trait for whoever issued a command
//! - [`CommandResult`] / [`Outcome`] - The uniform handler result shape

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;
pub mod marker;
pub mod result;
pub mod sender;
pub mod value;

pub use cursor::Cursor;
pub use error::{Error, ErrorKind, Result};
pub use marker::Marker;
pub use result::{CommandResult, Outcome};
pub use sender::{ConsoleSender, Sender};
pub use value::Value;
