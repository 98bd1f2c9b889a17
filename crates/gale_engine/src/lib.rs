//! Backtracking dispatcher and engine front door for Gale.
//!
//! The engine owns a command tree built by `gale_tree` and runs input
//! against it:
//!
//! ```text
//! input ──▶ parse (descend, backtracking) ──▶ BranchResult
//!                                                │
//!                                                ▼
//!                         execute (errors / executor / normalization)
//!                                                │
//!                                                ▼
//!                                          CommandResult ──▶ sender
//! ```
//!
//! Every branch of the descent clones the cursor and the execution context,
//! so failed alternatives leave no trace on the winner. The surviving
//! branch's executor runs against its own context and its outcome is
//! normalized into a [`gale_foundation::CommandResult`].
//!
//! # Modules
//!
//! - [`dispatch`] - `descend` and `BranchResult`
//! - [`engine`] - `CommandEngine`: register, parse, execute, dispatch, suggest

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dispatch;
pub mod engine;

pub use dispatch::{BranchResult, descend};
pub use engine::{CommandEngine, Logger, RegisterHook};
