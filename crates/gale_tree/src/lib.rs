//! Command tree, argument adapters, and priority resolution for Gale.
//!
//! This crate holds everything the dispatcher matches against:
//!
//! ```text
//! "kick bob rude"
//!        │
//!        ▼
//! (root)─┬─ "kick" ── <name: word> ── [<reason: string>]  → handler
//!        ├─ "ban" ─── <name: word>                        → handler
//!        └─ "say" ─── <text: text>                        → handler
//! ```
//!
//! Nodes are either literals (fixed keywords) or arguments (typed slots).
//! An argument owns an [`ArgumentAdapter`] resolved exactly once at
//! registration through the [`AdapterRegistry`]; competing adapters are
//! ordered by the generic pairwise [`resolve_order`] pass, which also
//! serves the second strategy family, [`ArgumentModifier`]s (declarative
//! validation such as numeric ranges).
//!
//! # Modules
//!
//! - [`node`] - Tree nodes, match options, literal matching
//! - [`argument`] - Typed argument slots and their parse path
//! - [`context`] - Per-parse execution context and bindings
//! - [`adapter`] - The type-adapter strategy trait
//! - [`adapters`] - Built-in adapters (word, string, text, int, float, bool, enum)
//! - [`modifier`] - The behavior-adapter strategy trait and built-ins
//! - [`priority`] - Relations and the generic conflict-resolution pass
//! - [`registry`] - Per-engine adapter registry and registration context
//! - [`builder`] - Fluent command construction

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod adapter;
pub mod adapters;
pub mod argument;
pub mod builder;
pub mod context;
pub mod modifier;
pub mod node;
pub mod priority;
pub mod registry;

pub use adapter::ArgumentAdapter;
pub use argument::ArgumentSpec;
pub use builder::CommandBuilder;
pub use context::{ExecutionContext, ParsedBinding};
pub use modifier::{ArgumentModifier, BoundConstraint, ConstraintTag};
pub use node::{CommandExecutor, CommandNode, MatchOptions, NodeKind, Requirement};
pub use priority::{Relation, resolve_order};
pub use registry::{AdapterRegistry, RegistrationContext, RegistrationError};
