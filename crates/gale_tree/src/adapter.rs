//! The type-adapter strategy.
//!
//! An adapter knows how to turn input text into a typed [`Value`] for every
//! argument whose type tag it claims. Adapters are registered per engine,
//! resolved once per argument at registration time, and compete through
//! [`Relation`]s when several claim the same argument.

use gale_foundation::{Cursor, Result, Value};

use crate::argument::ArgumentSpec;
use crate::context::ExecutionContext;
use crate::priority::Relation;
use crate::registry::RegistrationContext;

/// A pluggable strategy converting input text to a typed value.
pub trait ArgumentAdapter: Send + Sync {
    /// The type tag this adapter produces values for.
    fn type_tag(&self) -> &str;

    /// Whether this adapter can handle `spec`. Defaults to an exact type
    /// tag match.
    fn applies(&self, spec: &ArgumentSpec) -> bool {
        spec.type_tag() == self.type_tag()
    }

    /// Called once when the adapter is bound to an argument, before any
    /// parsing. May adjust the argument's settings (e.g. greedy adapters
    /// clear the trailing-separator requirement).
    fn init(&self, _spec: &mut ArgumentSpec, _ctx: &mut RegistrationContext) {}

    /// Reads a value for `spec` from the cursor.
    ///
    /// # Errors
    ///
    /// Any parse failure. Errors without a span get one attached by the
    /// caller, covering the consumed token.
    fn parse(&self, cursor: &mut Cursor, ctx: &ExecutionContext, spec: &ArgumentSpec)
    -> Result<Value>;

    /// The value used when a non-syntax or unfilled optional argument is
    /// bound. Defaults to [`Value::Nil`].
    fn default_value(&self, _ctx: &ExecutionContext, _spec: &ArgumentSpec) -> Value {
        Value::Nil
    }

    /// This adapter's ordering relation against a competitor.
    fn priority_on(&self, _other: &dyn ArgumentAdapter) -> Relation {
        Relation::Default
    }

    /// Completion candidates for a partial token.
    fn suggest(&self, _prefix: &str, _ctx: &ExecutionContext, _spec: &ArgumentSpec) -> Vec<String> {
        Vec::new()
    }
}
