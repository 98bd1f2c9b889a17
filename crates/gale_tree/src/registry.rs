//! Strategy registry and the registration-time resolution pass.
//!
//! Both strategy families resolve the same way: collect every applicable
//! candidate, then run the pairwise priority pass from [`crate::priority`]
//! and take the survivor at the front.

use std::sync::Arc;

use rand::Rng;
use thiserror::Error as ThisError;

use gale_foundation::{Cursor, Error, Result, Value};

use crate::adapter::ArgumentAdapter;
use crate::adapters::{
    BoolAdapter, FloatAdapter, IntAdapter, StringAdapter, TextAdapter, WordAdapter,
};
use crate::argument::ArgumentSpec;
use crate::context::ExecutionContext;
use crate::modifier::{ArgumentModifier, ConstraintTag, OneOfModifier, RangeModifier};
use crate::priority::resolve_order;

/// A problem found while registering a command.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum RegistrationError {
    /// No adapter applies to an argument's type tag.
    #[error("no adapter for argument '{argument}' of type '{type_tag}'")]
    NoAdapter {
        /// The argument's name.
        argument: String,
        /// The unmatched type tag.
        type_tag: String,
    },
    /// No modifier applies to a constraint key.
    #[error("no modifier for constraint '{key}' on argument '{argument}'")]
    NoModifier {
        /// The argument's name.
        argument: String,
        /// The unmatched constraint key.
        key: String,
    },
    /// Two siblings share a name.
    #[error("duplicate child '{name}' under '{parent}'")]
    DuplicateChild {
        /// The parent node's name.
        parent: String,
        /// The repeated child name.
        name: String,
    },
    /// A builder was misused.
    #[error("invalid command '{command}': {message}")]
    Invalid {
        /// The command being registered.
        command: String,
        /// What went wrong.
        message: String,
    },
}

/// Collects problems across one command's registration.
///
/// Registration never panics and never stops at the first problem; it
/// gathers everything wrong with a command so the caller can report all of
/// it at once. A cancelled context drops the command entirely.
#[derive(Debug)]
pub struct RegistrationContext {
    command: String,
    errors: Vec<RegistrationError>,
    cancelled: bool,
}

impl RegistrationContext {
    /// A fresh context for registering `command`.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            errors: Vec::new(),
            cancelled: false,
        }
    }

    /// The command being registered.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Records a problem without stopping registration.
    pub fn push_error(&mut self, error: RegistrationError) {
        self.errors.push(error);
    }

    /// Every problem recorded so far.
    #[must_use]
    pub fn errors(&self) -> &[RegistrationError] {
        &self.errors
    }

    /// Whether registration recorded any problems.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Drops the command from registration.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether the command was dropped.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Stands in when no real adapter resolved, so the tree stays coherent.
struct FailingAdapter {
    type_tag: String,
}

impl ArgumentAdapter for FailingAdapter {
    fn type_tag(&self) -> &str {
        &self.type_tag
    }

    fn parse(
        &self,
        _cursor: &mut Cursor,
        _ctx: &ExecutionContext,
        spec: &ArgumentSpec,
    ) -> Result<Value> {
        Err(Error::internal(format!(
            "argument {} has no adapter for type '{}'",
            spec.name(),
            self.type_tag
        )))
    }
}

/// Holds every known strategy of both families.
pub struct AdapterRegistry {
    adapters: Vec<Arc<dyn ArgumentAdapter>>,
    modifiers: Vec<Arc<dyn ArgumentModifier>>,
}

impl AdapterRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            adapters: Vec::new(),
            modifiers: Vec::new(),
        }
    }

    /// A registry preloaded with the built-in adapters and modifiers.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.add_adapter(Arc::new(WordAdapter));
        registry.add_adapter(Arc::new(StringAdapter));
        registry.add_adapter(Arc::new(TextAdapter));
        registry.add_adapter(Arc::new(IntAdapter));
        registry.add_adapter(Arc::new(FloatAdapter));
        registry.add_adapter(Arc::new(BoolAdapter));
        registry.add_modifier(Arc::new(RangeModifier));
        registry.add_modifier(Arc::new(OneOfModifier));
        registry
    }

    /// Registers a type adapter.
    pub fn add_adapter(&mut self, adapter: Arc<dyn ArgumentAdapter>) {
        self.adapters.push(adapter);
    }

    /// Registers a constraint modifier.
    pub fn add_modifier(&mut self, modifier: Arc<dyn ArgumentModifier>) {
        self.modifiers.push(modifier);
    }

    /// Picks the winning adapter for `spec`.
    ///
    /// When no adapter applies, the failure is recorded on `ctx` and a
    /// stub that errors at parse time is returned, keeping the tree
    /// structurally whole.
    pub fn resolve_adapter<R: Rng + ?Sized>(
        &self,
        spec: &ArgumentSpec,
        ctx: &mut RegistrationContext,
        rng: &mut R,
    ) -> Arc<dyn ArgumentAdapter> {
        let candidates: Vec<Arc<dyn ArgumentAdapter>> = self
            .adapters
            .iter()
            .filter(|a| a.applies(spec))
            .map(Arc::clone)
            .collect();
        let mut ordered = resolve_order(
            candidates,
            |a, b| a.priority_on(b.as_ref()),
            rng,
        );
        if let Some(winner) = ordered.drain(..).next() {
            return winner;
        }
        ctx.push_error(RegistrationError::NoAdapter {
            argument: spec.name().to_owned(),
            type_tag: spec.type_tag().to_owned(),
        });
        Arc::new(FailingAdapter {
            type_tag: spec.type_tag().to_owned(),
        })
    }

    /// Picks the winning modifier for `tag`, or records the miss.
    pub fn resolve_modifier<R: Rng + ?Sized>(
        &self,
        tag: &ConstraintTag,
        spec: &ArgumentSpec,
        ctx: &mut RegistrationContext,
        rng: &mut R,
    ) -> Option<Arc<dyn ArgumentModifier>> {
        let candidates: Vec<Arc<dyn ArgumentModifier>> = self
            .modifiers
            .iter()
            .filter(|m| m.applies(tag))
            .map(Arc::clone)
            .collect();
        let mut ordered = resolve_order(
            candidates,
            |a, b| a.priority_on(b.as_ref()),
            rng,
        );
        if let Some(winner) = ordered.drain(..).next() {
            return Some(winner);
        }
        ctx.push_error(RegistrationError::NoModifier {
            argument: spec.name().to_owned(),
            key: tag.key().to_owned(),
        });
        None
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
