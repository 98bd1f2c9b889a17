//! Argument specifications and the argument parse step.

use std::fmt;
use std::sync::Arc;

use gale_foundation::{Cursor, Error, Result, Value};

use crate::adapter::ArgumentAdapter;
use crate::context::{ExecutionContext, ParsedBinding};
use crate::modifier::{BoundConstraint, ConstraintTag};

/// Everything the tree knows about a single argument node.
///
/// A spec starts as declarations from the builder (name, type tag,
/// requiredness) and is completed at registration time when the registry
/// resolves its type adapter and constraint modifiers.
pub struct ArgumentSpec {
    name: String,
    type_tag: String,
    required: bool,
    syntax: bool,
    needs_space_after: bool,
    adapter: Option<Arc<dyn ArgumentAdapter>>,
    default: Option<Value>,
    constraints: Vec<BoundConstraint>,
}

impl ArgumentSpec {
    /// Creates a required, syntax-participating spec with no adapter yet.
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            required: true,
            syntax: true,
            needs_space_after: true,
            adapter: None,
            default: None,
            constraints: Vec::new(),
        }
    }

    /// The argument's name; bindings are keyed by it.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type tag used to select an adapter.
    #[must_use]
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    /// Whether input must be present for this argument.
    #[must_use]
    pub fn required(&self) -> bool {
        self.required
    }

    /// Marks the argument optional.
    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Whether this argument consumes input at all. Non-syntax arguments
    /// bind their default without reading.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        self.syntax
    }

    /// Marks the argument as syntax-free.
    pub fn set_syntax(&mut self, syntax: bool) {
        self.syntax = syntax;
    }

    /// Whether a separator space must follow this argument before the next
    /// node may match.
    #[must_use]
    pub fn needs_space_after(&self) -> bool {
        self.needs_space_after
    }

    /// Adapters that read to end of input clear this.
    pub fn set_needs_space_after(&mut self, needs: bool) {
        self.needs_space_after = needs;
    }

    /// The resolved type adapter, if registration has run.
    #[must_use]
    pub fn adapter(&self) -> Option<&Arc<dyn ArgumentAdapter>> {
        self.adapter.as_ref()
    }

    /// Installs the resolved adapter.
    pub fn set_adapter(&mut self, adapter: Arc<dyn ArgumentAdapter>) {
        self.adapter = Some(adapter);
    }

    /// The declared default, taking precedence over the adapter's.
    #[must_use]
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Declares the value bound when no input fills this argument.
    pub fn set_default(&mut self, default: Value) {
        self.default = Some(default);
    }

    /// Constraints resolved for this argument.
    #[must_use]
    pub fn constraints(&self) -> &[BoundConstraint] {
        &self.constraints
    }

    /// Declared constraint tags, in declaration order.
    pub fn constraint_tags(&self) -> impl Iterator<Item = &ConstraintTag> {
        self.constraints.iter().map(BoundConstraint::tag)
    }

    /// Appends a resolved constraint.
    pub fn add_constraint(&mut self, constraint: BoundConstraint) {
        self.constraints.push(constraint);
    }

    /// Parses this argument from `cursor` and binds the result into `ctx`.
    ///
    /// Syntax arguments with input remaining read through the adapter;
    /// required ones with input exhausted fail; everything else binds the
    /// adapter's default. The parsed value then runs through every
    /// constraint before binding.
    ///
    /// # Errors
    ///
    /// The adapter's parse error (annotated with the consumed span when the
    /// adapter left it markerless), an "expected argument" error for a
    /// required argument with no input, or a constraint violation.
    pub fn parse(spec: &Arc<Self>, cursor: &mut Cursor, ctx: &mut ExecutionContext) -> Result<()> {
        let adapter = spec
            .adapter
            .as_ref()
            .ok_or_else(|| Error::internal(format!("argument {} has no adapter", spec.name)))?;
        let value = if spec.syntax && cursor.has_remaining() {
            let start = cursor.pos();
            match adapter.parse(cursor, ctx, spec) {
                Ok(value) => value,
                Err(err) if !err.has_marker() => {
                    return Err(err.with_marker(cursor.marker_since(start)));
                }
                Err(err) => return Err(err),
            }
        } else if spec.syntax && spec.required {
            return Err(Error::expected_argument(&spec.name));
        } else {
            match &spec.default {
                Some(default) => default.clone(),
                None => adapter.default_value(ctx, spec),
            }
        };
        for constraint in &spec.constraints {
            constraint.modifier().validate(constraint.tag(), &value, spec, ctx)?;
        }
        ctx.bind(ParsedBinding::new(Arc::clone(spec), value));
        Ok(())
    }
}

impl fmt::Debug for ArgumentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentSpec")
            .field("name", &self.name)
            .field("type_tag", &self.type_tag)
            .field("required", &self.required)
            .field("syntax", &self.syntax)
            .field("constraints", &self.constraints.len())
            .finish_non_exhaustive()
    }
}
