//! Fluent construction of command subtrees.

use std::sync::Arc;

use rand::Rng;

use gale_foundation::{Outcome, Result, Sender, Value};

use crate::argument::ArgumentSpec;
use crate::context::ExecutionContext;
use crate::modifier::{BoundConstraint, ConstraintTag};
use crate::node::{CommandExecutor, CommandNode, Requirement};
use crate::registry::{AdapterRegistry, RegistrationContext, RegistrationError};

enum BuilderKind {
    Literal,
    Argument {
        type_tag: String,
        required: bool,
        syntax: bool,
        default: Option<Value>,
        constraints: Vec<ConstraintTag>,
    },
}

/// Builds one node and its subtree, then resolves it against a registry.
///
/// ```
/// use gale_tree::CommandBuilder;
/// use gale_foundation::Outcome;
///
/// let kick = CommandBuilder::literal("kick")
///     .then(
///         CommandBuilder::argument("target", "word")
///             .then(
///                 CommandBuilder::argument("reason", "string")
///                     .optional()
///                     .executes(|ctx| {
///                         let target = ctx.get_str("target")?.to_owned();
///                         ctx.sender().send_message(&format!("kicked {target}"));
///                         Ok(Outcome::Done)
///                     }),
///             ),
///     );
/// ```
pub struct CommandBuilder {
    name: String,
    kind: BuilderKind,
    description: Option<String>,
    requirement: Option<Requirement>,
    executor: Option<CommandExecutor>,
    children: Vec<CommandBuilder>,
}

impl CommandBuilder {
    /// Starts a literal node.
    pub fn literal(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: BuilderKind::Literal,
            description: None,
            requirement: None,
            executor: None,
            children: Vec::new(),
        }
    }

    /// Starts a required argument node with the given type tag.
    pub fn argument(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: BuilderKind::Argument {
                type_tag: type_tag.into(),
                required: true,
                syntax: true,
                default: None,
                constraints: Vec::new(),
            },
            description: None,
            requirement: None,
            executor: None,
            children: Vec::new(),
        }
    }

    /// Attaches help text.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Gates the node behind a sender check.
    #[must_use]
    pub fn requires<F>(mut self, requirement: F) -> Self
    where
        F: Fn(&dyn Sender) -> bool + Send + Sync + 'static,
    {
        self.requirement = Some(Arc::new(requirement));
        self
    }

    /// Marks an argument optional. Has no effect on literals.
    #[must_use]
    pub fn optional(mut self) -> Self {
        if let BuilderKind::Argument { required, .. } = &mut self.kind {
            *required = false;
        }
        self
    }

    /// Marks an argument syntax-free: it binds its default without
    /// consuming input.
    #[must_use]
    pub fn syntax(mut self, syntax: bool) -> Self {
        if let BuilderKind::Argument {
            syntax: s,
            required,
            ..
        } = &mut self.kind
        {
            *s = syntax;
            if !syntax {
                *required = false;
            }
        }
        self
    }

    /// Declares the value bound when no input fills this argument.
    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        if let BuilderKind::Argument { default, .. } = &mut self.kind {
            *default = Some(value.into());
        }
        self
    }

    /// Declares a constraint on an argument.
    #[must_use]
    pub fn constraint(mut self, tag: ConstraintTag) -> Self {
        if let BuilderKind::Argument { constraints, .. } = &mut self.kind {
            constraints.push(tag);
        }
        self
    }

    /// Appends a child subtree.
    #[must_use]
    pub fn then(mut self, child: CommandBuilder) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the node's body.
    #[must_use]
    pub fn executes<F, O>(mut self, executor: F) -> Self
    where
        F: Fn(&mut ExecutionContext) -> Result<O> + Send + Sync + 'static,
        O: Into<Outcome>,
    {
        self.executor = Some(Arc::new(move |ctx| executor(ctx).map(Into::into)));
        self
    }

    /// The node's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves this builder against `registry` into a tree node.
    ///
    /// Problems never abort the build; they accumulate on `ctx` so a
    /// caller sees every mistake in one pass.
    pub fn build<R: Rng + ?Sized>(
        self,
        registry: &AdapterRegistry,
        ctx: &mut RegistrationContext,
        rng: &mut R,
    ) -> CommandNode {
        let mut node = match self.kind {
            BuilderKind::Literal => CommandNode::literal(self.name),
            BuilderKind::Argument {
                type_tag,
                required,
                syntax,
                default,
                constraints,
            } => {
                let mut spec = ArgumentSpec::new(self.name, type_tag);
                spec.set_required(required);
                spec.set_syntax(syntax);
                if let Some(default) = default {
                    spec.set_default(default);
                }
                let adapter = registry.resolve_adapter(&spec, ctx, rng);
                adapter.init(&mut spec, ctx);
                spec.set_adapter(adapter);
                for tag in constraints {
                    if let Some(modifier) = registry.resolve_modifier(&tag, &spec, ctx, rng) {
                        modifier.init(&tag, &mut spec, ctx);
                        spec.add_constraint(BoundConstraint::new(tag, modifier));
                    }
                }
                CommandNode::argument(Arc::new(spec))
            }
        };
        if let Some(description) = self.description {
            node.set_description(description);
        }
        if let Some(requirement) = self.requirement {
            node.set_requirement(requirement);
        }
        if let Some(executor) = self.executor {
            node.set_executor(executor);
        }
        let mut seen: Vec<String> = Vec::new();
        for child in self.children {
            if seen.iter().any(|name| name == child.name()) {
                ctx.push_error(RegistrationError::DuplicateChild {
                    parent: node.name().to_owned(),
                    name: child.name().to_owned(),
                });
                continue;
            }
            seen.push(child.name().to_owned());
            node.add_child(Arc::new(child.build(registry, ctx, rng)));
        }
        node
    }
}
