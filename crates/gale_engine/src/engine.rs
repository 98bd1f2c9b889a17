//! The engine front door: registration, parsing, execution, dispatch.

use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gale_foundation::{CommandResult, Cursor, Error, Marker, Result, Sender};
use gale_tree::{
    AdapterRegistry, ArgumentAdapter, ArgumentModifier, ArgumentSpec, CommandBuilder, CommandNode,
    ExecutionContext, MatchOptions, NodeKind, RegistrationContext, RegistrationError,
};

use crate::dispatch::{BranchResult, descend};

/// Receives one line per engine event (registrations, dispatch results).
pub type Logger = Arc<dyn Fn(&str) + Send + Sync>;

/// Inspects a built command before it attaches; returning `false` cancels
/// the registration without error.
pub type RegisterHook = Arc<dyn Fn(&CommandNode) -> bool + Send + Sync>;

/// Owns the command tree and everything needed to run input against it.
///
/// Registration takes `&mut self`; parsing and execution take `&self` and
/// every call owns its cursor, context, and branch graph exclusively, so a
/// shared engine can serve parses from many threads at once.
pub struct CommandEngine {
    root: CommandNode,
    registry: AdapterRegistry,
    options: MatchOptions,
    rng: ChaCha8Rng,
    logger: Option<Logger>,
    on_register: Option<RegisterHook>,
}

impl CommandEngine {
    /// An engine with the built-in adapters and modifiers installed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// An engine whose priority coin-flips are reproducible from `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            root: CommandNode::root(),
            registry: AdapterRegistry::with_defaults(),
            options: MatchOptions::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            logger: None,
            on_register: None,
        }
    }

    /// The matching options applied during descent.
    #[must_use]
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Replaces the matching options.
    pub fn set_options(&mut self, options: MatchOptions) {
        self.options = options;
    }

    /// The root of the command tree.
    #[must_use]
    pub fn root(&self) -> &CommandNode {
        &self.root
    }

    /// Registers a type adapter for subsequent registrations.
    pub fn add_adapter(&mut self, adapter: Arc<dyn ArgumentAdapter>) {
        self.registry.add_adapter(adapter);
    }

    /// Registers a constraint modifier for subsequent registrations.
    pub fn add_modifier(&mut self, modifier: Arc<dyn ArgumentModifier>) {
        self.registry.add_modifier(modifier);
    }

    /// Installs the event logger.
    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    /// Installs the registration hook.
    pub fn set_on_register(&mut self, hook: RegisterHook) {
        self.on_register = Some(hook);
    }

    fn log(&self, message: &str) {
        if let Some(logger) = &self.logger {
            logger(message);
        }
    }

    /// Builds `builder` against the registry and attaches it to the root.
    ///
    /// All problems with the definition are collected and returned
    /// together. A registration cancelled by the hook is skipped silently.
    ///
    /// # Errors
    ///
    /// Every [`RegistrationError`] found in the definition. Nothing is
    /// attached when any error is present.
    pub fn register(
        &mut self,
        builder: CommandBuilder,
    ) -> std::result::Result<(), Vec<RegistrationError>> {
        let name = builder.name().to_owned();
        if self.root.find_child(&name).is_some() {
            return Err(vec![RegistrationError::DuplicateChild {
                parent: "root".to_owned(),
                name,
            }]);
        }
        let mut ctx = RegistrationContext::new(name);
        let node = builder.build(&self.registry, &mut ctx, &mut self.rng);
        if let Some(hook) = &self.on_register {
            if !hook(&node) {
                ctx.cancel();
            }
        }
        if ctx.has_errors() {
            self.log(&format!(
                "registration of '{}' failed with {} error(s)",
                node.name(),
                ctx.errors().len()
            ));
            return Err(ctx.errors().to_vec());
        }
        if ctx.is_cancelled() {
            self.log(&format!("registration of '{}' cancelled", node.name()));
            return Ok(());
        }
        self.log(&format!("registered '{}'", node.signature()));
        self.root.add_child(Arc::new(node));
        Ok(())
    }

    /// Runs the backtracking descent over `input` for `sender`.
    #[must_use]
    pub fn parse(&self, sender: Arc<dyn Sender>, input: &str) -> BranchResult {
        let cursor = Cursor::new(input);
        let ctx = ExecutionContext::new(sender, input);
        descend(&self.root, cursor, ctx, &self.options)
    }

    /// Turns a finished branch into a command result.
    ///
    /// # Errors
    ///
    /// The branch's own parse failure when it carries exactly one; an
    /// unknown-argument error when it carries several or left input
    /// unconsumed; an invalid-command error when no executor was reached.
    /// Handler errors come back as failed [`CommandResult`]s, except
    /// internal ones, which propagate.
    pub fn execute(&self, branch: BranchResult) -> Result<CommandResult> {
        let (mut ctx, cursor, mut errors) = branch.into_parts();
        if errors.len() == 1 {
            let (_, err) = errors.remove(0);
            return Err(err);
        }
        if !errors.is_empty() || cursor.has_remaining() {
            return Err(Error::unknown_argument(rest_marker(&cursor)));
        }
        let Some(executor) = ctx.executor().map(Arc::clone) else {
            return Err(Error::invalid_command(Marker::new(
                cursor.source_arc(),
                0,
                cursor.source().len(),
            )));
        };
        match executor(&mut ctx) {
            Ok(outcome) => Ok(CommandResult::from_outcome(outcome)),
            Err(err) if err.is_internal() => Err(err),
            Err(err) => Ok(CommandResult::fail_with(err.to_string())),
        }
    }

    /// Parses, executes, and routes the outcome to the sender.
    ///
    /// Parse and handler failures are rendered to `sender.fail` and folded
    /// into a failed result; only internal errors come back as `Err`, and
    /// those are logged rather than shown.
    ///
    /// # Errors
    ///
    /// Internal errors only (host misuse such as a mistyped binding).
    pub fn dispatch(&self, sender: Arc<dyn Sender>, input: &str) -> Result<CommandResult> {
        let branch = self.parse(Arc::clone(&sender), input);
        match self.execute(branch) {
            Ok(result) => {
                sender.send_feedback(result.is_success(), result.message());
                Ok(result)
            }
            Err(err) if err.is_internal() => {
                self.log(&format!("internal error dispatching '{input}': {err}"));
                Err(err)
            }
            Err(err) => {
                let rendered = err.to_string();
                sender.fail(&rendered);
                Ok(CommandResult::fail_with(rendered))
            }
        }
    }

    /// Completion candidates for the partial token at the end of `input`.
    ///
    /// Walks as deep as the input allows, then offers matching literal
    /// names and adapter suggestions from the children there.
    #[must_use]
    pub fn suggest(&self, sender: Arc<dyn Sender>, input: &str) -> Vec<String> {
        let cursor = Cursor::new(input);
        let ctx = ExecutionContext::new(sender, input);
        let mut out = Vec::new();
        self.suggest_at(&self.root, cursor, ctx, &mut out);
        out.sort();
        out.dedup();
        out
    }

    fn suggest_at(
        &self,
        node: &CommandNode,
        cursor: Cursor,
        ctx: ExecutionContext,
        out: &mut Vec<String>,
    ) {
        let word = cursor.peek_word();
        if cursor.pos() + word.len() == cursor.source().len() {
            let prefix = word.to_owned();
            for child in node.children() {
                if !child.can_use(ctx.sender().as_ref()) {
                    continue;
                }
                match child.kind() {
                    NodeKind::Literal => {
                        let head = child.name().get(..prefix.len());
                        if head.is_some_and(|h| self.options.literals_equal(h, &prefix)) {
                            out.push(child.name().to_owned());
                        }
                    }
                    NodeKind::Argument(spec) => {
                        if let Some(adapter) = spec.adapter() {
                            out.extend(adapter.suggest(&prefix, &ctx, spec));
                        }
                    }
                }
            }
            return;
        }
        for child in node.relevant_children(&cursor, &self.options) {
            if !child.can_use(ctx.sender().as_ref()) {
                continue;
            }
            let mut branch_cursor = cursor.clone();
            let mut branch_ctx = ctx.clone();
            let parsed = match child.kind() {
                NodeKind::Literal => child.parse_literal(&mut branch_cursor, &self.options),
                NodeKind::Argument(spec) => {
                    ArgumentSpec::parse(spec, &mut branch_cursor, &mut branch_ctx)
                }
            };
            if parsed.is_err() {
                continue;
            }
            if child.is_syntax() && branch_cursor.has_remaining() && child.needs_space_after() {
                if !branch_cursor.skip_char(' ') {
                    continue;
                }
                if self.options.allow_multi_spaces {
                    branch_cursor.skip_space();
                }
            }
            self.suggest_at(&child, branch_cursor, branch_ctx, out);
        }
    }
}

impl Default for CommandEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// A marker over everything left unread.
fn rest_marker(cursor: &Cursor) -> Marker {
    Marker::new(cursor.source_arc(), cursor.pos(), cursor.source().len())
}
