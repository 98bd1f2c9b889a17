//! The command tree: literal and argument nodes.

use std::fmt;
use std::sync::Arc;

use gale_foundation::{Cursor, Error, Outcome, Result, Sender};

use crate::argument::ArgumentSpec;
use crate::context::ExecutionContext;

/// A command body, run once dispatch settles on a winning branch.
pub type CommandExecutor = Arc<dyn Fn(&mut ExecutionContext) -> Result<Outcome> + Send + Sync>;

/// A gate deciding whether a sender may descend into a node.
pub type Requirement = Arc<dyn Fn(&dyn Sender) -> bool + Send + Sync>;

/// Knobs for literal matching during descent.
#[derive(Clone, Copy, Debug)]
pub struct MatchOptions {
    /// Compare literals without regard to case.
    pub literals_ignore_case: bool,
    /// Treat a run of spaces between nodes as a single separator.
    pub allow_multi_spaces: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            literals_ignore_case: true,
            allow_multi_spaces: true,
        }
    }
}

impl MatchOptions {
    /// Compares a literal name against an input word under these options.
    #[must_use]
    pub fn literals_equal(&self, name: &str, word: &str) -> bool {
        if self.literals_ignore_case {
            name.eq_ignore_ascii_case(word)
        } else {
            name == word
        }
    }
}

/// What a node matches: a fixed word or a typed argument.
#[derive(Clone)]
pub enum NodeKind {
    /// Matches its own name verbatim.
    Literal,
    /// Reads a value through the spec's adapter.
    Argument(Arc<ArgumentSpec>),
}

/// One node in the command tree.
pub struct CommandNode {
    name: String,
    kind: NodeKind,
    children: Vec<Arc<CommandNode>>,
    requirement: Option<Requirement>,
    executor: Option<CommandExecutor>,
    description: Option<String>,
}

impl CommandNode {
    /// The nameless root holding every registered command.
    #[must_use]
    pub fn root() -> Self {
        Self {
            name: String::new(),
            kind: NodeKind::Literal,
            children: Vec::new(),
            requirement: None,
            executor: None,
            description: None,
        }
    }

    /// A literal node matching `name`.
    pub fn literal(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Literal,
            children: Vec::new(),
            requirement: None,
            executor: None,
            description: None,
        }
    }

    /// An argument node around a completed spec.
    #[must_use]
    pub fn argument(spec: Arc<ArgumentSpec>) -> Self {
        Self {
            name: spec.name().to_owned(),
            kind: NodeKind::Argument(spec),
            children: Vec::new(),
            requirement: None,
            executor: None,
            description: None,
        }
    }

    /// The node's name. Empty for the root.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Literal or argument.
    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The argument spec, when this is an argument node.
    #[must_use]
    pub fn spec(&self) -> Option<&Arc<ArgumentSpec>> {
        match &self.kind {
            NodeKind::Literal => None,
            NodeKind::Argument(spec) => Some(spec),
        }
    }

    /// All direct children.
    #[must_use]
    pub fn children(&self) -> &[Arc<CommandNode>] {
        &self.children
    }

    /// Appends a child.
    pub fn add_child(&mut self, child: Arc<CommandNode>) {
        self.children.push(child);
    }

    /// Looks up a direct child by name.
    #[must_use]
    pub fn find_child(&self, name: &str) -> Option<&Arc<CommandNode>> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Optional help text.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Sets the help text.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Sets the access gate.
    pub fn set_requirement(&mut self, requirement: Requirement) {
        self.requirement = Some(requirement);
    }

    /// Sets the body.
    pub fn set_executor(&mut self, executor: CommandExecutor) {
        self.executor = Some(executor);
    }

    /// The body, if any.
    #[must_use]
    pub fn executor(&self) -> Option<&CommandExecutor> {
        self.executor.as_ref()
    }

    /// Whether `sender` passes this node's gate. Gateless nodes admit
    /// everyone.
    #[must_use]
    pub fn can_use(&self, sender: &dyn Sender) -> bool {
        match &self.requirement {
            Some(req) => req(sender),
            None => true,
        }
    }

    /// Whether this node consumes input. Literals always do; argument
    /// nodes defer to their spec.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        match &self.kind {
            NodeKind::Literal => true,
            NodeKind::Argument(spec) => spec.is_syntax(),
        }
    }

    /// Whether a separator must follow this node.
    #[must_use]
    pub fn needs_space_after(&self) -> bool {
        match &self.kind {
            NodeKind::Literal => true,
            NodeKind::Argument(spec) => spec.needs_space_after(),
        }
    }

    /// Children worth descending into for the word now under the cursor.
    ///
    /// When the next word matches a literal child, that child alone is the
    /// candidate set; otherwise every argument child competes.
    #[must_use]
    pub fn relevant_children(
        &self,
        cursor: &Cursor,
        options: &MatchOptions,
    ) -> Vec<Arc<CommandNode>> {
        let word = cursor.peek_word();
        if !word.is_empty() {
            if let Some(literal) = self.children.iter().find(|c| {
                matches!(c.kind, NodeKind::Literal) && options.literals_equal(&c.name, word)
            }) {
                return vec![Arc::clone(literal)];
            }
        }
        self.children
            .iter()
            .filter(|c| matches!(c.kind, NodeKind::Argument(_)))
            .map(Arc::clone)
            .collect()
    }

    /// Consumes this literal from the cursor.
    ///
    /// The match must end at a space or at end of input; on failure the
    /// cursor is restored.
    ///
    /// # Errors
    ///
    /// An "expected literal" error when the input does not carry this
    /// node's name at the cursor.
    pub fn parse_literal(&self, cursor: &mut Cursor, options: &MatchOptions) -> Result<()> {
        let start = cursor.pos();
        let candidate = cursor.remaining().get(..self.name.len());
        let matched = candidate.is_some_and(|c| options.literals_equal(&self.name, c));
        if matched {
            cursor.set_pos(start + self.name.len());
            if !cursor.has_remaining() || cursor.peek() == Some(' ') {
                return Ok(());
            }
        }
        cursor.set_pos(start);
        Err(Error::expected_literal(&self.name))
    }

    /// A one-line rendering of the subtree rooted here, for help output.
    #[must_use]
    pub fn signature(&self) -> String {
        let mut out = String::new();
        self.write_signature(&mut out);
        out
    }

    fn write_signature(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Literal => out.push_str(&self.name),
            NodeKind::Argument(spec) => {
                if spec.required() {
                    out.push('<');
                    out.push_str(&self.name);
                    out.push('>');
                } else {
                    out.push('[');
                    out.push_str(&self.name);
                    out.push(']');
                }
            }
        }
        if let Some(child) = self.children.first() {
            if !out.is_empty() {
                out.push(' ');
            }
            child.write_signature(out);
        }
    }
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("name", &self.name)
            .field(
                "kind",
                &match self.kind {
                    NodeKind::Literal => "literal",
                    NodeKind::Argument(_) => "argument",
                },
            )
            .field("children", &self.children.len())
            .field("has_executor", &self.executor.is_some())
            .finish_non_exhaustive()
    }
}
