//! The backtracking descent through the command tree.

use std::sync::Arc;

use gale_foundation::{Cursor, Error};
use gale_tree::{ArgumentSpec, CommandNode, ExecutionContext, MatchOptions, NodeKind};

/// The outcome of descending one branch of the tree.
///
/// Carries the context as it stood when the branch ended, the cursor at the
/// exit position, and every parse failure met among the children of the
/// deepest node reached. An empty error list means the branch ended cleanly
/// at a leaf (or at a node none of whose children were needed).
pub struct BranchResult {
    context: ExecutionContext,
    cursor: Cursor,
    errors: Vec<(String, Error)>,
}

impl BranchResult {
    /// The context at branch exit.
    #[must_use]
    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }

    /// The cursor at branch exit.
    #[must_use]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Parse failures collected at the deepest node, as (child name, error)
    /// pairs in declaration order.
    #[must_use]
    pub fn errors(&self) -> &[(String, Error)] {
        &self.errors
    }

    /// Whether the branch ended with no failures.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Decomposes into context, cursor, and errors.
    #[must_use]
    pub fn into_parts(self) -> (ExecutionContext, Cursor, Vec<(String, Error)>) {
        (self.context, self.cursor, self.errors)
    }
}

impl std::fmt::Debug for BranchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BranchResult")
            .field("cursor", &self.cursor)
            .field("bindings", &self.context.len())
            .field("errors", &self.errors)
            .finish()
    }
}

/// Descends from `node`, trying every permitted child against a private
/// clone of the cursor and context.
///
/// Each failing child records its error at this level; each succeeding
/// child consumes the separator its syntax demands, inherits its executor
/// into the clone, and recurses. When several branches survive, the stable
/// winner is the one whose cursor is exhausted, then the one with the
/// fewest accumulated errors, then the earliest declared.
#[must_use]
pub fn descend(
    node: &CommandNode,
    cursor: Cursor,
    ctx: ExecutionContext,
    options: &MatchOptions,
) -> BranchResult {
    let mut potentials: Vec<BranchResult> = Vec::new();
    let mut errors: Vec<(String, Error)> = Vec::new();

    for child in node.relevant_children(&cursor, options) {
        if !child.can_use(ctx.sender().as_ref()) {
            continue;
        }
        let mut branch_cursor = cursor.clone();
        let mut branch_ctx = ctx.clone();
        let parsed = match child.kind() {
            NodeKind::Literal => child.parse_literal(&mut branch_cursor, options),
            NodeKind::Argument(spec) => {
                ArgumentSpec::parse(spec, &mut branch_cursor, &mut branch_ctx)
            }
        };
        if let Err(err) = parsed {
            errors.push((child.name().to_owned(), err));
            continue;
        }
        if child.is_syntax() && branch_cursor.has_remaining() && child.needs_space_after() {
            if branch_cursor.skip_char(' ') {
                if options.allow_multi_spaces {
                    branch_cursor.skip_space();
                }
            } else {
                errors.push((
                    child.name().to_owned(),
                    Error::expected_separator(branch_cursor.marker_here()),
                ));
                continue;
            }
        }
        if let Some(executor) = child.executor() {
            branch_ctx.set_executor(Arc::clone(executor));
        }
        potentials.push(descend(&child, branch_cursor, branch_ctx, options));
    }

    if potentials.is_empty() {
        return BranchResult {
            context: ctx,
            cursor,
            errors,
        };
    }
    potentials.sort_by_key(|p| (p.cursor.has_remaining(), p.errors.len()));
    potentials.remove(0)
}
