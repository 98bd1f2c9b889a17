//! Node matching tests.
//!
//! Literal boundaries and candidate selection.

use std::sync::Arc;

use gale_foundation::Cursor;
use gale_tree::{
    AdapterRegistry, ArgumentSpec, CommandBuilder, CommandNode, MatchOptions, RegistrationContext,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn arg_node(name: &str, tag: &str) -> Arc<CommandNode> {
    let registry = AdapterRegistry::with_defaults();
    let mut ctx = RegistrationContext::new(name.to_owned());
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    Arc::new(CommandBuilder::argument(name, tag).build(&registry, &mut ctx, &mut rng))
}

#[test]
fn case_sensitive_matching_can_be_enabled() {
    let options = MatchOptions {
        literals_ignore_case: false,
        ..MatchOptions::default()
    };
    let node = CommandNode::literal("kick");
    let mut cursor = Cursor::new("KICK bob");
    assert!(node.parse_literal(&mut cursor, &options).is_err());
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn literal_matches_at_end_of_input() {
    let node = CommandNode::literal("help");
    let mut cursor = Cursor::new("help");
    assert!(node.parse_literal(&mut cursor, &MatchOptions::default()).is_ok());
    assert!(!cursor.has_remaining());
}

#[test]
fn literal_child_wins_over_argument_siblings() {
    // T1: a word equal to a literal child's name never descends into an
    // argument sibling.
    let mut root = CommandNode::root();
    root.add_child(Arc::new(CommandNode::literal("list")));
    root.add_child(arg_node("target", "word"));

    let cursor = Cursor::new("list");
    let relevant = root.relevant_children(&cursor, &MatchOptions::default());
    assert_eq!(relevant.len(), 1);
    assert_eq!(relevant[0].name(), "list");
}

#[test]
fn non_matching_word_competes_across_arguments() {
    let mut root = CommandNode::root();
    root.add_child(Arc::new(CommandNode::literal("list")));
    root.add_child(arg_node("count", "int"));
    root.add_child(arg_node("name", "word"));

    let cursor = Cursor::new("bob");
    let relevant = root.relevant_children(&cursor, &MatchOptions::default());
    let names: Vec<&str> = relevant.iter().map(|n| n.name()).collect();
    assert_eq!(names, vec!["count", "name"]);
}

#[test]
fn spec_accessor_distinguishes_kinds() {
    let literal = CommandNode::literal("x");
    assert!(literal.spec().is_none());
    let arg = arg_node("y", "word");
    assert!(arg.spec().is_some());
}

#[test]
fn argument_spec_reports_declared_shape() {
    let spec = ArgumentSpec::new("target", "word");
    assert!(spec.required());
    assert!(spec.is_syntax());
    assert!(spec.needs_space_after());
    assert!(spec.adapter().is_none());
}
