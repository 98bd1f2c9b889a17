//! Backtracking descent tests.
//!
//! Branch selection among competing siblings.

use std::sync::Arc;

use gale_engine::CommandEngine;
use gale_foundation::{ErrorKind, Sender, Value};
use gale_tree::{CommandBuilder, adapters::EnumAdapter};

use crate::common::RecordingSender;

fn sender() -> Arc<RecordingSender> {
    Arc::new(RecordingSender::new())
}

#[test]
fn literal_precedence_over_argument_sibling() {
    // T1: the word "list" always selects the literal branch.
    let mut engine = CommandEngine::with_seed(1);
    engine
        .register(
            CommandBuilder::literal("user")
                .then(
                    CommandBuilder::literal("list")
                        .executes(|ctx| {
                            ctx.sender().success("listed");
                            Ok(())
                        }),
                )
                .then(
                    CommandBuilder::argument("name", "word").executes(|ctx| {
                        let name = ctx.get_str("name")?.to_owned();
                        ctx.sender().success(&name);
                        Ok(())
                    }),
                ),
        )
        .unwrap();

    let s = sender();
    engine
        .dispatch(Arc::<RecordingSender>::clone(&s), "user list")
        .unwrap();
    assert_eq!(s.last(), Some((true, "listed".to_owned())));
}

#[test]
fn ambiguity_resolves_to_the_parsing_branch() {
    // T3: "5" fails the enum branch, so the int branch is the sole
    // survivor.
    let mut engine = CommandEngine::with_seed(1);
    engine.add_adapter(Arc::new(EnumAdapter::new("axis", ["x", "y"])));
    engine
        .register(
            CommandBuilder::literal("set")
                .then(
                    CommandBuilder::argument("amount", "int")
                        .executes(|ctx| Ok(Value::Int(ctx.get_int("amount")?))),
                )
                .then(
                    CommandBuilder::argument("axis", "axis")
                        .executes(|ctx| Ok(Value::from(ctx.get_str("axis")?))),
                ),
        )
        .unwrap();

    let branch = engine.parse(sender(), "set 5");
    assert!(branch.is_clean());
    let result = engine.execute(branch).unwrap();
    assert_eq!(result.payload(), Some(&Value::Int(5)));
}

#[test]
fn exhausted_cursor_beats_leftover_input() {
    // T4, first half: the branch that consumes all input wins.
    let mut engine = CommandEngine::with_seed(1);
    engine
        .register(
            CommandBuilder::literal("say")
                .then(
                    CommandBuilder::argument("word", "word")
                        .executes(|_| Ok(Value::from("word-branch"))),
                )
                .then(
                    CommandBuilder::argument("message", "text")
                        .executes(|_| Ok(Value::from("text-branch"))),
                ),
        )
        .unwrap();

    let result = engine
        .execute(engine.parse(sender(), "say two words"))
        .unwrap();
    assert_eq!(result.payload(), Some(&Value::from("text-branch")));
}

#[test]
fn full_ties_break_by_registration_order() {
    // T4, second half: both branches consume everything; the first
    // declared wins.
    let mut engine = CommandEngine::with_seed(1);
    engine
        .register(
            CommandBuilder::literal("tag")
                .then(
                    CommandBuilder::argument("first", "word")
                        .executes(|_| Ok(Value::from("first"))),
                )
                .then(
                    CommandBuilder::argument("second", "word")
                        .executes(|_| Ok(Value::from("second"))),
                ),
        )
        .unwrap();

    let result = engine.execute(engine.parse(sender(), "tag solo")).unwrap();
    assert_eq!(result.payload(), Some(&Value::from("first")));
}

#[test]
fn missing_separator_fails_the_branch() {
    let mut engine = CommandEngine::with_seed(1);
    engine
        .register(
            CommandBuilder::literal("set").then(
                CommandBuilder::argument("n", "int").executes(|_| Ok(())),
            ),
        )
        .unwrap();

    let err = engine
        .execute(engine.parse(sender(), "set 5x"))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExpectedSeparator);
}

#[test]
fn multiple_spaces_collapse_by_default() {
    let mut engine = CommandEngine::with_seed(1);
    engine
        .register(
            CommandBuilder::literal("kick").then(
                CommandBuilder::argument("target", "word")
                    .executes(|ctx| Ok(Value::from(ctx.get_str("target")?))),
            ),
        )
        .unwrap();

    let result = engine
        .execute(engine.parse(sender(), "kick    bob"))
        .unwrap();
    assert_eq!(result.payload(), Some(&Value::from("bob")));
}

#[test]
fn gated_branch_is_invisible_to_the_sender() {
    let mut engine = CommandEngine::with_seed(1);
    engine
        .register(
            CommandBuilder::literal("shutdown")
                .requires(|sender| {
                    sender
                        .as_any()
                        .downcast_ref::<RecordingSender>()
                        .is_none()
                })
                .executes(|_| Ok(())),
        )
        .unwrap();

    let err = engine
        .execute(engine.parse(sender(), "shutdown"))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownArgument);
}
