//! Execute-phase tests.
//!
//! Error surfacing from finished branches and outcome normalization.

use std::sync::Arc;

use gale_engine::CommandEngine;
use gale_foundation::{Error, ErrorKind, Value};
use gale_tree::CommandBuilder;

use crate::common::RecordingSender;

fn sender() -> Arc<RecordingSender> {
    Arc::new(RecordingSender::new())
}

#[test]
fn single_failure_surfaces_verbatim() {
    // T2: the sole candidate's own error comes back, not a summary.
    let mut engine = CommandEngine::with_seed(1);
    engine
        .register(
            CommandBuilder::literal("ban").then(
                CommandBuilder::argument("days", "int").executes(|_| Ok(())),
            ),
        )
        .unwrap();

    let err = engine
        .execute(engine.parse(sender(), "ban soon"))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExpectedNumber);
}

#[test]
fn several_failures_collapse_to_unknown_argument() {
    let mut engine = CommandEngine::with_seed(1);
    engine
        .register(CommandBuilder::argument("n", "int").executes(|_| Ok(())))
        .unwrap();
    engine
        .register(CommandBuilder::argument("flag", "bool").executes(|_| Ok(())))
        .unwrap();

    let err = engine
        .execute(engine.parse(sender(), "mystery"))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownArgument);
}

#[test]
fn leftover_input_is_unknown_argument() {
    let mut engine = CommandEngine::with_seed(1);
    engine
        .register(
            CommandBuilder::literal("kick").then(
                CommandBuilder::argument("target", "word").executes(|_| Ok(())),
            ),
        )
        .unwrap();

    let err = engine
        .execute(engine.parse(sender(), "kick bob extra"))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownArgument);
    let marker = err.marker.expect("leftover errors carry a span");
    assert_eq!(marker.text(), "extra");
}

#[test]
fn executorless_path_is_invalid_command() {
    let mut engine = CommandEngine::with_seed(1);
    engine
        .register(CommandBuilder::literal("kick").then(CommandBuilder::argument(
            "target", "word",
        )))
        .unwrap();

    let err = engine
        .execute(engine.parse(sender(), "kick bob"))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidCommand);
}

#[test]
fn handler_error_becomes_failed_result() {
    let mut engine = CommandEngine::with_seed(1);
    engine
        .register(CommandBuilder::literal("boom").executes(|_| {
            Err::<Value, _>(Error::custom("it broke"))
        }))
        .unwrap();

    let result = engine.execute(engine.parse(sender(), "boom")).unwrap();
    assert!(!result.is_success());
    assert_eq!(result.message(), "it broke");
}

#[test]
fn internal_handler_error_propagates() {
    let mut engine = CommandEngine::with_seed(1);
    engine
        .register(CommandBuilder::literal("oops").executes(|ctx| {
            // Reads a binding that was never declared.
            Ok(Value::Int(ctx.get_int("missing")?))
        }))
        .unwrap();

    let err = engine.execute(engine.parse(sender(), "oops")).unwrap_err();
    assert!(err.is_internal());
}

#[test]
fn dispatch_routes_feedback_and_folds_errors() {
    let mut engine = CommandEngine::with_seed(1);
    engine
        .register(
            CommandBuilder::literal("ping")
                .executes(|_| Ok(gale_foundation::CommandResult::success_with("pong"))),
        )
        .unwrap();

    let s = sender();
    let ok = engine.dispatch(s.clone(), "ping").unwrap();
    assert!(ok.is_success());
    assert_eq!(s.last(), Some((true, "pong".to_owned())));

    let failed = engine.dispatch(s.clone(), "nope").unwrap();
    assert!(!failed.is_success());
    let (success, message) = s.last().unwrap();
    assert!(!success);
    assert!(message.contains("unknown argument"));
}

#[test]
fn duplicate_top_level_registration_is_rejected() {
    let mut engine = CommandEngine::with_seed(1);
    engine
        .register(CommandBuilder::literal("kick").executes(|_| Ok(())))
        .unwrap();
    let errors = engine
        .register(CommandBuilder::literal("kick").executes(|_| Ok(())))
        .unwrap_err();
    assert_eq!(errors.len(), 1);
}

#[test]
fn register_hook_can_cancel_silently() {
    let mut engine = CommandEngine::with_seed(1);
    engine.set_on_register(Arc::new(|node| node.name() != "banned"));
    engine
        .register(CommandBuilder::literal("banned").executes(|_| Ok(())))
        .unwrap();

    let err = engine
        .execute(engine.parse(sender(), "banned"))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownArgument);
}
