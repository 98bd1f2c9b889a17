//! Completion suggestion tests.
//!
//! Candidates offered at the end of partial input.

use std::sync::Arc;

use gale_engine::CommandEngine;
use gale_foundation::Sender;
use gale_tree::{CommandBuilder, adapters::EnumAdapter};

use crate::common::RecordingSender;

fn sender() -> Arc<RecordingSender> {
    Arc::new(RecordingSender::new())
}

fn demo_engine() -> CommandEngine {
    let mut engine = CommandEngine::with_seed(1);
    engine.add_adapter(Arc::new(EnumAdapter::new("color", ["red", "green", "blue"])));
    engine
        .register(
            CommandBuilder::literal("kick").then(
                CommandBuilder::argument("target", "word").executes(|_| Ok(())),
            ),
        )
        .unwrap();
    engine
        .register(
            CommandBuilder::literal("kill").then(
                CommandBuilder::argument("target", "word").executes(|_| Ok(())),
            ),
        )
        .unwrap();
    engine
        .register(
            CommandBuilder::literal("paint").then(
                CommandBuilder::argument("color", "color").executes(|_| Ok(())),
            ),
        )
        .unwrap();
    engine
        .register(
            CommandBuilder::literal("silence").then(
                CommandBuilder::argument("on", "bool").executes(|_| Ok(())),
            ),
        )
        .unwrap();
    engine
}

#[test]
fn empty_input_offers_all_commands() {
    let engine = demo_engine();
    let suggestions = engine.suggest(sender(), "");
    assert_eq!(suggestions, vec!["kick", "kill", "paint", "silence"]);
}

#[test]
fn prefix_narrows_literals() {
    let engine = demo_engine();
    assert_eq!(engine.suggest(sender(), "ki"), vec!["kick", "kill"]);
    assert_eq!(engine.suggest(sender(), "pa"), vec!["paint"]);
}

#[test]
fn adapter_supplies_argument_candidates() {
    let engine = demo_engine();
    assert_eq!(
        engine.suggest(sender(), "paint "),
        vec!["blue", "green", "red"]
    );
    assert_eq!(engine.suggest(sender(), "paint g"), vec!["green"]);
}

#[test]
fn bool_arguments_offer_keywords() {
    let engine = demo_engine();
    assert_eq!(engine.suggest(sender(), "silence "), vec!["false", "true"]);
}

#[test]
fn word_arguments_offer_nothing() {
    let engine = demo_engine();
    assert!(engine.suggest(sender(), "kick b").is_empty());
}

#[test]
fn gated_commands_are_hidden() {
    let mut engine = demo_engine();
    engine
        .register(
            CommandBuilder::literal("killswitch")
                .requires(|s| s.as_any().downcast_ref::<RecordingSender>().is_none())
                .executes(|_| Ok(())),
        )
        .unwrap();
    assert_eq!(engine.suggest(sender(), "kil"), vec!["kill"]);
}
