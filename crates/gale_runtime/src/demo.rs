//! A small demo command set so the binary is usable standalone.

use gale_engine::CommandEngine;
use gale_foundation::{CommandResult, Value};
use gale_tree::{CommandBuilder, ConstraintTag, RegistrationError};

/// Registers the demo commands: `kick`, `ban`, `say`, and `roll`.
///
/// # Errors
///
/// Registration errors from any of the definitions.
pub fn install(engine: &mut CommandEngine) -> Result<(), Vec<RegistrationError>> {
    engine.register(
        CommandBuilder::literal("kick")
            .description("Kick a user, optionally with a reason")
            .then(
                CommandBuilder::argument("target", "word").then(
                    CommandBuilder::argument("reason", "string")
                        .optional()
                        .default("none")
                        .executes(|ctx| {
                            let target = ctx.get_str("target")?.to_owned();
                            let reason = ctx.get_str("reason")?.to_owned();
                            Ok(CommandResult::success_with(format!(
                                "kicked {target} (reason: {reason})"
                            )))
                        }),
                ),
            ),
    )?;
    engine.register(
        CommandBuilder::literal("ban")
            .description("Ban a user for a number of days")
            .then(
                CommandBuilder::argument("target", "word").then(
                    CommandBuilder::argument("days", "int")
                        .constraint(ConstraintTag::range(1.0, 365.0))
                        .executes(|ctx| {
                            let target = ctx.get_str("target")?.to_owned();
                            let days = ctx.get_int("days")?;
                            Ok(CommandResult::success_with(format!(
                                "banned {target} for {days} day(s)"
                            )))
                        }),
                ),
            ),
    )?;
    engine.register(
        CommandBuilder::literal("say")
            .description("Echo a message")
            .then(CommandBuilder::argument("message", "text").executes(|ctx| {
                let message = ctx.get_str("message")?.to_owned();
                Ok(CommandResult::success_with(message))
            })),
    )?;
    engine.register(
        CommandBuilder::literal("roll")
            .description("Report the midpoint of a die")
            .then(
                CommandBuilder::argument("sides", "int")
                    .constraint(ConstraintTag::range(2.0, 1000.0))
                    .executes(|ctx| {
                        let sides = ctx.get_int("sides")?;
                        Ok(Value::Int(sides / 2 + 1))
                    }),
            ),
    )?;
    Ok(())
}
