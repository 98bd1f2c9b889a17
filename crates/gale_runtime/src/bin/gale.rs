//! Gale CLI entry point.

use std::env;
use std::io::{self, BufRead};
use std::process::ExitCode;
use std::sync::Arc;

use gale_engine::CommandEngine;
use gale_foundation::ConsoleSender;
use gale_runtime::{Repl, demo};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    return Err("--seed requires a value".into());
                }
                config.seed = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {}", args[i]))?,
                );
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("gale {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut engine = match config.seed {
        Some(seed) => CommandEngine::with_seed(seed),
        None => CommandEngine::new(),
    };
    demo::install(&mut engine).map_err(|errors| {
        errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    })?;
    let engine = Arc::new(engine);

    if config.batch_mode {
        let sender = Arc::new(ConsoleSender);
        for line in io::stdin().lock().lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            engine.dispatch(sender.clone(), trimmed)?;
        }
        return Ok(());
    }

    let mut repl = Repl::new(engine)?;
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!("gale - command parsing and dispatch console");
    println!();
    println!("USAGE:");
    println!("    gale [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show this help");
    println!("    -V, --version    Show version");
    println!("    -b, --batch      Read commands from stdin and exit");
    println!("    --seed <N>       Seed the engine's priority coin-flips");
    println!();
    println!("COMMANDS:");
    println!("    kick <target> [reason]   Kick a user");
    println!("    ban <target> <days>      Ban a user (1-365 days)");
    println!("    say <message>            Echo a message");
    println!("    roll <sides>             Report the midpoint of a die");
}
