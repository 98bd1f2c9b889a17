//! The interactive console loop.

use std::sync::Arc;

use gale_engine::CommandEngine;
use gale_foundation::{ConsoleSender, Result, Sender};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// The interactive REPL: reads lines, dispatches them against the engine,
/// and routes feedback through the sender.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The shared engine commands run against.
    engine: Arc<CommandEngine>,

    /// The line editor for input.
    editor: E,

    /// Where command feedback goes.
    sender: Arc<dyn Sender>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(engine: Arc<CommandEngine>) -> Result<Self> {
        let editor = RustylineEditor::new(Arc::clone(&engine))?;
        Ok(Self::with_editor(engine, editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(engine: Arc<CommandEngine>, editor: E) -> Self {
        Self {
            engine,
            editor,
            sender: Arc::new(ConsoleSender),
            show_banner: true,
            prompt: "gale> ".to_string(),
        }
    }

    /// Routes feedback to a different sender.
    #[must_use]
    pub fn with_sender(mut self, sender: Arc<dyn Sender>) -> Self {
        self.sender = sender;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The engine this REPL dispatches against.
    #[must_use]
    pub fn engine(&self) -> &Arc<CommandEngine> {
        &self.engine
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally or a handler raises
    /// an internal error.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            self.editor.add_history(trimmed);
            if trimmed == "exit" || trimmed == "quit" {
                break;
            }
            self.engine.dispatch(Arc::clone(&self.sender), trimmed)?;
        }

        println!("\nGoodbye!");
        Ok(())
    }

    fn print_banner(&self) {
        println!("gale {}", env!("CARGO_PKG_VERSION"));
        println!("Type a command, or 'exit' to quit.");
    }
}
