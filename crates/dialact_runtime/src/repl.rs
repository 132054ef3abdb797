//! The main REPL implementation.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use dialact_foundation::{Error, ErrorKind, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// The interactive REPL.
///
/// Each input line is parsed as a one-line dialog action script; the
/// parsed action is echoed in debug form and any `let` binding is
/// applied to the session. Parse errors are printed and the loop
/// continues.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (variable bindings).
    session: Session,

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
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "dialact> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Consumes the REPL, returning its session.
    #[must_use]
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally. Parse errors are
    /// printed and do not end the loop.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    self.print_error(&e);
                }
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-parse-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!("\nInput cancelled.");
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        // Skip empty lines (an empty script line would be a parse error).
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&input);

        // REPL commands start with ':' and are not part of the grammar.
        if let Some(command) = trimmed.strip_prefix(':') {
            return Ok(self.run_command(command));
        }

        match self.session.run_script(&input) {
            Ok(actions) => {
                for action in &actions {
                    println!("{action}");
                }
            }
            Err(e) => {
                self.print_error(&e);
            }
        }

        Ok(true)
    }

    /// Handles a `:command` line. Returns false to exit the loop.
    fn run_command(&self, command: &str) -> bool {
        match command.trim() {
            "bindings" => {
                let mut bindings: Vec<_> = self.session.bindings().collect();
                bindings.sort_by_key(|(name, _)| name.to_string());
                for (name, value) in bindings {
                    println!("{name} = {value}");
                }
                true
            }
            "quit" | "exit" => false,
            other => {
                eprintln!("unknown command :{other} (try :bindings or :quit)");
                true
            }
        }
    }

    /// Runs a script file through the session, printing each action.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the script fails
    /// to parse.
    pub fn run_file(&mut self, path: &Path) -> Result<()> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::Io(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        })?;

        // Script files routinely end with a newline; the grammar treats
        // an empty final line as a missing command, so trim it here.
        let source = source.strip_suffix('\n').unwrap_or(&source);

        let actions = self.session.run_script(source)?;
        for action in &actions {
            println!("{action}");
        }
        Ok(())
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        match &error.context {
            Some(ctx) => eprintln!("\x1b[31mError: {error} ({ctx})\x1b[0m"),
            None => eprintln!("\x1b[31mError: {error}\x1b[0m"),
        }
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("Dialact REPL v{}", env!("CARGO_PKG_VERSION"));
        println!("Type dialog action lines to parse them. Use Ctrl+D to exit.\n");

        let _ = io::stdout().flush();
    }
}
