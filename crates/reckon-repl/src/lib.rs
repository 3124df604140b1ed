//! reckon REPL — interactive terminal front-end for the reckon calculator.
//!
//! Owns everything that touches the terminal:
//!
//! - Line editing and in-memory history (rustyline)
//! - Banner, menu and coloured output
//! - Ctrl-C / Ctrl-D handling
//!
//! The calculator itself is a [`reckon_kernel::Session`]; this crate only
//! feeds it lines and prints what it answers.

pub mod banner;
pub mod config;
pub mod style;

use std::io::IsTerminal;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use reckon_kernel::{Output, Session};

pub use config::ReplConfig;
use style::Styler;

/// REPL state: the session plus how to render it.
pub struct Repl {
    session: Session,
    styler: Styler,
}

impl Repl {
    /// Create a REPL with plain (uncoloured) output.
    pub fn new() -> Self {
        Self::with_styler(Styler::plain())
    }

    /// Create a REPL from configuration. Colour is only used when stdout
    /// is a terminal.
    pub fn from_config(config: &ReplConfig) -> Self {
        let color = config.color && std::io::stdout().is_terminal();
        Self::with_styler(Styler::new(color))
    }

    fn with_styler(styler: Styler) -> Self {
        Self {
            session: Session::new(),
            styler,
        }
    }

    /// Text to print before the first prompt.
    pub fn intro(&self) -> String {
        self.render(&self.session.intro())
    }

    /// Prompt for the next line.
    pub fn prompt(&self) -> String {
        self.session.prompt()
    }

    /// True once the session has ended.
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    /// Process a single line of input.
    pub fn process_line(&mut self, line: &str) -> Option<String> {
        let outputs = self.session.process_line(line);
        self.render_nonempty(&outputs)
    }

    /// Input ended (Ctrl-D or closed stdin).
    pub fn end_of_input(&mut self) -> Option<String> {
        let outputs = self.session.end_of_input();
        self.render_nonempty(&outputs)
    }

    fn render_nonempty(&self, outputs: &[Output]) -> Option<String> {
        if outputs.is_empty() {
            None
        } else {
            Some(self.render(outputs))
        }
    }

    fn render(&self, outputs: &[Output]) -> String {
        outputs
            .iter()
            .map(|output| self.styler.paint(output))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the REPL until the session ends.
pub fn run(config: &ReplConfig) -> Result<()> {
    if config.banner {
        println!("{}", banner::current());
    }

    let mut rl: Editor<(), DefaultHistory> = Editor::new()
        .context("Failed to create editor")?;

    let mut repl = Repl::from_config(config);
    println!("{}", repl.intro());

    while !repl.is_finished() {
        match rl.readline(&repl.prompt()) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());

                if let Some(output) = repl.process_line(&line) {
                    println!("{}", output);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                if let Some(output) = repl.end_of_input() {
                    println!("{}", output);
                }
            }
            Err(err) => {
                return Err(err).context("Failed to read input");
            }
        }
    }

    Ok(())
}
