use std::io::Write;

use anyhow::Context;
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::{debug, warn};

use crate::{eval::*, num::Number};

pub const PROMPT: &str = "calc> ";

const BANNER: &str = "Welcome to the calculator. Type 'help' or 'exit'.";

pub const HELP: &str = "Simple command-line calculator.
Commands: add|+  sub|-  mul|*  div|/  help  exit
Usage: <operation> <number1> <number2>
Examples:
  add 2 3
  * 4 5
  div 10 2";

/// A line read from the user, or the end of the session (EOF / CTRL-C).
#[derive(Debug, PartialEq)]
pub enum Input {
    Line(String),
    Closed,
}

pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Input, ReadlineError>;
}

impl LineReader for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Input, ReadlineError> {
        let input = to_input(self.readline(prompt))?;

        if let Input::Line(line) = &input {
            if !line.trim().is_empty() {
                let _ = self.add_history_entry(line.as_str());
            }
        }

        Ok(input)
    }
}

fn to_input(read: Result<String, ReadlineError>) -> Result<Input, ReadlineError> {
    match read {
        Ok(line) => Ok(Input::Line(line)),
        Err(ReadlineError::Interrupted) => {
            debug!("CTRL-C");
            Ok(Input::Closed)
        }
        Err(ReadlineError::Eof) => {
            debug!("CTRL-D");
            Ok(Input::Closed)
        }
        Err(err) => {
            warn!(error = %err, "line editor failed");
            Err(err)
        }
    }
}

pub fn run(quiet: bool) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new().context("unable to initialize the line editor")?;
    let mut stdout = std::io::stdout();

    repl(&mut rl, &mut stdout, quiet)
}

pub fn repl<R: LineReader, W: Write>(
    reader: &mut R,
    out: &mut W,
    quiet: bool,
) -> anyhow::Result<()> {
    if !quiet {
        writeln!(out, "{}", BANNER)?;
    }

    loop {
        let line = match reader.read_line(PROMPT).context("unable to read input")? {
            Input::Line(line) => line,
            Input::Closed => {
                writeln!(out, "\nGoodbye.")?;
                return Ok(());
            }
        };

        match eval(&line) {
            Ok(Outcome::Nothing) => {}
            Ok(Outcome::Exit) => {
                writeln!(out, "Exiting.")?;
                return Ok(());
            }
            Ok(Outcome::Help) => writeln!(out, "{}", HELP)?,
            Ok(Outcome::Calculated { operation, value }) => {
                debug!(%operation, value, "calculated");
                writeln!(out, "Result: {}", Number(value))?;
            }
            Err(e) => {
                debug!(line = line.as_str(), error = %e, "rejected");
                writeln!(out, "Error: {}", e)?;
            }
        }
    }
}
