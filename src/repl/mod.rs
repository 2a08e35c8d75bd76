//! Interactive host loop for minilisp
//!
//! The host reads one line at a time, hands non-empty lines to the
//! [`LineEvaluator`], and displays results. State carries over between lines
//! only through the evaluator's symbol table.

use std::io::{self, Write};
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

use crate::error::Error;
use crate::runtime::{LineEvaluator, SymbolTable, Value};

/// Default prompt
pub const DEFAULT_PROMPT: &str = "> ";
/// History file name, placed in the home directory
pub const HISTORY_FILE: &str = ".minilisp_history";
/// Line that ends the session without being evaluated
pub const EXIT_COMMAND: &str = "exit";

/// Host settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Prompt shown before each line
    pub prompt: String,
    /// Where line history is loaded from and saved to; `None` disables persistence
    pub history_file: Option<PathBuf>,
    /// Reserved line that terminates the loop
    pub exit_command: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: DEFAULT_PROMPT.to_string(),
            history_file: dirs_home().map(|home| home.join(HISTORY_FILE)),
            exit_command: EXIT_COMMAND.to_string(),
        }
    }
}

/// Outcome of feeding one line to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Blank line, nothing evaluated
    Skip,
    /// The exit command was entered
    Exit,
    /// The line evaluated; text to display, if it produced a value
    Evaluated(Option<String>),
    /// The line was rejected
    Failed(Error),
}

/// Feeds one raw input line to `evaluator`
pub fn step<W: Write>(evaluator: &mut LineEvaluator<W>, exit_command: &str, line: &str) -> Step {
    let line = line.trim();
    if line.is_empty() {
        return Step::Skip;
    }
    if line == exit_command {
        return Step::Exit;
    }

    match evaluator.parse(line) {
        Ok(value) => Step::Evaluated(value.map(|v| render_result(&evaluator.symbols, &v))),
        Err(err) => {
            tracing::debug!(%line, error = %err, "line rejected");
            Step::Failed(err)
        }
    }
}

/// Display text for a line's result
///
/// Text that happens to name a live binding is shown as `name: value`, so
/// `(set x 5)` displays `x: 5`. A literal that collides with a variable name
/// is rendered the same way.
pub fn render_result(symbols: &SymbolTable, value: &Value) -> String {
    if let Value::Text(name) = value {
        if let Some(bound) = symbols.lookup(name) {
            return format!("{}: {}", name, bound);
        }
    }
    value.to_string()
}

/// Totals from a non-interactive run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines that were rejected
    pub failures: usize,
    /// Whether the exit command was reached
    pub exited: bool,
}

/// Runs `lines` through the same rules as the interactive loop
///
/// Results and error messages go to `display`. Stops early at the exit
/// command.
pub fn run_lines<W, D, I, S>(
    evaluator: &mut LineEvaluator<W>,
    exit_command: &str,
    lines: I,
    display: &mut D,
) -> io::Result<RunSummary>
where
    W: Write,
    D: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut summary = RunSummary::default();
    for line in lines {
        match step(evaluator, exit_command, line.as_ref()) {
            Step::Exit => {
                summary.exited = true;
                break;
            }
            Step::Skip | Step::Evaluated(None) => {}
            Step::Evaluated(Some(text)) => writeln!(display, "{}", text)?,
            Step::Failed(err) => {
                summary.failures += 1;
                writeln!(display, "{}", err)?;
            }
        }
    }
    display.flush()?;
    Ok(summary)
}

/// Interactive session state
pub struct Repl {
    editor: DefaultEditor,
    evaluator: LineEvaluator,
    config: ReplConfig,
}

impl Repl {
    /// Create a new REPL, loading history if a history file is configured
    pub fn new(config: ReplConfig) -> RlResult<Self> {
        let mut editor = DefaultEditor::new()?;
        if let Some(ref path) = config.history_file {
            if let Err(err) = editor.load_history(path) {
                tracing::debug!(path = %path.display(), error = %err, "no history loaded");
            }
        }

        Ok(Repl {
            editor,
            evaluator: LineEvaluator::new(),
            config,
        })
    }

    /// Run the REPL until the exit command or end of input
    pub fn run(&mut self) -> RlResult<()> {
        tracing::info!(prompt = %self.config.prompt, "session started");

        loop {
            match self.editor.readline(&self.config.prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        let _ = self.editor.add_history_entry(trimmed);
                    }

                    match step(&mut self.evaluator, &self.config.exit_command, &line) {
                        Step::Exit => break,
                        Step::Skip | Step::Evaluated(None) => {}
                        Step::Evaluated(Some(text)) => println!("{}", text),
                        Step::Failed(err) => println!("{}", err),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("Error: {err}");
                    break;
                }
            }
        }

        if let Some(ref path) = self.config.history_file {
            if let Err(err) = self.editor.save_history(path) {
                tracing::warn!(path = %path.display(), error = %err, "failed to save history");
            }
        }

        tracing::info!("session ended");
        Ok(())
    }
}

fn dirs_home() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}
