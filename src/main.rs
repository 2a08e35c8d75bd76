//! minilisp CLI

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use minilisp::repl::{self, Repl, ReplConfig, RunSummary};
use minilisp::LineEvaluator;

#[derive(Parser)]
#[command(name = "minilisp", version, about = "A tiny line-oriented Lisp evaluator")]
struct Cli {
    /// Evaluate each line of this file instead of starting the REPL
    file: Option<PathBuf>,

    /// Evaluate a line and exit (repeatable)
    #[arg(short, long = "eval", value_name = "LINE")]
    eval: Vec<String>,

    /// Prompt shown before each line
    #[arg(long, default_value = repl::DEFAULT_PROMPT)]
    prompt: String,

    /// History file (defaults to ~/.minilisp_history)
    #[arg(long, value_name = "PATH", conflicts_with = "no_history")]
    history: Option<PathBuf>,

    /// Do not load or save line history
    #[arg(long)]
    no_history: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn repl_config(&self) -> ReplConfig {
        let mut config = ReplConfig {
            prompt: self.prompt.clone(),
            ..ReplConfig::default()
        };
        if self.no_history {
            config.history_file = None;
        } else if let Some(ref path) = self.history {
            config.history_file = Some(path.clone());
        }
        config
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Evaluates the `-e` lines, then the script file; `exit` in either ends both
fn run_batch(cli: &Cli, config: &ReplConfig) -> Result<RunSummary> {
    let mut evaluator = LineEvaluator::new();
    let mut stdout = io::stdout();

    let mut summary = repl::run_lines(
        &mut evaluator,
        &config.exit_command,
        &cli.eval,
        &mut stdout,
    )
    .context("failed to write output")?;

    if let (false, Some(path)) = (summary.exited, cli.file.as_ref()) {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let script =
            repl::run_lines(&mut evaluator, &config.exit_command, source.lines(), &mut stdout)
                .context("failed to write output")?;
        tracing::debug!(path = %path.display(), failures = script.failures, "script finished");
        summary.failures += script.failures;
        summary.exited = script.exited;
    }

    Ok(summary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.repl_config();

    if !cli.eval.is_empty() || cli.file.is_some() {
        let summary = run_batch(&cli, &config)?;
        if summary.failures > 0 {
            std::process::exit(1);
        }
        return Ok(());
    }

    let mut repl = Repl::new(config).context("failed to initialize line editor")?;
    repl.run().context("line editor failed")?;
    Ok(())
}
