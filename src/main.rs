use anyhow::{Context, Result};
use clap::Parser;
use novacalc::calculator::{copy_to_clipboard, parse_keys};
use novacalc::config::Config;
use novacalc::session::Session;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Keyboard-driven calculator. Type keys (`7*8=`, `12 + 3 Enter`, `AC`,
/// `+/-`, `%`, `Backspace`) or commands (`:history`, `:json`,
/// `:clear-history`, `:copy`, `:quit`).
#[derive(Parser, Debug)]
#[command(name = "novacalc", version, about)]
struct Args {
    /// Path to a config file (defaults to <config_dir>/novacalc/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of calculations kept in the history.
    #[arg(long)]
    capacity: Option<usize>,

    /// Apply one line of keys, print the result, and exit.
    #[arg(long)]
    keys: Option<String>,

    /// With --keys, print the history as JSON instead of the display.
    #[arg(long, requires = "keys")]
    json: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = Config::load(args.config.as_deref()).context("Failed to load config")?;
    if let Some(capacity) = args.capacity {
        anyhow::ensure!(capacity > 0, "--capacity must be at least 1");
        config.history.capacity = capacity;
    }

    let mut session = Session::new(config.history.capacity);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(line) = args.keys {
        session.press_all(parse_keys(&line)?);
        if args.json {
            writeln!(out, "{}", session.history().to_json()?)?;
        } else {
            render(&mut out, &session)?;
        }
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();

        match line {
            ":quit" | ":q" => break,
            ":history" => render_history(&mut out, &session, &config)?,
            ":json" => writeln!(out, "{}", session.history().to_json()?)?,
            ":clear-history" => {
                session.clear_history();
                render(&mut out, &session)?;
            }
            ":copy" => match copy_to_clipboard(session.display()) {
                Ok(()) => writeln!(out, "copied {}", session.display())?,
                Err(err) => tracing::warn!("{err}"),
            },
            keys => match parse_keys(keys) {
                Ok(inputs) => {
                    session.press_all(inputs);
                    render(&mut out, &session)?;
                }
                Err(err) => tracing::warn!("{err}"),
            },
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Print the pending line (if any) and the display, right-aligned.
fn render(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let view = session.view();
    let width = novacalc::calculator::MAX_DISPLAY_LEN + 4;

    if let Some(pending) = &view.pending {
        writeln!(out, "{pending:>width$}")?;
    }
    writeln!(out, "{:>width$}", view.display)?;
    Ok(())
}

/// Print the history panel, newest first.
fn render_history(out: &mut impl Write, session: &Session, config: &Config) -> io::Result<()> {
    let history = session.history();
    if history.is_empty() {
        return writeln!(out, "No recent calculations");
    }
    for record in history.iter() {
        writeln!(
            out,
            "{:<32} {}",
            record.to_string(),
            record.time_of_day(&config.display.time_format)
        )?;
    }
    Ok(())
}
