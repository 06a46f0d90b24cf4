//! Tripwire CLI - run one guarded puzzle solver over stdin.
//!
//! ```text
//! main() -> TripwireConfig::load() -> logging::init() -> crash_hardening::apply()
//!        -> read stdin -> Puzzle::solve(input, &Tripwire) -> one line on stdout
//! ```
//!
//! A fired guard never returns here. The diagnostic goes to stderr and the
//! process aborts (or exits non-zero when configured) with nothing on stdout.

mod crash_hardening;
mod logging;

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tripwire_config::TripwireConfig;
use tripwire_guard::Tripwire;
use tripwire_puzzles::Puzzle;

#[derive(Debug, Parser)]
#[command(name = "tripwire", version, about = "Run a guarded puzzle solver over stdin")]
struct Args {
    /// Puzzle to solve.
    #[arg(value_parser = parse_puzzle, required_unless_present = "list")]
    puzzle: Option<Puzzle>,

    /// Print the available puzzles and exit.
    #[arg(long)]
    list: bool,

    /// Config file to use instead of TRIPWIRE_CONFIG or ~/.tripwire/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn parse_puzzle(raw: &str) -> Result<Puzzle, String> {
    Puzzle::from_name(raw).ok_or_else(|| {
        let names: Vec<_> = Puzzle::ALL.iter().map(|puzzle| puzzle.name()).collect();
        format!("unknown puzzle {raw:?} (expected one of: {})", names.join(", "))
    })
}

fn print_list(out: &mut impl Write) -> io::Result<()> {
    for puzzle in Puzzle::ALL {
        writeln!(out, "{:<16}{}", puzzle.name(), puzzle.summary())?;
    }
    out.flush()
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list {
        print_list(&mut io::stdout().lock())?;
        return Ok(());
    }

    let config = TripwireConfig::load(args.config.as_deref())?.unwrap_or_default();
    logging::init(config.log_filter());

    if let Err(err) = crash_hardening::apply(config.allow_core_dumps()) {
        tracing::warn!("{err:#}");
    }

    let tripwire = Tripwire::new(config.policy());
    let puzzle = args.puzzle.context("no puzzle given")?;
    tracing::info!(%puzzle, policy = ?tripwire.policy(), "Starting");

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let answer = puzzle
        .solve(&input, &tripwire)
        .with_context(|| format!("invalid input for {puzzle}"))?;

    let mut out = io::stdout().lock();
    writeln!(out, "{answer}")?;
    out.flush()?;

    tracing::info!(%puzzle, "Finished");
    Ok(())
}
