//! Command-line harness.
//!
//! ```sh
//! stable-match generate --size 100 --seed 7 --output input_100.txt
//! stable-match solve --input input_100.txt --output output_100.txt --verify
//! stable-match sweep --sizes 10,50,100,500,1000 --dir runs/
//! ```
//!
//! Logging goes to stderr and is configured with `RUST_LOG`
//! (default `warn`). Reports go to stdout.

use std::io::IsTerminal;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::engine::MatchResult;
use crate::error::MatchError;
use crate::types::{Instance, MatchReceipt};

pub mod generate;
pub mod solve;
pub mod sweep;

#[derive(Debug, Parser)]
#[command(name = "stable-match", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a random instance of the given size.
    Generate(generate::GenerateArgs),
    /// Match the instance in a file.
    Solve(solve::SolveArgs),
    /// Generate, solve and time a series of instance sizes.
    Sweep(sweep::SweepArgs),
}

pub fn handle_command(cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Generate(args) => generate::handle_command(args),
        Command::Solve(args) => solve::handle_command(args),
        Command::Sweep(args) => sweep::handle_command(args),
    }
}

pub fn setup_logger() -> tracing::subscriber::DefaultGuard {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .with(filter)
        .set_default()
}

/// Run the engine on `instance`, timing only the engine call.
pub fn timed_solve(instance: &Instance) -> Result<(MatchResult, MatchReceipt), MatchError> {
    let start = Instant::now();
    let result = instance.solve()?;
    let elapsed = start.elapsed();

    let receipt = MatchReceipt::from_result(&result, elapsed);
    Ok((result, receipt))
}

/// Seed to use for generation: the given one, or a fresh random one.
fn resolve_seed(seed: Option<u64>) -> u64 {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "using generator seed");
    seed
}
