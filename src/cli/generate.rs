use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::io::{generate_seeded, write_instance_to_path};

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Number of agents on each side.
    #[arg(short = 'n', long)]
    pub size: usize,

    /// Generator seed. A random seed is used (and logged) when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// File to write the instance to.
    #[arg(short, long)]
    pub output: PathBuf,
}

pub fn handle_command(args: GenerateArgs) -> anyhow::Result<()> {
    let GenerateArgs { size, seed, output } = args;
    let seed = super::resolve_seed(seed);

    let instance = generate_seeded(size, seed);
    write_instance_to_path(&output, &instance)
        .with_context(|| format!("failed to write instance to {}", output.display()))?;

    println!("Generated n = {} (seed {}) -> {}", size, seed, output.display());
    Ok(())
}
