use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::engine::verify;
use crate::io::{read_instance_from_path, write_matching, write_matching_to_path};
use crate::types::elapsed::format_seconds;

#[derive(Debug, Args)]
pub struct SolveArgs {
    /// Instance file to read.
    #[arg(short, long)]
    pub input: PathBuf,

    /// File to write the matching to. Pairs go to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Check the matching for perfection and stability before writing it.
    #[arg(long)]
    pub verify: bool,
}

pub fn handle_command(args: SolveArgs) -> anyhow::Result<()> {
    let SolveArgs {
        input,
        output,
        verify: check,
    } = args;

    let instance = read_instance_from_path(&input)
        .with_context(|| format!("failed to read instance from {}", input.display()))?;
    let (result, receipt) = super::timed_solve(&instance)?;

    if check {
        verify(&instance, result.pairs()).context("matching failed verification")?;
        info!(n = instance.size(), "matching verified");
    }

    let Some(output) = output else {
        write_matching(io::stdout().lock(), result.pairs())?;
        info!(
            n = receipt.size,
            seconds = %format_seconds(receipt.elapsed_nanos),
            state_root = %receipt.state_root_hex(),
            "matched"
        );
        return Ok(());
    };

    write_matching_to_path(&output, result.pairs())
        .with_context(|| format!("failed to write matching to {}", output.display()))?;

    println!("Matched n = {} in {} seconds", receipt.size, format_seconds(receipt.elapsed_nanos));
    println!("  Proposals:   {:>12}", receipt.proposals);
    println!("  Rejections:  {:>12}", receipt.rejections);
    if let Some(average) = receipt.proposals_per_agent() {
        println!("  Per agent:   {:>12.2}", average);
    }
    println!("  State root:  {}", receipt.state_root_hex());
    println!("  Output:      {}", output.display());
    Ok(())
}
