//! Scalability sweep: for each size, generate an instance file, read it back,
//! time the engine, write the matching, and report.
//!
//! Files are named `input_{n}.txt` and `output_{n}.txt` inside the sweep
//! directory. One seeded RNG is shared by all sizes, so a seed reproduces the
//! whole sweep.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::engine::verify;
use crate::io::{generate_instance, read_instance_from_path, write_instance_to_path, write_matching_to_path};
use crate::types::elapsed::format_seconds;
use crate::types::MatchReceipt;

/// Sizes used when none are given
pub const DEFAULT_SIZES: [usize; 5] = [10, 50, 100, 500, 1000];

#[derive(Debug, Args)]
pub struct SweepArgs {
    /// Comma-separated instance sizes.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
    pub sizes: Vec<usize>,

    /// Generator seed. A random seed is used (and logged) when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for input and output files.
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Check every matching for perfection and stability.
    #[arg(long)]
    pub verify: bool,
}

/// Settings for one sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    pub sizes: Vec<usize>,
    pub seed: u64,
    pub dir: PathBuf,
    pub verify: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            seed: 0,
            dir: PathBuf::from("."),
            verify: false,
        }
    }
}

impl SweepConfig {
    pub fn input_path(&self, size: usize) -> PathBuf {
        self.dir.join(format!("input_{}.txt", size))
    }

    pub fn output_path(&self, size: usize) -> PathBuf {
        self.dir.join(format!("output_{}.txt", size))
    }
}

pub fn handle_command(args: SweepArgs) -> anyhow::Result<()> {
    let config = SweepConfig {
        sizes: args.sizes,
        seed: super::resolve_seed(args.seed),
        dir: args.dir,
        verify: args.verify,
    };

    let receipts = run_sweep(&config, |receipt| {
        println!(
            "Processed size: {}, Time taken: {} seconds",
            receipt.size,
            format_seconds(receipt.elapsed_nanos)
        );
    })?;

    println!("\nSummary of Execution Times:");
    for receipt in &receipts {
        println!("n = {}: {} sec", receipt.size, format_seconds(receipt.elapsed_nanos));
    }
    Ok(())
}

/// Run every size in `config`, calling `on_size` after each one.
///
/// # Returns
///
/// One receipt per size, in the order the sizes were given.
pub fn run_sweep<F>(config: &SweepConfig, mut on_size: F) -> anyhow::Result<Vec<MatchReceipt>>
where
    F: FnMut(&MatchReceipt),
{
    fs::create_dir_all(&config.dir)
        .with_context(|| format!("failed to create {}", config.dir.display()))?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut receipts = Vec::with_capacity(config.sizes.len());

    for &size in &config.sizes {
        let input = config.input_path(size);
        let output = config.output_path(size);

        write_instance_to_path(&input, &generate_instance(size, &mut rng))
            .with_context(|| format!("failed to write {}", input.display()))?;
        let instance = read_instance_from_path(&input)
            .with_context(|| format!("failed to read {}", input.display()))?;

        let (result, receipt) = super::timed_solve(&instance)?;
        if config.verify {
            verify(&instance, result.pairs())
                .with_context(|| format!("matching for n = {} failed verification", size))?;
        }

        write_matching_to_path(&output, result.pairs())
            .with_context(|| format!("failed to write {}", output.display()))?;

        info!(
            n = size,
            proposals = receipt.proposals,
            state_root = %receipt.state_root_hex(),
            "sweep step done"
        );
        on_size(&receipt);
        receipts.push(receipt);
    }

    Ok(receipts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_config_paths() {
        let config = SweepConfig {
            dir: PathBuf::from("runs"),
            ..SweepConfig::default()
        };

        assert_eq!(config.sizes, vec![10, 50, 100, 500, 1000]);
        assert_eq!(config.input_path(50), PathBuf::from("runs/input_50.txt"));
        assert_eq!(config.output_path(50), PathBuf::from("runs/output_50.txt"));
    }
}
