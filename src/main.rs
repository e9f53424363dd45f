//! stable-match - Binary Entry Point
//!
//! See `stable-match --help` for the available commands.

use clap::Parser;
use stable_match::cli::{handle_command, setup_logger, Cli};

fn main() -> anyhow::Result<()> {
    let _guard = setup_logger();

    let Cli { command } = Cli::parse();
    handle_command(command)
}
