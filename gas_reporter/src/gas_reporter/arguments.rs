//!
//! The gas reporter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The gas reporter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Prints the gas report table even for an empty run.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the console output completely.
    #[arg(short, long)]
    pub quiet: bool,

    /// The configuration file path.
    /// Is set to `.ethgas.yaml` by default, if it exists.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// The node JSON-RPC endpoint.
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// The compiled artifacts directory.
    #[arg(short, long)]
    pub artifacts: Option<PathBuf>,

    /// The Solidity sources directory used to filter artifacts.
    #[arg(short, long)]
    pub src: Option<PathBuf>,

    /// Prints the test duration next to the gas amount.
    #[arg(long)]
    pub show_time_spent: bool,

    /// The JSON gas report output path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// The newline-delimited JSON lifecycle event stream. Use `-` for stdin.
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Attributes all blocks from the specified one to the chain head as a single test.
    #[arg(long, conflicts_with = "events")]
    pub from_block: Option<u64>,
}

impl Arguments {
    ///
    /// Validates the arguments.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.verbose && arguments.quiet {
            anyhow::bail!("The `--verbose` and `--quiet` arguments are mutually exclusive.");
        }
        if arguments.events.is_none() && arguments.from_block.is_none() {
            anyhow::bail!(
                "Either an event stream via `--events` or a start block via `--from-block` is required."
            );
        }

        Ok(arguments)
    }
}
